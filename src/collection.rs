use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// A human-curated, ordered set of games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(default, rename_all = "camelCase")]
pub struct Collection {
    /// Unique identifier assigned by the platform.
    pub id: i64,
    /// Human-friendly title, e.g. `Couch coop games`.
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
    /// Advisory count. May overcount relative to what a given viewer can
    /// actually see (deleted pages, visibility changes).
    pub games_count: i64,
}

impl Entity for Collection {
    const KIND: &'static str = "collection";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let collection = Collection {
            id: 4117,
            title: "Couch coop games".to_string(),
            created_at: "2015-11-20 18:06:10".to_string(),
            updated_at: "2018-01-04 09:12:45".to_string(),
            games_count: 37,
        };
        let encoded = serde_json::to_string(&collection).unwrap();
        let decoded: Collection = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, collection);
    }

    #[test]
    fn test_games_count_wire_key() {
        let value = serde_json::to_value(Collection::default()).unwrap();
        assert!(value.as_object().unwrap().contains_key("gamesCount"));
    }
}
