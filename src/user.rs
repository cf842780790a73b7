use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// An itch.io account, with basic profile info.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    /// Unique identifier assigned by the platform.
    pub id: i64,
    /// Login handle.
    pub username: String,
    /// Human-friendly name; may contain spaces or unicode.
    pub display_name: String,
    /// Has the account opted into publishing games?
    pub developer: bool,
    /// Is the account part of the press program?
    pub press_user: bool,
    /// Address of the user's profile page.
    pub url: String,
    /// Avatar; may point at an animated image.
    pub cover_url: String,
    /// Static avatar, set only when `cover_url` is animated.
    pub still_cover_url: String,
}

impl Entity for User {
    const KIND: &'static str = "user";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_payload_decodes_with_defaults() {
        let user: User =
            serde_json::from_str(r#"{"id":1,"username":"alice","developer":true}"#).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.username, "alice");
        assert!(user.developer);
        assert_eq!(user.display_name, "");
        assert!(!user.press_user);
        assert_eq!(user.still_cover_url, "");
    }

    #[test]
    fn test_round_trip() {
        let user = User {
            id: 29789,
            username: "fasterthanlime".to_string(),
            display_name: "Amos".to_string(),
            developer: true,
            press_user: true,
            url: "https://fasterthanlime.itch.io".to_string(),
            cover_url: "https://img.itch.zone/avatar.gif".to_string(),
            still_cover_url: "https://img.itch.zone/avatar-still.png".to_string(),
        };
        let encoded = serde_json::to_string(&user).unwrap();
        let decoded: User = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, user);
    }

    #[test]
    fn test_wire_keys_are_camel_case() {
        let value = serde_json::to_value(User::default()).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert!(keys.contains(&"displayName"));
        assert!(keys.contains(&"pressUser"));
        assert!(keys.contains(&"coverUrl"));
        assert!(keys.contains(&"stillCoverUrl"));
    }
}
