use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::game::Game;

/// A grant of access to a game's restricted uploads, usually created at
/// purchase time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(default, rename_all = "camelCase")]
pub struct DownloadKey {
    /// Unique identifier assigned by the platform.
    pub id: i64,
    /// Identifier of the game this key unlocks.
    pub game_id: i64,
    /// Denormalized copy of the referenced game, embedded only when the
    /// caller asks for it. Omitted from the wire when absent (never
    /// emitted as null), and never written to a local cache row; the
    /// canonical record lives under `game_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "sqlx", sqlx(skip))]
    pub game: Option<Game>,
    /// Creation date; usually coincides with the purchase.
    pub created_at: String,
    pub updated_at: String,
    /// Identifier of the user holding this key.
    pub owner_id: i64,
}

impl Entity for DownloadKey {
    const KIND: &'static str = "downloadKey";
}
