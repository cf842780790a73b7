use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// A page on itch.io. Despite the name it is not always a game: the same
/// record covers tools, comics, soundtracks and so on, distinguished by
/// [`classification`](Game::classification).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(default, rename_all = "camelCase")]
pub struct Game {
    /// Unique identifier assigned by the platform.
    pub id: i64,
    /// Canonical address of the page.
    pub url: String,
    /// Human-friendly title; may contain any character.
    pub title: String,
    /// Human-friendly short description.
    pub short_text: String,
    /// Delivery type: `downloadable`, `html`, etc. The platform may
    /// introduce new values, so this stays an open string.
    #[serde(rename = "type")]
    pub game_type: String,
    /// `game`, `tool`, `comic`, etc. Open string, same reason as
    /// [`game_type`](Game::game_type).
    pub classification: String,
    /// Cover image; may point at an animated image.
    pub cover_url: String,
    /// Static cover, set only when `cover_url` is animated.
    pub still_cover_url: String,
    /// Date the page was created, in the platform's date-time format.
    pub created_at: String,
    /// Date the page was published. Empty while unpublished.
    pub published_at: String,
    /// Minimum price in cents of a dollar.
    pub min_price: i64,
    /// Can press users download this for free?
    pub in_press_system: bool,
    /// Does this page have a free demo upload?
    pub has_demo: bool,
    /// Creator-asserted macOS compatibility. Not derived from uploads.
    #[serde(rename = "pOsx")]
    pub osx: bool,
    /// Creator-asserted Linux compatibility.
    #[serde(rename = "pLinux")]
    pub linux: bool,
    /// Creator-asserted Windows compatibility.
    #[serde(rename = "pWindows")]
    pub windows: bool,
    /// Creator-asserted Android compatibility.
    #[serde(rename = "pAndroid")]
    pub android: bool,
}

impl Game {
    /// The wire contract uses an empty `published_at` as the "not
    /// published" sentinel.
    pub fn is_published(&self) -> bool {
        !self.published_at.is_empty()
    }
}

impl Entity for Game {
    const KIND: &'static str = "game";
}
