//! Typed records for the itch.io API.
//!
//! Passive mirrors of what the platform serves: accounts, game pages,
//! uploads, collections, download keys and wharf builds, tagged for the
//! platform's JSON wire format. The platform is the single source of
//! truth; these records are populated from responses and never written
//! back.
//!
//! Decoding follows the wire contract's partial-payload rule: any field a
//! response omits lands at its zero/empty default rather than failing. Use
//! the [`decode`] helpers to get errors tagged with the entity kind, or feed
//! the types to `serde_json` directly.
//!
//! With the `sqlx` feature enabled, the flat entities additionally derive
//! row mappings for a local relational cache. Fields that are wire-only by
//! contract (the denormalized `DownloadKey::game` embed) are excluded from
//! that mapping.

pub mod build;
pub mod collection;
pub mod decode;
pub mod download_key;
pub mod entity;
pub mod error;
pub mod game;
pub mod upload;
pub mod user;

pub mod prelude {
    pub use crate::build::{
        Build, BuildFile, BuildFileState, BuildFileSubType, BuildFileType, BuildState,
    };
    pub use crate::collection::Collection;
    pub use crate::decode::{from_json_slice, from_json_str, from_json_value};
    pub use crate::download_key::DownloadKey;
    pub use crate::entity::Entity;
    pub use crate::error::DecodeError;
    pub use crate::game::Game;
    pub use crate::upload::Upload;
    pub use crate::user::User;
}
