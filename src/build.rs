use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::user::User;

/// Lifecycle of a build as last reported by the platform's processing
/// pipeline. The state machine itself lives on the platform side; this
/// crate only records the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BuildState {
    #[default]
    Started,
    Processing,
    Completed,
    Failed,
}

/// Processing status of a single build file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BuildFileState {
    #[default]
    Created,
    Uploading,
    Uploaded,
}

/// Role of a file within a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BuildFileType {
    #[default]
    Archive,
    Patch,
    Signature,
    Manifest,
    Unpacked,
}

/// Storage variant of a build file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BuildFileSubType {
    #[default]
    Default,
    Gzip,
    Optimized,
}

/// One file attached to a build: typically an archive, a signature and a
/// patch. Entries may be missing while processing is incomplete or failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildFile {
    /// Unique identifier assigned by the platform.
    pub id: i64,
    /// Size in bytes.
    pub size: i64,
    pub state: BuildFileState,
    #[serde(rename = "type")]
    pub file_type: BuildFileType,
    pub sub_type: BuildFileSubType,
    pub created_at: String,
    pub updated_at: String,
}

/// One immutable snapshot in a channel's version history.
///
/// Builds form a linked predecessor chain through
/// [`parent_build_id`](Build::parent_build_id), not a tree: each build has
/// at most one parent, and the chain terminates at the channel's initial
/// build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Build {
    /// Unique identifier assigned by the platform.
    pub id: i64,
    /// Identifier of the previous build on the same channel, or 0 for the
    /// channel's initial build. Prefer [`parent`](Build::parent), which
    /// maps the sentinel away.
    pub parent_build_id: i64,
    pub state: BuildState,
    /// Automatically incremented per channel, starting at 1 and strictly
    /// increasing along the chain.
    pub version: i64,
    /// Free-text version supplied by the developer at push time. Not
    /// guaranteed unique within a channel.
    pub user_version: String,
    /// Associated files, in the order the platform reports them.
    pub files: Vec<BuildFile>,
    /// Snapshot of the account that pushed this build.
    pub user: User,
    pub created_at: String,
    pub updated_at: String,
}

impl Build {
    /// Identifier of the predecessor build, or `None` for the channel's
    /// initial build. The wire encodes "no parent" as 0, which is never a
    /// real build id.
    pub fn parent(&self) -> Option<i64> {
        if self.parent_build_id == 0 {
            None
        } else {
            Some(self.parent_build_id)
        }
    }
}

impl Entity for Build {
    const KIND: &'static str = "build";
}

impl Entity for BuildFile {
    const KIND: &'static str = "buildFile";
}
