use serde::{Deserialize, Serialize};

use crate::build::Build;
use crate::entity::Entity;

/// A downloadable file attached to a [`Game`](crate::game::Game).
///
/// Channel-backed ("wharf-enabled") uploads are not a single static file
/// but a named version history of builds; for those, `channel_name` is set
/// and `build` carries a snapshot of the latest build on the channel. The
/// build persists independently on the platform, the upload merely points
/// at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Upload {
    /// Unique identifier assigned by the platform.
    pub id: i64,
    /// Original file name, e.g. `Overland_x64.zip`.
    pub filename: String,
    /// Human-friendly label set by the developer.
    pub display_name: String,
    /// Size in bytes. For channel-backed uploads this is the archive size,
    /// not the decompressed size.
    pub size: i64,
    /// Name of the channel backing this upload. Empty for static uploads.
    pub channel_name: String,
    /// Latest build on the channel, if this upload is channel-backed.
    pub build: Option<Build>,
    /// Is this a demo that can be downloaded for free?
    pub demo: bool,
    /// Is this a pre-order placeholder?
    pub preorder: bool,
    /// `default`, `soundtrack`, etc. Open string; the platform may add
    /// values.
    #[serde(rename = "type")]
    pub upload_type: String,
    /// Creator-asserted macOS compatibility. Not derived from the game's
    /// flags.
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
    pub created_at: String,
    pub updated_at: String,
}

impl Upload {
    /// Whether this upload is backed by a channel rather than a single
    /// static file.
    pub fn is_channel_backed(&self) -> bool {
        !self.channel_name.is_empty()
    }
}

impl Entity for Upload {
    const KIND: &'static str = "upload";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::BuildState;

    #[test]
    fn test_static_upload_has_no_build() {
        let payload = r#"{"id":55,"filename":"game.zip","size":1048576}"#;
        let upload: Upload = serde_json::from_str(payload).unwrap();
        assert_eq!(upload.build, None);
        assert_eq!(upload.channel_name, "");
        assert!(!upload.is_channel_backed());
    }

    #[test]
    fn test_channel_backed_upload_embeds_latest_build() {
        let payload = r#"{
            "id": 56,
            "filename": "game-linux.zip",
            "channelName": "linux-stable",
            "build": {"id": 900, "version": 4, "state": "completed"}
        }"#;
        let upload: Upload = serde_json::from_str(payload).unwrap();
        assert!(upload.is_channel_backed());
        let build = upload.build.as_ref().unwrap();
        assert_eq!(build.id, 900);
        assert_eq!(build.version, 4);
        assert_eq!(build.state, BuildState::Completed);
    }

    #[test]
    fn test_platform_flags_independent_of_each_other() {
        let payload = r#"{"id":57,"pOsx":true,"pWindows":true}"#;
        let upload: Upload = serde_json::from_str(payload).unwrap();
        assert!(upload.osx && upload.windows);
        assert!(!upload.linux && !upload.android);
    }

    #[test]
    fn test_round_trip() {
        let upload = Upload {
            id: 412,
            filename: "Overland_x64.zip".to_string(),
            display_name: "Overland for Windows 64-bit".to_string(),
            size: 52_428_800,
            channel_name: "windows-stable".to_string(),
            build: Some(Build {
                id: 7878,
                version: 12,
                ..Build::default()
            }),
            demo: false,
            preorder: true,
            upload_type: "default".to_string(),
            osx: false,
            linux: false,
            windows: true,
            android: false,
            created_at: "2016-04-01 10:00:00".to_string(),
            updated_at: "2017-02-01 08:01:00".to_string(),
        };
        let encoded = serde_json::to_string(&upload).unwrap();
        let decoded: Upload = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, upload);
    }
}
