use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use utoipa::ToSchema;

/// Media category a client uploads into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    Video,
    Audio,
}

/// Fixed acceptance policy for one category.
///
/// `allowed_extensions` is the only input to the accept/reject decision.
/// `accept_mime_hints` is what a client file picker may restrict itself to;
/// it is never consulted on the server side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryPolicy {
    pub label: &'static str,
    pub allowed_extensions: &'static [&'static str],
    pub accept_mime_hints: &'static [&'static str],
}

pub const VIDEO_POLICY: CategoryPolicy = CategoryPolicy {
    label: "video",
    allowed_extensions: &["mp4", "mkv", "mov"],
    accept_mime_hints: &["video/mp4", "video/x-matroska", "video/quicktime"],
};

pub const AUDIO_POLICY: CategoryPolicy = CategoryPolicy {
    label: "audio",
    allowed_extensions: &["mp3", "wav", "m4a"],
    accept_mime_hints: &["audio/mpeg", "audio/wav", "audio/mp4", "audio/x-m4a"],
};

impl MediaCategory {
    pub const ALL: [MediaCategory; 2] = [MediaCategory::Video, MediaCategory::Audio];

    pub fn policy(&self) -> &'static CategoryPolicy {
        match self {
            MediaCategory::Video => &VIDEO_POLICY,
            MediaCategory::Audio => &AUDIO_POLICY,
        }
    }

    pub fn label(&self) -> &'static str {
        self.policy().label
    }

    /// Whether a sniffed extension is acceptable for this category.
    pub fn allows(&self, extension: &str) -> bool {
        self.policy()
            .allowed_extensions
            .iter()
            .any(|allowed| *allowed == extension)
    }

    /// Allowed extensions joined for display, e.g. `mp4, mkv, mov`.
    pub fn allowed_list(&self) -> String {
        self.policy().allowed_extensions.join(", ")
    }
}

impl FromStr for MediaCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "video" => Ok(MediaCategory::Video),
            "audio" => Ok(MediaCategory::Audio),
            _ => Err(anyhow::anyhow!("Unsupported media category: {}", s)),
        }
    }
}

impl Display for MediaCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}
