use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Destination system for a stored post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    WordPress,
    Medium,
    Ghost,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::WordPress => write!(f, "wordpress"),
            Platform::Medium => write!(f, "medium"),
            Platform::Ghost => write!(f, "ghost"),
        }
    }
}

impl Platform {
    /// Tolerant parse of a stored platform string. Unknown values return None
    /// rather than defaulting — an unrecognized platform must surface as
    /// unsupported, not get silently rerouted.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "wordpress" | "wp" => Some(Self::WordPress),
            "medium" => Some(Self::Medium),
            "ghost" => Some(Self::Ghost),
            _ => None,
        }
    }
}

/// A content record awaiting publication. Owned by the external system that
/// created it; the publish job only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    /// Pre-formatted body (HTML or rich text). Not validated here.
    pub content: String,
    /// Raw platform tag as stored. Parse with [`Platform::from_str_loose`].
    pub platform: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn platform(&self) -> Option<Platform> {
        Platform::from_str_loose(&self.platform)
    }
}
