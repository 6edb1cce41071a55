use serde::{Deserialize, Serialize};

/// Lifecycle metadata carried by every record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Bumped on every committed edit.
    pub version: i32,
}

impl EntityMetadata {
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            version: 0,
        }
    }

    pub fn at(created_at: chrono::DateTime<chrono::Utc>) -> Self {
        Self {
            created_at,
            updated_at: created_at,
            version: 0,
        }
    }

    /// Refresh `updated_at` and bump the version.
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
        self.version += 1;
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}
