use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UNSAVED_ID;

/// News entity - a published article written by one author.
///
/// Tags and comments are associations owned by the store; they are not
/// carried on the entity itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct News {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl News {
    /// Create a new, not yet persisted news item.
    pub fn new(author_id: i64, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: UNSAVED_ID,
            author_id,
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_new(&self) -> bool {
        self.id == UNSAVED_ID
    }

    /// Bump the modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
