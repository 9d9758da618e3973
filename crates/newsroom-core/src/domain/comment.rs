use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UNSAVED_ID;

/// Comment entity - always attached to exactly one news item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub news_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new, not yet persisted comment.
    pub fn new(news_id: i64, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: UNSAVED_ID,
            news_id,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_new(&self) -> bool {
        self.id == UNSAVED_ID
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
