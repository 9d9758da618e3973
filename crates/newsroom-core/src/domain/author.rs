use serde::{Deserialize, Serialize};

use super::UNSAVED_ID;

/// Author entity - the writer of zero or more news items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub name: String,
}

impl Author {
    pub fn new(name: String) -> Self {
        Self {
            id: UNSAVED_ID,
            name,
        }
    }

    pub fn is_new(&self) -> bool {
        self.id == UNSAVED_ID
    }
}
