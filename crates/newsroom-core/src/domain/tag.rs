use serde::{Deserialize, Serialize};

use super::UNSAVED_ID;

/// Tag entity - a label attached to any number of news items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

impl Tag {
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
