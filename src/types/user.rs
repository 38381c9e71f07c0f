//! The user payload stored at every node of a social graph.

use serde::{Deserialize, Serialize};

/// A user record: numeric identity plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    /// User ID, also the node key in a [`crate::UserGraph`].
    pub id: u64,
    /// Display name.
    pub name: String,
}

impl UserData {
    /// Create a new user record.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Label used when rendering the user.
    pub fn title(&self) -> &str {
        &self.name
    }
}
