use serde::{Deserialize, Serialize};

/// A registered user record.
///
/// Stored in insertion order by [`UserManager`](crate::single_responsibility::UserManager)
/// and never mutated in place: removing and re-adding is the only way to change one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier used for removal and authentication
    /// * `name` - User's display name
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns true when both the id and the name match.
    pub fn matches(&self, id: u32, name: &str) -> bool {
        self.id == id && self.name == name
    }
}
