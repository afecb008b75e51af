//! The design before the split: one type with two reasons to change.
//!
//! `UserManager` here both maintains the collection and authenticates against
//! it, so a change to either concern means editing the same type.

use crate::framework::Console;
use crate::model::User;
use tracing::{info, warn};

#[derive(Debug, Default)]
pub struct UserManager {
    users: Vec<User>,
}

impl UserManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&mut self, user: User, out: &dyn Console) {
        out.line(&format!("User {} added successfully.", user.name));
        self.users.push(user);
    }

    pub fn remove_user(&mut self, id: u32, out: &dyn Console) {
        self.users.retain(|user| user.id != id);
        out.line(&format!("User with ID {id} removed."));
    }

    // Authentication has nothing to do with keeping the list.
    pub fn authenticate_user(&self, id: u32, name: &str, out: &dyn Console) -> bool {
        if self.users.iter().any(|user| user.matches(id, name)) {
            info!(id, name, "Authenticated");
            out.line(&format!("User {name} authenticated successfully."));
            true
        } else {
            warn!(id, name, "Authentication failed");
            out.line(&format!("Authentication failed for {name}."));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::Transcript;

    #[test]
    fn combined_manager_still_works() {
        let out = Transcript::new();
        let mut manager = UserManager::new();
        manager.add_user(User::new(1, "A"), &out);
        assert!(manager.authenticate_user(1, "A", &out));
        manager.remove_user(1, &out);
        assert!(!manager.authenticate_user(1, "A", &out));
    }
}
