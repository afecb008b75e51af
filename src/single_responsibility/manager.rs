use crate::framework::Console;
use crate::model::User;
use tracing::{debug, info, instrument};

/// Owns the user collection: add, remove and list. Nothing else.
///
/// Authentication lives in [`AuthenticationManager`](super::AuthenticationManager),
/// which reads a snapshot from [`UserManager::users`] instead of reaching in here.
#[derive(Debug, Default)]
pub struct UserManager {
    users: Vec<User>,
}

impl UserManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a user, keeping insertion order.
    #[instrument(skip(self, out), fields(user_id = user.id))]
    pub fn add_user(&mut self, user: User, out: &dyn Console) {
        out.line(&format!("User {} added successfully.", user.name));
        self.users.push(user);
        info!(size = self.users.len(), "Added");
    }

    /// Removes every user with the given id. Absent ids are a no-op.
    #[instrument(skip(self, out))]
    pub fn remove_user(&mut self, id: u32, out: &dyn Console) {
        let before = self.users.len();
        self.users.retain(|user| user.id != id);
        debug!(removed = before - self.users.len(), "Filtered");
        out.line(&format!("User with ID {id} removed."));
        info!(size = self.users.len(), "Removed");
    }

    /// Snapshot of the current users, in insertion order.
    pub fn users(&self) -> &[User] {
        &self.users
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::Transcript;

    #[test]
    fn keeps_insertion_order() {
        let out = Transcript::new();
        let mut manager = UserManager::new();
        manager.add_user(User::new(2, "Rohan"), &out);
        manager.add_user(User::new(1, "Kanishk"), &out);

        let names: Vec<&str> = manager.users().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Rohan", "Kanishk"]);
    }

    #[test]
    fn remove_filters_by_id() {
        let out = Transcript::new();
        let mut manager = UserManager::new();
        manager.add_user(User::new(1, "Kanishk"), &out);
        manager.add_user(User::new(2, "Rohan"), &out);

        manager.remove_user(1, &out);

        assert_eq!(manager.users(), &[User::new(2, "Rohan")]);
        assert_eq!(out.lines().last().map(String::as_str), Some("User with ID 1 removed."));
    }

    #[test]
    fn removing_missing_id_is_a_no_op() {
        let out = Transcript::new();
        let mut manager = UserManager::new();
        manager.add_user(User::new(1, "Kanishk"), &out);

        manager.remove_user(42, &out);

        assert_eq!(manager.users().len(), 1);
        assert_eq!(out.lines().last().map(String::as_str), Some("User with ID 42 removed."));
    }
}
