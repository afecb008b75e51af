use crate::framework::Console;
use crate::model::User;
use tracing::{info, instrument, warn};

/// Decides whether an (id, name) pair belongs to a known user.
///
/// Holds no state. The collection is passed in at call time and only read.
#[derive(Debug, Default, Clone, Copy)]
pub struct AuthenticationManager;

impl AuthenticationManager {
    pub fn new() -> Self {
        Self
    }

    /// Returns true when `users` contains a user with both this id and name.
    #[instrument(skip(self, users, out), fields(candidates = users.len()))]
    pub fn authenticate_user(&self, id: u32, name: &str, users: &[User], out: &dyn Console) -> bool {
        if users.iter().any(|user| user.matches(id, name)) {
            info!("Authenticated");
            out.line(&format!("User {name} authenticated successfully."));
            true
        } else {
            warn!("Authentication failed");
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
    fn requires_both_id_and_name() {
        let out = Transcript::new();
        let users = vec![User::new(1, "Kanishk"), User::new(2, "Rohan")];
        let auth = AuthenticationManager::new();

        assert!(auth.authenticate_user(1, "Kanishk", &users, &out));
        assert!(!auth.authenticate_user(1, "Rohan", &users, &out));
        assert!(!auth.authenticate_user(3, "Karan", &users, &out));

        assert_eq!(
            out.lines(),
            vec![
                "User Kanishk authenticated successfully.",
                "Authentication failed for Rohan.",
                "Authentication failed for Karan.",
            ]
        );
    }

    #[test]
    fn empty_snapshot_always_fails() {
        let out = Transcript::new();
        assert!(!AuthenticationManager.authenticate_user(1, "A", &[], &out));
    }
}
