//! Showcase scripts for the Single Responsibility principle.

use super::{violation, AuthenticationManager, UserManager};
use crate::framework::{Console, Showcase, ShowcaseError, ShowcaseKind};
use crate::model::{Principle, User};

fn roster() -> [User; 4] {
    [
        User::new(1, "Kanishk"),
        User::new(2, "Rohan"),
        User::new(3, "Karan"),
        User::new(4, "Vishnu"),
    ]
}

/// One manager that stores users and authenticates them.
pub struct CombinedManagerShowcase;

impl Showcase for CombinedManagerShowcase {
    fn principle(&self) -> Principle {
        Principle::SingleResponsibility
    }

    fn kind(&self) -> ShowcaseKind {
        ShowcaseKind::Violation
    }

    fn title(&self) -> &'static str {
        "Single Responsibility (violation)"
    }

    fn run(&self, out: &dyn Console) -> Result<(), ShowcaseError> {
        let mut manager = violation::UserManager::new();
        for user in roster() {
            manager.add_user(user, out);
        }

        manager.authenticate_user(1, "Kanishk", out);
        manager.authenticate_user(3, "Rohan", out);
        manager.remove_user(1, out);
        manager.authenticate_user(1, "Kanishk", out);
        Ok(())
    }
}

/// Collection management and authentication as two collaborating types.
pub struct SplitManagersShowcase;

impl Showcase for SplitManagersShowcase {
    fn principle(&self) -> Principle {
        Principle::SingleResponsibility
    }

    fn kind(&self) -> ShowcaseKind {
        ShowcaseKind::Refactored
    }

    fn title(&self) -> &'static str {
        "Single Responsibility (refactored)"
    }

    fn run(&self, out: &dyn Console) -> Result<(), ShowcaseError> {
        let mut user_manager = UserManager::new();
        for user in roster() {
            user_manager.add_user(user, out);
        }

        let authentication_manager = AuthenticationManager::new();
        authentication_manager.authenticate_user(1, "Kanishk", user_manager.users(), out);
        authentication_manager.authenticate_user(3, "Rohan", user_manager.users(), out);

        user_manager.remove_user(1, out);

        // Fails now: the snapshot no longer contains user 1.
        authentication_manager.authenticate_user(1, "Kanishk", user_manager.users(), out);
        Ok(())
    }
}
