//! The design before inversion: the service builds its own database.
//!
//! `UserService::new` hardcodes `Database`, so swapping in another store (or a
//! test double) means editing the service.

use crate::framework::Console;

#[derive(Debug, Default, Clone, Copy)]
pub struct Database;

impl Database {
    pub fn connect(&self, out: &dyn Console) {
        out.line("Connecting to database...");
    }
}

#[derive(Debug)]
pub struct UserService {
    database: Database,
}

impl UserService {
    pub fn new() -> Self {
        // Tight coupling: the concrete collaborator is created here.
        Self { database: Database }
    }

    pub fn save_user_data(&self, user_data: &str, out: &dyn Console) {
        self.database.connect(out);
        out.line(&format!("Saving user data: {user_data}"));
    }
}

impl Default for UserService {
    fn default() -> Self {
        Self::new()
    }
}
