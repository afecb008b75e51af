use super::Database;
use crate::framework::Console;
use tracing::{info, instrument};

/// Saves user data through whichever [`Database`] it was given.
///
/// The database is borrowed, not owned: the same instance can back any
/// number of services.
///
/// # Example
/// ```
/// use solid_recipe::dependency_inversion::{H2Db, UserService};
/// use solid_recipe::framework::mock::Transcript;
///
/// let out = Transcript::new();
/// let h2 = H2Db;
/// UserService::new(&h2).save_user_data("Kanishk", &out);
///
/// assert_eq!(
///     out.lines(),
///     vec![
///         "Connecting H2 in-memory database.",
///         "Saving user data : [Kanishk] to DB : [H2]",
///     ]
/// );
/// ```
pub struct UserService<'a> {
    database: &'a dyn Database,
}

impl<'a> UserService<'a> {
    /// Injects the database the service will use.
    pub fn new(database: &'a dyn Database) -> Self {
        Self { database }
    }

    #[instrument(skip(self, out), fields(database = self.database.name()))]
    pub fn save_user_data(&self, data: &str, out: &dyn Console) {
        self.database.connect(out);
        out.line(&format!(
            "Saving user data : [{}] to DB : [{}]",
            data,
            self.database.name()
        ));
        info!("Saved");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_inversion::{NoSqlDb, SqlDb};
    use crate::framework::mock::Transcript;

    /// Test double: records connections instead of printing a banner.
    struct CountingDb {
        connections: std::cell::Cell<u32>,
    }

    impl Database for CountingDb {
        fn name(&self) -> &str {
            "Counting"
        }

        fn connect(&self, _out: &dyn Console) {
            self.connections.set(self.connections.get() + 1);
        }
    }

    #[test]
    fn connects_before_saving() {
        let out = Transcript::new();
        out.expect_lines([
            "Connecting SQL database.",
            "Saving user data : [Kanishk] to DB : [SQL]",
        ]);

        UserService::new(&SqlDb).save_user_data("Kanishk", &out);

        out.verify();
    }

    #[test]
    fn one_database_shared_by_many_services() {
        let out = Transcript::new();
        let db = CountingDb {
            connections: std::cell::Cell::new(0),
        };

        let first = UserService::new(&db);
        let second = UserService::new(&db);
        first.save_user_data("a", &out);
        second.save_user_data("b", &out);

        assert_eq!(db.connections.get(), 2);
        assert_eq!(
            out.lines(),
            vec![
                "Saving user data : [a] to DB : [Counting]",
                "Saving user data : [b] to DB : [Counting]",
            ]
        );
    }

    #[test]
    fn service_is_identical_across_variants() {
        let out = Transcript::new();
        UserService::new(&NoSqlDb).save_user_data("Kanishk", &out);
        assert_eq!(out.lines()[1], "Saving user data : [Kanishk] to DB : [NoSQL]");
    }
}
