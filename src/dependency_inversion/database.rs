use crate::framework::Console;

/// The abstraction both sides depend on.
///
/// [`UserService`](super::UserService) knows nothing about how a connection is
/// made, only that the database has a name and can connect.
pub trait Database {
    fn name(&self) -> &str;
    fn connect(&self, out: &dyn Console);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SqlDb;

impl Database for SqlDb {
    fn name(&self) -> &str {
        "SQL"
    }

    fn connect(&self, out: &dyn Console) {
        out.line("Connecting SQL database.");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoSqlDb;

impl Database for NoSqlDb {
    fn name(&self) -> &str {
        "NoSQL"
    }

    fn connect(&self, out: &dyn Console) {
        out.line("Connecting NoSQL database.");
    }
}

/// In-memory database.
#[derive(Debug, Default, Clone, Copy)]
pub struct H2Db;

impl Database for H2Db {
    fn name(&self) -> &str {
        "H2"
    }

    fn connect(&self, out: &dyn Console) {
        out.line("Connecting H2 in-memory database.");
    }
}
