//! Showcase scripts for the Dependency Inversion principle.

use super::{violation, Database, H2Db, NoSqlDb, SqlDb, UserService};
use crate::framework::{Console, Showcase, ShowcaseError, ShowcaseKind};
use crate::model::Principle;

/// Service hardwired to one concrete database.
pub struct HardwiredDatabaseShowcase;

impl Showcase for HardwiredDatabaseShowcase {
    fn principle(&self) -> Principle {
        Principle::DependencyInversion
    }

    fn kind(&self) -> ShowcaseKind {
        ShowcaseKind::Violation
    }

    fn title(&self) -> &'static str {
        "Dependency Inversion (violation)"
    }

    fn run(&self, out: &dyn Console) -> Result<(), ShowcaseError> {
        let user_service = violation::UserService::new();
        user_service.save_user_data("John Doe", out);
        Ok(())
    }
}

/// Same service, three injected databases.
pub struct InjectedDatabaseShowcase;

impl Showcase for InjectedDatabaseShowcase {
    fn principle(&self) -> Principle {
        Principle::DependencyInversion
    }

    fn kind(&self) -> ShowcaseKind {
        ShowcaseKind::Refactored
    }

    fn title(&self) -> &'static str {
        "Dependency Inversion (refactored)"
    }

    fn run(&self, out: &dyn Console) -> Result<(), ShowcaseError> {
        let sql_db = SqlDb;
        let no_sql_db = NoSqlDb;
        let h2_db = H2Db;

        let databases: [&dyn Database; 3] = [&sql_db, &no_sql_db, &h2_db];
        for database in databases {
            UserService::new(database).save_user_data("Kanishk", out);
        }
        Ok(())
    }
}
