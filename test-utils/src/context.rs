use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::path::Path;
use tempfile::TempDir;

use crate::{error::TestError, fixture};

/// Test context containing the database connection and an optional static build.
///
/// `TestBuilder::build` always opens the in-memory SQLite store, so tests that went
/// through the builder can rely on `db` being set. Each context gets its own database,
/// and the static build directory is removed when the context is dropped.
pub struct TestContext {
    /// In-memory SQLite connection; `None` only for a context made with `new()` that
    /// has not called `database()` yet.
    pub db: Option<DatabaseConnection>,

    /// Optional temporary directory laid out like a frontend build output.
    ///
    /// Contains `index.html`, `favicon.ico`, and `assets/app.js`.
    pub static_build: Option<TempDir>,
}

impl TestContext {
    /// Creates a new empty test context.
    ///
    /// # Returns
    /// - New `TestContext` instance with no database connection and no static build
    pub fn new() -> Self {
        Self {
            db: None,
            static_build: None,
        }
    }

    /// Opens the in-memory SQLite store on first call and returns it afterwards.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match &mut self.db {
            Some(db) => Ok(db),
            slot @ None => Ok(slot.insert(Database::connect("sqlite::memory:").await?)),
        }
    }

    /// Runs the given `CREATE TABLE` statements against the test store, in order.
    ///
    /// Tables that a test expects the router's bootstrap to create are left out.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Writes a fake frontend build into a fresh temporary directory.
    ///
    /// # Returns
    /// - `Ok(&Path)` - Root of the static build
    /// - `Err(TestError::Io)` - Failed to create the directory or write a file
    pub fn with_static_build(&mut self) -> Result<&Path, TestError> {
        let dir = fixture::static_build::static_build()?;
        let dir_ref = self.static_build.insert(dir);

        Ok(dir_ref.path())
    }

    /// Root of the static build, if one was created.
    pub fn static_root(&self) -> Option<&Path> {
        self.static_build.as_ref().map(TempDir::path)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
