use sea_orm::sea_query::TableCreateStatement;

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases and optional static build directories. Call `build()` to create the
/// configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_schema()
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, in insertion order.
    tables: Vec<TableCreateStatement>,

    /// Whether to write a fake frontend build to a temporary directory.
    static_assets: bool,
}

impl TestBuilder {
    /// Creates a new test builder with no tables and no static build.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            static_assets: false,
        }
    }

    /// Adds a table to the test database schema.
    ///
    /// The table will be created when `build()` is called. Tables are created in the
    /// order they were added.
    ///
    /// # Arguments
    /// - `table` - CREATE TABLE statement to execute
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table(mut self, table: TableCreateStatement) -> Self {
        self.tables.push(table);
        self
    }

    /// Adds every table the server expects to exist.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_schema(self) -> Self {
        self.with_table(schema::create_app_user_table())
    }

    /// Requests a temporary static build directory.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_static_assets(mut self) -> Self {
        self.static_assets = true;
        self
    }

    /// Builds and initializes the test context.
    ///
    /// Creates an in-memory SQLite database connection, executes all configured CREATE
    /// TABLE statements, and writes the static build if one was requested.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    /// - `Err(TestError::Io)` - Failed to write the static build
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.database().await?;
        setup.with_tables(self.tables).await?;

        if self.static_assets {
            setup.with_static_build()?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
