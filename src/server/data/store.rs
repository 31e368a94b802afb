//! The store gateway: the only way the rest of the server reaches the database.
//!
//! Consumers get exactly two capabilities, execute a statement and fetch a single row,
//! both with positional parameters (`$1`, `$2`, ...). Everything else about the store
//! client stays behind `Store`.

use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, QueryResult, Statement,
    TryGetable, Value,
};

/// Minimal capability interface over the relational store.
///
/// Implementations must be safe to share between concurrent requests without external
/// locking; `Store` delegates this to the connection pool.
#[async_trait]
pub trait StoreGateway: Send + Sync {
    /// Executes a statement, reporting only success or failure.
    async fn execute(&self, sql: &str, params: Vec<Value>) -> Result<(), DbErr>;

    /// Runs a query and returns its first row, if any.
    async fn query_one(&self, sql: &str, params: Vec<Value>) -> Result<Option<Row>, DbErr>;
}

/// A single result row. Columns are read by zero-based position.
pub struct Row(QueryResult);

impl Row {
    /// Reads the column at `index` as `T`.
    ///
    /// # Returns
    /// - `Ok(T)` - Column decoded successfully
    /// - `Err(DbErr)` - Index out of range, NULL for a non-optional `T`, or type mismatch
    pub fn get<T: TryGetable>(&self, index: usize) -> Result<T, DbErr> {
        self.0.try_get_by_index(index)
    }
}

/// `StoreGateway` over a pooled SeaORM connection.
///
/// Cloning is cheap and every clone shares the same pool. One `Store` is built at
/// startup and handed to the router; there is no global handle.
#[derive(Clone, Debug)]
pub struct Store {
    db: DatabaseConnection,
}

impl Store {
    /// Wraps an established connection pool.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// SQL dialect of the underlying connection.
    pub fn backend(&self) -> DatabaseBackend {
        self.db.get_database_backend()
    }

    fn statement(&self, sql: &str, params: Vec<Value>) -> Statement {
        Statement::from_sql_and_values(self.backend(), sql, params)
    }
}

#[async_trait]
impl StoreGateway for Store {
    async fn execute(&self, sql: &str, params: Vec<Value>) -> Result<(), DbErr> {
        self.db.execute_raw(self.statement(sql, params)).await?;
        Ok(())
    }

    async fn query_one(&self, sql: &str, params: Vec<Value>) -> Result<Option<Row>, DbErr> {
        let row = self.db.query_one_raw(self.statement(sql, params)).await?;
        Ok(row.map(Row))
    }
}
