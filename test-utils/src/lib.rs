//! Portfolio Server Test Utils
//!
//! Provides shared testing utilities for the portfolio server. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite stores and throwaway static
//! build directories.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection and static build
//! - **fixture**: In-memory fixtures such as a fake frontend build directory
//! - **factory**: Helpers that insert rows with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_login() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_schema()
//!         .with_static_assets()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     let static_root = test.static_root().unwrap();
//!     // Exercise the router...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
