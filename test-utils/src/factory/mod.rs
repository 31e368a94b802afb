//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults so tests only spell out the fields
//! they care about.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .email("ada@example.com")
//!     .password_hash(hash)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create `app_user` rows

pub mod helpers;
pub mod user;
