//! Test fixtures that live outside the database.
//!
//! Unlike factories, fixtures do NOT insert data into the database. They produce files
//! and in-memory values that tests compare responses against.

pub mod static_build;
