//! Server-side API backend and static frontend delivery.
//!
//! This module contains the complete backend: the authentication API, the schema
//! bootstrap, and the static/SPA serving policy. The backend uses Axum as the web
//! framework, SeaORM as the store client, and tower-http for static files and request
//! tracing.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic between controllers and data layer
//! - **Data Layer** (`data/`) - The store gateway and the repositories built on it
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration and port resolution
//! - **Startup** (`startup`) - Tracing, store connection, schema bootstrap, listener
//! - **State** (`state`) - Shared application state (the store gateway)
//! - **Static files** (`static_files`) - One-time probe of the frontend build directory
//! - **Fallback** (`fallback`) - Not-found policy for unmatched paths
//! - **Router** (`router`) - The ordered route table and its installation into Axum
//!
//! # Request Flow
//!
//! 1. **Router** matches an exact route, the asset prefix, or falls through to the
//!    not-found policy
//! 2. **Controller** parses the request into params and calls a service
//! 3. **Service** runs business logic against repositories
//! 4. **Data** talks to the store only through the `StoreGateway` trait

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod fallback;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod static_files;
pub mod util;

#[cfg(test)]
mod test;
