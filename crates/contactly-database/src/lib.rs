//! # contactly-database
//!
//! Store contracts and their implementations. The `store` module defines
//! the async traits the service layer depends on; `repositories` holds the
//! PostgreSQL implementations and `memory` holds in-memory twins used by
//! the service test-suite and as a storageless development backend.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{ContactStore, CredentialStore, SessionStore};
