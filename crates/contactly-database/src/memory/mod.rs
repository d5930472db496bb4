//! In-memory store implementations using Tokio mutexes.
//!
//! Suitable for single-node development and for the service test-suite.
//! Each store mirrors the behavior of its PostgreSQL counterpart,
//! including the one-session-per-user guarantee.

pub mod contact;
pub mod session;
pub mod user;

pub use contact::MemoryContactStore;
pub use session::MemorySessionStore;
pub use user::MemoryUserStore;
