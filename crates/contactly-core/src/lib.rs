//! # contactly-core
//!
//! Core crate for Contactly. Contains the unified error system,
//! configuration schemas, shared traits (mailer, clock), and
//! pagination/sorting types.
//!
//! This crate has **no** internal dependencies on other Contactly crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
