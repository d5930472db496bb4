//! # contactly-auth
//!
//! Credential primitives for Contactly: Argon2id password hashing, opaque
//! bearer-token generation, and the signed reset-token issuer. This crate
//! holds no state; session persistence lives in `contactly-database` and
//! orchestration in `contactly-service`.

pub mod password;
pub mod token;

pub use password::PasswordHasher;
pub use token::{ResetClaims, ResetTokenIssuer, generate_token};
