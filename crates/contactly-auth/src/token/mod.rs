//! Bearer and reset token primitives.

pub mod claims;
pub mod opaque;
pub mod reset;

pub use claims::ResetClaims;
pub use opaque::generate_token;
pub use reset::ResetTokenIssuer;
