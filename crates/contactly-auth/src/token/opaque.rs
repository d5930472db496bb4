//! Opaque bearer-token generation.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use rand::Rng;

/// Number of random bytes per token.
const TOKEN_BYTES: usize = 30;

/// Generates a cryptographically secure opaque bearer token.
///
/// Access and refresh tokens use the same construction with independent
/// randomness; the token carries no embedded meaning and is only ever
/// matched by store lookup.
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill(&mut bytes[..]);
    STANDARD.encode(bytes)
}
