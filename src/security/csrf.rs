//! Anti-forgery tokens.
//!
//! A token is minted when the entry page opens a session and stays fixed for
//! the rest of that session. Steps compare it against the submitted value.

use rand::RngCore;
use subtle::ConstantTimeEq;

const TOKEN_BYTES: usize = 32;

/// Mint a new random token (hex encoded).
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Exact equality, compared in constant time.
pub fn tokens_match(expected: &str, submitted: &str) -> bool {
    bool::from(expected.as_bytes().ct_eq(submitted.as_bytes()))
}
