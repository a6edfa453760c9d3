//! Nonce generation.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of the nonce generated when the caller does not supply one.
pub const DEFAULT_NONCE_LENGTH: usize = 40;

/// Generate a random nonce of `length` characters drawn from `[0-9A-Za-z]`.
///
/// Every request must carry a fresh nonce, the server refuses replays.
pub fn generate(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
