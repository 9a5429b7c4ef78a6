//! Session token generation

use demo_shared::constants::TOKEN_BYTES;
use rand::RngCore;

/// Generate an unguessable token: `TOKEN_BYTES` bytes from the thread-local
/// CSPRNG (reseeded from the OS), hex encoded.
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
