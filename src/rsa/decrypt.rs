// RSA Decryption Implementation
// Recovers bytes from a codeword sequence: M = X^D (mod N) per codeword

use tracing::debug;

use super::bigint::{mod_pow, parse_decimal};
use super::keygen::KeyTriple;
use super::packet::unpack;
use crate::error::{CipherError, Result};

/// Decrypt a whitespace-separated codeword sequence with the private exponent
///
/// Codewords are processed in order and their unpacked bytes concatenated. An
/// empty or all-whitespace sequence yields an empty message.
pub fn decrypt_message(codewords: &str, key: &KeyTriple) -> Result<Vec<u8>> {
    let mut message = Vec::new();
    let mut count = 0usize;

    for token in codewords.split_whitespace() {
        let code = parse_decimal(token).ok_or_else(|| CipherError::MalformedCodeword {
            token: token.to_string(),
        })?;

        let m = mod_pow(&code, key.private_exponent(), key.modulus());
        message.extend(unpack(&m));
        count += 1;
    }

    debug!(packets = count, bytes = message.len(), "decrypted message");

    Ok(message)
}
