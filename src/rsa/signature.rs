// Digest-based Signatures
// Signs the textual digest of a message with the codeword transform

use sha2::Digest;

use super::decrypt::decrypt_message;
use super::encrypt::encrypt_message;
use super::keygen::KeyTriple;
use crate::error::Result;

/// Packet size used for digest payloads, independent of cipher configuration
pub const SIGNATURE_PACKET_SIZE: usize = 3;

/// Lowercase hexadecimal digest of `data`
///
/// Hex characters are never zero bytes, so the digest text survives the
/// packet round-trip intact.
pub fn hex_digest<D: Digest>(data: &[u8]) -> String {
    hex::encode(D::digest(data))
}

/// Sign a message: encrypt its hex digest with packet size 3
pub fn sign_message<D: Digest>(message: &[u8], key: &KeyTriple) -> String {
    let digest = hex_digest::<D>(message);
    encrypt_message(digest.as_bytes(), key, SIGNATURE_PACKET_SIZE)
}

/// Verify a signature: its decryption must equal the message's hex digest
///
/// Malformed codewords in `signature` are reported as errors rather than a
/// failed verification.
pub fn verify_message<D: Digest>(message: &[u8], signature: &str, key: &KeyTriple) -> Result<bool> {
    let recovered = decrypt_message(signature, key)?;
    Ok(recovered == hex_digest::<D>(message).as_bytes())
}
