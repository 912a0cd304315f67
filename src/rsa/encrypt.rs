// RSA Encryption Implementation
// Turns a byte string into a codeword sequence: X = M^E (mod N) per packet

use tracing::{debug, warn};

use super::bigint::mod_pow;
use super::keygen::KeyTriple;
use super::packet::{packet_capacity, packets};

/// Encrypt a message with the public exponent
///
/// The message is split into packets of `packet_size` bytes and every packet
/// becomes one decimal codeword; codewords are joined with single spaces. A
/// packet size of 0 is treated as 1.
///
/// `256^packet_size - 1 < n` is a caller precondition. Violating it is only
/// logged; the resulting codewords will not round-trip reliably.
pub fn encrypt_message(message: &[u8], key: &KeyTriple, packet_size: usize) -> String {
    let packet_size = packet_size.max(1);
    let capacity = packet_capacity(key.modulus());
    if packet_size > capacity {
        warn!(
            packet_size,
            capacity, "packet size exceeds modulus capacity; packets may collide"
        );
    }

    let codewords: Vec<String> = packets(message, packet_size)
        .map(|code| mod_pow(&code, key.public_exponent(), key.modulus()).to_str_radix(10))
        .collect();

    debug!(bytes = message.len(), packets = codewords.len(), "encrypted message");

    codewords.join(" ")
}

/// Encrypt a string with the public exponent
pub fn encrypt_string(plaintext: &str, key: &KeyTriple, packet_size: usize) -> String {
    encrypt_message(plaintext.as_bytes(), key, packet_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::from_u64;
    use crate::rsa::keygen::generate_keys;

    #[test]
    fn test_encrypt_single_byte() {
        let keys = generate_keys(&from_u64(7), &from_u64(11));

        // 72^7 mod 77 = 30
        assert_eq!(encrypt_message(b"H", &keys, 1), "30");
    }

    #[test]
    fn test_encrypt_codeword_per_packet() {
        let keys = generate_keys(&from_u64(61), &from_u64(53));

        assert_eq!(encrypt_string("Hi!", &keys, 1), "1087 3020 2417");
    }

    #[test]
    fn test_encrypt_wire_format() {
        let keys = generate_keys(&from_u64(10007), &from_u64(10009));
        let codewords = encrypt_message(b"Hello, RSA!", &keys, 3);

        // 11 bytes in packets of 3 -> 4 codewords
        let tokens: Vec<&str> = codewords.split(' ').collect();
        assert_eq!(tokens.len(), 4);
        assert!(tokens
            .iter()
            .all(|t| !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit())));
        assert!(!codewords.starts_with(' '));
        assert!(!codewords.ends_with(' '));
    }

    #[test]
    fn test_encrypt_empty() {
        let keys = generate_keys(&from_u64(61), &from_u64(53));
        assert_eq!(encrypt_message(b"", &keys, 3), "");
    }

    #[test]
    fn test_encrypt_zero_packet_size_acts_as_one() {
        let keys = generate_keys(&from_u64(61), &from_u64(53));
        assert_eq!(
            encrypt_message(b"Hi!", &keys, 0),
            encrypt_message(b"Hi!", &keys, 1)
        );
    }
}
