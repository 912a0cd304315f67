// RSA Module - Main module file
// Exports key generation, the codeword transform and signatures

pub mod bigint;
pub mod cipher;
pub mod decrypt;
pub mod encrypt;
pub mod keygen;
pub mod packet;
pub mod signature;

pub use cipher::{Cipher, CipherConfig};
pub use decrypt::decrypt_message;
pub use encrypt::{encrypt_message, encrypt_string};
pub use keygen::{find_public_exponent, generate_keys, KeyTriple};
pub use packet::{packet_capacity, DEFAULT_PACKET_SIZE};
pub use signature::{hex_digest, sign_message, verify_message, SIGNATURE_PACKET_SIZE};
