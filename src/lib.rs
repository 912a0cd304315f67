//! Textbook RSA over caller-supplied primes.
//!
//! Keys are derived from two primes, messages are packed into little-endian
//! base-256 packets, and every packet is exponentiated into one decimal
//! codeword. There is no padding and no side-channel hardening; this is for
//! teaching and low-assurance use only.

pub mod error;
pub mod logging;
pub mod rsa;
pub mod util;

pub use error::{CipherError, Result};
pub use rsa::{Cipher, CipherConfig, KeyTriple};
