// Cipher
// Holds one key triple and exposes encrypt, decrypt, sign and verify

use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

use super::bigint::RsaBigInt;
use super::decrypt::decrypt_message;
use super::encrypt::encrypt_message;
use super::keygen::{generate_keys, KeyTriple};
use super::packet::DEFAULT_PACKET_SIZE;
use super::signature::{sign_message, verify_message};
use crate::error::{CipherError, Result};
use crate::util::file_ops::read_file;

/// Configuration for a cipher
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CipherConfig {
    /// Message bytes per packet for `Cipher::encrypt`
    pub packet_size: usize,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            packet_size: DEFAULT_PACKET_SIZE,
        }
    }
}

impl CipherConfig {
    pub fn with_packet_size(mut self, size: usize) -> Self {
        self.packet_size = size;
        self
    }
}

/// Textbook RSA over a single key triple
///
/// Every operation checks for the key triple first and fails with
/// `CipherError::NotInitialized` when none is present. Once keys are set the
/// cipher is only read, so a shared reference can be used from several
/// threads at once.
#[derive(Clone, Debug, Default)]
pub struct Cipher {
    keys: Option<KeyTriple>,
    config: CipherConfig,
}

impl Cipher {
    /// Create a cipher without keys
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cipher around an existing key triple
    pub fn with_keys(keys: KeyTriple) -> Self {
        Self {
            keys: Some(keys),
            config: CipherConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CipherConfig) -> Self {
        self.config = config;
        self
    }

    /// Generate keys from two primes and store them, replacing any previous triple
    pub fn generate_keys(&mut self, p: &RsaBigInt, q: &RsaBigInt) -> &KeyTriple {
        if self.keys.is_some() {
            debug!("replacing existing key triple");
        }
        self.keys.insert(generate_keys(p, q))
    }

    pub fn keys(&self) -> Option<&KeyTriple> {
        self.keys.as_ref()
    }

    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    fn require_keys(&self) -> Result<&KeyTriple> {
        self.keys.as_ref().ok_or(CipherError::NotInitialized)
    }

    /// Encrypt with the configured packet size
    pub fn encrypt(&self, message: &[u8]) -> Result<String> {
        self.encrypt_with(message, self.config.packet_size)
    }

    /// Encrypt with an explicit packet size
    pub fn encrypt_with(&self, message: &[u8], packet_size: usize) -> Result<String> {
        let keys = self.require_keys()?;
        Ok(encrypt_message(message, keys, packet_size))
    }

    pub fn decrypt(&self, codewords: &str) -> Result<Vec<u8>> {
        let keys = self.require_keys()?;
        decrypt_message(codewords, keys)
    }

    /// Sign the SHA-256 hex digest of `message`
    pub fn sign(&self, message: &[u8]) -> Result<String> {
        self.sign_with::<Sha256>(message)
    }

    /// Sign using any `Digest` implementation
    pub fn sign_with<D: Digest>(&self, message: &[u8]) -> Result<String> {
        let keys = self.require_keys()?;
        Ok(sign_message::<D>(message, keys))
    }

    pub fn verify(&self, message: &[u8], signature: &str) -> Result<bool> {
        self.verify_with::<Sha256>(message, signature)
    }

    pub fn verify_with<D: Digest>(&self, message: &[u8], signature: &str) -> Result<bool> {
        let keys = self.require_keys()?;
        verify_message::<D>(message, signature, keys)
    }

    /// Sign the contents of a file
    pub fn sign_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let keys = self.require_keys()?;
        let contents = read_file(path.as_ref())?;
        Ok(sign_message::<Sha256>(&contents, keys))
    }

    /// Verify a signature over the contents of a file
    pub fn verify_file<P: AsRef<Path>>(&self, path: P, signature: &str) -> Result<bool> {
        let keys = self.require_keys()?;
        let contents = read_file(path.as_ref())?;
        verify_message::<Sha256>(&contents, signature, keys)
    }
}
