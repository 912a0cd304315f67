// Error types shared by the key, cipher and file layers

use std::io;

use thiserror::Error;

/// Errors surfaced by cipher operations
#[derive(Debug, Error)]
pub enum CipherError {
    /// An operation needed a key triple before one was generated or supplied
    #[error("keys have not been generated")]
    NotInitialized,

    /// A codeword sequence contained something other than a decimal integer
    #[error("malformed codeword: {token:?}")]
    MalformedCodeword { token: String },

    /// Key triple text could not be parsed
    #[error("invalid key triple: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for cipher operations
pub type Result<T> = std::result::Result<T, CipherError>;
