//! Error types for the hufkey codec.
//!
//! All operations return structured errors rather than panicking.
//! The two data-level failure domains are kept separate from I/O so
//! callers can tell a corrupt or mismatched key apart from a disk error.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Table: key construction (duplicate symbols, code collisions)
/// - Transform: substitution against an incomplete key
/// - I/O: source/sink operations
#[derive(Debug, Error)]
pub enum Error {
    /// Key table construction failed
    #[error("key table error: {0}")]
    Table(#[from] TableError),

    /// Substitution hit a byte the key does not cover
    #[error("transform error: {0}")]
    Transform(#[from] TransformError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Key table construction errors.
///
/// Neither variant can occur for a tree built from a byte histogram
/// (at most 256 leaves, each a distinct symbol), but the construction
/// path checks instead of assuming.
#[derive(Debug, Error)]
pub enum TableError {
    /// The same source byte appeared at two leaves
    #[error("symbol {symbol:#04x} appears twice in the key table")]
    DuplicateSymbol { symbol: u8 },

    /// The wrapping code counter issued the same code twice
    #[error("assigned code {code:#04x} was issued twice")]
    CodeCollision { code: u8 },
}

/// Substitution errors.
///
/// These arise only when a key is applied to data it was not derived
/// from; a key is always complete relative to its own source.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Forward pass: input byte absent from the key
    #[error("byte {symbol:#04x} at offset {offset} has no key entry")]
    UnmappedSymbol { symbol: u8, offset: u64 },

    /// Inverse pass: encoded byte absent from the key
    #[error("code {code:#04x} at offset {offset} has no key entry")]
    UnmappedCode { code: u8, offset: u64 },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
