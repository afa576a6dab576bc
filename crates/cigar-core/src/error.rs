//! Error types for CIGAR parsing.

use thiserror::Error;

/// Errors that can occur while reading a CIGAR string.
///
/// Compression never fails, so this only surfaces from tokenizing or expanding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CigarError {
    /// The input could not be consumed by the `<digits><op>` grammar.
    /// `offset` is the byte offset into the input where parsing stopped.
    #[error("invalid CIGAR format at offset {offset}: {message}")]
    InvalidCigarFormat { offset: usize, message: String },
}

impl CigarError {
    pub(crate) fn invalid(offset: usize, message: impl Into<String>) -> Self {
        CigarError::InvalidCigarFormat {
            offset,
            message: message.into(),
        }
    }
}

/// Convenience alias used throughout cigar-core.
pub type Result<T> = std::result::Result<T, CigarError>;
