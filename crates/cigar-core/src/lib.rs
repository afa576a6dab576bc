//! # cigar-core
//!
//! Pure-Rust codec between **CIGAR strings** and their expanded **edit strings**.
//!
//! A CIGAR string is a run-length encoding of alignment edit operations: each
//! token is a decimal count followed by a one-character operation code
//! (`6M` = six matches). The expanded edit string spells every operation out,
//! one character per position.
//!
//! ## Quick start
//!
//! ```rust
//! use cigar_core::{compress, expand};
//!
//! // CIGAR → edits
//! let edits = expand("1M1D6M1I4M").unwrap();
//! assert_eq!(edits, "MDMMMMMMIMMMM");
//!
//! // edits → CIGAR (roundtrip)
//! assert_eq!(compress(&edits), "1M1D6M1I4M");
//! ```
//!
//! ## Modules
//!
//! - [`tokenizer`] — CIGAR string → ordered `(count, op)` runs
//! - [`expander`] — CIGAR string → edit string
//! - [`blocks`] — edit string → maximal same-character blocks
//! - [`compressor`] — edit string → canonical CIGAR string
//! - [`types`] — `Run` and the parsing `Policy`
//! - [`error`] — Error type for malformed CIGAR input

pub mod blocks;
pub mod compressor;
pub mod error;
pub mod expander;
pub mod tokenizer;
pub mod types;

pub use blocks::split_blocks;
pub use compressor::{compress, compress_to_runs};
pub use error::CigarError;
pub use expander::{expand, expand_runs, expand_with};
pub use tokenizer::{tokenize, tokenize_with};
pub use types::{Policy, Run};
