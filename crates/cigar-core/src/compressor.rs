//! CIGAR Compressor — run-length encodes an edit string back into a CIGAR.
//!
//! A single left-to-right scan tracks the current character and how many
//! times it has repeated. When the character changes, the pending run is
//! flushed as `<count><char>` and counting restarts at 1. The final run is
//! flushed after the scan.
//!
//! Compression is total: any string, over any alphabet, has exactly one
//! canonical CIGAR encoding, and the empty string encodes to itself.
//!
//! # Example
//! ```
//! use cigar_core::compress;
//! assert_eq!(compress("MDMMMMMMIMMMM"), "1M1D6M1I4M");
//! assert_eq!(compress(""), "");
//! ```

use crate::types::Run;

/// Encode an edit string as its canonical CIGAR string.
pub fn compress(edits: &str) -> String {
    let mut out = String::new();
    scan_runs(edits, |count, op| {
        out.push_str(&count.to_string());
        out.push(op);
    });
    out
}

/// Encode an edit string as structured runs, one per maximal block.
///
/// ```
/// use cigar_core::{compress_to_runs, Run};
/// assert_eq!(compress_to_runs("MMI"), vec![Run::new(2, "M"), Run::new(1, "I")]);
/// ```
pub fn compress_to_runs(edits: &str) -> Vec<Run> {
    let mut runs = Vec::new();
    scan_runs(edits, |count, op| runs.push(Run::new(count, op)));
    runs
}

/// Walk `edits` once, calling `emit` for every maximal run in order.
fn scan_runs(edits: &str, mut emit: impl FnMut(usize, char)) {
    let mut chars = edits.chars();
    let Some(mut current) = chars.next() else {
        return;
    };
    let mut count = 1usize;

    for c in chars {
        if c == current {
            count += 1;
            continue;
        }
        emit(count, current);
        current = c;
        count = 1;
    }
    emit(count, current);
}
