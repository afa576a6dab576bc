//! CIGAR Tokenizer — splits a CIGAR string into ordered `(count, op)` runs.
//!
//! The grammar is a sequence of tokens, each a run of ASCII digits (the count)
//! followed by a run of non-digit characters (the operation field). Tokens are
//! concatenated with no separators: `1M1D6M1I4M`.
//!
//! How much of that grammar is enforced depends on the [`Policy`]:
//!
//! - **Strict** (default): every byte of the input must belong to a token and
//!   each operation field must be exactly one character. `M5`, `5`, `1MM` and
//!   `5M3` are all rejected with [`CigarError::InvalidCigarFormat`].
//! - **Lenient**: every non-overlapping `digits+ non-digits+` match is taken in
//!   order; anything outside a match is dropped and operation fields may be
//!   longer than one character (`1MM` yields a single `(1, "MM")` run).
//!
//! Under either policy a count too large for `usize` is an error, since such
//! a run could never be expanded.
//!
//! # Example
//! ```
//! use cigar_core::{tokenize, Run};
//! let runs = tokenize("1M1D6M").unwrap();
//! assert_eq!(runs, vec![Run::new(1, "M"), Run::new(1, "D"), Run::new(6, "M")]);
//! ```

use crate::error::{CigarError, Result};
use crate::types::{Policy, Run};

/// Tokenize a CIGAR string under [`Policy::Strict`].
///
/// Empty input yields no runs.
pub fn tokenize(cigar: &str) -> Result<Vec<Run>> {
    tokenize_with(cigar, Policy::Strict)
}

/// Tokenize a CIGAR string under the given policy.
pub fn tokenize_with(cigar: &str, policy: Policy) -> Result<Vec<Run>> {
    Ok(tokenize_spans(cigar, policy)?
        .into_iter()
        .map(|(_, run)| run)
        .collect())
}

/// Tokenize, keeping the byte offset at which each run's count starts.
pub(crate) fn tokenize_spans(cigar: &str, policy: Policy) -> Result<Vec<(usize, Run)>> {
    let mut runs = Vec::new();
    let mut pos = 0;

    while pos < cigar.len() {
        let count_end = digits_end(cigar, pos);
        if count_end == pos {
            // Operation characters with no count in front of them.
            let op_end = ops_end(cigar, pos);
            match policy {
                Policy::Strict => {
                    return Err(CigarError::invalid(
                        pos,
                        format!("expected a count before '{}'", &cigar[pos..op_end]),
                    ));
                }
                Policy::Lenient => {
                    pos = op_end;
                    continue;
                }
            }
        }

        let op_end = ops_end(cigar, count_end);
        if op_end == count_end {
            // Digits run to the end of input; nothing follows them.
            match policy {
                Policy::Strict => {
                    return Err(CigarError::invalid(
                        pos,
                        format!("count '{}' has no operation", &cigar[pos..count_end]),
                    ));
                }
                Policy::Lenient => break,
            }
        }

        let op = &cigar[count_end..op_end];
        if policy == Policy::Strict && op.chars().nth(1).is_some() {
            return Err(CigarError::invalid(
                count_end,
                format!("operation field '{}' is longer than one character", op),
            ));
        }

        let count = parse_count(&cigar[pos..count_end], pos)?;
        runs.push((pos, Run::new(count, op)));
        pos = op_end;
    }

    Ok(runs)
}

/// Byte index one past the run of ASCII digits starting at `start`.
fn digits_end(s: &str, start: usize) -> usize {
    s.as_bytes()[start..]
        .iter()
        .position(|b| !b.is_ascii_digit())
        .map_or(s.len(), |n| start + n)
}

/// Byte index one past the run of non-digit characters starting at `start`.
///
/// Digits are ASCII, so the first digit byte is always on a char boundary.
fn ops_end(s: &str, start: usize) -> usize {
    s.as_bytes()[start..]
        .iter()
        .position(|b| b.is_ascii_digit())
        .map_or(s.len(), |n| start + n)
}

fn parse_count(digits: &str, offset: usize) -> Result<usize> {
    digits.parse::<usize>().map_err(|_| {
        CigarError::invalid(offset, format!("count '{}' is too large", digits))
    })
}
