//! CIGAR Expander — converts a CIGAR string into its full edit string.
//!
//! Each run `(count, op)` contributes `op` repeated `count` times, in order.
//! A zero count is legal and contributes nothing, so the output length is
//! always the sum of the counts.
//!
//! The output length is totalled and reserved up front. A CIGAR whose
//! expansion cannot be represented or allocated is rejected with
//! [`CigarError::InvalidCigarFormat`] instead of aborting mid-expansion.
//!
//! # Example
//! ```
//! use cigar_core::expand;
//! assert_eq!(expand("2M1I3M").unwrap(), "MMIMMM");
//! assert_eq!(expand("0M2D").unwrap(), "DD");
//! ```

use crate::error::{CigarError, Result};
use crate::tokenizer::tokenize_spans;
use crate::types::{Policy, Run};

/// Expand a CIGAR string under [`Policy::Strict`].
///
/// Returns an error if the input is not a well-formed CIGAR string.
pub fn expand(cigar: &str) -> Result<String> {
    expand_with(cigar, Policy::Strict)
}

/// Expand a CIGAR string under the given policy.
pub fn expand_with(cigar: &str, policy: Policy) -> Result<String> {
    let spans = tokenize_spans(cigar, policy)?;

    let mut total = 0usize;
    for (offset, run) in &spans {
        total = run
            .count
            .checked_mul(run.op.len())
            .and_then(|bytes| total.checked_add(bytes))
            .ok_or_else(|| CigarError::invalid(*offset, "expanded length is too large"))?;
    }

    let mut out = String::new();
    if out.try_reserve(total).is_err() {
        let offset = spans.first().map_or(0, |(offset, _)| *offset);
        return Err(CigarError::invalid(
            offset,
            format!("expanded length of {} bytes is too large", total),
        ));
    }
    for (_, run) in &spans {
        push_run(&mut out, run);
    }
    Ok(out)
}

/// Expand already-parsed runs. Cannot fail.
///
/// The runs must describe an edit string that fits in memory; use
/// [`expand_with`] for untrusted input.
pub fn expand_runs(runs: &[Run]) -> String {
    let capacity = runs
        .iter()
        .fold(0usize, |acc, run| acc.saturating_add(run.count.saturating_mul(run.op.len())));
    let mut out = String::with_capacity(capacity);
    for run in runs {
        push_run(&mut out, run);
    }
    out
}

fn push_run(out: &mut String, run: &Run) {
    for _ in 0..run.count {
        out.push_str(&run.op);
    }
}
