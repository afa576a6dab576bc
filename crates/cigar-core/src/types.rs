//! Value types shared by the tokenizer, expander and compressor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One CIGAR token: `count` consecutive occurrences of `op`.
///
/// `op` is a single character for anything produced under [`Policy::Strict`]
/// or by the compressor. [`Policy::Lenient`] keeps compound operation fields
/// such as the `MM` in `1MM` whole.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Run {
    pub count: usize,
    pub op: String,
}

impl Run {
    pub fn new(count: usize, op: impl Into<String>) -> Self {
        Self {
            count,
            op: op.into(),
        }
    }

    /// Number of edit characters this run expands to.
    pub fn len(&self) -> usize {
        self.count.saturating_mul(self.op.chars().count())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Renders the run as a CIGAR token, e.g. `6M`.
impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, self.op)
    }
}

/// How strictly a CIGAR string is parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Policy {
    /// The whole input must be `<digits><op>` tokens with one-character ops.
    #[default]
    Strict,
    /// Collect every `<digits><non-digits>` match and drop whatever lies
    /// between or around them. Compound op fields are kept whole.
    ///
    /// Counts are ASCII `0-9` only. Other Unicode decimal digits such as `٣`
    /// are op characters here, so `"٣M"` yields no runs rather than `(3, "M")`.
    Lenient,
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Strict => f.write_str("strict"),
            Policy::Lenient => f.write_str("lenient"),
        }
    }
}

impl FromStr for Policy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(Policy::Strict),
            "lenient" => Ok(Policy::Lenient),
            other => Err(format!(
                "Unknown policy: '{}'. Available policies: strict, lenient",
                other
            )),
        }
    }
}
