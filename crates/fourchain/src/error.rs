//! Error types for the fourchain crate

use num_bigint::BigUint;
use thiserror::Error;

/// Result type alias for fourchain operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in fourchain operations
#[derive(Debug, Error)]
pub enum Error {
    /// Period-list structural invariant violated on construction or parse
    #[error("invalid period list: {0}")]
    InvalidPeriodList(String),

    /// Digit outside the base-1000 range supplied to the occurrence counter
    #[error("digit out of range: {0} (base-1000 digits lie in [0, 1000))")]
    DigitOutOfRange(u16),

    /// No positive integer has a name of the requested length
    #[error("no number name has {0} letters (the shortest, \"one\", has 3)")]
    UnreachableLength(BigUint),

    /// Caller-supplied lexicon table has the wrong shape
    #[error("lexicon table {table} has {got} entries; expected {expected}")]
    LexiconUnavailable {
        /// Which table failed validation ("values" or "prefixes")
        table: &'static str,
        /// Required entry count
        expected: usize,
        /// Entry count actually supplied
        got: usize,
    },
}
