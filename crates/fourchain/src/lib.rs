//! # fourchain - First Four-Chains over Compressed Integers
//!
//! Every positive integer walks to 4: count the letters in its English
//! name, then in that number's name, and so on ("twenty-three" → 11,
//! "eleven" → 6, "six" → 3, "three" → 5, "five" → 4, "four" → 4). This
//! crate finds the **first (smallest) chain of a given length**, even
//! though the tail of the length-9 chain compresses roughly 5·10^27
//! base-1000 periods and can never exist as a dense integer.
//!
//! ## Core Concept
//!
//! ```text
//! Chain assembler → smallest-of-length generator F → length function L
//!        ↓                        ↓                          ↓
//!   seed + extend       bracket & refine runs      digit-occurrence sums
//!                                                           ↓
//!                                        PeriodList + letter lexicon V/N
//! ```
//!
//! Numbers travel as [`PeriodList`] values: maximal runs of identical
//! three-digit periods. Letter counts never spell anything; they fold the
//! Conway–Wechsler naming rules into digit statistics over zillion
//! indices, so every operation is polynomial in the number of runs.
//!
//! ## Quick Start
//!
//! ```
//! use fourchain::{compute_length, minimal_chain, PeriodList};
//! use num_bigint::BigUint;
//!
//! // the first chain of length 8, fixed point first
//! let chain = minimal_chain(8).unwrap();
//! let tail = chain.last().unwrap();
//! assert_eq!(tail.to_notation(), "1103323[373]{8}");
//!
//! // its name has 323 letters, the value of the previous element
//! assert_eq!(compute_length(tail), BigUint::from(323u32));
//!
//! // parse the notation back
//! let same: PeriodList = "1103323[373]{8}".parse().unwrap();
//! assert_eq!(&same, tail);
//! ```
//!
//! ## Architecture
//!
//! - **period** - run-compressed integers and their notation
//! - **lexicon** - letter tables for period values and zillion prefixes
//! - **occurs** - digit-occurrence counting over integer ranges
//! - **length** - the letter-count function L
//! - **lin** - the smallest-number-with-length generator F
//! - **chain** - minimal chain assembly
//!
//! ## Features
//!
//! - `tracing` - emit search-progress events from the generator (optional)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Error handling
mod error;
pub use error::{Error, Result};

// Constants and fixed tables
pub mod constants;

// Display implementations
mod display;

// Core modules
pub mod chain;
pub mod length;
pub mod lexicon;
pub mod lin;
pub mod occurs;
pub mod period;

// Re-exports for convenience
pub use lexicon::Lexicon;
pub use occurs::{digit_occurrences, occurrences_in_base};
pub use period::{Period, PeriodList};

use num_bigint::BigUint;

/// Letters in the English short-scale name of x, using the built-in lexicon
pub fn compute_length(x: &PeriodList) -> BigUint {
    length::name_length(Lexicon::global(), x)
}

/// Smallest positive integer whose name has exactly `target` letters,
/// using the built-in lexicon
///
/// # Errors
///
/// Returns [`Error::UnreachableLength`] when `target` is below 3.
pub fn find_lin(target: &BigUint) -> Result<PeriodList> {
    lin::smallest_with_length(Lexicon::global(), target)
}

/// First four-chain of the requested length, using the built-in lexicon
///
/// # Errors
///
/// Currently infallible for reachable lengths; the `Result` mirrors the
/// generator it drives.
pub fn minimal_chain(length: usize) -> Result<Vec<PeriodList>> {
    chain::minimal_chain(Lexicon::global(), length)
}
