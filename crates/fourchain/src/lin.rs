//! Smallest number with a given name length
//!
//! The generator inverts the length function: given ℓ, find the least
//! positive integer whose name has exactly ℓ letters. Small targets come
//! straight out of a table. Large ones exploit the shape of
//! letter-inefficient numbers: the answer uses the fewest periods that can
//! carry ℓ letters, packs as many leading one-periods as possible (each
//! demotion from 373 sheds exactly 21 letters), and patches the leftover
//! shortfall with a fixed two-period transition window.
//!
//! Period counts are searched, never enumerated: doubling followed by a
//! binary search brackets the unique n with
//! `letters([373]×(n−1)) < ℓ ≤ letters([373]×n)`, which stays cheap even
//! when n is on the order of 10^28.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use crate::constants::{LETTERS_PER_DEMOTION, SMALLEST_BY_LENGTH, TRANSITION_WINDOWS};
use crate::error::{Error, Result};
use crate::length::name_length;
use crate::lexicon::Lexicon;
use crate::period::PeriodList;

/// Letters in a run of `count` periods of value 373
fn repeated_373_letters(lexicon: &Lexicon, count: &BigUint) -> BigUint {
    let runs = PeriodList::from_pairs([(373, count.clone())])
        .expect("a single 373 run is always a valid period list");
    name_length(lexicon, &runs)
}

/// Smallest positive integer whose name has exactly `target` letters
///
/// # Errors
///
/// Returns [`Error::UnreachableLength`] when `target` is below 3; "one",
/// "two", "six" and "ten" are the shortest number names in English.
pub fn smallest_with_length(lexicon: &Lexicon, target: &BigUint) -> Result<PeriodList> {
    if *target < BigUint::from(3u32) {
        return Err(Error::UnreachableLength(target.clone()));
    }
    if let Some(small) = target.to_usize().filter(|&t| t <= 24) {
        let value = SMALLEST_BY_LENGTH[small - 3];
        return Ok(PeriodList::from_integer(u64::from(value)));
    }

    // Bracket the period count: double, then binary-search the last octave.
    // Letters grow strictly with the period count, so the bracket is unique.
    let mut upper = BigUint::one();
    while repeated_373_letters(lexicon, &upper) < *target {
        upper *= 2u32;
    }
    let mut lower = &upper / 2u32;
    while &upper - &lower > BigUint::one() {
        let midpoint = (&lower + &upper) / 2u32;
        if repeated_373_letters(lexicon, &midpoint) < *target {
            lower = midpoint;
        } else {
            upper = midpoint;
        }
    }
    let periods = upper;
    let letters = repeated_373_letters(lexicon, &periods);
    #[cfg(feature = "tracing")]
    tracing::debug!(%target, %periods, %letters, "bracketed period count");
    if letters == *target {
        return PeriodList::from_pairs([(373, periods)]);
    }

    // Demote leading periods to ones until the surplus fits one window.
    let demotions = (&letters - target + (LETTERS_PER_DEMOTION - 1)) / LETTERS_PER_DEMOTION;
    let trailing = &periods - &demotions;
    let base = PeriodList::from_pairs([(1, demotions.clone()), (373, trailing.clone())])?;
    let shortfall = target - name_length(lexicon, &base);
    if shortfall.is_zero() {
        return Ok(base);
    }
    let shortfall = shortfall
        .to_usize()
        .expect("shortfall after demotion is at most 20");
    let leading = &demotions - 1u32;
    if trailing.is_zero() {
        // No 373-period left to split: the final period absorbs the whole
        // shortfall (only reachable when two periods suffice).
        let value = SMALLEST_BY_LENGTH[shortfall];
        return PeriodList::from_pairs([(1, leading), (value, BigUint::one())]);
    }
    let (left, right) = TRANSITION_WINDOWS[shortfall - 1];
    PeriodList::from_pairs([
        (1, leading),
        (left, BigUint::one()),
        (right, BigUint::one()),
        (373, &trailing - 1u32),
    ])
}
