//! Digit-occurrence counting over integer ranges
//!
//! The name of a zillion index is assembled from the base-1000 digits of
//! the index, so the letters contributed by every period name in a number
//! reduce to one question: how often does each digit d appear across all
//! integers in a half-open range [a, z)?
//!
//! Two counters answer it:
//!
//! - [`digit_occurrences`] takes period-list bounds and walks them run by
//!   run, collapsing each run's positions into closed-form geometric sums.
//!   The work is polynomial in the number of runs, never in the period
//!   count.
//! - [`occurrences_in_base`] is the dense, any-base variant for ordinary
//!   big integers.
//!
//! Both use the per-position decomposition: position p with digit c of the
//! bound contributes `b^p·⌊z/b^(p+1)⌋`, plus `b^p` when c exceeds d, plus
//! `z mod b^p` when c equals d, minus `b^p` when d is zero (leading zeros
//! are not written), with a single `+1` correcting the zero case at the
//! origin.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, ToPrimitive, Zero};

use crate::constants::PERIOD_BASE;
use crate::error::{Error, Result};
use crate::period::{pow_1000, PeriodList};

/// Closed-form position sums for one run of a period-list bound
///
/// For a run of `value` covering positions [p_lo, p_hi] of the bound z:
/// `span` is Σ 1000^p, `quotients` is Σ 1000^p·⌊z/1000^(p+1)⌋ and
/// `remainders` is Σ (z mod 1000^p), each summed over the run's positions.
pub(crate) struct RunTerms {
    pub(crate) value: u16,
    pub(crate) span: BigUint,
    pub(crate) quotients: BigUint,
    pub(crate) remainders: BigUint,
}

/// Collapse every run of the bound into its closed-form position sums
pub(crate) fn run_terms(limit: &PeriodList) -> Vec<RunTerms> {
    let total = limit.value();
    let mut above = BigUint::zero();
    let mut remaining = limit.period_count();
    let mut terms = Vec::with_capacity(limit.periods().len());
    for run in limit.periods() {
        let value = u32::from(run.value);
        let repeat = &run.repeat;
        let position_low = &remaining - repeat;
        let low_power = pow_1000(&position_low);
        let run_power = pow_1000(repeat);
        let high_power = &low_power * (&run_power / 1000u32);
        let run_repunit = (&run_power - 1u32) / 999u32;
        let span = &low_power * &run_repunit;
        // ⌊z/1000^(p+1)⌋ at depth j into the run is above·1000^j plus j
        // copies of the run value; both geometric sums telescope.
        let quotients =
            repeat * &above * &high_power + (repeat * &high_power - &span) / 999u32 * value;
        let below = &total % &low_power;
        let remainders = ((&run_repunit - repeat) / 999u32) * &low_power * value + repeat * below;
        terms.push(RunTerms {
            value: run.value,
            span,
            quotients,
            remainders,
        });
        above = above * &run_power + &run_repunit * value;
        remaining = position_low;
    }
    terms
}

/// Occurrences of one digit in [0, limit), limit as a period list
pub(crate) fn prefix_occurrences(digit: u16, limit: &PeriodList) -> BigUint {
    let mut count = if digit == 0 {
        BigInt::one()
    } else {
        BigInt::zero()
    };
    for term in run_terms(limit) {
        count += BigInt::from(term.quotients);
        if digit < term.value {
            count += BigInt::from(term.span.clone());
        }
        if digit == term.value {
            count += BigInt::from(term.remainders);
        }
        if digit == 0 {
            count -= BigInt::from(term.span);
        }
    }
    count
        .to_biguint()
        .expect("digit occurrence count is nonnegative")
}

/// Occurrences of the base-1000 digit d among all integers in [lower, upper)
///
/// Both bounds are period lists; the count is exact however many periods
/// they compress. Empty or inverted ranges count zero.
///
/// # Errors
///
/// Returns [`Error::DigitOutOfRange`] when `digit` is 1000 or more.
pub fn digit_occurrences(digit: u16, lower: &PeriodList, upper: &PeriodList) -> Result<BigUint> {
    if u32::from(digit) >= PERIOD_BASE {
        return Err(Error::DigitOutOfRange(digit));
    }
    if lower >= upper {
        return Ok(BigUint::zero());
    }
    Ok(prefix_occurrences(digit, upper) - prefix_occurrences(digit, lower))
}

/// Occurrences of a digit among all integers in [lower, upper), any base
///
/// Dense counterpart of [`digit_occurrences`] for ordinary integers in an
/// arbitrary positional base. A digit at or above the base never occurs,
/// so such calls count zero; `base` must be at least 2.
pub fn occurrences_in_base(digit: u32, base: u32, lower: &BigUint, upper: &BigUint) -> BigUint {
    debug_assert!(base >= 2, "digit counting needs a positional base");
    if base < 2 || digit >= base || lower >= upper {
        return BigUint::zero();
    }
    dense_prefix(digit, base, upper) - dense_prefix(digit, base, lower)
}

fn dense_prefix(digit: u32, base: u32, limit: &BigUint) -> BigUint {
    let mut digits: Vec<u32> = Vec::new(); // least significant first
    let mut n = limit.clone();
    while !n.is_zero() {
        digits.push((&n % base).to_u32().expect("digit below base fits in u32"));
        n /= base;
    }
    if digits.is_empty() {
        digits.push(0);
    }
    let mut count = if digit == 0 {
        BigInt::one()
    } else {
        BigInt::zero()
    };
    let mut place = BigUint::one(); // base^p
    let mut rest = BigUint::zero(); // limit mod base^p
    let mut quotient = limit / base; // ⌊limit / base^(p+1)⌋
    for &coefficient in &digits {
        count += BigInt::from(&place * &quotient);
        if digit < coefficient {
            count += BigInt::from(place.clone());
        }
        if digit == coefficient {
            count += BigInt::from(rest.clone());
        }
        if digit == 0 {
            count -= BigInt::from(place.clone());
        }
        rest += &place * coefficient;
        place *= base;
        quotient /= base;
    }
    count
        .to_biguint()
        .expect("digit occurrence count is nonnegative")
}
