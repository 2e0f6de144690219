//! Letter counting without spelling
//!
//! The letters of a number name split into two independent pools:
//!
//! - **value letters**: each period value spells the same word wherever it
//!   sits, so a run of r periods of value v contributes r times the
//!   lexicon's count for v;
//! - **name letters**: the period at zillion index k ≥ 1 is followed by the
//!   name of zillion k−1, and that name is built from the base-1000 digits
//!   of k−1. Summing name lengths over a range of zillion indices therefore
//!   collapses to digit-occurrence counts, two letters of "on" per name and
//!   a one-letter surcharge for "thousand".
//!
//! Periods of value zero spell nothing and suppress their period name, so
//! every zero run subtracts the name letters of the zillion indices it
//! blanks.

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::lexicon::Lexicon;
use crate::occurs::run_terms;
use crate::period::PeriodList;

/// Letters in the short-scale English name of x
///
/// Total on every valid period list; the cost grows with the number of
/// runs, not the number of periods.
pub fn name_length(lexicon: &Lexicon, x: &PeriodList) -> BigUint {
    value_letters(lexicon, x) + period_name_letters(lexicon, x)
}

/// Letters contributed by period values alone
fn value_letters(lexicon: &Lexicon, x: &PeriodList) -> BigUint {
    if x.is_zero() {
        return BigUint::from("zero".len() as u32);
    }
    x.periods().iter().fold(BigUint::zero(), |acc, period| {
        acc + &period.repeat * lexicon.value_letters(period.value)
    })
}

/// Letters contributed by period names (thousand, million, …)
fn period_name_letters(lexicon: &Lexicon, x: &PeriodList) -> BigUint {
    let mut letters = zillion_range_letters(lexicon, &BigUint::zero(), &x.zillion());
    let mut below = BigUint::zero();
    for run in x.periods().iter().rev() {
        if run.value == 0 {
            // a zero run spanning zillion indices [j, j+r) silences the
            // names of zillions [j−1, j+r−1)
            let high = &below + &run.repeat - 1u32;
            let low = if below.is_zero() {
                BigUint::zero()
            } else {
                &below - 1u32
            };
            letters -= zillion_range_letters(lexicon, &low, &high);
        }
        below += &run.repeat;
    }
    letters
}

/// Letters of every period name for zillion indices in [low, high)
fn zillion_range_letters(lexicon: &Lexicon, low: &BigUint, high: &BigUint) -> BigUint {
    if low >= high {
        return BigUint::zero();
    }
    let mut letters = (high - low) * 2u32; // "on" closing each name
    if low.is_zero() {
        letters += 1u32; // "thousand" outspells "nillion" by one
    }
    letters += weighted_prefix_letters(lexicon, high);
    letters - weighted_prefix_letters(lexicon, low)
}

/// Σ over digits d of prefix_letters(d)·occurrences(d in [0, bound)),
/// folded over the runs of bound in a single pass
fn weighted_prefix_letters(lexicon: &Lexicon, bound: &BigUint) -> BigUint {
    let limit = PeriodList::from_integer(bound.clone());
    let zero_weight = u64::from(lexicon.prefix_letters(0));
    let mut letters = BigInt::from(zero_weight);
    for term in run_terms(&limit) {
        letters += BigInt::from(term.quotients * lexicon.prefix_letters_total());
        letters += BigInt::from(&term.span * lexicon.prefix_letters_below(term.value));
        letters += BigInt::from(term.remainders * u64::from(lexicon.prefix_letters(term.value)));
        letters -= BigInt::from(term.span * zero_weight);
    }
    letters
        .to_biguint()
        .expect("prefix letter count is nonnegative")
}

#[cfg(test)]
mod tests {
    use num_traits::ToPrimitive;

    use super::*;
    use crate::occurs::digit_occurrences;

    fn letters(n: u64) -> u64 {
        name_length(Lexicon::global(), &PeriodList::from_integer(n))
            .to_u64()
            .unwrap()
    }

    fn letters_of(notation: &str) -> u64 {
        let x = PeriodList::from_notation(notation).unwrap();
        name_length(Lexicon::global(), &x).to_u64().unwrap()
    }

    #[test]
    fn test_single_period_names() {
        assert_eq!(letters(4), 4); // four
        assert_eq!(letters(5), 4); // five
        assert_eq!(letters(3), 5); // three
        assert_eq!(letters(6), 3); // six
        assert_eq!(letters(12), 6); // twelve
        assert_eq!(letters(77), 12); // seventy-seven
        assert_eq!(letters(0), 4); // zero
    }

    #[test]
    fn test_multi_period_names() {
        assert_eq!(letters(1000), 11); // one thousand
        assert_eq!(letters(1_000_000), 10); // one million
        assert_eq!(letters(2_000_000), 10); // two million
        assert_eq!(letters(2_000_001), 13); // two million one
        assert_eq!(letters(1104), 25); // one thousand one hundred four
        assert_eq!(letters(123_456_789), 77);
    }

    #[test]
    fn test_zero_runs_silence_their_names() {
        // one quadrillion: interior zeros drop trillion through thousand
        assert_eq!(letters(10u64.pow(15)), 14);
        // one quadrillion one
        assert_eq!(letters(10u64.pow(15) + 1), 17);
        // one quadrillion one million one
        assert_eq!(letters(10u64.pow(15) + 1_000_001), 27);
    }

    #[test]
    fn test_letters_of_373_runs() {
        for (count, expected) in [(1u32, 24u64), (2, 56), (4, 118), (8, 254), (10, 321), (11, 354)]
        {
            let notation = format!("[373]{{{count}}}");
            assert_eq!(letters_of(&notation), expected, "for {count} periods");
        }
    }

    #[test]
    fn test_matches_per_digit_summation() {
        // the folded weighted pass must agree with 1000 separate counts
        let lexicon = Lexicon::global();
        for bound in [1u64, 2, 999, 1000, 12_345, 1_000_000] {
            let high = PeriodList::from_integer(bound);
            let mut expected = BigUint::zero();
            for digit in 0..1000u16 {
                let count = digit_occurrences(digit, &PeriodList::zero(), &high).unwrap();
                expected += count * u64::from(lexicon.prefix_letters(digit));
            }
            assert_eq!(
                weighted_prefix_letters(lexicon, &BigUint::from(bound)),
                expected,
                "for bound {bound}"
            );
        }
    }
}
