//! Period-list compressed integers
//!
//! Numbers whose English names this crate measures can run to 10^28
//! base-1000 periods, far past anything a dense big integer can hold. The
//! [`PeriodList`] type stores such a number as maximal runs of identical
//! periods: `373,373,373` is one run of value 373 repeated three times, and
//! the first number with a 323-letter name is four runs no matter how many
//! periods it spans.
//!
//! # Invariants
//!
//! - the run list is never empty,
//! - adjacent runs carry distinct values (runs are maximal),
//! - every value lies in [0, 1000) and every repetition is at least 1,
//! - a leading zero run appears only in the canonical zero `[(0, 1)]`.
//!
//! Repetitions and period counts are `BigUint`: chains of length 9 already
//! need repetition counts near 5·10^27.

use std::cmp::Ordering;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use crate::constants::PERIOD_BASE;
use crate::error::{Error, Result};

/// One run of identical base-1000 periods
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    /// Period value in [0, 1000)
    pub value: u16,
    /// Number of consecutive repetitions, at least 1
    pub repeat: BigUint,
}

impl Period {
    /// A run with an arbitrary repetition count
    pub fn new(value: u16, repeat: impl Into<BigUint>) -> Self {
        Self {
            value,
            repeat: repeat.into(),
        }
    }

    /// A run of a single period
    pub fn single(value: u16) -> Self {
        Self {
            value,
            repeat: BigUint::one(),
        }
    }
}

/// An unsigned integer compressed as maximal runs of base-1000 periods
///
/// Runs are ordered most significant first. Values are immutable; every
/// operation producing a different number returns a new list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodList {
    periods: Vec<Period>,
}

impl PeriodList {
    /// The canonical zero, a single period of value 0
    pub fn zero() -> Self {
        Self {
            periods: vec![Period::single(0)],
        }
    }

    /// Build from an explicit run list, enforcing every invariant
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPeriodList`] when the list is empty, a value is
    /// 1000 or more, a repetition is zero, adjacent runs share a value, or
    /// a nonzero number starts with a zero run.
    pub fn from_periods(periods: Vec<Period>) -> Result<Self> {
        if periods.is_empty() {
            return Err(Error::InvalidPeriodList("empty period list".into()));
        }
        for period in &periods {
            if u32::from(period.value) >= PERIOD_BASE {
                return Err(Error::InvalidPeriodList(format!(
                    "period value {} outside [0, 1000)",
                    period.value
                )));
            }
            if period.repeat.is_zero() {
                return Err(Error::InvalidPeriodList(format!(
                    "period value {} has zero repetition",
                    period.value
                )));
            }
        }
        if let Some(window) = periods.windows(2).find(|w| w[0].value == w[1].value) {
            return Err(Error::InvalidPeriodList(format!(
                "adjacent runs share value {}",
                window[0].value
            )));
        }
        let zero_led = periods[0].value == 0;
        if zero_led && !(periods.len() == 1 && periods[0].repeat.is_one()) {
            return Err(Error::InvalidPeriodList(
                "leading zero run in a nonzero number".into(),
            ));
        }
        Ok(Self { periods })
    }

    /// Build from (value, repetition) pairs, coalescing as needed
    ///
    /// Pairs with zero repetition are dropped and adjacent pairs with equal
    /// values are merged, so callers may hand over run fragments. The
    /// remaining invariants are still enforced.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u16, BigUint)>,
    {
        let mut periods: Vec<Period> = Vec::new();
        for (value, repeat) in pairs {
            if repeat.is_zero() {
                continue;
            }
            match periods.last_mut() {
                Some(last) if last.value == value => last.repeat += repeat,
                _ => periods.push(Period { value, repeat }),
            }
        }
        Self::from_periods(periods)
    }

    /// Build from base-1000 digits, most significant first
    ///
    /// Leading zero digits are stripped; an empty or all-zero sequence
    /// yields the canonical zero.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPeriodList`] when a digit is 1000 or more.
    pub fn from_digits(digits: &[u16]) -> Result<Self> {
        if let Some(&bad) = digits.iter().find(|&&d| u32::from(d) >= PERIOD_BASE) {
            return Err(Error::InvalidPeriodList(format!(
                "digit {bad} outside [0, 1000)"
            )));
        }
        let significant = digits
            .iter()
            .position(|&d| d != 0)
            .map(|start| &digits[start..])
            .unwrap_or(&[]);
        if significant.is_empty() {
            return Ok(Self::zero());
        }
        Self::from_pairs(significant.iter().map(|&v| (v, BigUint::one())))
    }

    /// Compress a dense unsigned integer into a period list
    pub fn from_integer(n: impl Into<BigUint>) -> Self {
        let mut n: BigUint = n.into();
        if n.is_zero() {
            return Self::zero();
        }
        let mut digits: Vec<u16> = Vec::new();
        while !n.is_zero() {
            let digit = (&n % PERIOD_BASE)
                .to_u16()
                .expect("base-1000 digit fits in u16");
            digits.push(digit);
            n /= PERIOD_BASE;
        }
        let mut periods: Vec<Period> = Vec::new();
        for &value in digits.iter().rev() {
            match periods.last_mut() {
                Some(last) if last.value == value => last.repeat += 1u32,
                _ => periods.push(Period::single(value)),
            }
        }
        Self { periods }
    }

    /// Runs, most significant first
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Whether this is the canonical zero
    pub fn is_zero(&self) -> bool {
        self.periods.len() == 1 && self.periods[0].value == 0
    }

    /// Total number of periods (sum of all repetitions)
    pub fn period_count(&self) -> BigUint {
        self.periods
            .iter()
            .fold(BigUint::zero(), |acc, p| acc + &p.repeat)
    }

    /// Zillion index of the leading period: period count minus one
    pub fn zillion(&self) -> BigUint {
        self.period_count() - 1u32
    }

    /// Materialize the represented integer
    ///
    /// Only viable when the period count is small; a list compressing
    /// 10^28 periods does not fit in memory densely.
    pub fn value(&self) -> BigUint {
        let mut acc = BigUint::zero();
        for period in &self.periods {
            let shift = pow_1000(&period.repeat);
            let repunit = (&shift - 1u32) / 999u32;
            acc = acc * &shift + repunit * u32::from(period.value);
        }
        acc
    }

    /// Render the `[vvv]{r}` notation (same as the `Display` impl)
    pub fn to_notation(&self) -> String {
        self.to_string()
    }

    /// Parse the `[vvv]{r}` notation (same as the `FromStr` impl)
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPeriodList`] on malformed notation.
    pub fn from_notation(notation: &str) -> Result<Self> {
        notation.parse()
    }

    /// Digit-by-digit comparison once period counts are known equal
    fn compare_digits(&self, other: &Self) -> Ordering {
        let mut left = self.periods.iter();
        let mut right = other.periods.iter();
        let mut left_run: Option<(u16, BigUint)> = None;
        let mut right_run: Option<(u16, BigUint)> = None;
        loop {
            let l = left_run.take().or_else(|| {
                left.next().map(|p| (p.value, p.repeat.clone()))
            });
            let r = right_run.take().or_else(|| {
                right.next().map(|p| (p.value, p.repeat.clone()))
            });
            match (l, r) {
                (None, None) => return Ordering::Equal,
                (Some(_), None) => return Ordering::Greater,
                (None, Some(_)) => return Ordering::Less,
                (Some((lv, lr)), Some((rv, rr))) => {
                    if lv != rv {
                        return lv.cmp(&rv);
                    }
                    // consume the shared stretch and keep the remainder
                    match lr.cmp(&rr) {
                        Ordering::Less => right_run = Some((rv, rr - lr)),
                        Ordering::Greater => left_run = Some((lv, lr - rr)),
                        Ordering::Equal => {}
                    }
                }
            }
        }
    }
}

impl Ord for PeriodList {
    fn cmp(&self, other: &Self) -> Ordering {
        self.period_count()
            .cmp(&other.period_count())
            .then_with(|| self.compare_digits(other))
    }
}

impl PartialOrd for PeriodList {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<BigUint> for PeriodList {
    fn from(n: BigUint) -> Self {
        Self::from_integer(n)
    }
}

impl From<u64> for PeriodList {
    fn from(n: u64) -> Self {
        Self::from_integer(n)
    }
}

impl From<u32> for PeriodList {
    fn from(n: u32) -> Self {
        Self::from_integer(n)
    }
}

impl FromStr for PeriodList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::InvalidPeriodList("empty notation string".into()));
        }
        let bytes = s.as_bytes();
        let mut pairs: Vec<(u16, BigUint)> = Vec::new();
        let mut i = 0usize;
        while i < bytes.len() {
            if bytes[i] == b'[' {
                // bracketed run: [vvv]{r}
                let ok_value = bytes.len() >= i + 6
                    && bytes[i + 1..i + 4].iter().all(u8::is_ascii_digit)
                    && bytes[i + 4] == b']'
                    && bytes[i + 5] == b'{';
                if !ok_value {
                    return Err(Error::InvalidPeriodList(format!(
                        "malformed repetition at byte {i} of {s:?}"
                    )));
                }
                let value: u16 = s[i + 1..i + 4]
                    .parse()
                    .map_err(|_| Error::InvalidPeriodList(format!("bad period value in {s:?}")))?;
                let repeat_start = i + 6;
                let mut j = repeat_start;
                while j < bytes.len() && bytes[j].is_ascii_digit() {
                    j += 1;
                }
                if j == repeat_start || j >= bytes.len() || bytes[j] != b'}' {
                    return Err(Error::InvalidPeriodList(format!(
                        "malformed repetition count at byte {repeat_start} of {s:?}"
                    )));
                }
                let repeat: BigUint = s[repeat_start..j]
                    .parse()
                    .map_err(|_| Error::InvalidPeriodList(format!("bad repetition in {s:?}")))?;
                if repeat.is_zero() {
                    return Err(Error::InvalidPeriodList(format!(
                        "zero repetition in {s:?}"
                    )));
                }
                pairs.push((value, repeat));
                i = j + 1;
            } else if bytes[i].is_ascii_digit() {
                let start = i;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
                let segment = &s[start..i];
                // only the very first period of the whole string may be short
                if start != 0 && segment.len() % 3 != 0 {
                    return Err(Error::InvalidPeriodList(format!(
                        "period group {segment:?} in {s:?} is not whole periods"
                    )));
                }
                let mut chunk = segment.len() % 3;
                if chunk == 0 {
                    chunk = 3;
                }
                let mut pos = 0usize;
                while pos < segment.len() {
                    let value: u16 = segment[pos..pos + chunk]
                        .parse()
                        .map_err(|_| Error::InvalidPeriodList(format!("bad period in {s:?}")))?;
                    pairs.push((value, BigUint::one()));
                    pos += chunk;
                    chunk = 3;
                }
            } else {
                let unexpected = s[i..].chars().next().unwrap_or('?');
                return Err(Error::InvalidPeriodList(format!(
                    "unexpected character {unexpected:?} in {s:?}"
                )));
            }
        }
        Self::from_pairs(pairs)
    }
}

/// 1000 raised to an arbitrary-precision exponent, by squaring
pub(crate) fn pow_1000(exponent: &BigUint) -> BigUint {
    let mut result = BigUint::one();
    let mut square = BigUint::from(PERIOD_BASE);
    let bits = exponent.bits();
    for bit in 0..bits {
        if exponent.bit(bit) {
            result *= &square;
        }
        if bit + 1 < bits {
            square = &square * &square;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plc(notation: &str) -> PeriodList {
        PeriodList::from_notation(notation).unwrap()
    }

    #[test]
    fn test_from_integer_compacts_runs() {
        let x = PeriodList::from_integer(373_373_373u64);
        assert_eq!(x.periods(), &[Period::new(373, 3u32)]);
        assert_eq!(x.period_count(), BigUint::from(3u32));

        let y = PeriodList::from_integer(1_103_323u64);
        assert_eq!(
            y.periods(),
            &[
                Period::single(1),
                Period::single(103),
                Period::single(323)
            ]
        );
    }

    #[test]
    fn test_zero_is_canonical() {
        let zero = PeriodList::from_integer(0u32);
        assert!(zero.is_zero());
        assert_eq!(zero, PeriodList::zero());
        assert_eq!(zero.period_count(), BigUint::one());
        assert_eq!(zero.to_notation(), "0");
    }

    #[test]
    fn test_value_round_trip() {
        for n in [0u64, 1, 999, 1000, 1001, 373_373, 1_000_000, 987_654_321] {
            let x = PeriodList::from_integer(n);
            assert_eq!(x.value(), BigUint::from(n), "value mismatch for {n}");
        }
    }

    #[test]
    fn test_period_count_matches_digit_count() {
        for n in [1u64, 999, 1000, 999_999, 1_000_000, 10u64.pow(18) - 1] {
            let expected = (0u32..7).filter(|&k| 1000u128.pow(k) <= u128::from(n)).count();
            let x = PeriodList::from_integer(n);
            assert_eq!(x.period_count(), BigUint::from(expected), "for {n}");
        }
    }

    #[test]
    fn test_notation_round_trip() {
        for text in ["4", "323", "1373", "1103323[373]{8}", "[001]{5}103323[373]{12}"] {
            let x = plc(text);
            assert_eq!(x.to_notation(), text);
            assert_eq!(PeriodList::from_notation(&x.to_notation()).unwrap(), x);
        }
    }

    #[test]
    fn test_parse_accepts_short_leading_period() {
        assert_eq!(plc("12345"), PeriodList::from_integer(12_345u64));
        assert_eq!(plc("12345[678]{9}000").periods().len(), 4);
        assert_eq!(
            plc("373[373]{2}"),
            PeriodList::from_pairs([(373, BigUint::from(3u32))]).unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_malformed_notation() {
        for bad in [
            "",
            "12345[678]{90}00",
            "[37]{2}",
            "[373]{0}",
            "[373]{}",
            "[373]2",
            "abc",
            "[000]{3}",
        ] {
            assert!(
                matches!(PeriodList::from_notation(bad), Err(Error::InvalidPeriodList(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_from_periods_validates_invariants() {
        let dup = vec![Period::single(373), Period::new(373, 2u32)];
        assert!(PeriodList::from_periods(dup).is_err());

        let big = vec![Period::single(1000)];
        assert!(PeriodList::from_periods(big).is_err());

        let zero_led = vec![Period::single(0), Period::single(5)];
        assert!(PeriodList::from_periods(zero_led).is_err());

        let fine = vec![Period::single(1), Period::new(0, 4u32), Period::single(5)];
        assert!(PeriodList::from_periods(fine).is_ok());
    }

    #[test]
    fn test_from_digits_strips_and_compacts() {
        let x = PeriodList::from_digits(&[0, 0, 12, 345, 345, 0]).unwrap();
        assert_eq!(
            x.periods(),
            &[
                Period::single(12),
                Period::new(345, 2u32),
                Period::single(0)
            ]
        );
        assert_eq!(PeriodList::from_digits(&[]).unwrap(), PeriodList::zero());
        assert_eq!(PeriodList::from_digits(&[0, 0]).unwrap(), PeriodList::zero());
        assert!(PeriodList::from_digits(&[1, 1000]).is_err());
    }

    #[test]
    fn test_from_pairs_coalesces() {
        let x = PeriodList::from_pairs([
            (1u16, BigUint::from(2u32)),
            (373, BigUint::zero()),
            (373, BigUint::from(5u32)),
            (373, BigUint::one()),
        ])
        .unwrap();
        assert_eq!(
            x.periods(),
            &[Period::new(1, 2u32), Period::new(373, 6u32)]
        );
    }

    #[test]
    fn test_ordering_is_numeric_for_dense_values() {
        let samples = [0u64, 1, 4, 999, 1000, 1001, 999_999, 1_000_000, 373_373_373];
        for &a in &samples {
            for &b in &samples {
                let pa = PeriodList::from_integer(a);
                let pb = PeriodList::from_integer(b);
                assert_eq!(pa.cmp(&pb), a.cmp(&b), "ordering mismatch for {a} vs {b}");
            }
        }
    }

    #[test]
    fn test_ordering_expands_misaligned_runs() {
        // 373,373,373,001 vs 373,373,001,001
        let a = plc("[373]{3}001");
        let b = plc("[373]{2}[001]{2}");
        assert_eq!(a.cmp(&b), Ordering::Greater);
        assert_eq!(b.cmp(&a), Ordering::Less);
        // equal after expansion
        let c = plc("[373]{2}373001");
        assert_eq!(a.cmp(&c), Ordering::Equal);
    }

    #[test]
    fn test_pow_1000() {
        assert_eq!(pow_1000(&BigUint::zero()), BigUint::one());
        assert_eq!(pow_1000(&BigUint::from(3u32)), BigUint::from(10u64.pow(9)));
        assert_eq!(pow_1000(&BigUint::from(7u32)), BigUint::from(10u128.pow(21)));
    }
}
