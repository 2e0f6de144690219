//! Display Trait Implementations
//!
//! Renders period lists in the compact `[vvv]{r}` notation: runs repeated
//! more than once print bracketed with their count, single runs print as
//! bare three-digit periods, and the leading period drops its zero padding.

use std::fmt;

use num_traits::One;

use crate::period::PeriodList;

// Note: Error Display is provided by the thiserror derive

impl fmt::Display for PeriodList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, period) in self.periods().iter().enumerate() {
            if period.repeat.is_one() {
                if index == 0 {
                    write!(f, "{}", period.value)?;
                } else {
                    write!(f, "{:03}", period.value)?;
                }
            } else {
                write!(f, "[{:03}]{{{}}}", period.value, period.repeat)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;

    use super::*;

    #[test]
    fn test_display_pads_interior_periods_only() {
        let x = PeriodList::from_integer(2_001_001u64);
        assert_eq!(x.to_string(), "2[001]{2}");
        let y = PeriodList::from_integer(5_000_017u64);
        assert_eq!(y.to_string(), "5000017");
        let z = PeriodList::from_integer(1_001_001u64);
        assert_eq!(z.to_string(), "[001]{3}");
    }

    #[test]
    fn test_display_brackets_repeated_runs() {
        let x = PeriodList::from_pairs([
            (1u16, BigUint::from(1u32)),
            (103, BigUint::one()),
            (323, BigUint::one()),
            (373, BigUint::from(8u32)),
        ])
        .unwrap();
        assert_eq!(x.to_string(), "1103323[373]{8}");
    }

    #[test]
    fn test_display_zero() {
        assert_eq!(PeriodList::zero().to_string(), "0");
    }
}
