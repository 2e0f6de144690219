//! Minimal four-chain assembly
//!
//! A four-chain runs every number through the letter count of its name
//! until it parks on the fixed point 4. The first chain of a given length
//! is, from length 8 on, a one-element extension of the first chain one
//! shorter: append the smallest number whose name length equals the value
//! of the current tail. The opening seven elements are seeded because the
//! raw generator would walk into the self-loop at 4 or the sterile
//! vertices 1 and 2.

use crate::constants::CHAIN_SEED;
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::lin::smallest_with_length;
use crate::period::PeriodList;

/// First four-chain of the requested length, fixed point first
///
/// Each element is the letter count of the one after it. Lengths up to 7
/// are prefixes of the seed (4, 5, 3, 6, 11, 23, 323); longer chains grow
/// by applying the smallest-of-length generator to the tail value. The
/// tail of length 9 already compresses about 5·10^27 periods; length 10
/// would need the tail of length 9 as a dense target and is out of reach.
pub fn minimal_chain(lexicon: &Lexicon, length: usize) -> Result<Vec<PeriodList>> {
    let mut chain: Vec<PeriodList> = CHAIN_SEED
        .iter()
        .map(|&value| PeriodList::from_integer(u64::from(value)))
        .collect();
    while chain.len() < length {
        let target = chain[chain.len() - 1].value();
        let next = smallest_with_length(lexicon, &target)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(position = chain.len() + 1, tail = %next, "extended chain");
        chain.push(next);
    }
    chain.truncate(length);
    Ok(chain)
}
