//! Constants and Fixed Tables
//!
//! This module defines the numeric tables the generator and assembler rely
//! on. All of them are consequences of English short-scale spelling and are
//! documented with the words they encode.

/// Base of the period digit system
///
/// Numbers are handled as sequences of three-decimal-digit periods, so every
/// "digit" of the compressed representation lies in [0, 1000).
pub const PERIOD_BASE: u32 = 1000;

/// Letters removed by demoting one leading 373-period to a 001-period
///
/// "three hundred seventy-three" has 24 letters and "one" has 3; swapping a
/// period value changes nothing else in the name, so the difference is
/// always exactly 21. The generator uses this to convert a letter surplus
/// into a count of leading one-periods.
pub const LETTERS_PER_DEMOTION: u32 = 21;

/// Smallest period value whose name has ℓ letters, for ℓ ∈ [3, 24]
///
/// Indexed by ℓ − 3. No name has fewer than 3 letters, and no three-digit
/// period name has more than 24 ("three hundred seventy-three").
///
/// Note the non-monotone entries: 104 ("one hundred four", 14 letters) is
/// smaller than nothing cheaper, while 103 ("one hundred three") spells 15.
pub const SMALLEST_BY_LENGTH: [u16; 22] = [
    1,   // one
    4,   // four
    3,   // three
    11,  // eleven
    15,  // fifteen
    13,  // thirteen
    17,  // seventeen
    24,  // twenty-four
    23,  // twenty-three
    73,  // seventy-three
    101, // one hundred one
    104, // one hundred four
    103, // one hundred three
    111, // one hundred eleven
    115, // one hundred fifteen
    113, // one hundred thirteen
    117, // one hundred seventeen
    124, // one hundred twenty-four
    123, // one hundred twenty-three
    173, // one hundred seventy-three
    323, // three hundred twenty-three
    373, // three hundred seventy-three
];

/// Two-period transition windows, indexed by letter shortfall d − 1
///
/// When the refined candidate `[(1, m), (373, n−m)]` falls d ∈ [1, 21]
/// letters short of the target, replacing its least-significant one-period
/// and most-significant 373-period with the pair (y, z) below adds exactly
/// d letters while keeping the result as small as possible. Each pair
/// satisfies `letters(y) + letters(z) = 27 + d`.
pub const TRANSITION_WINDOWS: [(u16, u16); 21] = [
    (3, 323),
    (3, 373),
    (11, 373),
    (13, 323),
    (13, 373),
    (17, 373),
    (23, 323),
    (23, 373),
    (73, 373),
    (101, 373),
    (103, 323),
    (103, 373),
    (111, 373),
    (113, 323),
    (113, 373),
    (117, 373),
    (123, 323),
    (123, 373),
    (173, 373),
    (323, 373),
    (373, 373),
];

/// First four-chain of length 7: 4, 5, 3, 6, 11, 23, 323
///
/// Each element is the letter count of the next. The prefix of length k is
/// the first chain of length k. The opening steps dodge the degenerate and
/// sterile vertices: the smallest number with a 4-letter name is 4 itself
/// (a self-loop), and the smallest with a 3-letter name is 1, which no
/// number maps to; hence 5, then 3, then 6. From 323 onward the chain
/// extends by the plain smallest-of-length generator.
pub const CHAIN_SEED: [u16; 7] = [4, 5, 3, 6, 11, 23, 323];
