use crate::bitwriter::BitWriter;
use crate::fragment::{CodingMode, MotionVector};

use CodingMode::*;

/// Rank-to-mode orders of the fixed schemes 1 to 6.
pub const FIXED_SCHEMES: [[CodingMode; 8]; 6] = [
    [InterLastMv, InterPriorLastMv, InterMv, InterNoMv, Intra, GoldenNoMv, GoldenMv, InterFourMv],
    [InterLastMv, InterPriorLastMv, InterNoMv, InterMv, Intra, GoldenNoMv, GoldenMv, InterFourMv],
    [InterLastMv, InterMv, InterPriorLastMv, InterNoMv, Intra, GoldenNoMv, GoldenMv, InterFourMv],
    [InterLastMv, InterMv, InterNoMv, InterPriorLastMv, Intra, GoldenNoMv, GoldenMv, InterFourMv],
    [InterNoMv, InterLastMv, InterPriorLastMv, InterMv, Intra, GoldenNoMv, GoldenMv, InterFourMv],
    [InterNoMv, GoldenNoMv, InterLastMv, InterPriorLastMv, InterMv, Intra, GoldenMv, InterFourMv],
];

const RANK_BITS: [u32; 8] = [1, 2, 3, 4, 5, 6, 7, 7];
const CUSTOM_SCHEME: u8 = 0;
const RAW_SCHEME: u8 = 7;
const CUSTOM_DESCRIPTION_BITS: u32 = 24;

/// A mode coding scheme: selector plus the rank of every mode, indexed by
/// [`CodingMode::code`]. Ranks are unused by the raw scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeScheme {
    pub index: u8,
    pub ranks: [u8; 8],
}

fn ranks_of(order: &[CodingMode; 8]) -> [u8; 8] {
    let mut ranks = [0u8; 8];
    for (rank, mode) in order.iter().enumerate() {
        ranks[mode.code()] = rank as u8;
    }
    ranks
}

fn custom_ranks(histogram: &[u32; 8]) -> [u8; 8] {
    let mut order = CodingMode::DEFAULT_ORDER;
    order.sort_by_key(|m| std::cmp::Reverse(histogram[m.code()]));
    ranks_of(&order)
}

fn cost(histogram: &[u32; 8], ranks: &[u8; 8]) -> u32 {
    histogram
        .iter()
        .zip(ranks.iter())
        .map(|(&n, &r)| n * RANK_BITS[r as usize])
        .sum()
}

/// Picks the cheapest scheme for `modes`; the first wins ties.
pub fn choose_scheme(modes: &[CodingMode]) -> ModeScheme {
    let mut histogram = [0u32; 8];
    for m in modes {
        histogram[m.code()] += 1;
    }

    let custom = custom_ranks(&histogram);
    let mut best = ModeScheme {
        index: CUSTOM_SCHEME,
        ranks: custom,
    };
    let mut best_cost = cost(&histogram, &custom) + CUSTOM_DESCRIPTION_BITS;
    for (i, order) in FIXED_SCHEMES.iter().enumerate() {
        let ranks = ranks_of(order);
        let c = cost(&histogram, &ranks);
        if c < best_cost {
            best_cost = c;
            best = ModeScheme {
                index: i as u8 + 1,
                ranks,
            };
        }
    }
    if 3 * (modes.len() as u32) < best_cost {
        best = ModeScheme {
            index: RAW_SCHEME,
            ranks: ranks_of(&CodingMode::DEFAULT_ORDER),
        };
    }
    log::trace!("mode scheme {} for {} macroblocks", best.index, modes.len());
    best
}

/// Writes the scheme selector, the custom description if any, then one
/// symbol per mode.
pub fn write_modes(w: &mut BitWriter, modes: &[CodingMode], scheme: &ModeScheme) {
    w.write_bits(u32::from(scheme.index), 3);
    if scheme.index == CUSTOM_SCHEME {
        for mode in CodingMode::DEFAULT_ORDER {
            w.write_bits(u32::from(scheme.ranks[mode.code()]), 3);
        }
    }
    for mode in modes {
        if scheme.index == RAW_SCHEME {
            w.write_bits(mode.code() as u32, 3);
            continue;
        }
        let rank = scheme.ranks[mode.code()];
        for _ in 0..rank {
            w.write_bit(true);
        }
        if rank < 7 {
            w.write_bit(false);
        }
    }
}

/// Variable-length code for one vector component as `(bits, length)`.
fn packed_component(v: i16) -> (u32, u8) {
    let mag = v.unsigned_abs() as u32;
    let sign = u32::from(v < 0);
    match mag {
        0 => (0, 3),
        1 => (if sign == 1 { 2 } else { 1 }, 3),
        2 => ((3 << 1) | sign, 4),
        3 => ((4 << 1) | sign, 4),
        4..=7 => ((5 << 3) | ((mag - 4) << 1) | sign, 6),
        8..=15 => ((6 << 4) | ((mag - 8) << 1) | sign, 7),
        _ => ((7 << 5) | ((mag - 16) << 1) | sign, 8),
    }
}

fn raw_component(v: i16) -> (u32, u8) {
    ((u32::from(v.unsigned_abs()) << 1) | u32::from(v < 0), 6)
}

/// Whether the flat table codes `mvs` in strictly fewer bits.
pub fn prefer_raw_vectors(mvs: &[MotionVector]) -> bool {
    let packed: u32 = mvs
        .iter()
        .map(|mv| u32::from(packed_component(mv.x).1) + u32::from(packed_component(mv.y).1))
        .sum();
    (12 * mvs.len() as u32) < packed
}

pub fn write_vectors(w: &mut BitWriter, mvs: &[MotionVector]) {
    debug_assert!(mvs.iter().all(|mv| mv.in_range()));
    let raw = prefer_raw_vectors(mvs);
    w.write_bit(raw);
    let code: fn(i16) -> (u32, u8) = if raw { raw_component } else { packed_component };
    for mv in mvs {
        for c in [mv.x, mv.y] {
            let (bits, len) = code(c);
            w.write_bits(bits, len);
        }
    }
}
