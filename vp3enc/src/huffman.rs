use crate::bitwriter::BitWriter;
use crate::huffman_tables::{AC_BITS, AC_CODES, DC_BITS, DC_CODES};
use crate::tokenize::Token;

const TABLES: usize = 16;

/// Chosen table per plane group: index 0 is luma, 1 chroma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableChoice {
    pub dc: [u8; 2],
    pub ac: [u8; 2],
}

fn codeword(token: &Token, table: usize) -> (u16, u8) {
    let sym = token.symbol as usize;
    if token.band == 0 {
        (DC_CODES[table][sym], DC_BITS[table][sym])
    } else {
        let band = token.band as usize - 1;
        (AC_CODES[band][table][sym], AC_BITS[band][table][sym])
    }
}

/// First table with the smallest cost.
fn cheapest(costs: &[u64; TABLES]) -> u8 {
    let mut best = 0;
    for (i, &c) in costs.iter().enumerate() {
        if c < costs[best] {
            best = i;
        }
    }
    best as u8
}

/// Picks, for each of the DC and AC groups and each plane group, the table
/// that codes this frame's tokens in the fewest bits.
pub fn choose_tables(tokens: &[Token]) -> TableChoice {
    let mut dc = [[0u64; TABLES]; 2];
    let mut ac = [[0u64; TABLES]; 2];
    for token in tokens {
        let group = usize::from(token.chroma);
        let costs = if token.band == 0 { &mut dc[group] } else { &mut ac[group] };
        for (table, cost) in costs.iter_mut().enumerate() {
            *cost += u64::from(codeword(token, table).1);
        }
    }
    TableChoice {
        dc: [cheapest(&dc[0]), cheapest(&dc[1])],
        ac: [cheapest(&ac[0]), cheapest(&ac[1])],
    }
}

fn write_group(w: &mut BitWriter, tokens: &[Token], tables: [u8; 2]) {
    w.write_bits(u32::from(tables[0]), 4);
    w.write_bits(u32::from(tables[1]), 4);
    for token in tokens {
        let (code, len) = codeword(token, tables[usize::from(token.chroma)] as usize);
        w.write_bits(u32::from(code), len);
        if token.extra_bits > 0 {
            w.write_bits(u32::from(token.extra), token.extra_bits);
        }
    }
}

/// Writes the DC table selectors, the DC tokens, the AC table selectors and
/// the AC tokens.
pub fn write_tokens(w: &mut BitWriter, tokens: &[Token], choice: &TableChoice) {
    let split = tokens.partition_point(|t| t.band == 0);
    debug_assert!(tokens[split..].iter().all(|t| t.band != 0));
    write_group(w, &tokens[..split], choice.dc);
    write_group(w, &tokens[split..], choice.ac);
}
