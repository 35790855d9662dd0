use crate::fragment::Fragment;
use crate::hierarchy::FragmentHierarchy;

pub const MAX_EOB_RUN: u16 = 4095;

const LITERAL_BASE: [u16; 6] = [7, 9, 13, 21, 37, 69];
const LITERAL_BITS: [u8; 6] = [1, 2, 3, 4, 5, 9];

/// Entropy table band for a token read at zig-zag position `pos`: 0 is the
/// DC band, 1 to 4 the AC bands.
pub fn band_of(pos: usize) -> u8 {
    match pos {
        0 => 0,
        1..=5 => 1,
        6..=14 => 2,
        15..=27 => 3,
        _ => 4,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub symbol: u8,
    pub extra: u16,
    pub extra_bits: u8,
    pub chroma: bool,
    pub band: u8,
}

impl Token {
    pub fn is_eob(&self) -> bool {
        self.symbol <= 6
    }
}

type Coded = (u8, u16, u8);

fn literal(value: i16) -> Coded {
    let neg = u16::from(value < 0);
    let mag = value.unsigned_abs();
    match mag {
        1 => (9 + neg as u8, 0, 0),
        2 => (11 + neg as u8, 0, 0),
        3..=6 => (10 + mag as u8, neg, 1),
        _ => {
            let cat = LITERAL_BASE
                .iter()
                .rposition(|&b| mag >= b)
                .unwrap_or(0);
            let bits = LITERAL_BITS[cat];
            debug_assert!(mag - LITERAL_BASE[cat] < 1 << bits, "coefficient {value} out of range");
            (17 + cat as u8, (neg << bits) | (mag - LITERAL_BASE[cat]), bits + 1)
        }
    }
}

fn eob_run(run: u16) -> Coded {
    match run {
        1..=3 => (run as u8 - 1, 0, 0),
        4..=7 => (3, run - 4, 2),
        8..=15 => (4, run - 8, 3),
        16..=31 => (5, run - 16, 4),
        _ => (6, run, 12),
    }
}

/// Codes the coefficients of one fragment starting at `pos`. Returns the
/// token and the position the fragment continues from; `None` means the
/// rest of the block is zero.
pub fn next_token(coeffs: &[i16; 64], pos: usize) -> Option<(Coded, usize)> {
    let nz = (pos..64).find(|&i| coeffs[i] != 0)?;
    let run = (nz - pos) as u16;
    let value = coeffs[nz];
    let mag = value.unsigned_abs();
    let neg = u16::from(value < 0);

    let token = if run == 0 {
        (literal(value), nz + 1)
    } else if mag == 1 && run <= 17 {
        let coded = match run {
            1..=5 => (22 + run as u8, neg, 1),
            6..=9 => (28, (neg << 2) | (run - 6), 3),
            _ => (29, (neg << 3) | (run - 10), 4),
        };
        (coded, nz + 1)
    } else if (2..=3).contains(&mag) && run <= 3 {
        let coded = if run == 1 {
            (30, (neg << 1) | (mag - 2), 2)
        } else {
            (31, (neg << 2) | ((mag - 2) << 1) | (run - 2), 3)
        };
        (coded, nz + 1)
    } else if run <= 8 {
        ((7, run - 1, 3), nz)
    } else {
        ((8, run - 1, 6), nz)
    };
    Some(token)
}

struct PendingEob {
    run: u16,
    chroma: bool,
    band: u8,
    owner: usize,
}

/// Builds the frame's token list and sets every fragment's token count and
/// end-of-block index.
pub fn tokenize(hierarchy: &FragmentHierarchy, fragments: &mut [Fragment], tokens: &mut Vec<Token>) {
    tokens.clear();
    let order = hierarchy.coded_order();
    let mut next_pos = vec![64u8; fragments.len()];
    for &f in order {
        fragments[f].token_count = 0;
        if fragments[f].coded {
            fragments[f].update_eob();
            next_pos[f] = 0;
        }
    }

    let mut pending: Option<PendingEob> = None;
    let flush = |pending: &mut Option<PendingEob>, tokens: &mut Vec<Token>, fragments: &mut [Fragment]| {
        if let Some(p) = pending.take() {
            let (symbol, extra, extra_bits) = eob_run(p.run);
            tokens.push(Token {
                symbol,
                extra,
                extra_bits,
                chroma: p.chroma,
                band: p.band,
            });
            fragments[p.owner].token_count += 1;
        }
    };

    for pass in 0..64 {
        let band = band_of(pass);
        for &f in order {
            if next_pos[f] as usize != pass {
                continue;
            }
            let chroma = hierarchy.position(f).0.is_chroma();
            match next_token(&fragments[f].coeffs, pass) {
                None => {
                    next_pos[f] = 64;
                    match pending.as_mut() {
                        Some(p) if p.chroma == chroma && p.run < MAX_EOB_RUN => p.run += 1,
                        _ => {
                            flush(&mut pending, tokens, fragments);
                            pending = Some(PendingEob {
                                run: 1,
                                chroma,
                                band,
                                owner: f,
                            });
                        }
                    }
                }
                Some(((symbol, extra, extra_bits), next)) => {
                    flush(&mut pending, tokens, fragments);
                    tokens.push(Token {
                        symbol,
                        extra,
                        extra_bits,
                        chroma,
                        band,
                    });
                    fragments[f].token_count += 1;
                    next_pos[f] = next as u8;
                }
            }
        }
    }
    flush(&mut pending, tokens, fragments);
}
