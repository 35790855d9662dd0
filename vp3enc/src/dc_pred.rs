use crate::dsp::MAX_COEFF;
use crate::fragment::Fragment;
use crate::hierarchy::{FragmentHierarchy, Plane};

/// Weights for left, up-left, up, up-right and the divisor, indexed by the
/// mask of usable neighbours.
const DC_WEIGHTS: [[i32; 5]; 16] = [
    [0, 0, 0, 0, 0],
    [1, 0, 0, 0, 1],
    [0, 1, 0, 0, 1],
    [1, 0, 0, 0, 1],
    [0, 0, 1, 0, 1],
    [1, 0, 1, 0, 2],
    [0, 0, 1, 0, 1],
    [29, -26, 29, 0, 32],
    [0, 0, 0, 1, 1],
    [75, 0, 0, 53, 128],
    [0, 1, 0, 1, 2],
    [75, 0, 0, 53, 128],
    [0, 0, 1, 0, 1],
    [75, 0, 0, 53, 128],
    [0, 3, 10, 3, 16],
    [29, -26, 29, 0, 32],
];

const OUTRANGE: i32 = 128;

const LEFT: usize = 0;
const UP_LEFT: usize = 1;
const UP: usize = 2;

/// Predicts a DC value from the usable neighbours (left, up-left, up,
/// up-right) or falls back to `last_dc` when there are none.
pub fn predict(neighbours: &[Option<i16>; 4], last_dc: i16) -> i16 {
    let mut mask = 0usize;
    let mut values = [0i32; 4];
    for (i, n) in neighbours.iter().enumerate() {
        if let Some(v) = n {
            mask |= 1 << i;
            values[i] = i32::from(*v);
        }
    }
    if mask == 0 {
        return last_dc;
    }
    let weights = &DC_WEIGHTS[mask];
    let sum: i32 = values.iter().zip(weights.iter()).map(|(v, w)| v * w).sum();
    let pred = sum / weights[4];
    if mask & 7 == 7 {
        for i in [UP, LEFT, UP_LEFT] {
            if (pred - values[i]).abs() > OUTRANGE {
                return values[i] as i16;
            }
        }
    }
    pred as i16
}

/// Replaces each coded fragment's DC with its prediction residual.
///
/// `dc` receives the DC value the decoder will see for every coded
/// fragment; it differs from the quantized DC only when the residual had
/// to be clamped.
pub fn apply(hierarchy: &FragmentHierarchy, fragments: &mut [Fragment], dc: &mut [i16]) {
    for plane in Plane::ALL {
        let (bw, bh) = hierarchy.plane_blocks(plane);
        let mut last_dc = [0i16; 3];
        for by in 0..bh {
            for bx in 0..bw {
                let idx = hierarchy.fragment_at(plane, bx, by);
                if !fragments[idx].coded {
                    continue;
                }
                let bucket = fragments[idx].mode.dc_bucket();
                let usable = |n: usize| {
                    let f = &fragments[n];
                    (f.coded && f.mode.dc_bucket() == bucket).then_some(dc[n])
                };
                let mut neighbours = [None; 4];
                if bx > 0 {
                    neighbours[0] = usable(idx - 1);
                    if by > 0 {
                        neighbours[1] = usable(idx - 1 - bw);
                    }
                }
                if by > 0 {
                    neighbours[2] = usable(idx - bw);
                    if bx + 1 < bw {
                        neighbours[3] = usable(idx + 1 - bw);
                    }
                }
                let pred = predict(&neighbours, last_dc[bucket]);
                let actual = fragments[idx].coeffs[0];
                let residual = (actual - pred).clamp(-MAX_COEFF, MAX_COEFF);
                let kept = pred + residual;
                fragments[idx].coeffs[0] = residual;
                dc[idx] = kept;
                last_dc[bucket] = kept;
            }
        }
    }
}
