use crate::fragment::MotionVector;
use crate::hierarchy::{FragmentHierarchy, Plane};
use crate::y4m::FramePixels;

/// Deblocking limit per quantizer index.
pub const LOOP_STRENGTH: [i32; 64] = [
    30, 25, 20, 20, 15, 15, 14, 14,
    13, 13, 12, 12, 11, 11, 10, 10,
     9,  9,  8,  8,  7,  7,  7,  7,
     6,  6,  6,  6,  5,  5,  5,  5,
     4,  4,  4,  4,  3,  3,  3,  3,
     2,  2,  2,  2,  2,  2,  2,  2,
     0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
];

const C1S7: i32 = 64277;
const C2S6: i32 = 60547;
const C3S5: i32 = 54491;
const C4S4: i32 = 46341;
const C5S3: i32 = 36410;
const C6S2: i32 = 25080;
const C7S1: i32 = 12785;

#[inline]
fn mul(a: i32, b: i32) -> i32 {
    (a * b) >> 16
}

fn idct_1d(ip: [i32; 8], bias: i32) -> [i32; 8] {
    let a = mul(C1S7, ip[1]) + mul(C7S1, ip[7]);
    let b = mul(C7S1, ip[1]) - mul(C1S7, ip[7]);
    let c = mul(C3S5, ip[3]) + mul(C5S3, ip[5]);
    let d = mul(C3S5, ip[5]) - mul(C5S3, ip[3]);

    let ad = mul(C4S4, a - c);
    let bd = mul(C4S4, b - d);
    let cd = a + c;
    let dd = b + d;

    let e = mul(C4S4, ip[0] + ip[4]) + bias;
    let f = mul(C4S4, ip[0] - ip[4]) + bias;
    let g = mul(C2S6, ip[2]) + mul(C6S2, ip[6]);
    let h = mul(C6S2, ip[2]) - mul(C2S6, ip[6]);

    let ed = e - g;
    let gd = e + g;
    let add = f + ad;
    let bdd = bd - h;
    let fd = f - ad;
    let hd = bd + h;

    [
        gd + cd,
        add + hd,
        add - hd,
        ed + dd,
        ed - dd,
        fd + bdd,
        fd - bdd,
        gd - cd,
    ]
}

/// Inverse transform of dequantized raster-order coefficients. The result
/// is the pixel-domain residual.
pub fn idct(coeffs: &[i32; 64]) -> [i32; 64] {
    let mut tmp = [0i32; 64];
    for r in 0..8 {
        let row: [i32; 8] = std::array::from_fn(|c| coeffs[r * 8 + c]);
        if row.iter().any(|&v| v != 0) {
            tmp[r * 8..r * 8 + 8].copy_from_slice(&idct_1d(row, 0));
        }
    }
    let mut out = [0i32; 64];
    for c in 0..8 {
        let col: [i32; 8] = std::array::from_fn(|r| tmp[r * 8 + c]);
        let res = idct_1d(col, 8);
        for r in 0..8 {
            out[r * 8 + c] = res[r] >> 4;
        }
    }
    out
}

pub fn reconstruct(coeffs: &[i32; 64], pred: &[u8; 64]) -> [u8; 64] {
    let residual = idct(coeffs);
    let mut out = [0u8; 64];
    for ((o, &p), &r) in out.iter_mut().zip(pred.iter()).zip(residual.iter()) {
        *o = (p as i32 + r).clamp(0, 255) as u8;
    }
    out
}

fn mv_mode(mv: MotionVector) -> usize {
    let mode = ((mv.x & 1) + (mv.y & 1) * 2) as usize;
    if mode == 3 && (mv.x ^ mv.y) < 0 { 4 } else { mode }
}

/// Motion-compensated 8x8 prediction for the block whose top-left pixel is
/// `(x, y)` in `plane`. `mv` is in half-pels of that plane. Reads outside the
/// picture are clamped to its edges.
pub fn predict_block(
    reference: &FramePixels,
    plane: Plane,
    x: usize,
    y: usize,
    mv: MotionVector,
) -> [u8; 64] {
    let w = reference.plane_width(plane) as isize;
    let h = reference.plane_height(plane) as isize;
    let data = reference.plane(plane);
    let ox = x as isize + (mv.x >> 1) as isize;
    let oy = y as isize + (mv.y >> 1) as isize;
    let at = |px: isize, py: isize| -> u32 {
        data[(py.clamp(0, h - 1) * w + px.clamp(0, w - 1)) as usize] as u32
    };
    let mode = mv_mode(mv);

    let mut out = [0u8; 64];
    for r in 0..8isize {
        for c in 0..8isize {
            let (px, py) = (ox + c, oy + r);
            let v = match mode {
                0 => at(px, py),
                1 => (at(px, py) + at(px + 1, py)) >> 1,
                2 => (at(px, py) + at(px, py + 1)) >> 1,
                3 => (at(px, py) + at(px + 1, py + 1)) >> 1,
                _ => (at(px + 1, py) + at(px, py + 1)) >> 1,
            };
            out[(r * 8 + c) as usize] = v as u8;
        }
    }
    out
}

fn bound(f: i32, limit: i32) -> i32 {
    let mag = f.abs();
    if mag < limit {
        f
    } else if mag < 2 * limit {
        f.signum() * (2 * limit - mag)
    } else {
        0
    }
}

/// Filters the edge in front of `off`. `across` steps over the edge and
/// `along` steps to the next of the eight filtered positions.
fn filter_edge(data: &mut [u8], off: usize, across: usize, along: usize, limit: i32) {
    for i in 0..8 {
        let p = off + i * along;
        let a = data[p - 2 * across] as i32;
        let b = data[p - across] as i32;
        let c = data[p] as i32;
        let d = data[p + across] as i32;
        let f = bound(((a - d) + 3 * (c - b) + 4) >> 3, limit);
        data[p - across] = (b + f).clamp(0, 255) as u8;
        data[p] = (c - f).clamp(0, 255) as u8;
    }
}

pub fn loop_filter(
    frame: &mut FramePixels,
    hierarchy: &FragmentHierarchy,
    coded: impl Fn(usize) -> bool,
    q_index: u8,
) {
    let limit = LOOP_STRENGTH[q_index as usize];
    if limit == 0 {
        return;
    }
    for plane in Plane::ALL {
        let (bw, bh) = hierarchy.plane_blocks(plane);
        let stride = frame.plane_width(plane);
        let data = frame.plane_mut(plane);
        for by in 0..bh {
            for bx in 0..bw {
                let is_coded = coded(hierarchy.fragment_at(plane, bx, by));
                let origin = by * 8 * stride + bx * 8;
                if bx > 0 && is_coded {
                    filter_edge(data, origin, 1, stride, limit);
                }
                if by > 0 && is_coded {
                    filter_edge(data, origin, stride, 1, limit);
                }
                if bx + 1 < bw && !coded(hierarchy.fragment_at(plane, bx + 1, by)) {
                    filter_edge(data, origin + 8, 1, stride, limit);
                }
                if by + 1 < bh && !coded(hierarchy.fragment_at(plane, bx, by + 1)) {
                    filter_edge(data, origin + 8 * stride, stride, 1, limit);
                }
            }
        }
    }
}
