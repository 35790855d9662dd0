/// Largest coefficient magnitude the token alphabet can carry.
pub const MAX_COEFF: i16 = 580;

/// Pixel-difference, transform and quantization primitives.
///
/// All blocks are 8x8 in raster order.
pub trait Dsp {
    fn sad(&self, src: &[u8; 64], pred: &[u8; 64]) -> u32;

    /// Prediction error used for mode decisions: `64 * sum(d^2) - sum(d)^2`.
    fn inter_error(&self, src: &[u8; 64], pred: &[u8; 64]) -> u32;

    fn intra_error(&self, src: &[u8; 64]) -> u32;

    /// Forward DCT scaled so that the reconstruction transform inverts it.
    fn fdct(&self, residual: &[i16; 64]) -> [i32; 64];

    /// Quantizes raster-order coefficients with raster-order step sizes.
    fn quantize(&self, coeffs: &[i32; 64], qmat: &[i32; 64]) -> [i16; 64];
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarDsp;

fn variance_metric(diffs: impl Iterator<Item = i32>) -> u32 {
    let (sum, sum_sq) = diffs.fold((0i64, 0i64), |(s, sq), d| (s + d as i64, sq + (d * d) as i64));
    (64 * sum_sq - sum * sum) as u32
}

fn dct_basis() -> [[f64; 8]; 8] {
    let mut basis = [[0f64; 8]; 8];
    for (k, row) in basis.iter_mut().enumerate() {
        let scale = if k == 0 {
            (1.0f64 / 8.0).sqrt()
        } else {
            (2.0f64 / 8.0).sqrt()
        };
        for (n, b) in row.iter_mut().enumerate() {
            *b = scale * ((2 * n + 1) as f64 * k as f64 * std::f64::consts::PI / 16.0).cos();
        }
    }
    basis
}

impl Dsp for ScalarDsp {
    fn sad(&self, src: &[u8; 64], pred: &[u8; 64]) -> u32 {
        src.iter()
            .zip(pred.iter())
            .map(|(&a, &b)| (a as i32 - b as i32).unsigned_abs())
            .sum()
    }

    fn inter_error(&self, src: &[u8; 64], pred: &[u8; 64]) -> u32 {
        variance_metric(src.iter().zip(pred.iter()).map(|(&a, &b)| a as i32 - b as i32))
    }

    fn intra_error(&self, src: &[u8; 64]) -> u32 {
        variance_metric(src.iter().map(|&a| a as i32))
    }

    fn fdct(&self, residual: &[i16; 64]) -> [i32; 64] {
        let basis = dct_basis();
        let mut rows = [0f64; 64];
        for y in 0..8 {
            for (k, b) in basis.iter().enumerate() {
                rows[y * 8 + k] = (0..8).map(|n| b[n] * residual[y * 8 + n] as f64).sum();
            }
        }
        let mut out = [0i32; 64];
        for x in 0..8 {
            for (k, b) in basis.iter().enumerate() {
                let v: f64 = (0..8).map(|n| b[n] * rows[n * 8 + x]).sum();
                out[k * 8 + x] = (v * 4.0).round() as i32;
            }
        }
        out
    }

    fn quantize(&self, coeffs: &[i32; 64], qmat: &[i32; 64]) -> [i16; 64] {
        let mut out = [0i16; 64];
        for ((dst, &c), &q) in out.iter_mut().zip(coeffs.iter()).zip(qmat.iter()) {
            let mag = ((c.abs() + q / 2) / q).min(MAX_COEFF as i32) as i16;
            *dst = if c < 0 { -mag } else { mag };
        }
        out
    }
}
