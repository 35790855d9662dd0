/// Zig-zag position to raster position within an 8x8 block.
pub const ZIGZAG: [usize; 64] = [
     0,  1,  8, 16,  9,  2,  3, 10,
    17, 24, 32, 25, 18, 11,  4,  5,
    12, 19, 26, 33, 40, 48, 41, 34,
    27, 20, 13,  6,  7, 14, 21, 28,
    35, 42, 49, 56, 57, 50, 43, 36,
    29, 22, 15, 23, 30, 37, 44, 51,
    58, 59, 52, 45, 38, 31, 39, 46,
    53, 60, 61, 54, 47, 55, 62, 63,
];

/// Reorders raster coefficients into zig-zag order.
pub fn to_zigzag(raster: &[i16; 64]) -> [i16; 64] {
    let mut out = [0i16; 64];
    for (dst, &pos) in out.iter_mut().zip(ZIGZAG.iter()) {
        *dst = raster[pos];
    }
    out
}

/// Reorders zig-zag coefficients back into raster order.
pub fn from_zigzag(zigzag: &[i16; 64]) -> [i16; 64] {
    let mut out = [0i16; 64];
    for (&c, &pos) in zigzag.iter().zip(ZIGZAG.iter()) {
        out[pos] = c;
    }
    out
}
