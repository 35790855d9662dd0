use crate::hierarchy::Plane;

pub const Q_TABLE_SIZE: usize = 64;

/// AC scale per quantizer index. This is the frame "quality value".
pub const AC_SCALES: [u16; Q_TABLE_SIZE] = [
    500, 450, 400, 370, 340, 310, 285, 265,
    245, 225, 210, 195, 185, 180, 170, 160,
    150, 145, 135, 130, 125, 115, 110, 107,
    100,  96,  93,  89,  85,  82,  75,  74,
     70,  68,  64,  60,  57,  56,  52,  50,
     49,  45,  44,  43,  40,  38,  37,  35,
     33,  32,  30,  29,  28,  25,  24,  22,
     21,  19,  18,  17,  15,  13,  12,  10,
];

pub const DC_SCALES: [u16; Q_TABLE_SIZE] = [
    220, 200, 190, 180, 170, 170, 160, 160,
    150, 150, 140, 140, 130, 130, 120, 120,
    110, 110, 100, 100,  90,  90,  90,  80,
     80,  80,  70,  70,  70,  60,  60,  60,
     60,  50,  50,  50,  50,  40,  40,  40,
     40,  40,  30,  30,  30,  30,  30,  30,
     30,  20,  20,  20,  20,  20,  20,  20,
     20,  10,  10,  10,  10,  10,  10,  10,
];

const BASE_INTRA_Y: [i32; 64] = [
    16,  11,  10,  16,  24,  40,  51,  61,
    12,  12,  14,  19,  26,  58,  60,  55,
    14,  13,  16,  24,  40,  57,  69,  56,
    14,  17,  22,  29,  51,  87,  80,  62,
    18,  22,  37,  58,  68, 109, 103,  77,
    24,  35,  55,  64,  81, 104, 113,  92,
    49,  64,  78,  87, 103, 121, 120, 101,
    72,  92,  95,  98, 112, 100, 103,  99,
];

const BASE_INTRA_C: [i32; 64] = [
    17, 18, 24, 47, 99, 99, 99, 99,
    18, 21, 26, 66, 99, 99, 99, 99,
    24, 26, 56, 99, 99, 99, 99, 99,
    47, 66, 99, 99, 99, 99, 99, 99,
    99, 99, 99, 99, 99, 99, 99, 99,
    99, 99, 99, 99, 99, 99, 99, 99,
    99, 99, 99, 99, 99, 99, 99, 99,
    99, 99, 99, 99, 99, 99, 99, 99,
];

const BASE_INTER: [i32; 64] = [
    16,  16,  16,  20,  24,  28,  32,  40,
    16,  16,  20,  24,  28,  32,  40,  48,
    16,  20,  24,  28,  32,  40,  48,  64,
    20,  24,  28,  32,  40,  48,  64,  64,
    24,  28,  32,  40,  48,  64,  64,  64,
    28,  32,  40,  48,  64,  64,  64,  96,
    32,  40,  48,  64,  64,  64,  96, 128,
    40,  48,  64,  64,  64,  96, 128, 128,
];

/// Quantizer index whose AC scale equals `ac_scale`.
pub fn q_index_of(ac_scale: u16) -> Option<u8> {
    AC_SCALES
        .iter()
        .position(|&s| s == ac_scale)
        .map(|i| i as u8)
}

/// Finest quantizer index still at least as coarse as `ac_scale`.
pub fn nearest_q_index(ac_scale: u16) -> u8 {
    AC_SCALES
        .iter()
        .rposition(|&s| s >= ac_scale)
        .map_or(0, |i| i as u8)
}

fn rescale(base: &[i32; 64], dc_scale: i32, ac_scale: i32, min: i32) -> [i32; 64] {
    let mut out = [0i32; 64];
    for (dst, &b) in out.iter_mut().zip(base.iter()) {
        *dst = (b * ac_scale / 100).max(min) << 2;
    }
    out[0] = (base[0] * dc_scale / 100).max(min * 2) << 2;
    out
}

/// Dequantization matrices for one frame, in raster order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantTables {
    ac_scale: u16,
    intra_y: [i32; 64],
    intra_c: [i32; 64],
    inter: [i32; 64],
}

impl QuantTables {
    pub fn for_index(q_index: u8) -> Self {
        let q = q_index as usize;
        Self::with_scales(AC_SCALES[q], DC_SCALES[q])
    }

    /// Tables for a quality value that may not be in [`AC_SCALES`].
    pub fn for_quality(ac_scale: u16) -> Self {
        Self::with_scales(ac_scale, DC_SCALES[nearest_q_index(ac_scale) as usize])
    }

    fn with_scales(ac_scale: u16, dc_scale: u16) -> Self {
        let (ac, dc) = (i32::from(ac_scale), i32::from(dc_scale));
        Self {
            ac_scale,
            intra_y: rescale(&BASE_INTRA_Y, dc, ac, 2),
            intra_c: rescale(&BASE_INTRA_C, dc, ac, 2),
            inter: rescale(&BASE_INTER, dc, ac, 4),
        }
    }

    pub fn ac_scale(&self) -> u16 {
        self.ac_scale
    }

    pub fn matrix(&self, intra: bool, plane: Plane) -> &[i32; 64] {
        match (intra, plane) {
            (true, Plane::Y) => &self.intra_y,
            (true, _) => &self.intra_c,
            (false, _) => &self.inter,
        }
    }
}
