use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CodingMode {
    #[default]
    InterNoMv,
    Intra,
    InterMv,
    InterLastMv,
    InterPriorLastMv,
    GoldenNoMv,
    GoldenMv,
    InterFourMv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefFrame {
    None,
    Previous,
    Golden,
}

impl CodingMode {
    pub const DEFAULT_ORDER: [CodingMode; 8] = [
        CodingMode::InterNoMv,
        CodingMode::Intra,
        CodingMode::InterMv,
        CodingMode::InterLastMv,
        CodingMode::InterPriorLastMv,
        CodingMode::GoldenNoMv,
        CodingMode::GoldenMv,
        CodingMode::InterFourMv,
    ];

    pub fn code(self) -> usize {
        match self {
            CodingMode::InterNoMv => 0,
            CodingMode::Intra => 1,
            CodingMode::InterMv => 2,
            CodingMode::InterLastMv => 3,
            CodingMode::InterPriorLastMv => 4,
            CodingMode::GoldenNoMv => 5,
            CodingMode::GoldenMv => 6,
            CodingMode::InterFourMv => 7,
        }
    }

    pub fn reference(self) -> RefFrame {
        match self {
            CodingMode::Intra => RefFrame::None,
            CodingMode::GoldenNoMv | CodingMode::GoldenMv => RefFrame::Golden,
            _ => RefFrame::Previous,
        }
    }

    /// DC prediction bucket: intra, previous frame, golden frame.
    pub fn dc_bucket(self) -> usize {
        match self.reference() {
            RefFrame::None => 0,
            RefFrame::Previous => 1,
            RefFrame::Golden => 2,
        }
    }

    pub fn is_intra(self) -> bool {
        self == CodingMode::Intra
    }

    /// Number of vectors this mode puts on the vector list.
    pub fn new_vectors(self) -> usize {
        match self {
            CodingMode::InterMv | CodingMode::GoldenMv => 1,
            CodingMode::InterFourMv => 4,
            _ => 0,
        }
    }
}

/// Motion vector in half-pel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MotionVector {
    pub x: i16,
    pub y: i16,
}

impl MotionVector {
    pub const ZERO: MotionVector = MotionVector { x: 0, y: 0 };
    pub const MAX: i16 = 31;

    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    pub fn in_range(self) -> bool {
        self.x.abs() <= Self::MAX && self.y.abs() <= Self::MAX
    }

    /// Chroma vector for a luma vector, still in chroma half-pels.
    pub fn to_chroma(self) -> MotionVector {
        MotionVector {
            x: (self.x >> 1) | (self.x & 1),
            y: (self.y >> 1) | (self.y & 1),
        }
    }

    /// Average of four block vectors as used for four-vector chroma.
    pub fn average4(mvs: &[MotionVector; 4]) -> MotionVector {
        let sum = mvs.iter().fold(MotionVector::ZERO, |acc, &mv| acc + mv);
        MotionVector {
            x: (sum.x + 2) >> 2,
            y: (sum.y + 2) >> 2,
        }
    }
}

impl Add for MotionVector {
    type Output = MotionVector;

    fn add(self, rhs: MotionVector) -> MotionVector {
        MotionVector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

#[derive(Debug, Clone)]
pub struct Fragment {
    pub mode: CodingMode,
    pub mv: MotionVector,
    pub coded: bool,
    /// Coded because of a refresh rather than because it changed.
    pub refresh: bool,
    /// Quantized coefficients in zig-zag order. Entry 0 holds the DC
    /// residual once prediction has run.
    pub coeffs: [i16; 64],
    pub token_count: u16,
    /// One past the last non-zero coefficient in zig-zag order.
    pub eob: u8,
}

impl Default for Fragment {
    fn default() -> Self {
        Self {
            mode: CodingMode::InterNoMv,
            mv: MotionVector::ZERO,
            coded: false,
            refresh: false,
            coeffs: [0; 64],
            token_count: 0,
            eob: 0,
        }
    }
}

impl Fragment {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn update_eob(&mut self) {
        self.eob = self
            .coeffs
            .iter()
            .rposition(|&c| c != 0)
            .map_or(0, |p| p as u8 + 1);
    }
}
