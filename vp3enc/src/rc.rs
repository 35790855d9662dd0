use std::ops::RangeInclusive;

use crate::packet::FrameType;
use crate::quant::Q_TABLE_SIZE;

/// Estimated bytes per coded block of an inter frame at each quantizer
/// index, before correction.
const INTER_BPB: [f64; Q_TABLE_SIZE] = [
    0.300, 0.332, 0.371, 0.399, 0.433, 0.472, 0.512, 0.548,
    0.591, 0.641, 0.684, 0.734, 0.771, 0.792, 0.836, 0.886,
    0.942, 0.972, 1.041, 1.079, 1.120, 1.212, 1.264, 1.298,
    1.384, 1.439, 1.483, 1.546, 1.615, 1.671, 1.819, 1.842,
    1.942, 1.996, 2.115, 2.249, 2.361, 2.401, 2.576, 2.674,
    2.726, 2.955, 3.019, 3.086, 3.305, 3.470, 3.559, 3.752,
    3.968, 4.086, 4.344, 4.486, 4.638, 5.165, 5.370, 5.832,
    6.096, 6.704, 7.057, 7.451, 8.392, 9.614, 10.373, 12.335,
];

const KEY_BPB: [f64; Q_TABLE_SIZE] = [
    1.600, 1.750, 1.934, 2.067, 2.221, 2.402, 2.580, 2.745,
    2.934, 3.154, 3.345, 3.562, 3.725, 3.813, 4.003, 4.214,
    4.452, 4.582, 4.869, 5.028, 5.198, 5.580, 5.795, 5.933,
    6.284, 6.506, 6.684, 6.938, 7.215, 7.439, 8.025, 8.117,
    8.510, 8.722, 9.183, 9.701, 10.133, 10.287, 10.956, 11.327,
    11.523, 12.388, 12.627, 12.876, 13.693, 14.303, 14.631, 15.339,
    16.125, 16.553, 17.486, 17.997, 18.542, 20.417, 21.138, 22.761,
    23.679, 25.781, 26.994, 28.338, 31.519, 35.595, 38.101, 44.488,
];

pub const KEY_Q_RANGE: RangeInclusive<u8> = 20..=50;

/// Error bound the table walk starts from.
const INITIAL_ERROR: f64 = 10000.0;

const MIN_CORRECTION: f64 = 0.3;
const MAX_CORRECTION: f64 = 3.0;
const CORRECTION_ALPHA: f64 = 0.2;

fn bpb_table(frame_type: FrameType) -> &'static [f64; Q_TABLE_SIZE] {
    match frame_type {
        FrameType::Key => &KEY_BPB,
        FrameType::Inter => &INTER_BPB,
    }
}

pub fn bytes_per_block(frame_type: FrameType, q_index: u8, correction: f64) -> f64 {
    bpb_table(frame_type)[q_index as usize] * correction
}

/// Picks the quantizer whose corrected estimate is closest to the per-block
/// target, walking from the coarsest index.
pub fn select_q_index(
    target_bytes: u32,
    coded_blocks: usize,
    frame_type: FrameType,
    correction: f64,
    max_q_index: u8,
) -> u8 {
    let table = bpb_table(frame_type);
    let target = f64::from(target_bytes) / coded_blocks.max(1) as f64;
    let mut last_error = INITIAL_ERROR;
    let mut q = Q_TABLE_SIZE - 1;
    for (i, &bpb) in table.iter().enumerate() {
        let estimate = bpb * correction;
        if estimate > target {
            let error = estimate - target;
            q = if error <= last_error || i == 0 { i } else { i - 1 };
            break;
        }
        last_error = target - estimate;
    }
    let mut q = q as u8;
    if frame_type == FrameType::Key {
        q = q.clamp(*KEY_Q_RANGE.start(), *KEY_Q_RANGE.end());
    }
    q.min(max_q_index)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correction(f64);

impl Default for Correction {
    fn default() -> Self {
        Self(1.0)
    }
}

impl Correction {
    pub fn factor(&self) -> f64 {
        self.0
    }

    pub fn update(&mut self, frame_type: FrameType, q_index: u8, coded_blocks: usize, actual_bytes: usize) {
        if coded_blocks == 0 {
            return;
        }
        let predicted = bpb_table(frame_type)[q_index as usize] * coded_blocks as f64;
        let observed = actual_bytes as f64 / predicted;
        let next = CORRECTION_ALPHA * observed + (1.0 - CORRECTION_ALPHA) * self.0;
        self.0 = next.clamp(MIN_CORRECTION, MAX_CORRECTION);
    }
}

/// Buffer model turning a target bitrate into per-frame byte budgets.
pub struct RateControl {
    target_bitrate: u64,
    buffer_size: f64,
    buffer_fullness: f64,
    target_bits_per_frame: f64,
    avg_frame_bits: f64,
    avg_q_index: f64,
    frames_encoded: u64,
    keyint: usize,
    keyframe_boost: f64,
}

impl RateControl {
    pub fn new(target_bitrate: u64, fps: f64, keyint: usize) -> Self {
        let target_bits_per_frame = target_bitrate as f64 / fps;
        let buffer_size = target_bitrate as f64;

        Self {
            target_bitrate,
            buffer_size,
            buffer_fullness: buffer_size / 2.0,
            target_bits_per_frame,
            avg_frame_bits: target_bits_per_frame,
            avg_q_index: 32.0,
            frames_encoded: 0,
            keyint,
            keyframe_boost: 4.0,
        }
    }

    fn target_bits_for_frame(&self, is_keyframe: bool) -> f64 {
        let base = self.target_bits_per_frame;
        if is_keyframe {
            let boosted = base * self.keyframe_boost;
            boosted.min(self.buffer_size * 0.5)
        } else {
            let overspend = base * (self.keyframe_boost - 1.0);
            let reduction = overspend / (self.keyint as f64 - 1.0).max(1.0);
            (base - reduction).max(base * 0.3)
        }
    }

    /// Byte budget for the next frame, reduced while the buffer is above
    /// half full and raised below it.
    pub fn target_bytes(&self, frame_type: FrameType) -> u32 {
        let bits = self.target_bits_for_frame(frame_type == FrameType::Key);
        let buffer_target = self.buffer_size / 2.0;
        let buffer_error = ((self.buffer_fullness - buffer_target) / buffer_target).clamp(-1.0, 1.0);
        let adjusted = bits * (1.0 - 0.5 * buffer_error);
        (adjusted / 8.0).max(1.0) as u32
    }

    pub fn update(&mut self, actual_bits: u64, q_index: u8) {
        self.buffer_fullness += actual_bits as f64;
        self.buffer_fullness -= self.target_bits_per_frame;
        self.buffer_fullness = self.buffer_fullness.clamp(0.0, self.buffer_size);

        let alpha = 0.2;
        self.avg_frame_bits = alpha * actual_bits as f64 + (1.0 - alpha) * self.avg_frame_bits;
        self.avg_q_index = alpha * f64::from(q_index) + (1.0 - alpha) * self.avg_q_index;

        self.frames_encoded += 1;
    }

    pub fn stats(&self) -> RateControlStats {
        RateControlStats {
            target_bitrate: self.target_bitrate,
            frames_encoded: self.frames_encoded,
            buffer_fullness_pct: (self.buffer_fullness / self.buffer_size * 100.0) as u32,
            avg_frame_bits: self.avg_frame_bits.round() as u64,
            avg_q_index: self.avg_q_index.round() as u8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateControlStats {
    pub target_bitrate: u64,
    pub frames_encoded: u64,
    pub buffer_fullness_pct: u32,
    pub avg_frame_bits: u64,
    pub avg_q_index: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_grow_towards_fine_quantizers() {
        assert!(INTER_BPB.windows(2).all(|w| w[0] < w[1]));
        assert!(KEY_BPB.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn block_estimate_applies_correction() {
        assert_eq!(bytes_per_block(FrameType::Inter, 0, 1.0), 0.300);
        assert_eq!(bytes_per_block(FrameType::Key, 63, 2.0), 88.976);
    }

    #[test]
    fn tiny_budget_clamps_to_coarsest() {
        assert_eq!(select_q_index(1, 1000, FrameType::Inter, 1.0, 63), 0);
    }

    #[test]
    fn huge_budget_clamps_to_finest() {
        assert_eq!(select_q_index(1_000_000, 10, FrameType::Inter, 1.0, 63), 63);
    }

    #[test]
    fn picks_closer_neighbour() {
        // 1.05 bytes per block lies between 1.041 (18) and 1.079 (19).
        assert_eq!(select_q_index(1050, 1000, FrameType::Inter, 1.0, 63), 18);
        // 1.07 is closer to 19.
        assert_eq!(select_q_index(1070, 1000, FrameType::Inter, 1.0, 63), 19);
    }

    #[test]
    fn correction_scales_estimates() {
        let plain = select_q_index(2000, 1000, FrameType::Inter, 1.0, 63);
        let corrected = select_q_index(2000, 1000, FrameType::Inter, 2.0, 63);
        assert!(corrected < plain);
    }

    #[test]
    fn key_frames_stay_in_range() {
        assert_eq!(select_q_index(1, 1000, FrameType::Key, 1.0, 63), 20);
        assert_eq!(select_q_index(10_000_000, 1000, FrameType::Key, 1.0, 63), 50);
    }

    #[test]
    fn max_index_caps_every_frame() {
        assert_eq!(select_q_index(1_000_000, 10, FrameType::Inter, 1.0, 40), 40);
        assert_eq!(select_q_index(10_000_000, 1000, FrameType::Key, 1.0, 30), 30);
    }

    #[test]
    fn empty_frame_does_not_divide_by_zero() {
        assert_eq!(select_q_index(100, 0, FrameType::Inter, 1.0, 63), 63);
    }

    #[test]
    fn correction_tracks_overshoot() {
        let mut c = Correction::default();
        for _ in 0..20 {
            c.update(FrameType::Inter, 24, 1000, 2768);
        }
        // Actual sizes are twice the estimate of 1.384 bytes per block.
        assert!((c.factor() - 2.0).abs() < 0.05);
        for _ in 0..100 {
            c.update(FrameType::Inter, 24, 1000, 100_000);
        }
        assert_eq!(c.factor(), MAX_CORRECTION);
        for _ in 0..100 {
            c.update(FrameType::Key, 24, 1000, 0);
        }
        assert_eq!(c.factor(), MIN_CORRECTION);
    }

    #[test]
    fn budget_shrinks_when_over_target() {
        let mut rc = RateControl::new(500_000, 25.0, 25);
        let before = rc.target_bytes(FrameType::Inter);
        for _ in 0..5 {
            rc.update(60_000, 30);
        }
        assert!(rc.target_bytes(FrameType::Inter) < before);
    }

    #[test]
    fn budget_grows_when_under_target() {
        let mut rc = RateControl::new(500_000, 25.0, 25);
        let before = rc.target_bytes(FrameType::Inter);
        for _ in 0..5 {
            rc.update(100, 30);
        }
        assert!(rc.target_bytes(FrameType::Inter) > before);
    }

    #[test]
    fn key_frames_get_larger_budgets() {
        let rc = RateControl::new(500_000, 25.0, 25);
        assert!(rc.target_bytes(FrameType::Key) > rc.target_bytes(FrameType::Inter));
    }

    #[test]
    fn buffer_stays_in_range() {
        let mut rc = RateControl::new(500_000, 25.0, 25);
        for i in 0..100 {
            let bits = if i % 25 == 0 { 80_000 } else { 15_000 };
            rc.update(bits, 30);
            let stats = rc.stats();
            assert!(stats.buffer_fullness_pct <= 100);
        }
        assert_eq!(rc.stats().frames_encoded, 100);
    }
}
