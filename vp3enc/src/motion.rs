use crate::dsp::Dsp;
use crate::fragment::MotionVector;
use crate::hierarchy::Plane;
use crate::recon::predict_block;
use crate::y4m::FramePixels;

const SEARCH_RANGE: i16 = 15;
/// Step sizes, in full pels, of the fast hierarchical search.
const HIERARCHY_STEPS: [i16; 4] = [8, 4, 2, 1];
/// Average SAD per pixel above which the fast search falls back to the
/// exhaustive one.
const EXHAUSTIVE_SAD_PER_PIXEL: u32 = 6;

const NEIGHBOURS: [(i16, i16); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub struct MotionSearch<'a, D: Dsp> {
    dsp: &'a D,
    source: &'a FramePixels,
    reference: &'a FramePixels,
    fast: bool,
}

impl<'a, D: Dsp> MotionSearch<'a, D> {
    pub fn new(dsp: &'a D, source: &'a FramePixels, reference: &'a FramePixels, fast: bool) -> Self {
        Self {
            dsp,
            source,
            reference,
            fast,
        }
    }

    /// Summed SAD of the luma blocks at `blocks` (fragment coordinates)
    /// predicted with `mv`.
    pub fn sad(&self, blocks: &[(usize, usize)], mv: MotionVector) -> u32 {
        blocks
            .iter()
            .map(|&(bx, by)| {
                let src = self.source.block(Plane::Y, bx, by);
                let pred = predict_block(self.reference, Plane::Y, bx * 8, by * 8, mv);
                self.dsp.sad(&src, &pred)
            })
            .sum()
    }

    pub fn error(&self, blocks: &[(usize, usize)], mv: MotionVector) -> u32 {
        blocks
            .iter()
            .map(|&(bx, by)| {
                let src = self.source.block(Plane::Y, bx, by);
                let pred = predict_block(self.reference, Plane::Y, bx * 8, by * 8, mv);
                self.dsp.inter_error(&src, &pred)
            })
            .sum()
    }

    /// Best vector for `blocks`: a full-pel search followed by half-pel
    /// refinement. The zero vector wins ties.
    pub fn search(&self, blocks: &[(usize, usize)]) -> MotionVector {
        let zero_sad = self.sad(blocks, MotionVector::ZERO);
        let (mut best, mut best_sad) = if self.fast {
            let (mv, sad) = self.hierarchical(blocks, zero_sad);
            let threshold = EXHAUSTIVE_SAD_PER_PIXEL * 64 * blocks.len() as u32;
            if sad > threshold {
                self.exhaustive(blocks, zero_sad)
            } else {
                (mv, sad)
            }
        } else {
            self.exhaustive(blocks, zero_sad)
        };

        let centre = best;
        for (dx, dy) in NEIGHBOURS {
            let mv = MotionVector::new(centre.x + dx, centre.y + dy);
            if !mv.in_range() {
                continue;
            }
            let sad = self.sad(blocks, mv);
            if sad < best_sad {
                best = mv;
                best_sad = sad;
            }
        }
        best
    }

    fn hierarchical(&self, blocks: &[(usize, usize)], zero_sad: u32) -> (MotionVector, u32) {
        let mut best = MotionVector::ZERO;
        let mut best_sad = zero_sad;
        for step in HIERARCHY_STEPS {
            let centre = best;
            for (dx, dy) in NEIGHBOURS {
                let mv = MotionVector::new(centre.x + dx * step * 2, centre.y + dy * step * 2);
                if mv.x.abs() > SEARCH_RANGE * 2 || mv.y.abs() > SEARCH_RANGE * 2 {
                    continue;
                }
                let sad = self.sad(blocks, mv);
                if sad < best_sad {
                    best = mv;
                    best_sad = sad;
                }
            }
        }
        (best, best_sad)
    }

    fn exhaustive(&self, blocks: &[(usize, usize)], zero_sad: u32) -> (MotionVector, u32) {
        let mut best = MotionVector::ZERO;
        let mut best_sad = zero_sad;
        for y in -SEARCH_RANGE..=SEARCH_RANGE {
            for x in -SEARCH_RANGE..=SEARCH_RANGE {
                if x == 0 && y == 0 {
                    continue;
                }
                let mv = MotionVector::new(x * 2, y * 2);
                let sad = self.sad(blocks, mv);
                if sad < best_sad {
                    best = mv;
                    best_sad = sad;
                }
            }
        }
        (best, best_sad)
    }
}
