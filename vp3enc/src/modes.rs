use crate::dsp::Dsp;
use crate::fragment::{CodingMode, Fragment, MotionVector};
use crate::hierarchy::{FragmentHierarchy, Macroblock, Plane};
use crate::motion::MotionSearch;
use crate::y4m::FramePixels;

/// Vectors reusable by the last-vector modes, carried across macroblocks in
/// bitstream order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MvContext {
    pub last: MotionVector,
    pub prior_last: MotionVector,
}

impl MvContext {
    /// Updates the context the way the decoder does after reading a
    /// macroblock coded with `mode` and luma vectors `mvs`.
    pub fn update(&mut self, mode: CodingMode, mvs: &[MotionVector; 4]) {
        match mode {
            CodingMode::InterMv => {
                self.prior_last = self.last;
                self.last = mvs[0];
            }
            CodingMode::InterFourMv => {
                self.prior_last = self.last;
                self.last = mvs[3];
            }
            CodingMode::InterPriorLastMv => std::mem::swap(&mut self.last, &mut self.prior_last),
            _ => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// A candidate must reach `best * change_factor / 256` to replace it.
    pub change_factor: u32,
    pub search: u32,
    pub four_mv: u32,
    /// Absolute improvement a candidate with new vectors must bring.
    pub min_improvement: u32,
}

impl Thresholds {
    pub fn new(q_index: u8, ac_scale: u16) -> Self {
        let ac = u32::from(ac_scale);
        Self {
            change_factor: 224 + u32::from(q_index) / 2,
            search: ac * 512,
            four_mv: ac * 1024,
            min_improvement: ac * 128,
        }
    }

    fn beats(&self, err: u32, best: u32) -> bool {
        u64::from(err) * 256 < u64::from(best) * u64::from(self.change_factor)
    }

    fn beats_with_vectors(&self, err: u32, best: u32) -> bool {
        self.beats(err, best) && u64::from(err) + u64::from(self.min_improvement) < u64::from(best)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Decision {
    mode: CodingMode,
    err: u32,
    mvs: [MotionVector; 4],
}

impl Decision {
    fn uniform(mode: CodingMode, err: u32, mv: MotionVector) -> Self {
        Self {
            mode,
            err,
            mvs: [mv; 4],
        }
    }
}

fn luma_blocks(mb: &Macroblock) -> [(usize, usize); 4] {
    let (x, y) = (mb.mbx * 2, mb.mby * 2);
    [(x, y), (x + 1, y), (x, y + 1), (x + 1, y + 1)]
}

pub struct ModeSearch<'a, D: Dsp> {
    pub dsp: &'a D,
    pub hierarchy: &'a FragmentHierarchy,
    pub source: &'a FramePixels,
    pub previous: &'a FramePixels,
    pub golden: &'a FramePixels,
    pub thresholds: Thresholds,
    pub fast: bool,
}

impl<D: Dsp> ModeSearch<'_, D> {
    fn decide(&self, mb: &Macroblock, ctx: &MvContext) -> Decision {
        let t = &self.thresholds;
        let blocks = luma_blocks(mb);
        let previous = MotionSearch::new(self.dsp, self.source, self.previous, self.fast);
        let golden = MotionSearch::new(self.dsp, self.source, self.golden, self.fast);

        let intra_err: u32 = blocks
            .iter()
            .map(|&(bx, by)| self.dsp.intra_error(&self.source.block(Plane::Y, bx, by)))
            .sum();
        let mut best = Decision::uniform(CodingMode::Intra, intra_err, MotionVector::ZERO);

        let consider = |best: &mut Decision, candidate: Decision, new_vectors: bool| {
            let ok = if new_vectors {
                t.beats_with_vectors(candidate.err, best.err)
            } else {
                t.beats(candidate.err, best.err)
            };
            if ok {
                *best = candidate;
            }
        };

        let zero = MotionVector::ZERO;
        consider(
            &mut best,
            Decision::uniform(CodingMode::GoldenNoMv, golden.error(&blocks, zero), zero),
            false,
        );
        consider(
            &mut best,
            Decision::uniform(CodingMode::InterNoMv, previous.error(&blocks, zero), zero),
            false,
        );
        consider(
            &mut best,
            Decision::uniform(CodingMode::InterLastMv, previous.error(&blocks, ctx.last), ctx.last),
            false,
        );
        consider(
            &mut best,
            Decision::uniform(
                CodingMode::InterPriorLastMv,
                previous.error(&blocks, ctx.prior_last),
                ctx.prior_last,
            ),
            false,
        );

        if best.err > t.search {
            let mv = previous.search(&blocks);
            consider(
                &mut best,
                Decision::uniform(CodingMode::InterMv, previous.error(&blocks, mv), mv),
                true,
            );
            if best.err > t.search {
                let mv = golden.search(&blocks);
                consider(
                    &mut best,
                    Decision::uniform(CodingMode::GoldenMv, golden.error(&blocks, mv), mv),
                    true,
                );
            }
            if best.err > t.four_mv {
                let mut mvs = [zero; 4];
                let mut err = 0;
                for (mv, &block) in mvs.iter_mut().zip(blocks.iter()) {
                    *mv = previous.search(&[block]);
                    err += previous.error(&[block], *mv);
                }
                consider(
                    &mut best,
                    Decision {
                        mode: CodingMode::InterFourMv,
                        err,
                        mvs,
                    },
                    true,
                );
            }
        }

        if best.err > t.search.saturating_mul(16) && intra_err <= best.err + best.err / 8 {
            best = Decision::uniform(CodingMode::Intra, intra_err, zero);
        }
        best
    }

    /// Chooses a mode for every macroblock with a displayed luma fragment,
    /// writes modes and vectors into the fragments and appends new vectors
    /// to `mv_list`. Other macroblocks become inter-no-MV.
    pub fn pick_modes(
        &self,
        fragments: &mut [Fragment],
        displayed: &[bool],
        mv_list: &mut Vec<MotionVector>,
    ) -> [u32; 8] {
        let mut ctx = MvContext::default();
        let mut histogram = [0u32; 8];
        for mb in self.hierarchy.macroblocks() {
            let decision = if mb.luma.iter().any(|&f| displayed[f]) {
                self.decide(mb, &ctx)
            } else {
                Decision::uniform(CodingMode::InterNoMv, 0, MotionVector::ZERO)
            };
            match decision.mode.new_vectors() {
                1 => mv_list.push(decision.mvs[0]),
                4 => mv_list.extend_from_slice(&decision.mvs),
                _ => {}
            }
            ctx.update(decision.mode, &decision.mvs);
            histogram[decision.mode.code()] += 1;
            assign(fragments, mb, decision.mode, &decision.mvs);
        }
        log::trace!("mode histogram {histogram:?}");
        histogram
    }
}

/// Writes `mode` and the luma vectors into the macroblock's fragments and
/// the derived vector into its chroma fragments.
pub fn assign(fragments: &mut [Fragment], mb: &Macroblock, mode: CodingMode, mvs: &[MotionVector; 4]) {
    for (&f, &mv) in mb.luma.iter().zip(mvs.iter()) {
        fragments[f].mode = mode;
        fragments[f].mv = mv;
    }
    let chroma = if mode == CodingMode::InterFourMv {
        MotionVector::average4(mvs).to_chroma()
    } else {
        mvs[0].to_chroma()
    };
    for &f in &mb.chroma {
        fragments[f].mode = mode;
        fragments[f].mv = chroma;
    }
}

pub fn pick_intra(fragments: &mut [Fragment]) {
    for f in fragments.iter_mut() {
        f.mode = CodingMode::Intra;
        f.mv = MotionVector::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::ScalarDsp;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaChaRng;

    fn noise(width: u32, height: u32, seed: u8) -> FramePixels {
        let mut rng = ChaChaRng::from_seed([seed; 32]);
        let mut f = FramePixels::solid(width, height, 0, 128, 128);
        for p in f.y.iter_mut() {
            *p = rng.r#gen();
        }
        f
    }

    fn shifted(reference: &FramePixels, dx: isize, dy: isize) -> FramePixels {
        let mut out = reference.clone();
        let w = reference.width as isize;
        let h = reference.height as isize;
        for y in 0..h {
            for x in 0..w {
                let sx = (x + dx).clamp(0, w - 1);
                let sy = (y + dy).clamp(0, h - 1);
                out.y[(y * w + x) as usize] = reference.y[(sy * w + sx) as usize];
            }
        }
        out
    }

    struct Setup {
        hierarchy: FragmentHierarchy,
        source: FramePixels,
        previous: FramePixels,
        golden: FramePixels,
    }

    impl Setup {
        fn search(&self) -> ModeSearch<'_, ScalarDsp> {
            ModeSearch {
                dsp: &ScalarDsp,
                hierarchy: &self.hierarchy,
                source: &self.source,
                previous: &self.previous,
                golden: &self.golden,
                thresholds: Thresholds::new(40, 49),
                fast: false,
            }
        }

        fn run(&self) -> (Vec<Fragment>, Vec<MotionVector>, [u32; 8]) {
            let mut fragments = vec![Fragment::default(); self.hierarchy.fragment_count()];
            let displayed = vec![true; self.hierarchy.fragment_count()];
            let mut mvs = Vec::new();
            let hist = self.search().pick_modes(&mut fragments, &displayed, &mut mvs);
            (fragments, mvs, hist)
        }
    }

    #[test]
    fn context_follows_decoder_rules() {
        let a = MotionVector::new(2, 4);
        let b = MotionVector::new(-6, 1);
        let mut ctx = MvContext::default();
        ctx.update(CodingMode::InterMv, &[a; 4]);
        ctx.update(CodingMode::InterMv, &[b; 4]);
        assert_eq!(ctx, MvContext { last: b, prior_last: a });
        ctx.update(CodingMode::InterPriorLastMv, &[a; 4]);
        assert_eq!(ctx, MvContext { last: a, prior_last: b });
        ctx.update(CodingMode::GoldenMv, &[MotionVector::new(9, 9); 4]);
        ctx.update(CodingMode::InterLastMv, &[a; 4]);
        assert_eq!(ctx, MvContext { last: a, prior_last: b });
        let four = [a, b, a, MotionVector::new(1, 1)];
        ctx.update(CodingMode::InterFourMv, &four);
        assert_eq!(ctx, MvContext { last: MotionVector::new(1, 1), prior_last: a });
    }

    #[test]
    fn static_scene_stays_inter_without_vectors() {
        let frame = noise(32, 32, 4);
        let setup = Setup {
            hierarchy: FragmentHierarchy::new(32, 32),
            source: frame.clone(),
            previous: frame.clone(),
            golden: FramePixels::solid(32, 32, 0, 0, 0),
        };
        let (fragments, mvs, hist) = setup.run();
        assert!(mvs.is_empty());
        assert_eq!(hist[CodingMode::InterNoMv.code()], 4);
        assert!(fragments.iter().all(|f| f.mode == CodingMode::InterNoMv));
    }

    #[test]
    fn golden_match_beats_previous() {
        let frame = noise(32, 32, 8);
        let setup = Setup {
            hierarchy: FragmentHierarchy::new(32, 32),
            source: frame.clone(),
            previous: noise(32, 32, 9),
            golden: frame,
        };
        let (fragments, mvs, _) = setup.run();
        assert!(mvs.is_empty());
        assert!(fragments.iter().all(|f| f.mode == CodingMode::GoldenNoMv));
    }

    #[test]
    fn panning_scene_uses_vectors() {
        let previous = noise(64, 64, 2);
        let source = shifted(&previous, 2, 1);
        let setup = Setup {
            hierarchy: FragmentHierarchy::new(64, 64),
            source,
            previous,
            golden: FramePixels::solid(64, 64, 0, 0, 0),
        };
        let (fragments, mvs, hist) = setup.run();
        let pan = MotionVector::new(4, 2);
        // The first interior match codes a new vector; later ones reuse it.
        assert!(hist[CodingMode::InterMv.code()] >= 1);
        assert!(mvs.iter().all(|&mv| mv == pan));
        let interior = setup.hierarchy.macroblocks().iter().find(|mb| mb.mbx == 1 && mb.mby == 1);
        let mb = interior.map(|mb| mb.luma[0]).unwrap_or(0);
        assert_eq!(fragments[mb].mv, pan);
        assert_eq!(
            mvs.len() as u32,
            hist[CodingMode::InterMv.code()] + hist[CodingMode::GoldenMv.code()] + 4 * hist[CodingMode::InterFourMv.code()]
        );
    }

    #[test]
    fn good_new_vector_skips_golden_search() {
        let golden = noise(64, 64, 5);
        // The previous frame is the golden one plus a +-1 checkerboard, so
        // the pan costs about 4096 per block: under the search gate but well
        // above the minimum improvement.
        let mut previous = golden.clone();
        for (i, p) in previous.y.iter_mut().enumerate() {
            *p = if (i % 64 + i / 64) % 2 == 0 {
                p.saturating_add(1)
            } else {
                p.saturating_sub(1)
            };
        }
        let setup = Setup {
            hierarchy: FragmentHierarchy::new(64, 64),
            source: shifted(&golden, 2, 1),
            previous,
            golden,
        };
        let thresholds = setup.search().thresholds;
        let (fragments, mvs, hist) = setup.run();
        let pan = MotionVector::new(4, 2);
        assert!(hist[CodingMode::InterMv.code()] >= 1);
        assert_eq!(hist[CodingMode::GoldenMv.code()], 0);
        assert!(fragments.iter().all(|f| f.mode != CodingMode::GoldenMv));
        assert!(!mvs.is_empty() && mvs.iter().all(|&mv| mv == pan));
        let mb = setup.hierarchy.macroblocks()[0];
        let blocks = luma_blocks(&mb);
        let previous = MotionSearch::new(&ScalarDsp, &setup.source, &setup.previous, false);
        let err = previous.error(&blocks, pan);
        assert!(err > thresholds.min_improvement && err <= thresholds.search, "pan error {err}");
    }

    #[test]
    fn undisplayed_macroblocks_are_skipped() {
        let setup = Setup {
            hierarchy: FragmentHierarchy::new(32, 32),
            source: noise(32, 32, 1),
            previous: noise(32, 32, 2),
            golden: noise(32, 32, 3),
        };
        let mut fragments = vec![Fragment::default(); setup.hierarchy.fragment_count()];
        let mut displayed = vec![false; setup.hierarchy.fragment_count()];
        // Chroma alone does not trigger a decision.
        for f in setup.hierarchy.plane_fragments(Plane::U) {
            displayed[f] = true;
        }
        let mut mvs = Vec::new();
        let hist = setup.search().pick_modes(&mut fragments, &displayed, &mut mvs);
        assert_eq!(hist[CodingMode::InterNoMv.code()], 4);
        assert!(mvs.is_empty());
    }

    #[test]
    fn chroma_vector_of_four_mv_is_averaged() {
        let hierarchy = FragmentHierarchy::new(16, 16);
        let mut fragments = vec![Fragment::default(); hierarchy.fragment_count()];
        let mb = hierarchy.macroblocks()[0];
        let mvs = [
            MotionVector::new(4, 0),
            MotionVector::new(4, 0),
            MotionVector::new(3, 0),
            MotionVector::new(3, 0),
        ];
        assign(&mut fragments, &mb, CodingMode::InterFourMv, &mvs);
        // (14 + 2) >> 2 = 4, then 4 >> 1 = 2 in chroma half-pels.
        assert_eq!(fragments[mb.chroma[0]].mv, MotionVector::new(2, 0));
        assert_eq!(fragments[mb.luma[2]].mv, MotionVector::new(3, 0));
    }

    #[test]
    fn pick_intra_marks_everything() {
        let mut fragments = vec![Fragment::default(); 6];
        fragments[2].mv = MotionVector::new(3, 3);
        pick_intra(&mut fragments);
        assert!(fragments.iter().all(|f| f.mode == CodingMode::Intra && f.mv.is_zero()));
    }
}
