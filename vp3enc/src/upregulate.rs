use crate::fragment::Fragment;
use crate::hierarchy::FragmentHierarchy;
use crate::packet::FrameType;
use crate::quant::Q_TABLE_SIZE;

const FINEST_Q: u8 = (Q_TABLE_SIZE - 1) as u8;

/// Blocks of spare budget kept back from recovery.
const RECOVERY_RESERVE: usize = 3;

/// Number of blocks the unused budget pays for.
pub fn recovery_blocks(spare_bytes: f64, bytes_per_block: f64) -> usize {
    if spare_bytes <= 0.0 || bytes_per_block <= 0.0 {
        return 0;
    }
    let blocks = (spare_bytes / bytes_per_block) as usize;
    if blocks > RECOVERY_RESERVE {
        blocks - RECOVERY_RESERVE
    } else {
        blocks
    }
}

#[derive(Debug, Clone)]
pub struct Refresh {
    frag_q: Vec<u8>,
    next_mb: usize,
    final_sweep_done: bool,
}

impl Refresh {
    pub fn new(fragment_count: usize) -> Self {
        Self {
            frag_q: vec![0; fragment_count],
            next_mb: 0,
            final_sweep_done: false,
        }
    }

    fn stale(&self, f: &Fragment, idx: usize, q_index: u8) -> bool {
        !f.coded && self.frag_q[idx] < q_index
    }

    /// Forces up to roughly `budget` stale fragments into the coded set,
    /// whole macroblocks at a time, resuming where the previous frame
    /// stopped. Returns the number of fragments forced.
    pub fn force(
        &mut self,
        hierarchy: &FragmentHierarchy,
        fragments: &mut [Fragment],
        q_index: u8,
        budget: usize,
    ) -> usize {
        let mbs = hierarchy.macroblocks();
        let mut forced = 0;
        if budget > 0 && !mbs.is_empty() {
            for step in 0..mbs.len() {
                let idx = (self.next_mb + step) % mbs.len();
                for f in mbs[idx].fragments() {
                    if self.stale(&fragments[f], f, q_index) {
                        fragments[f].coded = true;
                        fragments[f].refresh = true;
                        forced += 1;
                    }
                }
                if forced >= budget {
                    self.next_mb = (idx + 1) % mbs.len();
                    break;
                }
            }
        }

        if q_index == FINEST_Q && !self.final_sweep_done {
            for (idx, f) in fragments.iter_mut().enumerate() {
                if !f.coded && self.frag_q[idx] < q_index {
                    f.coded = true;
                    f.refresh = true;
                    forced += 1;
                }
            }
            self.final_sweep_done = true;
        }
        forced
    }

    pub fn record(&mut self, fragments: &[Fragment], q_index: u8, frame_type: FrameType) {
        if frame_type == FrameType::Key {
            self.next_mb = 0;
            self.final_sweep_done = false;
        }
        for (q, f) in self.frag_q.iter_mut().zip(fragments.iter()) {
            if f.coded {
                *q = q_index;
            }
        }
    }
}
