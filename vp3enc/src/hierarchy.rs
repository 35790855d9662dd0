use std::ops::Range;

pub const HILBERT_ORDER: [[usize; 2]; 16] = [
    [0, 0], [1, 0], [1, 1], [0, 1],
    [0, 2], [0, 3], [1, 3], [1, 2],
    [2, 2], [2, 3], [3, 3], [3, 2],
    [3, 1], [2, 1], [2, 0], [3, 0],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plane {
    Y,
    U,
    V,
}

impl Plane {
    pub const ALL: [Plane; 3] = [Plane::Y, Plane::U, Plane::V];

    pub fn index(self) -> usize {
        match self {
            Plane::Y => 0,
            Plane::U => 1,
            Plane::V => 2,
        }
    }

    pub fn is_chroma(self) -> bool {
        self != Plane::Y
    }
}

#[derive(Debug, Clone, Copy)]
struct PlaneLayout {
    blk_w: usize,
    blk_h: usize,
    sb_w: usize,
    sb_h: usize,
    first_fragment: usize,
    first_superblock: usize,
}

impl PlaneLayout {
    fn superblocks(&self) -> usize {
        self.sb_w * self.sb_h
    }

    fn fragments(&self) -> usize {
        self.blk_w * self.blk_h
    }

    fn fragment(&self, sb: usize, entry: usize) -> Option<usize> {
        let bx = (sb % self.sb_w) * 4 + HILBERT_ORDER[entry][0];
        let by = (sb / self.sb_w) * 4 + HILBERT_ORDER[entry][1];
        (bx < self.blk_w && by < self.blk_h).then(|| self.first_fragment + by * self.blk_w + bx)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Macroblock {
    pub superblock: usize,
    pub mbx: usize,
    pub mby: usize,
    /// Luma fragments in raster order: top-left, top-right, bottom-left,
    /// bottom-right.
    pub luma: [usize; 4],
    pub chroma: [usize; 2],
}

impl Macroblock {
    pub fn fragments(&self) -> impl Iterator<Item = usize> + '_ {
        self.luma.iter().chain(self.chroma.iter()).copied()
    }
}

#[derive(Debug, Clone)]
pub struct FragmentHierarchy {
    planes: [PlaneLayout; 3],
    superblocks: usize,
    fragments: usize,
    coded_order: Vec<usize>,
    sb_ranges: Vec<Range<usize>>,
    macroblocks: Vec<Macroblock>,
}

impl FragmentHierarchy {
    pub fn new(width: u32, height: u32) -> Self {
        debug_assert!(width % 16 == 0 && height % 16 == 0);
        let mut planes = [PlaneLayout {
            blk_w: 0,
            blk_h: 0,
            sb_w: 0,
            sb_h: 0,
            first_fragment: 0,
            first_superblock: 0,
        }; 3];
        let mut fragments = 0;
        let mut superblocks = 0;
        for plane in Plane::ALL {
            let (w, h) = match plane {
                Plane::Y => (width as usize, height as usize),
                _ => (width as usize / 2, height as usize / 2),
            };
            let layout = PlaneLayout {
                blk_w: w / 8,
                blk_h: h / 8,
                sb_w: w.div_ceil(32),
                sb_h: h.div_ceil(32),
                first_fragment: fragments,
                first_superblock: superblocks,
            };
            fragments += layout.fragments();
            superblocks += layout.superblocks();
            planes[plane.index()] = layout;
        }

        let mut hierarchy = Self {
            planes,
            superblocks,
            fragments,
            coded_order: Vec::with_capacity(fragments),
            sb_ranges: Vec::with_capacity(superblocks),
            macroblocks: Vec::new(),
        };

        for sb in 0..superblocks {
            let start = hierarchy.coded_order.len();
            for mb in 0..4 {
                for block in 0..4 {
                    if let Some(frag) = hierarchy.index_of(sb, mb, block) {
                        hierarchy.coded_order.push(frag);
                    }
                }
            }
            hierarchy.sb_ranges.push(start..hierarchy.coded_order.len());
        }

        let luma = planes[0];
        let chroma_w = planes[1].blk_w;
        for sb in 0..luma.superblocks() {
            for mb in 0..4 {
                let Some(top_left) = hierarchy.top_left_of(sb, mb) else {
                    continue;
                };
                let bx = top_left % luma.blk_w;
                let by = top_left / luma.blk_w;
                let (mbx, mby) = (bx / 2, by / 2);
                let chroma_offset = mby * chroma_w + mbx;
                hierarchy.macroblocks.push(Macroblock {
                    superblock: sb,
                    mbx,
                    mby,
                    luma: [
                        top_left,
                        top_left + 1,
                        top_left + luma.blk_w,
                        top_left + luma.blk_w + 1,
                    ],
                    chroma: [
                        planes[1].first_fragment + chroma_offset,
                        planes[2].first_fragment + chroma_offset,
                    ],
                });
            }
        }

        hierarchy
    }

    fn locate_superblock(&self, sb: usize) -> Option<(&PlaneLayout, usize)> {
        self.planes
            .iter()
            .find(|p| (p.first_superblock..p.first_superblock + p.superblocks()).contains(&sb))
            .map(|p| (p, sb - p.first_superblock))
    }

    /// Linear fragment index of `block` (0..4) of macroblock `mb` (0..4) in
    /// super-block `sb`, or `None` when that location lies outside the
    /// frame.
    pub fn index_of(&self, sb: usize, mb: usize, block: usize) -> Option<usize> {
        if mb >= 4 || block >= 4 {
            return None;
        }
        let (layout, local) = self.locate_superblock(sb)?;
        layout.fragment(local, mb * 4 + block)
    }

    /// Top-left fragment of macroblock `mb` in super-block `sb`. The
    /// macroblock is present only when its first Hilbert entry is in frame.
    pub fn top_left_of(&self, sb: usize, mb: usize) -> Option<usize> {
        if mb >= 4 {
            return None;
        }
        let (layout, local) = self.locate_superblock(sb)?;
        let [x, y] = HILBERT_ORDER[mb * 4];
        let bx = (local % layout.sb_w) * 4 + x;
        let by = (local / layout.sb_w) * 4 + y;
        (bx < layout.blk_w && by < layout.blk_h)
            .then(|| layout.first_fragment + (by & !1) * layout.blk_w + (bx & !1))
    }

    pub fn fragment_count(&self) -> usize {
        self.fragments
    }

    pub fn superblock_count(&self) -> usize {
        self.superblocks
    }

    pub fn plane_of_superblock(&self, sb: usize) -> Plane {
        let idx = self
            .planes
            .iter()
            .rposition(|p| p.first_superblock <= sb)
            .unwrap_or(0);
        Plane::ALL[idx]
    }

    pub fn plane_blocks(&self, plane: Plane) -> (usize, usize) {
        let p = &self.planes[plane.index()];
        (p.blk_w, p.blk_h)
    }

    pub fn plane_fragments(&self, plane: Plane) -> Range<usize> {
        let p = &self.planes[plane.index()];
        p.first_fragment..p.first_fragment + p.fragments()
    }

    pub fn fragment_at(&self, plane: Plane, bx: usize, by: usize) -> usize {
        let p = &self.planes[plane.index()];
        p.first_fragment + by * p.blk_w + bx
    }

    pub fn position(&self, frag: usize) -> (Plane, usize, usize) {
        let idx = self
            .planes
            .iter()
            .rposition(|p| p.first_fragment <= frag)
            .unwrap_or(0);
        let p = &self.planes[idx];
        let local = frag - p.first_fragment;
        (Plane::ALL[idx], local % p.blk_w, local / p.blk_w)
    }

    /// Every fragment in bitstream order: super-block, then Hilbert entry.
    pub fn coded_order(&self) -> &[usize] {
        &self.coded_order
    }

    /// In-frame fragments of super-block `sb` in Hilbert order.
    pub fn superblock_fragments(&self, sb: usize) -> &[usize] {
        &self.coded_order[self.sb_ranges[sb].clone()]
    }

    pub fn macroblocks(&self) -> &[Macroblock] {
        &self.macroblocks
    }
}
