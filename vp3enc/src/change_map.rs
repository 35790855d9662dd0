use crate::bitwriter::BitWriter;
use crate::hierarchy::FragmentHierarchy;

/// Run length codes: unary prefix, base and extra bit count per prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunTable {
    Long,
    Short,
}

const LONG_BASE: [usize; 7] = [1, 2, 4, 6, 10, 18, 34];
const LONG_BITS: [u8; 7] = [0, 1, 1, 2, 3, 4, 12];
const SHORT_BASE: [usize; 6] = [1, 3, 5, 7, 11, 15];
const SHORT_BITS: [u8; 6] = [1, 1, 1, 2, 2, 4];

impl RunTable {
    fn tables(self) -> (&'static [usize], &'static [u8]) {
        match self {
            RunTable::Long => (&LONG_BASE, &LONG_BITS),
            RunTable::Short => (&SHORT_BASE, &SHORT_BITS),
        }
    }

    pub fn max_run(self) -> usize {
        let (base, bits) = self.tables();
        let last = base.len() - 1;
        base[last] + (1 << bits[last]) - 1
    }

    fn write_run(self, w: &mut BitWriter, run: usize) {
        debug_assert!((1..=self.max_run()).contains(&run));
        let (base, bits) = self.tables();
        let prefix = base.iter().rposition(|&b| run >= b).unwrap_or(0);
        for _ in 0..prefix {
            w.write_bit(true);
        }
        if prefix < base.len() - 1 {
            w.write_bit(false);
        }
        if bits[prefix] > 0 {
            w.write_bits((run - base[prefix]) as u32, bits[prefix]);
        }
    }
}

/// Writes `flags` as alternating runs. The first bit is the starting value.
/// On the long table a run of maximum length is followed by an explicit bit
/// for the next value instead of an implicit toggle. Short runs always
/// toggle, so they must not exceed 30.
pub fn write_runs(w: &mut BitWriter, flags: impl IntoIterator<Item = bool>, table: RunTable) {
    let max = table.max_run();
    let mut current: Option<(bool, usize)> = None;
    let mut started = false;
    let mut after_max = false;
    let mut emit = |w: &mut BitWriter, value: bool, mut len: usize| {
        debug_assert!(table == RunTable::Long || len <= max, "short run of {len}");
        while len > 0 {
            let chunk = len.min(max);
            if !started || after_max {
                w.write_bit(value);
                started = true;
            }
            table.write_run(w, chunk);
            after_max = table == RunTable::Long && chunk == max;
            len -= chunk;
        }
    };
    for flag in flags {
        current = match current {
            Some((value, len)) if value == flag => Some((value, len + 1)),
            Some((value, len)) => {
                emit(w, value, len);
                Some((flag, 1))
            }
            None => Some((flag, 1)),
        };
    }
    if let Some((value, len)) = current {
        emit(w, value, len);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuperblockState {
    Uncoded,
    Partial,
    Full,
}

/// Classifies every super-block by how many of its in-frame fragments are
/// coded.
pub fn superblock_states(hierarchy: &FragmentHierarchy, coded: impl Fn(usize) -> bool) -> Vec<SuperblockState> {
    (0..hierarchy.superblock_count())
        .map(|sb| {
            let frags = hierarchy.superblock_fragments(sb);
            let n = frags.iter().filter(|&&f| coded(f)).count();
            match n {
                0 => SuperblockState::Uncoded,
                n if n == frags.len() => SuperblockState::Full,
                _ => SuperblockState::Partial,
            }
        })
        .collect()
}

pub fn write_change_map(
    w: &mut BitWriter,
    hierarchy: &FragmentHierarchy,
    coded: impl Fn(usize) -> bool,
) -> Vec<SuperblockState> {
    let states = superblock_states(hierarchy, &coded);
    write_runs(w, states.iter().map(|&s| s == SuperblockState::Partial), RunTable::Long);
    if states.iter().any(|&s| s != SuperblockState::Partial) {
        let full = states
            .iter()
            .filter(|&&s| s != SuperblockState::Partial)
            .map(|&s| s == SuperblockState::Full);
        write_runs(w, full, RunTable::Long);
    }
    if states.contains(&SuperblockState::Partial) {
        let coded = &coded;
        let flags = states
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s == SuperblockState::Partial)
            .flat_map(move |(sb, _)| hierarchy.superblock_fragments(sb).iter().map(move |&f| coded(f)));
        write_runs(w, flags, RunTable::Short);
    }
    states
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitwriter::BitReader;

    struct RunReader {
        table: RunTable,
        value: bool,
        run: usize,
        started: bool,
        after_max: bool,
    }

    impl RunReader {
        fn new(table: RunTable) -> Self {
            Self {
                table,
                value: false,
                run: 0,
                started: false,
                after_max: false,
            }
        }

        fn read_run(&self, r: &mut BitReader) -> usize {
            let (base, bits) = self.table.tables();
            let prefix = r.read_limited_unary(base.len() as u32 - 1) as usize;
            if self.table == RunTable::Long && prefix == 0 {
                return 1;
            }
            base[prefix] + r.read_bits(bits[prefix]) as usize
        }

        fn next(&mut self, r: &mut BitReader) -> bool {
            if self.run == 0 {
                self.value = if !self.started || self.after_max {
                    r.read_bit()
                } else {
                    !self.value
                };
                self.started = true;
                self.run = self.read_run(r);
                self.after_max = self.table == RunTable::Long && self.run == self.table.max_run();
            }
            self.run -= 1;
            self.value
        }
    }

    fn round_trip(flags: &[bool], table: RunTable) {
        let mut w = BitWriter::new();
        write_runs(&mut w, flags.iter().copied(), table);
        let bits = w.bit_len();
        let data = w.finalize();
        let mut r = BitReader::new(&data);
        let mut reader = RunReader::new(table);
        let decoded: Vec<bool> = (0..flags.len()).map(|_| reader.next(&mut r)).collect();
        assert_eq!(decoded, flags, "{table:?} runs of {}", flags.len());
        assert_eq!(r.position(), bits);
    }

    fn runs(lengths: &[usize], first: bool) -> Vec<bool> {
        let mut out = Vec::new();
        let mut v = first;
        for &len in lengths {
            out.extend(std::iter::repeat_n(v, len));
            v = !v;
        }
        out
    }

    #[test]
    fn table_limits() {
        assert_eq!(RunTable::Long.max_run(), 4129);
        assert_eq!(RunTable::Short.max_run(), 30);
    }

    #[test]
    fn long_breakpoints_round_trip() {
        for len in [1, 2, 3, 4, 5, 6, 9, 10, 17, 18, 33, 34, 4128, 4129, 4130, 9000] {
            round_trip(&runs(&[len], true), RunTable::Long);
            round_trip(&runs(&[len, 1, len], false), RunTable::Long);
        }
    }

    #[test]
    fn short_breakpoints_round_trip() {
        for len in 1..=30 {
            round_trip(&runs(&[len, 2, len], true), RunTable::Short);
        }
        round_trip(&runs(&[30, 30, 1, 30], false), RunTable::Short);
    }

    #[test]
    fn single_run_codes() {
        let mut w = BitWriter::new();
        write_runs(&mut w, [false], RunTable::Long);
        // Start value 0, run of one coded as a single zero bit.
        assert_eq!(w.bit_len(), 2);
        let mut w = BitWriter::new();
        write_runs(&mut w, [true; 15], RunTable::Short);
        // Start value, the last prefix 11111, then four bits.
        assert_eq!(w.bit_len(), 1 + 5 + 4);
    }

    #[test]
    fn maximal_run_repeats_value_explicitly() {
        let mut w = BitWriter::new();
        write_runs(&mut w, std::iter::repeat_n(true, 4130), RunTable::Long);
        let data = w.finalize();
        let mut r = BitReader::new(&data);
        assert!(r.read_bit());
        assert_eq!(r.read_limited_unary(6), 6);
        assert_eq!(r.read_bits(12), 4129 - 34);
        // Explicit value bit, then a run of one.
        assert!(r.read_bit());
        assert!(!r.read_bit());
    }

    #[test]
    fn states_follow_coded_fragments() {
        let h = FragmentHierarchy::new(64, 32);
        // Luma super-block 0 fully coded, 1 partial, chroma untouched.
        let sb1: Vec<usize> = h.superblock_fragments(1).to_vec();
        let coded = |f: usize| h.superblock_fragments(0).contains(&f) || f == sb1[3];
        let states = superblock_states(&h, coded);
        assert_eq!(states[0], SuperblockState::Full);
        assert_eq!(states[1], SuperblockState::Partial);
        assert!(states[2..].iter().all(|&s| s == SuperblockState::Uncoded));
    }

    #[test]
    fn change_map_streams_decode() {
        let h = FragmentHierarchy::new(64, 32);
        let sb1: Vec<usize> = h.superblock_fragments(1).to_vec();
        let coded = |f: usize| h.superblock_fragments(0).contains(&f) || f == sb1[3];
        let mut w = BitWriter::new();
        let states = write_change_map(&mut w, &h, coded);
        let data = w.finalize();
        let mut r = BitReader::new(&data);

        let mut partial = RunReader::new(RunTable::Long);
        let p: Vec<bool> = states.iter().map(|_| partial.next(&mut r)).collect();
        assert_eq!(p, states.iter().map(|&s| s == SuperblockState::Partial).collect::<Vec<_>>());

        let mut full = RunReader::new(RunTable::Long);
        let non_partial: Vec<_> = states.iter().filter(|&&s| s != SuperblockState::Partial).collect();
        let f: Vec<bool> = non_partial.iter().map(|_| full.next(&mut r)).collect();
        assert_eq!(f, non_partial.iter().map(|&&s| s == SuperblockState::Full).collect::<Vec<_>>());

        let mut blocks = RunReader::new(RunTable::Short);
        let b: Vec<bool> = sb1.iter().map(|_| blocks.next(&mut r)).collect();
        assert_eq!(b, sb1.iter().map(|&f| f == sb1[3]).collect::<Vec<_>>());
    }

    #[test]
    fn thirty_run_across_partial_superblocks_toggles() {
        // Two full luma super-blocks, then the U plane.
        let h = FragmentHierarchy::new(128, 32);
        let sb0 = h.superblock_fragments(0).to_vec();
        let sb1 = h.superblock_fragments(1).to_vec();
        let sb2 = h.superblock_fragments(2).to_vec();
        assert_eq!((sb0.len(), sb1.len()), (16, 16));
        let picked = [sb0[0], sb1[15], sb2[0]];
        let coded = |f: usize| picked.contains(&f);

        let mut w = BitWriter::new();
        let states = write_change_map(&mut w, &h, coded);
        assert_eq!(&states[..3], &[SuperblockState::Partial; 3]);
        let data = w.finalize();
        let mut r = BitReader::new(&data);

        let mut partial = RunReader::new(RunTable::Long);
        for _ in &states {
            partial.next(&mut r);
        }
        let mut full = RunReader::new(RunTable::Long);
        for _ in states.iter().filter(|&&s| s != SuperblockState::Partial) {
            full.next(&mut r);
        }

        let mut expected = vec![true];
        expected.extend(std::iter::repeat_n(false, 30));
        expected.extend([true, true]);
        expected.extend(std::iter::repeat_n(false, sb2.len() - 1));
        let mut blocks = RunReader::new(RunTable::Short);
        let decoded: Vec<bool> = expected.iter().map(|_| blocks.next(&mut r)).collect();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn all_coded_frame_skips_fragment_stream() {
        let h = FragmentHierarchy::new(32, 32);
        let mut w = BitWriter::new();
        let states = write_change_map(&mut w, &h, |_| true);
        assert!(states.iter().all(|&s| s == SuperblockState::Full));
        // Stream 1: start bit 0 and a run of three (prefix 10, one bit).
        // Stream 2: start bit 1 and the same run.
        assert_eq!(w.bit_len(), 2 * (1 + 3));
    }
}
