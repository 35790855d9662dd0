use crate::bitwriter::BitWriter;
use crate::change_map::write_change_map;
use crate::dc_pred;
use crate::dsp::Dsp;
use crate::error::EncoderError;
use crate::fragment::{CodingMode, Fragment, MotionVector, RefFrame};
use crate::hierarchy::{FragmentHierarchy, Plane};
use crate::huffman::{choose_tables, write_tokens};
use crate::mode_pack::{choose_scheme, write_modes, write_vectors};
use crate::modes::{ModeSearch, Thresholds, pick_intra};
use crate::packet::FrameType;
use crate::quant::{QuantTables, nearest_q_index, q_index_of};
use crate::rc::{Correction, bytes_per_block, select_q_index};
use crate::recon::{loop_filter, predict_block, reconstruct};
use crate::scan::{from_zigzag, to_zigzag};
use crate::tokenize::{Token, tokenize};
use crate::upregulate::{Refresh, recovery_blocks};
use crate::y4m::FramePixels;

pub const MAX_DIMENSION: u32 = 4080;

/// Per-fragment SAD against the previous picture above which a fragment
/// counts as changed.
const CHANGE_THRESHOLD: u32 = 128;

const BITSTREAM_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    pub source: &'a FramePixels,
    /// Reconstruction of the previous frame. Required for inter frames.
    pub previous: Option<&'a FramePixels>,
    /// Reconstruction of the last golden frame. Required for inter frames.
    pub golden: Option<&'a FramePixels>,
    pub target_bytes: u32,
    pub frame_type: FrameType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSettings {
    /// AC scale used instead of the rate-controlled quantizer.
    pub fixed_quality: Option<u16>,
    pub max_q_index: u8,
    pub fast_motion_search: bool,
}

impl Default for FrameSettings {
    fn default() -> Self {
        Self {
            fixed_quality: None,
            max_q_index: 63,
            fast_motion_search: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EncodedFrame {
    pub data: Vec<u8>,
    /// The picture a decoder reconstructs from `data`.
    pub recon: FramePixels,
    pub q_index: u8,
    pub coded_fragments: usize,
}

struct Quantizer {
    header: u8,
    index: u8,
    tables: QuantTables,
}

type References<'a> = Option<(&'a FramePixels, &'a FramePixels)>;

pub fn validate_dimensions(width: u32, height: u32) -> Result<(), EncoderError> {
    let valid = |d: u32| d > 0 && d % 16 == 0 && d <= MAX_DIMENSION;
    if valid(width) && valid(height) {
        Ok(())
    } else {
        Err(EncoderError::InvalidDimensions { width, height })
    }
}

fn check_size(picture: &FramePixels, width: u32, height: u32) -> Result<(), EncoderError> {
    if picture.width != width || picture.height != height {
        return Err(EncoderError::DimensionMismatch {
            expected_w: width,
            expected_h: height,
            got_w: picture.width,
            got_h: picture.height,
        });
    }
    Ok(())
}

fn prediction(refs: References<'_>, fragment: &Fragment, plane: Plane, bx: usize, by: usize) -> [u8; 64] {
    match (fragment.mode.reference(), refs) {
        (RefFrame::Previous, Some((previous, _))) => predict_block(previous, plane, bx * 8, by * 8, fragment.mv),
        (RefFrame::Golden, Some((_, golden))) => predict_block(golden, plane, bx * 8, by * 8, fragment.mv),
        _ => [128; 64],
    }
}

pub struct FrameEncoder {
    width: u32,
    height: u32,
    settings: FrameSettings,
    hierarchy: FragmentHierarchy,
    fragments: Vec<Fragment>,
    dc: Vec<i16>,
    displayed: Vec<bool>,
    tokens: Vec<Token>,
    mv_list: Vec<MotionVector>,
    refresh: Refresh,
    correction: Correction,
}

impl FrameEncoder {
    pub fn new(width: u32, height: u32, settings: FrameSettings) -> Result<Self, EncoderError> {
        validate_dimensions(width, height)?;
        let hierarchy = FragmentHierarchy::new(width, height);
        let n = hierarchy.fragment_count();
        Ok(Self {
            width,
            height,
            settings,
            hierarchy,
            fragments: vec![Fragment::default(); n],
            dc: vec![0; n],
            displayed: vec![false; n],
            tokens: Vec::new(),
            mv_list: Vec::new(),
            refresh: Refresh::new(n),
            correction: Correction::default(),
        })
    }

    pub fn hierarchy(&self) -> &FragmentHierarchy {
        &self.hierarchy
    }

    pub fn correction(&self) -> f64 {
        self.correction.factor()
    }

    pub fn encode<D: Dsp>(&mut self, input: &FrameInput<'_>, dsp: &D) -> Result<EncodedFrame, EncoderError> {
        check_size(input.source, self.width, self.height)?;
        let refs = match input.frame_type {
            FrameType::Key => None,
            FrameType::Inter => match (input.previous, input.golden) {
                (Some(previous), Some(golden)) => {
                    check_size(previous, self.width, self.height)?;
                    check_size(golden, self.width, self.height)?;
                    Some((previous, golden))
                }
                _ => return Err(EncoderError::MissingReference),
            },
        };

        for f in self.fragments.iter_mut() {
            f.reset();
        }
        self.dc.fill(0);
        self.tokens.clear();
        self.mv_list.clear();

        self.scan_changes(input.source, refs.map(|(previous, _)| previous), dsp);
        let displayed = self.displayed.iter().filter(|&&d| d).count();
        let quantizer = self.select_quantizer(input, displayed);

        match refs {
            None => pick_intra(&mut self.fragments),
            Some((previous, golden)) => {
                let search = ModeSearch {
                    dsp,
                    hierarchy: &self.hierarchy,
                    source: input.source,
                    previous,
                    golden,
                    thresholds: Thresholds::new(quantizer.index, quantizer.tables.ac_scale()),
                    fast: self.settings.fast_motion_search,
                };
                search.pick_modes(&mut self.fragments, &self.displayed, &mut self.mv_list);
            }
        }
        for (f, &d) in self.fragments.iter_mut().zip(self.displayed.iter()) {
            f.coded = d;
        }

        if input.frame_type == FrameType::Inter {
            let estimate = bytes_per_block(FrameType::Inter, quantizer.index, self.correction.factor());
            let spare = f64::from(input.target_bytes) - displayed as f64 * estimate;
            let budget = recovery_blocks(spare, estimate);
            let forced = self.refresh.force(&self.hierarchy, &mut self.fragments, quantizer.index, budget);
            if forced > 0 {
                log::trace!("refresh forced {forced} fragments");
            }
        }

        self.quantize(input.source, refs, &quantizer.tables, dsp);
        dc_pred::apply(&self.hierarchy, &mut self.fragments, &mut self.dc);
        tokenize(&self.hierarchy, &mut self.fragments, &mut self.tokens);
        debug_assert_eq!(
            self.fragments.iter().map(|f| usize::from(f.token_count)).sum::<usize>(),
            self.tokens.len()
        );

        let data = self.write(input.frame_type, quantizer.header);
        let recon = self.reconstruct(refs, &quantizer.tables, quantizer.header);

        let coded_fragments = self.fragments.iter().filter(|f| f.coded).count();
        self.refresh.record(&self.fragments, quantizer.index, input.frame_type);
        self.correction
            .update(input.frame_type, quantizer.index, coded_fragments, data.len());

        log::debug!(
            "{:?} frame: q={} coded={}/{} bytes={} target={}",
            input.frame_type,
            quantizer.header,
            coded_fragments,
            self.fragments.len(),
            data.len(),
            input.target_bytes
        );

        Ok(EncodedFrame {
            data,
            recon,
            q_index: quantizer.header,
            coded_fragments,
        })
    }

    fn scan_changes<D: Dsp>(&mut self, source: &FramePixels, previous: Option<&FramePixels>, dsp: &D) {
        let Some(previous) = previous else {
            self.displayed.fill(true);
            return;
        };
        for (idx, displayed) in self.displayed.iter_mut().enumerate() {
            let (plane, bx, by) = self.hierarchy.position(idx);
            let sad = dsp.sad(&source.block(plane, bx, by), &previous.block(plane, bx, by));
            *displayed = sad > CHANGE_THRESHOLD;
        }
    }

    fn select_quantizer(&self, input: &FrameInput<'_>, displayed: usize) -> Quantizer {
        match self.settings.fixed_quality {
            Some(ac) => {
                let header = q_index_of(ac).unwrap_or_else(|| {
                    log::warn!("quality {ac} has no quantizer index, writing index 0");
                    0
                });
                Quantizer {
                    header,
                    index: nearest_q_index(ac),
                    tables: QuantTables::for_quality(ac),
                }
            }
            None => {
                let q = select_q_index(
                    input.target_bytes,
                    displayed,
                    input.frame_type,
                    self.correction.factor(),
                    self.settings.max_q_index,
                );
                Quantizer {
                    header: q,
                    index: q,
                    tables: QuantTables::for_index(q),
                }
            }
        }
    }

    /// Transforms and quantizes every coded fragment. Inter-no-MV fragments
    /// that quantize to nothing leave the coded set unless a refresh forced
    /// them in.
    fn quantize<D: Dsp>(&mut self, source: &FramePixels, refs: References<'_>, tables: &QuantTables, dsp: &D) {
        for idx in 0..self.fragments.len() {
            let fragment = &self.fragments[idx];
            if !fragment.coded {
                continue;
            }
            let (plane, bx, by) = self.hierarchy.position(idx);
            let pred = prediction(refs, fragment, plane, bx, by);
            let src = source.block(plane, bx, by);
            let residual: [i16; 64] = std::array::from_fn(|i| i16::from(src[i]) - i16::from(pred[i]));
            let coeffs = dsp.quantize(&dsp.fdct(&residual), tables.matrix(fragment.mode.is_intra(), plane));
            let zigzag = to_zigzag(&coeffs);

            let fragment = &mut self.fragments[idx];
            if fragment.mode == CodingMode::InterNoMv && !fragment.refresh && zigzag.iter().all(|&c| c == 0) {
                fragment.coded = false;
            } else {
                fragment.coeffs = zigzag;
            }
        }
    }

    fn write(&self, frame_type: FrameType, q_header: u8) -> Vec<u8> {
        let mut w = BitWriter::with_capacity(self.tokens.len() + 16);
        w.write_bit(frame_type == FrameType::Inter);
        w.write_bit(false);
        w.write_bits(u32::from(q_header), 6);

        match frame_type {
            FrameType::Key => {
                w.write_bits(BITSTREAM_VERSION, 13);
                w.write_bit(false);
                w.write_bits(0, 2);
            }
            FrameType::Inter => {
                let fragments = &self.fragments;
                write_change_map(&mut w, &self.hierarchy, |f| fragments[f].coded);
                let modes: Vec<CodingMode> = self
                    .hierarchy
                    .macroblocks()
                    .iter()
                    .filter(|mb| mb.luma.iter().any(|&f| fragments[f].coded))
                    .map(|mb| fragments[mb.luma[0]].mode)
                    .collect();
                let scheme = choose_scheme(&modes);
                write_modes(&mut w, &modes, &scheme);
                write_vectors(&mut w, &self.mv_list);
            }
        }

        let choice = choose_tables(&self.tokens);
        log::trace!("tables {choice:?}");
        write_tokens(&mut w, &self.tokens, &choice);
        w.finalize()
    }

    /// Rebuilds the picture exactly as a decoder would from the coded
    /// fragments, then runs the loop filter.
    fn reconstruct(&self, refs: References<'_>, tables: &QuantTables, q_header: u8) -> FramePixels {
        let mut recon = match refs {
            Some((previous, _)) => previous.clone(),
            None => FramePixels::solid(self.width, self.height, 0, 0, 0),
        };
        for (idx, fragment) in self.fragments.iter().enumerate() {
            if !fragment.coded {
                continue;
            }
            let (plane, bx, by) = self.hierarchy.position(idx);
            let pred = prediction(refs, fragment, plane, bx, by);
            let mut zigzag = fragment.coeffs;
            zigzag[0] = self.dc[idx];
            let raster = from_zigzag(&zigzag);
            let qmat = tables.matrix(fragment.mode.is_intra(), plane);
            let dequantized: [i32; 64] = std::array::from_fn(|i| i32::from(raster[i]) * qmat[i]);
            recon.put_block(plane, bx, by, &reconstruct(&dequantized, &pred));
        }
        loop_filter(&mut recon, &self.hierarchy, |f| self.fragments[f].coded, q_header);
        recon
    }
}
