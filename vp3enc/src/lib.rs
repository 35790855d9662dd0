#![forbid(unsafe_code)]

pub mod bitwriter;
pub mod change_map;
pub mod dc_pred;
pub mod dsp;
pub mod encoder;
pub mod error;
pub mod fragment;
pub mod frame;
pub mod hierarchy;
pub mod huffman;
pub mod huffman_tables;
pub mod mode_pack;
pub mod modes;
pub mod motion;
pub mod packet;
pub mod quant;
pub mod rc;
pub mod recon;
pub mod scan;
pub mod tokenize;
pub mod upregulate;
pub mod y4m;

pub use dsp::{Dsp, ScalarDsp};
pub use encoder::{Encoder, EncoderConfig};
pub use error::EncoderError;
pub use frame::{EncodedFrame, FrameEncoder, FrameInput, FrameSettings};
pub use packet::{FrameType, Packet};
pub use y4m::FramePixels;

/// Quantizer index used when neither a bitrate nor a quality is given.
pub const DEFAULT_Q_INDEX: u8 = 40;
pub const DEFAULT_KEYINT: usize = 25;

#[derive(Debug, Clone)]
pub struct EncodeConfig {
    pub keyint: usize,
    pub target_bitrate: Option<u64>,
    pub fps: f64,
    /// AC scale to encode every frame at, bypassing rate control.
    pub fixed_quality: Option<u16>,
    pub max_q_index: u8,
    pub fast_motion_search: bool,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            keyint: DEFAULT_KEYINT,
            target_bitrate: None,
            fps: 25.0,
            fixed_quality: None,
            max_q_index: 63,
            fast_motion_search: false,
        }
    }
}

/// Encodes a sequence of equally sized pictures into one packet per frame.
pub fn encode(frames: &[FramePixels], config: &EncodeConfig) -> Result<Vec<Packet>, EncoderError> {
    let Some(first) = frames.first() else {
        return Ok(Vec::new());
    };

    let mut enc = Encoder::new(first.width, first.height, EncoderConfig::from(config))?;
    let mut packets = Vec::with_capacity(frames.len());

    for pixels in frames {
        enc.send_frame(pixels)?;
        while let Some(packet) = enc.receive_packet() {
            packets.push(packet);
        }
    }

    enc.flush();
    while let Some(packet) = enc.receive_packet() {
        packets.push(packet);
    }

    if let Some(stats) = enc.rate_control_stats() {
        log::info!(
            "rate control: target={}kbps, avg_q={}, buffer={}%",
            stats.target_bitrate / 1000,
            stats.avg_q_index,
            stats.buffer_fullness_pct
        );
    }

    Ok(packets)
}
