use crate::DEFAULT_Q_INDEX;
use crate::EncodeConfig;
use crate::dsp::ScalarDsp;
use crate::error::EncoderError;
use crate::frame::{FrameEncoder, FrameInput, FrameSettings, validate_dimensions};
use crate::packet::{FrameType, Packet};
use crate::quant::AC_SCALES;
use crate::rc::{RateControl, RateControlStats};
use crate::y4m::FramePixels;

#[derive(Debug, Clone)]
pub struct EncoderConfig {
    pub keyint: usize,
    pub target_bitrate: Option<u64>,
    pub fps: f64,
    pub fixed_quality: Option<u16>,
    pub max_q_index: u8,
    pub fast_motion_search: bool,
}

impl From<&EncodeConfig> for EncoderConfig {
    fn from(c: &EncodeConfig) -> Self {
        Self {
            keyint: c.keyint,
            target_bitrate: c.target_bitrate,
            fps: c.fps,
            fixed_quality: c.fixed_quality,
            max_q_index: c.max_q_index,
            fast_motion_search: c.fast_motion_search,
        }
    }
}

impl EncoderConfig {
    /// Frame-level settings. Without a bitrate target or an explicit
    /// quality the encoder runs at [`DEFAULT_Q_INDEX`].
    fn frame_settings(&self) -> FrameSettings {
        let fixed_quality = match (self.fixed_quality, self.target_bitrate) {
            (Some(q), _) => Some(q),
            (None, Some(_)) => None,
            (None, None) => Some(AC_SCALES[DEFAULT_Q_INDEX as usize]),
        };
        FrameSettings {
            fixed_quality,
            max_q_index: self.max_q_index,
            fast_motion_search: self.fast_motion_search,
        }
    }
}

pub struct Encoder {
    config: EncoderConfig,
    width: u32,
    height: u32,
    frame_index: u64,
    frame_encoder: FrameEncoder,
    rate_ctrl: Option<RateControl>,
    previous: Option<FramePixels>,
    golden: Option<FramePixels>,
    pending_packet: Option<Packet>,
}

impl Encoder {
    pub fn new(width: u32, height: u32, config: EncoderConfig) -> Result<Self, EncoderError> {
        validate_dimensions(width, height)?;

        let rate_ctrl = config
            .target_bitrate
            .map(|bitrate| RateControl::new(bitrate, config.fps, config.keyint));
        let frame_encoder = FrameEncoder::new(width, height, config.frame_settings())?;

        Ok(Self {
            config,
            width,
            height,
            frame_index: 0,
            frame_encoder,
            rate_ctrl,
            previous: None,
            golden: None,
            pending_packet: None,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn send_frame(&mut self, pixels: &FramePixels) -> Result<(), EncoderError> {
        if pixels.width != self.width || pixels.height != self.height {
            return Err(EncoderError::DimensionMismatch {
                expected_w: self.width,
                expected_h: self.height,
                got_w: pixels.width,
                got_h: pixels.height,
            });
        }

        let is_keyframe = self.frame_index.is_multiple_of(self.config.keyint as u64);
        let frame_type = if is_keyframe {
            FrameType::Key
        } else {
            FrameType::Inter
        };
        let target_bytes = self
            .rate_ctrl
            .as_ref()
            .map_or(0, |rc| rc.target_bytes(frame_type));

        let input = FrameInput {
            source: pixels,
            previous: self.previous.as_ref(),
            golden: self.golden.as_ref(),
            target_bytes,
            frame_type,
        };
        let encoded = self.frame_encoder.encode(&input, &ScalarDsp)?;

        if let Some(rc) = &mut self.rate_ctrl {
            rc.update((encoded.data.len() * 8) as u64, encoded.q_index);
        }

        if is_keyframe {
            self.golden = Some(encoded.recon.clone());
        }
        self.previous = Some(encoded.recon);

        self.pending_packet = Some(Packet {
            data: encoded.data,
            frame_type,
            frame_number: self.frame_index,
            q_index: encoded.q_index,
        });

        self.frame_index += 1;

        Ok(())
    }

    pub fn receive_packet(&mut self) -> Option<Packet> {
        self.pending_packet.take()
    }

    pub fn flush(&mut self) {}

    pub fn rate_control_stats(&self) -> Option<RateControlStats> {
        self.rate_ctrl.as_ref().map(|rc| rc.stats())
    }

    /// Reconstruction of the last encoded frame.
    pub fn reference(&self) -> Option<&FramePixels> {
        self.previous.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(keyint: usize, target_bitrate: Option<u64>) -> EncoderConfig {
        EncoderConfig {
            keyint,
            target_bitrate,
            fps: 25.0,
            fixed_quality: None,
            max_q_index: 63,
            fast_motion_search: true,
        }
    }

    #[test]
    fn new_valid_dimensions() {
        let enc = Encoder::new(64, 48, config(25, None)).unwrap();
        assert_eq!(enc.width(), 64);
        assert_eq!(enc.height(), 48);
    }

    #[test]
    fn new_limits() {
        assert!(Encoder::new(16, 16, config(25, None)).is_ok());
        assert!(Encoder::new(4080, 16, config(25, None)).is_ok());
        assert!(Encoder::new(4096, 16, config(25, None)).is_err());
        assert!(Encoder::new(64, 40, config(25, None)).is_err());
    }

    #[test]
    fn new_invalid_width_zero() {
        match Encoder::new(0, 64, config(25, None)) {
            Err(EncoderError::InvalidDimensions { width, height }) => {
                assert_eq!(width, 0);
                assert_eq!(height, 64);
            }
            _ => panic!("expected InvalidDimensions"),
        }
    }

    #[test]
    fn send_frame_receive_packet_lifecycle() {
        let mut enc = Encoder::new(64, 64, config(25, None)).unwrap();
        let frame = FramePixels::solid(64, 64, 128, 128, 128);

        assert!(enc.receive_packet().is_none());

        enc.send_frame(&frame).unwrap();
        let packet = enc.receive_packet().unwrap();

        assert_eq!(packet.frame_type, FrameType::Key);
        assert_eq!(packet.frame_number, 0);
        assert_eq!(packet.q_index, DEFAULT_Q_INDEX);
        assert!(!packet.data.is_empty());

        assert!(enc.receive_packet().is_none());
    }

    #[test]
    fn keyint_triggers_new_keyframe() {
        let mut enc = Encoder::new(64, 64, config(3, None)).unwrap();
        let frame = FramePixels::solid(64, 64, 128, 128, 128);

        let expected_types = [
            FrameType::Key,
            FrameType::Inter,
            FrameType::Inter,
            FrameType::Key,
            FrameType::Inter,
        ];

        for expected in expected_types {
            enc.send_frame(&frame).unwrap();
            let packet = enc.receive_packet().unwrap();
            assert_eq!(packet.frame_type, expected);
            assert_eq!(packet.data[0] >> 7 == 1, expected == FrameType::Inter);
        }
    }

    #[test]
    fn dimension_mismatch_error() {
        let mut enc = Encoder::new(64, 64, config(25, None)).unwrap();
        let wrong_frame = FramePixels::solid(128, 128, 128, 128, 128);

        match enc.send_frame(&wrong_frame) {
            Err(EncoderError::DimensionMismatch {
                expected_w,
                expected_h,
                got_w,
                got_h,
            }) => {
                assert_eq!((expected_w, expected_h), (64, 64));
                assert_eq!((got_w, got_h), (128, 128));
            }
            _ => panic!("expected DimensionMismatch"),
        }
    }

    #[test]
    fn flush_is_callable() {
        let mut enc = Encoder::new(64, 64, config(25, None)).unwrap();
        enc.flush();
        assert!(enc.receive_packet().is_none());
    }

    #[test]
    fn reference_follows_reconstruction() {
        let mut enc = Encoder::new(32, 32, config(25, None)).unwrap();
        assert!(enc.reference().is_none());
        let frame = FramePixels::solid(32, 32, 128, 128, 128);
        enc.send_frame(&frame).unwrap();
        assert_eq!(enc.reference(), Some(&frame));
    }

    #[test]
    fn static_inter_frames_are_tiny() {
        let mut enc = Encoder::new(64, 64, config(25, None)).unwrap();
        let frame = FramePixels::solid(64, 64, 90, 100, 110);
        enc.send_frame(&frame).unwrap();
        let key = enc.receive_packet().unwrap();
        enc.send_frame(&frame).unwrap();
        let inter = enc.receive_packet().unwrap();
        assert!(inter.data.len() < key.data.len());
    }

    #[test]
    fn encoder_with_rate_control() {
        let mut enc = Encoder::new(64, 64, config(25, Some(500_000))).unwrap();
        let frame = FramePixels::solid(64, 64, 128, 128, 128);

        enc.send_frame(&frame).unwrap();
        let packet = enc.receive_packet().unwrap();
        assert!(!packet.data.is_empty());
        assert!(crate::rc::KEY_Q_RANGE.contains(&packet.q_index));

        let stats = enc.rate_control_stats().unwrap();
        assert_eq!(stats.frames_encoded, 1);
    }

    #[test]
    fn fixed_quality_overrides_rate_control() {
        let mut cfg = config(25, Some(500_000));
        cfg.fixed_quality = Some(AC_SCALES[10]);
        let mut enc = Encoder::new(32, 32, cfg).unwrap();
        enc.send_frame(&FramePixels::solid(32, 32, 1, 2, 3)).unwrap();
        assert_eq!(enc.receive_packet().unwrap().q_index, 10);
    }

    #[test]
    fn frame_numbers_increment() {
        let mut enc = Encoder::new(64, 64, config(25, None)).unwrap();
        let frame = FramePixels::solid(64, 64, 128, 128, 128);

        for expected_num in 0..5u64 {
            enc.send_frame(&frame).unwrap();
            let packet = enc.receive_packet().unwrap();
            assert_eq!(packet.frame_number, expected_num);
        }
    }

    #[test]
    fn encoder_config_from_encode_config() {
        let ec = EncodeConfig {
            keyint: 10,
            target_bitrate: Some(1_000_000),
            fps: 30.0,
            fast_motion_search: true,
            ..Default::default()
        };
        let config: EncoderConfig = (&ec).into();
        assert_eq!(config.keyint, 10);
        assert_eq!(config.target_bitrate, Some(1_000_000));
        assert!((config.fps - 30.0).abs() < f64::EPSILON);
        assert!(config.fast_motion_search);
        assert_eq!(config.frame_settings().fixed_quality, None);
    }
}
