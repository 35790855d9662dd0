use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use vp3enc::quant::AC_SCALES;
use vp3enc::{EncodeConfig, Encoder, EncoderConfig, EncoderError, FramePixels, FrameType};

fn create_multi_frame_y4m(width: u32, height: u32, frames: &[FramePixels]) -> Vec<u8> {
    let header = format!("YUV4MPEG2 W{} H{} F25:1 Ip A1:1 C420jpeg\n", width, height);
    let mut data = header.into_bytes();
    for f in frames {
        data.extend_from_slice(b"FRAME\n");
        data.extend_from_slice(&f.y);
        data.extend_from_slice(&f.u);
        data.extend_from_slice(&f.v);
    }
    data
}

/// Diagonal gradient with a textured square whose left edge is at `x0`.
fn moving_square(width: u32, height: u32, x0: usize) -> FramePixels {
    let mut rng = ChaChaRng::from_seed([11; 32]);
    let texture: Vec<u8> = (0..16 * 16).map(|_| rng.gen_range(40..200)).collect();
    let mut f = FramePixels::solid(width, height, 0, 110, 140);
    let (w, h) = (width as usize, height as usize);
    for y in 0..h {
        for x in 0..w {
            f.y[y * w + x] = (16 + (x + 2 * y) * 200 / (w + 2 * h)) as u8;
        }
    }
    for y in 0..16 {
        for x in 0..16 {
            f.y[(16 + y) * w + (x0 + x) % w] = texture[y * 16 + x];
        }
    }
    f
}

fn noise(width: u32, height: u32, seed: u8) -> FramePixels {
    let mut rng = ChaChaRng::from_seed([seed; 32]);
    let mut f = FramePixels::solid(width, height, 0, 0, 0);
    for p in f.y.iter_mut().chain(f.u.iter_mut()).chain(f.v.iter_mut()) {
        *p = rng.r#gen();
    }
    f
}

fn mean_abs_error(a: &[u8], b: &[u8]) -> f64 {
    let total: u64 = a.iter().zip(b).map(|(&x, &y)| u64::from(x.abs_diff(y))).sum();
    total as f64 / a.len() as f64
}

fn fixed(q_index: usize) -> EncodeConfig {
    EncodeConfig {
        fixed_quality: Some(AC_SCALES[q_index]),
        fast_motion_search: true,
        ..Default::default()
    }
}

#[test]
fn y4m_sequence_encodes_to_one_packet_per_frame() {
    let frames: Vec<_> = (0..4).map(|i| moving_square(64, 48, i * 2)).collect();
    let y4m = create_multi_frame_y4m(64, 48, &frames);
    let parsed = FramePixels::all_from_y4m(&y4m).unwrap();
    assert_eq!(parsed, frames);

    let packets = vp3enc::encode(&parsed, &fixed(40)).unwrap();
    assert_eq!(packets.len(), 4);
    for (i, p) in packets.iter().enumerate() {
        assert_eq!(p.frame_number, i as u64);
        assert_eq!(p.q_index, 40);
        // Frame type bit, reserved bit, then the quantizer index.
        assert_eq!(p.data[0] >> 7 == 1, p.frame_type == FrameType::Inter);
        assert_eq!(p.data[0] & 0x3f, 40);
    }
    assert_eq!(packets[0].frame_type, FrameType::Key);
    // Key frame version field: 13 bits holding 1 after the first byte.
    assert_eq!(packets[0].data[1], 0);
    assert_eq!(packets[0].data[2] >> 3, 1);
}

#[test]
fn black_key_frame_is_deterministic() {
    let frames = [FramePixels::solid(176, 144, 0, 0, 0)];
    let a = vp3enc::encode(&frames, &fixed(30)).unwrap();
    let b = vp3enc::encode(&frames, &fixed(30)).unwrap();
    assert_eq!(a[0].data, b[0].data);
}

#[test]
fn motion_makes_inter_frames_cheaper_than_key_frames() {
    let frames: Vec<_> = (0..6).map(|i| moving_square(64, 64, 8 + i * 2)).collect();
    let packets = vp3enc::encode(&frames, &fixed(45)).unwrap();
    let key = packets[0].data.len();
    for p in &packets[1..] {
        assert_eq!(p.frame_type, FrameType::Inter);
        assert!(p.data.len() < key, "inter {} vs key {}", p.data.len(), key);
    }
}

#[test]
fn reconstruction_tracks_the_source() {
    let mut enc = Encoder::new(64, 64, EncoderConfig::from(&fixed(50))).unwrap();
    for i in 0..5 {
        let frame = moving_square(64, 64, 8 + i * 3);
        enc.send_frame(&frame).unwrap();
        enc.receive_packet().unwrap();
        let recon = enc.reference().unwrap();
        let err = mean_abs_error(&recon.y, &frame.y);
        assert!(err < 8.0, "frame {i}: mean error {err}");
    }
}

#[test]
fn exhaustive_and_fast_search_both_encode() {
    let frames: Vec<_> = (0..3).map(|i| moving_square(48, 48, 4 + i * 5)).collect();
    for fast in [false, true] {
        let config = EncodeConfig {
            fast_motion_search: fast,
            ..fixed(40)
        };
        let packets = vp3enc::encode(&frames, &config).unwrap();
        assert_eq!(packets.len(), 3);
        assert!(packets.iter().all(|p| !p.data.is_empty()));
    }
}

#[test]
fn higher_bitrate_buys_finer_quantizers() {
    let frames: Vec<_> = (0..6).map(|i| noise(32, 32, i)).collect();
    let run = |bitrate: u64| {
        let config = EncodeConfig {
            target_bitrate: Some(bitrate),
            keyint: 3,
            fast_motion_search: true,
            ..Default::default()
        };
        vp3enc::encode(&frames, &config).unwrap()
    };
    let low = run(5_000);
    let high = run(1_000_000);
    let bytes = |p: &[vp3enc::Packet]| p.iter().map(|p| p.data.len()).sum::<usize>();
    assert!(bytes(&high) > bytes(&low));
    let avg_q = |p: &[vp3enc::Packet]| p.iter().map(|p| u32::from(p.q_index)).sum::<u32>();
    assert!(avg_q(&high) > avg_q(&low));
    for p in low.iter().chain(high.iter()) {
        if p.frame_type == FrameType::Key {
            assert!(vp3enc::rc::KEY_Q_RANGE.contains(&p.q_index));
        }
    }
}

#[test]
fn max_q_index_caps_rate_control() {
    let frames: Vec<_> = (0..4).map(|i| noise(32, 32, i)).collect();
    let config = EncodeConfig {
        target_bitrate: Some(50_000_000),
        max_q_index: 25,
        fast_motion_search: true,
        ..Default::default()
    };
    let packets = vp3enc::encode(&frames, &config).unwrap();
    assert!(packets.iter().all(|p| p.q_index <= 25));
}

#[test]
fn unmatched_quality_uses_index_zero() {
    let config = EncodeConfig {
        fixed_quality: Some(101),
        ..Default::default()
    };
    let packets = vp3enc::encode(&[moving_square(32, 32, 0)], &config).unwrap();
    assert_eq!(packets[0].q_index, 0);
    assert_eq!(packets[0].data[0] & 0x3f, 0);
}

#[test]
fn static_sequence_costs_almost_nothing_after_the_key_frame() {
    let frame = moving_square(64, 64, 20);
    let packets = vp3enc::encode(&vec![frame; 4], &fixed(63)).unwrap();
    let key = packets[0].data.len();
    for p in &packets[1..] {
        assert!(p.data.len() * 4 < key, "static inter frame took {} bytes", p.data.len());
    }
}

#[test]
fn invalid_inputs_are_reported() {
    assert!(matches!(
        Encoder::new(100, 64, EncoderConfig::from(&EncodeConfig::default())),
        Err(EncoderError::InvalidDimensions { width: 100, .. })
    ));
    assert!(matches!(
        FramePixels::all_from_y4m(b"not a y4m file"),
        Err(EncoderError::InvalidY4m(_))
    ));
    let frames = [FramePixels::solid(32, 32, 0, 0, 0), FramePixels::solid(32, 48, 0, 0, 0)];
    assert!(matches!(
        vp3enc::encode(&frames, &EncodeConfig::default()),
        Err(EncoderError::DimensionMismatch { .. })
    ));
}
