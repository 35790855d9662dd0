//! Frame encoding throughput.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use vp3enc::{FrameEncoder, FrameInput, FramePixels, FrameSettings, FrameType, ScalarDsp};

/// Smooth gradient with a noisy square that moves by `shift` pixels.
fn test_frame(width: u32, height: u32, shift: usize) -> FramePixels {
    let mut rng = ChaChaRng::from_seed([7; 32]);
    let mut frame = FramePixels::solid(width, height, 0, 128, 128);
    let (w, h) = (width as usize, height as usize);
    for y in 0..h {
        for x in 0..w {
            frame.y[y * w + x] = ((x + y) * 255 / (w + h)) as u8;
        }
    }
    for y in h / 4..h / 2 {
        for x in w / 4..w / 2 {
            frame.y[y * w + (x + shift) % w] = rng.r#gen();
        }
    }
    frame
}

fn bench_key_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_frame");
    for &(width, height) in &[(176, 144), (352, 288)] {
        group.throughput(Throughput::Elements(u64::from(width * height)));
        let source = test_frame(width, height, 0);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &source,
            |b, source| {
                let mut enc = FrameEncoder::new(width, height, FrameSettings::default()).unwrap();
                b.iter(|| {
                    let input = FrameInput {
                        source,
                        previous: None,
                        golden: None,
                        target_bytes: 8000,
                        frame_type: FrameType::Key,
                    };
                    black_box(enc.encode(&input, &ScalarDsp).unwrap())
                });
            },
        );
    }
    group.finish();
}

fn bench_inter_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("inter_frame");
    let (width, height) = (176, 144);
    group.throughput(Throughput::Elements(u64::from(width * height)));
    for fast in [false, true] {
        let mut enc = FrameEncoder::new(width, height, FrameSettings {
            fast_motion_search: fast,
            ..Default::default()
        })
        .unwrap();
        let first = test_frame(width, height, 0);
        let key = enc
            .encode(
                &FrameInput {
                    source: &first,
                    previous: None,
                    golden: None,
                    target_bytes: 8000,
                    frame_type: FrameType::Key,
                },
                &ScalarDsp,
            )
            .unwrap();
        let next = test_frame(width, height, 3);
        let name = if fast { "fast" } else { "exhaustive" };
        group.bench_function(name, |b| {
            b.iter(|| {
                let input = FrameInput {
                    source: &next,
                    previous: Some(&key.recon),
                    golden: Some(&key.recon),
                    target_bytes: 2000,
                    frame_type: FrameType::Inter,
                };
                black_box(enc.encode(&input, &ScalarDsp).unwrap())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_key_frame, bench_inter_frame);
criterion_main!(benches);
