#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use vp3enc::quant::AC_SCALES;
use vp3enc::{EncodeConfig, Encoder, EncoderConfig, FramePixels, FrameType, Packet};

fn parse_bitrate(s: &str) -> Result<u64, String> {
    let (num, mult) = if let Some(n) = s.strip_suffix('k').or_else(|| s.strip_suffix('K')) {
        (n, 1_000u64)
    } else if let Some(n) = s.strip_suffix('m').or_else(|| s.strip_suffix('M')) {
        (n, 1_000_000u64)
    } else {
        (s, 1u64)
    };
    num.parse::<u64>()
        .map(|v| v * mult)
        .map_err(|_| format!("invalid bitrate: {s}"))
}

fn parse_q_index(s: &str) -> Result<u8, String> {
    match s.parse::<u8>() {
        Ok(q) if usize::from(q) < AC_SCALES.len() => Ok(q),
        _ => Err(format!("quantizer index must be 0..=63, got {s}")),
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Encode a Y4M file to VP3.1 frames")]
struct Args {
    /// 4:2:0 Y4M input
    input: PathBuf,

    /// Output file of length-prefixed frames
    #[arg(short, long)]
    output: PathBuf,

    /// Fixed quantizer index (0 coarsest, 63 finest)
    #[arg(short, long, value_parser = parse_q_index, conflicts_with = "quality")]
    q: Option<u8>,

    /// Fixed AC scale; values outside the quantizer table are written as index 0
    #[arg(long)]
    quality: Option<u16>,

    /// Target bitrate, e.g. 500k or 2M
    #[arg(long, value_parser = parse_bitrate)]
    bitrate: Option<u64>,

    #[arg(long, default_value_t = vp3enc::DEFAULT_KEYINT)]
    keyint: usize,

    #[arg(long, default_value_t = 25.0)]
    fps: f64,

    /// Finest quantizer index rate control may choose
    #[arg(long, value_parser = parse_q_index, default_value_t = 63)]
    max_q: u8,

    /// Hierarchical motion search instead of the exhaustive one
    #[arg(long)]
    fast: bool,
}

impl Args {
    fn config(&self) -> EncodeConfig {
        EncodeConfig {
            keyint: self.keyint.max(1),
            target_bitrate: self.bitrate,
            fps: self.fps,
            fixed_quality: self.quality.or(self.q.map(|q| AC_SCALES[usize::from(q)])),
            max_q_index: self.max_q,
            fast_motion_search: self.fast,
        }
    }
}

fn write_packet(out: &mut impl Write, packet: &Packet) -> std::io::Result<()> {
    out.write_all(&(packet.data.len() as u32).to_le_bytes())?;
    out.write_all(&packet.data)
}

fn log_packet(packet: &Packet) {
    let frame_type_str = match packet.frame_type {
        FrameType::Key => "KEY",
        FrameType::Inter => "INTER",
    };
    log::info!(
        "frame {:>4}  {:>5}  q={:>2}  {} bytes",
        packet.frame_number,
        frame_type_str,
        packet.q_index,
        packet.data.len()
    );
}

/// Writes every pending packet and returns the bytes written.
fn drain(encoder: &mut Encoder, out: &mut impl Write, path: &Path) -> usize {
    let mut written = 0;
    while let Some(packet) = encoder.receive_packet() {
        log_packet(&packet);
        written += 4 + packet.data.len();
        write_packet(out, &packet).unwrap_or_else(|e| {
            eprintln!("Error writing {}: {}", path.display(), e);
            process::exit(1);
        });
    }
    written
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    let frames = FramePixels::all_from_y4m_file(&args.input).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", args.input.display(), e);
        process::exit(1);
    });
    if frames.is_empty() {
        eprintln!("Error: no input frames");
        process::exit(1);
    }

    let width = frames[0].width;
    let height = frames[0].height;
    let mut encoder = Encoder::new(width, height, EncoderConfig::from(&args.config())).unwrap_or_else(|e| {
        eprintln!("Error creating encoder: {e}");
        process::exit(1);
    });

    let file = File::create(&args.output).unwrap_or_else(|e| {
        eprintln!("Error creating {}: {}", args.output.display(), e);
        process::exit(1);
    });
    let mut out = BufWriter::new(file);
    let mut output_size = 0usize;

    for frame in &frames {
        encoder.send_frame(frame).unwrap_or_else(|e| {
            eprintln!("Error encoding frame: {e}");
            process::exit(1);
        });
        output_size += drain(&mut encoder, &mut out, &args.output);
    }

    encoder.flush();
    output_size += drain(&mut encoder, &mut out, &args.output);

    out.flush().unwrap_or_else(|e| {
        eprintln!("Error writing {}: {}", args.output.display(), e);
        process::exit(1);
    });

    if let Some(stats) = encoder.rate_control_stats() {
        eprintln!(
            "Wrote {} bytes to {} ({} frames, target={}kbps, avg_q={}, buffer={}%, keyint={})",
            output_size,
            args.output.display(),
            frames.len(),
            stats.target_bitrate / 1000,
            stats.avg_q_index,
            stats.buffer_fullness_pct,
            args.keyint
        );
    } else {
        eprintln!(
            "Wrote {} bytes to {} ({} frames, {}x{})",
            output_size,
            args.output.display(),
            frames.len(),
            width,
            height
        );
    }
}
