//! Impulse response rendering command.

use super::common::{EngineArgs, build_engine, frame_progress, peak};
use crate::wav::{WavSpec, write_wav};
use anyhow::Context;
use clap::Args;
use reverie_engine::REQUIRED_STORAGE;
use reverie_engine::tuning::SAMPLE_RATE;
use std::path::PathBuf;

/// Frames rendered per engine call.
const BLOCK_FRAMES: usize = 256;

#[derive(Args)]
pub struct ImpulseArgs {
    /// Output WAV file (stereo)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Length of the rendered response in seconds
    #[arg(long, default_value = "3.0")]
    seconds: f32,

    /// Impulse amplitude on both channels
    #[arg(long, default_value = "1.0", allow_negative_numbers = true)]
    amplitude: f32,

    #[command(flatten)]
    engine: EngineArgs,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32")]
    bit_depth: u16,
}

pub fn run(args: ImpulseArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.seconds.is_finite() && args.seconds > 0.0,
        "--seconds must be positive"
    );
    anyhow::ensure!(
        matches!(args.bit_depth, 16 | 24 | 32),
        "--bit-depth must be 16, 24, or 32 (got {})",
        args.bit_depth
    );

    let frames = ((args.seconds * SAMPLE_RATE as f32) as usize).max(1);
    let mut buffer = vec![0.0f32; frames * 2];
    buffer[0] = args.amplitude;
    buffer[1] = args.amplitude;

    let mut storage = vec![0.0f32; REQUIRED_STORAGE];
    let mut engine = build_engine(&mut storage, SAMPLE_RATE, &args.engine)?;

    println!(
        "Rendering {:.2}s impulse response (time {}, depth {}, mix {})...",
        args.seconds,
        args.engine.time,
        args.engine.depth,
        args.engine.mix
    );

    let pb = frame_progress(frames)?;
    for (i, block) in buffer.chunks_mut(BLOCK_FRAMES * 2).enumerate() {
        engine.render_in_place(block);
        pb.set_position(((i + 1) * BLOCK_FRAMES).min(frames) as u64);
    }
    pb.finish_with_message("done");

    // Tail length: last frame still above -120 dB relative to the peak.
    let level = peak(&buffer);
    let threshold = level * 1e-6;
    let last_audible = buffer
        .chunks_exact(2)
        .rposition(|f| f[0].abs() > threshold || f[1].abs() > threshold)
        .unwrap_or(0);
    tracing::info!(peak = level, last_audible, "impulse rendered");
    println!(
        "  peak {:.4}, audible for {:.2}s",
        level,
        last_audible as f32 / SAMPLE_RATE as f32
    );

    write_wav(
        &args.output,
        &buffer,
        WavSpec::stereo(SAMPLE_RATE, args.bit_depth),
    )
    .with_context(|| format!("failed to write {}", args.output.display()))?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
