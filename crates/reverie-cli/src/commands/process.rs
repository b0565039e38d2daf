//! File-based reverb processing command.

use super::common::{EngineArgs, build_engine, frame_progress, print_stats};
use crate::wav::{WavSpec, read_wav_stereo, write_wav};
use anyhow::Context;
use clap::Args;
use reverie_engine::REQUIRED_STORAGE;
use std::path::PathBuf;

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file (48 kHz, mono or stereo)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file (stereo)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    #[command(flatten)]
    engine: EngineArgs,

    /// Processing block size in frames
    #[arg(long, default_value = "512")]
    block_size: usize,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32")]
    bit_depth: u16,

    /// Seconds of silence appended so the tail can ring out
    #[arg(long, default_value = "0.0")]
    tail: f32,
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.block_size > 0, "--block-size must be at least 1");
    anyhow::ensure!(
        matches!(args.bit_depth, 16 | 24 | 32),
        "--bit-depth must be 16, 24, or 32 (got {})",
        args.bit_depth
    );
    anyhow::ensure!(
        args.tail.is_finite() && args.tail >= 0.0,
        "--tail must be a non-negative number of seconds"
    );

    println!("Reading {}...", args.input.display());
    let (mut samples, spec) = read_wav_stereo(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let input_frames = samples.len() / 2;

    println!(
        "  {} frames, {} ch, {} Hz, {:.2}s",
        input_frames,
        spec.channels,
        spec.sample_rate,
        input_frames as f32 / spec.sample_rate as f32
    );

    let mut storage = vec![0.0f32; REQUIRED_STORAGE];
    let mut engine = build_engine(&mut storage, spec.sample_rate, &args.engine)?;
    tracing::info!(
        time = engine.param(reverie_engine::ParamId::Time),
        depth = engine.param(reverie_engine::ParamId::Depth),
        mix = engine.param(reverie_engine::ParamId::Mix),
        block_size = args.block_size,
        "engine ready"
    );

    let tail_frames = (args.tail * spec.sample_rate as f32) as usize;
    samples.resize(samples.len() + tail_frames * 2, 0.0);
    let frames = samples.len() / 2;

    let input = samples.clone();
    let pb = frame_progress(frames)?;
    for (i, block) in samples.chunks_mut(args.block_size * 2).enumerate() {
        engine.render_in_place(block);
        pb.set_position(((i + 1) * args.block_size).min(frames) as u64);
    }
    pb.finish_with_message("done");

    println!("\nStats:");
    print_stats("Input:", &input);
    print_stats("Output:", &samples);

    let out_spec = WavSpec::stereo(spec.sample_rate, args.bit_depth);
    println!("\nWriting {}...", args.output.display());
    write_wav(&args.output, &samples, out_spec)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    println!("Done!");

    Ok(())
}
