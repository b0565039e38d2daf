//! Shared CLI helpers used across multiple commands.

use anyhow::Context;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use reverie_core::linear_to_db;
use reverie_engine::{HostConfig, ParamId, ReverbEngine, SliceArena};

/// Reverb controls shared by every rendering command.
///
/// Raw values outside a parameter's range are clamped by the engine.
#[derive(Args, Debug, Clone, Copy)]
pub struct EngineArgs {
    /// Decay time (0-1023; 0.4 s to 10 s)
    #[arg(long, default_value_t = 512, allow_negative_numbers = true)]
    pub time: i32,

    /// Send level into the reverb (0-1023)
    #[arg(long, default_value_t = 1023, allow_negative_numbers = true)]
    pub depth: i32,

    /// Dry/wet balance (-1000 fully dry, 1000 fully wet)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub mix: i32,
}

/// Initializes an engine over `storage` and applies `args`.
pub fn build_engine<'a>(
    storage: &'a mut [f32],
    sample_rate: u32,
    args: &EngineArgs,
) -> anyhow::Result<ReverbEngine<'a>> {
    let mut engine = ReverbEngine::initialize(
        &HostConfig::stereo(sample_rate),
        &mut SliceArena::new(storage),
    )
    .context("failed to initialize reverb engine")?;

    for (id, raw) in [
        (ParamId::Time, args.time),
        (ParamId::Depth, args.depth),
        (ParamId::Mix, args.mix),
    ] {
        engine.set_param(id, raw);
        let stored = engine.param(id);
        if stored != raw {
            tracing::warn!(
                "{} = {raw} is out of range, clamped to {stored}",
                id.descriptor().key
            );
        }
    }

    Ok(engine)
}

/// Progress bar over `len` frames in the CLI's house style.
pub fn frame_progress(len: usize) -> anyhow::Result<ProgressBar> {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );
    Ok(pb)
}

/// Root mean square of a buffer (0 for an empty one).
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f64 = samples.iter().map(|&s| f64::from(s) * f64::from(s)).sum();
    (sum / samples.len() as f64).sqrt() as f32
}

/// Largest absolute sample.
pub fn peak(samples: &[f32]) -> f32 {
    samples.iter().map(|s| s.abs()).fold(0.0, f32::max)
}

/// Prints RMS and peak of a buffer in dBFS.
pub fn print_stats(label: &str, samples: &[f32]) {
    println!(
        "  {label:7} RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(rms(samples)),
        linear_to_db(peak(samples))
    );
}
