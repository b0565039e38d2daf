//! Stereo WAV reading and writing.
//!
//! The engine works on interleaved stereo frames, so everything here speaks
//! interleaved `[L, R, L, R, ...]` f32 buffers.

use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;

/// WAV I/O failures.
#[derive(Debug, thiserror::Error)]
pub enum WavError {
    /// Reading or writing the file failed.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The file has a channel layout the engine cannot take.
    #[error("unsupported channel count {0} (expected mono or stereo)")]
    ChannelCount(u16),
}

/// Format of a WAV file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample (16, 24 or 32; 32 is written as float).
    pub bits_per_sample: u16,
}

impl WavSpec {
    /// Stereo at `sample_rate` and `bits_per_sample`.
    pub fn stereo(sample_rate: u32, bits_per_sample: u16) -> Self {
        Self {
            channels: 2,
            sample_rate,
            bits_per_sample,
        }
    }
}

impl From<hound::WavSpec> for WavSpec {
    fn from(spec: hound::WavSpec) -> Self {
        Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
        }
    }
}

impl From<WavSpec> for hound::WavSpec {
    fn from(spec: WavSpec) -> Self {
        hound::WavSpec {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            sample_format: if spec.bits_per_sample == 32 {
                SampleFormat::Float
            } else {
                SampleFormat::Int
            },
        }
    }
}

/// Reads a mono or stereo WAV file as interleaved stereo.
///
/// Mono files are duplicated to both channels. Returns the samples and the
/// file's original spec.
pub fn read_wav_stereo<P: AsRef<Path>>(path: P) -> Result<(Vec<f32>, WavSpec), WavError> {
    let reader = WavReader::open(path)?;
    let spec = WavSpec::from(reader.spec());

    let samples: Vec<f32> = match reader.spec().sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    let interleaved = match spec.channels {
        1 => samples.iter().flat_map(|&s| [s, s]).collect(),
        2 => samples,
        other => return Err(WavError::ChannelCount(other)),
    };

    Ok((interleaved, spec))
}

/// Writes interleaved samples with `spec`.
///
/// Integer depths are scaled and clamped to full scale.
pub fn write_wav<P: AsRef<Path>>(path: P, samples: &[f32], spec: WavSpec) -> Result<(), WavError> {
    let mut writer = WavWriter::create(path, hound::WavSpec::from(spec))?;

    if spec.bits_per_sample == 32 {
        for &sample in samples {
            writer.write_sample(sample)?;
        }
    } else {
        let max_val = (1i32 << (spec.bits_per_sample - 1)) as f32;
        for &sample in samples {
            let int_sample = (sample * max_val).clamp(-max_val, max_val - 1.0) as i32;
            writer.write_sample(int_sample)?;
        }
    }

    writer.finalize()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn stereo_float_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stereo.wav");
        let samples = [0.5f32, -0.25, 0.0, 1.0];

        write_wav(&path, &samples, WavSpec::stereo(48000, 32)).unwrap();
        let (read, spec) = read_wav_stereo(&path).unwrap();

        assert_eq!(read, samples);
        assert_eq!(spec, WavSpec::stereo(48000, 32));
    }

    #[test]
    fn mono_is_duplicated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mono.wav");
        let spec = WavSpec {
            channels: 1,
            sample_rate: 48000,
            bits_per_sample: 32,
        };

        write_wav(&path, &[0.1, 0.2], spec).unwrap();
        let (read, _) = read_wav_stereo(&path).unwrap();

        assert_eq!(read, vec![0.1, 0.1, 0.2, 0.2]);
    }

    #[test]
    fn sixteen_bit_is_quantized() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pcm16.wav");

        write_wav(&path, &[0.5, -0.5, 2.0, -2.0], WavSpec::stereo(48000, 16)).unwrap();
        let (read, spec) = read_wav_stereo(&path).unwrap();

        assert_eq!(spec.bits_per_sample, 16);
        assert!((read[0] - 0.5).abs() < 1e-4);
        assert!((read[1] + 0.5).abs() < 1e-4);
        assert!(read[2] < 1.0 && read[2] > 0.999);
        assert_eq!(read[3], -1.0);
    }

    #[test]
    fn rejects_surround() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quad.wav");
        let spec = WavSpec {
            channels: 4,
            sample_rate: 48000,
            bits_per_sample: 32,
        };

        write_wav(&path, &[0.0; 8], spec).unwrap();
        assert!(matches!(
            read_wav_stereo(&path),
            Err(WavError::ChannelCount(4))
        ));
    }
}
