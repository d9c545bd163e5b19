//! Offline rendering of an engine into a WAV file.
//!
//! Requires the `wav-export` feature.

use std::io::{Seek, Write};
use std::path::Path;

use crate::core::UniformSource;
use crate::error::GendynError;
use crate::synthesis::{GendynEngine, ParameterSet};

/// Block size used for offline rendering, matching a web audio render
/// quantum so parameters are sampled at the same granularity as in a live
/// host.
pub const RENDER_QUANTUM: usize = 128;

/// WAV layout for exported audio: mono, 32-bit float, at the engine's rate.
fn wav_spec(sample_rate: f64) -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate: sample_rate.round() as u32,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    }
}

/// Renders `frames` samples of `engine` into any seekable writer.
///
/// # Arguments
///
/// * `engine` - Engine to render, already configured with its sample rate
/// * `parameters` - Snapshot applied to every block
/// * `frames` - Number of samples to render
/// * `writer` - Destination of the WAV stream
pub fn write_wav<R, W, const N: usize>(
    engine: &mut GendynEngine<R, N>,
    parameters: &ParameterSet,
    frames: usize,
    writer: W,
) -> Result<(), GendynError>
where
    R: UniformSource,
    W: Write + Seek,
{
    let mut wav = hound::WavWriter::new(writer, wav_spec(engine.sample_rate()))?;
    let mut block = [0.0f32; RENDER_QUANTUM];

    let mut remaining = frames;
    while remaining > 0 {
        let len = remaining.min(RENDER_QUANTUM);
        engine.render_f32(&mut block[..len], parameters);
        for &sample in &block[..len] {
            wav.write_sample(sample)?;
        }
        remaining -= len;
    }

    wav.finalize()?;
    Ok(())
}

/// Renders `frames` samples of `engine` into a WAV file at `path`.
///
/// # Examples
///
/// ```no_run
/// use gendyn::{GendynEngine, ParameterSet};
/// use gendyn::export::render_to_wav;
///
/// let mut engine = GendynEngine::new();
/// engine.configure(44100.0);
/// render_to_wav(&mut engine, &ParameterSet::default(), 44100 * 5, "gendyn.wav")?;
/// # Ok::<(), gendyn::GendynError>(())
/// ```
pub fn render_to_wav<R, P, const N: usize>(
    engine: &mut GendynEngine<R, N>,
    parameters: &ParameterSet,
    frames: usize,
    path: P,
) -> Result<(), GendynError>
where
    R: UniformSource,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_wav(engine, parameters, frames, file)?;
    tracing::info!(frames, path = %path.display(), "exported gendyn render");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn engine(seed: u64) -> GendynEngine<StdRng> {
        let mut engine = GendynEngine::with_rng(StdRng::seed_from_u64(seed));
        engine.configure(22050.0);
        engine
    }

    #[test]
    fn test_written_samples_match_render() {
        let params = ParameterSet::default();
        let frames = 1000;

        let mut cursor = Cursor::new(Vec::new());
        write_wav(&mut engine(3), &params, frames, &mut cursor).unwrap();

        let mut expected = vec![0.0f32; frames];
        let mut reference = engine(3);
        for chunk in expected.chunks_mut(RENDER_QUANTUM) {
            reference.render_f32(chunk, &params);
        }

        cursor.set_position(0);
        let mut reader = hound::WavReader::new(cursor).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 22050);
        let samples: Vec<f32> = reader.samples::<f32>().map(|s| s.unwrap()).collect();
        assert_eq!(samples, expected);
    }

    #[test]
    fn test_zero_frames() {
        let mut cursor = Cursor::new(Vec::new());
        write_wav(&mut engine(1), &ParameterSet::default(), 0, &mut cursor).unwrap();
        cursor.set_position(0);
        let reader = hound::WavReader::new(cursor).unwrap();
        assert_eq!(reader.len(), 0);
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let result = render_to_wav(
            &mut engine(1),
            &ParameterSet::default(),
            10,
            "/nonexistent-gendyn-dir/out.wav",
        );
        assert!(matches!(result, Err(GendynError::Io(_))));
    }
}
