//! Renders a GENDYN patch to a WAV file.
//!
//! Usage: cargo run --example bounce_wav --features wav-export -- [path] [seconds] [seed]

use anyhow::{Context, Result};
use gendyn::export::render_to_wav;
use gendyn::{GendynEngine, ParameterId, ParameterSet};
use rand::SeedableRng;
use rand::rngs::StdRng;

const SAMPLE_RATE: f64 = 44100.0;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "gendyn.wav".to_string());
    let seconds: f64 = match args.next() {
        Some(s) => s.parse().context("seconds must be a number")?,
        None => 5.0,
    };
    let seed: u64 = match args.next() {
        Some(s) => s.parse().context("seed must be an integer")?,
        None => 1,
    };

    let mut engine: GendynEngine = GendynEngine::with_rng(StdRng::seed_from_u64(seed));
    engine.configure(SAMPLE_RATE);

    let params = ParameterSet::default()
        .with(ParameterId::AmpDistribution, 3.0)
        .with(ParameterId::DurDistribution, 1.0)
        .with(ParameterId::MaxFrequency, 800.0)
        .with(ParameterId::ControlPoints, 12.0);

    let frames = (seconds.max(0.0) * SAMPLE_RATE) as usize;
    render_to_wav(&mut engine, &params, frames, &path)
        .with_context(|| format!("failed to write {}", path))?;

    println!("Wrote {} samples to {}", frames, path);
    Ok(())
}
