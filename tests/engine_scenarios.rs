#![cfg(feature = "synth")]

use std::sync::Arc;
use std::thread;

use gendyn::{
    Distribution, GendynEngine, ParameterId, ParameterSet, SharedParameters, Signal,
    UniformSource,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Deterministic uniform sequence from a 64-bit LCG.
struct LcgSource {
    state: u64,
}

impl LcgSource {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl UniformSource for LcgSource {
    fn next_uniform(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn block_parameters(block: usize) -> ParameterSet {
    ParameterSet::default()
        .with(ParameterId::AmpDistribution, (block % 8) as f64)
        .with(ParameterId::DurDistribution, ((block + 3) % 7) as f64)
        .with(ParameterId::AmpShape, 0.1 + (block % 9) as f64 * 0.1)
        .with(ParameterId::ControlPoints, (1 + block % 40) as f64)
        .with(ParameterId::MaxFrequency, 200.0 + block as f64 * 10.0)
}

#[test]
fn test_frozen_memory_is_periodic_without_drift() {
    const SAMPLE_RATE: f64 = 44100.0;
    let params = ParameterSet {
        min_frequency: 20.0,
        max_frequency: 1000.0,
        amp_scale: 0.0,
        dur_scale: 0.0,
        control_points: 32.0,
        ..ParameterSet::default()
    };

    let mut engine: GendynEngine<StdRng, 32> =
        GendynEngine::with_rng(StdRng::seed_from_u64(2025));
    engine.configure(SAMPLE_RATE);
    let memory = engine.memory().clone();

    let mut output = vec![0.0; 44100];
    let mut indices = Vec::with_capacity(output.len());
    for chunk in output.chunks_mut(128) {
        engine.set_parameters(&params);
        for sample in chunk.iter_mut() {
            *sample = engine.next_sample();
            indices.push(engine.memory_index());
        }
    }

    // scales are zero: the breakpoints never move
    assert_eq!(engine.memory(), &memory);
    assert!(output.iter().all(|s| (-1.0..=1.0).contains(s)));

    // independent model of the segment clock driven by the fixed durations
    let durations = memory.durations();
    let mut phase = 1.0;
    let mut index = 0;
    let mut freq = 0.0;
    let mut updates = 0usize;
    for (n, &observed) in indices.iter().enumerate() {
        if phase >= 1.0 {
            phase -= 1.0;
            index = (index + 1) % 32;
            freq = (20.0 + 980.0 * durations[index]) * (1.0 / SAMPLE_RATE) * 32.0;
            updates += 1;
        }
        phase += freq;
        assert_eq!(observed, index, "segment clock drifted at sample {}", n);
    }

    // one traversal of all 32 breakpoints is one cycle between 20 and 1000 Hz
    let cycles = updates as f64 / 32.0;
    assert!((19.0..=1001.0).contains(&cycles), "{} cycles", cycles);

    // interpolation never leaves the envelope of the fixed breakpoints
    let amplitudes = memory.amplitudes();
    let lo = amplitudes.iter().copied().fold(0.0, f64::min);
    let hi = amplitudes.iter().copied().fold(0.0, f64::max);
    assert!(output.iter().all(|s| *s >= lo - 1e-12 && *s <= hi + 1e-12));
}

#[test]
fn test_identical_sources_give_bit_identical_output() {
    let mut a: GendynEngine<LcgSource> = GendynEngine::with_rng(LcgSource::new(17));
    let mut b: GendynEngine<LcgSource> = GendynEngine::with_rng(LcgSource::new(17));
    a.configure(48000.0);
    b.configure(48000.0);

    for block in 0..200 {
        let params = block_parameters(block);
        let mut left = [0.0; 128];
        let mut right = [0.0; 128];
        a.render(&mut left, &params);
        b.render(&mut right, &params);
        for (l, r) in left.iter().zip(right.iter()) {
            assert_eq!(l.to_bits(), r.to_bits(), "block {}", block);
        }
    }
}

#[test]
fn test_different_sources_diverge() {
    let mut a: GendynEngine<LcgSource> = GendynEngine::with_rng(LcgSource::new(1));
    let mut b: GendynEngine<LcgSource> = GendynEngine::with_rng(LcgSource::new(2));
    let params = ParameterSet::default();
    let mut left = vec![0.0; 4096];
    let mut right = vec![0.0; 4096];
    a.render(&mut left, &params);
    b.render(&mut right, &params);
    assert_ne!(left, right);
}

#[test]
fn test_tables_stay_in_range_for_every_distribution() {
    for amp in Distribution::ALL {
        for dur in Distribution::ALL {
            let mut engine: GendynEngine<LcgSource, 16> =
                GendynEngine::with_rng(LcgSource::new(amp.index() as u64 * 7 + dur.index() as u64));
            let params = ParameterSet {
                amp_distribution: amp.index() as f64,
                dur_distribution: dur.index() as f64,
                amp_scale: 1.0,
                dur_scale: 1.0,
                max_frequency: 20000.0,
                control_points: 16.0,
                ..ParameterSet::default()
            };
            let mut block = vec![0.0; 2048];
            engine.render(&mut block, &params);

            assert!(block.iter().all(|s| (-1.0..=1.0).contains(s)));
            let memory = engine.memory();
            assert!(memory.amplitudes().iter().all(|a| (-1.0..=1.0).contains(a)));
            assert!(memory.durations().iter().all(|d| (0.0..=1.0).contains(d)));
        }
    }
}

#[test]
fn test_control_thread_feeds_audio_thread() {
    let shared = Arc::new(SharedParameters::default());

    let control = {
        let shared = Arc::clone(&shared);
        thread::spawn(move || {
            for step in 0..1000 {
                shared.store(ParameterId::AmpScale, (step % 100) as f64 / 100.0);
                shared.store(ParameterId::ControlPoints, (step % 40) as f64);
                shared.store(ParameterId::AmpDistribution, (step % 7) as f64);
            }
        })
    };

    let audio = {
        let shared = Arc::clone(&shared);
        thread::spawn(move || {
            let mut engine: GendynEngine = GendynEngine::with_rng(StdRng::seed_from_u64(3));
            engine.configure(48000.0);
            let mut block = [0.0; 128];
            for _ in 0..500 {
                engine.render(&mut block, &shared.snapshot());
                assert!(block.iter().all(|s| (-1.0..=1.0).contains(s)));
                assert!(engine.memory_index() < engine.active_count());
            }
        })
    };

    control.join().unwrap();
    audio.join().unwrap();
}
