//! Common utilities for the demo hosts.

use anyhow::Result;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, StreamConfig};
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gendyn::{GendynEngine, SharedParameters, Signal};
use std::io::stdout;
use std::panic;
use std::sync::Arc;
use std::time::Duration;

/// Key handling result that controls the event loop
pub enum KeyAction {
    /// Continue the event loop
    Continue,
    /// Exit the event loop
    Exit,
}

/// Opens the default output device and plays `engine` on it.
///
/// The engine moves into the audio callback; each callback reads one
/// parameter snapshot from `shared` and replicates the mono output across
/// every channel.
///
/// # Returns
///
/// The running stream (audio stops when it is dropped) and the device
/// sample rate.
pub fn start_output_stream(
    mut engine: GendynEngine,
    shared: Arc<SharedParameters>,
) -> Result<(cpal::Stream, f64)> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow::anyhow!("No output device available"))?;

    let config = device.default_output_config()?;
    let sample_rate = config.sample_rate().0 as f64;
    engine.configure(sample_rate);

    let stream = match config.sample_format() {
        SampleFormat::F32 => create_audio_stream::<f32>(&device, &config.into(), engine, shared)?,
        SampleFormat::I16 => create_audio_stream::<i16>(&device, &config.into(), engine, shared)?,
        SampleFormat::U16 => create_audio_stream::<u16>(&device, &config.into(), engine, shared)?,
        sample_format => {
            return Err(anyhow::anyhow!(
                "Unsupported sample format: {}",
                sample_format
            ));
        }
    };

    Ok((stream, sample_rate))
}

fn create_audio_stream<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    mut engine: GendynEngine,
    shared: Arc<SharedParameters>,
) -> Result<cpal::Stream>
where
    T: Sample + FromSample<f64> + cpal::SizedSample,
{
    let channels = config.channels as usize;

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            engine.set_parameters(&shared.snapshot());
            for frame in data.chunks_mut(channels) {
                let value: T = T::from_sample(engine.next_sample());
                for s in frame.iter_mut() {
                    *s = value;
                }
            }
        },
        |err| eprintln!("Audio stream error: {}", err),
        None,
    )?;

    stream.play()?;
    Ok(stream)
}

/// Enters raw mode and the alternate screen, restoring the terminal on
/// panic.
pub fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(crossterm::cursor::Hide)?;

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        cleanup_terminal();
        original_hook(panic_info);
    }));
    Ok(())
}

/// Polls keys until `key_handler` asks to exit.
pub fn run_event_loop<K>(mut key_handler: K) -> Result<()>
where
    K: FnMut(&KeyEvent) -> Result<KeyAction>,
{
    loop {
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key_event) = event::read()?
        {
            match key_handler(&key_event)? {
                KeyAction::Continue => {}
                KeyAction::Exit => break,
            }
        }
    }
    Ok(())
}

/// Cleans up terminal state (cursor, alternate screen, raw mode).
pub fn cleanup_terminal() {
    let _ = stdout().execute(crossterm::cursor::Show);
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Helper to check if a key code is a quit key (Q, ESC).
pub fn is_quit_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
}
