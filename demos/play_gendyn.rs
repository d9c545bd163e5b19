//! Interactive GENDYN player.
//!
//! A  / Z      amplitude distribution next / previous
//! D  / C      duration distribution next / previous
//! UP / DOWN   amplitude scale
//! RIGHT/LEFT  duration scale
//! ]  / [      control points
//! K  / J      max frequency up / down
//! I  / U      min frequency up / down
//! Q or ESC    quit

mod common;

use anyhow::Result;
use common::{KeyAction, cleanup_terminal, is_quit_key, run_event_loop, setup_terminal};
use crossterm::{ExecutableCommand, event::KeyCode};
use gendyn::{Distribution, FrequencyScale, GendynEngine, ParameterId, ParameterSet, SharedParameters};
use std::io::{Write, stdout};
use std::sync::Arc;

const SCALE_STEP: f64 = 0.05;
const FREQUENCY_STEP: f64 = 0.02;

struct Controls {
    params: ParameterSet,
    shared: Arc<SharedParameters>,
    scale: FrequencyScale,
}

impl Controls {
    fn new(shared: Arc<SharedParameters>) -> Self {
        let scale = FrequencyScale::default();
        let mut controls = Self {
            params: ParameterSet::default(),
            shared,
            scale,
        };
        controls.update(ParameterId::MaxFrequency, 800.0);
        controls
    }

    fn update(&mut self, id: ParameterId, value: f64) {
        self.params.set(id, value);
        self.shared.store(id, self.params.get(id));
    }

    fn step(&mut self, id: ParameterId, delta: f64) {
        self.update(id, self.params.get(id) + delta);
    }

    fn cycle_distribution(&mut self, id: ParameterId, forward: bool) {
        let current = Distribution::from_selector(self.params.get(id)).index();
        let next = if forward { (current + 1) % 7 } else { (current + 6) % 7 };
        self.update(id, next as f64);
    }

    fn nudge_frequency(&mut self, id: ParameterId, delta: f64) {
        let (min, max) = (self.params.min_frequency, self.params.max_frequency);
        let moved = match id {
            ParameterId::MinFrequency => self.scale.nudge_min(min, max, delta),
            _ => self.scale.nudge_max(min, max, delta),
        };
        self.update(id, moved);
    }

    fn handle(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('a') => self.cycle_distribution(ParameterId::AmpDistribution, true),
            KeyCode::Char('z') => self.cycle_distribution(ParameterId::AmpDistribution, false),
            KeyCode::Char('d') => self.cycle_distribution(ParameterId::DurDistribution, true),
            KeyCode::Char('c') => self.cycle_distribution(ParameterId::DurDistribution, false),
            KeyCode::Up => self.step(ParameterId::AmpScale, SCALE_STEP),
            KeyCode::Down => self.step(ParameterId::AmpScale, -SCALE_STEP),
            KeyCode::Right => self.step(ParameterId::DurScale, SCALE_STEP),
            KeyCode::Left => self.step(ParameterId::DurScale, -SCALE_STEP),
            KeyCode::Char(']') => self.step(ParameterId::ControlPoints, 1.0),
            KeyCode::Char('[') => self.step(ParameterId::ControlPoints, -1.0),
            KeyCode::Char('k') => self.nudge_frequency(ParameterId::MaxFrequency, FREQUENCY_STEP),
            KeyCode::Char('j') => self.nudge_frequency(ParameterId::MaxFrequency, -FREQUENCY_STEP),
            KeyCode::Char('i') => self.nudge_frequency(ParameterId::MinFrequency, FREQUENCY_STEP),
            KeyCode::Char('u') => self.nudge_frequency(ParameterId::MinFrequency, -FREQUENCY_STEP),
            _ => return false,
        }
        true
    }
}

fn draw_ui(controls: &Controls, sample_rate: f64) -> Result<()> {
    let mut stdout = stdout();
    let p = &controls.params;

    stdout.execute(crossterm::terminal::Clear(
        crossterm::terminal::ClearType::All,
    ))?;
    stdout.execute(crossterm::cursor::MoveTo(0, 0))?;

    write!(stdout, "GENDYN @ {} Hz | Q=quit\r\n\r\n", sample_rate)?;
    write!(
        stdout,
        "amp dist  {:<10} (A/Z)   amp scale {:.2} (UP/DOWN)\r\n",
        p.amp_distribution().name(),
        p.amp_scale
    )?;
    write!(
        stdout,
        "dur dist  {:<10} (D/C)   dur scale {:.2} (RIGHT/LEFT)\r\n",
        p.dur_distribution().name(),
        p.dur_scale
    )?;
    write!(
        stdout,
        "freq      {} - {} Hz (I/U, K/J)\r\n",
        p.min_frequency, p.max_frequency
    )?;
    write!(stdout, "points    {} ([/])\r\n", p.control_points)?;

    stdout.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let shared = Arc::new(SharedParameters::default());
    let mut controls = Controls::new(Arc::clone(&shared));

    let (_stream, sample_rate) = common::start_output_stream(GendynEngine::new(), shared)?;

    setup_terminal()?;
    draw_ui(&controls, sample_rate)?;

    let result = run_event_loop(|key_event| {
        if is_quit_key(key_event.code) {
            return Ok(KeyAction::Exit);
        }
        if controls.handle(key_event.code) {
            draw_ui(&controls, sample_rate)?;
        }
        Ok(KeyAction::Continue)
    });

    cleanup_terminal();
    result
}
