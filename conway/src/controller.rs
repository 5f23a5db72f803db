//! Simulation controller
//!
//! Owns the authoritative [`SimulationState`], turns user intent (toggle,
//! step, play/stop, clear, rule change, save, load) into grid engine calls,
//! and tells listeners which cells to repaint. Everything runs on the caller's
//! thread; automatic playback is driven by [`SimulationController::tick`].

use std::path::Path;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::grid::Grid;
use crate::patterns::{self, Pattern};
use crate::rules::RuleMode;
use crate::snapshot::{self, SimulationState};

/// Step period at playback rate 1.0
pub const BASE_TICK_PERIOD: Duration = Duration::from_millis(1000);
pub const MIN_RATE: f32 = 1.0;
pub const MAX_RATE: f32 = 10.0;

/// Change notifications consumed by a front end.
pub trait SimulationListener {
    /// One cell needs repainting.
    fn render_cell(&mut self, row: usize, col: usize, alive: bool);

    fn rule_mode_changed(&mut self, _mode: RuleMode) {}
}

/// Timer state for automatic playback
#[derive(Debug, Clone)]
struct Playback {
    running: bool,
    rate: f32,
    last_step: Option<Instant>,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            running: false,
            rate: MIN_RATE,
            last_step: None,
        }
    }
}

impl Playback {
    fn period(&self) -> Duration {
        BASE_TICK_PERIOD.div_f32(self.rate)
    }
}

#[derive(Default)]
pub struct SimulationController {
    state: SimulationState,
    generation: u32,
    playback: Playback,
    listeners: Vec<Box<dyn SimulationListener>>,
}

impl SimulationController {
    /// All cells dead, standard rules, playback stopped.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: SimulationState) -> Self {
        Self { state, ..Self::default() }
    }

    pub fn add_listener(&mut self, listener: Box<dyn SimulationListener>) {
        self.listeners.push(listener);
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    pub fn rule_mode(&self) -> RuleMode {
        self.state.mode
    }

    /// Steps taken since the last clear, load or pattern.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn step(&mut self) {
        self.state.grid.advance_in_place(self.state.mode);
        self.generation += 1;
        debug!(generation = self.generation, population = self.state.grid.population(), "Stepped");
        self.render_all();
    }

    /// Affects only steps taken from now on.
    pub fn set_rule_mode(&mut self, mode: RuleMode) {
        if self.state.mode == mode {
            return;
        }
        self.state.mode = mode;
        info!("Rule mode set to {}", mode);
        for listener in &mut self.listeners {
            listener.rule_mode_changed(mode);
        }
    }

    pub fn clear(&mut self) {
        self.stop();
        self.state.grid.clear();
        self.generation = 0;
        self.render_all();
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        self.state.grid.toggle(row, col);
        let alive = self.state.grid.get(row, col);
        for listener in &mut self.listeners {
            listener.render_cell(row, col, alive);
        }
    }

    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        self.stop();
        patterns::apply_pattern(&mut self.state.grid, pattern);
        self.generation = 0;
        self.render_all();
    }

    pub fn randomize(&mut self, seed: u32) {
        self.stop();
        patterns::apply_random_pattern(&mut self.state.grid, seed);
        self.generation = 0;
        self.render_all();
    }

    // Playback

    pub fn play(&mut self) {
        if !self.playback.running {
            self.playback.running = true;
            self.playback.last_step = None;
            debug!("Playback started at rate {}", self.playback.rate);
        }
    }

    /// Takes effect before the next tick; no step runs until `play` again.
    pub fn stop(&mut self) {
        if self.playback.running {
            self.playback.running = false;
            self.playback.last_step = None;
            debug!("Playback stopped");
        }
    }

    pub fn toggle_playback(&mut self) {
        if self.playback.running { self.stop() } else { self.play() }
    }

    pub fn is_playing(&self) -> bool {
        self.playback.running
    }

    /// Clamped into `MIN_RATE..=MAX_RATE`.
    pub fn set_playback_rate(&mut self, rate: f32) {
        self.playback.rate = if rate.is_nan() { MIN_RATE } else { rate.clamp(MIN_RATE, MAX_RATE) };
    }

    pub fn playback_rate(&self) -> f32 {
        self.playback.rate
    }

    pub fn tick_period(&self) -> Duration {
        self.playback.period()
    }

    /// Timer hook. The first tick after `play` only starts the clock; after
    /// that one step runs each time a full period has elapsed. Returns whether
    /// a step ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.playback.running {
            return false;
        }
        match self.playback.last_step {
            None => {
                self.playback.last_step = Some(now);
                false
            }
            Some(last) if now.saturating_duration_since(last) >= self.playback.period() => {
                self.playback.last_step = Some(now);
                self.step();
                true
            }
            Some(_) => false,
        }
    }

    // Persistence

    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.stop();
        let path = path.as_ref();
        snapshot::save_to_path(path, &self.state).inspect_err(|e| {
            warn!("Failed to save {}: {}", path.display(), e);
        })
    }

    /// Replaces grid and rule mode from a file. The current state is left
    /// untouched unless the whole snapshot decodes.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.stop();
        let path = path.as_ref();
        let loaded = snapshot::load_from_path(path).inspect_err(|e| {
            warn!("Failed to load {}: {}", path.display(), e);
        })?;
        self.replace_state(loaded);
        Ok(())
    }

    fn replace_state(&mut self, state: SimulationState) {
        let mode = state.mode;
        self.state = state;
        self.generation = 0;
        self.render_all();
        // announced even when unchanged so a selector resyncs after load
        for listener in &mut self.listeners {
            listener.rule_mode_changed(mode);
        }
    }

    fn render_all(&mut self) {
        let grid = self.state.grid;
        for listener in &mut self.listeners {
            for (row, col, alive) in grid.iter_cells() {
                listener.render_cell(row, col, alive);
            }
        }
    }
}
