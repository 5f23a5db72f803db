// main.rs - Desktop front end for the toroidal Game of Life
// Rendering and input live in ui.rs; all simulation state lives in the conway crate

use std::io;
use std::process::ExitCode;

use conway::{RuleMode, SimulationController, SimulationListener};
use eframe::egui;
use egui::Color32;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod ui;

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 900.0]),
        ..Default::default()
    };

    info!("Starting Game of Life");
    match eframe::run_native(
        "Game of Life",
        options,
        Box::new(|cc| Box::new(LifeApp::new(cc.egui_ctx.clone()))),
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to open window: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Asks egui for a new frame whenever the simulation reports a change.
struct RepaintListener {
    ctx: egui::Context,
}

impl SimulationListener for RepaintListener {
    fn render_cell(&mut self, _row: usize, _col: usize, _alive: bool) {
        self.ctx.request_repaint();
    }

    fn rule_mode_changed(&mut self, _mode: RuleMode) {
        self.ctx.request_repaint();
    }
}

pub struct LifeApp {
    pub sim: SimulationController,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub cell_size: f32,
    pub selected_pattern: usize,
    pub random_seed: u32,
    pub status: Option<String>,
}

impl LifeApp {
    fn new(ctx: egui::Context) -> Self {
        let mut sim = SimulationController::new();
        sim.add_listener(Box::new(RepaintListener { ctx }));
        Self {
            sim,
            live_color: Color32::from_rgb(0, 160, 0),
            dead_color: Color32::BLACK,
            cell_size: 20.0,
            selected_pattern: 0,
            random_seed: 0,
            status: None,
        }
    }
}
