//! Conway's Game of Life and High Life on a 32x32 toroidal grid.
//!
//! The grid engine ([`grid`]) computes generations, the snapshot codec
//! ([`snapshot`]) reads and writes `.lif` files, and the
//! [`SimulationController`] ties both to a front end through
//! [`SimulationListener`] notifications.
//!
//! ```rust
//! use conway::{RuleMode, SimulationController};
//!
//! let mut sim = SimulationController::new();
//! for col in 4..7 {
//!     sim.toggle_cell(10, col);
//! }
//! sim.set_rule_mode(RuleMode::HighLife);
//! sim.step();
//! assert!(sim.grid().get(9, 5) && sim.grid().get(11, 5));
//! ```

pub mod controller;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod rules;
pub mod snapshot;

pub use controller::{SimulationController, SimulationListener};
pub use error::{Result, SnapshotError};
pub use grid::{GRID_SIZE, Grid};
pub use rules::RuleMode;
pub use snapshot::SimulationState;
