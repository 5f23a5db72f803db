//! `.lif` snapshot codec
//!
//! A snapshot is the full grid in row-major order, one byte per cell
//! (`0` dead, `1` alive), followed by a single rule-mode byte (`1` for
//! HighLife). There is no header: the grid dimension is the compile-time
//! [`GRID_SIZE`], and a file written for another size fails on length.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Result, SnapshotError};
use crate::grid::{CELL_COUNT, GRID_SIZE, Grid};
use crate::rules::RuleMode;

/// File extension used by the save/load dialogs
pub const SNAPSHOT_EXTENSION: &str = "lif";

/// Encoded length of every snapshot
pub const SNAPSHOT_LEN: usize = CELL_COUNT + 1;

/// Grid plus the rule mode that drives it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulationState {
    pub grid: Grid,
    pub mode: RuleMode,
}

impl SimulationState {
    pub fn new(grid: Grid, mode: RuleMode) -> Self {
        Self { grid, mode }
    }
}

pub fn encode(state: &SimulationState) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(SNAPSHOT_LEN);
    bytes.extend(state.grid.iter_cells().map(|(_, _, alive)| u8::from(alive)));
    bytes.push(u8::from(state.mode.is_high_life()));
    bytes
}

/// Decodes a snapshot: grid first, then the mode flag.
pub fn decode(bytes: &[u8]) -> Result<SimulationState> {
    if bytes.len() != SNAPSHOT_LEN {
        return Err(SnapshotError::Malformed {
            expected: SNAPSHOT_LEN,
            actual: bytes.len(),
        });
    }

    let (cells, flag) = bytes.split_at(CELL_COUNT);
    let mut grid = Grid::new();
    for (offset, &byte) in cells.iter().enumerate() {
        grid.set(offset / GRID_SIZE, offset % GRID_SIZE, read_bool(offset, byte)?);
    }
    let mode = RuleMode::from_flag(read_bool(CELL_COUNT, flag[0])?);

    Ok(SimulationState { grid, mode })
}

fn read_bool(offset: usize, value: u8) -> Result<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(SnapshotError::InvalidByte { offset, value }),
    }
}

pub fn save_to_path<P: AsRef<Path>>(path: P, state: &SimulationState) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, encode(state))?;
    info!("Saved snapshot to {}", path.display());
    Ok(())
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<SimulationState> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    let state = decode(&bytes)?;
    info!("Loaded snapshot from {} ({}, {} live)", path.display(), state.mode, state.grid.population());
    Ok(state)
}
