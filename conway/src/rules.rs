// rules.rs - Birth and survival thresholds for the supported rule modes

use std::fmt;

/// Which birth/survival table drives the next generation. Global to the
/// simulation, never per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RuleMode {
    /// Conway's Life, B3/S23
    #[default]
    Standard,
    /// HighLife, B36/S23
    HighLife,
}

impl RuleMode {
    pub const ALL: [RuleMode; 2] = [RuleMode::Standard, RuleMode::HighLife];

    /// Next state for a cell given its current state and live-neighbor count
    /// (center excluded).
    pub fn next_state(self, alive: bool, live_neighbors: u8) -> bool {
        match (self, alive, live_neighbors) {
            (_, true, 2) | (_, true, 3)      => true,   // Survival
            (_, false, 3)                    => true,   // Birth
            (RuleMode::HighLife, false, 6)   => true,   // HighLife replicator birth
            _                                => false,  // Death or stays dead
        }
    }

    pub fn is_high_life(self) -> bool {
        matches!(self, RuleMode::HighLife)
    }

    /// Mode for the persisted flag byte (true = HighLife).
    pub fn from_flag(high_life: bool) -> Self {
        if high_life { RuleMode::HighLife } else { RuleMode::Standard }
    }

    pub fn name(self) -> &'static str {
        match self {
            RuleMode::Standard => "Life",
            RuleMode::HighLife => "High Life",
        }
    }

    pub fn rulestring(self) -> &'static str {
        match self {
            RuleMode::Standard => "B3/S23",
            RuleMode::HighLife => "B36/S23",
        }
    }
}

impl fmt::Display for RuleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.rulestring())
    }
}
