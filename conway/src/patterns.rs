// patterns.rs - Named seed patterns and a seeded random fill

use crate::grid::{GRID_SIZE, Grid};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(16, 15), (16, 16), (16, 17)],
    },
    Pattern {
        name: "Toad",
        cells: &[(15, 16), (15, 17), (15, 18), (16, 15), (16, 16), (16, 17)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(10, 10), (10, 11), (11, 10), (11, 11), (12, 12), (12, 13), (13, 12), (13, 13)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top section
            (9, 12), (9, 13), (9, 14), (9, 18), (9, 19), (9, 20),
            (11, 10), (11, 15), (11, 17), (11, 22),
            (12, 10), (12, 15), (12, 17), (12, 22),
            (13, 10), (13, 15), (13, 17), (13, 22),
            (14, 12), (14, 13), (14, 14), (14, 18), (14, 19), (14, 20),
            // Bottom section (mirrored)
            (16, 12), (16, 13), (16, 14), (16, 18), (16, 19), (16, 20),
            (17, 10), (17, 15), (17, 17), (17, 22),
            (18, 10), (18, 15), (18, 17), (18, 22),
            (19, 10), (19, 15), (19, 17), (19, 22),
            (21, 12), (21, 13), (21, 14), (21, 18), (21, 19), (21, 20),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(16, 16), (16, 17), (15, 17), (17, 16), (17, 15)],
    },
    Pattern {
        // Self-replicating under High Life
        name: "Replicator",
        cells: &[
            (13, 15), (13, 16), (13, 17),
            (14, 14), (14, 17),
            (15, 13), (15, 17),
            (16, 13), (16, 16),
            (17, 13), (17, 14), (17, 15),
        ],
    },
];

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) {
    *grid = Grid::from_cells(pattern.cells);
}

pub fn apply_random_pattern(grid: &mut Grid, seed_value: u32) {
    grid.clear();

    // Simple pseudo-random generator
    let mut hasher = DefaultHasher::new();
    seed_value.hash(&mut hasher);
    let mut seed = hasher.finish();

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            grid.set(row, col, (seed >> 16) % 3 == 0); // ~33% chance of being alive
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleMode;

    #[test]
    fn test_patterns_fit_the_grid() {
        for pattern in PATTERNS {
            assert!(
                pattern.cells.iter().all(|&(r, c)| r < GRID_SIZE && c < GRID_SIZE),
                "{} leaves the grid",
                pattern.name
            );
            let mut grid = Grid::new();
            apply_pattern(&mut grid, pattern);
            assert_eq!(grid.population(), pattern.cells.len(), "{} has duplicate cells", pattern.name);
        }
    }

    #[test]
    fn test_apply_pattern_replaces_grid() {
        let mut grid = Grid::from_cells(&[(30, 30)]);
        apply_pattern(&mut grid, find("blinker").unwrap());
        assert!(!grid.get(30, 30));
        assert_eq!(grid.population(), 3);
    }

    #[test]
    fn test_pulsar_has_period_three() {
        let pulsar = Grid::from_cells(find("Pulsar").unwrap().cells);
        let mut grid = pulsar;
        for _ in 0..3 {
            grid = grid.advance(RuleMode::Standard);
        }
        assert_eq!(grid, pulsar);
        assert_ne!(pulsar.advance(RuleMode::Standard), pulsar);
    }

    #[test]
    fn test_random_fill_is_deterministic() {
        let mut a = Grid::new();
        let mut b = Grid::new();
        apply_random_pattern(&mut a, 7);
        apply_random_pattern(&mut b, 7);
        assert_eq!(a, b);
        assert!(!a.is_empty());
        assert!(a.population() < crate::grid::CELL_COUNT);
    }
}
