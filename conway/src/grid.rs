// grid.rs - Toroidal grid and generation advance for Conway's Game of Life

use crate::rules::RuleMode;

// Compile-time grid size configuration
pub const GRID_SIZE: usize = 32;                      // Cells per side, both axes wrap
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;  // Total cells in a generation

pub type TRow = [bool; GRID_SIZE];
pub type TGrid = [TRow; GRID_SIZE];

// Neighbor offsets as (row, col) deltas, center excluded
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// One generation of cells. Every row and column wraps to the opposite edge,
/// so each cell has exactly eight neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: TGrid,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// All cells dead.
    pub fn new() -> Self {
        Self { cells: [[false; GRID_SIZE]; GRID_SIZE] }
    }

    pub fn from_rows(cells: TGrid) -> Self {
        Self { cells }
    }

    /// Grid with exactly the listed cells alive. Coordinates wrap.
    pub fn from_cells(alive: &[(usize, usize)]) -> Self {
        let mut grid = Self::new();
        for &(row, col) in alive {
            grid.set(row % GRID_SIZE, col % GRID_SIZE, true);
        }
        grid
    }

    pub fn rows(&self) -> &TGrid {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        self.cells[row][col] = alive;
    }

    /// Flips one cell. Panics on coordinates outside the grid.
    pub fn toggle(&mut self, row: usize, col: usize) {
        self.cells[row][col] = !self.cells[row][col];
    }

    pub fn clear(&mut self) {
        self.cells = [[false; GRID_SIZE]; GRID_SIZE];
    }

    pub fn population(&self) -> usize {
        self.cells.iter().map(|row| row.iter().filter(|&&alive| alive).count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.population() == 0
    }

    /// Row-major `(row, col, alive)` for every cell.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().map(move |(col, &alive)| (row, col, alive))
        })
    }

    /// Live cells among the eight wrapped neighbors of `(row, col)`.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for &(dr, dc) in &NEIGHBOR_OFFSETS {
            let nr = wrap(row, dr);
            let nc = wrap(col, dc);
            if self.cells[nr][nc] { count += 1; }
        }
        count
    }

    pub fn next_cell_state(&self, row: usize, col: usize, mode: RuleMode) -> bool {
        mode.next_state(self.cells[row][col], self.live_neighbors(row, col))
    }

    /// Computes the next generation. Every next state is read from `self`
    /// into a staging grid before anything is committed, so later cells never
    /// see half-updated neighbors.
    pub fn advance(&self, mode: RuleMode) -> Grid {
        let mut next = [[false; GRID_SIZE]; GRID_SIZE];
        for (row, next_row) in next.iter_mut().enumerate() {
            for (col, cell) in next_row.iter_mut().enumerate() {
                *cell = self.next_cell_state(row, col, mode);
            }
        }
        Grid { cells: next }
    }

    /// Same as [`Grid::advance`] but swaps the staging grid into `self`.
    pub fn advance_in_place(&mut self, mode: RuleMode) {
        let mut next = self.advance(mode);
        std::mem::swap(self, &mut next);
    }
}

fn wrap(index: usize, delta: isize) -> usize {
    (index as isize + GRID_SIZE as isize + delta) as usize % GRID_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAST: usize = GRID_SIZE - 1;

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new();
        assert!(grid.is_empty());
        assert_eq!(grid.iter_cells().count(), CELL_COUNT);
    }

    #[test]
    fn test_toggle_flips_back_and_forth() {
        let mut grid = Grid::new();
        grid.toggle(4, 7);
        assert!(grid.get(4, 7));
        assert_eq!(grid.population(), 1);
        grid.toggle(4, 7);
        assert!(!grid.get(4, 7));
    }

    #[test]
    #[should_panic]
    fn test_toggle_out_of_range_panics() {
        let mut grid = Grid::new();
        grid.toggle(GRID_SIZE, 0);
    }

    #[test]
    fn test_corner_sees_opposite_corner() {
        let grid = Grid::from_cells(&[(LAST, LAST)]);
        assert_eq!(grid.live_neighbors(0, 0), 1);
        assert_eq!(grid.live_neighbors(LAST - 1, LAST - 1), 1);
        assert_eq!(grid.live_neighbors(LAST, LAST), 0);
        assert_eq!(grid.live_neighbors(5, 5), 0);
    }

    #[test]
    fn test_every_wrapped_offset_counts_once() {
        let probes = [(0, 0), (0, LAST), (LAST, 0), (LAST, LAST), (0, 9), (LAST, 9), (9, 0), (9, LAST), (12, 20)];
        for &(row, col) in &probes {
            for &(dr, dc) in &NEIGHBOR_OFFSETS {
                let grid = Grid::from_cells(&[(wrap(row, dr), wrap(col, dc))]);
                assert_eq!(grid.live_neighbors(row, col), 1, "cell ({row}, {col}) offset ({dr}, {dc})");
            }
        }
    }

    #[test]
    fn test_full_neighborhood_at_corner() {
        let cells: Vec<_> = NEIGHBOR_OFFSETS.iter().map(|&(dr, dc)| (wrap(0, dr), wrap(0, dc))).collect();
        let grid = Grid::from_cells(&cells);
        assert_eq!(grid.live_neighbors(0, 0), 8);
        // center does not count itself
        let mut with_center = grid;
        with_center.set(0, 0, true);
        assert_eq!(with_center.live_neighbors(0, 0), 8);
    }

    #[test]
    fn test_dead_grid_stays_dead() {
        let grid = Grid::new();
        assert_eq!(grid.advance(RuleMode::Standard), grid);
        assert_eq!(grid.advance(RuleMode::HighLife), grid);
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = Grid::from_cells(&[(10, 9), (10, 10), (10, 11)]);
        let vertical = Grid::from_cells(&[(9, 10), (10, 10), (11, 10)]);
        assert_eq!(horizontal.advance(RuleMode::Standard), vertical);
        assert_eq!(vertical.advance(RuleMode::Standard), horizontal);
    }

    #[test]
    fn test_blinker_across_corner_oscillates() {
        // straddles row 0 and the last column
        let horizontal = Grid::from_cells(&[(0, LAST), (0, 0), (0, 1)]);
        let vertical = Grid::from_cells(&[(LAST, 0), (0, 0), (1, 0)]);
        assert_eq!(horizontal.advance(RuleMode::Standard), vertical);
    }

    #[test]
    fn test_advance_reads_frozen_generation() {
        // An in-place sweep would kill (10, 11) after (10, 10) is already
        // rewritten; the block must survive unchanged.
        let block = Grid::from_cells(&[(10, 10), (10, 11), (11, 10), (11, 11)]);
        assert_eq!(block.advance(RuleMode::Standard), block);

        let mut swapped = block;
        swapped.advance_in_place(RuleMode::Standard);
        assert_eq!(swapped, block);
    }

    #[test]
    fn test_advance_does_not_touch_source() {
        let grid = Grid::from_cells(&[(3, 3)]);
        let next = grid.advance(RuleMode::Standard);
        assert!(grid.get(3, 3));
        assert!(next.is_empty());
    }

    #[test]
    fn test_from_cells_wraps_coordinates() {
        let grid = Grid::from_cells(&[(GRID_SIZE + 1, GRID_SIZE * 2 + 3)]);
        assert!(grid.get(1, 3));
    }
}
