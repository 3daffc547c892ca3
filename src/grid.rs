use crate::config::{BLOCK_SIZE, HEIGHT, WIDTH};
use crate::input::Direction;

/// Top-left corner of a board cell in world units.
///
/// Both coordinates are multiples of the grid's block size and lie inside
/// `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Maps any offset onto a toroidal axis of length `axis_length`.
#[must_use]
pub fn wrap(value: i32, axis_length: i32) -> i32 {
    debug_assert!(axis_length > 0);
    value.rem_euclid(axis_length)
}

/// Toroidal board geometry.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    pub block_size: i32,
}

impl Grid {
    /// The 1600x1200 board with 80-unit cells.
    pub const STANDARD: Self = Self {
        width: WIDTH,
        height: HEIGHT,
        block_size: BLOCK_SIZE,
    };

    /// Number of cell columns.
    #[must_use]
    pub fn columns(self) -> i32 {
        self.width / self.block_size
    }

    /// Number of cell rows.
    #[must_use]
    pub fn rows(self) -> i32 {
        self.height / self.block_size
    }

    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::try_from(self.columns() * self.rows()).unwrap_or(0)
    }

    /// Returns the cell at lattice coordinates `(column, row)`.
    #[must_use]
    pub fn cell_at(self, column: i32, row: i32) -> Cell {
        Cell::new(column * self.block_size, row * self.block_size)
    }

    /// Returns lattice coordinates `(column, row)` for `cell`.
    #[must_use]
    pub fn lattice(self, cell: Cell) -> (i32, i32) {
        (cell.x / self.block_size, cell.y / self.block_size)
    }

    /// Returns true when `cell` is aligned to the lattice and inside the board.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && cell.x < self.width
            && cell.y < self.height
            && cell.x % self.block_size == 0
            && cell.y % self.block_size == 0
    }

    /// Returns the neighbour of `cell` one block away, wrapping on both axes.
    #[must_use]
    pub fn step(self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = match direction {
            Direction::Up => (0, -self.block_size),
            Direction::Down => (0, self.block_size),
            Direction::Left => (-self.block_size, 0),
            Direction::Right => (self.block_size, 0),
        };

        Cell {
            x: wrap(cell.x + dx, self.width),
            y: wrap(cell.y + dy, self.height),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::input::Direction;

    use super::{Cell, Grid, wrap};

    const ALL_DIRECTIONS: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[test]
    fn wrap_maps_offsets_onto_the_axis() {
        assert_eq!(wrap(-80, 1600), 1520);
        assert_eq!(wrap(1600, 1600), 0);
        assert_eq!(wrap(1680, 1600), 80);
        assert_eq!(wrap(400, 1600), 400);
    }

    #[test]
    fn standard_grid_is_twenty_by_fifteen() {
        assert_eq!(Grid::STANDARD.columns(), 20);
        assert_eq!(Grid::STANDARD.rows(), 15);
        assert_eq!(Grid::STANDARD.total_cells(), 300);
    }

    #[test]
    fn step_wraps_at_every_edge() {
        let grid = Grid::STANDARD;

        assert_eq!(grid.step(Cell::new(0, 400), Direction::Left), Cell::new(1520, 400));
        assert_eq!(grid.step(Cell::new(1520, 400), Direction::Right), Cell::new(0, 400));
        assert_eq!(grid.step(Cell::new(400, 0), Direction::Up), Cell::new(400, 1120));
        assert_eq!(grid.step(Cell::new(400, 1120), Direction::Down), Cell::new(400, 0));
    }

    #[test]
    fn step_never_leaves_the_board() {
        let grid = Grid::STANDARD;

        for row in 0..grid.rows() {
            for column in 0..grid.columns() {
                let cell = grid.cell_at(column, row);
                for direction in ALL_DIRECTIONS {
                    let next = grid.step(cell, direction);
                    assert!(grid.contains(next), "{cell:?} -> {direction:?} gave {next:?}");
                }
            }
        }
    }

    #[test]
    fn lattice_inverts_cell_at() {
        let grid = Grid::STANDARD;
        assert_eq!(grid.lattice(grid.cell_at(7, 3)), (7, 3));
        assert!(!grid.contains(Cell::new(40, 0)));
        assert!(!grid.contains(Cell::new(1600, 0)));
    }
}
