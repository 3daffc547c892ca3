use std::collections::VecDeque;

use crate::config::INITIAL_SNAKE_LENGTH;
use crate::grid::{Cell, Grid};
use crate::input::{Direction, direction_change_is_valid};

/// Ordered snake cells, tail at the front and head at the back.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SnakeBody {
    cells: VecDeque<Cell>,
}

impl SnakeBody {
    /// Creates a body from explicit cells listed tail first.
    ///
    /// # Panics
    ///
    /// Panics when `cells` is empty.
    #[must_use]
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let cells: VecDeque<Cell> = cells.into_iter().collect();
        assert!(!cells.is_empty(), "snake body needs at least one cell");
        Self { cells }
    }

    /// Horizontal starting snake on row 5, columns 5..10, heading right.
    #[must_use]
    pub fn starting(grid: Grid) -> Self {
        let row = 5 % grid.rows();
        Self::from_cells((0..INITIAL_SNAKE_LENGTH as i32).map(|offset| {
            grid.cell_at((5 + offset) % grid.columns(), row)
        }))
    }

    /// Returns the current head cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .cells
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current tail cell.
    #[must_use]
    pub fn tail(&self) -> Cell {
        *self
            .cells
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Pushes the next head one block in `direction` and returns it.
    ///
    /// The tail stays in place until [`SnakeBody::grow_or_shift`] runs.
    pub fn advance(&mut self, grid: Grid, direction: Direction) -> Cell {
        let new_head = grid.step(self.head(), direction);
        self.cells.push_back(new_head);
        new_head
    }

    /// Returns true if `new_head` overlaps any cell behind the head.
    ///
    /// Called right after [`SnakeBody::advance`], the tail that is about to be
    /// vacated still counts.
    #[must_use]
    pub fn will_collide(&self, new_head: Cell) -> bool {
        let behind_head = self.cells.len().saturating_sub(1);
        self.cells.iter().take(behind_head).any(|cell| *cell == new_head)
    }

    /// Keeps the tail when food was eaten, otherwise drops it.
    pub fn grow_or_shift(&mut self, ate_food: bool) {
        if !ate_food {
            let _ = self.cells.pop_front();
        }
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over cells from tail to head.
    pub fn cells(&self) -> impl DoubleEndedIterator<Item = &Cell> + ExactSizeIterator {
        self.cells.iter()
    }
}

/// Movement direction plus turns queued between movement steps.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Steering {
    moving: Direction,
    buffered: Direction,
    next_buffered: Option<Direction>,
}

impl Steering {
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Self {
            moving: direction,
            buffered: direction,
            next_buffered: None,
        }
    }

    /// Buffers a turn, supporting a two-deep queue for quick turns.
    ///
    /// The first queued turn is checked against the direction of travel, a
    /// second one against the first. Reversals are dropped; the second slot
    /// is last-input-wins.
    pub fn buffer(&mut self, direction: Direction) {
        if self.buffered == self.moving {
            if direction_change_is_valid(self.moving, direction) {
                self.buffered = direction;
            }
        } else if direction_change_is_valid(self.buffered, direction) {
            self.next_buffered = Some(direction);
        }
    }

    /// Consumes the buffered turn for one movement step.
    pub fn take(&mut self) -> Direction {
        self.moving = self.buffered;
        if let Some(next) = self.next_buffered.take() {
            self.buffered = next;
        }
        self.moving
    }

    /// Direction of the most recent movement step.
    #[must_use]
    pub fn moving(self) -> Direction {
        self.moving
    }

    /// Direction the next movement step will use.
    #[must_use]
    pub fn pending(self) -> Direction {
        self.buffered
    }
}
