use rand::Rng;

use crate::grid::{Cell, Grid};
use crate::snake::SnakeBody;

/// Random draws attempted before falling back to a full board scan.
pub const MAX_RANDOM_ATTEMPTS: usize = 1024;

/// Picks a food cell that is not occupied by the snake.
///
/// Draws uniformly from the cell lattice until a free cell comes up. When the
/// board is so crowded that random draws keep missing, the free cells are
/// enumerated and one of them is drawn instead.
///
/// # Panics
///
/// Panics when the snake covers every cell of the board.
#[must_use]
pub fn spawn<R: Rng + ?Sized>(rng: &mut R, grid: Grid, occupied: &SnakeBody) -> Cell {
    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let candidate = grid.cell_at(
            rng.gen_range(0..grid.columns()),
            rng.gen_range(0..grid.rows()),
        );
        if !occupied.contains(candidate) {
            return candidate;
        }
    }

    let free: Vec<Cell> = (0..grid.rows())
        .flat_map(|row| (0..grid.columns()).map(move |column| grid.cell_at(column, row)))
        .filter(|cell| !occupied.contains(*cell))
        .collect();

    assert!(
        !free.is_empty(),
        "food spawn: no free cells on the board ({}x{})",
        grid.columns(),
        grid.rows(),
    );

    free[rng.gen_range(0..free.len())]
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::grid::{Cell, Grid};
    use crate::snake::SnakeBody;

    use super::spawn;

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::STANDARD;
        let snake = SnakeBody::starting(grid);

        for _ in 0..500 {
            let food = spawn(&mut rng, grid, &snake);
            assert!(!snake.contains(food));
            assert!(grid.contains(food));
        }
    }

    #[test]
    fn food_spawn_finds_the_last_free_cell() {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = Grid {
            width: 240,
            height: 160,
            block_size: 80,
        };
        // Every cell except (160, 80).
        let snake = SnakeBody::from_cells([
            Cell::new(0, 0),
            Cell::new(80, 0),
            Cell::new(160, 0),
            Cell::new(0, 80),
            Cell::new(80, 80),
        ]);

        assert_eq!(spawn(&mut rng, grid, &snake), Cell::new(160, 80));
    }

    #[test]
    fn food_spawn_reaches_every_column_and_row() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = Grid::STANDARD;
        let snake = SnakeBody::from_cells([Cell::new(0, 0)]);
        let mut seen_x = std::collections::HashSet::new();
        let mut seen_y = std::collections::HashSet::new();

        for _ in 0..5000 {
            let food = spawn(&mut rng, grid, &snake);
            seen_x.insert(food.x);
            seen_y.insert(food.y);
        }

        assert_eq!(seen_x.len(), 20);
        assert_eq!(seen_y.len(), 15);
    }

    #[test]
    #[should_panic(expected = "no free cells")]
    fn food_spawn_panics_on_a_full_board() {
        let mut rng = StdRng::seed_from_u64(5);
        let grid = Grid {
            width: 160,
            height: 80,
            block_size: 80,
        };
        let snake = SnakeBody::from_cells([Cell::new(0, 0), Cell::new(80, 0)]);

        let _ = spawn(&mut rng, grid, &snake);
    }
}
