use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::REJECTION_SAMPLING_LIMIT;
use crate::game::Grid;
use crate::snake::{Pos, Snake};

/// Picks a uniformly random cell not covered by the snake, or `None` if
/// the snake covers the whole grid.
///
/// While the snake is short this just draws x and y independently and
/// tries again on a hit. Once it covers a large share of the grid, the free
/// cells are listed and one is chosen directly so placement stays bounded.
pub fn place_food<R: Rng>(grid: Grid, snake: &Snake, rng: &mut R) -> Option<Pos> {
    let cells = grid.cell_count();
    if snake.len() >= cells {
        return None;
    }

    if (snake.len() as f64) < cells as f64 * REJECTION_SAMPLING_LIMIT {
        loop {
            let pos = Pos::new(rng.gen_range(0..grid.width), rng.gen_range(0..grid.height));
            if !snake.contains(pos) {
                return Some(pos);
            }
        }
    }

    let free: Vec<Pos> = grid.positions().filter(|pos| !snake.contains(*pos)).collect();
    free.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn snake_covering(grid: Grid, cells: usize) -> Snake {
        // Serpentine walk over the rows, bottom to top
        let mut path = vec![];
        for y in 0..grid.height {
            let row: Vec<Pos> = (0..grid.width).map(|x| Pos::new(x, y)).collect();
            if y % 2 == 0 {
                path.extend(row);
            } else {
                path.extend(row.into_iter().rev());
            }
        }
        path.truncate(cells);
        Snake::from_path(&path)
    }

    #[test]
    fn food_lands_inside_the_grid_and_off_the_snake() {
        let grid = Grid::new(30, 15);
        let snake = snake_covering(grid, 40);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let pos = place_food(grid, &snake, &mut rng).unwrap();
            assert!(grid.contains(pos));
            assert!(!snake.contains(pos));
        }
    }

    #[test]
    fn nearly_full_grid_finds_the_last_cells() {
        let grid = Grid::new(4, 3);
        let snake = snake_covering(grid, 11);
        let mut rng = StdRng::seed_from_u64(1);

        // The walk ends on (3, 2), which is left uncovered
        assert_eq!(place_food(grid, &snake, &mut rng), Some(Pos::new(3, 2)));
    }

    #[test]
    fn full_grid_has_no_food() {
        let grid = Grid::new(3, 2);
        let snake = snake_covering(grid, 6);
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(place_food(grid, &snake, &mut rng), None);
    }

    #[test]
    fn single_free_cell_in_tiny_grid() {
        let grid = Grid::new(2, 1);
        let snake = Snake::new(Pos::new(0, 0), Direction::Right);
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(place_food(grid, &snake, &mut rng), Some(Pos::new(1, 0)));
    }
}
