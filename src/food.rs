use rand::Rng;

use crate::config::GameConfig;
use crate::snake::{Position, Snake};

/// Bounded random draws before spawning falls back to a linear scan.
const MAX_SPAWN_ATTEMPTS: usize = 64;

/// The single food item active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates food at `position`.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Spawns food on a random grid-aligned cell not occupied by the snake.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig, snake: &Snake) -> Self {
        Self::at(spawn_position(rng, config, snake))
    }
}

/// Picks a uniformly random free cell.
///
/// Tries a bounded number of random draws, then scans the grid for the first
/// free cell. On a fully covered board the final random draw stands and the
/// food overlaps the snake; no tick can consume it from that state.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GameConfig,
    snake: &Snake,
) -> Position {
    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let candidate = random_cell(rng, config);
        if !snake.occupies(candidate) {
            return candidate;
        }
    }

    for row in 0..config.rows() {
        for column in 0..config.columns() {
            let position = Position {
                x: column * config.cell_size,
                y: row * config.cell_size,
            };
            if !snake.occupies(position) {
                return position;
            }
        }
    }

    random_cell(rng, config)
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> Position {
    Position {
        x: rng.gen_range(0..config.columns()) * config.cell_size,
        y: rng.gen_range(0..config.rows()) * config.cell_size,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::GameConfig;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::spawn_position;

    fn small_config(width: i32, height: i32) -> GameConfig {
        GameConfig {
            width,
            height,
            cell_size: 25,
            tick_interval: Duration::from_millis(75),
            initial_length: 1,
            initial_direction: Direction::Right,
        }
    }

    #[test]
    fn spawned_food_is_grid_aligned_and_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = small_config(200, 150);
        let snake = Snake::new(Position::ORIGIN, 1, Direction::Right);

        for _ in 0..200 {
            let position = spawn_position(&mut rng, &config, &snake);

            assert!(config.contains(position));
            assert_eq!(position.x % config.cell_size, 0);
            assert_eq!(position.y % config.cell_size, 0);
        }
    }

    #[test]
    fn food_spawn_avoids_snake_cells() {
        let mut rng = StdRng::seed_from_u64(11);
        let config = small_config(100, 75);
        let snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 25, y: 0 },
                Position { x: 50, y: 0 },
            ],
            Direction::Right,
        );

        for _ in 0..200 {
            assert!(!snake.occupies(spawn_position(&mut rng, &config, &snake)));
        }
    }

    #[test]
    fn nearly_full_board_falls_back_to_the_free_cell() {
        let mut rng = StdRng::seed_from_u64(3);
        // 3x1 grid with only (50, 0) free.
        let config = small_config(75, 25);
        let snake = Snake::from_segments(
            vec![Position { x: 0, y: 0 }, Position { x: 25, y: 0 }],
            Direction::Right,
        );

        for _ in 0..50 {
            assert_eq!(
                spawn_position(&mut rng, &config, &snake),
                Position { x: 50, y: 0 }
            );
        }
    }

    #[test]
    fn fully_covered_board_still_returns_an_aligned_cell() {
        let mut rng = StdRng::seed_from_u64(5);
        let config = small_config(50, 25);
        let snake = Snake::from_segments(
            vec![Position { x: 0, y: 0 }, Position { x: 25, y: 0 }],
            Direction::Right,
        );

        let position = spawn_position(&mut rng, &config, &snake);

        assert!(config.contains(position));
        assert_eq!(position.x % config.cell_size, 0);
    }
}
