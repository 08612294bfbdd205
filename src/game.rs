use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GameConfig;
use crate::food::Food;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Whether the simulation is advancing or stopped on a collision.
///
/// `GameOver` is terminal: ticks no-op until an explicit [`GameState::reset`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RunState {
    Running,
    GameOver,
}

/// What ended the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    Wall,
    SelfHit,
}

/// Complete mutable game state for one session.
///
/// Pure logic: no timer, no terminal, no I/O. An external driver calls
/// [`GameState::tick`] at a fixed cadence and forwards key events to
/// [`GameState::set_direction`]; the renderer reads the fields between ticks.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub tick_count: u64,
    pub run_state: RunState,
    pub death_reason: Option<DeathReason>,
    config: GameConfig,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh game with an entropy-seeded RNG.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic game for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let snake = initial_snake(&config);
        let food = Food::spawn(&mut rng, &config, &snake);

        Self {
            snake,
            food,
            score: 0,
            tick_count: 0,
            run_state: RunState::Running,
            death_reason: None,
            config,
            rng,
        }
    }

    /// Returns the config this game was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Advances the simulation by one tick.
    ///
    /// Order matters and is observable: the pending direction is committed
    /// first, then the body shifts, then the food check grows the snake and
    /// respawns food, and only then is the new head tested against the walls
    /// and the rest of the body.
    pub fn tick(&mut self) {
        if self.run_state != RunState::Running {
            return;
        }

        self.tick_count += 1;
        self.snake.advance(self.config.cell_size);

        let head = self.snake.head();
        if head == self.food.position {
            self.score += 1;
            self.food = Food::spawn(&mut self.rng, &self.config, &self.snake);
        } else {
            self.snake.drop_tail();
        }

        if !self.config.contains(head) {
            self.run_state = RunState::GameOver;
            self.death_reason = Some(DeathReason::Wall);
            return;
        }

        if self.snake.head_overlaps_body() {
            self.run_state = RunState::GameOver;
            self.death_reason = Some(DeathReason::SelfHit);
        }
    }

    /// Requests a direction change for the next tick.
    ///
    /// Reversals of the current direction are ignored; between two ticks the
    /// last accepted request wins.
    pub fn set_direction(&mut self, direction: Direction) {
        self.snake.request_direction(direction);
    }

    /// Reinitializes every field for a new game.
    ///
    /// The RNG stream continues rather than being reseeded, so consecutive
    /// games in one session see different food sequences.
    pub fn reset(&mut self) {
        let snake = initial_snake(&self.config);
        self.food = Food::spawn(&mut self.rng, &self.config, &snake);
        self.snake = snake;
        self.score = 0;
        self.tick_count = 0;
        self.run_state = RunState::Running;
        self.death_reason = None;
    }
}

fn initial_snake(config: &GameConfig) -> Snake {
    Snake::new(
        Position::ORIGIN,
        config.initial_length,
        config.initial_direction,
    )
}

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::food::Food;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{DeathReason, GameState, RunState};

    #[test]
    fn eating_food_grows_scores_and_respawns() {
        let mut state = GameState::new_with_seed(GameConfig::default(), 1);
        state.snake = Snake::from_segments(
            vec![Position { x: 150, y: 150 }, Position { x: 125, y: 150 }],
            Direction::Right,
        );
        state.food = Food::at(Position { x: 175, y: 150 });

        state.tick();

        assert_eq!(state.score, 1);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head(), Position { x: 175, y: 150 });
        // The appended tail duplicates the pre-shift tail position.
        assert_eq!(
            state.snake.segments().last().copied(),
            Some(Position { x: 125, y: 150 })
        );
        // Food moved on the same tick, to a grid-aligned free cell.
        assert_ne!(state.food.position, Position { x: 175, y: 150 });
        assert!(state.config().contains(state.food.position));
        assert_eq!(state.food.position.x % 25, 0);
        assert_eq!(state.food.position.y % 25, 0);
        assert!(!state.snake.occupies(state.food.position));
    }

    #[test]
    fn missing_the_food_keeps_length_and_score() {
        let mut state = GameState::new_with_seed(GameConfig::default(), 2);
        state.snake = Snake::from_segments(
            vec![Position { x: 150, y: 150 }, Position { x: 125, y: 150 }],
            Direction::Right,
        );
        state.food = Food::at(Position { x: 300, y: 300 });

        state.tick();

        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.food.position, Position { x: 300, y: 300 });
    }

    #[test]
    fn rightmost_column_moving_right_hits_the_wall() {
        let mut state = GameState::new_with_seed(GameConfig::default(), 3);
        // 600-pixel-wide field: 575 is the last in-bounds column.
        state.snake = Snake::new(Position { x: 575, y: 150 }, 3, Direction::Right);

        state.tick();

        assert_eq!(state.run_state, RunState::GameOver);
        assert_eq!(state.death_reason, Some(DeathReason::Wall));
    }

    #[test]
    fn running_into_the_body_sets_game_over() {
        let mut state = GameState::new_with_seed(GameConfig::default(), 4);
        // A hook: moving Left from (50,50) lands on the cell the neck
        // occupied before the shift.
        state.snake = Snake::from_segments(
            vec![
                Position { x: 50, y: 50 },
                Position { x: 25, y: 50 },
                Position { x: 25, y: 75 },
                Position { x: 50, y: 75 },
                Position { x: 75, y: 75 },
                Position { x: 75, y: 50 },
            ],
            Direction::Left,
        );

        state.tick();

        assert_eq!(state.run_state, RunState::GameOver);
        assert_eq!(state.death_reason, Some(DeathReason::SelfHit));
    }

    #[test]
    fn game_over_freezes_all_observable_state() {
        let mut state = GameState::new_with_seed(GameConfig::default(), 5);
        state.snake = Snake::new(Position { x: 575, y: 150 }, 3, Direction::Right);
        state.tick();
        assert_eq!(state.run_state, RunState::GameOver);

        let segments: Vec<Position> = state.snake.segments().copied().collect();
        let food = state.food;
        let score = state.score;
        let ticks = state.tick_count;

        for _ in 0..10 {
            state.tick();
        }

        let after: Vec<Position> = state.snake.segments().copied().collect();
        assert_eq!(after, segments);
        assert_eq!(state.food, food);
        assert_eq!(state.score, score);
        assert_eq!(state.tick_count, ticks);
    }

    #[test]
    fn reset_returns_to_the_initial_running_state() {
        let mut state = GameState::new_with_seed(GameConfig::default(), 6);
        state.snake = Snake::new(Position { x: 575, y: 150 }, 3, Direction::Right);
        state.score = 4;
        state.tick();
        assert_eq!(state.run_state, RunState::GameOver);

        state.reset();

        assert_eq!(state.run_state, RunState::Running);
        assert_eq!(state.death_reason, None);
        assert_eq!(state.score, 0);
        assert_eq!(state.tick_count, 0);
        assert_eq!(state.snake.len(), state.config().initial_length);
        assert!(state.snake.segments().all(|s| *s == Position::ORIGIN));
        assert!(!state.snake.occupies(state.food.position));
    }

    #[test]
    fn overlapping_spawn_does_not_collide_while_unfolding() {
        let mut state = GameState::new_with_seed(GameConfig::default(), 7);

        // More ticks than the initial length, so the snake fully unfolds.
        for _ in 0..10 {
            state.tick();
            assert_eq!(state.run_state, RunState::Running);
        }
    }

    #[test]
    fn pending_direction_applies_at_the_start_of_the_tick() {
        let mut state = GameState::new_with_seed(GameConfig::default(), 8);
        state.snake = Snake::new(Position { x: 150, y: 150 }, 1, Direction::Right);
        state.food = Food::at(Position { x: 300, y: 300 });

        state.set_direction(Direction::Down);
        state.tick();

        assert_eq!(state.snake.head(), Position { x: 150, y: 175 });
        assert_eq!(state.snake.direction(), Direction::Down);
    }
}
