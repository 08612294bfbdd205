use std::collections::VecDeque;

use crate::input::{direction_change_is_valid, Direction};

/// Playfield position in pixels.
///
/// Both coordinates stay multiples of the cell size: positions only ever
/// change by whole-cell steps.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Top-left playfield corner, where the snake spawns.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Returns the position one cell step away in `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction, cell_size: i32) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - cell_size,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + cell_size,
            },
            Direction::Left => Self {
                x: self.x - cell_size,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + cell_size,
                y: self.y,
            },
        }
    }
}

/// Ordered snake body (head first) plus the turn gate.
///
/// The body is a trailing history: every tick pushes a new head and, unless
/// the snake grew, drops the tail, so `segment[i+1]` is always `segment[i]`'s
/// position from the previous tick. A freshly spawned snake has all segments
/// stacked on the start cell and unfolds one segment per tick.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Direction,
}

impl Snake {
    /// Creates a snake of `length` overlapping segments at `start`.
    #[must_use]
    pub fn new(start: Position, length: usize, direction: Direction) -> Self {
        let length = length.max(1);

        Self {
            body: std::iter::repeat(start).take(length).collect(),
            direction,
            pending_direction: direction,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        debug_assert!(!segments.is_empty());

        Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: direction,
        }
    }

    /// Requests a direction change, applied at the start of the next tick.
    ///
    /// A request that reverses the current movement direction is silently
    /// ignored. Between two ticks the last accepted request wins; earlier
    /// requests are overwritten, not queued.
    pub fn request_direction(&mut self, direction: Direction) {
        if direction_change_is_valid(self.direction, direction) {
            self.pending_direction = direction;
        }
    }

    /// Commits the pending direction and pushes the new head one cell ahead.
    ///
    /// The tail is left in place so the caller can decide growth after the
    /// food check; call [`Snake::drop_tail`] for a non-growing move.
    pub fn advance(&mut self, cell_size: i32) {
        self.direction = self.pending_direction;
        let next = self.head().stepped(self.direction, cell_size);
        self.body.push_front(next);
    }

    /// Removes the tail segment after a non-growing move.
    pub fn drop_tail(&mut self) {
        let _ = self.body.pop_back();
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments. Never true in practice.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the committed movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
