use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::{direction_change_is_valid, Direction};

/// Grid cell in logical coordinates.
///
/// Signed so that a candidate head one step past a wall is representable.
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

    /// Returns true when the cell lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.vector();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Snake body plus its direction buffer.
///
/// `direction` is the direction applied on the most recent tick. The first
/// turn requested after a tick lands in `pending_direction`; one further turn
/// may wait in `queued_direction` and is promoted on the following tick.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    pending_direction: Direction,
    queued_direction: Option<Direction>,
}

impl Snake {
    /// Creates a one-cell snake at `start` heading in `direction`.
    #[must_use]
    pub fn new(start: Cell, direction: Direction) -> Self {
        Self {
            body: VecDeque::from([start]),
            direction,
            pending_direction: direction,
            queued_direction: None,
        }
    }

    /// Creates a snake from explicit segments, head first.
    ///
    /// Returns `None` for an empty body.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, direction: Direction) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }

        Some(Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: direction,
            queued_direction: None,
        })
    }

    /// Buffers a requested turn. Returns `false` when it was rejected as a
    /// reversal.
    ///
    /// With no turn pending, the request is checked against the applied
    /// direction and becomes the pending one. With a turn already pending it
    /// is checked against that pending turn and fills the look-ahead slot,
    /// replacing whatever was there.
    pub fn buffer_direction(&mut self, requested: Direction) -> bool {
        if self.pending_direction == self.direction {
            if !direction_change_is_valid(self.direction, requested) {
                return false;
            }
            self.pending_direction = requested;
        } else {
            if !direction_change_is_valid(self.pending_direction, requested) {
                return false;
            }
            self.queued_direction = Some(requested);
        }
        true
    }

    /// Head position after applying the pending direction.
    #[must_use]
    pub fn next_head(&self) -> Cell {
        self.head().step(self.pending_direction)
    }

    /// Commits one step: `new_head` goes to the front and the tail is dropped
    /// unless `grow` is set. Consumes the pending direction.
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        self.direction = self.pending_direction;
        if let Some(next) = self.queued_direction.take() {
            self.pending_direction = next;
        }

        self.body.push_front(new_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake has at least its head.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Direction applied on the most recent tick.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Direction the next tick will apply.
    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Iterates over segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Cell, Snake};

    fn step(snake: &mut Snake) {
        let head = snake.next_head();
        snake.advance(head, false);
    }

    #[test]
    fn bounds_check_covers_all_edges() {
        let bounds = GridSize {
            width: 20,
            height: 20,
        };

        assert!(Cell::new(0, 0).is_within_bounds(bounds));
        assert!(Cell::new(19, 19).is_within_bounds(bounds));
        assert!(!Cell::new(-1, 5).is_within_bounds(bounds));
        assert!(!Cell::new(5, -1).is_within_bounds(bounds));
        assert!(!Cell::new(20, 5).is_within_bounds(bounds));
        assert!(!Cell::new(5, 20).is_within_bounds(bounds));
    }

    #[test]
    fn empty_segments_are_rejected() {
        assert!(Snake::from_segments(Vec::new(), Direction::Up).is_none());
    }

    #[test]
    fn snake_moves_one_cell_per_step() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);

        step(&mut snake);

        assert_eq!(snake.head(), Cell::new(6, 5));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn growth_keeps_previous_tail() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);

        let head = snake.next_head();
        snake.advance(head, true);

        assert_eq!(snake.len(), 2);
        assert_eq!(
            snake.segments().copied().collect::<Vec<_>>(),
            vec![Cell::new(6, 5), Cell::new(5, 5)]
        );
    }

    #[test]
    fn direction_buffer_rejects_reverse() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Up);

        assert!(!snake.buffer_direction(Direction::Down));
        assert_eq!(snake.pending_direction(), Direction::Up);
        step(&mut snake);

        assert_eq!(snake.head(), Cell::new(5, 4));
    }

    #[test]
    fn direction_buffer_two_deep_queue() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Down);

        assert!(snake.buffer_direction(Direction::Right));
        assert!(snake.buffer_direction(Direction::Up));
        assert_eq!(snake.queued_direction, Some(Direction::Up));

        step(&mut snake);
        assert_eq!(snake.head(), Cell::new(6, 5));
        assert_eq!(snake.pending_direction(), Direction::Up);

        step(&mut snake);
        assert_eq!(snake.head(), Cell::new(6, 4));
    }

    #[test]
    fn queued_turn_cannot_reverse_pending_turn() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Down);

        assert!(snake.buffer_direction(Direction::Right));
        assert!(!snake.buffer_direction(Direction::Left));

        assert_eq!(snake.queued_direction, None);
    }

    #[test]
    fn quick_up_then_left_while_heading_right_never_reverses() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);

        // Left is checked against the pending Up, so it is queued rather
        // than applied against Right.
        assert!(snake.buffer_direction(Direction::Up));
        assert!(snake.buffer_direction(Direction::Left));

        step(&mut snake);
        assert_eq!(snake.direction(), Direction::Up);
        step(&mut snake);
        assert_eq!(snake.direction(), Direction::Left);
        assert_eq!(snake.head(), Cell::new(4, 4));
    }

    #[test]
    fn look_ahead_slot_is_checked_against_pending_turn() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);

        // Right only reverses the queued Left, not the pending Up, so it
        // replaces Left in the look-ahead slot.
        assert!(snake.buffer_direction(Direction::Up));
        assert!(snake.buffer_direction(Direction::Left));
        assert!(snake.buffer_direction(Direction::Right));
        assert!(!snake.buffer_direction(Direction::Down));

        assert_eq!(snake.pending_direction(), Direction::Up);
        assert_eq!(snake.queued_direction, Some(Direction::Right));
    }

    #[test]
    fn multi_segment_move_drops_exactly_the_tail() {
        let mut snake = Snake::from_segments(
            vec![Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)],
            Direction::Right,
        )
        .expect("non-empty snake");

        step(&mut snake);

        assert_eq!(
            snake.segments().copied().collect::<Vec<_>>(),
            vec![Cell::new(6, 5), Cell::new(5, 5), Cell::new(4, 5)]
        );
    }

    #[test]
    fn look_ahead_slot_uses_last_input() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Down);

        snake.buffer_direction(Direction::Right);
        snake.buffer_direction(Direction::Up);
        snake.buffer_direction(Direction::Down);

        step(&mut snake);
        assert_eq!(snake.head(), Cell::new(6, 5));

        step(&mut snake);
        assert_eq!(snake.head(), Cell::new(6, 6));
    }
}
