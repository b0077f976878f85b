use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{GridSize, INITIAL_FOOD, INITIAL_HEAD, POINTS_PER_FOOD};
use crate::food::generate_food;
use crate::input::Direction;
use crate::snake::{Cell, Snake};

/// Lifecycle phase, derived from the running/over flags.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GamePhase {
    Idle,
    Running,
    Over,
}

/// Why the last game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
    /// The snake filled the board and no cell was left for food.
    BoardFull,
}

/// What a call to [`GameState::tick`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The game was not running; nothing changed.
    Ignored,
    Moved,
    Ate,
    GameOver(DeathReason),
}

/// Read-only view handed to renderers.
#[derive(Debug, Clone, Copy)]
pub struct GameSnapshot<'a> {
    pub snake: &'a Snake,
    pub food: Cell,
    pub score: u32,
    pub is_over: bool,
    pub is_running: bool,
    pub death_reason: Option<DeathReason>,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    pub score: u32,
    pub tick_count: u64,
    pub death_reason: Option<DeathReason>,
    is_over: bool,
    is_running: bool,
    bounds: GridSize,
    rng: StdRng,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates an idle game with food placement seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            snake: Snake::new(INITIAL_HEAD, Direction::Right),
            food: INITIAL_FOOD,
            score: 0,
            tick_count: 0,
            death_reason: None,
            is_over: false,
            is_running: false,
            bounds: GridSize::DEFAULT,
            rng,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.is_running
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        match (self.is_running, self.is_over) {
            (_, true) => GamePhase::Over,
            (true, false) => GamePhase::Running,
            (false, false) => GamePhase::Idle,
        }
    }

    /// Direction applied on the most recent tick.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    /// Direction the next tick will apply.
    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.snake.pending_direction()
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            snake: &self.snake,
            food: self.food,
            score: self.score,
            is_over: self.is_over,
            is_running: self.is_running,
            death_reason: self.death_reason,
        }
    }

    /// Requests a turn for an upcoming tick. Returns `false` when the request
    /// was rejected as a reversal.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        let accepted = self.snake.buffer_direction(requested);
        if !accepted {
            debug!("rejected reversal to {requested:?}");
        }
        accepted
    }

    /// Resumes ticking without resetting the board.
    pub fn start(&mut self) {
        if self.phase() == GamePhase::Running {
            return;
        }

        info!("game started");
        self.death_reason = None;
        self.is_running = true;
        self.is_over = false;
    }

    /// Discards the current game and immediately runs a fresh one.
    ///
    /// The food RNG carries over so seeded sessions stay reproducible.
    pub fn restart(&mut self) {
        info!("game restarted (previous score {})", self.score);

        self.snake = Snake::new(INITIAL_HEAD, Direction::Right);
        self.food = INITIAL_FOOD;
        self.score = 0;
        self.tick_count = 0;
        self.death_reason = None;
        self.is_over = false;
        self.is_running = true;
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// A colliding step leaves the snake, food and score untouched.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase() != GamePhase::Running {
            return TickOutcome::Ignored;
        }

        let new_head = self.snake.next_head();
        if let Some(reason) = detect_collision(new_head, &self.snake, self.bounds) {
            self.finish(reason);
            return TickOutcome::GameOver(reason);
        }

        self.tick_count += 1;
        let ate = new_head == self.food;
        self.snake.advance(new_head, ate);
        if !ate {
            return TickOutcome::Moved;
        }

        self.score += POINTS_PER_FOOD;
        let food = if self.snake.len() < self.bounds.total_cells() {
            generate_food(&mut self.rng, self.bounds, &self.snake)
        } else {
            None
        };
        match food {
            Some(food) => {
                debug!(
                    "food eaten at ({}, {}), next at ({}, {}), score {}",
                    new_head.x, new_head.y, food.x, food.y, self.score
                );
                self.food = food;
                TickOutcome::Ate
            }
            None => {
                self.finish(DeathReason::BoardFull);
                TickOutcome::GameOver(DeathReason::BoardFull)
            }
        }
    }

    fn finish(&mut self, reason: DeathReason) {
        info!(
            "game over: {reason:?} after {} ticks, score {}, length {}",
            self.tick_count,
            self.score,
            self.snake.len()
        );
        self.death_reason = Some(reason);
        self.is_over = true;
        self.is_running = false;
    }
}

/// Returns true when `head` leaves the grid or lands on a body segment.
///
/// Segment 0 is the pre-move head and is not checked.
#[must_use]
pub fn check_collision(head: Cell, body: &Snake, bounds: GridSize) -> bool {
    detect_collision(head, body, bounds).is_some()
}

fn detect_collision(head: Cell, body: &Snake, bounds: GridSize) -> Option<DeathReason> {
    if !head.is_within_bounds(bounds) {
        return Some(DeathReason::WallCollision);
    }

    if body.segments().skip(1).any(|segment| *segment == head) {
        return Some(DeathReason::SelfCollision);
    }

    None
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;
    use crate::snake::{Cell, Snake};

    use super::{check_collision, DeathReason, GamePhase, GameState, TickOutcome};

    fn running(seed: u64) -> GameState {
        let mut state = GameState::new_with_seed(seed);
        state.start();
        state
    }

    fn body(state: &GameState) -> Vec<Cell> {
        state.snake.segments().copied().collect()
    }

    fn snake(segments: &[(i32, i32)], direction: Direction) -> Snake {
        Snake::from_segments(
            segments.iter().map(|&(x, y)| Cell::new(x, y)).collect(),
            direction,
        )
        .expect("non-empty snake")
    }

    #[test]
    fn initial_state_is_idle() {
        let state = GameState::new_with_seed(1);

        assert_eq!(state.phase(), GamePhase::Idle);
        assert_eq!(body(&state), vec![Cell::new(10, 10)]);
        assert_eq!(state.food, Cell::new(15, 15));
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn tick_outside_running_has_no_effect() {
        let mut state = GameState::new_with_seed(1);
        let before = state.snake.clone();

        assert_eq!(state.tick(), TickOutcome::Ignored);
        assert_eq!(state.snake, before);
    }

    #[test]
    fn head_moves_by_effective_direction() {
        let mut state = running(2);

        for direction in [Direction::Down, Direction::Left, Direction::Up] {
            let head = state.snake.head();
            assert!(state.set_direction(direction));
            state.tick();
            assert_eq!(state.snake.head(), head.step(direction));
        }
    }

    #[test]
    fn snake_grows_after_eating_food() {
        let mut state = running(3);
        state.snake = Snake::new(Cell::new(1, 1), Direction::Right);
        state.food = Cell::new(3, 1);

        assert_eq!(state.tick(), TickOutcome::Moved);
        assert_eq!(state.snake.len(), 1);

        assert_eq!(state.tick(), TickOutcome::Ate);
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.score, 10);
        assert!(!state.snake.occupies(state.food));
    }

    #[test]
    fn wall_collision_freezes_board() {
        let mut state = running(4);
        state.snake = Snake::new(Cell::new(0, 7), Direction::Left);
        state.score = 30;
        let food = state.food;

        assert_eq!(
            state.tick(),
            TickOutcome::GameOver(DeathReason::WallCollision)
        );
        assert!(state.is_over());
        assert!(!state.is_running());
        assert_eq!(state.snake.head(), Cell::new(0, 7));
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.score, 30);
        assert_eq!(state.food, food);
    }

    #[test]
    fn self_collision_ends_game() {
        let mut state = running(5);
        // Heading up from (5,5); the next head (5,4) is body[3].
        state.snake = snake(&[(5, 5), (6, 5), (6, 4), (5, 4), (4, 4)], Direction::Up);

        assert_eq!(
            state.tick(),
            TickOutcome::GameOver(DeathReason::SelfCollision)
        );
        assert_eq!(state.phase(), GamePhase::Over);
    }

    #[test]
    fn moving_into_current_tail_is_a_collision() {
        let mut state = running(6);
        state.snake = snake(&[(5, 5), (6, 5), (6, 6), (5, 6)], Direction::Down);

        assert_eq!(
            state.tick(),
            TickOutcome::GameOver(DeathReason::SelfCollision)
        );
    }

    #[test]
    fn collision_check_skips_pre_move_head() {
        let bounds = GridSize::DEFAULT;
        let body = snake(&[(3, 3), (4, 3)], Direction::Left);

        assert!(!check_collision(Cell::new(3, 3), &body, bounds));
        assert!(check_collision(Cell::new(4, 3), &body, bounds));
        assert!(check_collision(Cell::new(20, 3), &body, bounds));
        assert!(check_collision(Cell::new(3, -1), &body, bounds));
    }

    #[test]
    fn reversal_request_leaves_pending_direction() {
        let mut state = running(7);

        assert!(!state.set_direction(Direction::Left));
        assert_eq!(state.pending_direction(), Direction::Right);
    }

    #[test]
    fn no_ticks_after_game_over() {
        let mut state = running(8);
        state.snake = Snake::new(Cell::new(19, 0), Direction::Right);
        state.tick();
        let frozen = state.snake.clone();

        assert_eq!(state.tick(), TickOutcome::Ignored);
        assert_eq!(state.snake, frozen);
    }

    #[test]
    fn start_resumes_without_reset_and_is_idempotent() {
        let mut state = running(9);
        state.tick();
        let head = state.snake.head();

        state.start();
        state.start();

        assert_eq!(state.phase(), GamePhase::Running);
        assert_eq!(state.snake.head(), head);
        assert_eq!(state.tick_count, 1);
    }

    #[test]
    fn non_growing_move_drops_the_tail() {
        let mut state = running(12);
        state.snake = snake(&[(5, 5), (4, 5), (3, 5)], Direction::Right);

        assert_eq!(state.tick(), TickOutcome::Moved);

        assert_eq!(
            body(&state),
            vec![Cell::new(6, 5), Cell::new(5, 5), Cell::new(4, 5)]
        );
    }

    #[test]
    fn filling_the_board_ends_the_game() {
        // Boustrophedon walk over every cell; the snake covers all but the
        // last one and the food sits there.
        let path: Vec<(i32, i32)> = (0..20)
            .flat_map(|y| {
                let row: Vec<(i32, i32)> = if y % 2 == 0 {
                    (0..20).map(|x| (x, y)).collect()
                } else {
                    (0..20).rev().map(|x| (x, y)).collect()
                };
                row
            })
            .collect();
        let (last, covered) = path.split_last().expect("non-empty path");
        let body_cells: Vec<(i32, i32)> = covered.iter().rev().copied().collect();

        let mut state = running(13);
        state.snake = snake(&body_cells, Direction::Left);
        state.food = Cell::new(last.0, last.1);

        assert_eq!(state.tick(), TickOutcome::GameOver(DeathReason::BoardFull));
        assert_eq!(state.snake.len(), state.bounds().total_cells());
        assert_eq!(state.score, 10);
        assert_eq!(state.phase(), GamePhase::Over);
    }

    #[test]
    fn start_from_over_clears_death_reason() {
        let mut state = running(14);
        state.snake = Snake::new(Cell::new(0, 2), Direction::Left);
        state.tick();
        assert_eq!(state.death_reason, Some(DeathReason::WallCollision));

        state.start();

        assert_eq!(state.phase(), GamePhase::Running);
        assert_eq!(state.death_reason, None);
        assert_eq!(state.snapshot().death_reason, None);
    }

    #[test]
    fn restart_reinitialises_from_any_state() {
        let mut state = running(10);
        state.snake = Snake::new(Cell::new(0, 3), Direction::Left);
        state.score = 50;
        state.tick();
        assert_eq!(state.phase(), GamePhase::Over);

        state.restart();

        assert_eq!(state.phase(), GamePhase::Running);
        assert_eq!(body(&state), vec![Cell::new(10, 10)]);
        assert_eq!(state.food, Cell::new(15, 15));
        assert_eq!(state.score, 0);
        assert_eq!(state.direction(), Direction::Right);
        assert_eq!(state.pending_direction(), Direction::Right);
        assert_eq!(state.death_reason, None);
    }

    #[test]
    fn snapshot_mirrors_state() {
        let mut state = running(11);
        state.tick();

        let snapshot = state.snapshot();

        assert_eq!(snapshot.snake.head(), Cell::new(11, 10));
        assert_eq!(snapshot.food, Cell::new(15, 15));
        assert_eq!(snapshot.score, 0);
        assert!(snapshot.is_running);
        assert!(!snapshot.is_over);
    }
}
