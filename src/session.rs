use std::time::{Duration, Instant};

use log::trace;

use crate::config::GAME_SPEED_MS;
use crate::game::{GamePhase, GameSnapshot, GameState, TickOutcome};
use crate::input::{Direction, GameInput};
use crate::timer::TickTimer;

/// Owns one [`GameState`] and the timer that ticks it.
///
/// The timer is armed exactly while the game is running: every entry point
/// re-syncs it after mutating the state, and dropping the session disarms it.
#[derive(Debug)]
pub struct GameSession {
    state: GameState,
    timer: TickTimer,
}

impl GameSession {
    /// Wraps `state` with the standard tick period.
    #[must_use]
    pub fn new(state: GameState) -> Self {
        Self::with_period(state, Duration::from_millis(GAME_SPEED_MS))
    }

    #[must_use]
    pub fn with_period(state: GameState, period: Duration) -> Self {
        Self {
            state,
            timer: TickTimer::new(period),
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot<'_> {
        self.state.snapshot()
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    #[must_use]
    pub fn is_timer_armed(&self) -> bool {
        self.timer.is_armed()
    }

    /// Time left until the next tick, or `None` while not running.
    #[must_use]
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_due(now)
    }

    pub fn set_direction(&mut self, direction: Direction) -> bool {
        self.state.set_direction(direction)
    }

    pub fn start(&mut self, now: Instant) {
        self.state.start();
        self.sync_timer(now);
    }

    pub fn restart(&mut self, now: Instant) {
        self.state.restart();
        // A fresh game always starts a full period after the restart.
        self.timer.disarm();
        self.sync_timer(now);
    }

    /// Routes one input event. Directions steer while Running and pick the
    /// opening direction while Idle. `Confirm` starts from Idle and restarts
    /// from Over; `Quit` is left to the caller.
    pub fn handle_input(&mut self, input: GameInput, now: Instant) {
        match (input, self.phase()) {
            (GameInput::Direction(direction), GamePhase::Idle | GamePhase::Running) => {
                self.set_direction(direction);
            }
            (GameInput::Confirm, GamePhase::Idle) => self.start(now),
            (GameInput::Confirm, GamePhase::Over) => self.restart(now),
            _ => {}
        }
    }

    /// Runs the tick that is due at `now`, if any.
    pub fn advance(&mut self, now: Instant) -> Option<TickOutcome> {
        if !self.timer.poll(now) {
            return None;
        }

        let outcome = self.state.tick();
        self.sync_timer(now);
        Some(outcome)
    }

    fn sync_timer(&mut self, now: Instant) {
        let running = self.state.phase() == GamePhase::Running;
        match (running, self.timer.is_armed()) {
            (true, false) => {
                trace!("tick timer armed");
                self.timer.arm(now);
            }
            (false, true) => {
                trace!("tick timer disarmed");
                self.timer.disarm();
            }
            _ => {}
        }
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        if self.timer.is_armed() {
            trace!("tick timer disarmed on teardown");
            self.timer.disarm();
        }
    }
}
