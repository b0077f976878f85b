//! Grid snake: a deterministic tick engine plus a terminal front end.
//!
//! [`game::GameState`] is the engine. [`session::GameSession`] pairs it with
//! the fixed-period [`timer::TickTimer`]; everything else turns terminal
//! events into directions and snapshots into frames.

pub mod board;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod gesture;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod session;
pub mod snake;
pub mod terminal_runtime;
pub mod theme;
pub mod timer;
pub mod ui;
