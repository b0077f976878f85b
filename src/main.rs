use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{Settings, INPUT_POLL_INTERVAL_MS};
use grid_snake::error::AppError;
use grid_snake::game::GameState;
use grid_snake::input::{GameInput, InputHandler};
use grid_snake::logging::init_file_logger;
use grid_snake::renderer;
use grid_snake::session::GameSession;
use grid_snake::terminal_runtime::{install_panic_hook, TerminalSession};
use grid_snake::theme::{theme_by_name, Theme, THEMES};
use log::info;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON settings file; defaults to `<config dir>/snake/settings.json`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Color theme: classic, ocean or neon.
    #[arg(long)]
    theme: Option<String>,

    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long = "log-level")]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> Settings {
        Settings {
            theme: self.theme.clone(),
            seed: self.seed,
            log_file: self.log_file.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("grid-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    // Everything that can fail on bad configuration happens before raw mode.
    let settings = Settings::load(cli.config.as_deref())?.merged_with(cli.overrides());
    let theme = match settings.theme.as_deref() {
        Some(name) => theme_by_name(name)?,
        None => &THEMES[0],
    };
    if let Some(path) = settings.log_file.as_deref() {
        init_file_logger(path, settings.level_filter()?)?;
    }

    let state = match settings.seed {
        Some(seed) => GameState::new_with_seed(seed),
        None => GameState::new(),
    };
    info!("starting with theme {}, seed {:?}", theme.name, settings.seed);

    install_panic_hook();
    let mut terminal = TerminalSession::enter()?;
    play(&mut terminal, GameSession::new(state), theme)?;

    info!("quit");
    Ok(())
}

fn play(
    terminal: &mut TerminalSession,
    mut session: GameSession,
    theme: &Theme,
) -> Result<(), AppError> {
    let mut input = InputHandler::new();
    let max_wait = Duration::from_millis(INPUT_POLL_INTERVAL_MS);

    loop {
        terminal.terminal_mut().draw(|frame| {
            let state = session.state();
            renderer::render(frame, &state.snapshot(), state.bounds(), theme);
        })?;

        let wait = session
            .time_until_tick(Instant::now())
            .map_or(max_wait, |due| due.min(max_wait));
        if let Some(game_input) = input.poll_input(wait)? {
            if game_input == GameInput::Quit {
                return Ok(());
            }
            session.handle_input(game_input, Instant::now());
        }

        session.advance(Instant::now());
    }
}
