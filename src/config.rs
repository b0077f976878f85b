use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::Deserialize;

use crate::error::AppError;
use crate::snake::Cell;

/// Side length of the square play grid.
pub const GRID_SIZE: u16 = 20;

/// Fixed tick period in milliseconds.
pub const GAME_SPEED_MS: u64 = 150;

/// Score granted per food eaten.
pub const POINTS_PER_FOOD: u32 = 10;

/// Head cell of a freshly created snake.
pub const INITIAL_HEAD: Cell = Cell { x: 10, y: 10 };

/// Food cell of a freshly created game.
pub const INITIAL_FOOD: Cell = Cell { x: 15, y: 15 };

/// Random draws attempted before food placement falls back to a scan.
pub const FOOD_RANDOM_ATTEMPTS: u32 = 64;

/// Terminal columns drawn per board cell; rows map one-to-one.
pub const CELL_COLUMNS: u16 = 2;

/// Upper bound for one input poll so the board keeps redrawing.
pub const INPUT_POLL_INTERVAL_MS: u64 = 16;

const APP_DIR_NAME: &str = "snake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// The square grid the game is played on.
    pub const DEFAULT: Self = Self {
        width: GRID_SIZE,
        height: GRID_SIZE,
    };

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Optional user settings read from a JSON file.
///
/// Every field may be omitted; command-line flags take precedence.
#[derive(Debug, Clone, Default, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub theme: Option<String>,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl Settings {
    /// Loads settings from `explicit` when given, otherwise from the default
    /// location if a file exists there.
    pub fn load(explicit: Option<&Path>) -> Result<Self, AppError> {
        match explicit {
            Some(path) => Self::from_path(path),
            None => {
                let path = default_settings_path();
                match Self::from_path(&path) {
                    Err(AppError::SettingsRead { source, .. })
                        if source.kind() == io::ErrorKind::NotFound =>
                    {
                        Ok(Self::default())
                    }
                    other => other,
                }
            }
        }
    }

    fn from_path(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path).map_err(|source| AppError::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| AppError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Returns a copy with every `Some` field of `overrides` applied on top.
    #[must_use]
    pub fn merged_with(self, overrides: Settings) -> Self {
        Self {
            theme: overrides.theme.or(self.theme),
            seed: overrides.seed.or(self.seed),
            log_file: overrides.log_file.or(self.log_file),
            log_level: overrides.log_level.or(self.log_level),
        }
    }

    /// Resolves the configured log level, defaulting to `Info`.
    pub fn level_filter(&self) -> Result<LevelFilter, AppError> {
        match self.log_level.as_deref() {
            None => Ok(LevelFilter::Info),
            Some(raw) => raw
                .parse()
                .map_err(|_| AppError::InvalidLogLevel(raw.to_owned())),
        }
    }
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn default_settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}
