use std::str::FromStr;

use thiserror::Error;

use crate::color::Palette;
use crate::color::PaletteError;
use crate::grid::MAX_SIZE;

pub const MAX_DEPTH_VAR: &str = "GRID_MAX_DEPTH";
pub const PALETTE_VAR: &str = "GRID_PALETTE";
pub const SEED_VAR: &str = "GRID_SEED";
pub const CELLS_VAR: &str = "GRID_CELLS";

pub const DEFAULT_MAX_DEPTH: u8 = 4;
pub const DEFAULT_CELLS: u32 = 32;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: expected a number, got \"{value}\"")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var}: {source}")]
    InvalidPalette {
        var: &'static str,
        source: PaletteError,
    },

    #[error("{var}: {value} cells don't divide a {size} pixel board evenly", size = MAX_SIZE)]
    InvalidCells { var: &'static str, value: u32 },
}

/// Settings for a game, read from the environment.
///
/// | variable         | default                       |
/// |------------------|-------------------------------|
/// | `GRID_MAX_DEPTH` | `4`                           |
/// | `GRID_PALETTE`   | `red,green,blue,magenta,cyan` |
/// | `GRID_SEED`      | random                        |
/// | `GRID_CELLS`     | `32`                          |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How deep squares can be smashed
    pub max_depth: u8,

    pub palette: Palette,

    /// Fixes the colors of every square, if set
    pub seed: Option<u64>,

    /// Number of camera cells along each side of the board
    pub cells: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            palette: Palette::default(),
            seed: None,
            cells: DEFAULT_CELLS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from whatever `lookup` returns for each variable. Missing or blank
    /// variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Config::default();

        if let Some(value) = get(MAX_DEPTH_VAR) {
            config.max_depth = number(MAX_DEPTH_VAR, &value)?;
        }

        if let Some(value) = get(PALETTE_VAR) {
            config.palette = value
                .parse()
                .map_err(|source| ConfigError::InvalidPalette {
                    var: PALETTE_VAR,
                    source,
                })?;
        }

        if let Some(value) = get(SEED_VAR) {
            config.seed = Some(number(SEED_VAR, &value)?);
        }

        if let Some(value) = get(CELLS_VAR) {
            let cells: u32 = number(CELLS_VAR, &value)?;

            if !cells.is_power_of_two() || cells > MAX_SIZE {
                return Err(ConfigError::InvalidCells {
                    var: CELLS_VAR,
                    value: cells,
                });
            }

            config.cells = cells;
        }

        Ok(config)
    }
}

fn number<T: FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            var,
            value: value.to_string(),
        })
}
