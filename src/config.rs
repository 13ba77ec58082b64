//! Tunable game constants.
//!
//! Defaults are the fixed Catch Red rules. A JSON override can be stored under
//! [`STORAGE_KEY`] in `localStorage`; anything that fails to read, parse or
//! validate falls back to the defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::CircleColor;

pub const STORAGE_KEY: &str = "catch_red_config";

/// Fixed shape of every round; an override may not change these.
pub const RED_COUNT: usize = 5;
pub const OTHER_COUNT: usize = 7;
pub const ROUND_COUNT: usize = 7;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("round schedule is empty")]
    EmptySchedule,
    #[error("round schedule has {len} entries, expected {expected}", expected = ROUND_COUNT)]
    ScheduleLength { len: usize },
    #[error("round {round} has a zero-second budget")]
    ZeroBudget { round: usize },
    #[error("round {round} has a longer budget than the round before it")]
    IncreasingSchedule { round: usize },
    #[error("palette is empty")]
    EmptyPalette,
    #[error("palette must not contain red")]
    RedInPalette,
    #[error(
        "rounds need {want_red} red and {want_other} other circles, got {red} and {other}",
        want_red = RED_COUNT,
        want_other = OTHER_COUNT
    )]
    CircleCounts { red: usize, other: usize },
    #[error("tick period must be non-zero")]
    ZeroTick,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seconds allowed per round, in play order.
    pub round_schedule: Vec<u32>,
    /// Colors eligible for the non-red circles.
    pub palette: Vec<CircleColor>,
    pub red_count: usize,
    pub other_count: usize,
    /// Countdown period in milliseconds.
    pub tick_ms: u32,
    /// How long a pointer activation suppresses the trailing click.
    pub activation_window_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_schedule: vec![10, 7, 5, 4, 3, 2, 1],
            palette: vec![
                CircleColor::Blue,
                CircleColor::Green,
                CircleColor::Yellow,
                CircleColor::Orange,
                CircleColor::Purple,
            ],
            red_count: RED_COUNT,
            other_count: OTHER_COUNT,
            tick_ms: 1000,
            activation_window_ms: 150,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.round_schedule.is_empty() {
            return Err(ConfigError::EmptySchedule);
        }
        if self.round_schedule.len() != ROUND_COUNT {
            return Err(ConfigError::ScheduleLength {
                len: self.round_schedule.len(),
            });
        }
        for (round, secs) in self.round_schedule.iter().enumerate() {
            if *secs == 0 {
                return Err(ConfigError::ZeroBudget { round });
            }
            if round > 0 && *secs > self.round_schedule[round - 1] {
                return Err(ConfigError::IncreasingSchedule { round });
            }
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.palette.contains(&CircleColor::Red) {
            return Err(ConfigError::RedInPalette);
        }
        if self.red_count != RED_COUNT || self.other_count != OTHER_COUNT {
            return Err(ConfigError::CircleCounts {
                red: self.red_count,
                other: self.other_count,
            });
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        Ok(())
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: GameConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads the override from `localStorage`, or the defaults.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|store| store.get_item(STORAGE_KEY).ok().flatten());
        match raw {
            Some(raw) => match Self::from_json(&raw) {
                Ok(cfg) => {
                    tracing::info!(rounds = cfg.round_schedule.len(), "loaded config override");
                    cfg
                }
                Err(err) => {
                    tracing::warn!(%err, "ignoring stored config");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    /// `None` if the counts overflow.
    pub fn total_circles(&self) -> Option<usize> {
        self.red_count.checked_add(self.other_count)
    }

    /// "10, 7, 5, 4, 3, 2, 1"
    pub fn schedule_text(&self) -> String {
        self.round_schedule
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
