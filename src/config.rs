//! Game options and their validation
//!
//! Options arrive from whatever launches a session (command line, a
//! settings screen, a JSON blob). Invalid values never reach the game:
//! [`Options::validated_or_default`] swaps each invalid field for its
//! documented default.

use std::time::Duration;

use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::constants::{
    guess::DEFAULT_THRESHOLD,
    round::{DEFAULT_SOLO_DURATION, DEFAULT_TEAM_DURATION, MAX_DURATION, MIN_DURATION},
};

/// Validation result type for duration validation
type ValidationResult = garde::Result;

/// Validates that a duration falls within specified bounds.
///
/// This is a custom validation function for use with the `garde` crate.
/// It checks if the duration in seconds is within the inclusive range
/// defined by `MIN_SECONDS` and `MAX_SECONDS`.
///
/// # Errors
///
/// Returns a `garde::Error` if the duration is outside the specified bounds.
pub fn validate_duration<const MIN_SECONDS: u64, const MAX_SECONDS: u64>(
    val: &Duration,
    _ctx: &(),
) -> ValidationResult {
    if (MIN_SECONDS..=MAX_SECONDS).contains(&val.as_secs()) {
        Ok(())
    } else {
        Err(garde::Error::new(format!(
            "outside of bounds [{MIN_SECONDS},{MAX_SECONDS}]",
        )))
    }
}

/// Whether one player guesses alone or two teams take turns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Single player, points accumulate in one score
    #[default]
    Solo,
    /// Two teams alternate rounds
    Teams,
}

fn default_solo_duration() -> Duration {
    Duration::from_secs(DEFAULT_SOLO_DURATION)
}

fn default_team_duration() -> Duration {
    Duration::from_secs(DEFAULT_TEAM_DURATION)
}

fn default_progressive_reveal() -> bool {
    true
}

fn default_guess_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

/// Session-wide game options
#[serde_with::serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Options {
    /// Solo or team play
    #[garde(skip)]
    #[serde(default)]
    pub mode: Mode,
    /// Seconds per round in solo mode
    #[garde(custom(validate_duration::<MIN_DURATION, MAX_DURATION>))]
    #[serde_as(as = "serde_with::DurationSeconds<u64>")]
    #[serde(default = "default_solo_duration")]
    pub solo_duration: Duration,
    /// Seconds per round in team mode
    #[garde(custom(validate_duration::<MIN_DURATION, MAX_DURATION>))]
    #[serde_as(as = "serde_with::DurationSeconds<u64>")]
    #[serde(default = "default_team_duration")]
    pub team_duration: Duration,
    /// Whether the image starts blurred and sharpens as time runs out
    #[garde(skip)]
    #[serde(default = "default_progressive_reveal")]
    pub progressive_reveal: bool,
    /// Similarity at or above which a submitted guess is correct
    #[garde(range(min = 0., max = 1.))]
    #[serde(default = "default_guess_threshold")]
    pub guess_threshold: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            solo_duration: default_solo_duration(),
            team_duration: default_team_duration(),
            progressive_reveal: default_progressive_reveal(),
            guess_threshold: default_guess_threshold(),
        }
    }
}

impl Options {
    /// Default options for team play
    pub fn teams() -> Self {
        Self {
            mode: Mode::Teams,
            ..Self::default()
        }
    }

    /// Replaces every invalid field with its default
    ///
    /// Each replacement is logged as a warning. Valid options are returned
    /// unchanged.
    #[must_use]
    pub fn validated_or_default(self) -> Self {
        let Err(report) = self.validate() else {
            return self;
        };
        tracing::warn!(%report, "invalid game options, falling back to defaults");

        let valid_duration = |duration: &Duration| {
            validate_duration::<MIN_DURATION, MAX_DURATION>(duration, &()).is_ok()
        };
        let defaults = Self::default();

        Self {
            mode: self.mode,
            solo_duration: if valid_duration(&self.solo_duration) {
                self.solo_duration
            } else {
                defaults.solo_duration
            },
            team_duration: if valid_duration(&self.team_duration) {
                self.team_duration
            } else {
                defaults.team_duration
            },
            progressive_reveal: self.progressive_reveal,
            guess_threshold: if (0.0..=1.0).contains(&self.guess_threshold) {
                self.guess_threshold
            } else {
                defaults.guess_threshold
            },
        }
    }

    /// Whether two teams take turns
    pub fn is_team_mode(&self) -> bool {
        self.mode == Mode::Teams
    }

    /// Seconds per round for the configured mode
    pub fn round_duration(&self) -> u32 {
        let duration = match self.mode {
            Mode::Solo => self.solo_duration,
            Mode::Teams => self.team_duration,
        };
        u32::try_from(duration.as_secs()).unwrap_or(u32::MAX)
    }
}
