//! Configuration constants for the frames game core
//!
//! This module contains the limits, defaults and scoring tiers used
//! throughout the game so that every component agrees on the same
//! boundaries.

/// Round timing constants
pub mod round {
    /// Default seconds per round in solo mode
    pub const DEFAULT_SOLO_DURATION: u64 = 25;
    /// Default seconds per round in team mode
    pub const DEFAULT_TEAM_DURATION: u64 = 45;
    /// Minimum accepted round duration in seconds
    pub const MIN_DURATION: u64 = 5;
    /// Maximum accepted round duration in seconds
    pub const MAX_DURATION: u64 = 240;
}

/// Progressive reveal constants
pub mod blur {
    /// Blur level shown while the full countdown remains
    pub const MAX_LEVEL: f64 = 10.;
    /// Seconds at the end of the countdown during which the image is fully clear
    pub const CLEAR_WINDOW: u32 = 10;
}

/// Points awarded for a correct guess
pub mod points {
    /// Awarded when more than two thirds of the round remained
    pub const FAST: u64 = 100;
    /// Awarded when more than one third of the round remained
    pub const MEDIUM: u64 = 75;
    /// Awarded otherwise, and whenever the image was paused or cleared
    pub const SLOW: u64 = 50;
    /// Deducted when the hint was used during the round
    pub const HINT_PENALTY: u64 = 25;
    /// Remaining-time ratio above which [`FAST`] is awarded
    pub const FAST_RATIO: f64 = 0.66;
    /// Remaining-time ratio above which [`MEDIUM`] is awarded
    pub const MEDIUM_RATIO: f64 = 0.33;
}

/// Team configuration constants
pub mod teams {
    /// Maximum length of a team name in characters
    pub const MAX_NAME_LENGTH: usize = 30;
}

/// Guess matching constants
pub mod guess {
    /// Default similarity at or above which a guess counts as correct
    pub const DEFAULT_THRESHOLD: f64 = 0.65;
    /// Score given when one normalized string contains the other
    pub const CONTAINMENT_SCORE: f64 = 0.9;
    /// Words ignored when comparing titles word by word
    pub const STOP_WORDS: &[&str] = &[
        "the", "a", "an", "of", "in", "on", "at", "to", "and", "or", "is", "it", "ka", "ki", "ke",
        "se", "ko", "hai", "hain", "ek", "aur",
    ];
}
