//! Points formula and winner determination

use serde::{Deserialize, Serialize};

use crate::{
    constants::points::{FAST, FAST_RATIO, HINT_PENALTY, MEDIUM, MEDIUM_RATIO, SLOW},
    countdown::Countdown,
    teams::Team,
};

/// Inputs of the points formula, captured at the moment of scoring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringInput {
    /// Fraction of the round still remaining
    pub remaining_ratio: f64,
    /// Whether the image was locked clear by a pause or a manual clear
    pub locked_clear: bool,
    /// Whether the hint was used this round
    pub hint_used: bool,
}

impl ScoringInput {
    /// Reads the scoring inputs off a countdown
    pub fn new(countdown: &Countdown, hint_used: bool) -> Self {
        Self {
            remaining_ratio: countdown.remaining_ratio(),
            locked_clear: countdown.is_locked_clear(),
            hint_used,
        }
    }
}

/// Calculates the points awarded for a guess
///
/// A correct guess earns [`FAST`], [`MEDIUM`] or [`SLOW`] depending on how
/// much of the round remained, always [`SLOW`] when the image was locked
/// clear, less [`HINT_PENALTY`] if the hint was used. Wrong guesses earn
/// nothing.
pub fn calculate_points(correct: bool, input: ScoringInput) -> u64 {
    if !correct {
        return 0;
    }

    let base = if input.locked_clear {
        SLOW
    } else if input.remaining_ratio > FAST_RATIO {
        FAST
    } else if input.remaining_ratio > MEDIUM_RATIO {
        MEDIUM
    } else {
        SLOW
    };

    if input.hint_used {
        base.saturating_sub(HINT_PENALTY)
    } else {
        base
    }
}

/// Outcome of comparing the two team scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    /// One team has strictly more points
    Team(Team),
    /// Both teams have the same score
    Tie,
}

impl Winner {
    /// Compares two scores, indexed by team
    pub fn from_scores(first: u64, second: u64) -> Self {
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Self::Team(Team::First),
            std::cmp::Ordering::Less => Self::Team(Team::Second),
            std::cmp::Ordering::Equal => Self::Tie,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn input(remaining_ratio: f64, locked_clear: bool, hint_used: bool) -> ScoringInput {
        ScoringInput {
            remaining_ratio,
            locked_clear,
            hint_used,
        }
    }

    #[test]
    fn test_fast_guess() {
        assert_eq!(calculate_points(true, input(0.9, false, false)), 100);
        assert_eq!(calculate_points(true, input(0.9, false, true)), 75);
    }

    #[test]
    fn test_tiers_use_strict_thresholds() {
        assert_eq!(calculate_points(true, input(0.67, false, false)), 100);
        assert_eq!(calculate_points(true, input(0.66, false, false)), 75);
        assert_eq!(calculate_points(true, input(0.34, false, false)), 75);
        assert_eq!(calculate_points(true, input(0.33, false, false)), 50);
        assert_eq!(calculate_points(true, input(0., false, false)), 50);
    }

    #[test]
    fn test_locked_clear_is_lowest_tier() {
        for ratio in [1., 0.9, 0.5, 0.1] {
            assert_eq!(calculate_points(true, input(ratio, true, false)), 50);
            assert_eq!(calculate_points(true, input(ratio, true, true)), 25);
        }
    }

    #[test]
    fn test_wrong_guess_scores_nothing() {
        for locked_clear in [false, true] {
            for hint_used in [false, true] {
                for ratio in [1., 0.5, 0.] {
                    assert_eq!(
                        calculate_points(false, input(ratio, locked_clear, hint_used)),
                        0
                    );
                }
            }
        }
    }

    #[test]
    fn test_input_from_countdown() {
        let mut countdown = Countdown::new(20);
        countdown.start();
        countdown.tick();
        countdown.clear_image();

        let input = ScoringInput::new(&countdown, true);
        assert!((input.remaining_ratio - 0.95).abs() < 1e-9);
        assert!(input.locked_clear);
        assert_eq!(calculate_points(true, input), 25);
    }

    #[test]
    fn test_winner() {
        assert_eq!(Winner::from_scores(120, 80), Winner::Team(Team::First));
        assert_eq!(Winner::from_scores(40, 80), Winner::Team(Team::Second));
        assert_eq!(Winner::from_scores(100, 100), Winner::Tie);
    }
}
