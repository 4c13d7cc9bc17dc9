//! Two-team play: names, scores and turn order
//!
//! Team mode alternates turns between exactly two teams. Each team
//! accumulates the points of the rounds played on its turn.

use enum_map::{Enum, EnumMap, enum_map};
use heck::ToTitleCase;
use rustrict::CensorStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{constants::teams::MAX_NAME_LENGTH, scoring::Winner};

/// One of the two competing teams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
pub enum Team {
    /// The team playing the first round
    First,
    /// The other team
    Second,
}

impl Team {
    /// The team whose turn comes after this one
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// Errors that can occur when naming teams
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    /// The name is empty or contains only whitespace
    #[error("team name cannot be empty")]
    Empty,
    /// The name exceeds the maximum allowed length
    #[error("team name is too long")]
    TooLong,
    /// The name contains inappropriate content
    #[error("team name is inappropriate")]
    Sinful,
    /// Both teams were given the same name
    #[error("team names must differ")]
    Duplicate,
}

/// Cleans and validates a single team name
///
/// # Errors
///
/// * `NameError::TooLong` - Name exceeds [`MAX_NAME_LENGTH`] characters
/// * `NameError::Empty` - Name is empty after trimming whitespace
/// * `NameError::Sinful` - Name contains inappropriate content
fn clean_name(name: &str) -> Result<String, NameError> {
    let name = rustrict::trim_whitespace(name);
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(NameError::TooLong);
    }
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.is_inappropriate() {
        return Err(NameError::Sinful);
    }
    Ok(name.to_owned())
}

/// Generates a random plural team name such as "Brave Otters"
fn random_name() -> String {
    let name = petname::petname(2, " ").unwrap_or_else(|| "movie buff".to_owned());
    pluralizer::pluralize(&name, 2, false).to_title_case()
}

/// Names, scores and the active team of a team-mode session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teams {
    names: EnumMap<Team, String>,
    scores: EnumMap<Team, u64>,
    active: Team,
}

impl Default for Teams {
    /// Two randomly named teams with no points, the first one playing
    fn default() -> Self {
        let first = random_name();
        let second = std::iter::repeat_with(random_name)
            .take(8)
            .find(|name| *name != first)
            .unwrap_or_else(|| format!("{first} II"));

        Self {
            names: enum_map! {
                Team::First => first.clone(),
                Team::Second => second.clone(),
            },
            scores: EnumMap::default(),
            active: Team::First,
        }
    }
}

impl Teams {
    /// Creates two teams with the given names
    ///
    /// # Errors
    ///
    /// Returns the first [`NameError`] found, or `NameError::Duplicate` if
    /// both names are the same after cleaning.
    pub fn with_names(first: &str, second: &str) -> Result<Self, NameError> {
        let first = clean_name(first)?;
        let second = clean_name(second)?;
        if first.eq_ignore_ascii_case(&second) {
            return Err(NameError::Duplicate);
        }

        Ok(Self {
            names: enum_map! {
                Team::First => first.clone(),
                Team::Second => second.clone(),
            },
            scores: EnumMap::default(),
            active: Team::First,
        })
    }

    /// The team whose turn it is
    pub fn active(&self) -> Team {
        self.active
    }

    /// Name of a team
    pub fn name(&self, team: Team) -> &str {
        &self.names[team]
    }

    /// Name of the team whose turn it is
    pub fn active_name(&self) -> &str {
        self.name(self.active)
    }

    /// Score of a team
    pub fn score(&self, team: Team) -> u64 {
        self.scores[team]
    }

    /// Both scores, indexed by team
    pub fn scores(&self) -> [u64; 2] {
        [self.scores[Team::First], self.scores[Team::Second]]
    }

    /// Both names, indexed by team
    pub fn names(&self) -> [&str; 2] {
        [self.name(Team::First), self.name(Team::Second)]
    }

    /// Adds points to the active team
    pub fn award_active(&mut self, points: u64) {
        self.scores[self.active] += points;
    }

    /// Passes the turn to the other team
    pub fn switch(&mut self) {
        self.active = self.active.other();
    }

    /// Zeroes both scores and gives the turn back to the first team
    pub fn reset(&mut self) {
        self.scores = EnumMap::default();
        self.active = Team::First;
    }

    /// Compares the two scores
    pub fn winner(&self) -> Winner {
        Winner::from_scores(self.scores[Team::First], self.scores[Team::Second])
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_team_other() {
        assert_eq!(Team::First.other(), Team::Second);
        assert_eq!(Team::Second.other(), Team::First);
    }

    #[test]
    fn test_with_names_trims() {
        let teams = Teams::with_names("  Heroes ", "Villains").unwrap();
        assert_eq!(teams.names(), ["Heroes", "Villains"]);
        assert_eq!(teams.active(), Team::First);
        assert_eq!(teams.scores(), [0, 0]);
    }

    #[test]
    fn test_with_names_rejects_invalid() {
        assert_eq!(Teams::with_names("", "B"), Err(NameError::Empty));
        assert_eq!(Teams::with_names("A", "   "), Err(NameError::Empty));
        assert_eq!(
            Teams::with_names(&"a".repeat(MAX_NAME_LENGTH + 1), "B"),
            Err(NameError::TooLong)
        );
        assert_eq!(Teams::with_names("Heroes", "heroes"), Err(NameError::Duplicate));
    }

    #[test]
    fn test_with_names_max_length_allowed() {
        let long = "a".repeat(MAX_NAME_LENGTH);
        assert!(Teams::with_names(&long, "B").is_ok());
    }

    #[test]
    fn test_award_and_switch() {
        let mut teams = Teams::with_names("A", "B").unwrap();

        teams.award_active(100);
        teams.switch();
        teams.award_active(75);
        teams.award_active(50);

        assert_eq!(teams.active(), Team::Second);
        assert_eq!(teams.active_name(), "B");
        assert_eq!(teams.score(Team::First), 100);
        assert_eq!(teams.score(Team::Second), 125);
        assert_eq!(teams.winner(), Winner::Team(Team::Second));
    }

    #[test]
    fn test_reset() {
        let mut teams = Teams::with_names("A", "B").unwrap();
        teams.award_active(100);
        teams.switch();
        teams.reset();

        assert_eq!(teams.scores(), [0, 0]);
        assert_eq!(teams.active(), Team::First);
        assert_eq!(teams.winner(), Winner::Tie);
    }

    #[test]
    fn test_default_names_differ() {
        let teams = Teams::default();
        let [first, second] = teams.names();

        assert!(!first.is_empty());
        assert_ne!(first, second);
    }

    #[test]
    fn test_name_error_messages() {
        assert_eq!(NameError::Empty.to_string(), "team name cannot be empty");
        assert_eq!(NameError::Duplicate.to_string(), "team names must differ");
    }
}
