//! Core game logic and state management
//!
//! This module contains the [`Game`] controller, the single owner of a
//! session's [`SessionState`]. The presentation layer never touches the
//! state directly: it forwards user actions and the once-per-second tick
//! to controller methods, then re-renders from [`Game::sync_message`].

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use thiserror::Error;

use crate::{
    config::{Mode, Options, validate_duration},
    constants::round::{DEFAULT_TEAM_DURATION, MAX_DURATION, MIN_DURATION},
    countdown::{Countdown, Snapshot, TickOutcome},
    guess::{GuessMatch, fuzzy_match},
    round::{ImageRef, Round},
    scoring::{ScoringInput, Winner, calculate_points},
    selector::{RandomSource, Selection, select_next},
    teams::{NameError, Team, Teams},
};

/// Which screen the session is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// Before the first round
    Welcome,
    /// A round is in progress
    Playing,
    /// A completed round is being inspected; the countdown is suspended
    Reviewing {
        /// Index into the round history
        index: usize,
        /// Countdown state to restore when leaving review
        saved: Snapshot,
    },
    /// Every round has been shown
    GameOver,
}

/// Errors returned when an operation is not allowed in the current state
///
/// A rejected operation never changes the session.
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The session is still on the welcome screen
    #[error("game has not started")]
    NotStarted,
    /// The operation is only allowed before the game starts
    #[error("game has already started")]
    AlreadyStarted,
    /// Every round has been shown
    #[error("game is over")]
    GameOver,
    /// A past round is being reviewed
    #[error("a past round is being reviewed")]
    Reviewing,
    /// No past round is being reviewed
    #[error("no round is being reviewed")]
    NotReviewing,
    /// The answer of the current round is already shown
    #[error("answer is already shown")]
    AnswerShown,
    /// The countdown is not running
    #[error("timer is not running")]
    TimerNotRunning,
    /// The revealed round needs a correct/incorrect decision first
    #[error("awaiting a score decision")]
    AwaitingScoreDecision,
    /// The current round has already been scored
    #[error("round has already been scored")]
    AlreadyScored,
    /// The operation does not apply to the configured mode
    #[error("operation not available in this mode")]
    WrongMode,
    /// No completed round has this index
    #[error("no completed round at index {0}")]
    NoSuchRound(usize),
    /// A team name was rejected
    #[error(transparent)]
    TeamName(#[from] NameError),
}

fn rejected<T>(error: Error) -> Result<T, Error> {
    tracing::warn!(%error, "operation rejected");
    Err(error)
}

/// Whether another round followed or the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Progress {
    /// A new round started
    NextRound,
    /// No unseen round was left
    GameOver,
}

/// Result of a team-mode score decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scored {
    /// Points added to the team that played the round
    pub points: u64,
    /// What happened after the round was closed
    pub progress: Progress,
}

/// Result of submitting a guess
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GuessOutcome {
    /// The guess did not match; nothing changed
    Miss(GuessMatch),
    /// The guess matched and the round was scored
    Hit {
        /// How the guess matched
        guess: GuessMatch,
        /// Points awarded
        points: u64,
    },
}

/// A completed round, kept for review and the final summary
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// The round that was played
    pub round: Round,
    /// Points awarded, `None` if the round was never scored
    pub points: Option<u64>,
    /// Team whose turn it was (team mode only)
    pub team: Option<Team>,
    /// Whether the hint was used
    pub hint_used: bool,
    /// Whether the answer was shown before moving on
    pub answer_shown: bool,
    /// Whether the countdown ran out
    pub timed_out: bool,
}

/// Mutable state of one game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Image references presented so far, in presentation order
    shown_refs: Vec<ImageRef>,
    /// The round on screen, `None` before the start and after the end
    current_round: Option<Round>,
    /// Clock of the current round
    countdown: Countdown,
    /// Whether the hint is on screen
    hint_shown: bool,
    /// Whether the answer is on screen
    answer_shown: bool,
    /// Whether the hint was requested this round
    hint_used_this_round: bool,
    /// Whether the countdown ran out this round
    timed_out: bool,
    /// Points awarded this round, once scored
    round_points: Option<u64>,
    /// Team names and scores (team mode only)
    teams: Option<Teams>,
    /// Whether a revealed team round waits for a correct/incorrect decision
    awaiting_score_decision: bool,
    /// Accumulated points (solo mode)
    solo_score: u64,
    /// Whether every round has been shown
    game_over: bool,
    /// Completed rounds, oldest first
    history: Vec<RoundRecord>,
    /// Current screen
    screen: Screen,
}

impl SessionState {
    fn new(options: &Options) -> Self {
        Self {
            shown_refs: Vec::new(),
            current_round: None,
            countdown: Countdown::new(options.round_duration()),
            hint_shown: false,
            answer_shown: false,
            hint_used_this_round: false,
            timed_out: false,
            round_points: None,
            teams: options.is_team_mode().then(Teams::default),
            awaiting_score_decision: false,
            solo_score: 0,
            game_over: false,
            history: Vec::new(),
            screen: Screen::Welcome,
        }
    }

    /// Clears every per-round flag and rewinds the clock
    fn reset_round_flags(&mut self) {
        self.countdown.restart();
        self.hint_shown = false;
        self.answer_shown = false;
        self.hint_used_this_round = false;
        self.timed_out = false;
        self.round_points = None;
        self.awaiting_score_decision = false;
    }

    /// Image references presented so far
    pub fn shown_refs(&self) -> &[ImageRef] {
        &self.shown_refs
    }

    /// The round on screen
    pub fn current_round(&self) -> Option<&Round> {
        self.current_round.as_ref()
    }

    /// Clock of the current round
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    /// Whether the hint is on screen
    pub fn hint_shown(&self) -> bool {
        self.hint_shown
    }

    /// Whether the answer is on screen
    pub fn answer_shown(&self) -> bool {
        self.answer_shown
    }

    /// Whether the hint was requested this round
    pub fn hint_used_this_round(&self) -> bool {
        self.hint_used_this_round
    }

    /// Team names and scores (team mode only)
    pub fn teams(&self) -> Option<&Teams> {
        self.teams.as_ref()
    }

    /// Whether a revealed team round waits for a correct/incorrect decision
    pub fn awaiting_score_decision(&self) -> bool {
        self.awaiting_score_decision
    }

    /// Accumulated points in solo mode
    pub fn solo_score(&self) -> u64 {
        self.solo_score
    }

    /// Whether every round has been shown
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Completed rounds, oldest first
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Current screen
    pub fn screen(&self) -> Screen {
        self.screen
    }
}

/// Scores as shown to players
#[derive(Debug, Clone, Serialize)]
pub enum ScoreMessage {
    /// Single player score
    Solo(u64),
    /// Team names, scores and whose turn it is
    Teams {
        /// Team names, indexed by team
        names: [String; 2],
        /// Team scores, indexed by team
        scores: [u64; 2],
        /// Team whose turn it is
        active: Team,
        /// Name of the team whose turn it is
        active_name: String,
    },
}

/// End-of-game information
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub struct SummaryMessage {
    /// Every completed round, oldest first
    pub rounds: Vec<RoundRecord>,
    /// Final scores
    pub score: ScoreMessage,
    /// Winning team (team mode only)
    pub winner: Option<Winner>,
}

/// Full view of the session for the presentation layer
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub enum SyncMessage {
    /// Welcome screen before the first round
    Welcome {
        /// Solo or team play
        mode: Mode,
        /// Seconds per round
        round_duration: u32,
        /// Number of playable rounds
        total: usize,
        /// Scores and team names
        score: ScoreMessage,
    },
    /// A round in progress
    Round {
        /// Frame to display
        image_ref: ImageRef,
        /// Seconds left
        time_remaining: u32,
        /// Seconds per round
        round_duration: u32,
        /// Obscurity level to render the frame with
        blur: f64,
        /// Hint text, once requested
        hint: Option<String>,
        /// Movie title, once shown
        answer: Option<String>,
        /// Whether the countdown is running
        running: bool,
        /// Whether a correct/incorrect decision is required before moving on
        awaiting_score_decision: bool,
        /// Rounds not yet shown
        remaining: usize,
        /// Number of playable rounds
        total: usize,
        /// Current scores
        score: ScoreMessage,
    },
    /// Inspecting a completed round
    Review {
        /// Index of the round in the history
        index: usize,
        /// Number of completed rounds
        count: usize,
        /// The completed round
        record: RoundRecord,
    },
    /// Every round has been shown
    Summary(SummaryMessage),
}

impl SyncMessage {
    /// Converts the sync message to a JSON string for transmission
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

/// Controller of a game session
///
/// Owns the playable rounds, the validated options, the session state and
/// the random source used to pick rounds.
pub struct Game<R = fastrand::Rng> {
    /// Rounds supplied by the loader, all renderable
    rounds: Vec<Round>,
    /// Validated options
    options: Options,
    /// Mutable session state
    state: SessionState,
    /// Source of round picks
    rng: R,
}

impl<R> Debug for Game<R> {
    /// Custom debug implementation that avoids printing large amounts of data
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("options", &self.options)
            .field("screen", &self.state.screen)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Creates a new session picking rounds with `fastrand`
    ///
    /// Invalid options are replaced by their defaults.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use frames::{config::Options, game::Game, round::Round};
    ///
    /// let rounds = vec![Round::new("sholay.jpg", "Sholay", None)];
    /// let mut game = Game::new(rounds, Options::default());
    /// game.start().unwrap();
    /// assert!(game.state().current_round().is_some());
    /// ```
    pub fn new(rounds: Vec<Round>, options: Options) -> Self {
        Self::with_rng(rounds, options, fastrand::Rng::new())
    }
}

impl<R: RandomSource> Game<R> {
    /// Creates a new session with an explicit random source
    pub fn with_rng(rounds: Vec<Round>, options: Options, rng: R) -> Self {
        let options = options.validated_or_default();
        Self {
            state: SessionState::new(&options),
            rounds,
            options,
            rng,
        }
    }

    /// Read-only view of the session state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Validated options of this session
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Fails unless a round is in progress and nothing is being reviewed
    fn ensure_playing(&self) -> Result<(), Error> {
        match self.state.screen {
            Screen::Playing => Ok(()),
            Screen::Welcome => rejected(Error::NotStarted),
            Screen::Reviewing { .. } => rejected(Error::Reviewing),
            Screen::GameOver => rejected(Error::GameOver),
        }
    }

    fn ensure_welcome(&self) -> Result<(), Error> {
        if self.state.screen == Screen::Welcome {
            Ok(())
        } else {
            rejected(Error::AlreadyStarted)
        }
    }

    fn ensure_team_mode(&self) -> Result<(), Error> {
        if self.options.is_team_mode() {
            Ok(())
        } else {
            rejected(Error::WrongMode)
        }
    }

    /// Picks the next unseen round, or ends the game
    fn begin_round(&mut self) -> Progress {
        match select_next(&self.rounds, &self.state.shown_refs, &mut self.rng) {
            Selection::Next(round) => {
                let round = round.clone();
                tracing::debug!(image = %round.image_ref, "starting round");
                self.state.shown_refs.push(round.image_ref.clone());
                self.state.current_round = Some(round);
                self.state.reset_round_flags();
                Progress::NextRound
            }
            Selection::Exhausted => {
                tracing::info!(shown = self.state.shown_refs.len(), "all rounds shown");
                self.state.current_round = None;
                self.state.countdown.stop();
                self.state.awaiting_score_decision = false;
                self.state.game_over = true;
                self.state.screen = Screen::GameOver;
                Progress::GameOver
            }
        }
    }

    /// Moves the current round into the history
    fn record_round(&mut self) {
        if let Some(round) = self.state.current_round.take() {
            self.state.history.push(RoundRecord {
                round,
                points: self.state.round_points,
                team: self.state.teams.as_ref().map(Teams::active),
                hint_used: self.state.hint_used_this_round,
                answer_shown: self.state.answer_shown,
                timed_out: self.state.timed_out,
            });
        }
    }

    /// Leaves the welcome screen and starts the first round
    ///
    /// # Errors
    ///
    /// `Error::AlreadyStarted` outside the welcome screen.
    pub fn start(&mut self) -> Result<Progress, Error> {
        self.ensure_welcome()?;
        tracing::info!(
            mode = ?self.options.mode,
            rounds = self.rounds.len(),
            duration = self.options.round_duration(),
            "starting game"
        );
        self.state.screen = Screen::Playing;
        Ok(self.begin_round())
    }

    /// Replaces the current round with an unseen one
    ///
    /// The replaced round is not recorded in the history. When no unseen
    /// round is left the game ends.
    ///
    /// # Errors
    ///
    /// * `Error::AwaitingScoreDecision` - The revealed team round is unscored
    /// * Any error of a round operation if no round is in progress
    pub fn start_round(&mut self) -> Result<Progress, Error> {
        self.ensure_playing()?;
        if self.state.awaiting_score_decision {
            return rejected(Error::AwaitingScoreDecision);
        }
        Ok(self.begin_round())
    }

    /// Signals that the frame finished loading, starting the countdown
    ///
    /// # Returns
    ///
    /// `true` if the countdown is now running. It stays stopped once the
    /// answer is shown or the timer was paused.
    ///
    /// # Errors
    ///
    /// Any error of a round operation if no round is in progress.
    pub fn on_image_ready(&mut self) -> Result<bool, Error> {
        self.ensure_playing()?;
        if self.state.answer_shown {
            return Ok(false);
        }
        Ok(self.state.countdown.start())
    }

    /// Advances the clock by one second
    ///
    /// Running out of time shows the answer without scoring the round.
    /// Outside a running round this is a no-op returning
    /// [`TickOutcome::Idle`].
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.screen != Screen::Playing {
            return TickOutcome::Idle;
        }

        let outcome = self.state.countdown.tick();
        if outcome == TickOutcome::TimeUp {
            tracing::debug!("time up");
            self.state.answer_shown = true;
            self.state.timed_out = true;
        }
        outcome
    }

    /// Shows the hint; idempotent
    ///
    /// # Errors
    ///
    /// Any error of a round operation if no round is in progress.
    pub fn request_hint(&mut self) -> Result<(), Error> {
        self.ensure_playing()?;
        if !self.state.hint_used_this_round {
            tracing::debug!("hint requested");
        }
        self.state.hint_shown = true;
        self.state.hint_used_this_round = true;
        Ok(())
    }

    /// Shows the answer and stops the clock
    ///
    /// In team mode an unscored round then waits for
    /// [`Game::score_decision`] before [`Game::advance`] is allowed.
    ///
    /// # Errors
    ///
    /// Any error of a round operation if no round is in progress.
    pub fn request_reveal(&mut self) -> Result<(), Error> {
        self.ensure_playing()?;
        tracing::debug!("answer revealed");
        self.state.answer_shown = true;
        self.state.countdown.stop();
        if self.options.is_team_mode() && self.state.round_points.is_none() {
            self.state.awaiting_score_decision = true;
        }
        Ok(())
    }

    /// Stops the clock for the rest of the round and shows the frame clearly
    ///
    /// There is no way to resume; a second call while paused does nothing.
    ///
    /// # Errors
    ///
    /// * `Error::AnswerShown` - The answer is already on screen
    /// * `Error::TimerNotRunning` - The countdown has not started or has ended
    pub fn pause_timer(&mut self) -> Result<(), Error> {
        self.ensure_playing()?;
        if self.state.answer_shown {
            return rejected(Error::AnswerShown);
        }
        if self.state.countdown.is_paused() {
            return Ok(());
        }
        if !self.state.countdown.pause() {
            return rejected(Error::TimerNotRunning);
        }
        tracing::debug!(
            time_remaining = self.state.countdown.time_remaining(),
            "timer paused"
        );
        Ok(())
    }

    /// Shows the frame clearly while the clock keeps running
    ///
    /// Does nothing if the frame is already clear or the answer is shown.
    ///
    /// # Errors
    ///
    /// Any error of a round operation if no round is in progress.
    pub fn clear_image(&mut self) -> Result<(), Error> {
        self.ensure_playing()?;
        if !self.state.answer_shown && self.state.countdown.clear_image() {
            tracing::debug!("image cleared");
        }
        Ok(())
    }

    /// Points a guess would earn right now
    pub fn calculate_points(&self, correct: bool) -> u64 {
        calculate_points(
            correct,
            ScoringInput::new(&self.state.countdown, self.state.hint_used_this_round),
        )
    }

    /// Scores the current round for the active team and moves on
    ///
    /// # Errors
    ///
    /// * `Error::WrongMode` - The session is in solo mode
    /// * Any error of a round operation if no round is in progress
    pub fn score_decision(&mut self, correct: bool) -> Result<Scored, Error> {
        self.ensure_team_mode()?;
        self.ensure_playing()?;

        let points = self.calculate_points(correct);
        if let Some(teams) = &mut self.state.teams {
            teams.award_active(points);
            tracing::debug!(team = ?teams.active(), correct, points, "round scored");
        }
        self.state.round_points = Some(points);
        self.state.countdown.stop();
        self.state.awaiting_score_decision = false;

        let progress = self.advance()?;
        Ok(Scored { points, progress })
    }

    /// Scores the current round in solo mode
    ///
    /// Shows the answer and stops the clock; the player moves on with
    /// [`Game::advance`].
    ///
    /// # Errors
    ///
    /// * `Error::WrongMode` - The session is in team mode
    /// * `Error::AlreadyScored` - The round was scored before
    /// * Any error of a round operation if no round is in progress
    pub fn score_solo(&mut self, correct: bool) -> Result<u64, Error> {
        if self.options.is_team_mode() {
            return rejected(Error::WrongMode);
        }
        self.ensure_playing()?;
        if self.state.round_points.is_some() {
            return rejected(Error::AlreadyScored);
        }

        let points = self.calculate_points(correct);
        tracing::debug!(correct, points, "round scored");
        self.state.solo_score += points;
        self.state.round_points = Some(points);
        self.state.answer_shown = true;
        self.state.countdown.stop();
        Ok(points)
    }

    /// Checks a typed or spoken guess against the current title
    ///
    /// A match scores the round as correct: in solo mode the answer is
    /// shown, in team mode the turn passes to the other team.
    ///
    /// # Errors
    ///
    /// * `Error::AnswerShown` - The answer is already on screen
    /// * Any error of a round operation if no round is in progress
    pub fn submit_guess(&mut self, text: &str) -> Result<GuessOutcome, Error> {
        self.ensure_playing()?;
        if self.state.answer_shown {
            return rejected(Error::AnswerShown);
        }
        let Some(round) = &self.state.current_round else {
            return rejected(Error::GameOver);
        };

        let guess = fuzzy_match(text, &round.title, self.options.guess_threshold);
        if !guess.matched {
            tracing::debug!(score = guess.score, "guess missed");
            return Ok(GuessOutcome::Miss(guess));
        }

        let points = match self.options.mode {
            Mode::Solo => self.score_solo(true)?,
            Mode::Teams => self.score_decision(true)?.points,
        };
        Ok(GuessOutcome::Hit { guess, points })
    }

    /// Closes the current round and starts the next one
    ///
    /// In team mode a round skipped without showing the answer counts as
    /// a wrong guess for the active team, and the turn passes to the other
    /// team.
    ///
    /// # Errors
    ///
    /// * `Error::AwaitingScoreDecision` - The revealed team round is unscored
    /// * Any error of a round operation if no round is in progress
    pub fn advance(&mut self) -> Result<Progress, Error> {
        self.ensure_playing()?;
        if self.state.awaiting_score_decision {
            return rejected(Error::AwaitingScoreDecision);
        }

        if self.options.is_team_mode()
            && !self.state.answer_shown
            && self.state.round_points.is_none()
        {
            tracing::debug!("round skipped, scored as incorrect");
            self.state.round_points = Some(0);
        }

        self.record_round();
        if let Some(teams) = &mut self.state.teams {
            teams.switch();
        }
        Ok(self.begin_round())
    }

    /// Starts over with every round unseen and all scores at zero
    ///
    /// Team names are kept.
    pub fn reset(&mut self) -> Progress {
        tracing::info!("resetting game");
        self.state.shown_refs.clear();
        self.state.history.clear();
        self.state.current_round = None;
        self.state.solo_score = 0;
        self.state.game_over = false;
        if let Some(teams) = &mut self.state.teams {
            teams.reset();
        }
        self.state.screen = Screen::Playing;
        self.begin_round()
    }

    /// Inspects a completed round, suspending the countdown
    ///
    /// Calling it again while reviewing moves to another round and keeps
    /// the countdown state saved on first entry.
    ///
    /// # Errors
    ///
    /// * `Error::NoSuchRound` - `index` is not in the history
    /// * `Error::NotStarted` / `Error::GameOver` - No round is in progress
    pub fn enter_review(&mut self, index: usize) -> Result<&RoundRecord, Error> {
        let saved = match self.state.screen {
            Screen::Playing => self.state.countdown.snapshot(),
            Screen::Reviewing { saved, .. } => saved,
            Screen::Welcome => return rejected(Error::NotStarted),
            Screen::GameOver => return rejected(Error::GameOver),
        };
        if index >= self.state.history.len() {
            return rejected(Error::NoSuchRound(index));
        }

        tracing::debug!(index, "reviewing round");
        self.state.countdown.stop();
        self.state.screen = Screen::Reviewing { index, saved };
        Ok(&self.state.history[index])
    }

    /// Returns to the current round, restoring the countdown exactly
    ///
    /// # Errors
    ///
    /// `Error::NotReviewing` if no round is being reviewed.
    pub fn exit_review(&mut self) -> Result<(), Error> {
        let Screen::Reviewing { saved, .. } = self.state.screen else {
            return rejected(Error::NotReviewing);
        };
        tracing::debug!("leaving review");
        self.state.countdown.restore(saved);
        self.state.screen = Screen::Playing;
        Ok(())
    }

    /// The round being reviewed, if any
    pub fn reviewed_round(&self) -> Option<&RoundRecord> {
        match self.state.screen {
            Screen::Reviewing { index, .. } => self.state.history.get(index),
            _ => None,
        }
    }

    /// Sets the seconds per round of a team game before it starts
    ///
    /// Durations outside the accepted range fall back to the default.
    ///
    /// # Returns
    ///
    /// The duration in effect.
    ///
    /// # Errors
    ///
    /// * `Error::WrongMode` - The session is in solo mode
    /// * `Error::AlreadyStarted` - The game has started
    pub fn set_round_duration(&mut self, seconds: u64) -> Result<u32, Error> {
        self.ensure_team_mode()?;
        self.ensure_welcome()?;

        let requested = std::time::Duration::from_secs(seconds);
        self.options.team_duration =
            if validate_duration::<MIN_DURATION, MAX_DURATION>(&requested, &()).is_ok() {
                requested
            } else {
                tracing::warn!(seconds, "invalid round duration, using default");
                std::time::Duration::from_secs(DEFAULT_TEAM_DURATION)
            };

        let duration = self.options.round_duration();
        self.state.countdown = Countdown::new(duration);
        Ok(duration)
    }

    /// Names the two teams before the game starts
    ///
    /// # Errors
    ///
    /// * `Error::WrongMode` - The session is in solo mode
    /// * `Error::AlreadyStarted` - The game has started
    /// * `Error::TeamName` - A name was rejected
    pub fn set_team_names(&mut self, first: &str, second: &str) -> Result<(), Error> {
        self.ensure_team_mode()?;
        self.ensure_welcome()?;
        self.state.teams = Some(Teams::with_names(first, second)?);
        Ok(())
    }

    /// Seconds left in the current round
    pub fn time_remaining(&self) -> u32 {
        self.state.countdown.time_remaining()
    }

    /// Seconds per round
    pub fn round_duration(&self) -> u32 {
        self.state.countdown.duration()
    }

    /// Obscurity level to render the current frame with
    pub fn compute_blur(&self) -> f64 {
        self.state
            .countdown
            .blur(self.options.progressive_reveal, self.state.answer_shown)
    }

    /// Hint text, once the hint is shown
    pub fn hint_text(&self) -> Option<String> {
        self.state
            .current_round
            .as_ref()
            .filter(|_| self.state.hint_shown)
            .map(Round::hint_text)
    }

    /// Movie title, once the answer is shown
    pub fn answer(&self) -> Option<&str> {
        self.state
            .current_round
            .as_ref()
            .filter(|_| self.state.answer_shown)
            .map(|round| round.title.as_str())
    }

    /// Comparison of the team scores (team mode only)
    pub fn winner(&self) -> Option<Winner> {
        self.state.teams.as_ref().map(Teams::winner)
    }

    /// Number of playable rounds
    pub fn total_count(&self) -> usize {
        self.rounds.len()
    }

    /// Number of rounds presented so far
    pub fn shown_count(&self) -> usize {
        self.state.shown_refs.len()
    }

    /// Number of rounds not yet presented
    pub fn remaining_count(&self) -> usize {
        self.total_count().saturating_sub(self.shown_count())
    }

    fn score_message(&self) -> ScoreMessage {
        match &self.state.teams {
            Some(teams) => ScoreMessage::Teams {
                names: teams.names().map(str::to_owned),
                scores: teams.scores(),
                active: teams.active(),
                active_name: teams.active_name().to_owned(),
            },
            None => ScoreMessage::Solo(self.state.solo_score),
        }
    }

    /// End-of-game summary of every completed round and the final scores
    pub fn summary(&self) -> SummaryMessage {
        SummaryMessage {
            rounds: self.state.history.clone(),
            score: self.score_message(),
            winner: self.winner(),
        }
    }

    /// Everything the presentation layer needs to render the current screen
    pub fn sync_message(&self) -> SyncMessage {
        match (self.state.screen, &self.state.current_round) {
            (Screen::Welcome, _) => SyncMessage::Welcome {
                mode: self.options.mode,
                round_duration: self.round_duration(),
                total: self.total_count(),
                score: self.score_message(),
            },
            (Screen::Reviewing { index, .. }, _) => SyncMessage::Review {
                index,
                count: self.state.history.len(),
                record: self.state.history[index].clone(),
            },
            (Screen::Playing, Some(round)) => SyncMessage::Round {
                image_ref: round.image_ref.clone(),
                time_remaining: self.time_remaining(),
                round_duration: self.round_duration(),
                blur: self.compute_blur(),
                hint: self.hint_text(),
                answer: self.answer().map(str::to_owned),
                running: self.state.countdown.is_running(),
                awaiting_score_decision: self.state.awaiting_score_decision,
                remaining: self.remaining_count(),
                total: self.total_count(),
                score: self.score_message(),
            },
            (Screen::Playing | Screen::GameOver, _) => SyncMessage::Summary(self.summary()),
        }
    }
}
