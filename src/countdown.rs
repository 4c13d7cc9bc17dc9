//! Per-round countdown and progressive reveal
//!
//! The countdown is driven externally, once per second, through
//! [`Countdown::tick`]. Besides the remaining time it tracks the two
//! one-way actions that lock the image fully visible: pausing the timer
//! and clearing the image.

use serde::{Deserialize, Serialize};

use crate::constants::blur::{CLEAR_WINDOW, MAX_LEVEL};

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TickOutcome {
    /// The timer is not running; nothing changed
    Idle,
    /// One second elapsed, holding the seconds still remaining
    Ticked(u32),
    /// The countdown just reached zero
    TimeUp,
}

/// Saved countdown fields, restored verbatim after reviewing a past round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    time_remaining: u32,
    running: bool,
    paused: bool,
}

/// Countdown state of the current round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    /// Seconds left, never above `duration`
    time_remaining: u32,
    /// Configured seconds for a round
    duration: u32,
    /// Whether ticks currently consume time
    running: bool,
    /// Set by a pause; never cleared until the next round
    paused: bool,
    /// Set when the image was cleared by hand; never cleared until the next round
    forcibly_cleared: bool,
}

impl Countdown {
    /// Creates a stopped countdown with the full duration remaining
    pub fn new(duration: u32) -> Self {
        Self {
            time_remaining: duration,
            duration,
            running: false,
            paused: false,
            forcibly_cleared: false,
        }
    }

    /// Rewinds to the full duration and clears every per-round flag
    pub fn restart(&mut self) {
        *self = Self::new(self.duration);
    }

    /// Seconds left in the round
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// Configured seconds per round
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Whether the clock is counting down
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the timer was paused this round
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether the image was cleared by hand this round
    pub fn is_forcibly_cleared(&self) -> bool {
        self.forcibly_cleared
    }

    /// Whether the image is locked fully visible by a pause or a clear
    pub fn is_locked_clear(&self) -> bool {
        self.paused || self.forcibly_cleared
    }

    /// Fraction of the round still remaining, in `[0, 1]`
    pub fn remaining_ratio(&self) -> f64 {
        if self.duration == 0 {
            return 0.;
        }
        f64::from(self.time_remaining) / f64::from(self.duration)
    }

    /// Starts counting, unless the timer was paused this round
    ///
    /// # Returns
    ///
    /// `true` if the countdown is now running
    pub fn start(&mut self) -> bool {
        if !self.paused && self.time_remaining > 0 {
            self.running = true;
        }
        self.running
    }

    /// Stops counting without marking the round as paused
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stops counting and locks the image clear
    ///
    /// Only a running countdown can be paused; a paused one stays paused.
    ///
    /// # Returns
    ///
    /// `true` if this call paused the countdown
    pub fn pause(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.paused = true;
        true
    }

    /// Locks the image clear while the clock keeps running
    ///
    /// # Returns
    ///
    /// `true` if this call cleared the image
    pub fn clear_image(&mut self) -> bool {
        !std::mem::replace(&mut self.forcibly_cleared, true)
    }

    /// Consumes one second
    ///
    /// Reaching zero stops the countdown, so [`TickOutcome::TimeUp`] is
    /// reported only once per round.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);

        if self.time_remaining == 0 {
            self.running = false;
            TickOutcome::TimeUp
        } else {
            TickOutcome::Ticked(self.time_remaining)
        }
    }

    /// Current obscurity of the image
    ///
    /// The level falls linearly from [`MAX_LEVEL`] at full time to zero when
    /// [`CLEAR_WINDOW`] seconds remain, rounded to one decimal. It is zero
    /// whenever `progressive_reveal` is off, the image is locked clear, or
    /// `answer_shown` is set.
    pub fn blur(&self, progressive_reveal: bool, answer_shown: bool) -> f64 {
        if !progressive_reveal
            || self.is_locked_clear()
            || answer_shown
            || self.time_remaining <= CLEAR_WINDOW
            || self.duration <= CLEAR_WINDOW
        {
            return 0.;
        }

        let ratio = (f64::from(self.time_remaining - CLEAR_WINDOW)
            / f64::from(self.duration - CLEAR_WINDOW))
        .clamp(0., 1.);

        (ratio * MAX_LEVEL * 10.).round() / 10.
    }

    /// Captures the fields that reviewing a past round must not disturb
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            time_remaining: self.time_remaining,
            running: self.running,
            paused: self.paused,
        }
    }

    /// Restores a previously captured snapshot exactly
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.time_remaining = snapshot.time_remaining;
        self.running = snapshot.running;
        self.paused = snapshot.paused;
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn running(duration: u32) -> Countdown {
        let mut countdown = Countdown::new(duration);
        assert!(countdown.start());
        countdown
    }

    #[test]
    fn test_new_is_stopped_at_full_time() {
        let mut countdown = Countdown::new(25);
        assert_eq!(countdown.time_remaining(), 25);
        assert!(!countdown.is_running());
        assert_eq!(countdown.tick(), TickOutcome::Idle);
        assert_eq!(countdown.time_remaining(), 25);
    }

    #[test]
    fn test_tick_counts_down_and_times_up_once() {
        let mut countdown = running(3);

        assert_eq!(countdown.tick(), TickOutcome::Ticked(2));
        assert_eq!(countdown.tick(), TickOutcome::Ticked(1));
        assert_eq!(countdown.tick(), TickOutcome::TimeUp);
        assert!(!countdown.is_running());
        assert_eq!(countdown.tick(), TickOutcome::Idle);
        assert_eq!(countdown.time_remaining(), 0);
    }

    #[test]
    fn test_start_at_zero_does_not_run() {
        let mut countdown = running(1);
        assert_eq!(countdown.tick(), TickOutcome::TimeUp);
        assert!(!countdown.start());
    }

    #[test]
    fn test_pause_is_one_way() {
        let mut countdown = running(30);

        assert!(countdown.pause());
        assert!(!countdown.pause());
        assert!(countdown.is_paused());
        assert!(!countdown.start());
        assert_eq!(countdown.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_pause_requires_running() {
        let mut countdown = Countdown::new(30);
        assert!(!countdown.pause());
        assert!(!countdown.is_paused());
    }

    #[test]
    fn test_clear_image_keeps_running() {
        let mut countdown = running(30);

        assert!(countdown.clear_image());
        assert!(!countdown.clear_image());
        assert!(countdown.is_running());
        assert_eq!(countdown.tick(), TickOutcome::Ticked(29));
    }

    #[test]
    fn test_blur_full_time_is_max() {
        let countdown = Countdown::new(45);
        assert!((countdown.blur(true, false) - MAX_LEVEL).abs() < f64::EPSILON);
    }

    #[test]
    fn test_blur_is_zero_in_final_window() {
        let mut countdown = running(25);
        while countdown.time_remaining() > 10 {
            countdown.tick();
        }
        assert!(countdown.blur(true, false).abs() < f64::EPSILON);
    }

    #[test]
    fn test_blur_monotonic_non_increasing() {
        let mut countdown = running(45);
        let mut previous = countdown.blur(true, false);
        while countdown.is_running() {
            countdown.tick();
            let current = countdown.blur(true, false);
            assert!(current <= previous);
            previous = current;
        }
    }

    #[test]
    fn test_blur_rounds_to_one_decimal() {
        let mut countdown = running(25);
        countdown.tick();
        // 14 / 15 * 10 = 9.333..
        assert!((countdown.blur(true, false) - 9.3).abs() < 1e-9);
    }

    #[test]
    fn test_blur_zero_when_disabled_locked_or_revealed() {
        let mut countdown = running(45);
        assert!(countdown.blur(false, false).abs() < f64::EPSILON);
        assert!(countdown.blur(true, true).abs() < f64::EPSILON);

        countdown.clear_image();
        assert!(countdown.blur(true, false).abs() < f64::EPSILON);

        let mut paused = running(45);
        paused.pause();
        assert!(paused.blur(true, false).abs() < f64::EPSILON);
    }

    #[test]
    fn test_blur_short_duration_is_clear() {
        let countdown = Countdown::new(8);
        assert!(countdown.blur(true, false).abs() < f64::EPSILON);
    }

    #[test]
    fn test_restart_clears_flags() {
        let mut countdown = running(20);
        countdown.tick();
        countdown.clear_image();
        countdown.pause();
        countdown.restart();

        assert_eq!(countdown, Countdown::new(20));
    }

    #[test]
    fn test_snapshot_restore_is_exact() {
        let mut countdown = running(30);
        countdown.tick();
        let snapshot = countdown.snapshot();

        countdown.stop();
        countdown.restore(snapshot);

        assert_eq!(countdown.time_remaining(), 29);
        assert!(countdown.is_running());
        assert_eq!(countdown.snapshot(), snapshot);
    }
}
