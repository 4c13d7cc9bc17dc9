//! # Frames Game Library
//!
//! This library provides the core game logic of a movie-frame guessing
//! party game. A frame is shown, optionally starting blurred and
//! sharpening as a countdown runs out, and players guess the movie title.
//! Hints and reveals are available, and in team mode two teams alternate
//! turns and collect points weighted by speed and hint usage.
//!
//! The [`game::Game`] controller owns all session state. Presentation
//! code forwards user actions and a once-per-second tick to it, then
//! renders from [`game::SyncMessage`] snapshots.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod constants;
pub mod countdown;
pub mod game;
pub mod guess;
pub mod round;
pub mod scoring;
pub mod selector;
pub mod teams;
