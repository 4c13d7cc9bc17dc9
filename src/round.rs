//! Round records supplied by the data loader
//!
//! A round is one movie frame to guess. Rounds come from an external
//! loader that guarantees every image reference is renderable, so the
//! game core treats them as read-only and never re-validates them.

use serde::{Deserialize, Serialize};

/// Identifier of the image shown during a round
///
/// This is whatever the presentation layer uses to locate the frame,
/// typically a file name. Two rounds with the same reference are the
/// same round as far as selection is concerned.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::From,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Returns the reference as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// A single guessing round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// The frame to show
    pub image_ref: ImageRef,
    /// The movie title players must guess
    pub title: String,
    /// Optional hint text shown on request
    #[serde(default)]
    pub hint: Option<String>,
}

/// Placeholder some data sets use instead of leaving the hint empty
const NO_HINT: &str = "No hint";

impl Round {
    /// Creates a new round
    pub fn new(
        image_ref: impl Into<ImageRef>,
        title: impl Into<String>,
        hint: Option<String>,
    ) -> Self {
        Self {
            image_ref: image_ref.into(),
            title: title.into(),
            hint,
        }
    }

    /// Returns the text displayed when the hint is requested
    ///
    /// Rounds without a usable hint get a generated one naming the first
    /// character of the title and its length.
    pub fn hint_text(&self) -> String {
        match self
            .hint
            .as_deref()
            .map(|hint| hint.trim().trim_matches('"').trim())
        {
            Some(hint) if !hint.is_empty() && hint != NO_HINT => hint.to_owned(),
            _ => {
                let first = self.title.chars().next().map(String::from).unwrap_or_default();
                format!(
                    "Starts with '{first}' \u{2022} {} characters",
                    self.title.chars().count()
                )
            }
        }
    }
}
