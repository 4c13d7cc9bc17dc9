//! Fuzzy matching of guesses against movie titles
//!
//! Guesses are often typed in a hurry or produced by speech
//! recognition, so an exact comparison is too strict. Titles and guesses
//! are normalized first, then scored by containment, word overlap (Dice
//! coefficient over non-stop-words) and edit distance; the best score
//! decides.

use std::collections::HashSet;

use itertools::Itertools;
use serde::Serialize;

use crate::constants::guess::{CONTAINMENT_SCORE, STOP_WORDS};

/// Which comparison produced the deciding score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Method {
    /// The guess or the title was empty after normalization
    Empty,
    /// Normalized strings are identical
    Exact,
    /// One normalized string contains the other
    Containment,
    /// Word overlap
    Dice,
    /// Character edit distance
    Levenshtein,
}

/// Result of comparing a guess with a title
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GuessMatch {
    /// Whether the guess counts as correct
    pub matched: bool,
    /// Best similarity found, in `[0, 1]`
    pub score: f64,
    /// Comparison that produced `score`
    pub method: Method,
}

/// Normalizes a title or guess for comparison
///
/// Lowercases, drops parenthesised parts and punctuation, and collapses
/// whitespace.
fn normalize(text: &str) -> String {
    let mut depth = 0_usize;
    text.to_lowercase()
        .chars()
        .filter(|c| match *c {
            '(' => {
                depth += 1;
                false
            }
            ')' => {
                depth = depth.saturating_sub(1);
                false
            }
            _ => depth == 0,
        })
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .join(" ")
}

fn words(normalized: &str) -> HashSet<&str> {
    normalized
        .split(' ')
        .filter(|word| !word.is_empty() && !STOP_WORDS.contains(word))
        .collect()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let b = b.chars().collect_vec();
    let mut previous = (0..=b.len()).collect_vec();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            current[j + 1] = if ca == *cb {
                previous[j]
            } else {
                1 + previous[j].min(previous[j + 1]).min(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 0.;
    }
    1. - levenshtein(a, b) as f64 / longest as f64
}

fn dice_coefficient(a: &str, b: &str) -> f64 {
    let (a, b) = (words(a), words(b));
    if a.is_empty() || b.is_empty() {
        return 0.;
    }
    2. * a.intersection(&b).count() as f64 / (a.len() + b.len()) as f64
}

/// Compares a guess with a title
///
/// # Arguments
///
/// * `guess` - What the player typed or said
/// * `title` - The expected movie title
/// * `threshold` - Similarity at or above which the guess matches
pub fn fuzzy_match(guess: &str, title: &str, threshold: f64) -> GuessMatch {
    let guess = normalize(guess);
    let title = normalize(title);

    if guess.is_empty() || title.is_empty() {
        return GuessMatch {
            matched: false,
            score: 0.,
            method: Method::Empty,
        };
    }

    if guess == title {
        return GuessMatch {
            matched: true,
            score: 1.,
            method: Method::Exact,
        };
    }

    let containment = if guess.contains(&title) || title.contains(&guess) {
        CONTAINMENT_SCORE
    } else {
        0.
    };
    if containment >= threshold {
        return GuessMatch {
            matched: true,
            score: containment,
            method: Method::Containment,
        };
    }

    let (score, method) = [
        (containment, Method::Containment),
        (dice_coefficient(&guess, &title), Method::Dice),
        (levenshtein_similarity(&guess, &title), Method::Levenshtein),
    ]
    .into_iter()
    .fold((0., Method::Containment), |best, candidate| {
        if candidate.0 >= best.0 { candidate } else { best }
    });

    GuessMatch {
        matched: score >= threshold,
        score,
        method,
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::constants::guess::DEFAULT_THRESHOLD;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  The  Lunchbox (2013)! "), "the lunchbox");
        assert_eq!(normalize("Kabhi Khushi, Kabhie Gham..."), "kabhi khushi kabhie gham");
    }

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("same", "same"), 0);
    }

    #[test]
    fn test_exact_match_ignores_case_and_punctuation() {
        let result = fuzzy_match("sholay!", "Sholay", DEFAULT_THRESHOLD);
        assert!(result.matched);
        assert_eq!(result.method, Method::Exact);
    }

    #[test]
    fn test_containment_match() {
        let result = fuzzy_match("lunchbox", "The Lunchbox", DEFAULT_THRESHOLD);
        assert!(result.matched);
        assert_eq!(result.method, Method::Containment);
    }

    #[test]
    fn test_typo_matches_by_edit_distance() {
        let result = fuzzy_match("dangle", "Dangal", DEFAULT_THRESHOLD);
        assert!(result.matched);
        assert_eq!(result.method, Method::Levenshtein);
    }

    #[test]
    fn test_word_overlap_ignores_stop_words() {
        let result = fuzzy_match("gangs wasseypur", "Gangs of Wasseypur", DEFAULT_THRESHOLD);
        assert!(result.matched);
    }

    #[test]
    fn test_unrelated_guess_does_not_match() {
        let result = fuzzy_match("titanic", "Sholay", DEFAULT_THRESHOLD);
        assert!(!result.matched);
        assert!(result.score < DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_empty_never_matches() {
        assert_eq!(fuzzy_match("", "Sholay", 0.).method, Method::Empty);
        assert!(!fuzzy_match("(2013)", "Sholay", 0.).matched);
        assert!(!fuzzy_match("Sholay", "   ", 0.).matched);
    }
}
