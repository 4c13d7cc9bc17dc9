//! Random selection of the next unseen round
//!
//! The selector is a pure function over the valid rounds and the
//! references already shown. Randomness comes from a [`RandomSource`]
//! so sessions can run on `fastrand` while tests script exact picks.

use itertools::Itertools;

use crate::round::{ImageRef, Round};

/// Source of uniformly distributed indices
pub trait RandomSource {
    /// Returns an index in `0..len`, uniformly distributed
    ///
    /// `len` is never zero when called by [`select_next`].
    fn index(&mut self, len: usize) -> usize;
}

impl RandomSource for fastrand::Rng {
    fn index(&mut self, len: usize) -> usize {
        self.usize(..len)
    }
}

/// Outcome of asking for the next round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    /// An unseen round was picked
    Next(&'a Round),
    /// Every valid round has already been shown
    Exhausted,
}

/// Picks an unseen round uniformly at random
///
/// The candidates are the rounds of `valid_rounds` whose image reference
/// is not in `shown_refs`, kept in input order; the source picks one of
/// them by index. Recording the pick in `shown_refs` is left to the caller.
///
/// # Returns
///
/// [`Selection::Exhausted`] when no candidate remains, including when
/// `valid_rounds` is empty.
pub fn select_next<'a, R: RandomSource + ?Sized>(
    valid_rounds: &'a [Round],
    shown_refs: &[ImageRef],
    rng: &mut R,
) -> Selection<'a> {
    let available = valid_rounds
        .iter()
        .filter(|round| !shown_refs.contains(&round.image_ref))
        .collect_vec();

    if available.is_empty() {
        return Selection::Exhausted;
    }

    let index = rng.index(available.len()).min(available.len() - 1);
    Selection::Next(available[index])
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
pub(crate) mod tests {
    use std::collections::VecDeque;

    use super::*;

    /// Returns pre-scripted indices, then zeroes
    #[derive(Debug, Default)]
    pub struct ScriptedSource(pub VecDeque<usize>);

    impl ScriptedSource {
        pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
            Self(picks.into_iter().collect())
        }
    }

    impl RandomSource for ScriptedSource {
        fn index(&mut self, len: usize) -> usize {
            self.0.pop_front().unwrap_or_default() % len
        }
    }

    pub fn sample_rounds() -> Vec<Round> {
        vec![
            Round::new("sholay.jpg", "Sholay", None),
            Round::new("lagaan.jpg", "Lagaan", Some("Cricket".to_string())),
            Round::new("dangal.jpg", "Dangal", None),
        ]
    }

    #[test]
    fn test_select_next_empty_pool_is_exhausted() {
        let mut rng = ScriptedSource::default();
        assert_eq!(select_next(&[], &[], &mut rng), Selection::Exhausted);
    }

    #[test]
    fn test_select_next_skips_shown() {
        let rounds = sample_rounds();
        let shown = vec![ImageRef::from("sholay.jpg")];
        let mut rng = ScriptedSource::new([0]);

        assert_eq!(select_next(&rounds, &shown, &mut rng), Selection::Next(&rounds[1]));
    }

    #[test]
    fn test_select_next_uses_index_into_available() {
        let rounds = sample_rounds();
        let shown = vec![ImageRef::from("lagaan.jpg")];
        let mut rng = ScriptedSource::new([1]);

        assert_eq!(select_next(&rounds, &shown, &mut rng), Selection::Next(&rounds[2]));
    }

    #[test]
    fn test_select_next_until_exhausted() {
        let rounds = sample_rounds();
        let mut shown: Vec<ImageRef> = Vec::new();
        let mut rng = fastrand::Rng::with_seed(7);

        for _ in 0..rounds.len() {
            let Selection::Next(round) = select_next(&rounds, &shown, &mut rng) else {
                panic!("expected a round");
            };
            assert!(!shown.contains(&round.image_ref));
            shown.push(round.image_ref.clone());
        }

        assert_eq!(shown.iter().unique().count(), 3);
        assert_eq!(select_next(&rounds, &shown, &mut rng), Selection::Exhausted);
    }

    #[test]
    fn test_fastrand_source_stays_in_range() {
        let mut rng = fastrand::Rng::with_seed(42);
        for len in 1..50 {
            assert!(RandomSource::index(&mut rng, len) < len);
        }
    }
}
