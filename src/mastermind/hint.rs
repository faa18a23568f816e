//! Hint scoring for a guessed row against the secret
//!
//! Classic Mastermind two-pass scoring: exact-position matches are locked
//! first, then each remaining guess pin may consume one remaining secret
//! pin of the same color for an "exists" credit.

use serde::{Deserialize, Serialize};

use super::row::Pin;

/// The hint displayed next to a guess row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    /// Pins with the right color in the right position
    pub correct: u32,
    /// Further pins whose color occurs elsewhere in the secret
    pub exists: u32,
}

/// Score a guess against the secret.
///
/// Both rows must have the same length (fixed at 4 in this crate, but the
/// algorithm is length-agnostic). Neither input is mutated and no pin
/// value constraints are enforced here; callers keep sentinels out.
///
/// Locked positions are removed from both sides before the second pass,
/// so a correct-position match is never double-counted as "exists". The
/// remainder of the secret is held as a count per color and decremented
/// one-for-one, so duplicate guess pins never earn more credit than the
/// secret has occurrences. Only cardinalities matter, so consumption
/// order among ties cannot change the result.
pub fn score(guess: &[Pin], secret: &[Pin]) -> Hint {
    debug_assert_eq!(guess.len(), secret.len());

    let locked: Vec<bool> = guess.iter().zip(secret).map(|(g, s)| g == s).collect();
    let correct = locked.iter().filter(|&&l| l).count() as u32;

    // Unlocked secret pins, as a count per color
    let mut remaining = [0u32; 1 << Pin::BITS];
    for (&s, _) in secret.iter().zip(&locked).filter(|&(_, &l)| !l) {
        remaining[s as usize] += 1;
    }

    let mut exists = 0;
    for (&g, _) in guess.iter().zip(&locked).filter(|&(_, &l)| !l) {
        if remaining[g as usize] > 0 {
            remaining[g as usize] -= 1;
            exists += 1;
        }
    }

    Hint { correct, exists }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mastermind::row::{PIN_MAX, PIN_MIN};
    use proptest::prelude::*;

    fn hint(correct: u32, exists: u32) -> Hint {
        Hint { correct, exists }
    }

    #[test]
    fn test_all_reversed() {
        assert_eq!(score(&[4, 3, 2, 1], &[1, 2, 3, 4]), hint(0, 4));
    }

    #[test]
    fn test_single_correct_rest_absent() {
        assert_eq!(score(&[1, 5, 5, 5], &[1, 2, 3, 4]), hint(1, 0));
    }

    #[test]
    fn test_duplicates_capped_by_secret() {
        // Only two 1s exist in the secret and both are already correct
        assert_eq!(score(&[1, 1, 1, 1], &[1, 1, 2, 2]), hint(2, 0));
    }

    #[test]
    fn test_duplicate_swap() {
        assert_eq!(score(&[2, 1, 2, 1], &[1, 2, 1, 2]), hint(0, 4));
    }

    #[test]
    fn test_locked_pins_leave_no_duplicates() {
        // All positions locked: exists must be 0 even with repeated colors
        assert_eq!(score(&[3, 3, 3, 3], &[3, 3, 3, 3]), hint(4, 0));
    }

    #[test]
    fn test_guess_duplicates_versus_single_occurrence() {
        // Three 5s chasing a single misplaced 5: one exists credit total
        assert_eq!(score(&[5, 5, 5, 1], &[1, 2, 3, 5]), hint(0, 2));
    }

    #[test]
    fn test_empty_rows() {
        assert_eq!(score(&[], &[]), hint(0, 0));
    }

    #[test]
    fn test_inputs_not_mutated() {
        let guess = [2, 1, 2, 1];
        let secret = [1, 2, 1, 2];
        score(&guess, &secret);
        assert_eq!(guess, [2, 1, 2, 1]);
        assert_eq!(secret, [1, 2, 1, 2]);
    }

    /// Equal-length row pairs over the pin alphabet
    fn row_pairs() -> impl Strategy<Value = (Vec<Pin>, Vec<Pin>)> {
        prop::collection::vec((PIN_MIN..=PIN_MAX, PIN_MIN..=PIN_MAX), 0..12)
            .prop_map(|pairs| pairs.into_iter().unzip())
    }

    proptest! {
        #[test]
        fn prop_self_score_is_all_correct(row in prop::collection::vec(PIN_MIN..=PIN_MAX, 0..12)) {
            prop_assert_eq!(score(&row, &row), hint(row.len() as u32, 0));
        }

        #[test]
        fn prop_disjoint_alphabets_score_zero(
            pairs in prop::collection::vec((1u8..=4, 5u8..=8), 0..12),
        ) {
            let (guess, secret): (Vec<Pin>, Vec<Pin>) = pairs.into_iter().unzip();
            prop_assert_eq!(score(&guess, &secret), hint(0, 0));
        }

        #[test]
        fn prop_total_credit_bounded_by_length((guess, secret) in row_pairs()) {
            let h = score(&guess, &secret);
            prop_assert!(h.correct + h.exists <= guess.len() as u32);
        }

        #[test]
        fn prop_invariant_under_simultaneous_permutation(
            (pairs, shuffled) in prop::collection::vec((PIN_MIN..=PIN_MAX, PIN_MIN..=PIN_MAX), 0..12)
                .prop_flat_map(|pairs| {
                    let orig = pairs.clone();
                    (Just(orig), Just(pairs).prop_shuffle())
                }),
        ) {
            let (g1, s1): (Vec<Pin>, Vec<Pin>) = pairs.into_iter().unzip();
            let (g2, s2): (Vec<Pin>, Vec<Pin>) = shuffled.into_iter().unzip();
            prop_assert_eq!(score(&g1, &s1), score(&g2, &s2));
        }
    }
}
