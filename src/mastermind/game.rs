//! Mastermind game session
//!
//! Owns the secret row, submitted guesses (newest first) and the
//! in-progress input row. Validation that no unset pin reaches the
//! scorer happens here, at the caller, so the scorer stays infallible.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::hint::{Hint, score};
use super::row::{PIN_UNSET, Pin, ROW_LEN, Row, random_pin, random_row};

/// Rejected guess submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// A pin slot is still unset
    UnsetPin { index: usize },
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::UnsetPin { index } => {
                write!(f, "pin slot {index} is unset")
            }
        }
    }
}

impl std::error::Error for SubmitError {}

/// The row currently being edited by the player.
///
/// Slots start unset; "randomize" is the [`InputRow::randomize_pin`]
/// affordance, not a reserved pin code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRow {
    pins: Row,
}

impl InputRow {
    fn new() -> Self {
        Self {
            pins: [PIN_UNSET; ROW_LEN],
        }
    }

    pub fn pins(&self) -> &Row {
        &self.pins
    }

    /// Set one pin slot
    pub fn set_pin(&mut self, index: usize, pin: Pin) {
        self.pins[index] = pin;
    }

    /// Fill one slot with a uniform random pin
    pub fn randomize_pin<R: Rng>(&mut self, index: usize, rng: &mut R) {
        self.pins[index] = random_pin(rng);
    }

    /// True once every slot has been filled
    pub fn is_complete(&self) -> bool {
        self.pins.iter().all(|&p| p != PIN_UNSET)
    }

    /// First unset slot, if any
    fn first_unset(&self) -> Option<usize> {
        self.pins.iter().position(|&p| p == PIN_UNSET)
    }

    fn reset(&mut self) {
        self.pins = [PIN_UNSET; ROW_LEN];
    }
}

impl Default for InputRow {
    fn default() -> Self {
        Self::new()
    }
}

/// A submitted guess and its hint, immutable once pushed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRow {
    pub pins: Row,
    pub hint: Hint,
}

/// One puzzle round: fixed secret, guesses newest first
#[derive(Debug, Clone)]
pub struct Game {
    rng: Pcg32,
    secret: Row,
    guesses: Vec<GuessRow>,
    input: InputRow,
}

impl Game {
    /// Start a round with a fresh random secret
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let secret = random_row(&mut rng);
        log::debug!("new mastermind round (seed {seed})");
        Self {
            rng,
            secret,
            guesses: Vec::new(),
            input: InputRow::new(),
        }
    }

    pub fn secret(&self) -> &Row {
        &self.secret
    }

    /// Submitted guesses, newest first
    pub fn guesses(&self) -> &[GuessRow] {
        &self.guesses
    }

    pub fn input(&self) -> &InputRow {
        &self.input
    }

    /// Set one slot of the input row
    pub fn set_pin(&mut self, index: usize, pin: Pin) {
        self.input.set_pin(index, pin);
    }

    /// Fill one slot of the input row with a random pin
    pub fn randomize_pin(&mut self, index: usize) {
        self.input.randomize_pin(index, &mut self.rng);
    }

    /// Submit the input row as a guess.
    ///
    /// Scores it against the secret, pushes it newest-first and resets
    /// the input row. Fails if any slot is still unset.
    pub fn submit(&mut self) -> Result<Hint, SubmitError> {
        if let Some(index) = self.input.first_unset() {
            return Err(SubmitError::UnsetPin { index });
        }
        let pins = *self.input.pins();
        let hint = score(&pins, &self.secret);
        self.guesses.insert(0, GuessRow { pins, hint });
        self.input.reset();
        Ok(hint)
    }

    /// True once the newest guess matches the secret
    pub fn is_solved(&self) -> bool {
        self.guesses
            .first()
            .is_some_and(|g| g.pins == self.secret)
    }

    /// Start over with a new secret
    pub fn restart(&mut self, seed: u64) {
        *self = Self::new(seed);
    }
}
