//! Mastermind pin puzzle engine
//!
//! Pure game logic only; the pin-picker UI is presentation and lives
//! outside this crate. The hint scorer is a total function over
//! equal-length rows and never mutates its inputs.

pub mod game;
pub mod hint;
pub mod row;

pub use game::{Game, GuessRow, InputRow, SubmitError};
pub use hint::{Hint, score};
pub use row::{PIN_MAX, PIN_MIN, PIN_UNSET, Pin, ROW_LEN, Row, random_pin, random_row};
