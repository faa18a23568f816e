//! Pin and row types

use rand::Rng;

/// Integer color code for one pin slot
pub type Pin = u8;

/// Number of pins in a row
pub const ROW_LEN: usize = 4;
/// Smallest pin color code
pub const PIN_MIN: Pin = 1;
/// Largest pin color code
pub const PIN_MAX: Pin = 8;
/// Input-layer sentinel for a slot the player has not filled yet.
/// Never appears in a submitted guess or in the secret.
pub const PIN_UNSET: Pin = 0;

/// A full row of pins
pub type Row = [Pin; ROW_LEN];

/// Draw a uniform random pin from the color alphabet
pub fn random_pin<R: Rng>(rng: &mut R) -> Pin {
    rng.random_range(PIN_MIN..=PIN_MAX)
}

/// Draw a full random row (the secret at game start)
pub fn random_row<R: Rng>(rng: &mut R) -> Row {
    std::array::from_fn(|_| random_pin(rng))
}
