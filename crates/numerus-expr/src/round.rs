//! Decimal rounding with explicit tie-breaking.
//!
//! Ties are resolved on the scaled magnitude, then the sign is restored,
//! so `HalfUp` moves ties away from zero and `HalfDown` toward it.

use std::fmt;

/// How a value exactly halfway between two candidates is rounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Ties away from zero: `42.5 → 43`, `-42.5 → -43`.
    #[default]
    HalfUp,
    /// Ties toward zero: `42.5 → 42`, `-42.5 → -42`.
    HalfDown,
    /// Ties to the even neighbour: `42.5 → 42`, `43.5 → 44`.
    HalfEven,
    /// Ties to the odd neighbour: `42.5 → 43`, `43.5 → 43`.
    HalfOdd,
}

impl RoundingMode {
    /// Returns the label used when rendering a rounding node.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            RoundingMode::HalfUp => "half-up",
            RoundingMode::HalfDown => "half-down",
            RoundingMode::HalfEven => "half-even",
            RoundingMode::HalfOdd => "half-odd",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rounds `value` to `precision` decimal digits.
///
/// Non-finite values are returned unchanged, as are values whose scaled
/// magnitude no longer fits a float.
#[must_use]
pub fn round(value: f64, precision: u32, mode: RoundingMode) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let scale = 10f64.powi(i32::try_from(precision).unwrap_or(i32::MAX));
    let scaled = value.abs() * scale;
    if !scaled.is_finite() {
        return value;
    }

    let floor = scaled.floor();
    let diff = scaled - floor;
    let floor_is_even = floor % 2.0 == 0.0;

    let rounded = if diff > 0.5 {
        floor + 1.0
    } else if diff < 0.5 {
        floor
    } else {
        match mode {
            RoundingMode::HalfUp => floor + 1.0,
            RoundingMode::HalfDown => floor,
            RoundingMode::HalfEven if floor_is_even => floor,
            RoundingMode::HalfEven => floor + 1.0,
            RoundingMode::HalfOdd if floor_is_even => floor + 1.0,
            RoundingMode::HalfOdd => floor,
        }
    };

    (rounded / scale).copysign(value)
}
