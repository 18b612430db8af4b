//! Cent rounding used wherever an amount leaves the engine

/// Round an amount to 2 decimal places, ties away from zero.
///
/// Negative zero is normalised to `0.0` so that a balance which rounds to
/// nothing never displays as "-0.00". From 1e15 up an f64 no longer holds
/// cents, so the value is returned as is rather than scaled past `f64::MAX`.
pub fn round_cents(value: f64) -> f64 {
    if value.abs() >= 1e15 {
        return value;
    }
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
