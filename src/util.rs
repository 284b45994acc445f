/// Number formatting for output.
///
/// Renders results the way the calculator prints them: shortest round-trip
/// digits, `NaN`, signed infinities, and exponent notation for very large or
/// very small magnitudes.
pub mod format;
