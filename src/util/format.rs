/// Smallest decimal exponent printed without exponent notation.
const MIN_PLAIN_EXPONENT: i32 = -4;
/// Decimal exponent from which exponent notation is used.
const MAX_PLAIN_EXPONENT: i32 = 21;

/// Formats a result for display.
///
/// - NaN prints as `NaN`, infinities as `+Inf` and `-Inf`.
/// - Numbers whose decimal exponent lies in `[-4, 21)` print in plain
///   notation with the shortest digits that round-trip (`7`, `0.1`, `-0`).
/// - Anything else uses exponent notation with a signed, at least two digit
///   exponent (`1e+21`, `1.5e-07`).
///
/// ## Example
/// ```
/// use anscalc::util::format::format_number;
///
/// assert_eq!(format_number(7.0), "7");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Inf");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(0.000015), "1.5e-05");
/// assert_eq!(format_number(0.0001), "0.0001");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{value}");
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{value}");
    };

    if (MIN_PLAIN_EXPONENT..MAX_PLAIN_EXPONENT).contains(&exponent) {
        format!("{value}")
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}
