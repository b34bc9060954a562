//! Number formatting for displayed values

/// Magnitudes at or above this print in exponent form
const EXPONENT_ABOVE: f64 = 1e21;
/// Non-zero magnitudes below this print in exponent form
const EXPONENT_BELOW: f64 = 1e-6;

/// Formats a value for the result display
///
/// Whole numbers render without decimals, anything else with exactly two.
pub fn format_number(n: f64) -> String {
    if is_whole(n) {
        plain_number(n)
    } else {
        fixed_two(n)
    }
}

/// Plain decimal text used when a raw value is copied into the input field
///
/// Very large and very small magnitudes switch to exponent form (`1e+21`,
/// `1.5e-7`).
pub fn plain_number(n: f64) -> String {
    // -0 displays as "0"
    let n = n + 0.0;
    let magnitude = n.abs();
    if magnitude.is_finite() && (magnitude >= EXPONENT_ABOVE || (magnitude != 0.0 && magnitude < EXPONENT_BELOW)) {
        let text = format!("{n:e}");
        return match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => text,
        };
    }
    format!("{n}")
}

/// True for finite values without a fractional part
pub fn is_whole(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0
}

/// Two decimals, with exact halves rounded away from zero
///
/// `{:.2}` rounds exact ties to even (0.125 -> "0.12"). A value is an exact
/// tie at the second decimal only when it is an odd multiple of 1/8, so those
/// are rounded by hand in integer hundredths.
fn fixed_two(n: f64) -> String {
    let eighths = n.abs() * 8.0;
    if eighths.fract() == 0.0 && eighths < 9.0e15 && eighths % 2.0 == 1.0 {
        let hundredths = (eighths as u64 * 25 + 1) / 2;
        let sign = if n < 0.0 { "-" } else { "" };
        return format!("{sign}{}.{:02}", hundredths / 100, hundredths % 100);
    }
    format!("{n:.2}")
}
