use std::io;

use serde_json::ser::Formatter;

/// Decimal exponents at or above this switch to scientific notation.
const SCIENTIFIC_ABOVE: i32 = 6;

/// Decimal exponents below this switch to scientific notation.
const SCIENTIFIC_BELOW: i32 = -4;

/// Formats a float with the fewest digits that parse back to the same value.
///
/// Magnitudes with a decimal exponent below -4 or at least 6 use scientific
/// notation with a signed, at least two digit exponent (`3e-08`,
/// `-8.451394857194e+12`). Everything else is plain decimal without a
/// trailing `.0`. Non-finite values render as `NaN`, `+Inf` and `-Inf`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_owned();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_owned();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `-8.451394857194e12`.
    let sci = format!("{value:e}");
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return sci;
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();

    let mut out = String::with_capacity(digits.len() + 8);
    if value.is_sign_negative() {
        out.push('-');
    }

    if !(SCIENTIFIC_BELOW..SCIENTIFIC_ABOVE).contains(&exponent) {
        let (lead, rest) = digits.split_at(1);
        out.push_str(lead);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        out.push('e');
        out.push(if exponent < 0 { '-' } else { '+' });
        out.push_str(&format!("{:02}", exponent.unsigned_abs()));
    } else if exponent < 0 {
        out.push_str("0.");
        for _ in 1..exponent.unsigned_abs() {
            out.push('0');
        }
        out.push_str(&digits);
    } else {
        let int_len = usize::try_from(exponent).map_or(1, |e| e + 1);
        if digits.len() <= int_len {
            out.push_str(&digits);
            for _ in digits.len()..int_len {
                out.push('0');
            }
        } else {
            let (int_part, frac_part) = digits.split_at(int_len);
            out.push_str(int_part);
            out.push('.');
            out.push_str(frac_part);
        }
    }
    out
}

/// Compact JSON formatter that writes floats with [`format_float`].
///
/// `serde_json` never hands non-finite values to the formatter; it writes
/// `null` for them instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimalFormatter;

impl Formatter for MinimalFormatter {
    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(format_float(value).as_bytes())
    }

    fn write_f32<W>(&mut self, writer: &mut W, value: f32) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.write_f64(writer, f64::from(value))
    }
}
