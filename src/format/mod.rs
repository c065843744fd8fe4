use num_format::{Locale, ToFormattedString};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::model::amount::AmountInput;

pub mod options;

pub use options::{FormatOptions, DEFAULT_LOCALE};

/// Renders a value with the digit grouping, decimal mark, and fraction
/// digit bounds of the configured locale. Never fails: unusable values
/// format as 0 and unknown locales fall back to [`DEFAULT_LOCALE`].
pub fn format_money<A: Into<AmountInput>>(value: A, options: &FormatOptions) -> String {
    let value = value.into().to_number();
    let locale = resolve_locale(&options.locale);
    let (min, max) = options.fraction_digits();

    let digits = round_to_digits(value.abs(), max);
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
    let fraction = trim_fraction(fraction, min as usize);

    // Negative zero keeps its sign, as with any locale number formatter
    let mut out = String::new();
    if value.is_sign_negative() {
        out.push_str(locale.minus_sign());
    }
    out.push_str(&group_integer(integer, &locale));
    if !fraction.is_empty() {
        out.push_str(locale.decimal());
        out.push_str(&fraction);
    }
    out
}

/// Looks up locale data by name, accepting `en_NG` as well as `en-NG`.
pub fn resolve_locale(name: &str) -> Locale {
    let normalized = name.trim().replace('_', "-");
    match Locale::from_name(normalized.as_str()) {
        Ok(locale) => locale,
        Err(_) => {
            tracing::debug!(locale = %name, "Unknown locale, using {}", DEFAULT_LOCALE);
            default_locale()
        }
    }
}

fn default_locale() -> Locale {
    Locale::from_name(DEFAULT_LOCALE).unwrap_or(Locale::en)
}

// Rounds a non-negative value to `scale` digits, ties away from zero, as
// plain decimal text.
fn round_to_digits(magnitude: f64, scale: u8) -> String {
    match Decimal::from_f64(magnitude) {
        Some(decimal) => decimal
            .round_dp_with_strategy(scale as u32, RoundingStrategy::MidpointAwayFromZero)
            .abs()
            .to_string(),
        None => {
            tracing::debug!(magnitude, "Value outside decimal range, formatting as float");
            shortest_digits(magnitude, scale)
        }
    }
}

// Expands the shortest round-trip digits of a large float, so 1e30 renders
// as a one followed by thirty zeros rather than its exact binary value.
fn shortest_digits(magnitude: f64, scale: u8) -> String {
    let scientific = format!("{:e}", magnitude);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{:.*}", scale as usize, magnitude);
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if exponent < 0 {
        return format!("{:.*}", scale as usize, magnitude);
    }

    let mut digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let integer_len = exponent as usize + 1;
    if digits.len() <= integer_len {
        digits.push_str(&"0".repeat(integer_len - digits.len()));
        digits
    } else {
        let (integer, fraction) = digits.split_at(integer_len);
        format!("{}.{}", integer, fraction)
    }
}

// Drops trailing zeros beyond `min` digits and pads up to `min`.
fn trim_fraction(fraction: &str, min: usize) -> String {
    let mut fraction = fraction.trim_end_matches('0').to_string();
    while fraction.len() < min {
        fraction.push('0');
    }
    fraction
}

fn group_integer(integer: &str, locale: &Locale) -> String {
    match integer.parse::<u128>() {
        Ok(n) => n.to_formatted_string(locale),
        Err(_) => integer.to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn with_digits(min: u8, max: u8) -> FormatOptions {
        FormatOptions::default()
            .with_minimum_fraction_digits(min)
            .with_maximum_fraction_digits(max)
    }

    #[test]
    fn test_format_money_defaults() {
        let options = FormatOptions::default();
        assert_eq!("2,500", format_money(2500, &options));
        assert_eq!("1,234,567", format_money(1234567, &options));
        assert_eq!("999", format_money(999, &options));
        assert_eq!("0", format_money(0, &options));
    }

    #[test]
    fn test_format_money_missing_is_zero() {
        let options = FormatOptions::default();
        assert_eq!(format_money(0, &options), format_money(None::<f64>, &options));
        assert_eq!("0", format_money(AmountInput::Missing, &options));
        assert_eq!("0", format_money("abc", &options));
        assert_eq!("0", format_money(f64::NAN, &options));
    }

    #[test]
    fn test_format_money_text() {
        let options = FormatOptions::default();
        assert_eq!("2,500", format_money("2500", &options));
        assert_eq!("0", format_money("2,500", &options));
    }

    #[test]
    fn test_format_money_rounds_without_fraction() {
        let options = FormatOptions::default();
        assert_eq!("1,235", format_money(1234.5, &options));
        assert_eq!("1,234", format_money(1234.4, &options));
        assert_eq!("-3", format_money(-2.5, &options));
    }

    #[test]
    fn test_format_money_fraction_bounds() {
        assert_eq!("1.50", format_money(1.5, &with_digits(2, 2)));
        assert_eq!("1.5", format_money(1.5, &with_digits(0, 3)));
        assert_eq!("1", format_money(1.0, &with_digits(0, 3)));
        assert_eq!("0.13", format_money(0.125, &with_digits(0, 2)));
        assert_eq!("2,500.00", format_money(2500, &with_digits(2, 2)));
        assert_eq!("2,500.0", format_money(2500, &with_digits(1, 4)));
    }

    #[test]
    fn test_format_money_min_above_max() {
        let options = FormatOptions::default().with_minimum_fraction_digits(2);
        assert_eq!("12.30", format_money(12.3, &options));
    }

    #[test]
    fn test_format_money_negative() {
        assert_eq!("-1,234.56", format_money(-1234.56, &with_digits(0, 2)));
    }

    #[test]
    fn test_format_money_negative_zero_keeps_sign() {
        let options = FormatOptions::default();
        assert_eq!("-0", format_money(-0.4, &options));
        assert_eq!("-0", format_money(-0.0, &options));
        assert_eq!("-0.00", format_money(-0.001, &with_digits(2, 2)));
        assert_eq!("0", format_money(0.4, &options));
    }

    #[test]
    fn test_format_money_beyond_decimal_range() {
        let options = FormatOptions::default();
        let thousands = ",000".repeat(10);
        assert_eq!(format!("1{}", thousands), format_money(1e30, &options));
        assert_eq!(format!("-1{}", thousands), format_money(-1e30, &options));
        assert_eq!(
            format!("1{}.00", thousands),
            format_money(1e30, &with_digits(2, 2))
        );
        assert_eq!(format!("1{}", "0".repeat(40)), format_money(1e40, &options));
    }

    #[test]
    fn test_shortest_digits() {
        assert_eq!("1000", shortest_digits(1e3, 0));
        assert_eq!("1250", shortest_digits(1.25e3, 0));
        assert_eq!("12.5", shortest_digits(12.5, 2));
    }

    #[test]
    fn test_format_money_locales() {
        let indian = FormatOptions::default().with_locale("en-IN");
        assert_eq!("12,34,567", format_money(1234567, &indian));

        let german = FormatOptions::default()
            .with_locale("de")
            .with_minimum_fraction_digits(2)
            .with_maximum_fraction_digits(2);
        assert_eq!("1.234,50", format_money(1234.5, &german));
    }

    #[test]
    fn test_format_money_unknown_locale() {
        let options = FormatOptions::default().with_locale("not-a-locale");
        assert_eq!("2,500", format_money(2500, &options));
    }

    #[test]
    fn test_resolve_locale_underscore() {
        assert_eq!(resolve_locale("en-IN"), resolve_locale("en_IN"));
    }
}
