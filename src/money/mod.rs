use crate::model::amount::{parse_number, AmountInput};
use crate::model::line::LineAmount;

/// Converts an amount in major units (naira) into whole cents.
///
/// Text is trimmed and stripped of thousands separators before parsing.
/// Anything that does not parse to a finite number is 0 cents.
pub fn to_cents<A: Into<AmountInput>>(value: A) -> i64 {
    let amount = match value.into() {
        AmountInput::Text(text) => parse_number(&text.replace(',', "")),
        other => other.to_number(),
    };

    // Out of range values saturate
    round_half_up(amount * 100.0) as i64
}

/// Rounds to the nearest whole number with ties toward positive infinity,
/// so -0.5 becomes 0 and 0.5 becomes 1.
fn round_half_up(n: f64) -> f64 {
    let floor = n.floor();
    if n - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Renders cents as a fixed two-digit major unit amount, e.g. `2500.00`.
pub fn cents_to_amount_string<A: Into<AmountInput>>(cents: A) -> String {
    let cents = round_half_up(cents.into().to_number()) as i64;
    format_currency(cents)
}

fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{0}{1}.{2:02}", sign, cents / 100, cents % 100)
}

/// Totals the cent amounts of a set of lines. Lines without a usable
/// amount contribute nothing, and no lines at all total 0.
pub fn sum_cents<'a, I, L>(lines: Option<I>) -> i64
where
    I: IntoIterator<Item = &'a L>,
    L: LineAmount + 'a,
{
    let Some(lines) = lines else {
        return 0;
    };

    let total: f64 = lines
        .into_iter()
        .map(|line| line.amount_cents().to_number())
        .sum();

    round_half_up(total) as i64
}
