//! Locale-aware amount and date formatting.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::currencies::minor_units;
use super::locale::Locale;

/// Format `amount` in `currency` for `locale`, e.g. `"1,500.00 USD"`.
///
/// The amount is rounded half-to-even to the currency's minor units.
pub fn format_money(amount: Decimal, currency: &str, locale: &Locale) -> String {
    let digits = minor_units(currency);
    format!("{} {}", format_amount(amount, digits, locale), currency)
}

/// Format a decimal with fixed fraction digits and locale separators.
pub fn format_amount(amount: Decimal, digits: u32, locale: &Locale) -> String {
    let rounded = amount.round_dp(digits);
    let plain = format!("{:.*}", digits as usize, rounded.abs());
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (plain.as_str(), None),
    };

    let mut out = String::with_capacity(plain.len() + plain.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, locale.group_separator));
    if let Some(frac) = frac_part {
        out.push(locale.decimal_separator);
        out.push_str(frac);
    }
    out
}

/// Format a booking date. Without a locale the ISO form is used.
pub fn format_date(date: NaiveDate, locale: Option<&Locale>) -> String {
    match locale {
        Some(l) => date.format(l.date_pattern).to_string(),
        None => date.format("%Y-%m-%d").to_string(),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
