use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::{ErrorKind, FieldError, ValidationError};
use super::types::*;

/// Longest accepted text value for any field.
pub const MAX_TEXT_LEN: usize = 200;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate a raw request into an [`InvoiceRequest`].
/// Returns all field problems found (not just the first).
pub fn validate(raw: &RawInvoice) -> Result<InvoiceRequest, ValidationError> {
    let mut errors = Vec::new();

    let customer_name = required_text(raw.customer_name.as_ref(), "customer_name", &mut errors);
    let guide_name = required_text(raw.guide_name.as_ref(), "guide_name", &mut errors);
    let date = validate_date(raw.date.as_ref(), &mut errors);
    let price = validate_price(raw.price.as_ref(), &mut errors);
    let currency = validate_currency(raw.currency.as_ref(), &mut errors);
    let booking_id = optional_text(raw.booking_id.as_ref(), "booking_id", &mut errors);
    let payment_id = optional_text(raw.payment_id.as_ref(), "payment_id", &mut errors);
    let locale = validate_locale(raw.locale.as_ref(), &mut errors);

    match (customer_name, guide_name, date, price, currency) {
        (Some(customer_name), Some(guide_name), Some(date), Some(price), Some(currency))
            if errors.is_empty() =>
        {
            Ok(InvoiceRequest {
                customer_name,
                guide_name,
                date,
                price,
                currency,
                booking_id,
                payment_id,
                locale,
            })
        }
        _ => Err(ValidationError { errors }),
    }
}

/// Parse a booking date in strict `YYYY-MM-DD` form.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    // chrono accepts signs and unpadded fields; the wire format does not.
    if !has_iso_date_shape(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// `true` for ten bytes shaped `DDDD-DD-DD` with ASCII digits.
pub(crate) fn has_iso_date_shape(value: &str) -> bool {
    let b = value.as_bytes();
    b.len() == 10
        && b.iter().enumerate().all(|(i, c)| match i {
            4 | 7 => *c == b'-',
            _ => c.is_ascii_digit(),
        })
}

/// Parse a price into a decimal. Does not check the sign.
pub fn parse_price(input: &PriceInput) -> Option<Decimal> {
    let text = price_text(input)?;
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(&text)
        .ok()
        .or_else(|| parse_scientific(&text))
}

fn price_text(input: &PriceInput) -> Option<String> {
    match input {
        PriceInput::Number(n) => Some(n.to_string()),
        PriceInput::Text(s) => Some(s.trim().to_string()),
        PriceInput::Other(_) => None,
    }
}

fn parse_scientific(text: &str) -> Option<Decimal> {
    let (_, exponent) = text.split_once(['e', 'E'])?;
    let exponent: i32 = exponent.parse().ok()?;
    if exponent.abs() > 28 {
        return None;
    }
    Decimal::from_scientific(text).ok()
}

/// Trimmed string value of a text field, `Some(None)` when absent or blank.
/// A non-string JSON value is recorded as `InvalidFormat` and yields `None`.
fn string_field<'a>(
    value: Option<&'a TextInput>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<Option<&'a str>> {
    match value {
        None => Some(None),
        Some(TextInput::Text(s)) => Some(Some(s.trim()).filter(|v| !v.is_empty())),
        Some(TextInput::Other(v)) => {
            errors.push(FieldError::new(
                field,
                ErrorKind::InvalidFormat,
                format!("{field} must be a string, got {}", json_type_name(v)),
            ));
            None
        }
    }
}

fn check_length(value: &str, field: &str, errors: &mut Vec<FieldError>) -> bool {
    if value.chars().count() > MAX_TEXT_LEN {
        errors.push(FieldError::new(
            field,
            ErrorKind::InvalidValue,
            format!("{field} cannot exceed {MAX_TEXT_LEN} characters"),
        ));
        return false;
    }
    true
}

fn required_str<'a>(
    value: Option<&'a TextInput>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<&'a str> {
    let value = string_field(value, field, errors)?;
    if value.is_none() {
        errors.push(FieldError::missing(field));
    }
    value
}

fn required_text(value: Option<&TextInput>, field: &str, errors: &mut Vec<FieldError>) -> Option<String> {
    let value = required_str(value, field, errors)?;
    check_length(value, field, errors).then(|| value.to_string())
}

fn optional_text(value: Option<&TextInput>, field: &str, errors: &mut Vec<FieldError>) -> Option<String> {
    let value = string_field(value, field, errors)??;
    check_length(value, field, errors).then(|| value.to_string())
}

fn validate_date(value: Option<&TextInput>, errors: &mut Vec<FieldError>) -> Option<NaiveDate> {
    let value = required_str(value, "date", errors)?;
    let date = parse_date(value);
    if date.is_none() {
        errors.push(FieldError::new(
            "date",
            ErrorKind::InvalidFormat,
            format!("'{value}' is not a valid calendar date (expected YYYY-MM-DD)"),
        ));
    }
    date
}

fn validate_price(value: Option<&PriceInput>, errors: &mut Vec<FieldError>) -> Option<Decimal> {
    let Some(input) = value else {
        errors.push(FieldError::missing("price"));
        return None;
    };
    let Some(text) = price_text(input) else {
        errors.push(FieldError::new(
            "price",
            ErrorKind::InvalidValue,
            "price must be a number",
        ));
        return None;
    };
    if text.is_empty() {
        errors.push(FieldError::missing("price"));
        return None;
    }
    let Some(price) = parse_price(input) else {
        // Numeric, but beyond what a decimal price can hold.
        let message = if text.parse::<f64>().is_ok_and(f64::is_finite) {
            format!("price {text} is out of range")
        } else {
            "price must be a number".to_string()
        };
        errors.push(FieldError::new("price", ErrorKind::InvalidValue, message));
        return None;
    };
    if price.is_sign_negative() && !price.is_zero() {
        errors.push(FieldError::new(
            "price",
            ErrorKind::InvalidValue,
            format!("price must be greater than or equal to 0, got {price}"),
        ));
        return None;
    }
    Some(price.normalize().max(Decimal::ZERO))
}

fn validate_currency(value: Option<&TextInput>, errors: &mut Vec<FieldError>) -> Option<String> {
    let value = required_str(value, "currency", errors)?;
    let code = value.to_ascii_uppercase();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        errors.push(FieldError::new(
            "currency",
            ErrorKind::InvalidFormat,
            format!("currency '{value}' must be a 3-letter code (ISO 4217)"),
        ));
        return None;
    }
    Some(code)
}

fn validate_locale(value: Option<&TextInput>, errors: &mut Vec<FieldError>) -> Option<String> {
    let value = string_field(value, "locale", errors)??;
    let len = value.chars().count();
    if !(2..=10).contains(&len) {
        errors.push(FieldError::new(
            "locale",
            ErrorKind::InvalidFormat,
            format!("locale '{value}' must be between 2 and 10 characters"),
        ));
        return None;
    }
    Some(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawInvoice {
        RawInvoice {
            customer_name: Some("John Doe".into()),
            guide_name: Some("Bali Explorer".into()),
            date: Some("2026-04-05".into()),
            price: Some(150.0_f64.into()),
            currency: Some("USD".into()),
            ..Default::default()
        }
    }

    #[test]
    fn parse_date_is_strict() {
        assert_eq!(parse_date("2026-04-05"), NaiveDate::from_ymd_opt(2026, 4, 5));
        assert_eq!(parse_date(" 2024-02-29 "), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert!(parse_date("2026-13-45").is_none());
        assert!(parse_date("2025-02-29").is_none());
        assert!(parse_date("2026-4-5").is_none());
        assert!(parse_date("05.04.2026").is_none());
        assert!(parse_date("+999-01-01").is_none());
        assert!(parse_date("-999-01-01").is_none());
        assert!(parse_date(" 999-01-01").is_none());
    }

    #[test]
    fn parse_price_accepts_numbers_and_strings() {
        assert_eq!(parse_price(&150.0_f64.into()), Some(Decimal::new(150, 0)));
        assert_eq!(parse_price(&"99.95".into()), Some(Decimal::new(9995, 2)));
        assert_eq!(parse_price(&"1e3".into()), Some(Decimal::new(1000, 0)));
        assert_eq!(parse_price(&"abc".into()), None);
        assert_eq!(parse_price(&"1e300".into()), None);
        assert_eq!(parse_price(&PriceInput::Other(serde_json::json!(true))), None);
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut input = raw();
        input.guide_name = Some("   ".into());
        let err = validate(&input).unwrap_err();
        assert!(err.has("guide_name", ErrorKind::MissingField));
    }

    #[test]
    fn negative_zero_is_accepted() {
        let mut input = raw();
        input.price = Some("-0".into());
        let req = validate(&input).unwrap();
        assert_eq!(req.price(), Decimal::ZERO);
    }

    #[test]
    fn empty_optional_ids_are_absent() {
        let mut input = raw();
        input.booking_id = Some("".into());
        input.payment_id = Some("  ".into());
        let req = validate(&input).unwrap();
        assert_eq!(req.booking_id(), None);
        assert_eq!(req.payment_id(), None);
    }

    #[test]
    fn text_length_is_limited() {
        let mut input = raw();
        input.customer_name = Some("x".repeat(MAX_TEXT_LEN + 1).into());
        let err = validate(&input).unwrap_err();
        assert!(err.has("customer_name", ErrorKind::InvalidValue));
    }

    #[test]
    fn locale_length_is_checked() {
        let mut input = raw();
        input.locale = Some("x".into());
        assert!(validate(&input).unwrap_err().has("locale", ErrorKind::InvalidFormat));

        input.locale = Some("bad_locale".into());
        assert_eq!(validate(&input).unwrap().locale(), Some("bad_locale"));
    }

    #[test]
    fn non_numeric_price_types_are_invalid_values() {
        for value in [serde_json::json!(true), serde_json::json!([1]), serde_json::json!({"a": 1})] {
            let mut input = raw();
            input.price = Some(PriceInput::Other(value));
            let err = validate(&input).unwrap_err();
            assert_eq!(err.errors.len(), 1);
            assert!(err.has("price", ErrorKind::InvalidValue));
        }
    }

    #[test]
    fn huge_price_is_out_of_range() {
        let mut input = raw();
        input.price = Some(1.2345678901234568e29_f64.into());
        let err = validate(&input).unwrap_err();
        assert!(err.has("price", ErrorKind::InvalidValue));
        assert!(err.errors[0].message.contains("out of range"), "{err}");

        input.price = Some("abc".into());
        let err = validate(&input).unwrap_err();
        assert_eq!(err.errors[0].message, "price must be a number");
    }

    #[test]
    fn wrong_typed_text_fields_are_named() {
        let mut input = raw();
        input.customer_name = Some(TextInput::Other(serde_json::json!(42)));
        input.currency = Some(TextInput::Other(serde_json::json!(5)));
        input.booking_id = Some(TextInput::Other(serde_json::json!(false)));
        let err = validate(&input).unwrap_err();
        assert_eq!(err.fields(), vec!["customer_name", "currency", "booking_id"]);
        assert!(err.has("customer_name", ErrorKind::InvalidFormat));
        assert!(err.has("currency", ErrorKind::InvalidFormat));
        assert!(err.has("booking_id", ErrorKind::InvalidFormat));
        assert_eq!(err.errors[0].message, "customer_name must be a string, got number");
    }
}
