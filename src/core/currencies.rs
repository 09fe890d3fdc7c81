//! ISO 4217 currency codes and their minor units.
//!
//! Used to pick the number of fraction digits when printing amounts.
//! Codes outside the table are still accepted and printed with two digits.

/// Fraction digits used for codes missing from the table.
pub const DEFAULT_MINOR_UNITS: u32 = 2;

/// Check whether `code` is a known ISO 4217 currency code.
pub fn is_known_currency_code(code: &str) -> bool {
    lookup(code).is_some()
}

/// Number of fraction digits for `code` (e.g. 2 for "USD", 0 for "JPY").
pub fn minor_units(code: &str) -> u32 {
    lookup(code).unwrap_or(DEFAULT_MINOR_UNITS)
}

fn lookup(code: &str) -> Option<u32> {
    CURRENCIES
        .binary_search_by(|(c, _)| c.cmp(&code))
        .ok()
        .map(|i| CURRENCIES[i].1)
}

/// Sorted by code for binary search.
static CURRENCIES: &[(&str, u32)] = &[
    ("AED", 2), // UAE Dirham
    ("ARS", 2), // Argentine Peso
    ("AUD", 2), // Australian Dollar
    ("BGN", 2), // Bulgarian Lev
    ("BHD", 3), // Bahraini Dinar
    ("BRL", 2), // Brazilian Real
    ("CAD", 2), // Canadian Dollar
    ("CHF", 2), // Swiss Franc
    ("CLP", 0), // Chilean Peso
    ("CNY", 2), // Chinese Yuan
    ("COP", 2), // Colombian Peso
    ("CZK", 2), // Czech Koruna
    ("DKK", 2), // Danish Krone
    ("EGP", 2), // Egyptian Pound
    ("EUR", 2), // Euro
    ("GBP", 2), // Pound Sterling
    ("HKD", 2), // Hong Kong Dollar
    ("HUF", 2), // Hungarian Forint
    ("IDR", 2), // Indonesian Rupiah
    ("ILS", 2), // Israeli Shekel
    ("INR", 2), // Indian Rupee
    ("ISK", 0), // Icelandic Krona
    ("JOD", 3), // Jordanian Dinar
    ("JPY", 0), // Japanese Yen
    ("KES", 2), // Kenyan Shilling
    ("KRW", 0), // South Korean Won
    ("KWD", 3), // Kuwaiti Dinar
    ("MXN", 2), // Mexican Peso
    ("MYR", 2), // Malaysian Ringgit
    ("NOK", 2), // Norwegian Krone
    ("NZD", 2), // New Zealand Dollar
    ("OMR", 3), // Omani Rial
    ("PHP", 2), // Philippine Peso
    ("PLN", 2), // Polish Zloty
    ("RON", 2), // Romanian Leu
    ("SAR", 2), // Saudi Riyal
    ("SEK", 2), // Swedish Krona
    ("SGD", 2), // Singapore Dollar
    ("THB", 2), // Thai Baht
    ("TND", 3), // Tunisian Dinar
    ("TRY", 2), // Turkish Lira
    ("TWD", 2), // New Taiwan Dollar
    ("UGX", 0), // Ugandan Shilling
    ("USD", 2), // US Dollar
    ("VND", 0), // Vietnamese Dong
    ("XAF", 0), // Central African CFA Franc
    ("XOF", 0), // West African CFA Franc
    ("ZAR", 2), // South African Rand
];
