use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Wire schema of a `POST /generate-invoice` body.
///
/// Every field is optional here so that a missing field surfaces as a
/// [`MissingField`](super::ErrorKind::MissingField) problem from
/// [`validate`](super::validate) rather than as a decode error. Values of
/// the wrong JSON type are kept too, so they can be reported per field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawInvoice {
    pub customer_name: Option<TextInput>,
    pub guide_name: Option<TextInput>,
    /// Booking date, `YYYY-MM-DD`.
    pub date: Option<TextInput>,
    pub price: Option<PriceInput>,
    /// ISO 4217 code (e.g. "USD").
    pub currency: Option<TextInput>,
    pub booking_id: Option<TextInput>,
    pub payment_id: Option<TextInput>,
    /// Locale tag such as "en_US" or "de-DE".
    pub locale: Option<TextInput>,
}

impl RawInvoice {
    /// Decode a JSON request body.
    ///
    /// Fails only when the body is not a JSON object.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

/// A text field as it arrives on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextInput {
    Text(String),
    /// Any non-string JSON value.
    Other(serde_json::Value),
}

impl TextInput {
    /// The string value, if the field was a JSON string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Other(_) => None,
        }
    }
}

impl From<String> for TextInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for TextInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A price as it arrives on the wire: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(serde_json::Number),
    Text(String),
    /// Booleans, arrays and objects.
    Other(serde_json::Value),
}

impl From<Decimal> for PriceInput {
    fn from(value: Decimal) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for PriceInput {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(Self::Number)
            .unwrap_or_else(|| Self::Text(value.to_string()))
    }
}

impl From<&str> for PriceInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Short name of a JSON value's type, for error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// A validated invoice record. Only [`validate`](super::validate) produces one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceRequest {
    pub(crate) customer_name: String,
    pub(crate) guide_name: String,
    pub(crate) date: NaiveDate,
    pub(crate) price: Decimal,
    pub(crate) currency: String,
    pub(crate) booking_id: Option<String>,
    pub(crate) payment_id: Option<String>,
    pub(crate) locale: Option<String>,
}

impl InvoiceRequest {
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn guide_name(&self) -> &str {
        &self.guide_name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Upper-cased currency code.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn booking_id(&self) -> Option<&str> {
        self.booking_id.as_deref()
    }

    pub fn payment_id(&self) -> Option<&str> {
        self.payment_id.as_deref()
    }

    /// Locale tag as supplied by the caller (trimmed), if any.
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }
}

/// Rendered PDF bytes for one invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDocument {
    /// Deterministic invoice number printed on the document.
    pub number: String,
    /// Suggested download filename (`invoice_<id>.pdf`).
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl InvoiceDocument {
    pub const CONTENT_TYPE: &'static str = "application/pdf";

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for InvoiceDocument {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
