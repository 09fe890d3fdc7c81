use chrono::NaiveDate;

use super::error::ValidationError;
use super::types::*;
use super::validation;

/// Builder for constructing validated invoice requests in code.
///
/// ```
/// use tour_invoice::core::*;
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let request = InvoiceRequestBuilder::new(
///     "John Doe",
///     "Bali Explorer",
///     NaiveDate::from_ymd_opt(2026, 4, 5).unwrap(),
///     dec!(150),
/// )
/// .currency("usd")
/// .booking_id("bk_123456789")
/// .build()
/// .unwrap();
///
/// assert_eq!(request.currency(), "USD");
/// ```
pub struct InvoiceRequestBuilder {
    raw: RawInvoice,
}

impl InvoiceRequestBuilder {
    pub fn new(
        customer_name: impl Into<String>,
        guide_name: impl Into<String>,
        date: NaiveDate,
        price: impl Into<PriceInput>,
    ) -> Self {
        Self {
            raw: RawInvoice {
                customer_name: Some(TextInput::Text(customer_name.into())),
                guide_name: Some(TextInput::Text(guide_name.into())),
                date: Some(TextInput::Text(date.format("%Y-%m-%d").to_string())),
                price: Some(price.into()),
                currency: Some("USD".into()),
                ..Default::default()
            },
        }
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.raw.currency = Some(TextInput::Text(code.into()));
        self
    }

    pub fn booking_id(mut self, id: impl Into<String>) -> Self {
        self.raw.booking_id = Some(TextInput::Text(id.into()));
        self
    }

    pub fn payment_id(mut self, id: impl Into<String>) -> Self {
        self.raw.payment_id = Some(TextInput::Text(id.into()));
        self
    }

    pub fn locale(mut self, tag: impl Into<String>) -> Self {
        self.raw.locale = Some(TextInput::Text(tag.into()));
        self
    }

    /// Run validation and return the request or every problem found.
    pub fn build(self) -> Result<InvoiceRequest, ValidationError> {
        validation::validate(&self.raw)
    }
}
