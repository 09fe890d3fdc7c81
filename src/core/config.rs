use super::error::InvoiceError;
use super::locale::{FALLBACK_LOCALE, Locale};
use super::numbering::DEFAULT_NUMBER_PREFIX;

/// Process-wide rendering settings.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Locale for number formatting when the request has none or an unknown one.
    pub default_locale: String,
    /// Issuer shown in the document header.
    pub issuer_name: String,
    pub issuer_tagline: String,
    /// Prefix of derived invoice numbers.
    pub number_prefix: String,
    /// Label before the guide name in the service row.
    pub service_label: String,
    pub thank_you_note: String,
    pub generated_note: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_locale: FALLBACK_LOCALE.to_string(),
            issuer_name: "Guide Booker".to_string(),
            issuer_tagline: "Invoice PDF Generator Service".to_string(),
            number_prefix: DEFAULT_NUMBER_PREFIX.to_string(),
            service_label: "Guided Tour".to_string(),
            thank_you_note: "Thank you for your booking!".to_string(),
            generated_note: "This invoice was generated automatically.".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_locale(mut self, tag: impl Into<String>) -> Self {
        self.default_locale = tag.into();
        self
    }

    pub fn issuer_name(mut self, name: impl Into<String>) -> Self {
        self.issuer_name = name.into();
        self
    }

    pub fn issuer_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.issuer_tagline = tagline.into();
        self
    }

    pub fn number_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.number_prefix = prefix.into();
        self
    }

    pub fn service_label(mut self, label: impl Into<String>) -> Self {
        self.service_label = label.into();
        self
    }

    pub fn thank_you_note(mut self, note: impl Into<String>) -> Self {
        self.thank_you_note = note.into();
        self
    }

    pub fn generated_note(mut self, note: impl Into<String>) -> Self {
        self.generated_note = note.into();
        self
    }

    /// Reject settings that would only fail later, at render time.
    pub fn check(&self) -> Result<(), InvoiceError> {
        if Locale::find(&self.default_locale).is_none() {
            return Err(InvoiceError::Config(format!(
                "unknown default locale '{}'",
                self.default_locale
            )));
        }
        if self.number_prefix.trim().is_empty() {
            return Err(InvoiceError::Config(
                "invoice number prefix must not be empty".into(),
            ));
        }
        Ok(())
    }
}
