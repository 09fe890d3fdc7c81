use chrono::Utc;
use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, Stream, dictionary};

use super::fonts::Font;
use super::layout::*;
use crate::core::{
    InvoiceDocument, InvoiceRequest, Locale, RenderConfig, RenderError, format_date,
    format_money, invoice_number,
};

const PRODUCER: &str = concat!("tour-invoice ", env!("CARGO_PKG_VERSION"));

/// Amount column starts this far left of the right margin.
const AMOUNT_COLUMN: f32 = 120.0;

/// Renders validated requests into PDF documents.
///
/// Holds only the read-only [`RenderConfig`]; one renderer can serve any
/// number of concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `request` into a PDF document.
    pub fn render(&self, request: &InvoiceRequest) -> Result<InvoiceDocument, RenderError> {
        render(request, &self.config)
    }
}

/// Render `request` into a PDF document using `config`.
///
/// The visible text depends only on the request and the configuration;
/// the creation timestamp in the document info is the only varying part.
#[tracing::instrument(skip_all, fields(currency = request.currency()))]
pub fn render(
    request: &InvoiceRequest,
    config: &RenderConfig,
) -> Result<InvoiceDocument, RenderError> {
    let date_iso = request.date().format("%Y-%m-%d").to_string();
    let number = invoice_number(
        &config.number_prefix,
        request.booking_id(),
        request.payment_id(),
        &date_iso,
    );

    let pages = layout_invoice(request, config, &number);
    let bytes = build_document(pages, &number)?;

    tracing::debug!(invoice = %number, size = bytes.len(), "rendered invoice");

    Ok(InvoiceDocument {
        filename: download_filename(request.booking_id(), &number),
        number,
        bytes,
    })
}

/// `invoice_<id>.pdf` with whitespace turned into `_` and anything outside
/// `[A-Za-z0-9._-]` dropped. Falls back to the invoice number.
pub fn download_filename(booking_id: Option<&str>, number: &str) -> String {
    let sanitize = |s: &str| -> String {
        s.trim()
            .chars()
            .filter_map(|c| match c {
                c if c.is_whitespace() => Some('_'),
                c if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') => Some(c),
                _ => None,
            })
            .collect()
    };
    let id = booking_id.map(sanitize).filter(|s| !s.is_empty());
    format!("invoice_{}.pdf", id.unwrap_or_else(|| sanitize(number)))
}

fn layout_invoice(
    request: &InvoiceRequest,
    config: &RenderConfig,
    number: &str,
) -> Vec<Vec<lopdf::content::Operation>> {
    let requested = request.locale().and_then(Locale::find);
    let number_locale = Locale::resolve(request.locale(), &config.default_locale);
    let amount = format_money(request.price(), request.currency(), number_locale);
    let booking_date = format_date(request.date(), requested);

    let mut page = PageWriter::new();

    // Header
    page.text(Font::Bold, 18.0, MARGIN_X, "INVOICE");
    page.text_at(
        Font::Regular,
        10.0,
        RIGHT_X - Font::Regular.text_width(&config.issuer_name, 10.0),
        page.y() + 2.0,
        &config.issuer_name,
    );
    page.text_at(
        Font::Regular,
        10.0,
        RIGHT_X - Font::Regular.text_width(&config.issuer_tagline, 10.0),
        page.y() - 12.0,
        &config.issuer_tagline,
    );
    page.rule_at(page.y() - 22.0, 1.0);

    // Invoice details
    page.advance(45.0);
    page.text(Font::Bold, 11.0, MARGIN_X, "Invoice Details");
    let mut details = vec![
        format!("Invoice No: {number}"),
        format!("Booking Date: {booking_date}"),
    ];
    if let Some(id) = request.booking_id() {
        details.push(format!("Booking ID: {id}"));
    }
    if let Some(id) = request.payment_id() {
        details.push(format!("Payment ID: {id}"));
    }
    for detail in details {
        for line in wrap_text(&detail, Font::Regular, 10.0, CONTENT_WIDTH) {
            page.advance(16.0);
            page.reserve(0.0);
            page.text(Font::Regular, 10.0, MARGIN_X, &line);
        }
    }

    // Bill to
    page.advance(40.0);
    page.reserve(18.0);
    page.text(Font::Bold, 11.0, MARGIN_X, "Bill To");
    for line in wrap_text(request.customer_name(), Font::Regular, 10.0, CONTENT_WIDTH) {
        page.advance(16.0);
        page.reserve(0.0);
        page.text(Font::Regular, 10.0, MARGIN_X, &line);
    }

    // Service table
    page.advance(40.0);
    page.reserve(28.0);
    page.text(Font::Bold, 11.0, MARGIN_X, "Service");
    page.text(Font::Bold, 11.0, RIGHT_X - AMOUNT_COLUMN, "Amount");
    page.rule_at(page.y() - 8.0, 0.8);

    let service = format!("{}: {}", config.service_label, request.guide_name());
    let service_width = CONTENT_WIDTH - AMOUNT_COLUMN - 20.0;
    page.advance(28.0);
    for (i, line) in wrap_text(&service, Font::Regular, 10.0, service_width)
        .iter()
        .enumerate()
    {
        if i > 0 {
            page.advance(14.0);
            page.reserve(0.0);
        }
        page.text(Font::Regular, 10.0, MARGIN_X, line);
        if i == 0 {
            page.text_right(Font::Regular, 10.0, RIGHT_X, &amount);
        }
    }

    // Total
    page.advance(42.0);
    page.reserve(14.0);
    page.rule_at(page.y() + 12.0, 0.8);
    page.advance(2.0);
    page.text(Font::Bold, 12.0, MARGIN_X, "TOTAL");
    page.text_right(Font::Bold, 12.0, RIGHT_X, &amount);

    // Footer
    page.text_at(Font::Regular, 9.0, MARGIN_X, FOOTER_Y, &config.thank_you_note);
    page.text_at(
        Font::Oblique,
        8.0,
        MARGIN_X,
        FOOTER_Y - 12.0,
        &config.generated_note,
    );

    page.finish()
}

fn build_document(
    pages: Vec<Vec<lopdf::content::Operation>>,
    number: &str,
) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut fonts = Dictionary::new();
    for font in Font::ALL {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(font.resource_name(), Object::Reference(font_id));
    }
    let resources_id = doc.add_object(dictionary! {
        "Font" => fonts,
    });

    let mut kids = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations };
        let encoded = content
            .encode()
            .map_err(|e| RenderError::new(format!("failed to encode page content: {e}")))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(PAGE_WIDTH.into()),
            Object::Real(PAGE_HEIGHT.into()),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(format!("Invoice {number}")),
        "Producer" => Object::string_literal(PRODUCER),
        "CreationDate" => Object::string_literal(
            Utc::now().format("D:%Y%m%d%H%M%SZ").to_string()
        ),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);
    doc.compress();

    let mut output = Vec::new();
    doc.save_to(&mut output)
        .map_err(|e| RenderError::new(format!("failed to save PDF: {e}")))?;
    Ok(output)
}
