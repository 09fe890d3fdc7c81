//! # tour-invoice
//!
//! Turns the fields of a guided-tour booking (customer, guide, date, price,
//! currency, optional booking/payment ids and locale) into an invoice PDF.
//!
//! Two steps, both pure and synchronous:
//!
//! 1. [`validate`]: raw request → [`InvoiceRequest`] or a
//!    [`ValidationError`] listing every bad field.
//! 2. [`pdf::render`]: [`InvoiceRequest`] → PDF bytes or a [`RenderError`].
//!
//! Prices are [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use tour_invoice::core::*;
//!
//! let raw: RawInvoice = serde_json::from_str(r#"{
//!     "customer_name": "John Doe",
//!     "guide_name": "Bali Explorer",
//!     "date": "2026-04-05",
//!     "price": 150.0,
//!     "currency": "usd"
//! }"#).unwrap();
//!
//! let request = validate(&raw).unwrap();
//! assert_eq!(request.currency(), "USD");
//!
//! # #[cfg(feature = "pdf")]
//! # {
//! let document = tour_invoice::pdf::render(&request, &RenderConfig::default()).unwrap();
//! assert!(document.bytes.starts_with(b"%PDF-"));
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Request model, validation, formatting, invoice numbers |
//! | `pdf` (default) | PDF rendering and text extraction |
//! | `server` | axum service with `POST /generate-invoice` and the `tour-invoice` binary |
//! | `lambda` | Serve the same router on AWS Lambda |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "pdf")]
pub mod pdf;

#[cfg(feature = "server")]
pub mod server;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
