//! Invoice PDF rendering.
//!
//! Draws a single-line-item invoice on A4 pages with the PDF built-in
//! Helvetica fonts, so no font files are loaded at runtime.
//!
//! | Block | Contents |
//! |-------|----------|
//! | Header | "INVOICE", issuer name and tagline |
//! | Invoice Details | invoice number, booking date, booking/payment ids when present |
//! | Bill To | customer name |
//! | Service | service label with guide name, amount |
//! | Total | amount |
//! | Footer | thank-you and auto-generated notes |

mod extract;
mod fonts;
mod layout;
mod render;

pub use extract::{extract_text, page_count};
pub use render::{Renderer, download_filename, render};
