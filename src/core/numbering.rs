use sha2::{Digest, Sha256};

use super::validation::has_iso_date_shape;

/// Default prefix for derived invoice numbers.
pub const DEFAULT_NUMBER_PREFIX: &str = "GB-INV";

/// Derive a deterministic, traceable invoice number.
///
/// Format: `{prefix}-{YYYYMMDD}-BK{hash7}-PY{hash7}-{check4}`, e.g.
/// `GB-INV-20260405-BK1A2B3C4-PY5D6E7F8-9A0B`.
///
/// The same booking, payment and date always yield the same number, so a
/// re-issued invoice carries the number of the first one. Absent ids hash
/// as the empty string. A date not shaped `YYYY-MM-DD` becomes `00000000`.
pub fn invoice_number(
    prefix: &str,
    booking_id: Option<&str>,
    payment_id: Option<&str>,
    booking_date: &str,
) -> String {
    let booking_id = booking_id.unwrap_or_default();
    let payment_id = payment_id.unwrap_or_default();
    let date_compact = compact_date(booking_date);

    let bk = short_hash(booking_id, 7);
    let py = short_hash(payment_id, 7);
    let check = short_hash(&format!("{date_compact}|{booking_id}|{payment_id}"), 4);

    format!("{prefix}-{date_compact}-BK{bk}-PY{py}-{check}")
}

fn compact_date(date: &str) -> String {
    if has_iso_date_shape(date) {
        date.replace('-', "")
    } else {
        "00000000".to_string()
    }
}

/// First `len` upper-case hex digits of SHA-256(`value`).
fn short_hash(value: &str, len: usize) -> String {
    let mut hex = hex::encode_upper(Sha256::digest(value.as_bytes()));
    hex.truncate(len);
    hex
}
