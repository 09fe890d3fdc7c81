#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Errors are fine, panics are not.
    if let Ok(raw) = tour_invoice::RawInvoice::from_json(data) {
        let _ = tour_invoice::validate(&raw);
    }
});
