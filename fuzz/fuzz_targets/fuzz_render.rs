#![no_main]

use libfuzzer_sys::fuzz_target;
use tour_invoice::{RawInvoice, RenderConfig, validate};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Anything that passes validation must render.
    let raw = RawInvoice {
        customer_name: Some(text.into()),
        guide_name: Some(text.into()),
        date: Some("2026-04-05".into()),
        price: Some("150".into()),
        currency: Some("USD".into()),
        booking_id: Some(text.into()),
        payment_id: None,
        locale: Some(text.into()),
    };
    if let Ok(request) = validate(&raw) {
        tour_invoice::pdf::render(&request, &RenderConfig::default()).unwrap();
    }
});
