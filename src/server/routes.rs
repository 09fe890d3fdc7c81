use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

use super::AppState;
use super::error::ApiError;
use crate::core::{InvoiceDocument, RawInvoice, validate};

/// `POST /generate-invoice`: JSON invoice fields in, PDF bytes out.
pub async fn generate_invoice(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let raw = RawInvoice::from_json(&body)?;

    let request = validate(&raw).inspect_err(|e| {
        tracing::info!(fields = ?e.fields(), "rejected invoice request");
    })?;

    let document = state.renderer.render(&request)?;
    tracing::info!(invoice = %document.number, size = document.len(), "generated invoice");

    let disposition = format!("attachment; filename=\"{}\"", document.filename);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, InvoiceDocument::CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.into_bytes(),
    )
        .into_response())
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
