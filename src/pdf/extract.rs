use lopdf::Document;

use crate::core::RenderError;

/// Extract the visible text of every page, pages separated by newlines.
///
/// Each drawn text run ends up on its own line, in drawing order.
pub fn extract_text(pdf_bytes: &[u8]) -> Result<String, RenderError> {
    let doc = Document::load_mem(pdf_bytes)
        .map_err(|e| RenderError::new(format!("failed to load PDF: {e}")))?;

    let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
    if page_numbers.is_empty() {
        return Err(RenderError::new("PDF has no pages"));
    }

    doc.extract_text(&page_numbers)
        .map_err(|e| RenderError::new(format!("failed to extract text: {e}")))
}

/// Number of pages in a PDF.
pub fn page_count(pdf_bytes: &[u8]) -> Result<usize, RenderError> {
    let doc = Document::load_mem(pdf_bytes)
        .map_err(|e| RenderError::new(format!("failed to load PDF: {e}")))?;
    Ok(doc.get_pages().len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_is_an_error() {
        assert!(extract_text(b"not a pdf").is_err());
        assert!(page_count(b"").is_err());
    }
}
