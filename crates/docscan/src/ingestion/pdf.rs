//! PDF text-layer extraction
//!
//! Reads embedded text only; scanned PDFs without a text layer come back empty.

use crate::error::{Error, Result};

/// Page-ordered PDF text extractor
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    /// Extract text for every page, ordered by page number
    pub fn page_texts(data: &[u8]) -> Result<Vec<String>> {
        let doc = lopdf::Document::load_mem(data).map_err(|e| Error::pdf_parse(e.to_string()))?;

        // get_pages is keyed by 1-based page number, so iteration is in page order
        doc.get_pages()
            .keys()
            .map(|&page_number| {
                doc.extract_text(&[page_number])
                    .map_err(|e| Error::pdf_parse(format!("page {}: {}", page_number, e)))
            })
            .collect()
    }

    /// Extract the whole document as one string
    pub fn extract(data: &[u8]) -> Result<String> {
        let pages = Self::page_texts(data)?;
        tracing::debug!("Extracted text from {} PDF pages", pages.len());
        Ok(pages.concat())
    }
}
