//! PDF upload checks and text extraction.

use thiserror::Error;
use tracing::warn;

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Please upload a PDF file.")]
    MissingFile,

    #[error("Only PDF files (.pdf) are supported right now.")]
    NotPdf,

    #[error("The uploaded file could not be read as a PDF: {0}")]
    Unreadable(String),

    #[error("I couldn't read any text from this PDF.")]
    NoText,
}

/// Checks the uploaded file name and leading bytes before extraction.
pub fn validate_upload(file_name: Option<&str>, bytes: &[u8]) -> Result<(), IngestError> {
    let file_name = file_name.unwrap_or("").trim();
    if file_name.is_empty() {
        return Err(IngestError::MissingFile);
    }
    if !file_name.to_ascii_lowercase().ends_with(".pdf") {
        return Err(IngestError::NotPdf);
    }
    if !bytes.starts_with(PDF_MAGIC) {
        return Err(IngestError::Unreadable(
            "missing %PDF- header".to_string(),
        ));
    }
    Ok(())
}

/// Extracts all page text from an in-memory PDF.
///
/// Runs on the blocking pool; a panic inside the PDF parser is reported as an
/// unreadable document rather than taking the worker down.
pub async fn text_of(bytes: Vec<u8>) -> Result<String, IngestError> {
    let extracted = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| {
            warn!("PDF extraction task failed: {e}");
            IngestError::Unreadable("the PDF parser crashed on this file".to_string())
        })?;

    let text = extracted.map_err(|e| IngestError::Unreadable(e.to_string()))?;
    if text.trim().is_empty() {
        return Err(IngestError::NoText);
    }
    Ok(text)
}

/// Builds a minimal one-page PDF whose page content stream is `content`,
/// with Helvetica available as `/F1`.
#[cfg(test)]
pub(crate) fn one_page_pdf(content: &str) -> Vec<u8> {
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Contents 4 0 R /Resources << /Font << /F1 5 0 R >> >> >>"
            .to_string(),
        format!(
            "<< /Length {} >>\nstream\n{content}\nendstream",
            content.len()
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref_start = pdf.len();
    pdf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    pdf.extend_from_slice(b"0000000000 65535 f \n");
    for offset in offsets {
        pdf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    pdf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_start}\n%%EOF\n",
            objects.len() + 1
        )
        .as_bytes(),
    );
    pdf
}
