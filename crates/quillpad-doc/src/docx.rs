//! DOCX export.
//!
//! The buffer is exported as plain-text paragraphs only: the text is
//! trimmed, split on newlines, and every line becomes one unstyled
//! paragraph. Font, alignment and embedded images are deliberately not
//! carried over.

use std::path::Path;

use docx_rs::{Docx, Paragraph, Run};

use crate::{DocError, DocResult};

/// Writes `text` to `path` as a DOCX document, one paragraph per line.
pub fn export_docx(path: &Path, text: &str) -> DocResult<()> {
    tracing::debug!(path = %path.display(), "exporting buffer as docx");

    let mut docx = Docx::new();
    for line in text.trim().split('\n') {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)));
    }

    let file = std::fs::File::create(path)?;
    docx.build()
        .pack(file)
        .map_err(|e| DocError::Docx(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::DocumentChild;

    fn paragraph_texts(path: &Path) -> Vec<String> {
        let bytes = std::fs::read(path).unwrap();
        let parsed = docx_rs::read_docx(&bytes).unwrap();
        parsed
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(p) => Some(p.raw_text()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_one_paragraph_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");

        export_docx(&path, "first\nsecond\nthird\n").unwrap();

        let paragraphs = paragraph_texts(&path);
        assert_eq!(paragraphs, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_empty_buffer_yields_single_empty_paragraph() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.docx");

        export_docx(&path, "").unwrap();

        let paragraphs = paragraph_texts(&path);
        assert_eq!(paragraphs, vec![""]);
    }
}
