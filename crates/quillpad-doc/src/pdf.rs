//! PDF export.
//!
//! Fixed-position text layout on a single US-letter page: every line is
//! drawn at the same x offset, advancing a constant leading per line. There
//! is no pagination - once the vertical space is exhausted, lines keep
//! running off the bottom of the page. That limitation is kept on purpose;
//! the layout constants live here so pagination has one place to land if it
//! is ever added.

use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, Mm, Pt, PdfDocument};

use crate::{DocError, DocResult};

/// US-letter page, in points.
const PAGE_WIDTH_PT: f32 = 612.0;
const PAGE_HEIGHT_PT: f32 = 792.0;

/// Left margin and first-baseline offset from the top, in points.
const LEFT_MARGIN_PT: f32 = 40.0;
const TOP_OFFSET_PT: f32 = 40.0;

/// Vertical advance per line, in points.
const LEADING_PT: f32 = 15.0;

/// Text size, in points.
const FONT_SIZE_PT: f32 = 12.0;

/// Writes `text` to `path` as a single-page PDF.
pub fn export_pdf(path: &Path, text: &str) -> DocResult<()> {
    tracing::debug!(path = %path.display(), "exporting buffer as pdf");

    let (doc, page, layer) = PdfDocument::new(
        "Quillpad export",
        Mm::from(Pt(PAGE_WIDTH_PT)),
        Mm::from(Pt(PAGE_HEIGHT_PT)),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| DocError::Pdf(e.to_string()))?;
    let layer = doc.get_page(page).get_layer(layer);

    let mut y = PAGE_HEIGHT_PT - TOP_OFFSET_PT;
    for line in text.trim().split('\n') {
        layer.use_text(
            line,
            FONT_SIZE_PT,
            Mm::from(Pt(LEFT_MARGIN_PT)),
            Mm::from(Pt(y)),
            &font,
        );
        y -= LEADING_PT;
    }

    let file = std::fs::File::create(path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| DocError::Pdf(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_pdf_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");

        export_pdf(&path, "line one\nline two\nline three").unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 100);
    }

    #[test]
    fn test_overflowing_page_still_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("long.pdf");

        // Far more lines than fit on one page; they run off the bottom
        // rather than starting a new page.
        let text = (0..200)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        export_pdf(&path, &text).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
