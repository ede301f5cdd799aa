//! # Quillpad Doc
//!
//! Document and media backends for the editor: DOCX export, PDF export,
//! image thumbnailing and the static demonstration chart.
//!
//! Every function here is a one-shot, synchronous call - the editor session
//! invokes them on the UI thread and any failure aborts the current command.
//! Nothing in this crate holds state between calls.

pub mod chart;
pub mod docx;
pub mod image;
pub mod pdf;

pub use self::chart::{render_sample_chart, CHART_SIZE, CHART_TITLE};
pub use self::docx::export_docx;
pub use self::image::{make_thumbnail, Thumbnail, THUMBNAIL_BOUND};
pub use self::pdf::export_pdf;

/// Result type for document operations
pub type DocResult<T> = Result<T, DocError>;

/// Errors that can occur while producing documents or media.
///
/// The `printpdf` and `plotters` error types carry non-trivial generics and
/// lifetimes, so they are flattened to their messages at the boundary
/// instead of being wrapped with `#[from]`.
#[derive(Debug, thiserror::Error)]
pub enum DocError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] ::image::ImageError),

    #[error("DOCX write failed: {0}")]
    Docx(String),

    #[error("PDF write failed: {0}")]
    Pdf(String),

    #[error("Chart render failed: {0}")]
    Chart(String),
}
