//! The editor session.
//!
//! `EditorSession` owns all of the editor's mutable state - the buffer, the
//! current font, the stacked alignment tags, the embedded thumbnails and the
//! scratch directory - as plain fields, passed explicitly to every command
//! handler. No process-wide singletons.

use std::path::{Path, PathBuf};

use quillpad_buffer::{AlignTag, Alignment, FontSetting, TextBuffer};
use quillpad_doc::Thumbnail;

use crate::config::Config;
use crate::CoreResult;

/// File name of the chart artifact inside the scratch directory. Fixed per
/// session and overwritten by every Create Chart invocation.
const CHART_FILE_NAME: &str = "chart.png";

/// A thumbnail flattened into the buffer.
///
/// Embedded images keep no structured identity: just the pixels and the
/// char index they were anchored at (always the end of the buffer at
/// insertion time).
#[derive(Debug, Clone)]
pub struct EmbeddedImage {
    pub thumbnail: Thumbnail,
    pub anchor: usize,
}

/// The single-window, single-buffer editor state.
pub struct EditorSession {
    buffer: TextBuffer,
    font: FontSetting,
    align_tags: Vec<AlignTag>,
    images: Vec<EmbeddedImage>,
    /// Scratch directory for thumbnail and chart artifacts. Artifacts live
    /// for the session's lifetime and are removed when it drops.
    scratch: tempfile::TempDir,
    config: Config,
}

impl EditorSession {
    /// Creates a session with default configuration.
    pub fn new() -> CoreResult<Self> {
        Self::with_config(Config::default())
    }

    /// Creates a session from an explicit configuration.
    pub fn with_config(config: Config) -> CoreResult<Self> {
        Ok(Self {
            buffer: TextBuffer::new(),
            font: config.startup_font(),
            align_tags: Vec::new(),
            images: Vec::new(),
            scratch: tempfile::TempDir::with_prefix("quillpad-")?,
            config,
        })
    }

    // ==================== File Operations ====================

    /// Clears the buffer unconditionally. No confirmation of unsaved
    /// changes; prior content, tags and embedded images are unrecoverable.
    /// The font setting survives - it is display state, not content.
    pub fn new_file(&mut self) {
        tracing::debug!("new file");
        self.buffer.clear();
        self.align_tags.clear();
        self.images.clear();
    }

    /// Replaces the buffer with the file's content, byte-for-byte.
    pub fn open_from(&mut self, path: &Path) -> CoreResult<()> {
        tracing::debug!(path = %path.display(), "opening file");
        self.buffer = TextBuffer::from_file(path)?;
        self.align_tags.clear();
        self.images.clear();
        Ok(())
    }

    /// Writes the buffer's full text to `path`, overwriting silently.
    pub fn save_to(&mut self, path: &Path) -> CoreResult<()> {
        tracing::debug!(path = %path.display(), "saving file");
        self.buffer.save_as(path)?;
        Ok(())
    }

    /// Exports the buffer as DOCX, one plain paragraph per line.
    pub fn export_docx(&self, path: &Path) -> CoreResult<()> {
        quillpad_doc::export_docx(path, &self.buffer.text())?;
        Ok(())
    }

    /// Exports the buffer as a single-page PDF.
    pub fn export_pdf(&self, path: &Path) -> CoreResult<()> {
        quillpad_doc::export_pdf(path, &self.buffer.text())?;
        Ok(())
    }

    // ==================== Format Operations ====================

    /// Replaces the global font setting.
    pub fn set_font(&mut self, family: &str, size: u16) {
        tracing::debug!(family, size, "font changed");
        self.font = FontSetting::new(family, size);
    }

    /// Pushes a justification tag spanning the entire current buffer.
    ///
    /// Tags stack; a later call never removes an earlier tag.
    pub fn apply_alignment(&mut self, alignment: Alignment) {
        tracing::debug!(%alignment, "alignment tag applied");
        self.align_tags
            .push(AlignTag::spanning(alignment, 0..self.buffer.len_chars()));
    }

    /// Appends one bulleted line per comma-separated item, trimmed.
    pub fn insert_list(&mut self, items: &str) {
        for item in items.split(',') {
            self.buffer.append(&format!("\u{2022} {}\n", item.trim()));
        }
    }

    /// Appends a tab-delimited table block plus a trailing blank line.
    ///
    /// Each row is its cells joined with '\t' and terminated by '\n'; the
    /// table is just printed glyphs, not a structure.
    pub fn insert_table(&mut self, rows: &[Vec<String>]) {
        for row in rows {
            self.buffer.append(&row.join("\t"));
            self.buffer.append("\n");
        }
        self.buffer.append("\n");
    }

    /// Appends "{text} ({url})\n". No real hyperlink object is created.
    pub fn add_link(&mut self, text: &str, url: &str) {
        self.buffer.append(&format!("{text} ({url})\n"));
    }

    /// Thumbnails the image at `path` and embeds it at the end of the
    /// buffer.
    pub fn insert_image(&mut self, path: &Path) -> CoreResult<()> {
        let thumbnail = quillpad_doc::make_thumbnail(path, self.scratch.path())?;
        self.images.push(EmbeddedImage {
            thumbnail,
            anchor: self.buffer.len_chars(),
        });
        Ok(())
    }

    /// (Re)renders the demonstration chart to the fixed per-session path,
    /// overwriting any previous chart.
    pub fn render_chart(&self) -> CoreResult<()> {
        quillpad_doc::render_sample_chart(&self.chart_path())?;
        Ok(())
    }

    /// Reloads the fixed chart path, thumbnails it and embeds it.
    pub fn embed_chart(&mut self) -> CoreResult<()> {
        let chart_path = self.chart_path();
        self.insert_image(&chart_path)
    }

    // ==================== State Queries ====================

    /// The full buffer text.
    pub fn text(&self) -> String {
        self.buffer.text().into_owned()
    }

    /// Replaces the buffer content (used by the UI to sync widget edits
    /// back into the session before a command runs). Tags and embedded
    /// images are left alone - only New/Open discard them.
    pub fn set_text(&mut self, text: &str) {
        if self.buffer.text() != text {
            self.buffer.replace_with(text);
        }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn font(&self) -> &FontSetting {
        &self.font
    }

    /// All alignment tags, in application order.
    pub fn align_tags(&self) -> &[AlignTag] {
        &self.align_tags
    }

    /// Display policy for the overlapping tag stack: the last-applied tag
    /// wins. The stack itself is preserved untouched.
    pub fn effective_alignment(&self) -> Option<Alignment> {
        self.align_tags.last().map(|tag| tag.alignment)
    }

    /// Embedded thumbnails, in insertion order.
    pub fn images(&self) -> &[EmbeddedImage] {
        &self.images
    }

    /// The fixed per-session chart artifact path.
    pub fn chart_path(&self) -> PathBuf {
        self.scratch.path().join(CHART_FILE_NAME)
    }

    /// The session's scratch directory.
    pub fn scratch_dir(&self) -> &Path {
        self.scratch.path()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_items_trimmed_and_bulleted() {
        let mut session = EditorSession::new().unwrap();
        session.insert_list("a, b ,c");
        assert_eq!(session.text(), "\u{2022} a\n\u{2022} b\n\u{2022} c\n");
    }

    #[test]
    fn test_list_appends_after_existing_content() {
        let mut session = EditorSession::new().unwrap();
        session.set_text("intro\n");
        session.insert_list("x,y");
        assert_eq!(session.text(), "intro\n\u{2022} x\n\u{2022} y\n");
    }

    #[test]
    fn test_table_block_with_trailing_blank_line() {
        let mut session = EditorSession::new().unwrap();
        session.insert_table(&[
            vec!["1".to_string(), "2".to_string()],
            vec!["3".to_string(), "4".to_string()],
        ]);
        assert_eq!(session.text(), "1\t2\n3\t4\n\n");
    }

    #[test]
    fn test_link_appended_as_plain_text() {
        let mut session = EditorSession::new().unwrap();
        session.add_link("Docs", "http://x");
        assert_eq!(session.text(), "Docs (http://x)\n");
    }

    #[test]
    fn test_alignment_tags_stack() {
        let mut session = EditorSession::new().unwrap();
        session.set_text("some text");
        session.apply_alignment(Alignment::Center);
        session.apply_alignment(Alignment::Left);

        let tags = session.align_tags();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].alignment, Alignment::Center);
        assert_eq!(tags[1].alignment, Alignment::Left);
        // Both span the full buffer; center was not removed by left.
        assert!(tags.iter().all(|t| t.start == 0 && t.end == 9));
        assert_eq!(session.effective_alignment(), Some(Alignment::Left));
    }

    #[test]
    fn test_new_file_discards_tags_and_images_keeps_font() {
        let mut session = EditorSession::new().unwrap();
        session.set_text("text");
        session.apply_alignment(Alignment::Right);
        session.set_font("Georgia", 16);

        session.new_file();
        assert!(session.buffer().is_empty());
        assert!(session.align_tags().is_empty());
        assert!(session.images().is_empty());
        assert_eq!(session.font(), &FontSetting::new("Georgia", 16));
    }

    #[test]
    fn test_open_replaces_buffer_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "line 1\nline 2\n").unwrap();

        let mut session = EditorSession::new().unwrap();
        session.set_text("stale content");
        session.apply_alignment(Alignment::Center);
        session.open_from(&path).unwrap();

        assert_eq!(session.text(), "line 1\nline 2\n");
        assert!(session.align_tags().is_empty());
    }

    #[test]
    fn test_open_missing_file_is_an_error() {
        let mut session = EditorSession::new().unwrap();
        let missing = session.scratch_dir().join("does-not-exist.txt");
        assert!(session.open_from(&missing).is_err());
    }

    #[test]
    fn test_chart_path_is_fixed_per_session() {
        let session = EditorSession::new().unwrap();
        assert_eq!(session.chart_path(), session.chart_path());
        assert_eq!(
            session.chart_path().file_name().unwrap(),
            "chart.png"
        );
    }
}
