//! Core text buffer implementation using a rope data structure.
//!
//! The editor owns exactly one of these. Every command reads or mutates it
//! synchronously; New and Open replace the content wholesale, Save and the
//! exports read it wholesale.

use ropey::Rope;
use std::path::Path;

use crate::{BufferError, BufferResult};

/// The single in-memory text content being edited.
///
/// # Thread Safety
///
/// `TextBuffer` is `Send` but not `Sync` - it is owned by the UI thread and
/// only ever touched there, so no locking discipline is required.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    /// The rope holding our text content
    rope: Rope,

    /// Whether the buffer has unsaved changes
    modified: bool,

    /// Associated file path (if any)
    file_path: Option<std::path::PathBuf>,
}

impl TextBuffer {
    /// Creates a new empty buffer.
    ///
    /// # Example
    /// ```
    /// use quillpad_buffer::TextBuffer;
    ///
    /// let buffer = TextBuffer::new();
    /// assert!(buffer.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            modified: false,
            file_path: None,
        }
    }

    /// Loads a buffer from a file, byte-for-byte.
    ///
    /// Fails if the file does not exist or is not valid UTF-8; the caller
    /// decides what to do with the error (the editor treats it as an
    /// unrecoverable command failure).
    pub fn from_file(path: impl AsRef<Path>) -> BufferResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        Ok(Self {
            rope: Rope::from_str(&content),
            modified: false,
            file_path: Some(path.to_path_buf()),
        })
    }

    /// Saves the buffer to a specific path, overwriting without confirmation.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> BufferResult<()> {
        let path = path.as_ref();

        // Write to a temporary file first, then rename (atomic write)
        let temp_path = path.with_extension("tmp");
        std::fs::write(&temp_path, self.text().as_bytes())?;
        std::fs::rename(&temp_path, path)?;

        self.file_path = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }

    // ==================== Text Access ====================

    /// Returns the entire text content as a `Cow<str>`.
    ///
    /// For small buffers this borrows; for buffers spanning multiple rope
    /// chunks it allocates.
    #[inline]
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        self.rope.slice(..).into()
    }

    /// Returns a specific line (0-indexed), including the trailing newline
    /// if present.
    pub fn line(&self, line_idx: usize) -> BufferResult<std::borrow::Cow<'_, str>> {
        if line_idx >= self.len_lines() {
            return Err(BufferError::LineOutOfBounds(line_idx));
        }
        Ok(self.rope.line(line_idx).into())
    }

    // ==================== Measurements ====================

    /// Returns true if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Returns the number of characters in the buffer.
    #[inline]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Returns the number of lines in the buffer.
    ///
    /// An empty buffer has 1 line. A buffer ending with `\n` counts
    /// the empty line after it.
    #[inline]
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    // ==================== Mutations ====================

    /// Appends text at the end of the buffer.
    ///
    /// Every insertion command (lists, tables, links) lands here - the
    /// insertion point is always the end of the buffer, never a cursor.
    pub fn append(&mut self, text: &str) {
        let end = self.rope.len_chars();
        self.rope.insert(end, text);
        self.modified = true;
    }

    /// Inserts text at a character index.
    pub fn insert(&mut self, char_idx: usize, text: &str) -> BufferResult<()> {
        if char_idx > self.len_chars() {
            return Err(BufferError::InvalidCharIndex(char_idx));
        }
        self.rope.insert(char_idx, text);
        self.modified = true;
        Ok(())
    }

    /// Clears the buffer unconditionally. Prior content is unrecoverable.
    pub fn clear(&mut self) {
        self.rope = Rope::new();
        self.modified = false;
        self.file_path = None;
    }

    /// Replaces the entire content, keeping the associated path untouched.
    pub fn replace_with(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.modified = true;
    }

    // ==================== State Queries ====================

    /// Returns true if the buffer has unsaved changes.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Returns the associated file path, if any.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for TextBuffer {
    fn from(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
            modified: false,
            file_path: None,
        }
    }
}

impl From<String> for TextBuffer {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_always_at_end() {
        let mut buffer = TextBuffer::from("start\n");
        buffer.append("middle\n");
        buffer.append("end\n");
        assert_eq!(buffer.text(), "start\nmiddle\nend\n");
    }

    #[test]
    fn test_insert_out_of_bounds() {
        let mut buffer = TextBuffer::from("ab");
        assert!(matches!(
            buffer.insert(3, "x"),
            Err(BufferError::InvalidCharIndex(3))
        ));
    }

    #[test]
    fn test_clear_resets_state() {
        let mut buffer = TextBuffer::from("content");
        buffer.append("!");
        assert!(buffer.is_modified());

        buffer.clear();
        assert!(buffer.is_empty());
        assert!(!buffer.is_modified());
        assert!(buffer.file_path().is_none());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        std::fs::write(&path, "alpha\nbeta\n").unwrap();

        let mut buffer = TextBuffer::from_file(&path).unwrap();
        assert_eq!(buffer.text(), "alpha\nbeta\n");
        assert!(!buffer.is_modified());

        // Saving with no edits reproduces the original file exactly.
        let out = dir.path().join("copy.txt");
        buffer.save_as(&out).unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "alpha\nbeta\n");
    }

    proptest::proptest! {
        #[test]
        fn prop_appends_concatenate(a in "\\PC*", b in "\\PC*") {
            let mut buffer = TextBuffer::from(a.as_str());
            buffer.append(&b);
            proptest::prop_assert_eq!(buffer.text(), format!("{a}{b}"));
        }
    }

    #[test]
    fn test_trailing_newline_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trailing.txt");
        std::fs::write(&path, "no final newline").unwrap();

        let buffer = TextBuffer::from_file(&path).unwrap();
        assert_eq!(buffer.text(), "no final newline");
    }
}
