//! # Quillpad Buffer
//!
//! Rope-backed text buffer plus the formatting value types the editor
//! session attaches to it (font setting, alignment tags).
//!
//! ## Key Concepts for Learning Rust
//!
//! ### Ownership & Borrowing
//! - `TextBuffer` owns the rope data structure
//! - `text()` returns a borrowed view (`Cow<str>`), cheap for small buffers
//! - Mutations require `&mut self` (exclusive access)
//!
//! ### Memory Safety
//! - No manual memory management needed
//! - The rope handles internal chunking; char indices are validated before
//!   every mutation to prevent out-of-bounds access

mod buffer;
mod format;

pub use buffer::TextBuffer;
pub use format::{AlignTag, Alignment, FontSetting};

/// Result type for buffer operations
pub type BufferResult<T> = Result<T, BufferError>;

/// Errors that can occur during buffer operations
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("Invalid character index: {0}")]
    InvalidCharIndex(usize),

    #[error("Line {0} is out of bounds")]
    LineOutOfBounds(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_creation() {
        let buffer = TextBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len_chars(), 0);
    }

    #[test]
    fn test_buffer_from_string() {
        let buffer = TextBuffer::from("Hello, World!");
        assert_eq!(buffer.len_chars(), 13);
        assert_eq!(buffer.text(), "Hello, World!");
    }

    #[test]
    fn test_append_and_clear() {
        let mut buffer = TextBuffer::new();
        buffer.append("Hello");
        buffer.append(", World!");
        assert_eq!(buffer.text(), "Hello, World!");

        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_line_operations() {
        let buffer = TextBuffer::from("Line 1\nLine 2\nLine 3");
        assert_eq!(buffer.len_lines(), 3);
        assert_eq!(buffer.line(0).unwrap(), "Line 1\n");
        assert_eq!(buffer.line(1).unwrap(), "Line 2\n");
        assert_eq!(buffer.line(2).unwrap(), "Line 3");
    }
}
