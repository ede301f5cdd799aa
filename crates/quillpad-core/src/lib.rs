//! # Quillpad Core
//!
//! Editor session and command dispatch.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                  EditorSession                        │
//! │  ┌────────────┐ ┌───────────┐ ┌───────────────────┐  │
//! │  │ TextBuffer │ │ FontSetting│ │ AlignTag stack    │  │
//! │  └────────────┘ └───────────┘ └───────────────────┘  │
//! │  ┌────────────────────┐ ┌─────────────────────────┐  │
//! │  │ Embedded thumbnails │ │ Scratch dir (chart.png) │  │
//! │  └────────────────────┘ └─────────────────────────┘  │
//! └──────────────────────────────────────────────────────┘
//!          ▲ run(Command, &mut dyn Prompter)
//! ```
//!
//! Every command runs to completion synchronously on the calling (UI)
//! thread. The session never prompts on its own - all interactive input
//! flows through the [`Prompter`] capability, which the UI implements with
//! real dialogs and tests implement with a scripted queue.

pub mod command;
pub mod config;
pub mod prompt;
pub mod session;

pub use command::{Command, Outcome};
pub use config::Config;
pub use prompt::{Answer, FileFilter, Prompter, ScriptedPrompter};
pub use session::{EditorSession, EmbeddedImage};

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations.
///
/// Cancelled prompts and malformed keyboard input are *not* errors - they
/// resolve to [`Outcome::Skipped`]. An error here means an I/O, decode or
/// render failure, which aborts the current command with no recovery.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Buffer error: {0}")]
    Buffer(#[from] quillpad_buffer::BufferError),

    #[error("Document error: {0}")]
    Doc(#[from] quillpad_doc::DocError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
