//! The synchronous input-provider capability.
//!
//! Every command collects its interactive input through this trait: string
//! prompts, integer prompts and file dialogs, each modal, blocking and
//! independently cancellable. The UI implements it with real dialogs; tests
//! substitute [`ScriptedPrompter`].
//!
//! ## Learning: Traits as Capability Seams
//!
//! The session depends on `&mut dyn Prompter`, never on a concrete dialog
//! library. That keeps the whole command surface testable without a display
//! server - the only code that touches a real dialog lives in the UI crate.

use std::collections::VecDeque;
use std::path::PathBuf;

/// A named file-extension filter for open/save dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

impl FileFilter {
    pub const TEXT: FileFilter = FileFilter {
        name: "Text files",
        extensions: &["txt"],
    };
    pub const ALL: FileFilter = FileFilter {
        name: "All files",
        extensions: &["*"],
    };
    pub const WORD: FileFilter = FileFilter {
        name: "Word files",
        extensions: &["docx"],
    };
    pub const PDF: FileFilter = FileFilter {
        name: "PDF files",
        extensions: &["pdf"],
    };
    pub const IMAGES: FileFilter = FileFilter {
        name: "Image files",
        extensions: &["jpg", "jpeg", "png"],
    };
    pub const PNG: FileFilter = FileFilter {
        name: "Image files",
        extensions: &["png"],
    };
}

/// Synchronous, blocking input provider.
///
/// Returning `None` from any method means the user cancelled that prompt -
/// a deliberate no-op for the command in progress, never an error.
pub trait Prompter {
    /// Asks for a line of text.
    fn ask_string(&mut self, title: &str, prompt: &str) -> Option<String>;

    /// Asks for an integer.
    fn ask_integer(&mut self, title: &str, prompt: &str) -> Option<i64>;

    /// Asks the user to pick an existing file.
    fn pick_open_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf>;

    /// Asks the user for a destination file.
    fn pick_save_path(&mut self, default_extension: &str, filters: &[FileFilter])
        -> Option<PathBuf>;
}

/// One pre-scripted reply for [`ScriptedPrompter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Str(String),
    Int(i64),
    Path(PathBuf),
    /// The user dismissed the prompt.
    Cancel,
}

impl Answer {
    pub fn text(s: impl Into<String>) -> Self {
        Answer::Str(s.into())
    }

    pub fn path(p: impl Into<PathBuf>) -> Self {
        Answer::Path(p.into())
    }
}

/// A scripted test double answering prompts from a queue, in order.
///
/// An exhausted queue or a type mismatch answers as a cancellation; the
/// mismatch is logged since it usually means the script is out of step with
/// the command's prompt sequence.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
        }
    }

    /// True once every scripted answer has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.answers.is_empty()
    }

    fn pop(&mut self) -> Option<Answer> {
        self.answers.pop_front()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_string(&mut self, _title: &str, prompt: &str) -> Option<String> {
        match self.pop() {
            Some(Answer::Str(s)) => Some(s),
            Some(Answer::Cancel) | None => None,
            Some(other) => {
                tracing::warn!(?other, prompt, "scripted answer is not a string");
                None
            }
        }
    }

    fn ask_integer(&mut self, _title: &str, prompt: &str) -> Option<i64> {
        match self.pop() {
            Some(Answer::Int(n)) => Some(n),
            Some(Answer::Cancel) | None => None,
            Some(other) => {
                tracing::warn!(?other, prompt, "scripted answer is not an integer");
                None
            }
        }
    }

    fn pick_open_path(&mut self, _filters: &[FileFilter]) -> Option<PathBuf> {
        match self.pop() {
            Some(Answer::Path(p)) => Some(p),
            Some(Answer::Cancel) | None => None,
            Some(other) => {
                tracing::warn!(?other, "scripted answer is not a path");
                None
            }
        }
    }

    fn pick_save_path(
        &mut self,
        _default_extension: &str,
        _filters: &[FileFilter],
    ) -> Option<PathBuf> {
        match self.pop() {
            Some(Answer::Path(p)) => Some(p),
            Some(Answer::Cancel) | None => None,
            Some(other) => {
                tracing::warn!(?other, "scripted answer is not a path");
                None
            }
        }
    }
}
