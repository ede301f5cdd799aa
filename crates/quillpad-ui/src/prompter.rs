//! The UI's implementation of the prompt capability.
//!
//! String and integer answers were already collected by the in-window
//! dialogs before dispatch; this prompter replays them in order. File-path
//! prompts are serviced live with blocking `rfd` dialogs, which matches the
//! strictly synchronous command model: the whole command, dialogs included,
//! runs inside one update call.

use std::collections::VecDeque;
use std::path::PathBuf;

use quillpad_core::{Answer, FileFilter, Prompter};

pub struct UiPrompter {
    queued: VecDeque<Answer>,
}

impl UiPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            queued: answers.into_iter().collect(),
        }
    }

    fn dialog(filters: &[FileFilter]) -> rfd::FileDialog {
        let mut dialog = rfd::FileDialog::new();
        for filter in filters {
            dialog = dialog.add_filter(filter.name, filter.extensions);
        }
        dialog
    }
}

impl Prompter for UiPrompter {
    fn ask_string(&mut self, _title: &str, prompt: &str) -> Option<String> {
        match self.queued.pop_front() {
            Some(Answer::Str(s)) => Some(s),
            Some(Answer::Cancel) | None => None,
            Some(other) => {
                tracing::warn!(?other, prompt, "queued answer is not a string");
                None
            }
        }
    }

    fn ask_integer(&mut self, _title: &str, prompt: &str) -> Option<i64> {
        match self.queued.pop_front() {
            Some(Answer::Int(n)) => Some(n),
            Some(Answer::Cancel) | None => None,
            Some(other) => {
                tracing::warn!(?other, prompt, "queued answer is not an integer");
                None
            }
        }
    }

    fn pick_open_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf> {
        Self::dialog(filters).pick_file()
    }

    fn pick_save_path(
        &mut self,
        default_extension: &str,
        filters: &[FileFilter],
    ) -> Option<PathBuf> {
        let mut path = Self::dialog(filters)
            .set_file_name(format!("untitled.{default_extension}"))
            .save_file()?;
        if path.extension().is_none() {
            path.set_extension(default_extension);
        }
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_queued_answers() {
        let mut prompter = UiPrompter::new([Answer::text("abc"), Answer::Int(3)]);
        assert_eq!(prompter.ask_string("t", "p"), Some("abc".to_string()));
        assert_eq!(prompter.ask_integer("t", "p"), Some(3));
        assert_eq!(prompter.ask_string("t", "p"), None);
    }

    #[test]
    fn test_cancel_replays_as_none() {
        let mut prompter = UiPrompter::new([Answer::Cancel, Answer::Int(5)]);
        assert_eq!(prompter.ask_integer("t", "p"), None);
        assert_eq!(prompter.ask_integer("t", "p"), Some(5));
    }
}
