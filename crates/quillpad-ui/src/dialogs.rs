//! Prompt sequences for the commands that need typed input.
//!
//! A command's string/integer prompts are collected one dialog at a time
//! before dispatch; file dialogs are serviced later, during dispatch, by
//! [`crate::prompter::UiPrompter`]. `next_step` is the single source of
//! truth for what to ask next given the answers so far - the table command
//! is the only dynamic case, since its cell count depends on the first two
//! answers.

use quillpad_core::{Answer, Command};

/// What kind of value the active dialog collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Text,
    Integer,
}

/// One modal dialog: a title, a question, and the expected value kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptStep {
    pub title: &'static str,
    pub label: String,
    pub kind: PromptKind,
}

impl PromptStep {
    fn text(title: &'static str, label: impl Into<String>) -> Self {
        Self {
            title,
            label: label.into(),
            kind: PromptKind::Text,
        }
    }

    fn integer(title: &'static str, label: impl Into<String>) -> Self {
        Self {
            title,
            label: label.into(),
            kind: PromptKind::Integer,
        }
    }
}

/// Returns the next dialog for `command` given the answers collected so
/// far, or `None` once the command is ready to dispatch.
///
/// The wording matches the prompts the dispatcher issues, so the collected
/// answers replay one-to-one.
pub fn next_step(command: Command, answers: &[Answer]) -> Option<PromptStep> {
    let idx = answers.len();
    match command {
        Command::ChangeFont => match idx {
            0 => Some(PromptStep::text("Font", "Enter font family:")),
            1 => Some(PromptStep::integer("Font size", "Enter font size:")),
            _ => None,
        },

        Command::AlignText => (idx == 0).then(|| {
            PromptStep::text("Alignment", "Enter alignment (left/center/right):")
        }),

        Command::CreateList => (idx == 0).then(|| {
            PromptStep::text("Create list", "Enter list items separated by commas:")
        }),

        Command::AddLink => match idx {
            0 => Some(PromptStep::text("Add link", "Enter link text:")),
            1 => Some(PromptStep::text("Add link", "Enter URL:")),
            _ => None,
        },

        Command::CreateTable => match idx {
            0 => Some(PromptStep::integer("Create table", "Enter the number of rows:")),
            1 => Some(PromptStep::integer(
                "Create table",
                "Enter the number of columns:",
            )),
            _ => {
                // One prompt per cell, row-major. If rows or cols were
                // cancelled or non-positive there is nothing more to ask -
                // the dispatcher will skip the command.
                let (rows, cols) = table_dims(answers)?;
                let cell = idx - 2;
                (cell < rows * cols).then(|| {
                    let r = cell / cols + 1;
                    let c = cell % cols + 1;
                    PromptStep::text("Table", format!("Enter data for cell ({r}, {c}):"))
                })
            }
        },

        // Everything else prompts only for file paths, at dispatch time.
        _ => None,
    }
}

fn table_dims(answers: &[Answer]) -> Option<(usize, usize)> {
    match (answers.first()?, answers.get(1)?) {
        (Answer::Int(r), Answer::Int(c)) if *r > 0 && *c > 0 => {
            Some((*r as usize, *c as usize))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_asks_family_then_size() {
        let first = next_step(Command::ChangeFont, &[]).unwrap();
        assert_eq!(first.kind, PromptKind::Text);

        let second = next_step(Command::ChangeFont, &[Answer::text("Georgia")]).unwrap();
        assert_eq!(second.kind, PromptKind::Integer);

        let done = next_step(
            Command::ChangeFont,
            &[Answer::text("Georgia"), Answer::Int(16)],
        );
        assert!(done.is_none());
    }

    #[test]
    fn test_table_cells_follow_dimensions() {
        let answers = vec![Answer::Int(2), Answer::Int(3)];
        let step = next_step(Command::CreateTable, &answers).unwrap();
        assert_eq!(step.label, "Enter data for cell (1, 1):");

        let mut answers = answers;
        for _ in 0..5 {
            answers.push(Answer::text("x"));
        }
        let last = next_step(Command::CreateTable, &answers).unwrap();
        assert_eq!(last.label, "Enter data for cell (2, 3):");

        answers.push(Answer::text("x"));
        assert!(next_step(Command::CreateTable, &answers).is_none());
    }

    #[test]
    fn test_table_stops_after_cancelled_dimension() {
        // Both dimensions are asked regardless, then collection ends.
        assert!(next_step(Command::CreateTable, &[Answer::Cancel]).is_some());
        assert!(next_step(Command::CreateTable, &[Answer::Cancel, Answer::Int(2)]).is_none());
        assert!(next_step(Command::CreateTable, &[Answer::Int(0), Answer::Int(2)]).is_none());
    }

    #[test]
    fn test_file_commands_have_no_typed_prompts() {
        for command in [
            Command::NewFile,
            Command::OpenFile,
            Command::SaveFile,
            Command::SaveAsDocx,
            Command::SaveAsPdf,
            Command::AddImage,
            Command::CreateChart,
        ] {
            assert!(next_step(command, &[]).is_none());
        }
    }
}
