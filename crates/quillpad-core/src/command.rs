//! Menu commands and their synchronous dispatcher.
//!
//! Each command is one menu entry. Dispatch collects whatever interactive
//! input the command needs through the [`Prompter`] capability, then applies
//! the change to the session. Cancelled prompts and rejected keyboard input
//! resolve to [`Outcome::Skipped`]; only I/O, decode or render failures
//! surface as errors.

use quillpad_buffer::Alignment;

use crate::prompt::{FileFilter, Prompter};
use crate::session::EditorSession;
use crate::CoreResult;

/// The menu surface: File commands and Format commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // File menu
    NewFile,
    OpenFile,
    SaveFile,
    SaveAsDocx,
    SaveAsPdf,

    // Format menu
    ChangeFont,
    AlignText,
    CreateList,
    CreateTable,
    AddLink,
    AddImage,
    CreateChart,
}

impl Command {
    /// Returns the command's menu label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Command::NewFile => "New",
            Command::OpenFile => "Open",
            Command::SaveFile => "Save",
            Command::SaveAsDocx => "Save as DOCX",
            Command::SaveAsPdf => "Save as PDF",
            Command::ChangeFont => "Font",
            Command::AlignText => "Alignment",
            Command::CreateList => "Create list",
            Command::CreateTable => "Create table",
            Command::AddLink => "Add link",
            Command::AddImage => "Add image",
            Command::CreateChart => "Create chart",
        }
    }
}

/// What a dispatched command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The session was mutated (or a file was written).
    Applied,
    /// A prompt was cancelled or its input rejected; nothing changed.
    Skipped,
}

impl EditorSession {
    /// Runs one command to completion on the calling thread.
    pub fn run(&mut self, command: Command, prompter: &mut dyn Prompter) -> CoreResult<Outcome> {
        tracing::debug!(command = command.display_name(), "dispatching");

        match command {
            Command::NewFile => {
                self.new_file();
                Ok(Outcome::Applied)
            }

            Command::OpenFile => {
                match prompter.pick_open_path(&[FileFilter::TEXT, FileFilter::ALL]) {
                    Some(path) => {
                        self.open_from(&path)?;
                        Ok(Outcome::Applied)
                    }
                    None => Ok(Outcome::Skipped),
                }
            }

            Command::SaveFile => {
                match prompter.pick_save_path("txt", &[FileFilter::TEXT, FileFilter::ALL]) {
                    Some(path) => {
                        self.save_to(&path)?;
                        Ok(Outcome::Applied)
                    }
                    None => Ok(Outcome::Skipped),
                }
            }

            Command::SaveAsDocx => {
                match prompter.pick_save_path("docx", &[FileFilter::WORD, FileFilter::ALL]) {
                    Some(path) => {
                        self.export_docx(&path)?;
                        Ok(Outcome::Applied)
                    }
                    None => Ok(Outcome::Skipped),
                }
            }

            Command::SaveAsPdf => {
                match prompter.pick_save_path("pdf", &[FileFilter::PDF, FileFilter::ALL]) {
                    Some(path) => {
                        self.export_pdf(&path)?;
                        Ok(Outcome::Applied)
                    }
                    None => Ok(Outcome::Skipped),
                }
            }

            Command::ChangeFont => {
                // Both prompts are always shown, then both answers checked.
                let family = prompter.ask_string("Font", "Enter font family:");
                let size = prompter.ask_integer("Font size", "Enter font size:");

                match (family, size) {
                    (Some(family), Some(size)) if !family.is_empty() && size > 0 => {
                        let size = u16::try_from(size).unwrap_or(u16::MAX);
                        self.set_font(&family, size);
                        Ok(Outcome::Applied)
                    }
                    _ => Ok(Outcome::Skipped),
                }
            }

            Command::AlignText => {
                let keyword =
                    prompter.ask_string("Alignment", "Enter alignment (left/center/right):");

                match keyword.as_deref().map(str::parse::<Alignment>) {
                    Some(Ok(alignment)) => {
                        self.apply_alignment(alignment);
                        Ok(Outcome::Applied)
                    }
                    // Wrong keyword or cancellation: silently ignored.
                    _ => Ok(Outcome::Skipped),
                }
            }

            Command::CreateList => {
                let items =
                    prompter.ask_string("Create list", "Enter list items separated by commas:");

                match items {
                    Some(items) if !items.is_empty() => {
                        self.insert_list(&items);
                        Ok(Outcome::Applied)
                    }
                    _ => Ok(Outcome::Skipped),
                }
            }

            Command::CreateTable => {
                // Rows and columns are always both asked before validation.
                let rows = prompter.ask_integer("Create table", "Enter the number of rows:");
                let cols = prompter.ask_integer("Create table", "Enter the number of columns:");

                let (rows, cols) = match (rows, cols) {
                    (Some(r), Some(c)) if r > 0 && c > 0 => (r as usize, c as usize),
                    _ => return Ok(Outcome::Skipped),
                };

                // Row-major cell prompts; a cancelled cell becomes an empty
                // string, it does not abort the table.
                let mut table = Vec::with_capacity(rows);
                for r in 0..rows {
                    let mut row = Vec::with_capacity(cols);
                    for c in 0..cols {
                        let cell = prompter
                            .ask_string(
                                "Table",
                                &format!("Enter data for cell ({}, {}):", r + 1, c + 1),
                            )
                            .unwrap_or_default();
                        row.push(cell);
                    }
                    table.push(row);
                }

                self.insert_table(&table);
                Ok(Outcome::Applied)
            }

            Command::AddLink => {
                let text = prompter.ask_string("Add link", "Enter link text:");
                let url = prompter.ask_string("Add link", "Enter URL:");

                match (text, url) {
                    (Some(text), Some(url)) if !text.is_empty() && !url.is_empty() => {
                        self.add_link(&text, &url);
                        Ok(Outcome::Applied)
                    }
                    _ => Ok(Outcome::Skipped),
                }
            }

            Command::AddImage => match prompter.pick_open_path(&[FileFilter::IMAGES]) {
                Some(path) => {
                    self.insert_image(&path)?;
                    Ok(Outcome::Applied)
                }
                None => Ok(Outcome::Skipped),
            },

            Command::CreateChart => {
                // The chart is rendered to its fixed path up front, whether
                // or not anything gets embedded afterwards.
                self.render_chart()?;

                // The picked file is only a go-ahead: whatever the user
                // selects, the embedded image is reloaded from the fixed
                // chart path. See DESIGN.md - this indirection is kept
                // deliberately.
                match prompter.pick_open_path(&[FileFilter::PNG]) {
                    Some(_) => {
                        self.embed_chart()?;
                        Ok(Outcome::Applied)
                    }
                    None => Ok(Outcome::Skipped),
                }
            }
        }
    }
}
