//! # Quillpad UI
//!
//! Single-window UI built with iced.
//!
//! ## Architecture
//!
//! The UI follows the Elm architecture (TEA):
//! - **Model**: [`app::App`] - the editor session plus widget state
//! - **Message**: events (menu clicks, editor actions, prompt input)
//! - **Update**: applies a message, possibly dispatching a whole command
//! - **View**: menu bar, text area, thumbnail strip, status bar
//!
//! Commands are strictly synchronous: when the last prompt of a command is
//! answered, the entire command (file dialogs included) runs to completion
//! inside one `update` call before the interface responds to anything else.

pub mod app;
pub mod dialogs;
pub mod prompter;

pub use app::{run, App, Flags};
