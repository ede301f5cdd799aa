//! The iced application: model, messages, update and view.

use iced::widget::{button, column, container, image, row, text, text_editor, text_input, Column};
use iced::{Element, Font, Length, Task, Theme};

use quillpad_core::{Answer, Command, EditorSession, Outcome};

use crate::dialogs::{self, PromptKind, PromptStep};
use crate::prompter::UiPrompter;

/// Launch flags passed from the binary.
#[derive(Debug, Default)]
pub struct Flags {
    /// File to open at startup
    pub file: Option<std::path::PathBuf>,
}

/// Runs the application until the window closes.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(App::title, App::update, App::view)
        .theme(App::theme)
        .run_with(move || App::new(flags))
}

#[derive(Debug, Clone)]
pub enum Message {
    /// A menu entry was clicked.
    Menu(Command),
    /// The text area performed an action (typing, selection, scroll).
    Edit(text_editor::Action),
    /// The active prompt dialog's input changed.
    PromptInput(String),
    /// OK / Enter on the active prompt dialog.
    PromptSubmit,
    /// Cancel on the active prompt dialog.
    PromptCancel,
    /// File > Exit.
    Exit,
}

/// A command whose typed prompts are still being collected.
struct PromptFlow {
    command: Command,
    answers: Vec<Answer>,
    step: PromptStep,
    input: String,
}

pub struct App {
    session: EditorSession,
    content: text_editor::Content,
    thumbnails: Vec<image::Handle>,
    font: Font,
    status: String,
    prompt: Option<PromptFlow>,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut session = EditorSession::new().expect("failed to create editor session");

        if let Some(path) = &flags.file {
            if let Err(e) = session.open_from(path) {
                tracing::error!(error = %e, path = %path.display(), "could not open startup file");
            }
        }

        let content = text_editor::Content::with_text(&session.text());
        let font = display_font(&session.font().family);

        let app = Self {
            session,
            content,
            thumbnails: Vec::new(),
            font,
            status: "Ready".to_string(),
            prompt: None,
        };
        (app, Task::none())
    }

    pub fn title(&self) -> String {
        let name = self
            .session
            .buffer()
            .file_path()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string());

        let modified = if self.session.buffer().is_modified() {
            " *"
        } else {
            ""
        };

        format!("{name}{modified} - Quillpad")
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Menu(command) => {
                match dialogs::next_step(command, &[]) {
                    Some(step) => {
                        self.prompt = Some(PromptFlow {
                            command,
                            answers: Vec::new(),
                            step,
                            input: String::new(),
                        });
                    }
                    // No typed prompts: file dialogs (if any) happen inside
                    // dispatch.
                    None => self.dispatch(command, Vec::new()),
                }
            }

            Message::Edit(action) => {
                self.content.perform(action);
            }

            Message::PromptInput(value) => {
                if let Some(flow) = &mut self.prompt {
                    flow.input = value;
                }
            }

            Message::PromptSubmit => self.answer_prompt(false),
            Message::PromptCancel => self.answer_prompt(true),

            Message::Exit => return iced::exit(),
        }

        Task::none()
    }

    /// Records the active dialog's answer and either shows the next dialog
    /// or dispatches the command.
    fn answer_prompt(&mut self, cancelled: bool) {
        let Some(mut flow) = self.prompt.take() else {
            return;
        };

        let answer = if cancelled {
            Answer::Cancel
        } else {
            match flow.step.kind {
                PromptKind::Text => Answer::Str(flow.input.clone()),
                // Malformed integers are silently treated as a cancelled
                // prompt, same as dismissing the dialog.
                PromptKind::Integer => match flow.input.trim().parse::<i64>() {
                    Ok(n) => Answer::Int(n),
                    Err(_) => Answer::Cancel,
                },
            }
        };
        flow.answers.push(answer);

        match dialogs::next_step(flow.command, &flow.answers) {
            Some(step) => {
                flow.step = step;
                flow.input.clear();
                self.prompt = Some(flow);
            }
            None => self.dispatch(flow.command, flow.answers),
        }
    }

    /// Runs one command to completion, synchronously, on this thread.
    fn dispatch(&mut self, command: Command, answers: Vec<Answer>) {
        // Widget edits become the session's buffer before the command sees
        // it.
        self.session.set_text(&self.content.text());

        let mut prompter = UiPrompter::new(answers);
        match self.session.run(command, &mut prompter) {
            Ok(Outcome::Applied) => {
                self.status = command.display_name().to_string();
            }
            Ok(Outcome::Skipped) => {
                self.status = format!("{} cancelled", command.display_name());
            }
            Err(e) => {
                // No user-facing error surface; the fault is only logged.
                tracing::error!(error = %e, command = command.display_name(), "command failed");
            }
        }

        self.sync_from_session();
    }

    /// Pulls session state back into the widgets after a command ran.
    fn sync_from_session(&mut self) {
        let session_text = self.session.text();
        if self.content.text().trim_end_matches('\n') != session_text.trim_end_matches('\n') {
            self.content = text_editor::Content::with_text(&session_text);
        }

        self.font = display_font(&self.session.font().family);
        self.thumbnails = self
            .session
            .images()
            .iter()
            .map(|img| {
                image::Handle::from_rgba(
                    img.thumbnail.width,
                    img.thumbnail.height,
                    img.thumbnail.rgba.clone(),
                )
            })
            .collect();
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut layout = Column::new()
            .push(self.menu_bar())
            .spacing(4)
            .padding(4);

        if let Some(flow) = &self.prompt {
            layout = layout.push(prompt_dialog(flow));
        }

        let editor = text_editor(&self.content)
            .on_action(Message::Edit)
            .font(self.font)
            .size(f32::from(self.session.font().size))
            .height(Length::Fill);
        layout = layout.push(editor);

        if !self.thumbnails.is_empty() {
            let thumbs = row(self
                .thumbnails
                .iter()
                .map(|handle| image(handle.clone()).into()))
            .spacing(4);
            layout = layout.push(thumbs);
        }

        layout = layout.push(self.status_bar());
        layout.into()
    }

    fn menu_bar(&self) -> Element<'_, Message> {
        let idle = self.prompt.is_none();

        let entry = |command: Command| {
            button(text(command.display_name()).size(13))
                .padding([4, 8])
                .on_press_maybe(idle.then_some(Message::Menu(command)))
        };

        let file_menu = row![
            text("File").size(13),
            entry(Command::NewFile),
            entry(Command::OpenFile),
            entry(Command::SaveFile),
            entry(Command::SaveAsDocx),
            entry(Command::SaveAsPdf),
            button(text("Exit").size(13))
                .padding([4, 8])
                .on_press_maybe(idle.then_some(Message::Exit)),
        ]
        .spacing(4);

        let format_menu = row![
            text("Format").size(13),
            entry(Command::ChangeFont),
            entry(Command::AlignText),
            entry(Command::CreateList),
            entry(Command::CreateTable),
            entry(Command::AddLink),
            entry(Command::AddImage),
            entry(Command::CreateChart),
        ]
        .spacing(4);

        column![file_menu, format_menu].spacing(2).into()
    }

    fn status_bar(&self) -> Element<'_, Message> {
        let alignment = self
            .session
            .effective_alignment()
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string());

        text(format!(
            "{} | align: {} ({} tags) | {} images | {}",
            self.session.font(),
            alignment,
            self.session.align_tags().len(),
            self.session.images().len(),
            self.status,
        ))
        .size(12)
        .into()
    }
}

fn prompt_dialog(flow: &PromptFlow) -> Element<'_, Message> {
    container(
        column![
            text(flow.step.title).size(14),
            text(&flow.step.label).size(13),
            text_input("", &flow.input)
                .on_input(Message::PromptInput)
                .on_submit(Message::PromptSubmit)
                .padding(6),
            row![
                button(text("OK").size(13)).on_press(Message::PromptSubmit),
                button(text("Cancel").size(13)).on_press(Message::PromptCancel),
            ]
            .spacing(8),
        ]
        .spacing(6),
    )
    .padding(10)
    .style(container::bordered_box)
    .into()
}

/// iced fonts need a `'static` family name. Families are interned so a
/// given family leaks at most one small string for the lifetime of the
/// process, no matter how often the font changes.
fn display_font(family: &str) -> Font {
    use std::collections::HashMap;
    use std::sync::{Mutex, OnceLock};

    static FAMILIES: OnceLock<Mutex<HashMap<String, &'static str>>> = OnceLock::new();

    let mut families = FAMILIES
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .expect("font family interner poisoned");
    let name: &'static str = *families
        .entry(family.to_owned())
        .or_insert_with(|| Box::leak(family.to_owned().into_boxed_str()));
    Font::with_name(name)
}
