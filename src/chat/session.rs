use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use super::view::{Completion, SessionView};
use crate::api::ChatApi;
use crate::flags::ProfileFlag;
use crate::layout::{LayoutHints, TermGeometry};
use crate::render::MarkdownRenderer;
use crate::ui::{Spinner, Style};
use crate::{status, warn};

/// Configuration for a chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The chat API origin.
    pub endpoint: String,
}

impl SessionConfig {
    /// Creates a new session configuration.
    pub const fn new(endpoint: String) -> Self {
        Self { endpoint }
    }
}

/// An interactive chat session with the alt.f assistant.
///
/// Drives the [`SessionView`] state machine from a REPL-style prompt: plain
/// text becomes a chat request, slash commands control the session.
pub struct ChatSession<C: ChatApi> {
    config: SessionConfig,
    client: C,
    flag: ProfileFlag,
    renderer: MarkdownRenderer,
    view: SessionView,
}

impl<C: ChatApi> ChatSession<C> {
    /// Creates a new chat session over the given transport.
    pub fn new(
        config: SessionConfig,
        client: C,
        flag: ProfileFlag,
        renderer: MarkdownRenderer,
    ) -> Self {
        Self {
            config,
            client,
            flag,
            renderer,
            view: SessionView::new(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();
        ui::print_hint();
        ui::print_transcript(&self.renderer, &self.current_hints(), self.view.transcript());

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Ask about alt.f workspaces, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd) {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.submit(&text).await;
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        // An in-flight request (if any) must not touch the transcript once
        // the session is gone.
        self.view.dispose();

        ui::print_goodbye();
        Ok(())
    }

    fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => {
                ui::print_config(&self.config, self.flag.is_complete());
                true
            }
            SlashCommand::Help => {
                ui::print_help();
                true
            }
            SlashCommand::ToggleView => {
                self.view.toggle_open();
                if self.view.is_open() {
                    ui::print_transcript(
                        &self.renderer,
                        &self.current_hints(),
                        self.view.transcript(),
                    );
                } else {
                    ui::print_hidden_notice();
                }
                true
            }
            SlashCommand::Quit => false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
                true
            }
        }
    }

    /// Sends one message through the view-model and renders the result.
    ///
    /// Empty input and a still-pending request are both rejected inside
    /// `begin_submit` without side effects. The prompt loop puts focus back
    /// on the input afterwards no matter how the request went.
    async fn submit(&mut self, text: &str) {
        let Some(outbound) = self.view.begin_submit(text, self.flag.is_complete()) else {
            return;
        };

        let hints = self.current_hints();
        if self.view.is_open()
            && let Some(entry) = self.view.transcript().last()
        {
            ui::print_message(&self.renderer, &hints, entry);
        }

        let spinner = Spinner::new("Rahi is typing...");
        let outcome = self.client.send(&outbound).await;
        spinner.stop();

        if let Err(err) = &outcome {
            status!("{} {err:#}", Style::error("request failed:"));
        }

        let completion = self.view.complete(outcome);

        if completion == Completion::ReplyWithCompletionMarker
            && let Err(err) = self.flag.mark_complete()
        {
            warn!(
                "{} could not persist profile flag: {err:#}",
                Style::warning("Warning:")
            );
        }

        if completion != Completion::Discarded
            && self.view.is_open()
            && let Some(entry) = self.view.transcript().last()
        {
            ui::print_message(&self.renderer, &hints, entry);
        }
    }

    fn current_hints(&self) -> LayoutHints {
        let (cols, rows) = termimad::crossterm::terminal::size().unwrap_or((80, 24));
        LayoutHints::derive(TermGeometry::new(cols, rows, true))
    }
}
