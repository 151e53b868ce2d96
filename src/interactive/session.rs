use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, Pane, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::session::{Applied, MAX_SOURCE_CHARS, TranslationSession};
use crate::translation::Language;
use crate::ui::{Spinner, Style, is_prompt_cancelled, print_error, print_success, print_warning};

/// The interactive translation box.
///
/// Each prompt line is one user event. After handling it the loop waits for
/// the latest translation (Ctrl+C stops waiting without cancelling it), so
/// answers that land later are picked up before the next prompt.
pub struct InteractiveSession {
    session: TranslationSession,
    endpoint: String,
}

impl InteractiveSession {
    pub const fn new(session: TranslationSession, endpoint: String) -> Self {
        Self { session, endpoint }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();

        println!("{}", self.session.state().source_text());
        self.session.translate();
        self.settle_and_show().await;

        let render_config = render_config();

        loop {
            self.show_arrivals();

            let help = ui::language_line(self.session.state());
            let line = tokio::task::spawn_blocking(move || {
                Text::new("")
                    .with_render_config(render_config)
                    .with_autocomplete(SlashCommandCompleter)
                    .with_help_message(&help)
                    .prompt()
            })
            .await?;

            match line {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd).await {
                            break;
                        }
                    }
                    Input::Text(text) => self.edit_source(&text).await,
                },
                Err(e) if is_prompt_cancelled(&e) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    async fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::From(code) => {
                if let Some(lang) = parse_language(code.as_deref(), "/from") {
                    self.session.set_source_language(lang);
                    print_success(format!("Source language set to {}", Style::value(lang)));
                    self.settle_and_show().await;
                }
            }
            SlashCommand::To(code) => {
                if let Some(lang) = parse_language(code.as_deref(), "/to") {
                    self.session.set_target_language(lang);
                    print_success(format!("Target language set to {}", Style::value(lang)));
                    self.settle_and_show().await;
                }
            }
            SlashCommand::Swap => {
                self.session.swap();
                println!("{}", self.session.state().source_text());
                if self.session.state().is_pending() {
                    self.settle_and_show().await;
                } else {
                    ui::print_translation(self.session.state());
                }
            }
            SlashCommand::Translate => {
                self.session.translate();
                self.settle_and_show().await;
            }
            SlashCommand::Copy(pane) => self.copy(pane).await,
            SlashCommand::Speak(pane) => {
                let text = self.pane_text(pane).to_string();
                if text.is_empty() {
                    print_error("Nothing to speak");
                } else if let Err(e) = self.session.speak(&text).await {
                    print_error(e);
                }
            }
            SlashCommand::Status => ui::print_status(self.session.state(), &self.endpoint),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Quit => return false,
            SlashCommand::Unknown(cmd) => print_error(format!("Unknown command: /{cmd}")),
        }
        true
    }

    async fn edit_source(&mut self, text: &str) {
        if self.session.set_source_text(text) {
            print_warning(format!("Input truncated to {MAX_SOURCE_CHARS} characters"));
        }
        if !self.session.state().is_pending() {
            // Same text as before: nothing changed, show what we have.
            ui::print_translation(self.session.state());
            return;
        }
        self.settle_and_show().await;
    }

    async fn copy(&self, pane: Pane) {
        let text = self.pane_text(pane);
        if text.is_empty() {
            print_error("Nothing to copy");
            return;
        }
        match self.session.copy_to_clipboard(text).await {
            Ok(()) => print_success("Copied to clipboard!"),
            Err(e) => print_error(e),
        }
    }

    fn pane_text(&self, pane: Pane) -> &str {
        let state = self.session.state();
        match pane {
            Pane::Source => state.source_text(),
            Pane::Translation => state.translated_text(),
        }
    }

    /// Waits for the pending translation, if any, and shows the outcome.
    async fn settle_and_show(&mut self) {
        if !self.session.state().is_pending() {
            return;
        }

        let spinner = Spinner::new("Translating...");
        let settled = tokio::select! {
            applied = self.session.settle() => Some(applied),
            _ = tokio::signal::ctrl_c() => None,
        };
        spinner.stop();

        match settled {
            Some(applied) => self.show(applied),
            None => crate::status!(
                "{}",
                Style::secondary("Stopped waiting; the translation will appear when it arrives.")
            ),
        }
    }

    /// Shows responses that arrived while the prompt was open.
    fn show_arrivals(&mut self) {
        for applied in self.session.drain() {
            self.show(Some(applied));
        }
    }

    fn show(&self, applied: Option<Applied>) {
        match applied {
            Some(Applied::Updated) => ui::print_translation(self.session.state()),
            Some(Applied::Failed(err)) => print_error(err),
            Some(Applied::Stale) | None => {}
        }
    }
}

fn parse_language(code: Option<&str>, command: &str) -> Option<Language> {
    let Some(code) = code else {
        print_error(format!("Usage: {command} <en|fr|es>"));
        return None;
    };
    match code.parse() {
        Ok(lang) => Some(lang),
        Err(e) => {
            print_error(e);
            None
        }
    }
}

fn render_config() -> RenderConfig<'static> {
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

    render_config
}
