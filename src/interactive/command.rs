use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/copy", "Copy the translation (/copy source for the input)"),
    ("/from", "Set the source language: /from <en|fr|es>"),
    ("/help", "Show available commands"),
    ("/quit", "Exit the translation box"),
    ("/speak", "Read the translation aloud (/speak source for the input)"),
    ("/status", "Show languages, texts and character count"),
    ("/swap", "Swap source and translation"),
    ("/to", "Set the target language: /to <en|fr|es>"),
    ("/translate", "Translate the current text again"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') || input.contains(' ') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Which side of the box a command acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Source,
    Translation,
}

/// Slash command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    From(Option<String>),
    To(Option<String>),
    Swap,
    Translate,
    Copy(Pane),
    Speak(Pane),
    Status,
    Help,
    Quit,
    Unknown(String),
}

/// Input types
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

/// Parses one prompt line.
///
/// Lines starting with `/` are commands; `//` escapes a literal leading
/// slash in text.
pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    if let Some(text) = input.strip_prefix("//") {
        return Input::Text(format!("/{text}"));
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();
    let arg = parts.get(1).map(ToString::to_string);

    let command = match parts.first().copied() {
        Some("from") => SlashCommand::From(arg),
        Some("to") => SlashCommand::To(arg),
        Some("swap") => SlashCommand::Swap,
        Some("translate" | "t") => SlashCommand::Translate,
        Some("copy") => parse_pane(parts.get(1).copied())
            .map_or_else(|| SlashCommand::Unknown(parts.join(" ")), SlashCommand::Copy),
        Some("speak") => parse_pane(parts.get(1).copied())
            .map_or_else(|| SlashCommand::Unknown(parts.join(" ")), SlashCommand::Speak),
        Some("status" | "config") => SlashCommand::Status,
        Some("help") => SlashCommand::Help,
        Some("quit" | "exit" | "q") => SlashCommand::Quit,
        _ => SlashCommand::Unknown(parts.join(" ")),
    };

    Input::Command(command)
}

fn parse_pane(arg: Option<&str>) -> Option<Pane> {
    match arg {
        None | Some("translation") => Some(Pane::Translation),
        Some("source") => Some(Pane::Source),
        Some(_) => None,
    }
}
