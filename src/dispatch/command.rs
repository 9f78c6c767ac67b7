//! Bot command classification

/// A recognized bot command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/ask <query>`; the query is trimmed and may be empty
    Ask(String),
    /// `/start`
    Start,
    /// Anything else
    Unrecognized,
}

impl Command {
    pub fn parse(text: &str) -> Self {
        if text == "/start" {
            return Command::Start;
        }

        if text == "/ask" {
            return Command::Ask(String::new());
        }

        match text.strip_prefix("/ask ") {
            Some(rest) => Command::Ask(rest.trim().to_string()),
            None => Command::Unrecognized,
        }
    }

    /// Metrics label
    pub fn label(&self) -> &'static str {
        match self {
            Command::Ask(query) if query.is_empty() => "ask_empty",
            Command::Ask(_) => "ask",
            Command::Start => "start",
            Command::Unrecognized => "ignored",
        }
    }
}
