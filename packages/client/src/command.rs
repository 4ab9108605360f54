//! Parsing of lines typed at the prompt.

/// What a line typed by the user asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    /// `/join <room>`: switch to another room
    Join(String),
    /// `/quit`: leave the chat
    Quit,
    /// Anything else is a chat message
    Say(String),
    /// A command that could not be understood
    Invalid(String),
}

impl UserInput {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let Some(command) = line.strip_prefix('/') else {
            return Self::Say(line.to_string());
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };
        match name {
            "join" if !arg.is_empty() => Self::Join(arg.to_string()),
            "join" => Self::Invalid("usage: /join <room>".to_string()),
            "quit" | "exit" => Self::Quit,
            other => Self::Invalid(format!("unknown command '/{}'", other)),
        }
    }
}
