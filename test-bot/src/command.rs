//! Command word parsing: `/name[@bot] args...`.

use dbot_core::COMMAND_MARKER;
use std::fmt;
use std::str::FromStr;

/// The closed set of commands this bot answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Start,
    Help,
    Ping,
    Info,
    Echo,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::Start,
        Command::Help,
        Command::Ping,
        Command::Info,
        Command::Echo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Help => "help",
            Command::Ping => "ping",
            Command::Info => "info",
            Command::Echo => "echo",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", COMMAND_MARKER, self.name())
    }
}

impl FromStr for Command {
    type Err = ();

    /// Case-insensitive, without the leading marker.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|cmd| cmd.name().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

/// How a message's text classifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandWord {
    /// Text does not start with the command marker.
    NotCommand,
    Known(Command),
    /// Starts with the marker but is not one of ours (or is addressed to another bot).
    Unknown(String),
}

/// Classifies `text`. A `@suffix` on the command word is stripped; when `bot_username` is known
/// the suffix must name this bot (case-insensitive), otherwise any suffix is accepted.
pub fn parse_command(text: &str, bot_username: Option<&str>) -> CommandWord {
    let Some(rest) = text.strip_prefix(COMMAND_MARKER) else {
        return CommandWord::NotCommand;
    };
    let word = rest.split_whitespace().next().unwrap_or("");
    let (name, target) = match word.split_once('@') {
        Some((name, target)) => (name, Some(target)),
        None => (word, None),
    };

    if let (Some(target), Some(me)) = (target, bot_username) {
        if !target.eq_ignore_ascii_case(me) {
            return CommandWord::Unknown(word.to_string());
        }
    }

    match name.parse::<Command>() {
        Ok(command) => CommandWord::Known(command),
        Err(()) => CommandWord::Unknown(word.to_string()),
    }
}
