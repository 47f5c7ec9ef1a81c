//! Centralized parsing for simulation scripts.
//!
//! The `simulate` command replays a script of carousel events, one per
//! line (or semicolon-separated on the command line):
//!
//! ```text
//! next          # arrow click, forward
//! prev          # arrow click, backward
//! goto 3        # bullet click on slide 3 (0-based)
//! settle        # transition-completion callback fires
//! tick 500      # advance the clock 500 ms
//! unmount       # tear the widget down
//! ```
//!
//! Blank lines and `#` comments are ignored.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command {command:?}")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: {command} requires a numeric argument")]
    MissingArgument { line: usize, command: String },
}

/// One simulation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    GoTo(usize),
    Settle,
    Tick(u64),
    Unmount,
}

impl Command {
    /// The label echoed in trace output.
    pub fn label(&self) -> String {
        match self {
            Command::Next => "next".to_string(),
            Command::Previous => "prev".to_string(),
            Command::GoTo(i) => format!("goto {i}"),
            Command::Settle => "settle".to_string(),
            Command::Tick(ms) => format!("tick {ms}"),
            Command::Unmount => "unmount".to_string(),
        }
    }
}

/// Parse a whole script: one command per line or semicolon-separated.
pub fn parse_script(input: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (idx, raw_line) in input.lines().enumerate() {
        for raw in raw_line.split(';') {
            let text = raw.split('#').next().unwrap_or("").trim();
            if text.is_empty() {
                continue;
            }
            commands.push(parse_command(text, idx + 1)?);
        }
    }
    Ok(commands)
}

fn parse_command(text: &str, line: usize) -> Result<Command, ScriptError> {
    let mut parts = text.split_whitespace();
    let word = parts.next().unwrap_or("");
    let arg = parts.next();
    match word {
        "next" => Ok(Command::Next),
        "prev" | "previous" => Ok(Command::Previous),
        "settle" => Ok(Command::Settle),
        "unmount" => Ok(Command::Unmount),
        "goto" => arg
            .and_then(|a| a.parse().ok())
            .map(Command::GoTo)
            .ok_or_else(|| ScriptError::MissingArgument {
                line,
                command: "goto".to_string(),
            }),
        "tick" => arg
            .and_then(|a| a.parse().ok())
            .map(Command::Tick)
            .ok_or_else(|| ScriptError::MissingArgument {
                line,
                command: "tick".to_string(),
            }),
        other => Err(ScriptError::UnknownCommand {
            line,
            command: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_multiline_script() {
        let script = "next\nprev\ngoto 2\nsettle\ntick 400\nunmount\n";
        let commands = parse_script(script).unwrap();
        assert_eq!(
            commands,
            vec![
                Command::Next,
                Command::Previous,
                Command::GoTo(2),
                Command::Settle,
                Command::Tick(400),
                Command::Unmount,
            ]
        );
    }

    #[test]
    fn parse_semicolon_separated() {
        let commands = parse_script("next; next; tick 400").unwrap();
        assert_eq!(
            commands,
            vec![Command::Next, Command::Next, Command::Tick(400)]
        );
    }

    #[test]
    fn comments_and_blanks_are_ignored() {
        let script = "# warm up\n\nnext  # first click\n";
        assert_eq!(parse_script(script).unwrap(), vec![Command::Next]);
    }

    #[test]
    fn unknown_command_reports_line() {
        let err = parse_script("next\nzoom\n").unwrap_err();
        assert_eq!(
            err,
            ScriptError::UnknownCommand {
                line: 2,
                command: "zoom".to_string()
            }
        );
    }

    #[test]
    fn goto_requires_argument() {
        let err = parse_script("goto").unwrap_err();
        assert!(matches!(err, ScriptError::MissingArgument { .. }));
        assert!(parse_script("goto x").is_err());
    }

    #[test]
    fn labels_echo_the_input() {
        assert_eq!(Command::GoTo(4).label(), "goto 4");
        assert_eq!(Command::Tick(250).label(), "tick 250");
    }
}
