//! Plain-text action scripts.
//!
//! One action per line; blank lines and `#` comments are skipped.
//!
//! ```text
//! select 1
//! add-text
//! content 2 Hello there
//! move 2 50 80
//! zoom-in
//! undo
//! ```

use std::str::FromStr;

use thiserror::Error;

use crate::editor::{Action, InputId, Position};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' is missing its {argument} argument")]
    MissingArgument {
        line: usize,
        command: String,
        argument: &'static str,
    },

    #[error("line {line}: invalid {argument} '{value}'")]
    InvalidNumber {
        line: usize,
        argument: &'static str,
        value: String,
    },

    #[error("line {line}: unexpected trailing input '{rest}'")]
    TrailingInput { line: usize, rest: String },
}

/// Parse a whole script. Line numbers in errors are 1-based.
pub fn parse_script(script: &str) -> Result<Vec<Action>, ScriptError> {
    let mut actions = Vec::new();
    for (idx, line) in script.lines().enumerate() {
        if let Some(action) = parse_line(line, idx + 1)? {
            actions.push(action);
        }
    }
    Ok(actions)
}

/// Parse one line; `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Action>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (command, rest) = split_word(line);
    let keyword = command.to_ascii_lowercase();
    let mut args = Args {
        line: line_no,
        command: &keyword,
        rest,
    };

    let action = match keyword.as_str() {
        "select" => Action::SelectImage(args.number("index")?),
        "add-text" => Action::AddTextInput,
        "zoom-in" => Action::ZoomIn,
        "zoom-out" => Action::ZoomOut,
        "rotate" => Action::Rotate,
        "content" => {
            let input = InputId(args.number("id")?);
            // the rest of the line is the text, which may be empty
            let content = std::mem::take(&mut args.rest).to_string();
            Action::UpdateContent { input, content }
        }
        "move" => {
            let input = InputId(args.number("id")?);
            let x = args.number("x")?;
            let y = args.number("y")?;
            Action::SavePosition {
                input,
                position: Position::new(x, y),
            }
        }
        "delete" => Action::DeleteText {
            input: InputId(args.number("id")?),
        },
        "restore" => Action::RestorePosition,
        "undo" => Action::Undo,
        "redo" => Action::Redo,
        "open" => {
            if args.rest.is_empty() {
                return Err(args.missing("src"));
            }
            let src = std::mem::take(&mut args.rest).to_string();
            Action::AddImage { src }
        }
        _ => {
            return Err(ScriptError::UnknownCommand {
                line: line_no,
                command: command.to_string(),
            });
        }
    };

    args.finish()?;
    Ok(Some(action))
}

fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(end) => (&s[..end], s[end..].trim()),
        None => (s, ""),
    }
}

struct Args<'a> {
    line: usize,
    command: &'a str,
    rest: &'a str,
}

impl<'a> Args<'a> {
    fn number<T: FromStr>(&mut self, argument: &'static str) -> Result<T, ScriptError> {
        let (word, rest) = split_word(self.rest);
        if word.is_empty() {
            return Err(self.missing(argument));
        }
        self.rest = rest;
        word.parse().map_err(|_| ScriptError::InvalidNumber {
            line: self.line,
            argument,
            value: word.to_string(),
        })
    }

    fn missing(&self, argument: &'static str) -> ScriptError {
        ScriptError::MissingArgument {
            line: self.line,
            command: self.command.to_string(),
            argument,
        }
    }

    fn finish(self) -> Result<(), ScriptError> {
        if self.rest.is_empty() {
            Ok(())
        } else {
            Err(ScriptError::TrailingInput {
                line: self.line,
                rest: self.rest.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_blank_and_comments() {
        let actions = parse_script("\n# setup\n  \nzoom-in\n").unwrap();
        assert_eq!(actions, vec![Action::ZoomIn]);
    }

    #[test]
    fn test_content_keeps_rest_of_line() {
        let action = parse_line("content 3   Hello   there ", 1).unwrap();
        assert_eq!(
            action,
            Some(Action::UpdateContent {
                input: InputId(3),
                content: "Hello   there".to_string(),
            })
        );
    }

    #[test]
    fn test_content_may_be_empty() {
        let action = parse_line("content 0", 1).unwrap();
        assert_eq!(
            action,
            Some(Action::UpdateContent {
                input: InputId(0),
                content: String::new(),
            })
        );
    }

    #[test]
    fn test_move() {
        let action = parse_line("MOVE 0 50 80.5", 1).unwrap();
        assert_eq!(
            action,
            Some(Action::SavePosition {
                input: InputId(0),
                position: Position::new(50.0, 80.5),
            })
        );
    }

    #[test]
    fn test_open_keeps_spaces() {
        let action = parse_line("open my pics/cat.png", 1).unwrap();
        assert_eq!(
            action,
            Some(Action::AddImage {
                src: "my pics/cat.png".to_string()
            })
        );
    }

    #[test]
    fn test_errors_carry_line_numbers() {
        assert_eq!(
            parse_script("undo\nflip").unwrap_err(),
            ScriptError::UnknownCommand {
                line: 2,
                command: "flip".to_string()
            }
        );
        assert_eq!(
            parse_line("move 0 5", 4).unwrap_err(),
            ScriptError::MissingArgument {
                line: 4,
                command: "move".to_string(),
                argument: "y"
            }
        );
        assert_eq!(
            parse_line("select one", 7).unwrap_err(),
            ScriptError::InvalidNumber {
                line: 7,
                argument: "index",
                value: "one".to_string()
            }
        );
        assert_eq!(
            parse_line("rotate twice", 2).unwrap_err(),
            ScriptError::TrailingInput {
                line: 2,
                rest: "twice".to_string()
            }
        );
        assert!(matches!(
            parse_line("open", 1),
            Err(ScriptError::MissingArgument { .. })
        ));
    }
}
