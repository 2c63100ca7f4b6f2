//! Command words for the interactive board

use crate::{AacError, Result};
use std::collections::HashMap;

/// Command identifier, before arguments are attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Select,
    Add,
    List,
    Category,
    Has,
    Back,
    Save,
    View,
    Help,
    Quit,
}

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select(String),
    Add { image: String, text: String },
    List,
    Category,
    Has(String),
    Back,
    Save(Option<String>),
    View,
    Help,
    Quit,
    /// A lone word that is not a command; may be an image on the current page
    Bare(String),
}

/// Create the table of command words and their aliases
pub fn create_command_table() -> HashMap<&'static str, CommandKind> {
    let mut map = HashMap::new();

    map.insert("select", CommandKind::Select);
    map.insert("s", CommandKind::Select);

    map.insert("add", CommandKind::Add);
    map.insert("a", CommandKind::Add);

    map.insert("list", CommandKind::List);
    map.insert("ls", CommandKind::List);

    map.insert("category", CommandKind::Category);
    map.insert("cat", CommandKind::Category);

    map.insert("has", CommandKind::Has);

    map.insert("back", CommandKind::Back);
    map.insert("reset", CommandKind::Back);
    map.insert("home", CommandKind::Back);

    map.insert("save", CommandKind::Save);
    map.insert("view", CommandKind::View);

    map.insert("help", CommandKind::Help);
    map.insert("?", CommandKind::Help);

    map.insert("quit", CommandKind::Quit);
    map.insert("exit", CommandKind::Quit);
    map.insert("q", CommandKind::Quit);

    map
}

/// Parse one input line, `None` for a blank line
pub fn parse_command(
    line: &str,
    table: &HashMap<&'static str, CommandKind>,
) -> Result<Option<Command>> {
    let line = line.trim_start();
    if line.trim_end().is_empty() {
        return Ok(None);
    }

    // Only `add` text keeps trailing spaces
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (line, ""),
    };
    let arg = rest.trim_end();

    let Some(kind) = table.get(word).copied() else {
        if arg.is_empty() {
            return Ok(Some(Command::Bare(word.to_string())));
        }
        return Err(AacError::Other(format!("Unknown command: {}", word)));
    };

    let command = match kind {
        CommandKind::Select => Command::Select(required(arg, "select IMAGE")?),
        CommandKind::Has => Command::Has(required(arg, "has IMAGE")?),
        CommandKind::Add => {
            let (image, text) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| usage("add IMAGE TEXT"))?;
            Command::Add {
                image: image.to_string(),
                text: text.to_string(),
            }
        }
        CommandKind::Save => Command::Save((!arg.is_empty()).then(|| arg.to_string())),
        CommandKind::List => Command::List,
        CommandKind::Category => Command::Category,
        CommandKind::Back => Command::Back,
        CommandKind::View => Command::View,
        CommandKind::Help => Command::Help,
        CommandKind::Quit => Command::Quit,
    };

    Ok(Some(command))
}

fn required(arg: &str, form: &str) -> Result<String> {
    if arg.is_empty() {
        Err(usage(form))
    } else {
        Ok(arg.to_string())
    }
}

fn usage(form: &str) -> AacError {
    AacError::Other(format!("Usage: {}", form))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Option<Command>> {
        parse_command(line, &create_command_table())
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(parse("   ").unwrap(), None);
    }

    #[test]
    fn test_aliases() {
        assert_eq!(parse("ls").unwrap(), Some(Command::List));
        assert_eq!(parse("home").unwrap(), Some(Command::Back));
        assert_eq!(parse("?").unwrap(), Some(Command::Help));
        assert_eq!(
            parse("s img/food/plate.png").unwrap(),
            Some(Command::Select("img/food/plate.png".to_string()))
        );
    }

    #[test]
    fn test_add_keeps_text_spaces() {
        assert_eq!(
            parse("add img/food/fries.png french fries").unwrap(),
            Some(Command::Add {
                image: "img/food/fries.png".to_string(),
                text: "french fries".to_string(),
            })
        );
        assert!(parse("add img/food/fries.png").is_err());
    }

    #[test]
    fn test_add_text_keeps_trailing_spaces() {
        assert_eq!(
            parse("add img/a.png  two  spaces ").unwrap(),
            Some(Command::Add {
                image: "img/a.png".to_string(),
                text: " two  spaces ".to_string(),
            })
        );
        assert_eq!(
            parse("add img/a.png\tapple").unwrap(),
            Some(Command::Add {
                image: "img/a.png".to_string(),
                text: "apple".to_string(),
            })
        );
        assert_eq!(
            parse("  select img/a.png  ").unwrap(),
            Some(Command::Select("img/a.png".to_string()))
        );
    }

    #[test]
    fn test_save_optional_path() {
        assert_eq!(parse("save").unwrap(), Some(Command::Save(None)));
        assert_eq!(
            parse("save out.txt").unwrap(),
            Some(Command::Save(Some("out.txt".to_string())))
        );
    }

    #[test]
    fn test_bare_word() {
        assert_eq!(
            parse("img/food/plate.png").unwrap(),
            Some(Command::Bare("img/food/plate.png".to_string()))
        );
        assert!(parse("frobnicate the board").is_err());
        assert!(parse("select").is_err());
    }
}
