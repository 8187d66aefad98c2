//! Parsing of the line commands typed at the prompt.
//!
//! Positions are 1-based on the command line and 0-based once parsed.

use study_core::{Difficulty, ValidationError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Show,
    Name(String),
    Date(String),
    Difficulty(Difficulty),
    ChapterAdd,
    ChapterSet(usize, String),
    ChapterRemove(usize),
    Submit,
    Delete(usize),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}`, type `help` for a list")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("`{0}` is not a position (use 1, 2, ...)")]
    BadPosition(String),

    #[error(transparent)]
    Difficulty(#[from] ValidationError),
}

pub const HELP: &str = "\
commands:
  list                      refetch subjects from the server
  show                      redraw the screen
  name <text>               set the subject name
  date <YYYY-MM-DD>         set the exam date
  difficulty <1-5>          set the difficulty
  chapter add               add an empty chapter slot
  chapter set <n> <text>    set chapter n
  chapter rm <n>            remove chapter n
  submit                    add the subject
  delete <n>                delete subject n from the list
  help                      show this help
  quit                      exit";

pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let (word, rest) = split_word(line);
    match word {
        "" => Err(ParseError::Empty),
        "list" | "refresh" => Ok(Command::List),
        "show" => Ok(Command::Show),
        "name" => Ok(Command::Name(rest.to_string())),
        "date" => Ok(Command::Date(rest.to_string())),
        "difficulty" => {
            let value: i64 = rest
                .parse()
                .map_err(|_| ParseError::Usage("difficulty <1-5>"))?;
            Ok(Command::Difficulty(Difficulty::new(value)?))
        }
        "chapter" => parse_chapter(rest),
        "submit" | "add" => Ok(Command::Submit),
        "delete" | "rm" => Ok(Command::Delete(position(rest)?)),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(ParseError::Unknown(other.to_string())),
    }
}

fn parse_chapter(args: &str) -> Result<Command, ParseError> {
    let (sub, rest) = split_word(args);
    match sub {
        "add" => Ok(Command::ChapterAdd),
        "set" => {
            let (n, text) = split_word(rest);
            if n.is_empty() {
                return Err(ParseError::Usage("chapter set <n> <text>"));
            }
            Ok(Command::ChapterSet(position(n)?, text.to_string()))
        }
        "rm" | "remove" => Ok(Command::ChapterRemove(position(rest)?)),
        _ => Err(ParseError::Usage("chapter add | chapter set <n> <text> | chapter rm <n>")),
    }
}

fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (s, ""),
    }
}

/// 1-based position to 0-based index.
fn position(s: &str) -> Result<usize, ParseError> {
    match s.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(ParseError::BadPosition(s.trim().to_string())),
    }
}
