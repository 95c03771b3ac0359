//! Line-driven presentation layer over `TodoListController`.
//!
//! Items are addressed by their 1-based position in the rendered list.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;
use todo_core::{render, TodoId, TodoListController, Transport};

pub const HELP: &str = "\
commands:
  add [title]     set the draft to <title> (if given) and submit it
  draft [text]    replace the draft without submitting
  toggle <n>      flip completion of item n
  delete <n>      delete item n
  refresh         reload the list from the server
  help            show this help
  quit            leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Option<String>),
    Draft(String),
    Toggle(usize),
    Delete(usize),
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("unknown command `{0}` (type `help`)")]
    Unknown(String),

    #[error("`{0}` needs an item number")]
    MissingPosition(&'static str),

    #[error("`{0}` is not an item number")]
    InvalidPosition(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        match word.to_ascii_lowercase().as_str() {
            "add" | "a" => Ok(Command::Add((!rest.is_empty()).then(|| rest.to_string()))),
            "draft" => Ok(Command::Draft(rest.to_string())),
            "toggle" | "t" => parse_position("toggle", rest).map(Command::Toggle),
            "delete" | "d" | "rm" => parse_position("delete", rest).map(Command::Delete),
            "refresh" | "r" => Ok(Command::Refresh),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => Err(ParseCommandError::Unknown(word.to_string())),
        }
    }
}

fn parse_position(command: &'static str, arg: &str) -> Result<usize, ParseCommandError> {
    if arg.is_empty() {
        return Err(ParseCommandError::MissingPosition(command));
    }
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ParseCommandError::InvalidPosition(arg.to_string())),
    }
}

/// Id of the item shown at 1-based `position`.
fn id_at(controller: &TodoListController, position: usize) -> Option<TodoId> {
    controller
        .items()
        .get(position - 1)
        .map(|item| item.id.clone())
}

/// Load the list, then read commands from `input` until `quit` or EOF,
/// re-rendering the list to `output` after every state change.
pub fn run<T, R, W>(
    controller: &mut TodoListController,
    transport: &T,
    input: R,
    mut output: W,
) -> io::Result<()>
where
    T: Transport + ?Sized,
    R: BufRead,
    W: Write,
{
    controller.initialize(transport);
    write!(output, "{}", render(controller.state(), controller.locale()))?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        };
        match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            Command::Add(title) => {
                if let Some(title) = title {
                    controller.set_draft(title);
                }
                controller.submit_draft(transport);
            }
            Command::Draft(text) => controller.set_draft(text),
            Command::Refresh => controller.initialize(transport),
            Command::Toggle(position) => match id_at(controller, position) {
                Some(id) => controller.toggle_completion(transport, &id),
                None => {
                    writeln!(output, "no item at position {position}")?;
                    continue;
                }
            },
            Command::Delete(position) => match id_at(controller, position) {
                Some(id) => controller.remove_item(transport, &id),
                None => {
                    writeln!(output, "no item at position {position}")?;
                    continue;
                }
            },
        }
        write!(output, "{}", render(controller.state(), controller.locale()))?;
    }
    output.flush()
}
