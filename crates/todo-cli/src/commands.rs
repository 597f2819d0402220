//! Console commands
//!
//! Every input line is one command. Commands that change state translate to
//! exactly one todo action; the rest only read the store.

use std::str::FromStr;

use anyhow::{bail, Context, Result};
use todo_reducers::{TodoAction, TodoActionCreators, VisibilityFilter};

pub const HELP: &str = "\
Commands:
  add <text>                      add a todo
  toggle <id>                     toggle a todo
  filter all|active|completed     change the visibility filter
  json <action>                   dispatch a raw action record, e.g. {\"type\":\"TOGGLE_TODO\",\"id\":0}
  show                            print the visible todos
  state                           print the whole state as JSON
  help                            print this help
  quit                            exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(String),
    Toggle(u64),
    Filter(VisibilityFilter),
    Json(String),
    Show,
    State,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let command = match name {
            "add" => {
                if rest.is_empty() {
                    bail!("add needs the todo text");
                }
                Command::Add(rest.to_string())
            }
            "toggle" => Command::Toggle(
                rest.parse()
                    .with_context(|| format!("toggle needs a numeric id, got '{}'", rest))?,
            ),
            "filter" => Command::Filter(
                VisibilityFilter::from_str(rest)
                    .with_context(|| format!("unknown filter '{}'", rest))?,
            ),
            "json" => Command::Json(rest.to_string()),
            "show" => Command::Show,
            "state" => Command::State,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => bail!("unknown command '{}', try 'help'", other),
        };
        Ok(Some(command))
    }

    /// The action this command dispatches, if any
    pub fn to_action(&self, creators: &mut TodoActionCreators) -> Result<Option<TodoAction>> {
        let action = match self {
            Command::Add(text) => creators.add_todo(text.as_str()),
            Command::Toggle(id) => TodoActionCreators::toggle_todo(*id),
            Command::Filter(filter) => TodoActionCreators::set_visibility_filter(*filter),
            Command::Json(raw) => {
                TodoAction::from_json_str(raw).context("Failed to decode action record")?
            }
            Command::Show | Command::State | Command::Help | Command::Quit => return Ok(None),
        };
        Ok(Some(action))
    }
}
