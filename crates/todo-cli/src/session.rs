//! Console session
//!
//! Owns the store and translates input lines into actions. Output is driven
//! by store listeners: every dispatch re-renders the visible todos.

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use anyhow::{Context, Result};
use todo_config::AppConfig;
use todo_reducers::{create_todo_store, TodoActionCreators, TodoState, TodoStore, VisibilityFilter};
use todo_store::Unsubscribe;

use crate::commands::{Command, HELP};
use crate::views;

/// Where the session writes rendered output
pub type Output = Rc<RefCell<dyn Write>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    store: TodoStore,
    creators: TodoActionCreators,
    output: Output,
    subscriptions: Vec<Unsubscribe>,
}

impl Session {
    pub fn new(config: &AppConfig, output: Output) -> Self {
        let store = create_todo_store();

        let mut subscriptions = vec![subscribe_render(&store, &output)];
        if config.echo_state {
            subscriptions.push(subscribe_state_echo(&store, &output));
        }

        if config.initial_filter != VisibilityFilter::default() {
            log::debug!("Applying initial filter {}", config.initial_filter);
            store.dispatch(TodoActionCreators::set_visibility_filter(config.initial_filter));
        }

        Self {
            store,
            creators: TodoActionCreators::new(),
            output,
            subscriptions,
        }
    }

    /// Read commands until input ends or `quit`.
    ///
    /// Bad commands are reported and skipped; only I/O failures end the
    /// session with an error.
    pub fn run(&mut self, input: impl BufRead, prompt: Option<&str>) -> Result<()> {
        let mut lines = input.lines();
        loop {
            if let Some(prompt) = prompt {
                let mut output = self.output.borrow_mut();
                write!(output, "{}", prompt)?;
                output.flush()?;
            }

            let Some(line) = lines.next() else { break };
            let line = line.context("Failed to read input")?;

            match self.handle_line(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => {
                    log::warn!("Command '{}' failed: {:#}", line.trim(), e);
                    self.print(&format!("error: {:#}", e))?;
                }
            }
        }
        Ok(())
    }

    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let Some(command) = Command::parse(line)? else {
            return Ok(Flow::Continue);
        };

        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Show => self.print(&views::render(&self.snapshot()?))?,
            Command::State => self.print(&serde_json::to_string_pretty(&self.snapshot()?)?)?,
            Command::Help => self.print(HELP)?,
            _ => {
                if let Some(action) = command.to_action(&mut self.creators)? {
                    self.store.dispatch(action);
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn snapshot(&self) -> Result<TodoState> {
        TodoState::from_tree(&self.store.get_state()).context("Store holds no todo state")
    }

    fn print(&self, text: &str) -> Result<()> {
        writeln!(self.output.borrow_mut(), "{}", text)?;
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        for subscription in &self.subscriptions {
            subscription.call();
        }
    }
}

fn subscribe_render(store: &TodoStore, output: &Output) -> Unsubscribe {
    let weak = store.downgrade();
    let output = Rc::clone(output);
    store.subscribe(move || {
        let Some(store) = weak.upgrade() else { return };
        match TodoState::from_tree(&store.get_state()) {
            Ok(state) => write_line(&output, &views::render(&state)),
            Err(e) => log::error!("Cannot render state: {}", e),
        }
    })
}

fn subscribe_state_echo(store: &TodoStore, output: &Output) -> Unsubscribe {
    let weak = store.downgrade();
    let output = Rc::clone(output);
    store.subscribe(move || {
        let Some(store) = weak.upgrade() else { return };
        let json = TodoState::from_tree(&store.get_state())
            .map_err(anyhow::Error::from)
            .and_then(|state| Ok(serde_json::to_string(&state)?));
        match json {
            Ok(json) => write_line(&output, &json),
            Err(e) => log::error!("Cannot serialize state: {:#}", e),
        }
    })
}

fn write_line(output: &Output, text: &str) {
    if let Err(e) = writeln!(output.borrow_mut(), "{}", text) {
        log::warn!("Failed to write output: {}", e);
    }
}
