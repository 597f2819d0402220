mod commands;
mod logger;
mod session;
mod views;

use std::cell::RefCell;
use std::env;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::rc::Rc;

use anyhow::{Context, Result};
use todo_config::AppConfig;

use crate::session::{Output, Session};

fn main() -> Result<()> {
    let config = AppConfig::load();
    logger::init(&config.log_level);
    log::info!("Starting todo-cli");
    log::debug!("Config: {:?}", config);

    let stdout: Output = Rc::new(RefCell::new(io::stdout()));
    let mut session = Session::new(&config, stdout);

    match env::args().nth(1) {
        Some(path) => {
            log::info!("Running script {}", path);
            let file = File::open(&path).with_context(|| format!("Failed to open {}", path))?;
            session.run(BufReader::new(file), None)?;
        }
        None => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal().then_some(config.prompt.as_str());
            session.run(stdin.lock(), prompt)?;
        }
    }

    log::info!("Exiting todo-cli");
    Ok(())
}
