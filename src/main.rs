mod calc;
mod command;
mod model;
mod storage;
mod ui;

use std::io::{self, BufRead};

use tracing_subscriber::EnvFilter;

use command::{dispatch, CommandError, Flow};
use model::module::ModuleList;
use storage::Storage;
use ui::Ui;

const GREETING: &str = "Welcome to classbook. Type help to list available commands.";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Optional first argument overrides where the snapshot lives.
    let data_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| storage::DEFAULT_DATA_PATH.to_string());
    let storage = Storage::new(data_path);
    let mut ui = Ui::stdout();

    let mut modules = match storage.load() {
        Ok(Some(modules)) => modules,
        Ok(None) => ModuleList::new(),
        Err(e) => {
            tracing::warn!("starting with an empty session: {e:#}");
            ui.print_message(&CommandError::InvalidState(format!("{e:#}")).to_string());
            ModuleList::new()
        }
    };

    ui.print_message(GREETING);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(v) => v,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        // Every command error is recoverable; report it and keep going.
        match dispatch(&mut modules, &mut ui, &storage, &line) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(e) => ui.print_message(&e.to_string()),
        }
    }
}
