use std::io::Write;

use crate::command::dispatcher::Flow;
use crate::command::error::CommandError;
use crate::command::handlers::{assessments, marks, modules, students};
use crate::command::parser::{reject_arguments, ArgumentSpec};
use crate::model::module::ModuleList;
use crate::ui::Ui;

pub const HELP: ArgumentSpec = ArgumentSpec::new("help", &[], &[]);
pub const EXIT: ArgumentSpec = ArgumentSpec::new("exit", &[], &[]);

pub fn try_handle<W: Write>(
    _modules: &mut ModuleList,
    ui: &mut Ui<W>,
    keyword: &str,
    tail: &str,
) -> Option<Result<Flow, CommandError>> {
    match keyword {
        "help" => Some(help(ui, tail)),
        "exit" => Some(exit(ui, tail)),
        _ => None,
    }
}

fn help<W: Write>(ui: &mut Ui<W>, tail: &str) -> Result<Flow, CommandError> {
    reject_arguments(&HELP, tail)?;

    let specs = [
        &modules::ADD_MODULE,
        &modules::DELETE_MODULE,
        &modules::LIST_MODULES,
        &students::ADD_STUDENT,
        &students::DELETE_STUDENT,
        &students::LIST_STUDENTS,
        &assessments::ADD_ASSESSMENT,
        &assessments::DELETE_ASSESSMENT,
        &assessments::LIST_ASSESSMENTS,
        &marks::SET_MARKS,
        &marks::DELETE_MARKS,
        &marks::LIST_MARKS,
        &marks::AVERAGE_MARKS,
        &marks::MEDIAN_MARKS,
        &HELP,
        &EXIT,
    ];

    let mut message = String::from("Available commands:");
    for spec in specs {
        // Strip the "Usage: " prefix; help is already a usage listing.
        let usage = spec.usage();
        let line = usage.strip_prefix("Usage: ").unwrap_or(&usage).to_string();
        message.push_str(&format!("\n  {line}"));
    }
    ui.print_message(&message);
    Ok(Flow::Continue)
}

fn exit<W: Write>(ui: &mut Ui<W>, tail: &str) -> Result<Flow, CommandError> {
    reject_arguments(&EXIT, tail)?;
    ui.print_message("Exiting classbook. Goodbye!");
    Ok(Flow::Exit)
}
