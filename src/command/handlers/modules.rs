use std::io::Write;

use crate::command::dispatcher::Flow;
use crate::command::error::CommandError;
use crate::command::handlers::persist;
use crate::command::parser::{parse_required, reject_arguments, ArgumentSpec};
use crate::model::module::{Module, ModuleList};
use crate::storage::Storage;
use crate::ui::Ui;

pub const ADD_MODULE: ArgumentSpec =
    ArgumentSpec::new("add_module", &['c', 'n'], &["MODULE_CODE", "MODULE_NAME"]);
pub const DELETE_MODULE: ArgumentSpec =
    ArgumentSpec::new("delete_module", &['c'], &["MODULE_CODE"]);
pub const LIST_MODULES: ArgumentSpec = ArgumentSpec::new("list_modules", &[], &[]);

pub fn try_handle<W: Write>(
    modules: &mut ModuleList,
    ui: &mut Ui<W>,
    storage: &Storage,
    keyword: &str,
    tail: &str,
) -> Option<Result<Flow, CommandError>> {
    match keyword {
        "add_module" => Some(add_module(modules, ui, storage, tail)),
        "delete_module" => Some(delete_module(modules, ui, storage, tail)),
        "list_modules" => Some(list_modules(modules, ui, tail)),
        _ => None,
    }
}

fn add_module<W: Write>(
    modules: &mut ModuleList,
    ui: &mut Ui<W>,
    storage: &Storage,
    tail: &str,
) -> Result<Flow, CommandError> {
    let args = parse_required(&ADD_MODULE, tail)?;
    let code = args.get('c').unwrap_or_default();
    let name = args.get('n').unwrap_or_default();

    if modules.get_module(code).is_some() {
        return Err(CommandError::DuplicateModule(code.to_string()));
    }

    let module = Module::new(code, name);
    let rendered = module.to_string();
    modules.add_module(module);
    ui.print_message(&format!("Module added:\n  {rendered}"));
    persist(storage, modules, ui);
    Ok(Flow::Continue)
}

fn delete_module<W: Write>(
    modules: &mut ModuleList,
    ui: &mut Ui<W>,
    storage: &Storage,
    tail: &str,
) -> Result<Flow, CommandError> {
    let args = parse_required(&DELETE_MODULE, tail)?;
    let code = args.get('c').unwrap_or_default();

    let removed = modules
        .remove_module(code)
        .ok_or_else(|| CommandError::ModuleNotFound(code.to_string()))?;
    ui.print_message(&format!("Module removed:\n  {removed}"));
    persist(storage, modules, ui);
    Ok(Flow::Continue)
}

fn list_modules<W: Write>(
    modules: &ModuleList,
    ui: &mut Ui<W>,
    tail: &str,
) -> Result<Flow, CommandError> {
    reject_arguments(&LIST_MODULES, tail)?;

    if modules.is_empty() {
        ui.print_message("No modules have been added yet.");
        return Ok(Flow::Continue);
    }

    let mut message = String::from("Module list:");
    for (i, module) in modules.modules().iter().enumerate() {
        message.push_str(&format!("\n{}. {}", i + 1, module));
    }
    ui.print_message(&message);
    Ok(Flow::Continue)
}
