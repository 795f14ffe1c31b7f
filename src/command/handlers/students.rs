use std::io::Write;

use crate::command::dispatcher::Flow;
use crate::command::error::CommandError;
use crate::command::handlers::persist;
use crate::command::parser::{parse_required, ArgumentSpec};
use crate::model::module::ModuleList;
use crate::model::student::Student;
use crate::storage::Storage;
use crate::ui::Ui;

pub const ADD_STUDENT: ArgumentSpec = ArgumentSpec::new(
    "add_student",
    &['c', 'i', 'n'],
    &["MODULE_CODE", "STUDENT_ID", "STUDENT_NAME"],
);
pub const DELETE_STUDENT: ArgumentSpec = ArgumentSpec::new(
    "delete_student",
    &['c', 'i'],
    &["MODULE_CODE", "STUDENT_ID"],
);
pub const LIST_STUDENTS: ArgumentSpec =
    ArgumentSpec::new("list_students", &['c'], &["MODULE_CODE"]);

pub fn try_handle<W: Write>(
    modules: &mut ModuleList,
    ui: &mut Ui<W>,
    storage: &Storage,
    keyword: &str,
    tail: &str,
) -> Option<Result<Flow, CommandError>> {
    match keyword {
        "add_student" => Some(add_student(modules, ui, storage, tail)),
        "delete_student" => Some(delete_student(modules, ui, storage, tail)),
        "list_students" => Some(list_students(modules, ui, tail)),
        _ => None,
    }
}

fn add_student<W: Write>(
    modules: &mut ModuleList,
    ui: &mut Ui<W>,
    storage: &Storage,
    tail: &str,
) -> Result<Flow, CommandError> {
    let args = parse_required(&ADD_STUDENT, tail)?;
    let code = args.get('c').unwrap_or_default();
    let id = args.get('i').unwrap_or_default();
    let name = args.get('n').unwrap_or_default();

    let module = modules
        .get_module_mut(code)
        .ok_or_else(|| CommandError::ModuleNotFound(code.to_string()))?;
    if module.student_list().get_student(id).is_some() {
        return Err(CommandError::DuplicateStudent {
            module: code.to_string(),
            id: id.to_string(),
        });
    }

    let student = Student::new(id, name);
    let rendered = format!("Student added to {}:\n  {}", module, student);
    module.student_list_mut().add_student(student);
    ui.print_message(&rendered);
    persist(storage, modules, ui);
    Ok(Flow::Continue)
}

fn delete_student<W: Write>(
    modules: &mut ModuleList,
    ui: &mut Ui<W>,
    storage: &Storage,
    tail: &str,
) -> Result<Flow, CommandError> {
    let args = parse_required(&DELETE_STUDENT, tail)?;
    let code = args.get('c').unwrap_or_default();
    let id = args.get('i').unwrap_or_default();

    let module = modules
        .get_module_mut(code)
        .ok_or_else(|| CommandError::ModuleNotFound(code.to_string()))?;
    let removed =
        module
            .student_list_mut()
            .remove_student(id)
            .ok_or_else(|| CommandError::StudentNotFound {
                module: code.to_string(),
                id: id.to_string(),
            })?;
    ui.print_message(&format!("Student removed:\n  {removed}"));
    persist(storage, modules, ui);
    Ok(Flow::Continue)
}

fn list_students<W: Write>(
    modules: &ModuleList,
    ui: &mut Ui<W>,
    tail: &str,
) -> Result<Flow, CommandError> {
    let args = parse_required(&LIST_STUDENTS, tail)?;
    let code = args.get('c').unwrap_or_default();

    let module = modules
        .get_module(code)
        .ok_or_else(|| CommandError::ModuleNotFound(code.to_string()))?;
    if module.student_list().is_empty() {
        ui.print_message(&format!("No students have been added to {module}."));
        return Ok(Flow::Continue);
    }

    let mut message = format!("Students in {module}:");
    for (i, student) in module.student_list().students().iter().enumerate() {
        message.push_str(&format!("\n{}. {}", i + 1, student));
    }
    ui.print_message(&message);
    Ok(Flow::Continue)
}
