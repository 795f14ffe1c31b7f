use std::io::Write;

use crate::calc;
use crate::command::dispatcher::Flow;
use crate::command::error::CommandError;
use crate::command::handlers::persist;
use crate::command::parser::{parse_required, ArgumentSpec};
use crate::model::module::{Module, ModuleList};
use crate::model::student::is_valid_marks;
use crate::storage::Storage;
use crate::ui::Ui;

pub const SET_MARKS: ArgumentSpec = ArgumentSpec::new(
    "set_marks",
    &['c', 'i', 'a', 'm'],
    &["MODULE_CODE", "STUDENT_ID", "ASSESSMENT_NAME", "MARKS"],
);
pub const DELETE_MARKS: ArgumentSpec = ArgumentSpec::new(
    "delete_marks",
    &['c', 'i', 'a'],
    &["MODULE_CODE", "STUDENT_ID", "ASSESSMENT_NAME"],
);
pub const LIST_MARKS: ArgumentSpec = ArgumentSpec::new(
    "list_marks",
    &['c', 'a'],
    &["MODULE_CODE", "ASSESSMENT_NAME"],
);
pub const AVERAGE_MARKS: ArgumentSpec = ArgumentSpec::new(
    "average_marks",
    &['c', 'a'],
    &["MODULE_CODE", "ASSESSMENT_NAME"],
);
pub const MEDIAN_MARKS: ArgumentSpec = ArgumentSpec::new(
    "median_marks",
    &['c', 'a'],
    &["MODULE_CODE", "ASSESSMENT_NAME"],
);

const NOTE_FORMAT_UNMARKED: &str = "student(s) have yet to be marked!";

pub fn try_handle<W: Write>(
    modules: &mut ModuleList,
    ui: &mut Ui<W>,
    storage: &Storage,
    keyword: &str,
    tail: &str,
) -> Option<Result<Flow, CommandError>> {
    match keyword {
        "set_marks" => Some(set_marks(modules, ui, storage, tail)),
        "delete_marks" => Some(delete_marks(modules, ui, storage, tail)),
        "list_marks" => Some(list_marks(modules, ui, tail)),
        "average_marks" => Some(average_marks(modules, ui, tail)),
        "median_marks" => Some(median_marks(modules, ui, tail)),
        _ => None,
    }
}

fn set_marks<W: Write>(
    modules: &mut ModuleList,
    ui: &mut Ui<W>,
    storage: &Storage,
    tail: &str,
) -> Result<Flow, CommandError> {
    let args = parse_required(&SET_MARKS, tail)?;
    let code = args.get('c').unwrap_or_default();
    let id = args.get('i').unwrap_or_default();
    let name = args.get('a').unwrap_or_default();
    let marks_text = args.get('m').unwrap_or_default();

    let marks: f64 = marks_text
        .parse()
        .map_err(|_| CommandError::InvalidMarks(marks_text.to_string()))?;
    if !is_valid_marks(marks) {
        return Err(CommandError::InvalidMarks(marks_text.to_string()));
    }

    let module = modules
        .get_module_mut(code)
        .ok_or_else(|| CommandError::ModuleNotFound(code.to_string()))?;
    if module.assessment_list().get_assessment(name).is_none() {
        return Err(CommandError::InvalidAssessmentName(name.to_string()));
    }
    let assessment_name = name.to_string();
    let student = module
        .student_list_mut()
        .get_student_mut(id)
        .ok_or_else(|| CommandError::StudentNotFound {
            module: code.to_string(),
            id: id.to_string(),
        })?;

    student.set_marks(&assessment_name, marks);
    let rendered = format!(
        "Marks set:\n  {}: {} for {}",
        student, marks, assessment_name
    );
    ui.print_message(&rendered);
    persist(storage, modules, ui);
    Ok(Flow::Continue)
}

fn delete_marks<W: Write>(
    modules: &mut ModuleList,
    ui: &mut Ui<W>,
    storage: &Storage,
    tail: &str,
) -> Result<Flow, CommandError> {
    let args = parse_required(&DELETE_MARKS, tail)?;
    let code = args.get('c').unwrap_or_default();
    let id = args.get('i').unwrap_or_default();
    let name = args.get('a').unwrap_or_default();

    let module = modules
        .get_module_mut(code)
        .ok_or_else(|| CommandError::ModuleNotFound(code.to_string()))?;
    if module.assessment_list().get_assessment(name).is_none() {
        return Err(CommandError::InvalidAssessmentName(name.to_string()));
    }
    let assessment_name = name.to_string();
    let student = module
        .student_list_mut()
        .get_student_mut(id)
        .ok_or_else(|| CommandError::StudentNotFound {
            module: code.to_string(),
            id: id.to_string(),
        })?;

    match student.delete_marks(&assessment_name) {
        Some(_) => {
            let rendered = format!("Marks deleted:\n  {}: {}", student, assessment_name);
            ui.print_message(&rendered);
            persist(storage, modules, ui);
        }
        None => {
            let rendered = format!("{} has no recorded marks for {}.", student, assessment_name);
            ui.print_message(&rendered);
        }
    }
    Ok(Flow::Continue)
}

/// Shared resolution chain for the read-only marks commands. The order is
/// load-bearing: an empty class must win over a bad assessment name.
fn resolve_assessment<'a>(
    modules: &'a ModuleList,
    code: &str,
    name: &str,
) -> Result<(&'a Module, &'a str), CommandError> {
    let module = modules
        .get_module(code)
        .ok_or_else(|| CommandError::ModuleNotFound(code.to_string()))?;
    if module.student_list().is_empty() {
        return Err(CommandError::NoStudents(module.code().to_string()));
    }
    let assessment = module
        .assessment_list()
        .get_assessment(name)
        .ok_or_else(|| CommandError::InvalidAssessmentName(name.to_string()))?;
    Ok((module, assessment.name()))
}

fn list_marks<W: Write>(
    modules: &ModuleList,
    ui: &mut Ui<W>,
    tail: &str,
) -> Result<Flow, CommandError> {
    let args = parse_required(&LIST_MARKS, tail)?;
    let code = args.get('c').unwrap_or_default();
    let name = args.get('a').unwrap_or_default();
    let (module, assessment_name) = resolve_assessment(modules, code, name)?;

    let mut message = format!("Marks for {assessment_name}:");
    for (i, student) in module.student_list().students().iter().enumerate() {
        match student.marks(assessment_name) {
            Some(marks) => message.push_str(&format!("\n{}. {}: {}", i + 1, student, marks)),
            None => message.push_str(&format!("\n{}. {}: unmarked", i + 1, student)),
        }
    }
    ui.print_message(&message);
    Ok(Flow::Continue)
}

fn average_marks<W: Write>(
    modules: &ModuleList,
    ui: &mut Ui<W>,
    tail: &str,
) -> Result<Flow, CommandError> {
    let args = parse_required(&AVERAGE_MARKS, tail)?;
    let code = args.get('c').unwrap_or_default();
    let name = args.get('a').unwrap_or_default();
    let (module, assessment_name) = resolve_assessment(modules, code, name)?;

    let avg = calc::average_marks(
        module
            .student_list()
            .students()
            .iter()
            .map(|s| s.mark_state(assessment_name)),
    );

    let mut message = format!(
        "Average marks for {} is {}",
        assessment_name,
        calc::format_marks(avg.average)
    );
    if avg.unmarked_count > 0 {
        message.push_str(&format!(
            "\nNote that {} {}",
            avg.unmarked_count, NOTE_FORMAT_UNMARKED
        ));
    }
    ui.print_message(&message);
    Ok(Flow::Continue)
}

fn median_marks<W: Write>(
    modules: &ModuleList,
    ui: &mut Ui<W>,
    tail: &str,
) -> Result<Flow, CommandError> {
    let args = parse_required(&MEDIAN_MARKS, tail)?;
    let code = args.get('c').unwrap_or_default();
    let name = args.get('a').unwrap_or_default();
    let (module, assessment_name) = resolve_assessment(modules, code, name)?;

    let med = calc::median_marks(
        module
            .student_list()
            .students()
            .iter()
            .map(|s| s.mark_state(assessment_name)),
    )
    .ok_or_else(|| CommandError::NoMarkedStudents(assessment_name.to_string()))?;

    let mut message = format!(
        "Median marks for {} is {}",
        assessment_name,
        calc::format_marks(med.median)
    );
    if med.unmarked_count > 0 {
        message.push_str(&format!(
            "\nNote that {} {}",
            med.unmarked_count, NOTE_FORMAT_UNMARKED
        ));
    }
    ui.print_message(&message);
    Ok(Flow::Continue)
}
