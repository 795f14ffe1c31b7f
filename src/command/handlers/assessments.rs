use std::io::Write;

use crate::command::dispatcher::Flow;
use crate::command::error::CommandError;
use crate::command::handlers::persist;
use crate::command::parser::{parse_required, ArgumentSpec};
use crate::model::assessment::{is_valid_weightage, Assessment};
use crate::model::module::ModuleList;
use crate::storage::Storage;
use crate::ui::Ui;

pub const ADD_ASSESSMENT: ArgumentSpec = ArgumentSpec::new(
    "add_assessment",
    &['c', 'a', 'w'],
    &["MODULE_CODE", "ASSESSMENT_NAME", "WEIGHTAGE"],
);
pub const DELETE_ASSESSMENT: ArgumentSpec = ArgumentSpec::new(
    "delete_assessment",
    &['c', 'a'],
    &["MODULE_CODE", "ASSESSMENT_NAME"],
);
pub const LIST_ASSESSMENTS: ArgumentSpec =
    ArgumentSpec::new("list_assessments", &['c'], &["MODULE_CODE"]);

pub fn try_handle<W: Write>(
    modules: &mut ModuleList,
    ui: &mut Ui<W>,
    storage: &Storage,
    keyword: &str,
    tail: &str,
) -> Option<Result<Flow, CommandError>> {
    match keyword {
        "add_assessment" => Some(add_assessment(modules, ui, storage, tail)),
        "delete_assessment" => Some(delete_assessment(modules, ui, storage, tail)),
        "list_assessments" => Some(list_assessments(modules, ui, tail)),
        _ => None,
    }
}

fn add_assessment<W: Write>(
    modules: &mut ModuleList,
    ui: &mut Ui<W>,
    storage: &Storage,
    tail: &str,
) -> Result<Flow, CommandError> {
    let args = parse_required(&ADD_ASSESSMENT, tail)?;
    let code = args.get('c').unwrap_or_default();
    let name = args.get('a').unwrap_or_default();
    let weightage_text = args.get('w').unwrap_or_default();

    let weightage: f64 = weightage_text
        .parse()
        .map_err(|_| CommandError::InvalidWeightage(weightage_text.to_string()))?;
    if !is_valid_weightage(weightage) {
        return Err(CommandError::InvalidWeightage(weightage_text.to_string()));
    }

    let module = modules
        .get_module_mut(code)
        .ok_or_else(|| CommandError::ModuleNotFound(code.to_string()))?;
    if module.assessment_list().get_assessment(name).is_some() {
        return Err(CommandError::DuplicateAssessment {
            module: code.to_string(),
            name: name.to_string(),
        });
    }

    let assessment = Assessment::new(name, weightage);
    let rendered = format!("Assessment added to {}:\n  {}", module, assessment);
    module.assessment_list_mut().add_assessment(assessment);
    ui.print_message(&rendered);
    persist(storage, modules, ui);
    Ok(Flow::Continue)
}

fn delete_assessment<W: Write>(
    modules: &mut ModuleList,
    ui: &mut Ui<W>,
    storage: &Storage,
    tail: &str,
) -> Result<Flow, CommandError> {
    let args = parse_required(&DELETE_ASSESSMENT, tail)?;
    let code = args.get('c').unwrap_or_default();
    let name = args.get('a').unwrap_or_default();

    let module = modules
        .get_module_mut(code)
        .ok_or_else(|| CommandError::ModuleNotFound(code.to_string()))?;
    let removed = module
        .assessment_list_mut()
        .remove_assessment(name)
        .ok_or_else(|| CommandError::InvalidAssessmentName(name.to_string()))?;
    ui.print_message(&format!("Assessment removed:\n  {removed}"));
    persist(storage, modules, ui);
    Ok(Flow::Continue)
}

fn list_assessments<W: Write>(
    modules: &ModuleList,
    ui: &mut Ui<W>,
    tail: &str,
) -> Result<Flow, CommandError> {
    let args = parse_required(&LIST_ASSESSMENTS, tail)?;
    let code = args.get('c').unwrap_or_default();

    let module = modules
        .get_module(code)
        .ok_or_else(|| CommandError::ModuleNotFound(code.to_string()))?;
    if module.assessment_list().is_empty() {
        ui.print_message(&format!("No assessments have been added to {module}."));
        return Ok(Flow::Continue);
    }

    let mut message = format!("Assessments in {module}:");
    for (i, assessment) in module.assessment_list().assessments().iter().enumerate() {
        message.push_str(&format!("\n{}. {}", i + 1, assessment));
    }
    ui.print_message(&message);
    Ok(Flow::Continue)
}
