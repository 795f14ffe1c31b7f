use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::model::assessment::AssessmentList;
use crate::model::student::StudentList;

/// A course unit identified by code. Owns its student and assessment lists;
/// both are destroyed with the module.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    code: String,
    name: String,
    #[serde(default)]
    student_list: StudentList,
    #[serde(default)]
    assessment_list: AssessmentList,
}

impl Module {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            student_list: StudentList::new(),
            assessment_list: AssessmentList::new(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn student_list(&self) -> &StudentList {
        &self.student_list
    }

    pub fn student_list_mut(&mut self) -> &mut StudentList {
        &mut self.student_list
    }

    pub fn assessment_list(&self) -> &AssessmentList {
        &self.assessment_list
    }

    pub fn assessment_list_mut(&mut self) -> &mut AssessmentList {
        &mut self.assessment_list
    }

    pub fn verify(&self) -> bool {
        if self.code.is_empty() || self.name.is_empty() {
            return false;
        }
        self.student_list.verify() && self.assessment_list.verify()
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{} ({})", self.code, self.name)
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleList {
    #[serde(default)]
    modules: Vec<Module>,
}

impl ModuleList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn get_module(&self, code: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.code() == code)
    }

    pub fn get_module_mut(&mut self, code: &str) -> Option<&mut Module> {
        self.modules.iter_mut().find(|m| m.code() == code)
    }

    /// Appends a module; refuses duplicates of an existing code.
    pub fn add_module(&mut self, module: Module) -> bool {
        if self.get_module(module.code()).is_some() {
            return false;
        }
        self.modules.push(module);
        true
    }

    pub fn remove_module(&mut self, code: &str) -> Option<Module> {
        let idx = self.modules.iter().position(|m| m.code() == code)?;
        Some(self.modules.remove(idx))
    }

    pub fn verify(&self) -> bool {
        let mut seen = HashSet::new();
        for module in &self.modules {
            if !module.verify() || !seen.insert(module.code()) {
                return false;
            }
        }
        true
    }
}
