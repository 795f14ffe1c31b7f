use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

pub const WEIGHTAGE_MIN: f64 = 0.0;
pub const WEIGHTAGE_MAX: f64 = 100.0;

/// Weightage is a percentage contribution toward the final grade: strictly
/// positive, at most 100.
pub fn is_valid_weightage(weightage: f64) -> bool {
    weightage.is_finite() && weightage > WEIGHTAGE_MIN && weightage <= WEIGHTAGE_MAX
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    name: String,
    weightage: f64,
}

impl Assessment {
    pub fn new(name: impl Into<String>, weightage: f64) -> Self {
        Self {
            name: name.into(),
            weightage,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weightage(&self) -> f64 {
        self.weightage
    }

    pub fn verify(&self) -> bool {
        !self.name.is_empty() && is_valid_weightage(self.weightage)
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (weightage: {}%)", self.name, self.weightage)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentList {
    #[serde(default)]
    assessments: Vec<Assessment>,
}

impl AssessmentList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        self.assessments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assessments.is_empty()
    }

    pub fn assessments(&self) -> &[Assessment] {
        &self.assessments
    }

    pub fn get_assessment(&self, name: &str) -> Option<&Assessment> {
        self.assessments.iter().find(|a| a.name() == name)
    }

    /// Appends an assessment; refuses duplicates of an existing name.
    pub fn add_assessment(&mut self, assessment: Assessment) -> bool {
        if self.get_assessment(assessment.name()).is_some() {
            return false;
        }
        self.assessments.push(assessment);
        true
    }

    pub fn remove_assessment(&mut self, name: &str) -> Option<Assessment> {
        let idx = self.assessments.iter().position(|a| a.name() == name)?;
        Some(self.assessments.remove(idx))
    }

    pub fn verify(&self) -> bool {
        let mut seen = HashSet::new();
        for assessment in &self.assessments {
            if !assessment.verify() || !seen.insert(assessment.name()) {
                return false;
            }
        }
        true
    }
}
