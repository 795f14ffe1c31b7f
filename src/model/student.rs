use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::calc::MarkState;

pub const MARKS_MIN: f64 = 0.0;
pub const MARKS_MAX: f64 = 100.0;

pub fn is_valid_marks(marks: f64) -> bool {
    marks.is_finite() && (MARKS_MIN..=MARKS_MAX).contains(&marks)
}

/// A student enrolled in exactly one module, keyed by id within its list.
/// Marks are keyed by assessment name; an absent entry means unmarked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    id: String,
    name: String,
    #[serde(default)]
    marks: HashMap<String, f64>,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            marks: HashMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marks_exist(&self, assessment_name: &str) -> bool {
        self.marks.contains_key(assessment_name)
    }

    pub fn marks(&self, assessment_name: &str) -> Option<f64> {
        self.marks.get(assessment_name).copied()
    }

    pub fn mark_state(&self, assessment_name: &str) -> MarkState {
        match self.marks(assessment_name) {
            Some(v) => MarkState::Scored(v),
            None => MarkState::Unmarked,
        }
    }

    pub fn set_marks(&mut self, assessment_name: &str, marks: f64) {
        self.marks.insert(assessment_name.to_string(), marks);
    }

    pub fn delete_marks(&mut self, assessment_name: &str) -> Option<f64> {
        self.marks.remove(assessment_name)
    }

    pub fn verify(&self) -> bool {
        if self.id.is_empty() || self.name.is_empty() {
            return false;
        }
        self.marks.values().all(|&m| is_valid_marks(m))
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentList {
    #[serde(default)]
    students: Vec<Student>,
}

impl StudentList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn get_student(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == id)
    }

    pub fn get_student_mut(&mut self, id: &str) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.id() == id)
    }

    /// Appends a student; refuses duplicates of an existing id.
    pub fn add_student(&mut self, student: Student) -> bool {
        if self.get_student(student.id()).is_some() {
            return false;
        }
        self.students.push(student);
        true
    }

    pub fn remove_student(&mut self, id: &str) -> Option<Student> {
        let idx = self.students.iter().position(|s| s.id() == id)?;
        Some(self.students.remove(idx))
    }

    pub fn verify(&self) -> bool {
        let mut seen = HashSet::new();
        for student in &self.students {
            if !student.verify() || !seen.insert(student.id()) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_lookup_by_id() {
        let mut list = StudentList::new();
        assert!(list.add_student(Student::new("A0123456X", "Alice Tan")));
        let s = list.get_student("A0123456X").expect("student");
        assert_eq!(s.name(), "Alice Tan");
        assert_eq!(list.size(), 1);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut list = StudentList::new();
        assert!(list.add_student(Student::new("A1", "Alice")));
        assert!(!list.add_student(Student::new("A1", "Someone Else")));
        assert_eq!(list.size(), 1);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut list = StudentList::new();
        list.add_student(Student::new("a1", "Alice"));
        assert!(list.get_student("A1").is_none());
        assert!(list.get_student("a1").is_some());
    }

    #[test]
    fn marks_lifecycle() {
        let mut s = Student::new("A1", "Alice");
        assert!(!s.marks_exist("Midterms"));
        assert_eq!(s.mark_state("Midterms"), MarkState::Unmarked);

        s.set_marks("Midterms", 20.0);
        assert!(s.marks_exist("Midterms"));
        assert_eq!(s.marks("Midterms"), Some(20.0));
        assert_eq!(s.mark_state("Midterms"), MarkState::Scored(20.0));

        assert_eq!(s.delete_marks("Midterms"), Some(20.0));
        assert!(!s.marks_exist("Midterms"));
    }

    #[test]
    fn verify_rejects_empty_identity_and_out_of_range_marks() {
        assert!(!Student::new("", "Alice").verify());
        assert!(!Student::new("A1", "").verify());

        let mut s = Student::new("A1", "Alice");
        s.set_marks("Midterms", 100.0);
        assert!(s.verify());
        s.set_marks("Finals", 100.5);
        assert!(!s.verify());
    }
}
