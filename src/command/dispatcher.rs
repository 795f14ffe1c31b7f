use std::io::Write;

use crate::command::error::CommandError;
use crate::command::handlers;
use crate::model::module::ModuleList;
use crate::storage::Storage;
use crate::ui::Ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Routes one input line: first whitespace-delimited token is the command
/// keyword (lowercased), the trimmed remainder is its argument tail. Handler
/// groups are probed in turn; each claims the keywords it owns.
pub fn dispatch<W: Write>(
    modules: &mut ModuleList,
    ui: &mut Ui<W>,
    storage: &Storage,
    line: &str,
) -> Result<Flow, CommandError> {
    let line = line.trim();
    let (keyword, tail) = match line.split_once(char::is_whitespace) {
        Some((keyword, tail)) => (keyword, tail.trim()),
        None => (line, ""),
    };
    let keyword = keyword.to_ascii_lowercase();
    tracing::debug!(%keyword, tail, "dispatching command");

    if let Some(result) = handlers::core::try_handle(modules, ui, &keyword, tail) {
        return result;
    }
    if let Some(result) = handlers::modules::try_handle(modules, ui, storage, &keyword, tail) {
        return result;
    }
    if let Some(result) = handlers::students::try_handle(modules, ui, storage, &keyword, tail) {
        return result;
    }
    if let Some(result) = handlers::assessments::try_handle(modules, ui, storage, &keyword, tail) {
        return result;
    }
    if let Some(result) = handlers::marks::try_handle(modules, ui, storage, &keyword, tail) {
        return result;
    }

    Err(CommandError::UnknownCommand(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::module::Module;
    use crate::model::student::Student;

    struct Session {
        modules: ModuleList,
        storage: Storage,
        _dir: tempfile::TempDir,
    }

    impl Session {
        fn new() -> Self {
            let dir = tempfile::tempdir().expect("temp dir");
            Self {
                modules: ModuleList::new(),
                storage: Storage::new(dir.path().join("classbook.json")),
                _dir: dir,
            }
        }

        fn run(&mut self, line: &str) -> (Result<Flow, CommandError>, String) {
            let mut ui = Ui::new(Vec::new());
            let result = dispatch(&mut self.modules, &mut ui, &self.storage, line);
            (result, String::from_utf8(ui.into_inner()).expect("utf8"))
        }
    }

    fn seeded_session() -> Session {
        let mut session = Session::new();
        let mut module = Module::new("CS2113T", "Software Engineering");
        for (id, name) in [("A1", "Alice"), ("A2", "Bob"), ("A3", "Carol")] {
            module.student_list_mut().add_student(Student::new(id, name));
        }
        module
            .assessment_list_mut()
            .add_assessment(crate::model::assessment::Assessment::new("Midterms", 20.0));
        session.modules.add_module(module);
        session
    }

    #[test]
    fn average_with_unmarked_students() {
        let mut session = seeded_session();
        session
            .run("set_marks c/CS2113T i/A1 a/Midterms m/20")
            .0
            .expect("set marks");
        session
            .run("set_marks c/CS2113T i/A2 a/Midterms m/15")
            .0
            .expect("set marks");

        let (result, output) = session.run("average_marks c/CS2113T a/Midterms");
        result.expect("average");
        assert!(output.contains("Average marks for Midterms is 11.67"), "{output}");
        assert!(
            output.contains("Note that 1 student(s) have yet to be marked!"),
            "{output}"
        );
    }

    #[test]
    fn average_is_idempotent_and_read_only() {
        let mut session = seeded_session();
        session
            .run("set_marks c/CS2113T i/A1 a/Midterms m/50")
            .0
            .expect("set marks");

        let before = serde_json::to_string(&session.modules).expect("serialize");
        let (_, first) = session.run("average_marks c/CS2113T a/Midterms");
        let (_, second) = session.run("average_marks c/CS2113T a/Midterms");
        let after = serde_json::to_string(&session.modules).expect("serialize");

        assert_eq!(first, second);
        assert_eq!(before, after);
    }

    #[test]
    fn error_precedence_for_average_marks() {
        let mut session = seeded_session();

        // Empty tail beats everything.
        assert!(matches!(
            session.run("average_marks").0,
            Err(CommandError::Usage(_))
        ));
        // Missing key beats resolution.
        assert!(matches!(
            session.run("average_marks c/ZZ999").0,
            Err(CommandError::MissingArgument { key: 'a', .. })
        ));
        // Unknown module beats everything below it.
        assert!(matches!(
            session.run("average_marks c/ZZ999 a/Midterms").0,
            Err(CommandError::ModuleNotFound(_))
        ));

        // Empty module wins over a bad assessment name.
        session.run("add_module c/EE0000 n/Empty").0.expect("add");
        assert!(matches!(
            session.run("average_marks c/EE0000 a/NoSuchAssessment").0,
            Err(CommandError::NoStudents(_))
        ));
    }

    #[test]
    fn failed_command_leaves_model_unchanged() {
        let mut session = seeded_session();
        let before = serde_json::to_string(&session.modules).expect("serialize");

        // Marks out of range; validation happens before any state change.
        assert!(matches!(
            session.run("set_marks c/CS2113T i/A1 a/Midterms m/150").0,
            Err(CommandError::InvalidMarks(_))
        ));
        assert!(matches!(
            session.run("set_marks c/CS2113T i/A9 a/Midterms m/10").0,
            Err(CommandError::StudentNotFound { .. })
        ));
        assert!(matches!(
            session.run("add_module c/CS2113T n/Again").0,
            Err(CommandError::DuplicateModule(_))
        ));

        let after = serde_json::to_string(&session.modules).expect("serialize");
        assert_eq!(before, after);
    }

    #[test]
    fn median_ignores_unmarked_and_flags_them() {
        let mut session = seeded_session();
        session
            .run("set_marks c/CS2113T i/A1 a/Midterms m/20")
            .0
            .expect("set marks");
        session
            .run("set_marks c/CS2113T i/A2 a/Midterms m/15")
            .0
            .expect("set marks");

        let (result, output) = session.run("median_marks c/CS2113T a/Midterms");
        result.expect("median");
        assert!(output.contains("Median marks for Midterms is 17.50"), "{output}");
        assert!(output.contains("1 student(s) have yet to be marked!"), "{output}");
    }

    #[test]
    fn median_with_no_marked_students_fails() {
        let mut session = seeded_session();
        assert!(matches!(
            session.run("median_marks c/CS2113T a/Midterms").0,
            Err(CommandError::NoMarkedStudents(_))
        ));
    }

    #[test]
    fn unknown_keyword_is_reported() {
        let mut session = Session::new();
        assert!(matches!(
            session.run("frobnicate c/CS2113T").0,
            Err(CommandError::UnknownCommand(_))
        ));
    }

    #[test]
    fn exit_ends_the_session() {
        let mut session = Session::new();
        let (result, _) = session.run("exit");
        assert_eq!(result.expect("exit"), Flow::Exit);
    }
}
