use thiserror::Error;

/// Everything a command can fail with. All variants are recoverable: the
/// session loop prints the message and keeps accepting input.
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("{0}")]
    Usage(String),

    #[error("Missing argument {key}/.\n{usage}")]
    MissingArgument { key: char, usage: String },

    #[error("Unknown command: {0}. Type help to list available commands.")]
    UnknownCommand(String),

    #[error("Module {0} not found.")]
    ModuleNotFound(String),

    #[error("Student {id} not found in {module}.")]
    StudentNotFound { module: String, id: String },

    #[error("Invalid assessment name: {0}.")]
    InvalidAssessmentName(String),

    #[error("There are no students in {0}.")]
    NoStudents(String),

    #[error("No marks have been recorded for {0} yet.")]
    NoMarkedStudents(String),

    #[error("Module {0} already exists.")]
    DuplicateModule(String),

    #[error("Student {id} already exists in {module}.")]
    DuplicateStudent { module: String, id: String },

    #[error("Assessment {name} already exists in {module}.")]
    DuplicateAssessment { module: String, name: String },

    #[error("Invalid weightage: {0}. Expected a number greater than 0 and at most 100.")]
    InvalidWeightage(String),

    #[error("Invalid marks: {0}. Expected a number between 0 and 100.")]
    InvalidMarks(String),

    #[error("Stored data is invalid: {0}")]
    InvalidState(String),
}
