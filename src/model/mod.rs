pub mod assessment;
pub mod module;
pub mod student;
