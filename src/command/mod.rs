pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod parser;

pub use dispatcher::{dispatch, Flow};
pub use error::CommandError;
