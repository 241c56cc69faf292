mod cli;
mod parsers;
mod types;


pub use cli::{Command, HarnessArgs};
pub(crate) use parsers::parse_duration_value;
pub use types::PositiveU32;
