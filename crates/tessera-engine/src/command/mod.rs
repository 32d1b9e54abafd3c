//! Command ingestion: records → typed [`Command`]s.
//!
//! Responsibilities:
//! - recognize the `command` discriminant through an ordered registry
//! - resolve optional fields to defaults, reject malformed required fields
//! - read multi-record streams (command files)
//!
//! Parsing is pure; all scene mutation happens in [`Command::execute`].

mod cmd;
mod error;
mod parse;
mod stream;

pub use cmd::{ALL_LAYERS, ClearTarget, Command, CommandKind};
pub use error::ParseError;
pub use parse::CommandParser;
pub use stream::CommandStream;
