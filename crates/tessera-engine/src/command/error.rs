use std::fmt;

/// Why a command record was rejected.
///
/// A rejected record is dropped on its own; the stream it came from keeps going.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The text is not valid JSON.
    Json(String),
    /// The record is valid JSON but not an object.
    NotAnObject,
    /// `command` is absent or not a string.
    MissingCommand,
    /// No registered command matches the `command` value.
    UnknownCommand(String),
    /// A required field is absent.
    MissingField(&'static str),
    /// A field is present but its value has the wrong type or does not parse.
    InvalidField { field: &'static str, value: String },
    /// `cache` id outside `[1, 4]`.
    SlotOutOfRange(i64),
    /// `x` and `y` arrays differ in length.
    LengthMismatch { x: usize, y: usize },
    /// Vertex arrays shorter than the command requires.
    TooFewPoints { command: &'static str, min: usize, got: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Json(msg) => write!(f, "invalid json: {msg}"),
            ParseError::NotAnObject => f.write_str("command record is not a json object"),
            ParseError::MissingCommand => f.write_str("missing `command` field"),
            ParseError::UnknownCommand(name) => write!(f, "unrecognized command `{name}`"),
            ParseError::MissingField(field) => write!(f, "missing field `{field}`"),
            ParseError::InvalidField { field, value } => {
                write!(f, "invalid value for `{field}`: {value}")
            }
            ParseError::SlotOutOfRange(id) => write!(f, "invalid cache id {id}, expected 1..=4"),
            ParseError::LengthMismatch { x, y } => {
                write!(f, "`x` has {x} values but `y` has {y}")
            }
            ParseError::TooFewPoints { command, min, got } => {
                write!(f, "`{command}` needs at least {min} points, got {got}")
            }
        }
    }
}

impl std::error::Error for ParseError {}
