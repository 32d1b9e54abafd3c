use serde_json::Value;
use serde_json::de::StrRead;

use super::cmd::Command;
use super::error::ParseError;
use super::parse::CommandParser;

/// Iterator over the records of a command stream, in order.
///
/// Records are JSON objects separated by optional whitespace (one per line is
/// typical). A record that fails to parse yields its error and the stream
/// continues. A JSON syntax error yields [`ParseError::Json`] once and ends the
/// stream, since the reader cannot find the start of the next record.
pub struct CommandStream<'a> {
    parser: CommandParser,
    values: serde_json::StreamDeserializer<'a, StrRead<'a>, Value>,
    done: bool,
}

impl<'a> CommandStream<'a> {
    pub(crate) fn new(parser: CommandParser, text: &'a str) -> Self {
        Self {
            parser,
            values: serde_json::Deserializer::from_str(text).into_iter::<Value>(),
            done: false,
        }
    }

    /// Byte offset just past the last record read.
    pub fn byte_offset(&self) -> usize {
        self.values.byte_offset()
    }
}

impl Iterator for CommandStream<'_> {
    type Item = Result<Command, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.values.next()? {
            Ok(value) => Some(self.parser.parse_value(&value)),
            Err(e) => {
                self.done = true;
                Some(Err(ParseError::Json(e.to_string())))
            }
        }
    }
}
