//! Record → [`Command`] parsing.
//!
//! A record is one JSON object. Its `command` field selects a recognizer from
//! [`REGISTRY`], which is searched in a fixed priority order; the first match
//! builds the command. Optional fields resolve to defaults, required fields
//! fail the whole record.
//!
//! | `command`  | required fields                 | optional            |
//! |------------|---------------------------------|---------------------|
//! | `reset`    |                                 |                     |
//! | `clear`    |                                 | `layer` (def. `*`)  |
//! | `cache`    | `id` (integer in 1..=4)         |                     |
//! | `text`     | `x`, `y`, `text`                | `layer`, `color`    |
//! | `point`    | `x`, `y`                        | `layer`, `color`    |
//! | `line`     | `x0`, `y0`, `x1`, `y1`          | `layer`, `color`    |
//! | `rect`     | `x0`, `y0`, `x1`, `y1`          | `layer`, `color`    |
//! | `polyline` | `x`, `y` arrays, len ≥ 2        | `layer`, `color`    |
//! | `poly`     | `x`, `y` arrays, len ≥ 3        | `layer`, `color`    |
//!
//! Unrecognized keys are ignored.

use serde_json::{Map, Value};

use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{CacheSlot, DEFAULT_LAYER, Primitive};

use super::cmd::{ALL_LAYERS, ClearTarget, Command, CommandKind};
use super::error::ParseError;
use super::stream::CommandStream;

type BuildFn = fn(&Fields<'_>, &CommandParser) -> Result<Command, ParseError>;

/// One registry entry: a keyword recognizer plus its builder.
struct Recognizer {
    kind: CommandKind,
    build: BuildFn,
}

impl Recognizer {
    #[inline]
    fn recognizes(&self, command: &str) -> bool {
        self.kind.keyword() == command
    }
}

/// Recognizers in priority order.
static REGISTRY: &[Recognizer] = &[
    Recognizer { kind: CommandKind::Reset, build: build_reset },
    Recognizer { kind: CommandKind::Clear, build: build_clear },
    Recognizer { kind: CommandKind::Cache, build: build_cache },
    Recognizer { kind: CommandKind::Text, build: build_text },
    Recognizer { kind: CommandKind::Point, build: build_point },
    Recognizer { kind: CommandKind::Line, build: build_line },
    Recognizer { kind: CommandKind::Rect, build: build_rect },
    Recognizer { kind: CommandKind::Polyline, build: build_polyline },
    Recognizer { kind: CommandKind::Polygon, build: build_polygon },
];

/// Pure, side-effect-free command parser.
///
/// Parsing never touches a scene, so records may be parsed ahead of time or on
/// another thread; only execution has to stay in submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandParser {
    /// Color used when a record has no (or an unparsable) `color`.
    pub default_color: Color,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self { default_color: Color::WHITE }
    }
}

impl CommandParser {
    pub fn new(default_color: Color) -> Self {
        Self { default_color }
    }

    /// Parses one JSON text holding a single record.
    pub fn parse_str(&self, text: &str) -> Result<Command, ParseError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| ParseError::Json(e.to_string()))?;
        self.parse_value(&value)
    }

    /// Parses an already decoded record.
    pub fn parse_value(&self, value: &Value) -> Result<Command, ParseError> {
        let map = value.as_object().ok_or(ParseError::NotAnObject)?;
        self.parse_record(map)
    }

    /// Parses a record, trying each registered recognizer in priority order.
    pub fn parse_record(&self, record: &Map<String, Value>) -> Result<Command, ParseError> {
        let command = record
            .get("command")
            .and_then(Value::as_str)
            .ok_or(ParseError::MissingCommand)?;

        let recognizer = REGISTRY
            .iter()
            .find(|r| r.recognizes(command))
            .ok_or_else(|| ParseError::UnknownCommand(command.to_string()))?;

        (recognizer.build)(&Fields { record }, self)
    }

    /// Parses a text holding any number of whitespace-separated records.
    pub fn parse_stream<'a>(&self, text: &'a str) -> CommandStream<'a> {
        CommandStream::new(*self, text)
    }
}

// ── builders ──────────────────────────────────────────────────────────────

fn build_reset(_: &Fields<'_>, _: &CommandParser) -> Result<Command, ParseError> {
    Ok(Command::Reset)
}

fn build_clear(f: &Fields<'_>, _: &CommandParser) -> Result<Command, ParseError> {
    Ok(Command::Clear(ClearTarget::from_layer(f.layer(ALL_LAYERS))))
}

fn build_cache(f: &Fields<'_>, _: &CommandParser) -> Result<Command, ParseError> {
    let id = f.integer("id")?;
    let slot = CacheSlot::new(id).ok_or(ParseError::SlotOutOfRange(id))?;
    Ok(Command::Cache(slot))
}

fn build_text(f: &Fields<'_>, p: &CommandParser) -> Result<Command, ParseError> {
    let at = Vec2::new(f.number("x")?, f.number("y")?);
    let text = f.string("text")?;
    Ok(Command::Draw(Primitive::text(f.layer(DEFAULT_LAYER), f.color(p.default_color), at, text)))
}

fn build_point(f: &Fields<'_>, p: &CommandParser) -> Result<Command, ParseError> {
    let at = Vec2::new(f.number("x")?, f.number("y")?);
    Ok(Command::Draw(Primitive::point(f.layer(DEFAULT_LAYER), f.color(p.default_color), at)))
}

fn build_line(f: &Fields<'_>, p: &CommandParser) -> Result<Command, ParseError> {
    let (a, b) = f.corners()?;
    Ok(Command::Draw(Primitive::line(f.layer(DEFAULT_LAYER), f.color(p.default_color), a, b)))
}

fn build_rect(f: &Fields<'_>, p: &CommandParser) -> Result<Command, ParseError> {
    let (a, b) = f.corners()?;
    Ok(Command::Draw(Primitive::rect(f.layer(DEFAULT_LAYER), f.color(p.default_color), a, b)))
}

fn build_polyline(f: &Fields<'_>, p: &CommandParser) -> Result<Command, ParseError> {
    let points = f.vertices(CommandKind::Polyline, 2)?;
    Ok(Command::Draw(Primitive::polyline(f.layer(DEFAULT_LAYER), f.color(p.default_color), points)))
}

fn build_polygon(f: &Fields<'_>, p: &CommandParser) -> Result<Command, ParseError> {
    let points = f.vertices(CommandKind::Polygon, 3)?;
    Ok(Command::Draw(Primitive::polygon(f.layer(DEFAULT_LAYER), f.color(p.default_color), points)))
}

// ── field extraction ──────────────────────────────────────────────────────

/// Typed, lenient accessors over one record.
struct Fields<'a> {
    record: &'a Map<String, Value>,
}

impl Fields<'_> {
    fn required(&self, key: &'static str) -> Result<&Value, ParseError> {
        match self.record.get(key) {
            None | Some(Value::Null) => Err(ParseError::MissingField(key)),
            Some(v) => Ok(v),
        }
    }

    /// Non-empty string `layer`, else `default`.
    fn layer(&self, default: &str) -> String {
        match self.record.get("layer").and_then(Value::as_str) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => default.to_string(),
        }
    }

    /// Hex `color`, else `default`. An unparsable value is reported but not fatal.
    fn color(&self, default: Color) -> Color {
        match self.record.get("color") {
            None | Some(Value::Null) => default,
            Some(v) => match v.as_str().and_then(Color::parse_hex) {
                Some(c) => c,
                None => {
                    log::warn!("invalid color {v}, using default {default}");
                    default
                }
            },
        }
    }

    fn number(&self, key: &'static str) -> Result<f64, ParseError> {
        let v = self.required(key)?;
        as_number(v).ok_or_else(|| invalid(key, v))
    }

    fn integer(&self, key: &'static str) -> Result<i64, ParseError> {
        let v = self.required(key)?;
        as_integer(v).ok_or_else(|| invalid(key, v))
    }

    fn string(&self, key: &'static str) -> Result<String, ParseError> {
        let v = self.required(key)?;
        v.as_str().map(str::to_string).ok_or_else(|| invalid(key, v))
    }

    fn numbers(&self, key: &'static str) -> Result<Vec<f64>, ParseError> {
        let v = self.required(key)?;
        let items = v.as_array().ok_or_else(|| invalid(key, v))?;
        items
            .iter()
            .map(|item| as_number(item).ok_or_else(|| invalid(key, item)))
            .collect()
    }

    /// `x0`,`y0`,`x1`,`y1` as two points.
    fn corners(&self) -> Result<(Vec2, Vec2), ParseError> {
        let a = Vec2::new(self.number("x0")?, self.number("y0")?);
        let b = Vec2::new(self.number("x1")?, self.number("y1")?);
        Ok((a, b))
    }

    /// Zips the `x` and `y` arrays into at least `min` vertices.
    fn vertices(&self, kind: CommandKind, min: usize) -> Result<Vec<Vec2>, ParseError> {
        let xs = self.numbers("x")?;
        let ys = self.numbers("y")?;
        if xs.len() != ys.len() {
            return Err(ParseError::LengthMismatch { x: xs.len(), y: ys.len() });
        }
        if xs.len() < min {
            return Err(ParseError::TooFewPoints { command: kind.keyword(), min, got: xs.len() });
        }
        Ok(xs.into_iter().zip(ys).map(|(x, y)| Vec2::new(x, y)).collect())
    }
}

fn invalid(field: &'static str, value: &Value) -> ParseError {
    ParseError::InvalidField { field, value: value.to_string() }
}

/// JSON number, or a string holding one. Non-finite values are rejected.
fn as_number(v: &Value) -> Option<f64> {
    let n = match v {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Integral JSON number, or a string holding one.
fn as_integer(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().or_else(|| {
            let f = n.as_f64()?;
            (f.fract() == 0.0 && f.abs() < i64::MAX as f64).then_some(f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Shape;

    fn parse(text: &str) -> Result<Command, ParseError> {
        CommandParser::default().parse_str(text)
    }

    fn draw(text: &str) -> Primitive {
        match parse(text) {
            Ok(Command::Draw(p)) => p,
            other => panic!("expected draw command, got {other:?}"),
        }
    }

    // ── dispatch ──────────────────────────────────────────────────────────

    #[test]
    fn control_commands() {
        assert_eq!(parse(r#"{"command":"reset"}"#), Ok(Command::Reset));
        assert_eq!(parse(r#"{"command":"clear"}"#), Ok(Command::Clear(ClearTarget::All)));
        assert_eq!(
            parse(r#"{"command":"clear","layer":"l1"}"#),
            Ok(Command::Clear(ClearTarget::Layer("l1".into())))
        );
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert_eq!(
            parse(r#"{"command":"circle","id":"7"}"#),
            Err(ParseError::UnknownCommand("circle".into()))
        );
    }

    #[test]
    fn command_match_is_exact() {
        assert!(matches!(parse(r#"{"command":"Point","x":0,"y":0}"#), Err(ParseError::UnknownCommand(_))));
        assert!(matches!(parse(r#"{"command":"polygon","x":[0,1,2],"y":[0,1,0]}"#), Err(ParseError::UnknownCommand(_))));
    }

    #[test]
    fn missing_or_non_string_command() {
        assert_eq!(parse(r#"{"x":1}"#), Err(ParseError::MissingCommand));
        assert_eq!(parse(r#"{"command":3}"#), Err(ParseError::MissingCommand));
        assert_eq!(parse("[1,2]"), Err(ParseError::NotAnObject));
        assert!(matches!(parse("{ nope"), Err(ParseError::Json(_))));
    }

    // ── cache ─────────────────────────────────────────────────────────────

    #[test]
    fn cache_id_as_string_or_number() {
        let slot = |id: i64| -> Result<Command, ParseError> {
            Ok(Command::Cache(CacheSlot::new(id).unwrap()))
        };
        assert_eq!(parse(r#"{"command":"cache","id":"1"}"#), slot(1));
        assert_eq!(parse(r#"{"command":"cache","id":4}"#), slot(4));
        assert_eq!(parse(r#"{"command":"cache","id":2.0}"#), slot(2));
    }

    #[test]
    fn cache_id_out_of_range_or_unparsable() {
        assert_eq!(parse(r#"{"command":"cache","id":"0"}"#), Err(ParseError::SlotOutOfRange(0)));
        assert_eq!(parse(r#"{"command":"cache","id":5}"#), Err(ParseError::SlotOutOfRange(5)));
        assert!(matches!(parse(r#"{"command":"cache","id":"one"}"#), Err(ParseError::InvalidField { field: "id", .. })));
        assert!(matches!(parse(r#"{"command":"cache","id":1.5}"#), Err(ParseError::InvalidField { field: "id", .. })));
        assert_eq!(parse(r#"{"command":"cache"}"#), Err(ParseError::MissingField("id")));
    }

    // ── defaults ──────────────────────────────────────────────────────────

    #[test]
    fn layer_and_color_default() {
        let p = draw(r#"{"command":"point","x":-90,"y":45}"#);
        assert_eq!(p.layer, DEFAULT_LAYER);
        assert_eq!(p.color, Color::WHITE);
    }

    #[test]
    fn parser_default_color_applies() {
        let parser = CommandParser::new(Color::BLACK);
        match parser.parse_str(r#"{"command":"point","x":0,"y":0,"color":"red"}"#) {
            Ok(Command::Draw(p)) => assert_eq!(p.color, Color::BLACK),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let p = draw(r#"{"command":"point","x":1,"y":2,"id":"7","extra":[1]}"#);
        assert_eq!(p.shape, Shape::Point(crate::scene::shapes::PointShape { at: Vec2::new(1.0, 2.0) }));
    }

    // ── shapes ────────────────────────────────────────────────────────────

    #[test]
    fn text_with_layer_and_color() {
        let p = draw(r#"{"command":"text","layer":"layer1","x":0,"y":0,"text":"center-red","color":"0xffff0000"}"#);
        assert_eq!(p.layer, "layer1");
        assert_eq!(p.color, Color::from_argb(0xffff_0000));
        match p.shape {
            Shape::Text(t) => {
                assert_eq!(t.text, "center-red");
                assert_eq!(t.at, Vec2::zero());
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn text_requires_text_field() {
        assert_eq!(parse(r#"{"command":"text","x":0,"y":0}"#), Err(ParseError::MissingField("text")));
    }

    #[test]
    fn coordinates_are_required_numbers() {
        assert_eq!(parse(r#"{"command":"point","x":1}"#), Err(ParseError::MissingField("y")));
        assert!(matches!(parse(r#"{"command":"point","x":"abc","y":1}"#), Err(ParseError::InvalidField { field: "x", .. })));
        assert!(matches!(parse(r#"{"command":"line","x0":1,"y0":1,"x1":2}"#), Err(ParseError::MissingField("y1"))));
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let p = draw(r#"{"command":"point","x":"12.5","y":" -3 "}"#);
        assert_eq!(p.bounds().min, Vec2::new(12.5, -3.0));
    }

    #[test]
    fn rect_corners_are_normalized() {
        let p = draw(r#"{"command":"rect","x0":90,"y0":-45,"x1":-90,"y1":45,"color":"0x7f1f2f3f"}"#);
        assert_eq!(p.bounds().min, Vec2::new(-90.0, -45.0));
        assert_eq!(p.color.a, 0x7f);
    }

    #[test]
    fn polyline_with_four_points() {
        let p = draw(r#"{"command":"polyline","x":[20,90,20,90],"y":[20,20,90,90],"color":"0xfff66f00"}"#);
        match p.shape {
            Shape::Polyline(path) => {
                assert_eq!(path.len(), 4);
                assert_eq!(path.points[1], Vec2::new(90.0, 20.0));
            }
            other => panic!("expected polyline, got {other:?}"),
        }
    }

    #[test]
    fn polyline_length_mismatch() {
        assert_eq!(
            parse(r#"{"command":"polyline","x":[20,90],"y":[20,20,90]}"#),
            Err(ParseError::LengthMismatch { x: 2, y: 3 })
        );
    }

    #[test]
    fn minimum_vertex_counts() {
        assert_eq!(
            parse(r#"{"command":"polyline","x":[1],"y":[1]}"#),
            Err(ParseError::TooFewPoints { command: "polyline", min: 2, got: 1 })
        );
        assert_eq!(
            parse(r#"{"command":"poly","x":[0,90],"y":[0,0]}"#),
            Err(ParseError::TooFewPoints { command: "poly", min: 3, got: 2 })
        );
        assert!(matches!(draw(r#"{"command":"poly","x":[0,90,90],"y":[0,0,20]}"#).shape, Shape::Polygon(_)));
    }

    #[test]
    fn vertex_arrays_must_be_numeric_arrays() {
        assert!(matches!(parse(r#"{"command":"polyline","x":5,"y":[1,2]}"#), Err(ParseError::InvalidField { field: "x", .. })));
        assert!(matches!(parse(r#"{"command":"polyline","x":[1,"b"],"y":[1,2]}"#), Err(ParseError::InvalidField { field: "x", .. })));
    }

    #[test]
    fn parsing_is_deterministic() {
        let text = r#"{"command":"line","layer":"l","x0":1,"y0":2,"x1":3,"y1":4,"color":"0xff00ff00"}"#;
        assert_eq!(parse(text), parse(text));
    }
}
