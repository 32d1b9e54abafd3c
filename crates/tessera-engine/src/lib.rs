//! Tessera scene command engine.
//!
//! Turns a stream of JSON drawing records (points, lines, rects, text,
//! polylines, polygons, plus `reset`/`clear`/`cache` controls) into a layered
//! scene with per-layer category visibility and four snapshot slots.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`command`] | `Command`, `CommandParser`, `CommandStream`, `ParseError` |
//! | [`scene`] | `SceneManager`, `SceneStore`, `LayerRegistry`, `CacheManager`, events |
//! | [`coords`] | `Vec2`, `Rect` |
//! | [`paint`] | `Color` |
//! | [`logging`] | `init_logging` |
//!
//! Rendering, projection and UI wiring are left to the embedding application,
//! which subscribes to [`scene::SceneEvent`]s and reads the scene back.
//!
//! # Quick start
//!
//! ```rust
//! use tessera_engine::scene::SceneManager;
//!
//! let mut scene = SceneManager::default();
//! scene.add_command(r#"{ "command":"clear" }"#).unwrap();
//! scene.add_command(r#"{ "command":"text", "layer":"layer1", "x":0, "y":0, "text":"hi" }"#).unwrap();
//! scene.add_command(r#"{ "command":"cache", "id":"1" }"#).unwrap();
//!
//! assert_eq!(scene.layer_primitive_count("layer1"), 1);
//! assert_eq!(scene.cache().filled_slots(), [1]);
//! ```

pub mod command;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;

#[cfg(test)]
mod scenario_tests {
    use crate::command::{Command, CommandParser, ParseError};
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::{CacheSlot, SceneManager, Shape};

    fn submit_all(scene: &mut SceneManager, records: &[&str]) {
        for r in records {
            scene.add_command(r).unwrap();
        }
    }

    #[test]
    fn text_then_cache_snapshot() {
        let mut scene = SceneManager::default();
        submit_all(&mut scene, &[
            r#"{"command":"clear"}"#,
            r#"{"command":"text","layer":"layer1","x":0,"y":0,"text":"center-red","color":"0xffff0000"}"#,
            r#"{"command":"cache","id":"1"}"#,
        ]);

        let prims: Vec<_> = scene.primitives().collect();
        assert_eq!(prims.len(), 1);
        assert_eq!(prims[0].layer, "layer1");
        assert_eq!(prims[0].color, Color::from_argb(0xffff_0000));
        match &prims[0].shape {
            Shape::Text(t) => {
                assert_eq!(t.at, Vec2::zero());
                assert_eq!(t.text, "center-red");
            }
            other => panic!("expected text, got {other:?}"),
        }

        let slot = scene.cache().get(CacheSlot::new(1).unwrap()).unwrap();
        assert_eq!(*slot, scene.snapshot());
    }

    #[test]
    fn unrecognized_command_leaves_scene_unchanged() {
        let mut scene = SceneManager::default();
        scene.add_command(r#"{"command":"point","x":1,"y":1}"#).unwrap();
        let before = scene.snapshot();

        let err = scene.add_command(r#"{"command":"circle","id":"7"}"#).unwrap_err();
        assert_eq!(err, ParseError::UnknownCommand("circle".into()));
        assert_eq!(scene.snapshot(), before);
    }

    #[test]
    fn clear_then_point_leaves_only_point() {
        let mut scene = SceneManager::default();
        submit_all(&mut scene, &[
            r#"{"command":"line","x0":0,"y0":0,"x1":1,"y1":1}"#,
            r#"{"command":"clear"}"#,
            r#"{"command":"point","x":5,"y":5}"#,
        ]);
        assert_eq!(scene.primitive_count(), 1);
        assert!(matches!(scene.primitives().next().unwrap().shape, Shape::Point(_)));
    }

    #[test]
    fn parse_twice_executes_identically() {
        let parser = CommandParser::default();
        let records = [
            r#"{"command":"poly","layer":"p","x":[0,90,90],"y":[0,0,20],"color":"0x7f1f2f3f"}"#,
            r#"{"command":"text","x":90,"y":20,"text":"p2"}"#,
            r#"{"command":"clear","layer":"p"}"#,
        ];

        let run = || {
            let mut scene = SceneManager::default();
            for r in records {
                let cmd: Command = parser.parse_str(r).unwrap();
                cmd.execute(&mut scene);
            }
            scene.snapshot()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn parsing_ahead_of_execution_matches_inline() {
        let text = "{\"command\":\"point\",\"layer\":\"a\",\"x\":1,\"y\":1}\n\
                    {\"command\":\"cache\",\"id\":2}\n\
                    {\"command\":\"reset\"}\n\
                    {\"command\":\"point\",\"layer\":\"b\",\"x\":2,\"y\":2}";

        let mut inline = SceneManager::default();
        inline.load_str(text, false);

        let parsed: Vec<Command> = inline
            .parser()
            .parse_stream(text)
            .collect::<Result<_, _>>()
            .unwrap();
        let mut ahead = SceneManager::default();
        for cmd in parsed {
            ahead.apply(cmd);
        }

        assert_eq!(inline.snapshot(), ahead.snapshot());
        assert_eq!(
            inline.cache().get(CacheSlot::new(2).unwrap()),
            ahead.cache().get(CacheSlot::new(2).unwrap())
        );
    }

    #[test]
    fn polyline_stream_acceptance() {
        let parser = CommandParser::default();
        match parser.parse_str(r#"{"command":"polyline","x":[20,90,20,90],"y":[20,20,90,90],"color":"0xfff66f00"}"#) {
            Ok(Command::Draw(p)) => assert!(matches!(&p.shape, Shape::Polyline(path) if path.len() == 4)),
            other => panic!("unexpected {other:?}"),
        }
        assert!(parser.parse_str(r#"{"command":"polyline","x":[20,90],"y":[20,20,90]}"#).is_err());
    }
}
