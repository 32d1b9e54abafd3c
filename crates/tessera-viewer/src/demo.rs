//! Built-in command streams.

/// Labels, markers and shapes around the globe centre, ending with `cache 1`.
pub const SHOWCASE: &[&str] = &[
    r#"{ "command":"clear" }"#,
    r#"{ "command":"text", "layer":"layer1", "x":   0, "y": 0,  "text":"center-red",   "color":"0xffff0000" }"#,
    r#"{ "command":"text", "layer":"layer1", "x":   0, "y": 0,  "text":"center-green", "color":"0xff00ff00" }"#,
    r#"{ "command":"text", "layer":"layer1", "x":   0, "y": 0,  "text":"center-blue",  "color":"0xff0000ff" }"#,
    r#"{ "command":"text", "layer":"layer1", "x":   0, "y": 0,  "text":"center-white", "color":"0xffffffff" }"#,
    r#"{ "command":"text", "x":-180, "y":-90, "text":"left bottom" }"#,
    r#"{ "command":"text", "x":-180, "y": 90, "text":"left top" }"#,
    r#"{ "command":"text", "x": 180, "y":-90, "text":"right bottom" }"#,
    r#"{ "command":"text", "x": 180, "y": 90, "text":"right top" }"#,
    r#"{ "command":"point", "layer":"layer1", "x": 90, "y":45, "color":"0xffff0000" }"#,
    r#"{ "command":"point", "x":-90, "y":45, "color":"0xff00ff00" }"#,
    r#"{ "command":"line", "layer":"layer1", "x0": 90, "y0":-45, "x1":-90, "y1":-45, "color":"0xff00ff00" }"#,
    r#"{ "command":"rect", "x0": 90, "y0":-45, "x1":-90, "y1": 45, "color":"0x7f1f2f3f" }"#,
    r#"{ "command":"polyline", "x": [20,90,20,90], "y": [20,20,90,90], "color":"0xfff66f00" }"#,
    r#"{ "command":"text", "x":20, "y":20, "text":"pl0", "color":"0xfff66f00" }"#,
    r#"{ "command":"text", "x":90, "y":20, "text":"pl1", "color":"0xfff66f00" }"#,
    r#"{ "command":"text", "x":20, "y":90, "text":"pl2", "color":"0xfff66f00" }"#,
    r#"{ "command":"text", "x":90, "y":90, "text":"pl3", "color":"0xfff66f00" }"#,
    r#"{ "command":"poly", "x": [0,90,90], "y": [0,0,20], "color":"0x7f1f2f3f" }"#,
    r#"{ "command":"text", "x":0, "y":0, "text":"p0" }"#,
    r#"{ "command":"text", "x":90, "y":0, "text":"p1" }"#,
    r#"{ "command":"text", "x":90, "y":20, "text":"p2" }"#,
    r#"{ "command":"cache", "id":"1" }"#,
];

/// `n × n` grid with 10-unit spacing: a white and a red label per cell plus a point.
pub fn stress_grid(n: u32) -> impl Iterator<Item = String> {
    (0..n).flat_map(move |y| (0..n).map(move |x| (x, y))).enumerate().flat_map(|(k, (x, y))| {
        let (sx, sy) = (x as i64 * 10, y as i64 * 10);
        [
            format!(r#"{{ "command":"text", "x":{sx}, "y":{sy}, "text":"id_{k}" }}"#),
            format!(r#"{{ "command":"text", "x":{sx}, "y":{sy}, "text":"idr_{k}", "color":"0xffff0000" }}"#),
            format!(r#"{{ "command":"point", "x":{}, "y":{sy} }}"#, sx - 5),
        ]
    })
}
