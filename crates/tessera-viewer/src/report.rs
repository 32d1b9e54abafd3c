//! Plain-text rendering of the scene state.

use tessera_engine::scene::{CheckState, LayerCategory, LayerInfo, SceneManager};

fn check_mark(state: CheckState) -> &'static str {
    match state {
        CheckState::Checked => "[x]",
        CheckState::Unchecked => "[ ]",
        CheckState::PartiallyChecked => "[~]",
    }
}

/// Width of the name column in characters, so non-ASCII names line up.
fn name_column_width(layers: &[LayerInfo]) -> usize {
    layers
        .iter()
        .map(|l| l.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Layer".len())
}

/// Prints the layer table (newest layer first), totals, area and cache slots.
pub fn print_scene(scene: &SceneManager) {
    let name_width = name_column_width(scene.layers());

    let mut header = format!("  {:<name_width$}  All ", "Layer");
    for category in LayerCategory::ALL {
        header.push_str(&format!("  {:<5}", category.name()));
    }
    header.push_str("  Primitives");

    println!();
    println!("{header}");
    println!("  {}", "─".repeat(header.chars().count() - 2));

    for layer in scene.layers().iter().rev() {
        let mut row = format!("  {:<name_width$}  {}", layer.name, check_mark(layer.all_check_state()));
        for category in LayerCategory::ALL {
            let state = if layer.is_visible(category) { CheckState::Checked } else { CheckState::Unchecked };
            row.push_str(&format!("  {:<5}", check_mark(state)));
        }
        row.push_str(&format!("  {}", scene.layer_primitive_count(&layer.name)));
        println!("{row}");
    }

    println!();
    println!(
        "  {} primitives ({} visible) on {} layers",
        scene.primitive_count(),
        scene.visible_primitives().count(),
        scene.layers().len()
    );

    match scene.scene_area() {
        Some(r) => println!(
            "  area {:<11} [{}, {}] x [{}, {}]",
            scene.area_policy().label(),
            r.min.x,
            r.max.x,
            r.min.y,
            r.max.y
        ),
        None => println!("  area {:<11} (empty)", scene.area_policy().label()),
    }

    let slots = scene.cache().filled_slots();
    if slots.is_empty() {
        println!("  cache slots: none");
    } else {
        let ids: Vec<String> = slots.iter().map(u8::to_string).collect();
        println!("  cache slots: {}", ids.join(", "));
    }
    println!();
}
