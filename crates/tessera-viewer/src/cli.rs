//! Command-line definitions for the viewer.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tessera_engine::paint::Color;
use tessera_engine::scene::AreaPolicy;

#[derive(Parser)]
#[command(
    name = "tessera",
    version,
    about = "Headless viewer for tessera scene command streams"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log filter in env_logger syntax (e.g. "debug", "tessera_engine=trace").
    #[arg(long = "log", value_name = "FILTER", global = true)]
    pub log: Option<String>,

    /// Scene area policy: auto, unit or globe.
    #[arg(long = "area", value_name = "POLICY", default_value = "auto", global = true)]
    pub area: AreaPolicy,

    /// Color for records without one, as 0xAARRGGBB.
    #[arg(long = "color", value_name = "ARGB", value_parser = parse_color, global = true)]
    pub color: Option<Color>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Apply command files in order and print the resulting scene.
    Load(LoadArgs),

    /// Replay the built-in demo stream.
    Demo(DemoArgs),
}

#[derive(Parser)]
pub struct LoadArgs {
    /// Command files (JSON records). `-` reads standard input.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Keep the current scene instead of resetting before the first file.
    #[arg(long = "keep")]
    pub keep: bool,

    /// Afterwards, restore this cache slot (1-4) over the scene.
    #[arg(long = "restore", value_name = "ID")]
    pub restore: Option<i64>,

    /// Merge the restored slot into the scene instead of replacing it.
    #[arg(long = "merge", requires = "restore")]
    pub merge: bool,
}

#[derive(Parser)]
pub struct DemoArgs {
    /// Also emit an N×N grid of labels and points.
    #[arg(long = "stress", value_name = "N")]
    pub stress: Option<u32>,
}

fn parse_color(s: &str) -> Result<Color, String> {
    Color::parse_hex(s).ok_or_else(|| format!("`{s}` is not a 0xAARRGGBB color"))
}
