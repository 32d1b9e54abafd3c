use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{debug, info};
use tessera_engine::logging::{LoggingConfig, init_logging};
use tessera_engine::scene::{SceneConfig, SceneEvent, SceneManager};

mod cli;
mod demo;
mod report;

use crate::cli::{Cli, Command, DemoArgs, LoadArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::default();
    if let Some(filter) = &cli.log {
        logging = logging.with_filter(filter.clone());
    }
    init_logging(logging);

    let mut config = SceneConfig::default().with_area_policy(cli.area);
    if let Some(color) = cli.color {
        config = config.with_default_color(color);
    }

    let mut scene = SceneManager::new(config);
    scene.subscribe(|event| match event {
        SceneEvent::LayerVisibilityChanged(info) => {
            debug!("layer `{}` now {:?}", info.name, info.all_check_state())
        }
        other => debug!("{other:?}"),
    });

    match cli.command {
        Command::Load(args) => run_load(&mut scene, &args)?,
        Command::Demo(args) => run_demo(&mut scene, &args),
    }

    report::print_scene(&scene);
    Ok(())
}

fn run_load(scene: &mut SceneManager, args: &LoadArgs) -> Result<()> {
    for (i, path) in args.files.iter().enumerate() {
        let reset = i == 0 && !args.keep;
        if path == Path::new("-") {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read commands from stdin")?;
            let summary = scene.load_str(&text, reset);
            info!("stdin: {} applied, {} rejected", summary.applied, summary.rejected);
        } else {
            scene.load(path, reset)?;
        }
    }

    if let Some(id) = args.restore {
        if let Err(e) = scene.load_cache(id, !args.merge) {
            bail!("cannot restore cache slot: {e}");
        }
    }
    Ok(())
}

fn run_demo(scene: &mut SceneManager, args: &DemoArgs) {
    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          TESSERA SCENE VIEWER          ║");
    println!("  ║    command stream  ·  layered scene    ║");
    println!("  ╚════════════════════════════════════════╝");

    for record in demo::SHOWCASE {
        // Failures are logged by the scene; the stream keeps going.
        let _ = scene.add_command(record);
    }

    if let Some(n) = args.stress {
        info!("stress grid {n}x{n}");
        for record in demo::stress_grid(n) {
            let _ = scene.add_command(&record);
        }
    }
}
