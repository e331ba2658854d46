//! Volcano Atlas
//!
//! CLI commands:
//! - view: Open the interactive world map (default)
//! - list: Print the loaded volcanoes

mod config;
mod dataset;
mod era;
mod geometry;
mod gui;
mod input;
mod logging;
mod state;
mod views;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "volcano_atlas")]
#[command(about = "Interactive world map of volcanoes by last known eruption")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to atlas.yaml config
    #[arg(short, long, default_value = "atlas.yaml")]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the map viewer
    View,

    /// List loaded volcanoes with their projected marker positions
    List {
        /// Filter by last-eruption code (e.g. D1, U, ?)
        #[arg(short, long)]
        era: Option<String>,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    logging::init_logging("logs", logging::DEFAULT_FILTER);
    tracing::info!("Volcano Atlas starting up");

    let cli = Cli::parse();
    tracing::debug!("CLI args parsed: config={:?}", cli.config);

    let config = config::Config::load_or_default(&cli.config)?
        .with_overrides(&config::EnvOverrides::load());

    let scene = match load_scene(&config) {
        Ok(scene) => scene,
        Err(e) => {
            log_error!(format!("{:#}", e));
            return Err(e);
        }
    };

    match cli.command.unwrap_or(Commands::View) {
        Commands::View => {
            tracing::info!("Launching map viewer");
            gui::run_viewer(
                scene,
                [config.window.width, config.window.height],
                config.text,
            )?;
        }

        Commands::List { era, json } => {
            list_volcanoes(&scene, era.as_deref(), json)?;
        }
    }

    Ok(())
}

/// Load map image and dataset; the map size must be known before projecting
fn load_scene(config: &config::Config) -> anyhow::Result<gui::Scene> {
    let image_path = config.map_image_path();
    let map_image = dataset::MapImage::open(&image_path)
        .with_context(|| format!("Cannot start without map image {}", image_path.display()))?;

    let layout = geometry::Layout::new(
        config.window.width as f64,
        config.window.height as f64,
        map_image.width,
        map_image.height,
    );
    tracing::debug!("Layout: {:?}", layout);

    let dataset_path = config.dataset_path();
    let records = dataset::load_records_from_path(&dataset_path, &layout.map)
        .with_context(|| format!("Cannot start without dataset {}", dataset_path.display()))?;

    Ok(gui::Scene {
        state: state::AppState::new(records),
        map_image,
        layout,
    })
}

/// Records matching a raw era code; unrecognized codes select `Unknown`
fn filter_by_era<'a>(
    records: &'a [dataset::VolcanoRecord],
    era: Option<&str>,
) -> Vec<&'a dataset::VolcanoRecord> {
    let wanted = era.map(era::Era::from_code);
    records
        .iter()
        .filter(|r| wanted.map_or(true, |e| r.last_eruption == e))
        .collect()
}

/// List loaded volcanoes
fn list_volcanoes(scene: &gui::Scene, era: Option<&str>, json: bool) -> anyhow::Result<()> {
    let records = filter_by_era(scene.state.records(), era);

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    println!("Volcanoes ({}):", records.len());
    println!();

    for e in era::Era::ALL {
        let in_era: Vec<_> = records.iter().filter(|r| r.last_eruption == e).collect();
        if in_era.is_empty() {
            continue;
        }
        println!("## {} - {}", e.code(), e.label());
        for r in in_era {
            println!(
                "  - {} ({}) {} m, marker {:.1} at ({:.1}, {:.1})",
                r.name,
                r.country,
                r.elevation,
                r.marker_size(),
                r.screen_x,
                r.screen_y
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::era::Era;
    use crate::state::tests::record;

    fn records() -> Vec<dataset::VolcanoRecord> {
        let mut etna = record("Etna", 0.0, 0.0, 3350.0);
        etna.last_eruption = Era::D1;
        let mut nameless = record("Nameless", 0.0, 0.0, 100.0);
        nameless.last_eruption = Era::from_code("D9");
        let mut fuji = record("Fuji", 0.0, 0.0, 3776.0);
        fuji.last_eruption = Era::D3;
        vec![etna, nameless, fuji]
    }

    fn names(records: &[&dataset::VolcanoRecord]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_no_era_keeps_everything() {
        let all = records();
        assert_eq!(names(&filter_by_era(&all, None)), ["Etna", "Nameless", "Fuji"]);
    }

    #[test]
    fn test_known_era_filters() {
        let all = records();
        assert_eq!(names(&filter_by_era(&all, Some("D1"))), ["Etna"]);
        assert_eq!(names(&filter_by_era(&all, Some("D3"))), ["Fuji"]);
        assert!(filter_by_era(&all, Some("Q")).is_empty());
    }

    #[test]
    fn test_unrecognized_era_selects_unknown() {
        let all = records();
        assert_eq!(names(&filter_by_era(&all, Some("ZZ"))), ["Nameless"]);
        assert_eq!(names(&filter_by_era(&all, Some("Unknown"))), ["Nameless"]);
    }
}
