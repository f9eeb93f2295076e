//! Bounding-box editor: headless command-line front end.
//!
//! Runs the same widget a host page embeds, with an in-memory render surface
//! and form field, so the codec, tile grid and drag behaviour can be checked
//! from a shell.
//!
//! # Usage
//!
//! ```text
//! bbox-editor [--config <PATH>] <COMMAND>
//!
//! Commands:
//!   encode <MINX> <MINY> <MAXX> <MAXY>   Print the GeoJSON for a box
//!   decode <TEXT>                        Print the bounds encoded in TEXT
//!   tiles <TEXT>                         Fit the view to TEXT and list tile URLs
//!   simulate-drag --from X,Y --to X,Y [--field TEXT]
//!                                        Bind a field, drag, print the field
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable             | Description                                    |
//! |----------------------|------------------------------------------------|
//! | `BBOX_EDITOR_CONFIG` | Path of the TOML configuration file            |
//! | `RUST_LOG`           | Log filter; overrides `editor.log_level`       |
//!
//! Logs go to stderr so stdout carries only command output.

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bbox_core::{decode, encode, PixelPoint, PixelSize, Rectangle};
use bbox_editor::application::{EditorWidget, FormField};
use bbox_editor::domain::{EditorConfig, PointerEvent};
use bbox_editor::infrastructure::{load_config, FixedSurface, TextField, WmsTileSource};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Headless bounding-box editor.
#[derive(Debug, Parser)]
#[command(
    name = "bbox-editor",
    about = "Draw, encode and inspect a geographic bounding box",
    version
)]
struct Cli {
    /// TOML configuration file.  Defaults apply when absent.
    #[arg(long, env = "BBOX_EDITOR_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the GeoJSON polygon for a box given by its bounds.
    #[command(allow_negative_numbers = true)]
    Encode {
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    },
    /// Decode GeoJSON text and print its bounds.
    Decode { text: String },
    /// Fit the view to the box in TEXT and print the basemap tile URLs.
    Tiles { text: String },
    /// Bind a field, draw one box by dragging, and print the field afterwards.
    SimulateDrag {
        /// Press position in surface pixels, as `x,y`.
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        from: PixelPoint,
        /// Release position in surface pixels, as `x,y`.
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        to: PixelPoint,
        /// Initial field text.
        #[arg(long, default_value = "")]
        field: String,
    },
}

/// Parses `x,y` into a pixel position.
fn parse_point(text: &str) -> Result<PixelPoint, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{text}`"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x in `{text}`: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y in `{text}`: {e}"))?;
    Ok(PixelPoint::new(x, y))
}

// ── Commands ──────────────────────────────────────────────────────────────────

/// Builds a widget over a visible surface of the configured size.
fn headless_widget(config: &EditorConfig) -> anyhow::Result<EditorWidget> {
    let surface = FixedSurface::new(PixelSize::new(config.view.width, config.view.height));
    let tiles = WmsTileSource::new(
        config.wms.clone(),
        config.projection.code.clone(),
        config.tile_grid.tile_size,
    );
    EditorWidget::new(config, Box::new(surface), Box::new(tiles)).context("invalid editor configuration")
}

fn run(command: Command, config: &EditorConfig) -> anyhow::Result<()> {
    match command {
        Command::Encode { min_x, min_y, max_x, max_y } => {
            let rect = Rectangle::new(min_x, min_y, max_x, max_y).context("invalid bounds")?;
            println!("{}", encode(&rect));
        }
        Command::Decode { text } => {
            let rect = decode(&text).context("could not decode geometry")?;
            let [min_x, min_y, max_x, max_y] = rect.extent().to_array();
            println!("{min_x} {min_y} {max_x} {max_y}");
        }
        Command::Tiles { text } => {
            let mut widget = headless_widget(config)?;
            widget.set_selection(&text).context("could not decode geometry")?;
            let frame = widget.render().context("render failed")?;
            info!(z = frame.resolution_index, tiles = frame.tiles.len(), "view fitted");
            for tile in &frame.tiles {
                println!("{}", tile.url);
            }
        }
        Command::SimulateDrag { from, to, field } => {
            let mut widget = headless_widget(config)?;
            let field = Rc::new(TextField::new(field));
            let seeded = widget.bind(Rc::clone(&field));
            info!(?seeded, "field bound");

            widget.activate_draw();
            widget.handle_pointer(PointerEvent::Press(from));
            widget.handle_pointer(PointerEvent::Move(to));
            let response = widget.handle_pointer(PointerEvent::Release(to));
            info!(?response, "drag finished");

            println!("{}", field.value());
        }
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Program entry point.
///
/// # What happens at startup
///
/// 1. CLI arguments are parsed with `clap`.
/// 2. The configuration file is loaded (defaults if it does not exist).
/// 3. `tracing_subscriber` is initialised.  `RUST_LOG` wins; otherwise the
///    configured `editor.log_level` applies.
/// 4. The selected command runs.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => EditorConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.editor.log_level.as_str())),
        )
        .init();

    run(cli.command, &config)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
