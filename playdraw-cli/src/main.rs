mod play_file;

use play_file::{PassSource, PlayFile};
use playdraw_core::{
    DuplicatePolicy, NamePolicy, describe_movement, draw_coordinate_play, draw_named_play,
    scouting_report,
};

use std::{
    fs::create_dir_all as create_generated_dir,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use svg::save as save_as_svg;
use tracing::{Level, info};

#[derive(Parser, Debug)]
#[command(version, long_about = None)]
struct Args {
    /// Play file (TOML) describing the roster and the ball movement
    play: PathBuf,

    /// Directory the SVG is written to
    #[arg(short, long, default_value = "generated")]
    out_dir: PathBuf,

    /// Overrides the play file's handling of unknown player names
    #[arg(short, long, value_enum)]
    policy: Option<NamePolicy>,

    /// Overrides the play file's handling of duplicated player names
    #[arg(short, long, value_enum)]
    duplicates: Option<DuplicatePolicy>,

    /// Also print the team's scouting report
    #[arg(short, long)]
    scouting: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    run(&args)?;

    Ok(())
}

/// Draws the play described by `args.play` and returns the path of the
/// saved SVG.
fn run(args: &Args) -> Result<PathBuf> {
    let play = PlayFile::load(&args.play)?;

    let mut resolver = play.resolver;
    if let Some(policy) = args.policy {
        resolver.name_policy = policy;
    }
    if let Some(duplicates) = args.duplicates {
        resolver.duplicate_policy = duplicates;
    }

    let canvas = play.canvas_config()?;
    let registry = play.registry().context("Failed to build the roster")?;

    let document = match play.pass()? {
        PassSource::Names(names) => {
            let drawn = draw_named_play(&canvas, &registry, names, resolver)?;
            println!("{}", drawn.report);
            drawn.document
        }
        PassSource::Coordinates(coords) => {
            let document = draw_coordinate_play(&canvas, coords)?;
            println!("Ball movement information: {}", describe_movement(coords)?);
            document
        }
    };

    if args.scouting {
        println!();
        println!("{}", scouting_report(&registry));
    }

    if !args.out_dir.try_exists()? {
        create_generated_dir(&args.out_dir).with_context(|| {
            format!("Failed to create output directory {}", args.out_dir.display())
        })?;
        info!("Directory {} created.", args.out_dir.display());
    }

    let file_name = svg_file_name(&args.out_dir, &canvas.canvas_id());
    info!("Saving play as SVG to: {}", file_name.display());

    save_as_svg(&file_name, &document)
        .with_context(|| format!("Failed to save SVG file {}", file_name.display()))?;

    Ok(file_name)
}

/// `out_dir/<stem>.svg`, where every character of the canvas id outside
/// `[A-Za-z0-9_-]` becomes `_`.
fn svg_file_name(out_dir: &Path, canvas_id: &str) -> PathBuf {
    let mut stem = canvas_id.chars().map(file_stem_char).collect::<String>();
    if stem.is_empty() {
        stem.push_str("play");
    }

    out_dir.join(format!("{stem}.svg"))
}

fn file_stem_char(c: char) -> char {
    if c.is_ascii_alphanumeric() || matches!(c, '_' | '-') {
        c
    } else {
        '_'
    }
}
