use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;
use trichord::api::{group_duplicates, Bounds2, GeomCfg, GridCfg, ReplayToken, Scene, SceneFile};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Longest triangle chord through a point pair")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Find the point pair whose line cuts the longest chord out of the triangle
    Solve {
        /// Scene JSON: {"triangle": {"a": [x, y], "b": .., "c": ..}, "points": [[x, y], ..]}
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: Option<String>,
        /// Count crossings that land exactly on a triangle vertex
        #[arg(long)]
        inclusive: bool,
    },
    /// Split the scene's points into duplicated and unique positions
    Dupes {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: Option<String>,
    },
    /// Generate a random scene on a lattice
    Random {
        #[arg(long, default_value_t = 20)]
        points: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Lattice resolution per axis
        #[arg(long, default_value_t = 30)]
        grid: u32,
        #[arg(long)]
        out: Option<String>,
    },
    /// Print a small version JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve {
            input,
            out,
            inclusive,
        } => solve(&input, out.as_deref(), inclusive),
        Action::Dupes { input, out } => dupes(&input, out.as_deref()),
        Action::Random {
            points,
            seed,
            index,
            grid,
            out,
        } => random(points, seed, index, grid, out.as_deref()),
        Action::Report => report(),
    }
}

fn load_scene(path: &str) -> Result<SceneFile> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing scene {path}"))
}

fn emit<T: Serialize>(value: &T, out: Option<&str>) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    let Some(out) = out else {
        println!("{text}");
        return Ok(());
    };
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, text).with_context(|| format!("writing {out}"))?;
    Ok(())
}

fn solve_scene(file: SceneFile, inclusive: bool) -> Result<serde_json::Value> {
    let cfg = if inclusive {
        GeomCfg::inclusive()
    } else {
        GeomCfg::default()
    };
    let mut scene = file.into_scene(Bounds2::default()).with_cfg(cfg);
    let res = *scene.solve()?;
    Ok(serde_json::json!({
        "length": res.length(),
        "result": res,
        "points": scene.points().len(),
    }))
}

fn solve(input: &str, out: Option<&str>, inclusive: bool) -> Result<()> {
    tracing::info!(input, out = ?out, inclusive, "solve");
    let file = load_scene(input)?;
    let doc = solve_scene(file, inclusive)?;
    emit(&doc, out)
}

fn dupes(input: &str, out: Option<&str>) -> Result<()> {
    tracing::info!(input, out = ?out, "dupes");
    let file = load_scene(input)?;
    emit(&group_duplicates(&file.points), out)
}

fn random_scene(points: usize, seed: u64, index: u64, grid: u32) -> Result<SceneFile> {
    let grid = GridCfg {
        cols: grid,
        rows: grid,
    };
    let mut scene = Scene::new(Bounds2::default()).with_grid(grid);
    scene.set_random_triangle(ReplayToken::new(seed, 2 * index))?;
    scene.add_random_points(points, ReplayToken::new(seed, 2 * index + 1))?;
    Ok(scene.to_file())
}

fn random(points: usize, seed: u64, index: u64, grid: u32, out: Option<&str>) -> Result<()> {
    tracing::info!(points, seed, index, grid, "random");
    emit(&random_scene(points, seed, index, grid)?, out)
}

fn report() -> Result<()> {
    let rev = option_env!("GIT_COMMIT").unwrap_or("unknown");
    let obj = serde_json::json!({
        "version": trichord::VERSION,
        "code_rev": rev,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
