#![warn(clippy::all)]

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use golife::{generate, write_gif_to_path, Config, LifeGrid, Termination, UpdatePacer};
use std::path::{Path, PathBuf};

/// Simulates Conway's Game of Life and renders the evolution as a GIF.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Pattern file to load; required unless --random is given.
    input: Option<PathBuf>,

    /// How to interpret the pattern file.
    #[arg(short, long, value_enum, default_value_t = Format::Auto)]
    format: Format,

    /// Marker for alive cells in text patterns, matched case-insensitively.
    #[arg(long, default_value_t = Config::TEXT_MARKER as char)]
    marker: char,

    /// Start from a random field of the given size instead of a file.
    #[arg(long, value_name = "WIDTHxHEIGHT", value_parser = parse_size, conflicts_with = "input")]
    random: Option<(usize, usize)>,

    /// Seed for --random; drawn from entropy when omitted.
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Fill rate for --random.
    #[arg(long, default_value_t = Config::RANDOM_FILL_RATE)]
    fill_rate: f64,

    /// Magnification of rendered frames.
    #[arg(short, long, default_value_t = Config::DEFAULT_SCALE)]
    scale: u32,

    /// Hard cap on generated frames.
    #[arg(long, default_value_t = Config::MAX_ITERATIONS)]
    max_iterations: usize,

    /// Where to write the GIF.
    #[arg(short, long, default_value = "life.gif", conflicts_with = "terminal")]
    output: PathBuf,

    /// Print generations to the terminal forever instead of writing a GIF.
    #[arg(short, long)]
    terminal: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Auto,
    Json,
    Text,
    Rle,
    Image,
}

fn parse_size(value: &str) -> Result<(usize, usize), String> {
    let (w, h) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {value:?}"))?;
    let width = w.trim().parse().map_err(|_| format!("bad width {w:?}"))?;
    let height = h.trim().parse().map_err(|_| format!("bad height {h:?}"))?;
    Ok((width, height))
}

fn detect_format(path: &Path) -> Format {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("json") => Format::Json,
        Some("rle") => Format::Rle,
        Some("png" | "jpg" | "jpeg" | "bmp" | "gif") => Format::Image,
        _ => Format::Text,
    }
}

fn load_grid(cli: &Cli) -> Result<LifeGrid> {
    if let Some((width, height)) = cli.random {
        let mut grid = LifeGrid::new(width, height)?;
        grid.randomize(cli.seed, cli.fill_rate);
        return Ok(grid);
    }
    let Some(path) = &cli.input else {
        bail!("either a pattern file or --random is required");
    };
    let format = match cli.format {
        Format::Auto => detect_format(path),
        other => other,
    };
    let grid = match format {
        Format::Json => golife::from_json_file(path)?,
        Format::Rle => golife::from_rle(&std::fs::read_to_string(path)?)?,
        Format::Image => golife::from_image_file(path)?,
        Format::Text | Format::Auto => {
            if !cli.marker.is_ascii() {
                bail!("--marker must be an ASCII character");
            }
            golife::from_text(&std::fs::read_to_string(path)?, cli.marker as u8)?
        }
    };
    Ok(grid)
}

fn run_terminal(grid: &mut LifeGrid) -> ! {
    let mut pacer = UpdatePacer::new(Config::UPDATES_PER_MINUTE);
    loop {
        println!("{}", grid.to_text());
        grid.advance();
        pacer.delay();
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut grid = load_grid(&cli).context("failed to load the initial pattern")?;
    log::info!("loaded a {}x{} field", grid.width(), grid.height());

    if cli.terminal {
        run_terminal(&mut grid);
    }

    let animation = generate(&mut grid, cli.scale, cli.max_iterations)?;
    match animation.reason {
        Termination::StableCycleDetected => {
            log::info!("simulation settled after {} generations", animation.frames.len());
        }
        Termination::IterationLimitReached => {
            log::info!("simulation cut off at {} generations", animation.frames.len());
        }
    }

    write_gif_to_path(&cli.output, &animation)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    println!(
        "{} frames -> {}",
        animation.frames.len(),
        cli.output.display()
    );
    Ok(())
}
