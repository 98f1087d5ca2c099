#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

use std::{io::Write, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use labyrinth::{Colormap, Params};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Builds a random labyrinth using an automatic, random iterative wall growing
/// algorithm.
///
/// There are two parent roots (the outer walls). Sub-roots grow from these
/// parent roots as long as there is room to grow in. As the two root families
/// are never allowed to touch, the maze is guaranteed to be perfect: there is
/// a single, unique solution.
#[derive(Parser, Debug)]
#[command(version, about, long_about)]
struct Args {
    /// Side length in squares. Must be odd and below 256.
    #[arg(short, long, default_value_t = Params::DEFAULT_SIZE)]
    size: usize,

    /// Laziness of direction change, between 0 and 1. Higher values lead to
    /// more straight lines.
    #[arg(short, long, default_value_t = Params::DEFAULT_LAZINESS)]
    laziness: f64,

    /// Direction bias between -1 and 1. -1 favours up-down, +1 left-right,
    /// 0 means no bias.
    #[arg(short, long, default_value_t = Params::DEFAULT_BIAS, allow_negative_numbers = true)]
    bias: f64,

    /// Maximum length of a single root, relative to the side length.
    #[arg(short, long, default_value_t = Params::DEFAULT_ROOT_FACTOR)]
    root_factor: f64,

    /// Colormap for image output.
    #[arg(short, long, default_value_t = Colormap::default())]
    cmap: Colormap,

    /// Output file; the image format follows the extension. Omit it or pass
    /// `stdout` to print the maze to the terminal.
    #[arg(short, long)]
    outfile: Option<String>,

    /// Seed for the random generator. Drawn from the OS when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Pixels per maze square in image output.
    #[arg(long)]
    scale: Option<u32>,
}

/// Target side of a saved image in pixels.
const IMAGE_SIDE: u32 = 600;
const MIN_SCALE: u32 = 4;

enum Output {
    Terminal,
    Image(PathBuf),
}

impl From<Option<String>> for Output {
    fn from(outfile: Option<String>) -> Self {
        match outfile {
            None => Self::Terminal,
            Some(path) if path == "stdout" => Self::Terminal,
            Some(path) => Self::Image(PathBuf::from(path)),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let args = Args::parse();
    let params = Params::new(args.size, args.laziness, args.bias, args.root_factor)?;
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().next_u64());
    log::info!(
        "size {} laziness {} bias {} root factor {} seed {seed}",
        params.size(),
        params.laziness(),
        params.bias(),
        params.root_factor(),
    );

    let maze = labyrinth::generate(&params, ChaCha8Rng::seed_from_u64(seed));

    match Output::from(args.outfile) {
        Output::Terminal => {
            log::info!("writing maze to the terminal");
            print!("{maze}");
        }
        Output::Image(path) => {
            #[allow(clippy::cast_possible_truncation)]
            let scale = args
                .scale
                .unwrap_or_else(|| (IMAGE_SIDE / params.size() as u32).max(MIN_SCALE));
            log::info!("saving maze to {} with {} colormap", path.display(), args.cmap);
            maze.save(&path, args.cmap, scale)
                .with_context(|| format!("failed to save maze to {}", path.display()))?;
        }
    }

    Ok(())
}
