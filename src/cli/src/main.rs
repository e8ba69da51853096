#![warn(clippy::pedantic)]

use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::eyre;
use cube_core::{CubeModel, CubeState, MoveSequence, validate};
use env_logger::TimestampPrecision;
use log::{LevelFilter, debug};

use crate::{
    config::{CliConfig, Palette},
    repl::Repl,
};

mod config;
mod render;
mod repl;

/// Turns, paints and checks a sticker model of a Rubik's Cube
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format. Defaults to
    /// `cube.toml` if it exists.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print stickers as letters instead of colored blocks
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a cube
    Show {
        /// A facelet string to draw instead of the solved cube
        #[arg(long)]
        state: Option<String>,
    },
    /// Apply a move sequence and draw the result
    Apply {
        /// The move sequence to apply, e.g. "R U' F2"
        sequence: String,
        /// The facelet string to start from instead of the solved cube
        #[arg(long)]
        state: Option<String>,
    },
    /// Generate a random scramble
    Scramble {
        /// Number of moves; overrides the config
        #[arg(short, long)]
        length: Option<usize>,
        /// Seed for the scramble; overrides the config
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Print the inverse of a move sequence
    Invert {
        /// The move sequence to invert
        sequence: String,
    },
    /// Check that a facelet string describes a real cube
    Validate {
        /// 54 color codes, faces in U R F D L B order
        facelets: String,
    },
    /// Interactively turn and paint a cube
    Repl,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    if cli.no_color {
        config.color = false;
    }
    let palette = config.palette()?;

    let mut out = io::stdout().lock();
    match cli.command {
        Commands::Show { state } => show(state.as_deref(), &config, &palette, &mut out)?,
        Commands::Apply { sequence, state } => {
            apply(&sequence, state.as_deref(), &config, &palette, &mut out)?;
        }
        Commands::Scramble { length, seed } => {
            let length = length.unwrap_or(config.scramble_length);
            let mut scramble_rng = rng(seed.or(config.seed));
            scramble(length, &mut scramble_rng, &config, &palette, &mut out)?;
        }
        Commands::Invert { sequence } => invert(&sequence, &mut out)?,
        Commands::Validate { facelets } => check(&facelets, &config, &mut out)?,
        Commands::Repl => {
            Repl::new(&config, palette, rng(config.seed)).run(io::stdin().lock(), out)?;
        }
    }

    Ok(())
}

fn parse_state(facelets: Option<&str>) -> color_eyre::Result<CubeState> {
    Ok(match facelets {
        Some(facelets) => facelets.parse()?,
        None => CubeState::solved(),
    })
}

fn show(
    facelets: Option<&str>,
    config: &CliConfig,
    palette: &Palette,
    out: &mut impl Write,
) -> color_eyre::Result<()> {
    let state = parse_state(facelets)?;
    writeln!(out, "{}", render::net(&state, palette, config.color))?;
    Ok(())
}

fn apply(
    sequence: &str,
    facelets: Option<&str>,
    config: &CliConfig,
    palette: &Palette,
    out: &mut impl Write,
) -> color_eyre::Result<()> {
    let mut model = CubeModel::new();
    model.load(parse_state(facelets)?);
    model.apply_sequence(&sequence.parse()?);

    writeln!(out, "{}", render::net(model.state(), palette, config.color))?;
    writeln!(out, "{}", model.state().to_facelets())?;
    writeln!(
        out,
        "{}",
        if model.is_solved() {
            "Solved"
        } else {
            "Not solved"
        }
    )?;
    Ok(())
}

fn scramble(
    length: usize,
    rng: &mut fastrand::Rng,
    config: &CliConfig,
    palette: &Palette,
    out: &mut impl Write,
) -> color_eyre::Result<()> {
    let mut model = CubeModel::new();
    let scramble = model.scramble(rng, length);

    writeln!(out, "{scramble}")?;
    writeln!(out, "{}", render::net(model.state(), palette, config.color))?;
    Ok(())
}

fn invert(sequence: &str, out: &mut impl Write) -> color_eyre::Result<()> {
    let sequence = sequence.parse::<MoveSequence>()?;
    writeln!(out, "{}", sequence.inverse())?;
    Ok(())
}

/// Prints the validation report of `facelets`, failing if it found anything.
fn check(facelets: &str, config: &CliConfig, out: &mut impl Write) -> color_eyre::Result<()> {
    let report = validate(&facelets.parse::<CubeState>()?);
    writeln!(out, "{}", render::report(&report, config.color))?;
    if !report.is_valid() {
        return Err(eyre!(
            "Found {} problems with the cube",
            report.violations.len()
        ));
    }
    Ok(())
}

fn rng(seed: Option<u64>) -> fastrand::Rng {
    match seed {
        Some(seed) => {
            debug!("Seeding with {seed}");
            fastrand::Rng::with_seed(seed)
        }
        None => fastrand::Rng::new(),
    }
}
