//! Command-line front end for the pickleball scoring engine.
//!
//! Reads score sheets, pool results and bracket entries from JSON files and
//! prints the resolved result, standings table or bracket state.

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::{Error, bail};
use log::info;
use pico_args::Arguments;
use serde::Serialize;

use crate::commands::{BracketInput, ScoreInput, StandingsInput};
use crate::config::{CliConfig, Overrides};

const HELP: &str = "\
Score pickleball matches and rank tournament entrants

USAGE:
  pb_cli <COMMAND> <FILE> [OPTIONS]

COMMANDS:
  score        Validate and resolve one match score
  standings    Rank a round-robin pool
  bracket      Generate a single-elimination bracket and replay its results

OPTIONS:
  --best-of    N           Sets in a match: 1, 3 or 5     [default: env PB_BEST_OF or 3]
  --games      N           Games per set: 4 or 6          [default: env PB_GAMES_PER_SET or 6]
  --tiebreak   N           Deciding-set tiebreak: 7 or 10 [default: env PB_DECIDING_TIEBREAK or 10]

FLAGS:
  --third-place            Add a third-place match to generated brackets
  --json                   Print JSON instead of text
  -h, --help               Print help information

ENVIRONMENT:
  PB_THIRD_PLACE           Same as --third-place when set to true
  RUST_LOG                 Log filter (e.g. debug)
  (A .env file in the working directory is loaded if present)
";

struct Args {
    command: String,
    file: PathBuf,
    json: bool,
    config: CliConfig,
}

fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let overrides = Overrides {
        best_of: pargs.opt_value_from_str("--best-of")?,
        games_per_set: pargs.opt_value_from_str("--games")?,
        deciding_tiebreak: pargs.opt_value_from_str("--tiebreak")?,
        third_place_match: pargs.contains("--third-place"),
    };
    let json = pargs.contains("--json");

    let Some(command) = pargs.subcommand()? else {
        print!("{HELP}");
        bail!("missing command");
    };
    let file: PathBuf = pargs.free_from_str()?;

    let leftover = pargs.finish();
    if !leftover.is_empty() {
        bail!("unexpected arguments: {leftover:?}");
    }

    let args = Args {
        command,
        file,
        json,
        config: CliConfig::from_env(overrides)?,
    };

    env_logger::builder().format_target(false).init();
    info!("Running {} on {}", args.command, args.file.display());

    run(&args)
}

fn run(args: &Args) -> Result<(), Error> {
    match args.command.as_str() {
        "score" => {
            let input: ScoreInput = commands::read_json(&args.file)?;
            let result = commands::score(input, &args.config)?;
            emit(args.json, &result, || commands::render_result(&result))
        }
        "standings" => {
            let input: StandingsInput = commands::read_json(&args.file)?;
            let rows = commands::standings(&input);
            emit(args.json, &rows, || commands::render_standings(&rows))
        }
        "bracket" => {
            let input: BracketInput = commands::read_json(&args.file)?;
            let bracket = commands::bracket(input, &args.config)?;
            emit(args.json, &bracket, || commands::render_bracket(&bracket))
        }
        other => bail!("unknown command: {other}"),
    }
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<(), Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text().trim_end());
    }
    Ok(())
}
