mod display;
mod import;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::display::{OutcomeJson, ReportJson, display_outcome, display_report};
use crate::import::{load_combinations, parse_combination};
use lotto_core::analysis::analyse_hits;
use lotto_core::compute_draw_with;
use lotto_core::models::{Combination, Rules};
use lotto_core::validation::validate_batch;

#[derive(Parser)]
#[command(name = "lotto", about = "Draws 7 numbers out of 36 that match none of your combinations")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct Submissions {
    /// CSV (one combination per line) or JSON file of combinations
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// One combination, e.g. "1 2 3 4 5 6 7" (repeatable)
    #[arg(short, long = "combo")]
    combos: Vec<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a draw that matches none of the submitted combinations
    Draw {
        #[command(flatten)]
        submissions: Submissions,

        /// Seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score submitted combinations against a known draw
    Check {
        /// The draw, e.g. "3 9 14 18 22 30 36"
        #[arg(short, long)]
        draw: String,

        #[command(flatten)]
        submissions: Submissions,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the game rules
    Rules,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let rules = Rules::default();

    match cli.command {
        Command::Draw {
            submissions,
            seed,
            json,
        } => cmd_draw(&rules, &submissions, seed, json),
        Command::Check {
            draw,
            submissions,
            json,
        } => cmd_check(&rules, &draw, &submissions, json),
        Command::Rules => cmd_rules(&rules),
    }
}

fn cmd_draw(rules: &Rules, submissions: &Submissions, seed: Option<u64>, json: bool) -> Result<()> {
    let raw = load_combinations(submissions.file.as_deref(), &submissions.combos)?;
    debug!("Loaded {} combination(s)", raw.len());

    let mut rng: StdRng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let outcome = compute_draw_with(rules, &raw, &mut rng).map_err(|e| {
        if e.is_internal() {
            anyhow!(e).context("Internal error while drawing")
        } else {
            anyhow!(e).context("Invalid submissions")
        }
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&OutcomeJson::from(&outcome))?);
    } else {
        display_outcome(&outcome);
    }
    Ok(())
}

fn cmd_check(rules: &Rules, draw: &str, submissions: &Submissions, json: bool) -> Result<()> {
    let draw_numbers = parse_combination(draw).context("Invalid draw")?;
    let draw = Combination::new(rules, &draw_numbers)
        .map_err(|e| anyhow!("Invalid draw: {}", e))?;

    let raw = load_combinations(submissions.file.as_deref(), &submissions.combos)?;
    let submissions = validate_batch(rules, &raw).context("Invalid submissions")?;
    let report = analyse_hits(rules, &submissions, &draw);

    if json {
        println!("{}", serde_json::to_string_pretty(&ReportJson::from(&report))?);
    } else {
        println!("\nDraw : {}", draw);
        display_report(&report, rules.pick_count());
    }
    Ok(())
}

fn cmd_rules(rules: &Rules) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(rules)?);
    Ok(())
}
