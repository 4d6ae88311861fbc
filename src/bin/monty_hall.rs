//! Monty Hall simulator binary.
//!
//! Usage:
//!   cargo run --release --bin monty_hall -- [OPTIONS]
//!
//! With no options the classic batches of 10 up to 1,000,000 trials are run
//! sequentially and reported on stdout. Logs go to stderr (`RUST_LOG`).

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use monty_hall_sim::sim::{
    ExperimentConfig, ExperimentDriver, ExperimentReport, SecureSelector, SimError,
};

const CAR: &str = "🚗";
const GOAT: &str = "🐐";
const CLOSED: &str = "🚪";
const RULE: &str = "---------------------------------------------------";

#[derive(Parser, Debug)]
#[command(version, about = "Simulate the Monty Hall problem and compare stay vs switch")]
struct Cli {
    /// Experiment configuration JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Comma-separated trial counts (overrides the config file)
    #[arg(long, value_delimiter = ',')]
    trials: Vec<u64>,

    /// Worker threads per batch (1 = sequential)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Also write the results as JSON to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,

    /// Print only the per-batch results, without the story around them
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "simulation aborted");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), SimError> {
    let mut config = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "loading configuration");
            ExperimentConfig::from_json_file(path)?
        }
        None => ExperimentConfig::default(),
    };
    if !cli.trials.is_empty() {
        config = config.with_trial_counts(cli.trials.clone());
    }
    if let Some(threads) = cli.threads {
        config = config.with_threads(threads);
    }

    let progress = if cli.no_progress {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(config.trial_counts.iter().sum());
        bar.set_style(
            ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} trials ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        bar
    };

    if !cli.quiet {
        print_intro();
    }

    let mut driver = ExperimentDriver::new(SecureSelector::secure(), config)?;
    let report = driver.run_with_callback(|batch| {
        progress.inc(batch.trials);
        progress.suspend(|| {
            println!();
            println!("{}", batch);
            println!("{}", RULE);
        });
    })?;
    progress.finish_and_clear();

    if !cli.quiet {
        print_explanation();
    }

    if let Some(path) = &cli.output {
        save_report(&report, path)?;
    }

    Ok(())
}

fn save_report(report: &ExperimentReport, path: &Path) -> Result<(), SimError> {
    report.save_json(path)?;
    info!(path = %path.display(), batches = report.batches.len(), "report saved");
    Ok(())
}

fn print_intro() {
    println!("🎉 Welcome to the Monty Hall Problem Simulator! 🎉");
    println!();
    println!("📖 Context:");
    println!(
        "Imagine you're a contestant on a game show. In front of you are three doors: {} {} {}",
        CLOSED, CLOSED, CLOSED
    );
    println!(
        "Behind one of them is a shiny car {} and behind the other two are goats {}",
        CAR, GOAT
    );
    println!(
        "You pick a door. Monty Hall, the host who knows the secret behind each door, opens another door, always revealing a goat {}",
        GOAT
    );
    println!("He then poses a question: 'Do you wish to switch your choice to the other unopened door?'");
    println!();
    println!("🤔 What's your move? Stick with your initial pick, or switch to the other door?");
    println!();
    println!("This simulator will unveil the winning odds for both strategies.");
}

fn print_explanation() {
    println!();
    println!("🔢 The Math Unraveled:");
    println!(
        "At the start, picking the door with the car {} has a 1/3 likelihood, leaving a 2/3 chance of selecting a goat {}",
        CAR, GOAT
    );
    println!("Choosing the car (1/3 chance) and then making a switch ensures a loss.");
    println!("Picking a goat (2/3 chance) followed by a switch always lands on the car behind the other door!");
    println!("Consequently, by switching, you effectively double your win chances!");
    println!();
    println!("🧠 Analogy to Ponder:");
    println!(
        "Visualize the game, but this time with 100 doors. Behind one is a car {} and behind the other 99 are goats {}",
        CAR, GOAT
    );
    println!("You mark your choice. The probability that your door hides the car stands at a slim 1/100.");
    println!("Monty, being Monty, opens 98 other doors, each revealing a goat. It's now a face-off between your initial choice and one remaining door.");
    println!("Given the circumstances, would you reconsider your choice and switch? Most would deduce that making the switch in this setting offers a greater winning shot!");
}
