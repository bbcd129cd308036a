use std::process::ExitCode;

use clap::Parser;

use f8bench::bench::scenarios::SCENARIOS;
use f8bench::bench::{run_suite, RandomInputs};
use f8bench::config::{parse_count, DEFAULT_ITERATIONS, DEFAULT_PROBLEMS, DEFAULT_SEED};
use f8bench::BenchConfig;

/// f8bench - eight-lane packed f32 geometry versus scalar glam
#[derive(Parser, Debug)]
#[command(name = "f8bench", version, about)]
struct Cli {
    /// Scenarios to run (default: all). See --list.
    scenarios: Vec<String>,

    /// Scalar problem count per scenario, a multiple of 8 (e.g. 1600000, 400k, 1.6m)
    #[arg(short, long, value_parser = parse_count, default_value_t = DEFAULT_PROBLEMS)]
    problems: usize,

    /// Timed repetitions of each kernel
    #[arg(short = 'n', long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: usize,

    /// Random seed for the input arrays
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// List the scenario catalog and exit
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    if cli.list {
        for s in SCENARIOS {
            println!("{:<14} {}", s.name, s.about);
        }
        return ExitCode::SUCCESS;
    }

    let config = BenchConfig {
        problems: cli.problems,
        iterations: cli.iterations,
        seed: cli.seed,
    };

    let inputs = match RandomInputs::from_config(&config) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(2);
        }
    };

    println!(
        "f8bench: {} problems ({} packed), {} iterations, seed {}",
        config.problems,
        inputs.count(),
        config.iterations,
        config.seed
    );

    let summary = run_suite(&inputs, config.iterations, &cli.scenarios);

    println!(
        "\n{} scenarios completed, {} failed",
        summary.completed.len(),
        summary.failed.len()
    );
    for (name, e) in &summary.failed {
        println!("  {}: {}", name, e);
    }

    ExitCode::SUCCESS
}
