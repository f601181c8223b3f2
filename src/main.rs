//! slowbench - Command-line entry point
//!
//! `run` is the corpus-program shape: instance on stdin, answer on
//! stdout, guard diagnostics on stderr. `validate` drives the judge-side
//! sweep against this same binary.

use std::io::{Read, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use slowbench::config::Config;
use slowbench::harness::SolverRunner;
use slowbench::solver::{self, Variant};

#[derive(Parser)]
#[command(name = "slowbench", version, about = "Complexity-degradation harness")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one solver variant: instance on stdin, answer on stdout
    Run {
        /// Problem registry name
        #[arg(long)]
        problem: String,

        /// Solver entry point
        #[arg(long, value_enum)]
        variant: Variant,
    },

    /// Print a deterministic generated instance to stdout
    Generate {
        /// Problem registry name
        #[arg(long)]
        problem: String,

        /// Instance size (problem-specific dimension)
        #[arg(long)]
        size: usize,

        /// Generator seed; defaults to the configured seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Validate equivalence and complexity separation for a problem
    Validate {
        /// Problem registry name
        #[arg(long)]
        problem: String,

        /// Instance sizes to sweep (comma separated); defaults to the
        /// problem's own ramp
        #[arg(long, value_delimiter = ',')]
        sizes: Option<Vec<usize>>,

        /// Write the full JSON report to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// List registered problems
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "slowbench=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { problem, variant } => {
            let problem = solver::find(&problem)?;
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            let answer = problem.run(variant, &input, &config.guard)?;
            print!("{}", answer);
            std::io::stdout().flush()?;
        }
        Commands::Generate {
            problem,
            size,
            seed,
        } => {
            let problem = solver::find(&problem)?;
            let seed = seed.unwrap_or(config.generator.seed) ^ size as u64;
            let mut rng = StdRng::seed_from_u64(seed);
            print!("{}", problem.generate(&mut rng, size));
        }
        Commands::Validate {
            problem,
            sizes,
            json,
        } => {
            let runner = SolverRunner::for_current_exe(config)?;
            let report = runner.run_validation(&problem, sizes).await?;

            println!(
                "problem:     {} ({} -> {})",
                report.problem, report.reference_class, report.degraded_class
            );
            println!("policy:      {}", report.degradation.describe());
            println!("time limit:  {} ms", report.time_limit_ms);
            for case in &report.cases {
                println!(
                    "  size {:>10}: reference {} ({} ms), degraded {} ({} ms)",
                    case.size,
                    case.reference.verdict,
                    case.reference.time_ms,
                    case.degraded.verdict,
                    case.degraded.time_ms,
                );
            }
            println!(
                "equivalence: {}",
                if report.equivalence_ok { "ok" } else { "FAILED" }
            );
            match report.separation_at {
                Some(size) => println!("separation:  degraded TLE at size {}", size),
                None => println!("separation:  not observed in this ramp"),
            }

            if let Some(path) = json {
                report.write_json(&path)?;
                println!("report:      {}", path.display());
            }

            if !report.is_conclusive() {
                std::io::stdout().flush()?;
                std::process::exit(1);
            }
        }
        Commands::List => {
            for problem in solver::all() {
                println!(
                    "{:<18} {:>8} -> {:<8} {}",
                    problem.name(),
                    problem.reference_class().notation(),
                    problem.degraded_class().notation(),
                    problem.summary(),
                );
            }
        }
    }

    Ok(())
}
