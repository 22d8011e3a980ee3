use anyhow::{bail, Context};
use boltzmann_cli::{loader, report};
use boltzmann_core::config::{
    DEFAULT_EPSILON, DEFAULT_MAX_ITERATIONS, DEFAULT_MAX_UNITS, DEFAULT_TEMPERATURE,
};
use boltzmann_core::{analyze, NetworkConfig, SimulationOptions};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "boltzmann")]
#[command(about = "Boltzmann machine Markov-chain analyzer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct RunOptions {
    /// Temperature of the logistic acceptance rule
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    temperature: f64,

    /// Convergence tolerance of the stationary solver
    #[arg(long, default_value_t = DEFAULT_EPSILON)]
    epsilon: f64,

    /// Iteration cap of the stationary solver
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Refuse networks above this unit count (state space is 2^N)
    #[arg(long, default_value_t = DEFAULT_MAX_UNITS)]
    max_units: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a network file (prompts for a path when none is given)
    Run {
        /// Path to the network file
        file: Option<String>,

        #[command(flatten)]
        options: RunOptions,

        /// Emit the analysis as JSON instead of formatted tables
        #[arg(long)]
        json: bool,
    },
    /// Print the expected network file format
    Template,
}

fn load_network(file: Option<String>) -> anyhow::Result<NetworkConfig> {
    match file {
        Some(path) => {
            loader::load_file(&path).with_context(|| format!("loading network from {}", path))
        }
        None => {
            println!("Format your file as follows:");
            println!("{}", loader::FILE_TEMPLATE);
            let stdin = io::stdin();
            let config = loader::load_with_prompt(&mut stdin.lock(), &mut io::stdout())?;
            println!();
            Ok(config)
        }
    }
}

fn run(file: Option<String>, run_options: RunOptions, json: bool) -> anyhow::Result<()> {
    let config = load_network(file)?;
    let options = SimulationOptions {
        temperature: run_options.temperature,
        epsilon: run_options.epsilon,
        max_iterations: run_options.max_iterations,
        max_units: run_options.max_units,
    };

    info!(
        units = config.units(),
        temperature = options.temperature,
        epsilon = options.epsilon,
        max_iterations = options.max_iterations,
        "Analyzing network"
    );

    let start = std::time::Instant::now();
    let analysis = analyze(&config, &options)?;
    info!(
        states = analysis.space.len(),
        iterations = analysis.stationary.iterations,
        converged = analysis.stationary.converged,
        duration_secs = start.elapsed().as_secs_f64(),
        "Analysis Complete"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        let rendered = serde_json::to_string_pretty(&report::json_report(&config, &options, &analysis))?;
        writeln!(out, "{}", rendered)?;
    } else {
        report::write_report(&mut out, &config, &analysis)?;
    }

    if !analysis.stationary.converged {
        warn!(
            iterations = analysis.stationary.iterations,
            "Stationary solve did not converge"
        );
        bail!(
            "stationary distribution did not converge within {} iterations",
            options.max_iterations
        );
    }
    Ok(())
}

fn main() {
    // Initialize structured logging
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_max_level(tracing::Level::INFO)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run {
            file,
            options,
            json,
        } => run(file, options, json),
        Commands::Template => {
            println!("{}", loader::FILE_TEMPLATE);
            Ok(())
        }
    };

    if let Err(e) = result {
        error!(error = %e, "Fatal Error");
        std::process::exit(1);
    }
}
