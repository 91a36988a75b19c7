use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use ttt_sim::config::{AppConfig, Scenario};
use ttt_sim::prompt;
use ttt_sim::report::{render_bar_chart, SimulationReport};
use ttt_sim::simulation::Simulator;

/// Simulate rounds of random tic-tac-toe or qubic and tally the results.
#[derive(Parser)]
#[command(name = "ttt-sim", about = "Simulate random tic-tac-toe and qubic rounds")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Scenario: 1 (random), 2 (center first), q1 (qubic random), q2 (qubic center first)
    #[arg(long)]
    scenario: Option<Scenario>,

    /// Override planar board size (3, 5 or 7)
    #[arg(long)]
    size: Option<usize>,

    /// Override number of rounds to simulate
    #[arg(long)]
    rounds: Option<u64>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Override number of worker threads
    #[arg(long)]
    threads: Option<usize>,

    /// Override delay before each random draw, in milliseconds
    #[arg(long)]
    pacing_ms: Option<u64>,

    /// Override report output path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Ask for scenario, board size and round count on stdin
    #[arg(long)]
    interactive: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .init();

    if cli.print_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    // Load configuration
    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    let sim = &mut app_config.simulation;
    if let Some(scenario) = cli.scenario {
        sim.apply_scenario(scenario);
    }
    if let Some(size) = cli.size {
        sim.board_size = size;
    }
    if let Some(rounds) = cli.rounds {
        sim.rounds = rounds;
    }
    if let Some(seed) = cli.seed {
        sim.seed = Some(seed);
    }
    if let Some(threads) = cli.threads {
        sim.threads = threads;
    }
    if let Some(pacing_ms) = cli.pacing_ms {
        sim.pacing_delay_ms = pacing_ms;
    }
    if let Some(path) = cli.report {
        app_config.report.path = path;
    }

    if cli.interactive {
        let answers = prompt::ask_setup(&mut io::stdin().lock(), &mut io::stdout())
            .context("reading setup answers")?;
        answers.apply(&mut app_config.simulation);
    }

    app_config.validate().context("invalid settings")?;

    let sim_config = app_config.simulation.to_simulation_config();
    let simulator = Simulator::new(sim_config.clone())?;

    let start = Instant::now();
    let tally = simulator.run()?;
    let report = SimulationReport::new(&sim_config, &tally, start.elapsed());

    println!();
    println!("{}", report.summary());
    println!();
    print!("{}", render_bar_chart(&tally, app_config.report.chart_width));

    report
        .write_json(&app_config.report.path)
        .context("saving result report")?;
    println!(
        "\nThe result report has been saved in the file '{}'",
        app_config.report.path.display()
    );

    Ok(())
}
