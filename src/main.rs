//! Vapor - CLI entry point
//!
//! Headless runs, benchmarks and config generation. The browser UI lives in
//! the `vapor-web` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use vapor::energy::calculate_energy;
use vapor::{benchmark, stats, Config, SimulationEngine};

#[derive(Parser)]
#[command(name = "vapor")]
#[command(version)]
#[command(about = "Boiling and condensation particle toy")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation without a browser
    Run {
        /// Configuration file (YAML)
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,

        /// Number of ticks to simulate
        #[arg(short, long, default_value = "1000")]
        ticks: u64,

        /// Temperature to hold (Celsius, clamped to 25-150)
        #[arg(long, default_value = "120")]
        temperature: f64,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// Quiet mode (minimal output)
        #[arg(short, long)]
        quiet: bool,
    },

    /// Run performance benchmark
    Benchmark {
        /// Number of ticks
        #[arg(short, long, default_value = "1000")]
        ticks: u64,

        /// Particle count
        #[arg(short, long, default_value = "1000")]
        particles: usize,
    },

    /// Generate default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "config.yaml")]
        output: PathBuf,
    },

    /// Compute the energy equivalent of a mass (E = mc²)
    Energy {
        /// Mass in grams
        #[arg(short, long)]
        mass: f64,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            ticks,
            temperature,
            seed,
            quiet,
        } => run_simulation(config, ticks, temperature, seed, quiet),

        Commands::Benchmark { ticks, particles } => run_benchmark(ticks, particles),

        Commands::Init { output } => generate_config(output),

        Commands::Energy { mass } => print_energy(mass),
    }
}

fn run_simulation(
    config_path: PathBuf,
    ticks: u64,
    temperature: f64,
    seed: Option<u64>,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Load or create config
    let mut config = if config_path.exists() {
        println!("Loading config from: {:?}", config_path);
        Config::from_file(&config_path)?
    } else {
        println!("Using default configuration");
        Config::default()
    };
    if seed.is_some() {
        config.simulation.seed = seed;
    }

    let mut engine = SimulationEngine::from_config(&config);
    let temperature = temperature.clamp(
        vapor::commands::MIN_REQUESTED_TEMPERATURE,
        vapor::commands::MAX_REQUESTED_TEMPERATURE,
    );

    println!("Starting simulation");
    println!("  Particles: {}", engine.particles.len());
    println!("  Canvas: {}x{}", engine.width(), engine.height());
    println!("  Seed: {}", engine.seed());
    println!("  Temperature: {:.1}", temperature);
    println!("  Ticks: {}", ticks);
    println!();

    let start = Instant::now();
    let stats_interval = config.logging.stats_interval;

    engine.set_temperature(temperature);
    while engine.tick() < ticks {
        engine.update();

        if !quiet && engine.tick() % stats_interval == 0 {
            println!("{}", stats::summary(&engine));
        }
    }

    let elapsed = start.elapsed();
    let counts = engine.counts();

    println!();
    println!("=== Simulation Complete ===");
    println!("Time: {:.2}s", elapsed.as_secs_f64());
    println!("Ticks: {}", engine.tick());
    println!(
        "Speed: {:.1} ticks/s",
        engine.tick() as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
    );
    println!(
        "Liquid / vapor / condensed: {} / {} / {}",
        counts.liquid, counts.vapor, counts.condensed
    );
    println!("Collected water: {}", engine.collected_water());

    Ok(())
}

fn run_benchmark(ticks: u64, particles: usize) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Vapor Benchmark ===");
    println!("Ticks: {}", ticks);
    println!("Particles: {}", particles);
    println!();

    let result = benchmark(ticks, particles);
    println!("{}", result);

    Ok(())
}

fn generate_config(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    config.save(&output)?;
    println!("Configuration saved to: {:?}", output);
    Ok(())
}

fn print_energy(mass: f64) -> Result<(), Box<dyn std::error::Error>> {
    if !mass.is_finite() {
        return Err(vapor::commands::CommandError::InvalidMass.into());
    }

    let result = calculate_energy(mass);
    println!("Mass: {} g ({} kg)", result.mass_grams, result.mass_kg);
    println!("Energy: {} J", result.energy_scientific);
    Ok(())
}
