use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use launch_dashboard::mission_data::analytics::{
    cost_by_success, CorrelationMatrix, MissionOverview,
};
use launch_dashboard::mission_data::dataset::MissionRecord;
use launch_dashboard::mission_data::sample::write_sample;
use launch_dashboard::telemetry_system::telemetry::{
    format_altitude, format_metric, write_comparison_csv,
};
use launch_dashboard::*;

#[derive(Parser, Debug)]
#[command(name = "launch-dashboard")]
#[command(about = "Rocket ascent simulation with and without drag, plus mission analytics")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate the ascent with and without drag
    Simulate {
        /// Payload mass in kg
        #[arg(long, default_value_t = DEFAULT_PAYLOAD_MASS)]
        payload_mass: u32,

        /// Thrust in N
        #[arg(long, default_value_t = DEFAULT_THRUST)]
        thrust: u32,

        /// Clamp out-of-range inputs instead of rejecting them
        #[arg(long)]
        clamp: bool,

        /// Write both altitude series to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Summarise a mission dataset
    Analyze {
        /// Mission CSV file
        #[arg(long)]
        data: PathBuf,

        /// Restrict the breakdown to one mission type
        #[arg(long)]
        mission_type: Option<String>,
    },
    /// Write a synthetic mission dataset
    Sample {
        #[arg(long)]
        out: PathBuf,

        #[arg(long, default_value_t = 500)]
        count: usize,

        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            payload_mass,
            thrust,
            clamp,
            csv,
        } => run_simulation(LaunchConfig::new(payload_mass, thrust), clamp, csv),
        Commands::Analyze { data, mission_type } => run_analysis(data, mission_type),
        Commands::Sample { out, count, seed } => {
            let file = File::create(&out).with_context(|| format!("Failed to create {:?}", out))?;
            let rows = write_sample(file, count, seed)?;
            println!("Wrote {} synthetic missions to {:?}", rows, out);
            Ok(())
        }
    }
}

fn run_simulation(config: LaunchConfig, clamp: bool, csv: Option<PathBuf>) -> Result<()> {
    let config = if clamp {
        config.clamped()
    } else {
        config.validate()?;
        config
    };

    let params = SimulationParameters::from(config);
    let outcome = simulate(params);
    let summary = AltitudeSummary::from_outcome(&outcome);

    println!("--- Rocket Launch Simulation ---");
    println!("Payload: {} kg | Thrust: {} N", config.payload_mass, config.thrust);
    println!("Initial Mass: {:.0} kg", params.initial_mass());
    for line in summary.format_lines() {
        println!("{}", line);
    }
    println!(
        "Apogee (With Drag): {} | Apogee (No Drag): {}",
        format_altitude(summary.max_with_drag),
        format_altitude(summary.max_without_drag)
    );

    if let Some(path) = csv {
        let file = File::create(&path).with_context(|| format!("Failed to create {:?}", path))?;
        let rows = write_comparison_csv(file, &outcome)?;
        println!("Wrote {} rows to {:?}", rows, path);
    }

    Ok(())
}

fn run_analysis(data: PathBuf, mission_type: Option<String>) -> Result<()> {
    let mut cache = DatasetCache::new();
    let dataset = cache
        .get_or_load(&data)
        .with_context(|| format!("Failed to load mission data from {:?}", data))?;

    let overview = MissionOverview::from_records(dataset.records());
    println!("--- Mission Dataset Overview ---");
    println!("Missions: {}", overview.missions);
    println!("Mission Success Rate (%): {}", format_metric(overview.success_rate));
    println!("Average Mission Cost: {}", format_metric(overview.avg_cost));
    println!("Average Payload Weight (kg): {}", format_metric(overview.avg_payload));
    println!("Mission Types: {}", dataset.mission_types().join(", "));

    let selected = match mission_type {
        Some(kind) => kind,
        None => match dataset.mission_types().first() {
            Some(kind) => kind.to_string(),
            None => return Ok(()),
        },
    };
    let filtered: Vec<&MissionRecord> = dataset.filter_by_type(&selected);

    println!("\n--- Mission Type: {} ({} missions) ---", selected, filtered.len());
    println!("Mission Cost by Success:");
    for (label, cost) in cost_by_success(filtered.iter().copied()) {
        println!("  {:<12} {}", label, format_metric(cost));
    }

    let matrix = CorrelationMatrix::from_records(filtered.iter().copied());
    println!("\nCorrelation Matrix:");
    print!("{:>22}", "");
    for column in &matrix.columns {
        print!("{:>22}", column.header());
    }
    println!();
    for (column, row) in matrix.columns.iter().zip(&matrix.values) {
        print!("{:>22}", column.header());
        for value in row {
            print!("{:>22}", format_metric(*value));
        }
        println!();
    }

    Ok(())
}
