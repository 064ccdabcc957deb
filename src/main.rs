mod config;
mod launches;
mod orbit;
mod report;
mod visibility;

use clap::{Parser, Subcommand};
use std::fs;
use std::process::ExitCode;

use crate::config::PredictionConfig;
use crate::launches::LaunchSet;
use crate::report::LaunchReport;

#[derive(Parser)]
#[command(name = "launchspot")]
#[command(about = "Rocket launch visibility prediction for observers in Germany")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a mission description into an orbit archetype
    Classify { text: String },
    /// Predict visibility windows for a launch feed file
    Predict {
        /// YAML file with the launch records to evaluate
        launches: String,
        /// YAML file with prediction parameters
        #[arg(long)]
        config: Option<String>,
        /// Observer coordinates as "lat,lon"
        #[arg(long)]
        observer: Option<String>,
        /// Maximum number of orbits to simulate per launch
        #[arg(long)]
        total_orbits: Option<u32>,
        /// Horizon in days after launch
        #[arg(long)]
        visibility_days: Option<u32>,
        /// Emit the reports as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { text } => classify(&text),
        Commands::Predict {
            launches,
            config,
            observer,
            total_orbits,
            visibility_days,
            json,
        } => predict(
            &launches,
            config.as_deref(),
            observer.as_deref(),
            total_orbits,
            visibility_days,
            json,
        ),
    }
}

fn classify(text: &str) -> ExitCode {
    let archetype = orbit::classify(Some(text)).archetype();
    println!(
        "{}: altitude {} km, inclination {}°",
        archetype.class, archetype.altitude_km, archetype.inclination_deg
    );
    ExitCode::SUCCESS
}

fn predict(
    launches_path: &str,
    config_path: Option<&str>,
    observer: Option<&str>,
    total_orbits: Option<u32>,
    visibility_days: Option<u32>,
    json: bool,
) -> ExitCode {
    let mut config = match config_path {
        Some(path) => match PredictionConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => PredictionConfig::default(),
    };

    if let Some(coordinates) = observer {
        match parse_observer(coordinates) {
            Some((lat, lon)) => {
                config.observer_lat = lat;
                config.observer_lon = lon;
            }
            None => {
                eprintln!("Invalid observer coordinates: {}", coordinates);
                return ExitCode::FAILURE;
            }
        }
    }
    if let Some(n) = total_orbits {
        config.total_orbits = n;
    }
    if let Some(d) = visibility_days {
        config.visibility_days = d;
    }

    let yaml = match fs::read_to_string(launches_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let set = match LaunchSet::from_str(&yaml) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Parse error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let reports = report::evaluate(&set, &config);

    if json {
        match serde_json::to_string_pretty(&reports) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Serialization error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_reports(&reports);
    }

    ExitCode::SUCCESS
}

fn parse_observer(coordinates: &str) -> Option<(f64, f64)> {
    let parts: Vec<_> = coordinates.split(',').map(|s| s.trim()).collect();
    if parts.len() != 2 {
        return None;
    }
    let lat = parts[0].parse().ok()?;
    let lon = parts[1].parse().ok()?;
    Some((lat, lon))
}

fn print_reports(reports: &[LaunchReport]) {
    if reports.is_empty() {
        println!("No launches to evaluate");
        return;
    }

    for report in reports {
        println!("{}", report.name);
        println!(
            "  Orbit: {} (altitude {} km, inclination {}°), period {:.2} min",
            report.orbit_class,
            report.archetype.altitude_km,
            report.archetype.inclination_deg,
            report.period_minutes
        );

        if report.passes.is_empty() {
            println!("  No passes within the prediction window");
            continue;
        }

        for pass in &report.passes {
            println!(
                "  Pass {:>2}  {}  score {:>3}  {:<11}  window {} - {}",
                pass.pass_index,
                pass.time_local.format("%Y-%m-%d %H:%M:%S %:z"),
                pass.score,
                pass.tier.to_string(),
                pass.window_start.format("%H:%M:%S"),
                pass.window_end.format("%H:%M:%S"),
            );
        }

        let mut visible: Vec<_> = report
            .passes
            .iter()
            .filter(|p| p.tier.is_visible())
            .collect();
        visible.sort_by(|a, b| b.score.cmp(&a.score));

        if visible.is_empty() {
            println!("  No potentially visible passes found");
        } else {
            println!("  Best chances:");
            for pass in visible.iter().take(3) {
                println!(
                    "    {} (pass {}): {} ({}%)",
                    pass.time_local.format("%Y-%m-%d %H:%M"),
                    pass.pass_index,
                    pass.tier,
                    pass.score
                );
            }
        }
        println!();
    }
}
