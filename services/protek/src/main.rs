//! Protek CLI
//!
//! Queries the dashboard backend (or the offline fixtures) and prints the
//! normalized result as JSON.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use protek::types::PredictPayload;
use protek::{fixtures, load_config, ApiClient, Config, ProtekError};
use serde::Serialize;
use tracing::Level;

#[derive(Parser)]
#[command(name = "protek")]
#[command(about = "Machine-monitoring dashboard client")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides config file and PROTEK_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Serve fixture data instead of calling the backend
    #[arg(long, global = true)]
    offline: bool,

    /// Log level
    #[arg(short, long, global = true, default_value = "info")]
    log_level: Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all machines
    Machines,
    /// Show one machine by asset code
    Machine { aset_id: String },
    /// Sensor readings for the live machine health chart
    Sensors { aset_id: String },
    /// Sensor history as one row per reading
    SensorData { aset_id: String },
    /// Sensor history as per-metric chart points
    History { aset_id: String },
    /// List all alerts
    Alerts,
    /// Show one alert
    Alert { id: i64 },
    /// Fleet counters and the most recent alerts
    Summary,
    /// Health score trend
    Trend,
    /// Request a failure prediction
    Predict {
        /// Sensor features as a JSON object
        #[arg(long)]
        payload: String,
    },
    /// Ask the maintenance assistant
    Chat { message: String },
    /// Control the backend's sensor simulation
    Simulation {
        #[command(subcommand)]
        action: SimulationAction,
    },
}

#[derive(Subcommand, Debug)]
enum SimulationAction {
    Start,
    Stop,
    Status,
}

fn print_json<T: Serialize>(value: &T) -> protek::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_offline(command: &Command) -> protek::Result<()> {
    let now = chrono::Utc::now();
    match command {
        Command::Machines => print_json(&fixtures::machines(now)),
        Command::Machine { aset_id } => match fixtures::machine(now, aset_id) {
            Some(machine) => print_json(&machine),
            None => Err(ProtekError::Config(format!(
                "No fixture machine with asset code {}",
                aset_id
            ))),
        },
        Command::Alerts => print_json(&fixtures::alerts(now)),
        Command::Summary => print_json(&fixtures::dashboard_summary(now)),
        Command::Trend => print_json(&fixtures::trend()),
        other => Err(ProtekError::Config(format!(
            "{:?} is not available offline",
            other
        ))),
    }
}

async fn run_online(client: &ApiClient, command: Command) -> protek::Result<()> {
    match command {
        Command::Machines => print_json(&client.machines().await?),
        Command::Machine { aset_id } => print_json(&client.machine_detail(&aset_id).await?),
        Command::Sensors { aset_id } => print_json(&client.sensors(&aset_id).await?),
        Command::SensorData { aset_id } => print_json(&client.sensor_data(&aset_id).await?),
        Command::History { aset_id } => print_json(&client.history(&aset_id).await?),
        Command::Alerts => print_json(&client.alerts().await?),
        Command::Alert { id } => print_json(&client.alert_detail(id).await?),
        Command::Summary => print_json(&client.summary().await?),
        Command::Trend => print_json(&client.trend().await?),
        Command::Predict { payload } => {
            let payload: PredictPayload = serde_json::from_str(&payload)?;
            print_json(&client.predict(&payload).await?)
        }
        Command::Chat { message } => print_json(&client.send_message(&message).await?),
        Command::Simulation { action } => match action {
            SimulationAction::Start => print_json(&client.start_simulation().await?),
            SimulationAction::Stop => print_json(&client.stop_simulation().await?),
            SimulationAction::Status => print_json(&client.simulation_status().await?),
        },
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, api_url={:?}, offline={}, command={:?}",
        args.config,
        args.api_url,
        args.offline,
        args.command
    );

    if args.offline {
        tracing::info!("Serving fixture data");
        run_offline(&args.command)?;
        return Ok(());
    }

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    config.apply_env();

    if let Some(api_url) = args.api_url {
        config.api.base_url = api_url;
    }

    tracing::info!("Using backend at {}", config.api.base_url);

    let client = ApiClient::connect(&config.api)?;
    run_online(&client, args.command).await?;

    Ok(())
}
