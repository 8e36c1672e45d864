use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use packsmart::{
    ActivityTag, PackSmartConfig, PackSmartError, TripForm, TripPlan, ViewEvent, ViewState,
    telemetry, web,
};

/// PackSmart - Pack smart, travel better
#[derive(Parser)]
#[command(name = "packsmart", version)]
#[command(about = "Personalized packing lists and itineraries for your next trip")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a packing list and sample itinerary for a trip
    Plan {
        /// Where you are going
        destination: String,
        /// Trip length in days
        #[arg(long)]
        days: String,
        /// First day of the trip (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// Planned activity; repeat for several (see `packsmart activities`)
        #[arg(long = "activity")]
        activities: Vec<String>,
        /// Free-text notes kept with the plan
        #[arg(long, default_value = "")]
        notes: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the activities the planner knows about
    Activities,
    /// Serve the planner over HTTP
    Serve {
        /// Port to listen on (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<PackSmartError>() {
                Some(packsmart_err) => eprintln!("❌ {}", packsmart_err.user_message()),
                None => eprintln!("❌ {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = PackSmartConfig::load_from_path(cli.config.clone())?;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    telemetry::init(&config.logging)?;

    match cli.command {
        Commands::Plan {
            destination,
            days,
            start,
            activities,
            notes,
            format,
        } => {
            let form = TripForm {
                destination,
                duration: days,
                start_date: start,
                activities,
                notes,
            };

            let view = ViewState::default().transition(ViewEvent::Submit(form.submit()?));
            let details = view
                .trip_details()
                .ok_or_else(|| PackSmartError::general("No trip to show"))?;
            let plan = TripPlan::build(details);

            match format {
                OutputFormat::Text => println!("{plan}"),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&plan)
                        .with_context(|| "Failed to serialize plan")?
                ),
            }
        }
        Commands::Activities => {
            for tag in ActivityTag::ALL {
                println!("{tag}");
            }
        }
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
                config.validate()?;
            }
            web::run(&config.server).await?;
        }
    }

    Ok(())
}
