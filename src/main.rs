use chrono::Local;
use clap::Parser;
use net_hours::utils::logger;
use net_hours::{CliConfig, ClockifyApi, Settings, TrackerEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting net-hours");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match Settings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration error: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Resolved settings: {:?}", settings);

    let api = match ClockifyApi::from_key_file(&settings.api_url, &settings.api_key_file) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!("❌ Failed to set up API client: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let engine = TrackerEngine::new(api, settings);
    match engine.run(Local::now().date_naive()).await {
        Ok(summary) => {
            print!("{}", summary);
        }
        Err(e) => {
            tracing::error!("❌ Run failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
