use clap::Parser;
use roster_etl::utils::logger;
use roster_etl::{CliConfig, LocalStorage, RosterEngine, RosterPipeline};

fn main() {
    let config = CliConfig::parse();

    let settings = match config.into_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    if settings.log_json {
        logger::init_json_logger(settings.verbose);
    } else {
        logger::init_cli_logger(settings.verbose);
    }

    tracing::info!("Starting roster-etl");
    tracing::debug!("Settings: {:?}", settings);

    let storage = LocalStorage::new(".");
    let pipeline = RosterPipeline::new(storage, settings);
    let engine = RosterEngine::new(pipeline);

    match engine.run() {
        Ok(summary) => {
            println!(
                "✅ {} of {} records written to {}",
                summary.rendered, summary.parsed, summary.output_path
            );
        }
        Err(e) => {
            // the report file already holds the ERROR line
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}
