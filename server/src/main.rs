mod api_handlers;
mod game_host;
mod server_config;
mod tick_driver;
mod web_server;

use std::path::Path;
use clap::Parser;
use common::games::SessionRng;
use common::{log, log_error, logger};

use game_host::GameHost;
use server_config::{DEFAULT_CONFIG_FILE, ServerConfig, get_config_manager};
use tick_driver::TickDriver;
use web_server::run_web_server;

#[derive(Parser)]
#[command(name = "snake_server")]
struct Args {
    /// YAML config file; defaults are used when it does not exist
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the default config to the config path and exit
    #[arg(long)]
    write_default_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(&args.config);
    if args.write_default_config {
        config_manager.set_config(&ServerConfig::default())?;
        log!("Default config written to {}", args.config);
        return Ok(());
    }
    let config = config_manager.get_config()?;

    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Game seed: {}", rng.seed());

    let host = GameHost::new(config.field_size(), rng)?;
    log!(
        "Game initialized ({}x{})",
        host.field_size().width,
        host.field_size().height
    );

    let driver = TickDriver::new(host.clone(), config.tick_interval());
    tokio::spawn(async move {
        driver.run().await;
    });

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log_error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        log!("Shutdown signal received");
    };

    run_web_server(
        host,
        &config.bind_address,
        Path::new(&config.static_files_path),
        shutdown_signal,
    )
    .await?;

    log!("Server shut down gracefully");

    Ok(())
}
