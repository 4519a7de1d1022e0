use anyhow::Context;
use clap::Parser;
use shop_sketch::app::run_balance_demo;
use shop_sketch::utils::{error::ShopError, logger, validation::Validate};
use shop_sketch::{CliConfig, ConfigProvider, TomlConfig};

fn fail(e: &ShopError) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e);
    std::process::exit(e.exit_code());
}

async fn run<C: ConfigProvider + Validate>(config: &C) {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed");
        fail(&e);
    }

    match run_balance_demo(config).await {
        Ok(outcome) => {
            tracing::info!(
                "Read balance from {} (secondary: {})",
                outcome.primary_backend,
                outcome.secondary_backend
            );
            match outcome.balance {
                Some(balance) => println!("{}", balance),
                None => println!("absent"),
            }
        }
        Err(e) => fail(&e),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match &cli.config {
        Some(path) => {
            // A failed load surfaces through anyhow and exits with status 1.
            let config = TomlConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path))?;
            logger::init_cli_logger_with_level(cli.verbose, config.log_level());
            tracing::info!("Loaded configuration from {}", path);
            run(&config).await;
        }
        None => {
            logger::init_cli_logger(cli.verbose);
            if cli.verbose {
                tracing::debug!("CLI config: {:?}", cli);
            }
            run(&cli).await;
        }
    }

    Ok(())
}
