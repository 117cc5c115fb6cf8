//! Interactive seat reservation menu for a single train.
//!
//! Configuration comes from the environment (and an optional `.env`);
//! logs go to stderr so they don't interleave with the menu on stdout.

use railseat::{Config, LedgerEnvironment, LedgerReducer, LedgerState, Menu};
use railseat_core::environment::SystemClock;
use railseat_runtime::{Store, metrics::describe_metrics};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    describe_metrics();

    info!(
        train_number = %config.train.number,
        train_name = %config.train.name,
        total_seats = config.train.total_seats,
        "Configuration loaded"
    );

    let train = config.train()?;
    let env = LedgerEnvironment::new(Arc::new(SystemClock));
    let store = Store::new(LedgerState::new(train), LedgerReducer::new(), env);

    let input = BufReader::new(tokio::io::stdin());
    Menu::new(&store, input, tokio::io::stdout()).run().await?;

    info!("Menu closed");
    Ok(())
}
