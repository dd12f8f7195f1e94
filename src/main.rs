use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod models;
mod services;
mod utils;

use config::Config;
use services::dataset_service;
use utils::faker::{current_time, Faker};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("txn_synth=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!("Starting txn-synth {}", env!("CARGO_PKG_VERSION"));

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Datasets: {} transactions, agents={} ({}), clients={} ({}), output={}",
        config.num_transactions,
        config.generate_agents,
        config.num_agents,
        config.generate_clients,
        config.num_clients,
        config.output_dir.display()
    );

    let now = current_time();
    let mut faker = match config.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            Faker::seeded(seed, now)
        }
        None => {
            info!("GEN_SEED not set, seeding from entropy");
            Faker::from_entropy(now)
        }
    };

    info!("Timestamps drawn up to {}", faker.now());

    let summaries = match dataset_service::generate_all(&config, &mut faker).await {
        Ok(s) => s,
        Err(e) => {
            error!("Data generation failed: {}", e);
            std::process::exit(1);
        }
    };

    print!("{}", dataset_service::summary_table(&summaries).render());
    println!("Data generation complete. Files saved as CSV and JSON.");
}
