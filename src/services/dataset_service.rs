use rand::Rng;
use tracing::info;

use crate::config::Config;
use crate::models::DatasetSummary;
use crate::services::export_service::{self, AGENTS_STEM, CLIENTS_STEM, TRANSACTIONS_STEM};
use crate::services::{agent_service, client_service, transaction_service};
use crate::utils::{Faker, GenError, Table};

/// Generate every enabled dataset and write it to `config.output_dir`.
/// Order is agents, clients, transactions.
pub async fn generate_all<R: Rng>(
    config: &Config,
    faker: &mut Faker<R>,
) -> Result<Vec<DatasetSummary>, GenError> {
    let mut summaries = Vec::new();

    if config.generate_agents {
        info!("Generating {} agents...", config.num_agents);
        let agents = agent_service::generate_agents(faker, config.num_agents)?;
        summaries
            .push(export_service::write_dataset(&config.output_dir, AGENTS_STEM, &agents).await?);
    }

    if config.generate_clients {
        info!("Generating {} clients...", config.num_clients);
        let clients = client_service::generate_clients(faker, config.num_clients)?;
        summaries
            .push(export_service::write_dataset(&config.output_dir, CLIENTS_STEM, &clients).await?);
    }

    info!("Generating {} transactions...", config.num_transactions);
    let transactions = transaction_service::generate_transactions(
        faker,
        config.num_transactions,
        config.num_clients,
        config.num_agents,
    );
    summaries.push(
        export_service::write_dataset(&config.output_dir, TRANSACTIONS_STEM, &transactions).await?,
    );

    Ok(summaries)
}

/// Tabulate what a run wrote
pub fn summary_table(summaries: &[DatasetSummary]) -> Table {
    let mut table = Table::new(vec!["Dataset", "Rows", "CSV", "JSON"]);
    for summary in summaries {
        let rows = summary.rows.to_string();
        let csv = summary.csv_path.display().to_string();
        let json = summary.json_path.display().to_string();
        table.add_row(vec![
            summary.name.as_str(),
            rows.as_str(),
            csv.as_str(),
            json.as_str(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    fn config_for(name: &str) -> Config {
        Config {
            num_agents: 5,
            num_clients: 10,
            num_transactions: 30,
            output_dir: std::env::temp_dir()
                .join(format!("txn_synth_{}_{}", std::process::id(), name)),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_transactions_only_by_default() {
        let config = config_for("default_run");
        let mut faker = Faker::seeded(8, fixed_now());
        let summaries = generate_all(&config, &mut faker).await.unwrap();

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].name, TRANSACTIONS_STEM);
        assert_eq!(summaries[0].rows, 30);
        assert!(summaries[0].csv_path.exists());
        assert!(summaries[0].json_path.exists());
        assert!(!config.output_dir.join("Agents.csv").exists());

        tokio::fs::remove_dir_all(&config.output_dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_all_datasets_enabled() {
        let config = Config {
            generate_agents: true,
            generate_clients: true,
            ..config_for("full_run")
        };
        let mut faker = Faker::seeded(8, fixed_now());
        let summaries = generate_all(&config, &mut faker).await.unwrap();

        let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec![AGENTS_STEM, CLIENTS_STEM, TRANSACTIONS_STEM]);
        assert_eq!(summaries[0].rows, 5);
        assert_eq!(summaries[1].rows, 10);
        for file in ["Agents.json", "Clients.json", "transactions_.csv"] {
            assert!(config.output_dir.join(file).exists(), "{} missing", file);
        }

        let rendered = summary_table(&summaries).render();
        assert!(rendered.contains("Dataset"));
        assert!(rendered.contains("Clients"));
        assert!(rendered.contains("30"));

        tokio::fs::remove_dir_all(&config.output_dir).await.unwrap();
    }
}
