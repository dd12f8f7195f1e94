use rand::Rng;
use tracing::debug;

use crate::models::TransactionRecord;
use crate::utils::Faker;

const AMOUNT_MIN: f64 = 10.0;
const AMOUNT_MAX: f64 = 10_000.0;
const FEE_MIN: f64 = 1.0;
const FEE_MAX: f64 = 50.0;

/// Build one transaction with the given sequential id.
///
/// ClientID and AgentID are drawn from `[1, num_clients]` and
/// `[1, num_agents]`; they are not checked against any client or agent table.
pub fn generate_transaction<R: Rng>(
    faker: &mut Faker<R>,
    transaction_id: u32,
    num_clients: u32,
    num_agents: u32,
) -> TransactionRecord {
    TransactionRecord {
        transaction_id,
        transaction_code: faker.transaction_code(),
        client_id: faker.int_between(1, num_clients),
        client_full_name: faker.name(),
        agent_id: faker.int_between(1, num_agents),
        agent_full_name: faker.name(),
        transaction_date: faker.recent_datetime(),
        amount: faker.amount_between(AMOUNT_MIN, AMOUNT_MAX),
        currency: faker.choice(),
        original_country: faker.country(),
        destination_country: faker.country(),
        fee: faker.amount_between(FEE_MIN, FEE_MAX),
        transaction_status: faker.choice(),
        status_date: faker.recent_datetime(),
        category: faker.choice(),
        icon: faker.image_url(),
        is_fraudulent: faker.flag(),
    }
}

/// Generate `count` transactions with ids `1..=count`
pub fn generate_transactions<R: Rng>(
    faker: &mut Faker<R>,
    count: u32,
    num_clients: u32,
    num_agents: u32,
) -> Vec<TransactionRecord> {
    let transactions: Vec<TransactionRecord> = (1..=count)
        .map(|id| generate_transaction(faker, id, num_clients, num_agents))
        .collect();

    debug!(
        "Generated {} transactions (clients 1..={}, agents 1..={})",
        transactions.len(),
        num_clients,
        num_agents
    );
    transactions
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use crate::models::transaction::{Category, Currency, TransactionStatus};
    use crate::models::Money;
    use crate::utils::faker::LOOKBACK_SECONDS;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    /// `\d+\.\d{2}`
    fn is_two_decimal_text(text: &str) -> bool {
        match text.split_once('.') {
            Some((whole, frac)) => {
                !whole.is_empty()
                    && whole.bytes().all(|b| b.is_ascii_digit())
                    && frac.len() == 2
                    && frac.bytes().all(|b| b.is_ascii_digit())
            }
            None => false,
        }
    }

    #[test]
    fn test_ids_are_contiguous() {
        let mut faker = Faker::seeded(1, fixed_now());
        let txs = generate_transactions(&mut faker, 250, 100, 25);
        assert_eq!(txs.len(), 250);
        for (idx, tx) in txs.iter().enumerate() {
            assert_eq!(tx.transaction_id, idx as u32 + 1);
        }
    }

    #[test]
    fn test_zero_count_is_empty() {
        let mut faker = Faker::seeded(1, fixed_now());
        assert!(generate_transactions(&mut faker, 0, 100, 25).is_empty());
    }

    #[test]
    fn test_field_domains() {
        let mut faker = Faker::seeded(99, fixed_now());
        let now = faker.now();
        let window_start = now - Duration::seconds(LOOKBACK_SECONDS);
        let txs = generate_transactions(&mut faker, 1000, 100, 25);

        for tx in &txs {
            assert!((1..=100).contains(&tx.client_id));
            assert!((1..=25).contains(&tx.agent_id));
            assert!(
                tx.amount >= Money::from_cents(1_000) && tx.amount <= Money::from_cents(1_000_000),
                "amount {}",
                tx.amount
            );
            assert!(
                tx.fee >= Money::from_cents(100) && tx.fee <= Money::from_cents(5_000),
                "fee {}",
                tx.fee
            );
            assert!(Currency::ALL.contains(&tx.currency));
            assert!(TransactionStatus::ALL.contains(&tx.transaction_status));
            assert!(Category::ALL.contains(&tx.category));
            assert!(tx.is_fraudulent <= 1);
            assert!(tx.transaction_date >= window_start && tx.transaction_date <= now);
            assert!(tx.status_date >= window_start && tx.status_date <= now);
            assert!(!tx.client_full_name.is_empty());
            assert!(!tx.agent_full_name.is_empty());
            assert!(!tx.original_country.is_empty());
            assert!(tx.icon.starts_with("https://"));

            let code = tx.transaction_code.as_bytes();
            assert_eq!(code.len(), 12);
            assert_eq!(&code[..4], b"TXN-");
            assert!(code[4..]
                .iter()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));
        }
    }

    #[test]
    fn test_amounts_serialize_with_two_decimals() {
        let mut faker = Faker::seeded(31, fixed_now());
        let txs = generate_transactions(&mut faker, 1000, 100, 25);
        let json = serde_json::to_string_pretty(&txs).unwrap();

        let mut checked = 0;
        for line in json.lines() {
            let line = line.trim().trim_end_matches(',');
            for key in ["\"Amount\": ", "\"Fee\": "] {
                if let Some(value) = line.strip_prefix(key) {
                    assert!(is_two_decimal_text(value), "{}", line);
                    checked += 1;
                }
            }
        }
        assert_eq!(checked, 2000);

        // A value with a trailing zero keeps it
        let tx = TransactionRecord {
            amount: Money::from_cents(126_680),
            fee: Money::from_cents(1_410),
            ..txs[0].clone()
        };
        let json = serde_json::to_string(&tx).unwrap();
        assert!(json.contains("\"Amount\":1266.80,"), "{}", json);
        assert!(json.contains("\"Fee\":14.10,"), "{}", json);
    }

    #[test]
    fn test_single_client_and_agent() {
        let mut faker = Faker::seeded(4, fixed_now());
        let txs = generate_transactions(&mut faker, 50, 1, 1);
        assert!(txs.iter().all(|tx| tx.client_id == 1 && tx.agent_id == 1));
    }

    #[test]
    fn test_seeded_runs_match() {
        let mut a = Faker::seeded(2024, fixed_now());
        let mut b = Faker::seeded(2024, fixed_now());
        assert_eq!(
            generate_transactions(&mut a, 20, 100, 25),
            generate_transactions(&mut b, 20, 100, 25)
        );
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = Faker::seeded(1, fixed_now());
        let mut b = Faker::seeded(2, fixed_now());
        assert_ne!(
            generate_transactions(&mut a, 20, 100, 25),
            generate_transactions(&mut b, 20, 100, 25)
        );
    }
}
