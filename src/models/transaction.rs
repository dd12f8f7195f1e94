//! Transaction models

use chrono::NaiveDateTime;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::export::Columns;
use super::money::Money;

/// Settlement currency of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Inr,
    Aud,
    Cad,
}

impl Currency {
    pub const ALL: [Currency; 6] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Inr,
        Currency::Aud,
        Currency::Cad,
    ];
}

impl Distribution<Currency> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Currency {
        Currency::ALL[rng.gen_range(0..Currency::ALL.len())]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
    Cancelled,
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 4] = [
        TransactionStatus::Completed,
        TransactionStatus::Pending,
        TransactionStatus::Failed,
        TransactionStatus::Cancelled,
    ];
}

impl Distribution<TransactionStatus> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> TransactionStatus {
        TransactionStatus::ALL[rng.gen_range(0..TransactionStatus::ALL.len())]
    }
}

/// Direction of the transfer from the client's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Send,
    Receive,
    Other,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Send, Category::Receive, Category::Other];
}

impl Distribution<Category> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Category {
        Category::ALL[rng.gen_range(0..Category::ALL.len())]
    }
}

/// One synthetic transaction row. Field order is the column order of the
/// CSV output and the key order of the JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "TransactionID")]
    pub transaction_id: u32,
    #[serde(rename = "TransactionCode")]
    pub transaction_code: String,
    #[serde(rename = "ClientID")]
    pub client_id: u32,
    #[serde(rename = "ClientFullName")]
    pub client_full_name: String,
    #[serde(rename = "AgentID")]
    pub agent_id: u32,
    #[serde(rename = "AgentFullName")]
    pub agent_full_name: String,
    #[serde(rename = "TransactionDate")]
    pub transaction_date: NaiveDateTime,
    #[serde(rename = "Amount")]
    pub amount: Money,
    #[serde(rename = "Currency")]
    pub currency: Currency,
    #[serde(rename = "OriginalCountry")]
    pub original_country: String,
    #[serde(rename = "DestinationCountry")]
    pub destination_country: String,
    #[serde(rename = "Fee")]
    pub fee: Money,
    #[serde(rename = "TransactionStatus")]
    pub transaction_status: TransactionStatus,
    // Sampled independently of transaction_date, so it may precede it
    #[serde(rename = "StatusDate")]
    pub status_date: NaiveDateTime,
    #[serde(rename = "Category")]
    pub category: Category,
    #[serde(rename = "Icon")]
    pub icon: String,
    #[serde(rename = "IsFraudulent")]
    pub is_fraudulent: u8,
}

impl Columns for TransactionRecord {
    const COLUMNS: &'static [&'static str] = &[
        "TransactionID",
        "TransactionCode",
        "ClientID",
        "ClientFullName",
        "AgentID",
        "AgentFullName",
        "TransactionDate",
        "Amount",
        "Currency",
        "OriginalCountry",
        "DestinationCountry",
        "Fee",
        "TransactionStatus",
        "StatusDate",
        "Category",
        "Icon",
        "IsFraudulent",
    ];
}
