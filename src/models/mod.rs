//! Record models for the generated datasets
//!
//! Each model is one row of an output file. Serde field names are the
//! column headers of the CSV output and the keys of the JSON output.

pub mod agent;
pub mod client;
pub mod export;
pub mod money;
pub mod transaction;

pub use agent::AgentRecord;
pub use client::ClientRecord;
pub use export::{Columns, DatasetSummary};
pub use money::Money;
pub use transaction::TransactionRecord;
