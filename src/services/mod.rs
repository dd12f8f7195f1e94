pub mod agent_service;
pub mod client_service;
pub mod dataset_service;
pub mod export_service;
pub mod transaction_service;
