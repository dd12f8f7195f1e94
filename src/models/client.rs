//! Client models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::export::Columns;

/// One synthetic client row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClientRecord {
    #[serde(rename = "ClientID")]
    pub client_id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub country: String,
    pub registration_date: NaiveDateTime,
    pub is_active: u8,
}

impl Columns for ClientRecord {
    const COLUMNS: &'static [&'static str] = &[
        "ClientID",
        "FirstName",
        "LastName",
        "Email",
        "PhoneNumber",
        "Country",
        "RegistrationDate",
        "IsActive",
    ];
}
