//! Agent models

use chrono::NaiveDateTime;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::export::Columns;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Agent,
    Manager,
}

impl Distribution<Position> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        if rng.gen_bool(0.5) {
            Position::Agent
        } else {
            Position::Manager
        }
    }
}

/// One synthetic agent row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AgentRecord {
    #[serde(rename = "AgentID")]
    pub agent_id: u32,
    pub first_name: String,
    pub last_name: String,
    pub position: Position,
    pub email: String,
    pub phone_number: String,
    pub admin_access: u8,
    pub hire_date: NaiveDateTime,
}

impl Columns for AgentRecord {
    const COLUMNS: &'static [&'static str] = &[
        "AgentID",
        "FirstName",
        "LastName",
        "Position",
        "Email",
        "PhoneNumber",
        "AdminAccess",
        "HireDate",
    ];
}
