use std::path::PathBuf;

use crate::utils::errors::GenError;

pub const NUM_AGENTS: u32 = 25;
pub const NUM_CLIENTS: u32 = 100;
pub const NUM_TRANSACTIONS: u32 = 1000;

/// Run settings. Every field has a built-in default and can be overridden
/// through the environment (or a `.env` file).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub num_agents: u32,
    pub num_clients: u32,
    pub num_transactions: u32,
    pub output_dir: PathBuf,
    pub seed: Option<u64>,
    pub generate_agents: bool,
    pub generate_clients: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            num_agents: NUM_AGENTS,
            num_clients: NUM_CLIENTS,
            num_transactions: NUM_TRANSACTIONS,
            output_dir: PathBuf::from("."),
            seed: None,
            generate_agents: false,
            generate_clients: false,
        }
    }
}

impl Config {
    /// Load settings from process environment variables
    pub fn from_env() -> Result<Self, GenError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, GenError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let num_agents = parse_count(&lookup, "NUM_AGENTS", defaults.num_agents)?;
        let num_clients = parse_count(&lookup, "NUM_CLIENTS", defaults.num_clients)?;
        let num_transactions =
            parse_count(&lookup, "NUM_TRANSACTIONS", defaults.num_transactions)?;

        // AgentID and ClientID are drawn from [1, N]
        if num_agents == 0 {
            return Err(GenError::config("NUM_AGENTS", "must be at least 1"));
        }
        if num_clients == 0 {
            return Err(GenError::config("NUM_CLIENTS", "must be at least 1"));
        }

        let output_dir = lookup("OUTPUT_DIR")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);

        let seed = match lookup("GEN_SEED") {
            Some(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| GenError::config("GEN_SEED", e.to_string()))?,
            ),
            _ => None,
        };

        let generate_agents = parse_flag(&lookup, "GENERATE_AGENTS")?;
        let generate_clients = parse_flag(&lookup, "GENERATE_CLIENTS")?;

        Ok(Config {
            num_agents,
            num_clients,
            num_transactions,
            output_dir,
            seed,
            generate_agents,
            generate_clients,
        })
    }
}

fn parse_count<F>(lookup: &F, key: &str, default: u32) -> Result<u32, GenError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<u32>()
            .map_err(|e| GenError::config(key, format!("'{}' is not a count ({})", raw, e))),
        _ => Ok(default),
    }
}

fn parse_flag<F>(lookup: &F, key: &str) -> Result<bool, GenError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(false);
    };
    match raw.trim().to_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Ok(false),
        "1" | "true" | "yes" | "on" => Ok(true),
        other => Err(GenError::config(key, format!("'{}' is not a boolean", other))),
    }
}
