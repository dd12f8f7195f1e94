use rand::Rng;
use tracing::debug;

use crate::models::AgentRecord;
use crate::utils::{Faker, GenError};

/// Generate `count` agents with ids `1..=count`.
///
/// Emails and phone numbers are unique across everything `faker` has
/// produced so far, clients included.
pub fn generate_agents<R: Rng>(
    faker: &mut Faker<R>,
    count: u32,
) -> Result<Vec<AgentRecord>, GenError> {
    let mut agents = Vec::with_capacity(count as usize);
    for agent_id in 1..=count {
        agents.push(AgentRecord {
            agent_id,
            first_name: faker.first_name(),
            last_name: faker.last_name(),
            position: faker.choice(),
            email: faker.unique_email()?,
            phone_number: faker.unique_phone_number()?,
            admin_access: faker.flag(),
            hire_date: faker.recent_datetime(),
        });
    }

    debug!("Generated {} agents", agents.len());
    Ok(agents)
}
