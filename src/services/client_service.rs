use rand::Rng;
use tracing::debug;

use crate::models::ClientRecord;
use crate::utils::{Faker, GenError};

/// Generate `count` clients with ids `1..=count`
pub fn generate_clients<R: Rng>(
    faker: &mut Faker<R>,
    count: u32,
) -> Result<Vec<ClientRecord>, GenError> {
    let mut clients = Vec::with_capacity(count as usize);
    for client_id in 1..=count {
        clients.push(ClientRecord {
            client_id,
            first_name: faker.first_name(),
            last_name: faker.last_name(),
            email: faker.unique_email()?,
            phone_number: faker.unique_phone_number()?,
            country: faker.country(),
            registration_date: faker.recent_datetime(),
            is_active: faker.flag(),
        });
    }

    debug!("Generated {} clients", clients.len());
    Ok(clients)
}
