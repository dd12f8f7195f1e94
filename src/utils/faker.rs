//! Seedable random source for synthetic records
//!
//! Every random value in a dataset comes from one `Faker`. It owns the RNG,
//! the "now" that bounds generated timestamps, and the registries used to
//! keep emails and phone numbers unique across a run.

use std::collections::HashSet;

use chrono::{Duration, NaiveDateTime, Timelike, Utc};
use fake::faker::address::en::CountryName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rand::distributions::{Distribution, Standard};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::errors::GenError;
use crate::models::Money;

/// Timestamps are drawn from the last five years (365.24-day years)
pub const LOOKBACK_SECONDS: i64 = 5 * 31_556_736;

/// Upper bound on redraws when a unique value is requested
pub const MAX_UNIQUE_ATTEMPTS: usize = 1000;

const CODE_PREFIX: &str = "TXN-";
const CODE_LEN: usize = 8;
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

const IMAGE_MAX_SIDE: u32 = 1024;
const IMAGE_HOSTS: [&str; 2] = ["https://dummyimage.com", "https://picsum.photos"];

pub struct Faker<R: Rng = StdRng> {
    rng: R,
    now: NaiveDateTime,
    seen_emails: HashSet<String>,
    seen_phones: HashSet<String>,
}

impl Faker<StdRng> {
    /// Deterministic source: same seed and same `now` give the same dataset
    pub fn seeded(seed: u64, now: NaiveDateTime) -> Self {
        Faker::new(StdRng::seed_from_u64(seed), now)
    }

    pub fn from_entropy(now: NaiveDateTime) -> Self {
        Faker::new(StdRng::from_entropy(), now)
    }
}

impl<R: Rng> Faker<R> {
    pub fn new(rng: R, now: NaiveDateTime) -> Self {
        // Generated timestamps carry whole seconds only
        let now = now - Duration::nanoseconds(i64::from(now.nanosecond()));
        Faker {
            rng,
            now,
            seen_emails: HashSet::new(),
            seen_phones: HashSet::new(),
        }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    pub fn name(&mut self) -> String {
        Name().fake_with_rng(&mut self.rng)
    }

    pub fn first_name(&mut self) -> String {
        FirstName().fake_with_rng(&mut self.rng)
    }

    pub fn last_name(&mut self) -> String {
        LastName().fake_with_rng(&mut self.rng)
    }

    pub fn country(&mut self) -> String {
        CountryName().fake_with_rng(&mut self.rng)
    }

    /// Uniform integer in `[low, high]`
    pub fn int_between(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }

    /// Uniform draw in `[low, high]` rounded to cents
    pub fn amount_between(&mut self, low: f64, high: f64) -> Money {
        let raw: f64 = self.rng.gen_range(low..=high);
        Money::from_cents((raw * 100.0).round() as i64)
    }

    /// 0 or 1 with equal probability
    pub fn flag(&mut self) -> u8 {
        self.rng.gen_range(0..=1)
    }

    /// Uniformly chosen member of an enumerated domain
    pub fn choice<T>(&mut self) -> T
    where
        Standard: Distribution<T>,
    {
        self.rng.gen()
    }

    /// Random instant in `[now - 5y, now]`
    pub fn recent_datetime(&mut self) -> NaiveDateTime {
        let offset = self.rng.gen_range(0..=LOOKBACK_SECONDS);
        self.now - Duration::seconds(LOOKBACK_SECONDS) + Duration::seconds(offset)
    }

    pub fn transaction_code(&mut self) -> String {
        let mut code = String::with_capacity(CODE_PREFIX.len() + CODE_LEN);
        code.push_str(CODE_PREFIX);
        for _ in 0..CODE_LEN {
            let idx = self.rng.gen_range(0..CODE_ALPHABET.len());
            code.push(CODE_ALPHABET[idx] as char);
        }
        code
    }

    pub fn image_url(&mut self) -> String {
        let host = IMAGE_HOSTS[self.rng.gen_range(0..IMAGE_HOSTS.len())];
        let width = self.rng.gen_range(1..=IMAGE_MAX_SIDE);
        let height = self.rng.gen_range(1..=IMAGE_MAX_SIDE);
        if host.contains("dummyimage") {
            format!("{}/{}x{}", host, width, height)
        } else {
            format!("{}/{}/{}", host, width, height)
        }
    }

    /// Email that has not been handed out before by this source
    pub fn unique_email(&mut self) -> Result<String, GenError> {
        draw_unique(&mut self.rng, &mut self.seen_emails, "email", |rng| {
            SafeEmail().fake_with_rng(rng)
        })
    }

    /// Phone number that has not been handed out before by this source
    pub fn unique_phone_number(&mut self) -> Result<String, GenError> {
        draw_unique(&mut self.rng, &mut self.seen_phones, "phone number", |rng| {
            PhoneNumber().fake_with_rng(rng)
        })
    }
}

/// "Now" as seen by a fresh run
pub fn current_time() -> NaiveDateTime {
    Utc::now().naive_utc()
}

fn draw_unique<R, F>(
    rng: &mut R,
    seen: &mut HashSet<String>,
    field: &'static str,
    draw: F,
) -> Result<String, GenError>
where
    R: Rng,
    F: Fn(&mut R) -> String,
{
    for _ in 0..MAX_UNIQUE_ATTEMPTS {
        let candidate = draw(rng);
        if seen.insert(candidate.clone()) {
            return Ok(candidate);
        }
    }
    Err(GenError::UniqueExhausted {
        field,
        attempts: MAX_UNIQUE_ATTEMPTS,
    })
}
