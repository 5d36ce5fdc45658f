//! Customer records.

use chrono::{DateTime, TimeZone, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::query::Queryable;
use crate::record::{Record, Seed};

const FIRST_NAMES: &[&str] = &[
    "John", "Sarah", "Michael", "Emma", "David", "Lisa", "James", "Emily", "Robert", "Maria",
    "William", "Jessica", "Richard", "Jennifer", "Thomas",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
];

pub(crate) const COMPANIES: &[&str] = &[
    "Tech Corp",
    "Global Inc",
    "Innovate LLC",
    "Digital Solutions",
    "Smart Systems",
    "Future Tech",
    "Prime Industries",
    "Elite Services",
    "Apex Group",
    "Summit Enterprises",
];

/// Number of customers a fresh seed produces.
pub const CUSTOMER_SEED_COUNT: usize = 50;

/// Customer account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Inactive,
    Pending,
}

impl CustomerStatus {
    /// The lowercase wire/facet value.
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "active",
            CustomerStatus::Inactive => "inactive",
            CustomerStatus::Pending => "pending",
        }
    }
}

const STATUSES: &[CustomerStatus] = &[
    CustomerStatus::Active,
    CustomerStatus::Inactive,
    CustomerStatus::Pending,
];

/// One customer row, persisted under the `customers` slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub status: CustomerStatus,
    pub total_spent: u64,
    pub orders: u32,
    pub joined_date: DateTime<Utc>,
}

impl Record for Customer {
    type Id = u64;
    const SLOT: &'static str = "customers";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn first_id() -> u64 {
        1
    }

    fn next_id(max: &u64) -> u64 {
        max + 1
    }
}

impl Queryable for Customer {
    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.company]
    }

    fn facet(&self, name: &str) -> Option<&str> {
        (name == "status").then_some(self.status.as_str())
    }
}

impl Seed for Customer {
    fn seed<G: Rng>(rng: &mut G) -> Vec<Self> {
        (1..=CUSTOMER_SEED_COUNT as u64)
            .map(|id| {
                let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
                let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
                Customer {
                    id,
                    name: format!("{} {}", first, last),
                    email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
                    company: COMPANIES[rng.gen_range(0..COMPANIES.len())].to_string(),
                    phone: format!(
                        "+1 ({}) {}-{}",
                        rng.gen_range(100..1000),
                        rng.gen_range(100..1000),
                        rng.gen_range(1000..10000)
                    ),
                    status: STATUSES[rng.gen_range(0..STATUSES.len())],
                    total_spent: rng.gen_range(1000..51000),
                    orders: rng.gen_range(1..51),
                    joined_date: date_in_2023(rng),
                }
            })
            .collect()
    }
}

fn date_in_2023<G: Rng>(rng: &mut G) -> DateTime<Utc> {
    let month = rng.gen_range(1..=12);
    let day = rng.gen_range(1..=28);
    // Day capped at 28, so every month/day pair is a valid date.
    Utc.with_ymd_and_hms(2023, month, day, 0, 0, 0)
        .single()
        .expect("month 1-12, day 1-28 is always valid")
}
