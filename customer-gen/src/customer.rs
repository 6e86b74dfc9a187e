use std::fmt;

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const FIRST_NAMES: [&str; 10] = [
    "John", "Jane", "Peter", "Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Grace",
];

pub const LAST_NAMES: [&str; 10] = [
    "Doe", "Smith", "Jones", "Brown", "White", "Black", "Green", "Hall", "King", "Lee",
];

pub const EMAIL_DOMAINS: [&str; 4] = ["example.com", "mail.com", "domain.org", "service.net"];

/// Column names of the generated file, in write order
pub const CSV_HEADERS: [&str; 6] = [
    "id",
    "firstName",
    "lastName",
    "email",
    "phone",
    "loyaltyTier",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoyaltyTier {
    Gold,
    Silver,
    Bronze,
    Platinum,
}

/// A single row of the customer file.
///
/// Every field is kept as a plain string (apart from the `id`) since the
/// [corruption overlay](crate::corruption) writes values that no stricter type would accept.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub loyalty_tier: String,
}

impl LoyaltyTier {
    pub const ALL: [LoyaltyTier; 4] = [
        LoyaltyTier::Gold,
        LoyaltyTier::Silver,
        LoyaltyTier::Bronze,
        LoyaltyTier::Platinum,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LoyaltyTier::Gold => "Gold",
            LoyaltyTier::Silver => "Silver",
            LoyaltyTier::Bronze => "Bronze",
            LoyaltyTier::Platinum => "Platinum",
        }
    }
}

impl fmt::Display for LoyaltyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Distribution<LoyaltyTier> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> LoyaltyTier {
        LoyaltyTier::ALL[rng.gen_range(0..LoyaltyTier::ALL.len())]
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, vocabulary: &[&'static str]) -> &'static str {
    vocabulary[rng.gen_range(0..vocabulary.len())]
}

impl CustomerRecord {
    /// Builds a well-formed record for `id` from the fixed vocabularies.
    ///
    /// Values are drawn from `rng` in a fixed order (first name, last name, domain, the three
    /// phone groups, tier) so a seeded `rng` always yields the same record.
    #[must_use]
    pub fn generate<R: Rng + ?Sized>(id: u64, rng: &mut R) -> Self {
        let first_name = pick(rng, &FIRST_NAMES);
        let last_name = pick(rng, &LAST_NAMES);
        let domain = pick(rng, &EMAIL_DOMAINS);
        let email = format!(
            "{}.{}{id}@{domain}",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        );
        let phone = format!(
            "{}-{}-{}",
            rng.gen_range(100..=999_u16),
            rng.gen_range(100..=999_u16),
            rng.gen_range(1000..=9999_u16)
        );
        let loyalty_tier: LoyaltyTier = rng.gen();

        CustomerRecord {
            id,
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email,
            phone,
            loyalty_tier: loyalty_tier.to_string(),
        }
    }
}
