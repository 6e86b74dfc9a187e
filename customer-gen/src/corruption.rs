//! Deterministic overlay that breaks selected fields of a record, keyed only on its id.
//!
//! The overlay never consults the random source, so the set of broken rows in a file depends
//! on nothing but the record count.

use log::debug;

use crate::customer::CustomerRecord;

pub const INVALID_EMAIL: &str = "invalid-email";
pub const MISSING_PHONE: &str = "";
pub const UNKNOWN_TIER: &str = "UnknownTier";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corruption {
    /// Every 100th record gets an email with no `@`
    InvalidEmail,
    /// Every 150th record loses its phone number
    MissingPhone,
    /// Every 200th record gets a tier outside the vocabulary
    UnknownTier,
}

impl Corruption {
    pub const ALL: [Corruption; 3] = [
        Corruption::InvalidEmail,
        Corruption::MissingPhone,
        Corruption::UnknownTier,
    ];

    #[must_use]
    pub fn interval(self) -> u64 {
        match self {
            Corruption::InvalidEmail => 100,
            Corruption::MissingPhone => 150,
            Corruption::UnknownTier => 200,
        }
    }

    #[must_use]
    pub fn applies_to(self, id: u64) -> bool {
        id % self.interval() == 0
    }

    pub fn apply(self, record: &mut CustomerRecord) {
        let field = match self {
            Corruption::InvalidEmail => &mut record.email,
            Corruption::MissingPhone => &mut record.phone,
            Corruption::UnknownTier => &mut record.loyalty_tier,
        };
        *field = self.sentinel().to_owned();
    }

    #[must_use]
    pub fn sentinel(self) -> &'static str {
        match self {
            Corruption::InvalidEmail => INVALID_EMAIL,
            Corruption::MissingPhone => MISSING_PHONE,
            Corruption::UnknownTier => UNKNOWN_TIER,
        }
    }
}

/// The corruptions that fire for `id`, in field order. Rules are independent, so an id can
/// collect all three (e.g. 600).
pub fn corruptions_for(id: u64) -> impl Iterator<Item = Corruption> {
    Corruption::ALL
        .into_iter()
        .filter(move |corruption| corruption.applies_to(id))
}

#[must_use]
pub fn apply_corruption(mut record: CustomerRecord) -> CustomerRecord {
    for corruption in corruptions_for(record.id) {
        debug!("Corrupting record {}: {:?}", record.id, corruption);
        corruption.apply(&mut record);
    }
    record
}
