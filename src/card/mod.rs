//! The card domain model.
//!
//! [`CardCore`] owns every attribute shared by all card kinds; the
//! concrete documents ([`DriverLicenseCard`], [`IdentificationCard`],
//! [`CommercialDriverLicense`]) wrap it with their own fields. Instances
//! are owned by the calling issuance workflow; this crate never persists
//! or caches them.

pub mod types;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::revision::CardDesignRevision;

pub use types::{EyeColor, HairColor, IssuingCountry, Jurisdiction, Sex};

mod dl;
pub use dl::*;
mod id;
pub use id::*;

/// Attributes common to every AAMVA card kind.
///
/// Fields are freely mutable during the pre-issuance phase, with one
/// exception: the card number is private and [`assign_card_number`] is
/// its only mutator. It is populated once, by the number-generation step,
/// before the record reaches validation.
///
/// [`assign_card_number`]: CardCore::assign_card_number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCore {
    card_number: String,
    pub country: IssuingCountry,
    pub jurisdiction: Jurisdiction,

    // Name fields.
    pub family_name: String,
    pub given_name: String,
    pub middle_names: String,
    pub name_prefix: String,
    pub name_suffix: String,

    // Mailing address.
    pub street_address: String,
    pub street_address_2: String,
    pub city: String,
    pub postal_code: String,

    // `None` means not yet populated; the date-ordering validation rules
    // fail on it the same way they fail on a misordered pair.
    pub date_of_birth: Option<NaiveDate>,
    pub issue_date: Option<NaiveDate>,
    pub expiration_date: Option<NaiveDate>,

    // Physical descriptors. A height of zero means not provided.
    pub sex: Sex,
    pub eye_color: EyeColor,
    pub hair_color: HairColor,
    pub height_inches: u32,

    pub revision: CardDesignRevision,

    // Document tracking.
    pub document_discriminator: String,
    pub audit_information: String,
    pub inventory_control_number: String,
}

impl CardCore {
    /// A blank record for the given issuer. Descriptors start unknown,
    /// the revision at [`CardDesignRevision::LATEST_SUPPORTED`], and
    /// every text field empty.
    pub fn new(country: IssuingCountry, jurisdiction: Jurisdiction) -> Self {
        Self {
            card_number: String::new(),
            country,
            jurisdiction,
            family_name: String::new(),
            given_name: String::new(),
            middle_names: String::new(),
            name_prefix: String::new(),
            name_suffix: String::new(),
            street_address: String::new(),
            street_address_2: String::new(),
            city: String::new(),
            postal_code: String::new(),
            date_of_birth: None,
            issue_date: None,
            expiration_date: None,
            sex: Sex::default(),
            eye_color: EyeColor::default(),
            hair_color: HairColor::default(),
            height_inches: 0,
            revision: CardDesignRevision::default(),
            document_discriminator: String::new(),
            audit_information: String::new(),
            inventory_control_number: String::new(),
        }
    }

    /// The license/ID number, empty until assigned.
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    /// Assign the generated license/ID number. The only mutator for the
    /// field.
    pub fn assign_card_number(&mut self, number: impl Into<String>) {
        self.card_number = number.into();
    }
}
