use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use super::{CardCore, IssuingCountry, Jurisdiction};

/// A driver license record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverLicenseCard {
    pub core: CardCore,

    /// License classification code (A, B, C, D).
    pub license_class: String,

    /// Endorsement codes, e.g. `T` for double/triple trailers.
    pub endorsements: String,

    /// Restriction codes, e.g. corrective lenses.
    pub restrictions: String,

    pub is_commercial: bool,
}

impl DriverLicenseCard {
    pub fn new(country: IssuingCountry, jurisdiction: Jurisdiction) -> Self {
        Self {
            core: CardCore::new(country, jurisdiction),
            license_class: String::new(),
            endorsements: String::new(),
            restrictions: String::new(),
            is_commercial: false,
        }
    }
}

/// A commercial driver license (CDL).
///
/// Construction forces the commercial flag on the wrapped license; the
/// wrapped record is reachable through `Deref`, so a CDL validates and
/// encodes anywhere a [`DriverLicenseCard`] does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommercialDriverLicense {
    license: DriverLicenseCard,

    /// Hazardous materials endorsement (H).
    pub hazmat_endorsement: bool,

    /// Tank vehicle endorsement (N).
    pub tank_vehicle_endorsement: bool,
}

impl CommercialDriverLicense {
    pub fn new(country: IssuingCountry, jurisdiction: Jurisdiction) -> Self {
        let mut license = DriverLicenseCard::new(country, jurisdiction);
        license.is_commercial = true;

        Self {
            license,
            hazmat_endorsement: false,
            tank_vehicle_endorsement: false,
        }
    }

    pub fn as_driver_license(&self) -> &DriverLicenseCard {
        &self.license
    }
}

impl Deref for CommercialDriverLicense {
    type Target = DriverLicenseCard;

    fn deref(&self) -> &Self::Target {
        &self.license
    }
}

impl DerefMut for CommercialDriverLicense {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.license
    }
}
