use serde::{Deserialize, Serialize};

use super::{CardCore, IssuingCountry, Jurisdiction};

/// A non-driver identification card record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentificationCard {
    pub core: CardCore,

    /// Whether the card meets federal REAL ID requirements.
    pub real_id_compliant: bool,
}

impl IdentificationCard {
    pub fn new(country: IssuingCountry, jurisdiction: Jurisdiction) -> Self {
        Self {
            core: CardCore::new(country, jurisdiction),
            real_id_compliant: false,
        }
    }
}
