//! Closed vocabularies used across the card model.
//!
//! Variant names double as the wire codes (what serde and the payload
//! encoder emit), matching the AAMVA D20 code tables. [`Sex`] is the one
//! exception: its wire form is a one-digit ordinal.

use serde::{Deserialize, Serialize};

use crate::macros::coded_enum;

coded_enum! {
    /// Issuing country, ISO-3166 alpha-3.
    pub enum IssuingCountry {
        USA,
        CAN,
        MEX,
    }
}

coded_enum! {
    /// Administrative region issuing the card: U.S. states, the District
    /// of Columbia, and territories.
    pub enum Jurisdiction {
        AL, AK, AZ, AR, CA, CO, CT, DE, FL, GA,
        HI, ID, IL, IN, IA, KS, KY, LA, ME, MD,
        MA, MI, MN, MS, MO, MT, NE, NV, NH, NJ,
        NM, NY, NC, ND, OH, OK, OR, PA, RI, SC,
        SD, TN, TX, UT, VT, VA, WA, WV, WI, WY,
        DC, GU, PR, VI, AS, MP,
    }
}

coded_enum! {
    /// Eye color per the AAMVA D20 table. `DIC` is dichromatic.
    pub enum EyeColor {
        BLK,
        BLU,
        BRO,
        GRN,
        GRY,
        HAZ,
        MAR,
        PNK,
        DIC,
        UNK,
    }
}

coded_enum! {
    /// Hair color per the AAMVA D20 table.
    pub enum HairColor {
        BAL,
        BLK,
        BLN,
        BRO,
        GRY,
        RED,
        SDY,
        WHI,
        UNK,
    }
}

impl Default for EyeColor {
    fn default() -> Self {
        Self::UNK
    }
}

impl Default for HairColor {
    fn default() -> Self {
        Self::UNK
    }
}

/// Sex of the cardholder, encoded as its AAMVA ordinal in the `DBC`
/// field.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Sex {
    Male,
    Female,
    #[default]
    NotSpecified,
}

impl Sex {
    /// One-digit wire code: 1 = male, 2 = female, 9 = not specified.
    pub fn code(self) -> u8 {
        match self {
            Self::Male => 1,
            Self::Female => 2,
            Self::NotSpecified => 9,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Male),
            2 => Some(Self::Female),
            9 => Some(Self::NotSpecified),
            _ => None,
        }
    }
}
