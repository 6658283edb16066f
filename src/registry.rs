//! AAMVA Data Element Identifier registry.
//!
//! Maps every logical card attribute to its 3-character DEI tag as carried
//! in a PDF417 subfile, together with the official semantics. The registry
//! is pure data: codes are unique, defined once at compile time, and
//! exposed read-only (`LIST`, [`DataElement::code`],
//! [`DataElement::description`], [`DataElement::from_code`]) so external
//! tooling can cross-reference AAMVA tags without owning a copy of the
//! standard.
//!
//! Some identifiers are carried over from older revisions (2005, 2009,
//! 2010, 2013); a few were introduced or refined in 2020. The legacy
//! catalogue reused a handful of tags across field names; each tag below
//! has exactly one owner.

use crate::macros::data_element_registry;

data_element_registry! {
    /// One logical field of an AAMVA DL/ID record.
    pub enum DataElement {
        // Name fields.
        FullName: "DAA" => "Full name, combined (legacy; optional or deprecated in modern revisions)",
        FamilyName: "DCS" => "Customer family name (last name), up to 35 characters",
        GivenName: "DAC" => "Customer given name (first name)",
        MiddleNames: "DAD" => "Customer middle name(s)",
        NameSuffix: "DCU" => "Name suffix (JR, SR, I, II, III)",
        NamePrefix: "DBP" => "Name prefix (MR, MRS, MS, DR)",
        LegacyLastName: "DAB" => "Driver last name (legacy)",

        // Mailing address.
        StreetAddress1: "DAG" => "Mailing street address 1",
        StreetAddress2: "DAH" => "Mailing street address 2 (apartment, suite, unit)",
        City: "DAI" => "Mailing city",
        JurisdictionCode: "DAJ" => "Mailing jurisdiction code (state or province)",
        PostalCode: "DAK" => "Mailing postal code (ZIP or postal), up to 11 characters",
        Country: "DCG" => "Country identification (USA, CAN)",

        // Residence address. Not all jurisdictions distinguish mailing
        // from residence in the PDF417 data.
        ResidenceStreetAddress1: "DAL" => "Residence street address 1",
        ResidenceStreetAddress2: "DAM" => "Residence street address 2",
        ResidenceCity: "DAN" => "Residence city",
        ResidenceJurisdictionCode: "DAO" => "Residence jurisdiction code (state or province)",
        ResidencePostalCode: "DAP" => "Residence postal code (ZIP or postal)",

        // Dates, formatted YYYYMMDD.
        ExpirationDate: "DBA" => "Document expiration date (YYYYMMDD)",
        DateOfBirth: "DBB" => "Date of birth (YYYYMMDD)",
        IssueDate: "DBD" => "Document issue date (YYYYMMDD)",
        LastNameUpdate: "DBE" => "Date the name was changed or updated",

        // Core license/ID information.
        LicenseNumber: "DAQ" => "Driver license or ID card number",
        LicenseClass: "DAR" => "License classification code (A, B, C, D)",
        Restrictions: "DAS" => "License restriction codes (standard or jurisdiction-specific)",
        Endorsements: "DAT" => "License endorsement codes",
        DocumentDiscriminator: "DCF" => "Document discriminator, uniquely identifies one issued document",
        AuditInformation: "DCJ" => "Audit information for the issuing transaction",
        InventoryControlNumber: "DCK" => "Inventory control number of the physical card stock",
        PlaceOfBirth: "DCI" => "Place of birth (city, state or province, country)",

        // Physical descriptors.
        Sex: "DBC" => "Sex (1 = male, 2 = female, 9 = not specified)",
        Height: "DAU" => "Height in inches or centimeters, per jurisdiction",
        EyeColor: "DAY" => "Eye color (BLK, BLU, BRO, GRN, GRY, HAZ, MAR, PNK, DIC, UNK)",
        HairColor: "DAZ" => "Hair color (BAL, BLK, BLN, BRO, GRY, RED, SDY, WHI, UNK)",
        WeightPounds: "DAV" => "Weight in pounds",
        WeightKilograms: "DAW" => "Weight in kilograms",

        // REAL ID and 2020-era fields.
        Under18Until: "DDH" => "Date on which the cardholder turns 18 (YYYYMMDD)",
        Under21Until: "DDI" => "Date on which the cardholder turns 21 (YYYYMMDD)",
        OrganDonor: "DBH" => "Organ donor indicator",
        VeteranIndicator: "DCO" => "Veteran indicator",
        NonRealIdIndicator: "DDE" => "Federal non-compliance indicator for non-REAL-ID documents",
        LimitedTermIndicator: "DDF" => "Limited-term credential indicator",
        ComplianceType: "DDD" => "REAL ID compliance type (compliant, non-compliant, enhanced)",

        // Version and jurisdiction-specific fields.
        AamvaVersionNumber: "DCA" => "AAMVA version number of the PDF417 data (two digits)",
        JurisdictionVehicleClass: "DCB" => "Jurisdiction-specific vehicle class",
        JurisdictionEndorsements: "DCD" => "Jurisdiction-specific endorsement codes",
        JurisdictionRestrictions: "DCE" => "Jurisdiction-specific restriction codes",

        // Alias / AKA fields.
        AliasFamilyName: "DBN" => "Alias or AKA family name",
        AliasGivenName: "DBO" => "Alias or AKA given name",
        AliasSuffix: "DBS" => "Alias or AKA name suffix",
    }
}
