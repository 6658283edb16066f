//! The layered validation engine.
//!
//! A card is checked by an ordered pipeline that stops at the first
//! failing rule and returns that rule's error:
//!
//! 1. revision compliance: revisions newer than
//!    [`CardDesignRevision::LATEST_SUPPORTED`] are refused (encoding
//!    tolerates them via header fallback, validation never does);
//! 2. universal field rules: names, name length, date ordering, card
//!    number format;
//! 3. physical descriptor bounds: height, mandatory for driver licenses
//!    and optional for identification cards;
//! 4. revision-specific mandatory fields: the document discriminator;
//! 5. business rules: the commercial minimum age;
//! 6. the jurisdiction rule set ([`jurisdiction::rules_for`]).
//!
//! Validation is a pure predicate pipeline: no side effects, and the same
//! unmodified card always yields the same result. Callers wanting every
//! violation rather than the first must run the layers themselves.

pub mod jurisdiction;

use chrono::{Datelike, NaiveDate, Utc};
use lazy_static::lazy_static;
use regex::Regex;

use crate::card::{
    CardCore, CommercialDriverLicense, DriverLicenseCard, IdentificationCard, Jurisdiction,
};
use crate::revision::CardDesignRevision;

pub use jurisdiction::{rules_for, JurisdictionRule};

const MAX_FAMILY_NAME_CHARS: usize = 35;
const MIN_HEIGHT_INCHES: u32 = 48;
const MAX_HEIGHT_INCHES: u32 = 96;
const COMMERCIAL_MINIMUM_AGE: i32 = 21;

lazy_static! {
    static ref CARD_NUMBER_PATTERN: Regex = Regex::new("^[A-Za-z0-9]{5,16}$").unwrap();
}

/// Why a card was refused. Failure is an expected outcome of a data-entry
/// workflow, so it is returned as data rather than panicking.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("unsupported card design revision {0:?}")]
    UnsupportedRevision(CardDesignRevision),

    #[error("family name is required")]
    MissingFamilyName,

    #[error("given name is required")]
    MissingGivenName,

    #[error("family name exceeds the maximum length of 35 characters")]
    FamilyNameTooLong,

    #[error("expiration date must be after the issue date")]
    ExpirationNotAfterIssue,

    #[error("date of birth must be before the issue date")]
    BirthNotBeforeIssue,

    #[error("card number must be 5 to 16 alphanumeric characters")]
    MalformedCardNumber,

    #[error("height of {0} inches is outside the acceptable range of 48 to 96")]
    HeightOutOfRange(u32),

    #[error("document discriminator is required for revision {0:?}")]
    MissingDocumentDiscriminator(CardDesignRevision),

    #[error("commercial driver licenses require a holder aged 21 or older")]
    UnderageCommercialHolder,

    #[error("jurisdiction {jurisdiction} rule failed: {rule}")]
    JurisdictionRule {
        jurisdiction: Jurisdiction,
        rule: &'static str,
    },
}

/// Validate a driver license against the full pipeline. Height is
/// mandatory; the document discriminator is required at revision 2013.
pub fn validate_driver_license(card: &DriverLicenseCard) -> Result<(), ValidationError> {
    let core = &card.core;

    check_revision_compliance(core.revision)?;
    check_universal_fields(core)?;
    check_height(core.height_inches, true)?;

    if core.revision == CardDesignRevision::Aamva2013 {
        check_document_discriminator(core)?;
    }

    if card.is_commercial {
        check_commercial_age(core.date_of_birth, Utc::now().year())?;
    }

    jurisdiction::check(core)
}

/// Validate an identification card. Height is optional (zero means not
/// provided); the document discriminator is required from revision 2010
/// on.
pub fn validate_identification_card(card: &IdentificationCard) -> Result<(), ValidationError> {
    let core = &card.core;

    check_revision_compliance(core.revision)?;
    check_universal_fields(core)?;

    if core.height_inches != 0 {
        check_height(core.height_inches, false)?;
    }

    if core.revision >= CardDesignRevision::Aamva2010 {
        check_document_discriminator(core)?;
    }

    jurisdiction::check(core)
}

/// Validate a commercial driver license through the driver-license
/// pipeline (the commercial flag is forced at construction, so the
/// minimum-age rule always applies).
pub fn validate_commercial_driver_license(
    card: &CommercialDriverLicense,
) -> Result<(), ValidationError> {
    validate_driver_license(card.as_driver_license())
}

fn check_revision_compliance(revision: CardDesignRevision) -> Result<(), ValidationError> {
    if revision.is_supported() {
        Ok(())
    } else {
        Err(ValidationError::UnsupportedRevision(revision))
    }
}

fn check_universal_fields(core: &CardCore) -> Result<(), ValidationError> {
    if core.family_name.trim().is_empty() {
        return Err(ValidationError::MissingFamilyName);
    }

    if core.given_name.trim().is_empty() {
        return Err(ValidationError::MissingGivenName);
    }

    if core.family_name.chars().count() > MAX_FAMILY_NAME_CHARS {
        return Err(ValidationError::FamilyNameTooLong);
    }

    // An unset date fails the ordering rule it participates in, the same
    // way a misordered pair does.
    match (core.expiration_date, core.issue_date) {
        (Some(expiration), Some(issue)) if expiration > issue => {}
        _ => return Err(ValidationError::ExpirationNotAfterIssue),
    }

    match (core.date_of_birth, core.issue_date) {
        (Some(birth), Some(issue)) if birth < issue => {}
        _ => return Err(ValidationError::BirthNotBeforeIssue),
    }

    if !CARD_NUMBER_PATTERN.is_match(core.card_number()) {
        return Err(ValidationError::MalformedCardNumber);
    }

    Ok(())
}

fn check_height(height_inches: u32, mandatory: bool) -> Result<(), ValidationError> {
    if !mandatory && height_inches == 0 {
        return Ok(());
    }

    if !(MIN_HEIGHT_INCHES..=MAX_HEIGHT_INCHES).contains(&height_inches) {
        return Err(ValidationError::HeightOutOfRange(height_inches));
    }

    Ok(())
}

fn check_document_discriminator(core: &CardCore) -> Result<(), ValidationError> {
    if core.document_discriminator.trim().is_empty() {
        Err(ValidationError::MissingDocumentDiscriminator(core.revision))
    } else {
        Ok(())
    }
}

fn check_commercial_age(
    date_of_birth: Option<NaiveDate>,
    current_year: i32,
) -> Result<(), ValidationError> {
    // Year arithmetic, not full birthdays: turning 21 in the current
    // calendar year qualifies. A missing date already failed layer 2.
    if let Some(birth) = date_of_birth {
        if current_year - birth.year() < COMMERCIAL_MINIMUM_AGE {
            return Err(ValidationError::UnderageCommercialHolder);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate, Utc};

    use super::{
        check_commercial_age, validate_commercial_driver_license, validate_driver_license,
        validate_identification_card, ValidationError,
    };
    use crate::card::{
        CommercialDriverLicense, DriverLicenseCard, EyeColor, HairColor, IdentificationCard,
        IssuingCountry, Jurisdiction, Sex,
    };
    use crate::revision::CardDesignRevision;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn sample_driver_license() -> DriverLicenseCard {
        let mut card = DriverLicenseCard::new(IssuingCountry::USA, Jurisdiction::CA);
        card.core.assign_card_number("D1234567");
        card.core.family_name = "DOE".to_owned();
        card.core.given_name = "JOHN".to_owned();
        card.core.street_address = "123 MAIN ST".to_owned();
        card.core.city = "LOS ANGELES".to_owned();
        card.core.postal_code = "90210".to_owned();
        card.core.date_of_birth = Some(date(1990, 1, 1));
        card.core.issue_date = Some(date(2020, 1, 1));
        card.core.expiration_date = Some(date(2025, 1, 1));
        card.core.sex = Sex::Male;
        card.core.eye_color = EyeColor::BRO;
        card.core.hair_color = HairColor::BLK;
        card.core.height_inches = 70;
        card.core.document_discriminator = "1234567890".to_owned();
        card.license_class = "C".to_owned();
        card
    }

    fn sample_identification_card() -> IdentificationCard {
        let mut card = IdentificationCard::new(IssuingCountry::USA, Jurisdiction::CA);
        card.core.assign_card_number("X9876543");
        card.core.family_name = "DOE".to_owned();
        card.core.given_name = "JANE".to_owned();
        card.core.postal_code = "90210".to_owned();
        card.core.date_of_birth = Some(date(1985, 6, 15));
        card.core.issue_date = Some(date(2021, 3, 1));
        card.core.expiration_date = Some(date(2029, 3, 1));
        card.core.document_discriminator = "0987654321".to_owned();
        card
    }

    #[test]
    fn sample_cards_pass() {
        assert_eq!(validate_driver_license(&sample_driver_license()), Ok(()));
        assert_eq!(
            validate_identification_card(&sample_identification_card()),
            Ok(())
        );
    }

    #[test]
    fn validation_is_idempotent() {
        let card = sample_driver_license();
        let first = validate_driver_license(&card);
        let second = validate_driver_license(&card);
        assert_eq!(first, second);
    }

    #[test]
    fn future_revisions_are_refused() {
        let mut card = sample_driver_license();
        card.core.revision = CardDesignRevision::Aamva2016;
        assert_eq!(
            validate_driver_license(&card),
            Err(ValidationError::UnsupportedRevision(
                CardDesignRevision::Aamva2016
            ))
        );
    }

    #[test]
    fn names_are_required() {
        let mut card = sample_driver_license();
        card.core.family_name.clear();
        assert_eq!(
            validate_driver_license(&card),
            Err(ValidationError::MissingFamilyName)
        );

        let mut card = sample_driver_license();
        card.core.given_name = "   ".to_owned();
        assert_eq!(
            validate_driver_license(&card),
            Err(ValidationError::MissingGivenName)
        );
    }

    #[test]
    fn family_name_length_is_bounded() {
        let mut card = sample_driver_license();
        card.core.family_name = "A".repeat(35);
        assert_eq!(validate_driver_license(&card), Ok(()));

        card.core.family_name = "A".repeat(36);
        assert_eq!(
            validate_driver_license(&card),
            Err(ValidationError::FamilyNameTooLong)
        );
    }

    #[test]
    fn date_ordering_is_enforced() {
        let mut card = sample_driver_license();
        card.core.expiration_date = card.core.issue_date;
        assert_eq!(
            validate_driver_license(&card),
            Err(ValidationError::ExpirationNotAfterIssue)
        );

        let mut card = sample_driver_license();
        card.core.date_of_birth = Some(date(2020, 1, 1));
        assert_eq!(
            validate_driver_license(&card),
            Err(ValidationError::BirthNotBeforeIssue)
        );

        let mut card = sample_driver_license();
        card.core.issue_date = None;
        assert_eq!(
            validate_driver_license(&card),
            Err(ValidationError::ExpirationNotAfterIssue)
        );
    }

    #[test]
    fn card_number_format_is_enforced() {
        let too_long = "A".repeat(17);
        for bad in ["", "D123", too_long.as_str(), "D123-456"] {
            let mut card = sample_driver_license();
            card.core.assign_card_number(bad);
            assert_eq!(
                validate_driver_license(&card),
                Err(ValidationError::MalformedCardNumber),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn driver_license_height_bounds() {
        let mut card = sample_driver_license();
        card.core.height_inches = 47;
        assert_eq!(
            validate_driver_license(&card),
            Err(ValidationError::HeightOutOfRange(47))
        );

        card.core.height_inches = 48;
        assert_eq!(validate_driver_license(&card), Ok(()));

        card.core.height_inches = 96;
        assert_eq!(validate_driver_license(&card), Ok(()));

        card.core.height_inches = 97;
        assert_eq!(
            validate_driver_license(&card),
            Err(ValidationError::HeightOutOfRange(97))
        );
    }

    #[test]
    fn driver_license_height_is_mandatory() {
        let mut card = sample_driver_license();
        card.core.height_inches = 0;
        assert_eq!(
            validate_driver_license(&card),
            Err(ValidationError::HeightOutOfRange(0))
        );
    }

    #[test]
    fn identification_card_height_is_optional() {
        let mut card = sample_identification_card();
        card.core.height_inches = 0;
        assert_eq!(validate_identification_card(&card), Ok(()));

        card.core.height_inches = 47;
        assert_eq!(
            validate_identification_card(&card),
            Err(ValidationError::HeightOutOfRange(47))
        );
    }

    #[test]
    fn document_discriminator_required_for_2013_driver_licenses() {
        let mut card = sample_driver_license();
        card.core.document_discriminator.clear();
        assert_eq!(
            validate_driver_license(&card),
            Err(ValidationError::MissingDocumentDiscriminator(
                CardDesignRevision::Aamva2013
            ))
        );

        // Earlier revisions do not require it.
        card.core.revision = CardDesignRevision::Aamva2012;
        assert_eq!(validate_driver_license(&card), Ok(()));
    }

    #[test]
    fn document_discriminator_required_for_2010_and_later_identification_cards() {
        let mut card = sample_identification_card();
        card.core.document_discriminator.clear();
        assert_eq!(
            validate_identification_card(&card),
            Err(ValidationError::MissingDocumentDiscriminator(
                CardDesignRevision::Aamva2013
            ))
        );

        card.core.revision = CardDesignRevision::Aamva2009;
        assert_eq!(validate_identification_card(&card), Ok(()));
    }

    #[test]
    fn commercial_age_boundary() {
        let current_year = Utc::now().year();

        // Turning 21 this calendar year qualifies.
        assert_eq!(
            check_commercial_age(Some(date(current_year - 21, 12, 31)), current_year),
            Ok(())
        );
        assert_eq!(
            check_commercial_age(Some(date(current_year - 20, 1, 1)), current_year),
            Err(ValidationError::UnderageCommercialHolder)
        );
    }

    #[test]
    fn underage_commercial_holders_are_refused_end_to_end() {
        let mut cdl = CommercialDriverLicense::new(IssuingCountry::USA, Jurisdiction::CA);
        cdl.core = sample_driver_license().core;
        cdl.license_class = "A".to_owned();
        let young = Utc::now().year() - 20;
        cdl.core.date_of_birth = Some(date(young, 1, 1));
        assert!(cdl.is_commercial);
        assert_eq!(
            validate_commercial_driver_license(&cdl),
            Err(ValidationError::UnderageCommercialHolder)
        );
    }

    #[test]
    fn non_commercial_licenses_skip_the_age_rule() {
        let mut card = sample_driver_license();
        let young = Utc::now().year() - 20;
        card.core.date_of_birth = Some(date(young, 1, 1));
        assert!(!card.is_commercial);
        assert_eq!(validate_driver_license(&card), Ok(()));
    }

    #[test]
    fn california_postal_rules() {
        let mut card = sample_driver_license();
        card.core.postal_code = "10001".to_owned();
        assert_eq!(
            validate_driver_license(&card),
            Err(ValidationError::JurisdictionRule {
                jurisdiction: Jurisdiction::CA,
                rule: "postal code must start with 9",
            })
        );

        card.core.postal_code = "9021".to_owned();
        assert_eq!(
            validate_driver_license(&card),
            Err(ValidationError::JurisdictionRule {
                jurisdiction: Jurisdiction::CA,
                rule: "postal code must be 5 or 9 digits, or a hyphenated ZIP+4",
            })
        );

        card.core.postal_code = "90210-1234".to_owned();
        assert_eq!(validate_driver_license(&card), Ok(()));
    }

    #[test]
    fn other_jurisdictions_skip_the_california_rules() {
        let mut card = sample_driver_license();
        card.core.jurisdiction = Jurisdiction::NY;
        card.core.postal_code = "10001".to_owned();
        assert_eq!(validate_driver_license(&card), Ok(()));
    }

    #[test]
    fn pipeline_fails_fast_in_layer_order() {
        // Several violations at once: the revision layer wins.
        let mut card = sample_driver_license();
        card.core.revision = CardDesignRevision::Aamva2020;
        card.core.family_name.clear();
        card.core.height_inches = 10;
        assert_eq!(
            validate_driver_license(&card),
            Err(ValidationError::UnsupportedRevision(
                CardDesignRevision::Aamva2020
            ))
        );

        // With the revision fixed, the universal layer reports next.
        card.core.revision = CardDesignRevision::Aamva2013;
        assert_eq!(
            validate_driver_license(&card),
            Err(ValidationError::MissingFamilyName)
        );
    }
}
