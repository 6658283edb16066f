//! Encoding and validation of AAMVA DL/ID card data for PDF417 barcodes,
//! following the [AAMVA DL/ID card design standard][aamva].
//!
//! [aamva]: <https://www.aamva.org/assets/best-practices,-guides,-standards,-manuals,-whitepapers/aamva-dl-id-card-design-standard-(2020)>
//!
//! The crate is a pure library: it owns no I/O, storage, or barcode
//! rasterization. An issuance workflow populates a card record, brands it
//! with a generated number, validates it, and hands the encoded payload
//! to a PDF417 imaging library:
//!
//! ```
//! use aamva_dlid::{
//!     encode_driver_license, validate_driver_license, CardNumberGenerator, DriverLicenseCard,
//!     IssuingCountry, Jurisdiction, NaiveDate,
//! };
//!
//! let mut card = DriverLicenseCard::new(IssuingCountry::USA, Jurisdiction::CA);
//! card.core.family_name = "DOE".to_owned();
//! card.core.given_name = "JOHN".to_owned();
//! card.core.street_address = "123 MAIN ST".to_owned();
//! card.core.city = "LOS ANGELES".to_owned();
//! card.core.postal_code = "90210".to_owned();
//! card.core.date_of_birth = NaiveDate::from_ymd_opt(1990, 1, 1);
//! card.core.issue_date = NaiveDate::from_ymd_opt(2020, 1, 1);
//! card.core.expiration_date = NaiveDate::from_ymd_opt(2025, 1, 1);
//! card.core.height_inches = 70;
//! card.core.document_discriminator = "1234567890".to_owned();
//! card.license_class = "C".to_owned();
//!
//! let mut generator = CardNumberGenerator::new();
//! let number = generator.generate(IssuingCountry::USA, Jurisdiction::CA, card.is_commercial);
//! card.core.assign_card_number(number);
//!
//! validate_driver_license(&card)?;
//! let payload = encode_driver_license(&card);
//! assert!(payload.as_str().starts_with("@\n\x1e\nANSI "));
//! # Ok::<(), aamva_dlid::ValidationError>(())
//! ```

pub use chrono::NaiveDate;

pub(crate) mod macros;

pub mod card;
pub mod encode;
pub mod number;
pub mod registry;
pub mod revision;
pub mod validation;

pub use card::{
    CardCore, CommercialDriverLicense, DriverLicenseCard, EyeColor, HairColor, IdentificationCard,
    IssuingCountry, Jurisdiction, Sex,
};
pub use encode::{encode_driver_license, encode_identification_card, EncodedPayload};
pub use number::{check_digit, CardNumberGenerator};
pub use registry::DataElement;
pub use revision::CardDesignRevision;
pub use validation::{
    validate_commercial_driver_license, validate_driver_license, validate_identification_card,
    ValidationError,
};
