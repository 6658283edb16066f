//! Payload encoding.
//!
//! Turns a validated card into the AAMVA subfile text block carried by a
//! PDF417 barcode: the revision's header bytes, the subfile designator,
//! the version-number field, then every data element in specification
//! order, each emitted as tag + value + segment terminator.
//!
//! Encoding assumes the caller ran [`crate::validation`] first; it does
//! not re-validate and has no error path. The emission order is fixed in
//! code (no map iteration anywhere), so the same card encodes to
//! byte-identical output every time.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::card::{CardCore, DriverLicenseCard, IdentificationCard};
use crate::registry::DataElement;

/// Terminates every data-element segment (ASCII record separator).
pub const SEGMENT_TERMINATOR: char = '\u{1e}';

/// Follows the subfile designator (ASCII group separator).
pub const DATA_ELEMENT_SEPARATOR: char = '\u{1d}';

/// AAMVA date rendering, `YYYYMMDD`.
const DATE_FORMAT: &str = "%Y%m%d";

/// The encoded AAMVA subfile text, ready for a PDF417 imaging library.
///
/// Opaque on purpose: the internal structure (header, designator, version
/// token, ordered segments) is fixed by the standard, and consumers
/// should treat the value as an indivisible string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedPayload(String);

impl EncodedPayload {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for EncodedPayload {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EncodedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Encode a validated driver license. A [`CommercialDriverLicense`]
/// encodes through its `Deref` as a driver license.
///
/// [`CommercialDriverLicense`]: crate::card::CommercialDriverLicense
pub fn encode_driver_license(card: &DriverLicenseCard) -> EncodedPayload {
    let core = &card.core;
    let mut out = String::new();

    push_preamble(&mut out, core, "DL");
    push_core_segments(&mut out, core);

    push_segment(&mut out, DataElement::LicenseClass, &card.license_class);
    push_segment(&mut out, DataElement::Restrictions, &card.restrictions);
    push_segment(&mut out, DataElement::Endorsements, &card.endorsements);

    push_segment(
        &mut out,
        DataElement::DocumentDiscriminator,
        &core.document_discriminator,
    );

    EncodedPayload(out)
}

/// Encode a validated identification card.
pub fn encode_identification_card(card: &IdentificationCard) -> EncodedPayload {
    let core = &card.core;
    let mut out = String::new();

    push_preamble(&mut out, core, "ID");
    push_core_segments(&mut out, core);

    push_segment(
        &mut out,
        DataElement::DocumentDiscriminator,
        &core.document_discriminator,
    );

    EncodedPayload(out)
}

fn push_preamble(out: &mut String, core: &CardCore, subfile_designator: &str) {
    out.push_str(core.revision.pdf417_header());
    out.push_str(subfile_designator);
    out.push(DATA_ELEMENT_SEPARATOR);
    push_segment(
        out,
        DataElement::AamvaVersionNumber,
        core.revision.version_token(),
    );
}

fn push_core_segments(out: &mut String, core: &CardCore) {
    push_segment(out, DataElement::LicenseNumber, core.card_number());
    push_segment(out, DataElement::FamilyName, &core.family_name);
    push_segment(out, DataElement::GivenName, &core.given_name);

    if !core.middle_names.trim().is_empty() {
        push_segment(out, DataElement::MiddleNames, &core.middle_names);
    }

    if !core.name_suffix.trim().is_empty() {
        push_segment(out, DataElement::NameSuffix, &core.name_suffix);
    }

    push_segment(out, DataElement::StreetAddress1, &core.street_address);

    if !core.street_address_2.trim().is_empty() {
        push_segment(out, DataElement::StreetAddress2, &core.street_address_2);
    }

    push_segment(out, DataElement::City, &core.city);
    push_segment(out, DataElement::JurisdictionCode, core.jurisdiction.code());
    push_segment(out, DataElement::PostalCode, &core.postal_code);
    push_segment(out, DataElement::Country, core.country.code());

    push_date_segment(out, DataElement::DateOfBirth, core.date_of_birth);
    push_date_segment(out, DataElement::IssueDate, core.issue_date);
    push_date_segment(out, DataElement::ExpirationDate, core.expiration_date);

    push_segment(out, DataElement::Sex, &core.sex.code().to_string());
    push_segment(out, DataElement::EyeColor, core.eye_color.code());
    push_segment(out, DataElement::HairColor, core.hair_color.code());
    push_segment(out, DataElement::Height, &core.height_inches.to_string());
}

fn push_segment(out: &mut String, element: DataElement, value: &str) {
    out.push_str(element.code());
    out.push_str(value);
    out.push(SEGMENT_TERMINATOR);
}

fn push_date_segment(out: &mut String, element: DataElement, date: Option<NaiveDate>) {
    let value = date
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default();
    push_segment(out, element, &value);
}
