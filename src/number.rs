//! License/ID number generation.
//!
//! Numbers are jurisdiction-branded: a two-letter jurisdiction prefix, a
//! one-character document type indicator (`C` commercial, `D` otherwise),
//! the four-digit issuance year, six random digits, and a trailing check
//! digit. The random digits come from a cryptographically secure source
//! by default; reducing each byte modulo 10 skews the per-digit
//! distribution slightly, which is an accepted trade-off for an
//! identifier that is not a cryptographic primitive.
//!
//! Uniqueness is out of scope here. The issuing datastore is expected to
//! check each generated number against previously issued ones and request
//! another on collision before final issuance.

use chrono::{Datelike, Utc};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::card::{IssuingCountry, Jurisdiction};

/// Length of the random numeric portion.
const RANDOM_DIGITS: usize = 6;

/// Mod-10 check digit over the ASCII code points of `value`.
///
/// This is the scheme jurisdictions inherit from the card-number format,
/// not a checksum documented by AAMVA; collaborators re-verifying issued
/// numbers should treat it accordingly.
pub fn check_digit(value: &str) -> u8 {
    (value.chars().map(|c| c as u32).sum::<u32>() % 10) as u8
}

/// Generates card numbers from a caller-chosen random source.
///
/// [`CardNumberGenerator::new`] draws from the operating system CSPRNG,
/// which is safe for concurrent use across threads. Injecting a seeded
/// source makes the output referentially transparent for a given seed and
/// issuance year.
#[derive(Debug, Clone)]
pub struct CardNumberGenerator<R = OsRng> {
    rng: R,
}

impl CardNumberGenerator<OsRng> {
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for CardNumberGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> CardNumberGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a license/ID number for the current UTC year.
    ///
    /// The issuing country is accepted for contract parity with the
    /// issuance workflow but does not contribute to the number; the
    /// prefix is jurisdictional.
    pub fn generate(
        &mut self,
        _country: IssuingCountry,
        jurisdiction: Jurisdiction,
        commercial: bool,
    ) -> String {
        let indicator = if commercial { 'C' } else { 'D' };
        let year = Utc::now().year();

        let mut number = format!("{}{}{}", jurisdiction.code(), indicator, year);

        let mut bytes = [0u8; RANDOM_DIGITS];
        self.rng.fill_bytes(&mut bytes);
        for byte in bytes {
            number.push(char::from(b'0' + byte % 10));
        }

        number.push(char::from(b'0' + check_digit(&number)));
        number
    }
}
