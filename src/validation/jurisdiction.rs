//! Per-jurisdiction rule sets.
//!
//! Rules are keyed by [`Jurisdiction`] in an immutable table built at
//! first use; adding a jurisdiction means adding a table entry, never a
//! new branch in the universal rule layers. Jurisdictions without an
//! entry have no extra requirements.

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::ValidationError;
use crate::card::{CardCore, Jurisdiction};

/// One jurisdiction-specific requirement: a named predicate over the
/// card core.
#[derive(Debug, Clone, Copy)]
pub struct JurisdictionRule {
    message: &'static str,
    check: fn(&CardCore) -> bool,
}

impl JurisdictionRule {
    /// Human-readable statement of the requirement, carried in the
    /// validation error when the rule fails.
    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn is_satisfied_by(&self, core: &CardCore) -> bool {
        (self.check)(core)
    }
}

static CA_RULES: [JurisdictionRule; 2] = [
    JurisdictionRule {
        message: "postal code must start with 9",
        check: |core| core.postal_code.starts_with('9'),
    },
    JurisdictionRule {
        message: "postal code must be 5 or 9 digits, or a hyphenated ZIP+4",
        check: |core| {
            let postal = &core.postal_code;
            postal.len() == 5 || postal.len() == 9 || postal.contains('-')
        },
    },
];

lazy_static! {
    static ref JURISDICTION_RULES: HashMap<Jurisdiction, &'static [JurisdictionRule]> = {
        let mut map: HashMap<Jurisdiction, &'static [JurisdictionRule]> = HashMap::new();
        map.insert(Jurisdiction::CA, &CA_RULES);
        map
    };
}

/// The registered rule set for a jurisdiction, empty when none is
/// registered.
pub fn rules_for(jurisdiction: Jurisdiction) -> &'static [JurisdictionRule] {
    JURISDICTION_RULES
        .get(&jurisdiction)
        .copied()
        .unwrap_or(&[])
}

pub(super) fn check(core: &CardCore) -> Result<(), ValidationError> {
    for rule in rules_for(core.jurisdiction) {
        if !rule.is_satisfied_by(core) {
            return Err(ValidationError::JurisdictionRule {
                jurisdiction: core.jurisdiction,
                rule: rule.message,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::rules_for;
    use crate::card::Jurisdiction;

    #[test]
    fn california_has_registered_rules() {
        assert_eq!(rules_for(Jurisdiction::CA).len(), 2);
    }

    #[test]
    fn unregistered_jurisdictions_have_no_rules() {
        assert!(rules_for(Jurisdiction::WY).is_empty());
    }
}
