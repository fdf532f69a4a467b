// ISPB value object
//
// From the central bank documentation (ASTR003): the ISPB is the identifier
// assigned to every STR participant within the Brazilian payment system.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::Error;

/// The participant identifier (ISPB) of a financial institution.
///
/// Only non-emptiness is enforced. The listing nominally uses eight decimal
/// digits, but that pattern is not checked — see `from_string`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ispb {
    code: String,
}

impl Ispb {
    /// Validates and wraps a raw ISPB string.
    ///
    /// Fails with [`Error::EmptyIspb`] on the empty string. The eight digit
    /// pattern check stays disabled: published STR listings have carried non
    /// conforming entries, and enabling it would reject data that the
    /// central bank itself distributes. [`Error::MalformedIspb`] is reserved
    /// for the day the check is turned on.
    pub fn from_string(code: impl Into<String>) -> Result<Self, Error> {
        let code = code.into();

        if code.is_empty() {
            return Err(Error::EmptyIspb);
        }

        // if code.len() != 8 || !code.bytes().all(|b| b.is_ascii_digit()) {
        //     return Err(Error::MalformedIspb { code });
        // }

        Ok(Ispb { code })
    }

    /// The canonical textual form (the raw string).
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Strict same-type equality on the raw string.
    pub fn is_equal_to(&self, other: &Ispb) -> bool {
        self.code == other.code
    }
}

impl fmt::Display for Ispb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for Ispb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ispb::from_string(s)
    }
}

/// Structured form: a single-field record under the `codigo` key.
impl Serialize for Ispb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Ispb", 1)?;
        state.serialize_field("codigo", &self.code)?;
        state.end()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_empty_strings_are_accepted() {
        let ispb = Ispb::from_string("00000000").unwrap();
        assert_eq!(ispb.as_str(), "00000000");
        assert_eq!(ispb.to_string(), "00000000");
    }

    #[test]
    fn test_empty_string_is_rejected() {
        assert_eq!(Ispb::from_string(""), Err(Error::EmptyIspb));
    }

    #[test]
    fn test_eight_digit_pattern_is_not_enforced() {
        // Current shipped behavior: anything non-empty passes.
        for raw in ["1", "abc", "123456789", "n/a"] {
            assert!(Ispb::from_string(raw).is_ok(), "rejected {raw:?}");
        }
    }

    #[test]
    fn test_equality_is_structural_on_the_raw_string() {
        let a = Ispb::from_string("60746948").unwrap();
        let b = Ispb::from_string("60746948").unwrap();
        let c = Ispb::from_string("60701190").unwrap();

        assert!(a.is_equal_to(&b));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_serializes_under_the_codigo_key() {
        let ispb = Ispb::from_string("90400888").unwrap();
        assert_eq!(
            serde_json::to_value(&ispb).unwrap(),
            json!({"codigo": "90400888"})
        );
    }
}
