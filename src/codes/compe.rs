// Número-Código (Compe) value objects
//
// From the central bank documentation (ASTR003): the Número-Código is the
// identifier assigned by the Banco Central do Brasil to STR participants; it
// replaced the old COMPE code. Participants to which no Número-Código is
// assigned appear in the listing with the annotation "n/a".

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::Error;

/// Textual form used by the central bank listing for participants without a
/// Número-Código.
const NOT_APPLICABLE: &str = "n/a";

// ============================================================================
// COMPE CODE
// ============================================================================

/// A validated Número-Código: exactly three decimal digits, zero-padded
/// (`"001"`, `"237"`, ...).
///
/// Construction via [`CompeCode::from_string`] is the only entry point; a
/// value that exists is always well formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompeCode {
    code: String,
}

impl CompeCode {
    /// Validates and wraps a raw Número-Código string.
    ///
    /// Fails with [`Error::EmptyCode`] on the empty string and
    /// [`Error::MalformedCompe`] unless the input is exactly three ASCII
    /// decimal digits.
    pub fn from_string(code: impl Into<String>) -> Result<Self, Error> {
        let code = code.into();

        if code.is_empty() {
            return Err(Error::EmptyCode);
        }

        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::MalformedCompe { code });
        }

        Ok(CompeCode { code })
    }

    /// The canonical textual form (the raw three digit string).
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Strict same-type equality on the raw string.
    pub fn is_equal_to(&self, other: &CompeCode) -> bool {
        self.code == other.code
    }
}

impl fmt::Display for CompeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for CompeCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompeCode::from_string(s)
    }
}

/// Structured form: a single-field record under the `codigo` key, matching
/// the serialized shape of the STR participant listing.
impl Serialize for CompeCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CompeCode", 1)?;
        state.serialize_field("codigo", &self.code)?;
        state.end()
    }
}

// ============================================================================
// COMPE SLOT (CODE OR "N/A")
// ============================================================================

/// The legacy-code slot of an institution record: either a validated
/// [`CompeCode`] or the explicit "no Número-Código applies" marker.
///
/// The marker is a value of its own, not a null: it always serializes to the
/// literal `"n/a"`, compares equal to any other marker and never to a real
/// code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Compe {
    /// A validated three digit code.
    Code(CompeCode),
    /// The "n/a" annotation used for STR participants without a
    /// Número-Código (IMFs and the national treasury).
    NotApplicable,
}

impl Compe {
    /// Validates a raw string into an assigned code slot.
    pub fn from_string(code: impl Into<String>) -> Result<Self, Error> {
        CompeCode::from_string(code).map(Compe::Code)
    }

    /// The absent-code marker.
    pub fn not_applicable() -> Self {
        Compe::NotApplicable
    }

    /// The textual form: the three digit code, or `"n/a"`.
    pub fn as_str(&self) -> &str {
        match self {
            Compe::Code(code) => code.as_str(),
            Compe::NotApplicable => NOT_APPLICABLE,
        }
    }

    /// True when a real Número-Código is assigned.
    pub fn is_assigned(&self) -> bool {
        matches!(self, Compe::Code(_))
    }

    /// Strict same-type equality on the textual form.
    pub fn is_equal_to(&self, other: &Compe) -> bool {
        self == other
    }
}

impl fmt::Display for Compe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CompeCode> for Compe {
    fn from(code: CompeCode) -> Self {
        Compe::Code(code)
    }
}

/// Loose cross-type equality: a slot equals a bare code only when it holds
/// that code. The "n/a" marker never equals a real code.
impl PartialEq<CompeCode> for Compe {
    fn eq(&self, other: &CompeCode) -> bool {
        matches!(self, Compe::Code(code) if code == other)
    }
}

impl PartialEq<Compe> for CompeCode {
    fn eq(&self, other: &Compe) -> bool {
        other == self
    }
}

/// Same single-field shape as a real code; the marker serializes the literal
/// `"n/a"` token.
impl Serialize for Compe {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Compe", 1)?;
        state.serialize_field("codigo", self.as_str())?;
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
    fn test_three_digit_codes_are_accepted() {
        for raw in ["001", "033", "104", "237", "341", "000", "999"] {
            let code = CompeCode::from_string(raw).unwrap();
            assert_eq!(code.as_str(), raw);
            assert_eq!(code.to_string(), raw);
        }
    }

    #[test]
    fn test_empty_string_is_rejected() {
        assert_eq!(CompeCode::from_string(""), Err(Error::EmptyCode));
    }

    #[test]
    fn test_malformed_codes_are_rejected_with_the_offending_input() {
        for raw in ["1", "12", "1234", "12a", "a12", "23.", " 01"] {
            let err = CompeCode::from_string(raw).unwrap_err();
            assert_eq!(err, Error::MalformedCompe { code: raw.to_string() });
            assert_eq!(err.offending_code(), Some(raw));
        }
    }

    #[test]
    fn test_equality_is_structural_on_the_raw_string() {
        let a = CompeCode::from_string("237").unwrap();
        let b = CompeCode::from_string("237").unwrap();
        let c = CompeCode::from_string("341").unwrap();

        assert!(a.is_equal_to(&b));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_from_str_round_trip() {
        let code: CompeCode = "104".parse().unwrap();
        assert_eq!(code.as_str(), "104");

        let err = "10".parse::<CompeCode>().unwrap_err();
        assert!(err.is_invalid_format());
    }

    #[test]
    fn test_serializes_under_the_codigo_key() {
        let code = CompeCode::from_string("001").unwrap();
        assert_eq!(serde_json::to_value(&code).unwrap(), json!({"codigo": "001"}));
    }

    #[test]
    fn test_not_applicable_marker() {
        let absent = Compe::not_applicable();

        assert_eq!(absent.as_str(), "n/a");
        assert_eq!(absent.to_string(), "n/a");
        assert!(!absent.is_assigned());
        assert!(absent.is_equal_to(&Compe::NotApplicable));
        assert_eq!(
            serde_json::to_value(&absent).unwrap(),
            json!({"codigo": "n/a"})
        );
    }

    #[test]
    fn test_marker_never_equals_a_real_code() {
        let code = CompeCode::from_string("001").unwrap();
        let assigned = Compe::Code(code.clone());

        assert_eq!(assigned, code);
        assert_eq!(code, assigned);
        assert_ne!(Compe::NotApplicable, code);
        assert_ne!(assigned, Compe::NotApplicable);
    }
}
