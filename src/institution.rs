// FinancialInstitution - full STR participant record with pluggable resolution
//
// Mirrors one row of the central bank's STR participant listing: the
// Número-Código slot (which may be "n/a"), the ISPB, both names, the Compe
// participation flag, the access level and the operation start date. As with
// `Bank`, only a resolver is trusted to pair a code with the rest of the
// row, so application code enters through `from_string`.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use chrono::NaiveDate;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::codes::{Compe, Ispb};
use crate::error::Error;

// ============================================================================
// INSTITUTION RECORD
// ============================================================================

/// A Brazilian financial institution as listed among the STR participants.
///
/// Immutable; equality is on the Número-Código slot only. Externally the
/// record serializes just its `code`/`name` projection — the remaining
/// fields are in-memory data for callers that hold the record.
#[derive(Debug, Clone)]
pub struct FinancialInstitution {
    compe: Compe,
    ispb: Ispb,
    name: String,
    short_name: String,
    compe_participant: bool,
    access: String,
    started_on: NaiveDate,
}

impl FinancialInstitution {
    /// Trusted constructor for resolver implementations.
    ///
    /// Does NOT verify that the code belongs to the given institution data —
    /// the resolver that calls this is the trust boundary for that pairing.
    pub fn from_factory(
        compe: Compe,
        ispb: Ispb,
        name: impl Into<String>,
        short_name: impl Into<String>,
        compe_participant: bool,
        access: impl Into<String>,
        started_on: NaiveDate,
    ) -> Self {
        FinancialInstitution {
            compe,
            ispb,
            name: name.into(),
            short_name: short_name.into(),
            compe_participant,
            access: access.into(),
            started_on,
        }
    }

    /// The Número-Código slot (a three digit code, or "n/a").
    pub fn compe(&self) -> &Compe {
        &self.compe
    }

    /// The participant identifier (ISPB).
    pub fn ispb(&self) -> &Ispb {
        &self.ispb
    }

    /// Full display name ("Nome Extenso").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short display name ("Nome Reduzido").
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Whether the institution participates in the cheque clearing system
    /// (Compe).
    pub fn compe_participant(&self) -> bool {
        self.compe_participant
    }

    /// Main access level to the STR ("Acesso Principal").
    pub fn access(&self) -> &str {
        &self.access
    }

    /// Date the institution started operating in the STR.
    pub fn started_on(&self) -> NaiveDate {
        self.started_on
    }

    /// Strict same-type equality on the Número-Código slot.
    pub fn is_equal_to(&self, other: &FinancialInstitution) -> bool {
        self.compe == other.compe
    }
}

/// Equality is on the code slot only; names and the other attributes are
/// descriptive data.
impl PartialEq for FinancialInstitution {
    fn eq(&self, other: &Self) -> bool {
        self.compe == other.compe
    }
}

impl Eq for FinancialInstitution {}

impl fmt::Display for FinancialInstitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.compe.as_str())
    }
}

/// External shape: the `code`/`name` projection only.
impl Serialize for FinancialInstitution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FinancialInstitution", 2)?;
        state.serialize_field("code", self.compe.as_str())?;
        state.serialize_field("name", &self.name)?;
        state.end()
    }
}

// ============================================================================
// TABLE ROW
// ============================================================================

/// The attributes one resolver table row carries for an institution, keyed
/// externally by its Número-Código.
///
/// Serde-enabled so a table generated offline from the STR participant CSV
/// can be loaded and fed into [`InstitutionTable::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionEntry {
    pub ispb: String,
    pub name: String,
    pub short_name: String,
    pub compe_participant: bool,
    pub access: String,
    pub started_on: NaiveDate,
}

// ============================================================================
// RESOLVER
// ============================================================================

/// Strategy that maps a raw Número-Código to a [`FinancialInstitution`]
/// record.
///
/// The built-in strategy is [`InstitutionTable`]. Implement this trait to
/// resolve against your own data source and install it with
/// [`FinancialInstitution::set_resolver`].
pub trait InstitutionResolver: Send + Sync {
    /// Resolves a raw code to a full record.
    ///
    /// Fails with [`Error::EmptyCode`] before any lookup when `code` is the
    /// empty string, and with [`Error::NotFound`] (carrying the offending
    /// code) when the table has no entry for it.
    fn resolve(&self, code: &str) -> Result<FinancialInstitution, Error>;
}

/// The default resolver: an immutable in-memory mapping from Número-Código
/// to institution attributes.
pub struct InstitutionTable {
    entries_by_code: HashMap<String, InstitutionEntry>,
}

impl InstitutionTable {
    /// Builds a table from `(code, entry)` pairs.
    pub fn new<I, K>(entries_by_code: I) -> Self
    where
        I: IntoIterator<Item = (K, InstitutionEntry)>,
        K: Into<String>,
    {
        InstitutionTable {
            entries_by_code: entries_by_code
                .into_iter()
                .map(|(code, entry)| (code.into(), entry))
                .collect(),
        }
    }

    /// The built-in table of well-known institutions.
    ///
    /// A non-exhaustive placeholder dataset with the five seed banks; the
    /// exhaustive listing is produced offline by an external generator and
    /// fed in through [`InstitutionTable::new`]. All five joined the STR at
    /// its 2002-04-22 go-live with direct access.
    pub fn with_default_configuration() -> Self {
        let str_go_live = ymd(2002, 4, 22);
        let entry = |ispb: &str, name: &str, short_name: &str| InstitutionEntry {
            ispb: ispb.to_string(),
            name: name.to_string(),
            short_name: short_name.to_string(),
            compe_participant: true,
            access: "Direto".to_string(),
            started_on: str_go_live,
        };

        InstitutionTable::new([
            ("001", entry("00000000", "Banco do Brasil S.A.", "BCO DO BRASIL S.A.")),
            ("033", entry("90400888", "Banco Santander S.A", "BCO SANTANDER (BRASIL) S.A.")),
            ("104", entry("00360305", "Caixa Econômica Federal", "CAIXA ECONOMICA FEDERAL")),
            ("341", entry("60701190", "Banco Itaú S.A.", "ITAU UNIBANCO S.A.")),
            ("237", entry("60746948", "Bradesco S.A.", "BCO BRADESCO S.A.")),
        ])
    }
}

impl InstitutionResolver for InstitutionTable {
    fn resolve(&self, code: &str) -> Result<FinancialInstitution, Error> {
        if code.is_empty() {
            return Err(Error::EmptyCode);
        }

        let entry = self
            .entries_by_code
            .get(code)
            .ok_or_else(|| Error::NotFound { code: code.to_string() })?;

        Ok(FinancialInstitution::from_factory(
            Compe::from_string(code)?,
            Ispb::from_string(&entry.ispb)?,
            &entry.name,
            &entry.short_name,
            entry.compe_participant,
            &entry.access,
            entry.started_on,
        ))
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

// ============================================================================
// GLOBAL REGISTRY + LOOKUP ENTRY POINTS
// ============================================================================

/// Process-wide active resolver slot, independent from the `Bank` one.
///
/// None means "uninitialized": the next read lazily installs the default
/// table. Access is lock-guarded; the intended discipline is to set a custom
/// resolver once at startup and reset only between test sequences.
static ACTIVE_RESOLVER: RwLock<Option<Arc<dyn InstitutionResolver>>> = RwLock::new(None);

impl FinancialInstitution {
    /// Resolves `code` with the active resolver.
    ///
    /// Every resolver failure surfaces unchanged — no translation, no
    /// catching.
    pub fn from_string(code: &str) -> Result<FinancialInstitution, Error> {
        FinancialInstitution::get_resolver().resolve(code)
    }

    /// Like [`FinancialInstitution::from_string`], but returns `Ok(None)`
    /// when the code has no entry in the table.
    ///
    /// Unlike [`Bank::try_from_string`](crate::Bank::try_from_string), a
    /// malformed code still errors here: only "not found" is downgraded.
    /// Failure kinds this facade does not recognize propagate untouched.
    pub fn try_from_string(code: &str) -> Result<Option<FinancialInstitution>, Error> {
        match FinancialInstitution::from_string(code) {
            Ok(institution) => Ok(Some(institution)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Replaces the active resolver unconditionally.
    pub fn set_resolver(resolver: Arc<dyn InstitutionResolver>) {
        *ACTIVE_RESOLVER.write().unwrap() = Some(resolver);
    }

    /// Returns the active resolver, lazily installing the default table on
    /// first access (idempotent until the next set/reset).
    pub fn get_resolver() -> Arc<dyn InstitutionResolver> {
        if let Some(resolver) = ACTIVE_RESOLVER.read().unwrap().as_ref() {
            return Arc::clone(resolver);
        }

        let mut slot = ACTIVE_RESOLVER.write().unwrap();
        // Another thread may have won the race between the two locks.
        let resolver = slot.get_or_insert_with(|| {
            Arc::new(InstitutionTable::with_default_configuration()) as Arc<dyn InstitutionResolver>
        });
        Arc::clone(resolver)
    }

    /// Clears the slot back to "uninitialized", so the next lookup recreates
    /// the default table. Meant for isolation between test sequences.
    pub fn reset_resolver() {
        *ACTIVE_RESOLVER.write().unwrap() = None;
    }
}

// ============================================================================
// TESTS
// ============================================================================
