// Bank - simple code+name record with pluggable resolution
//
// The record pairs a bank code with its display name. Pairing a code with
// the right name is the resolver's job (code "237" belongs to Bradesco, not
// to Banco do Brasil), so application code never builds a Bank by hand: it
// goes through `Bank::from_string` and the active resolver.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use serde::Serialize;

use crate::error::Error;

// ============================================================================
// BANK RECORD
// ============================================================================

/// A Brazilian bank as seen by its code.
///
/// Immutable; equality is on the code only — two records with the same code
/// and different names describe the same bank, one of them with stale data.
#[derive(Debug, Clone, Serialize)]
pub struct Bank {
    /// The bank code used as lookup key (non-empty).
    code: String,

    /// Display name paired with the code by the resolver.
    name: String,
}

impl Bank {
    /// The bank code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trusted constructor for resolver implementations.
    ///
    /// Does NOT verify that `code` belongs to `name` — the resolver that
    /// calls this is the trust boundary for that pairing. Callers must pass
    /// a non-empty code.
    pub fn from_factory(code: impl Into<String>, name: impl Into<String>) -> Self {
        let code = code.into();
        debug_assert!(!code.is_empty(), "resolvers must not build a Bank with an empty code");

        Bank {
            code,
            name: name.into(),
        }
    }

    /// Strict same-type equality on the code.
    pub fn is_equal_to(&self, other: &Bank) -> bool {
        self.code == other.code
    }
}

/// Equality ignores the name: the code alone identifies the bank.
impl PartialEq for Bank {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Bank {}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

// ============================================================================
// RESOLVER
// ============================================================================

/// Strategy that maps a raw bank code to a [`Bank`] record.
///
/// The built-in strategy is [`BankTable`], backed by a static in-memory
/// mapping. Implement this trait to resolve against your own data source (a
/// database, a micro-service) and install it with [`Bank::set_resolver`].
pub trait BankResolver: Send + Sync {
    /// Resolves a raw code to a full record.
    ///
    /// Fails with [`Error::EmptyCode`] before any lookup when `code` is the
    /// empty string, and with [`Error::NotFound`] (carrying the offending
    /// code) when the table has no entry for it.
    fn resolve(&self, code: &str) -> Result<Bank, Error>;
}

/// The default resolver: an immutable in-memory mapping from bank code to
/// display name.
pub struct BankTable {
    banks_by_code: HashMap<String, String>,
}

impl BankTable {
    /// Builds a table from `(code, name)` pairs.
    pub fn new<I, K, V>(banks_by_code: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        BankTable {
            banks_by_code: banks_by_code
                .into_iter()
                .map(|(code, name)| (code.into(), name.into()))
                .collect(),
        }
    }

    /// The built-in table of well-known institutions.
    ///
    /// A non-exhaustive placeholder dataset: the full STR participant
    /// listing is produced offline by an external generator and fed in
    /// through [`BankTable::new`].
    pub fn with_default_configuration() -> Self {
        BankTable::new([
            ("001", "Banco do Brasil S.A."),
            ("033", "Banco Santander S.A"),
            ("104", "Caixa Econômica Federal"),
            ("341", "Banco Itaú S.A."),
            ("237", "Bradesco S.A."),
        ])
    }
}

impl BankResolver for BankTable {
    fn resolve(&self, code: &str) -> Result<Bank, Error> {
        if code.is_empty() {
            return Err(Error::EmptyCode);
        }

        let name = self
            .banks_by_code
            .get(code)
            .ok_or_else(|| Error::NotFound { code: code.to_string() })?;

        Ok(Bank::from_factory(code, name))
    }
}

// ============================================================================
// GLOBAL REGISTRY + LOOKUP ENTRY POINTS
// ============================================================================

/// Process-wide active resolver slot.
///
/// None means "uninitialized": the next read lazily installs the default
/// table. Access is lock-guarded, but the intended discipline is still to
/// set a custom resolver once at startup, before concurrent lookups begin,
/// and to reset only between independent test sequences.
static ACTIVE_RESOLVER: RwLock<Option<Arc<dyn BankResolver>>> = RwLock::new(None);

impl Bank {
    /// Resolves `code` with the active resolver.
    ///
    /// Every resolver failure surfaces unchanged — no translation, no
    /// catching.
    pub fn from_string(code: &str) -> Result<Bank, Error> {
        Bank::get_resolver().resolve(code)
    }

    /// Like [`Bank::from_string`], but returns `Ok(None)` when the code is
    /// malformed or has no entry — an empty or unknown code is simply
    /// "nothing to find".
    ///
    /// Any other failure kind (a custom resolver's own error, say) is not
    /// recognized here and propagates untouched.
    pub fn try_from_string(code: &str) -> Result<Option<Bank>, Error> {
        match Bank::from_string(code) {
            Ok(bank) => Ok(Some(bank)),
            Err(err) if err.is_invalid_format() || err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Replaces the active resolver unconditionally.
    pub fn set_resolver(resolver: Arc<dyn BankResolver>) {
        *ACTIVE_RESOLVER.write().unwrap() = Some(resolver);
    }

    /// Returns the active resolver, lazily installing the default table on
    /// first access (idempotent until the next set/reset).
    pub fn get_resolver() -> Arc<dyn BankResolver> {
        if let Some(resolver) = ACTIVE_RESOLVER.read().unwrap().as_ref() {
            return Arc::clone(resolver);
        }

        let mut slot = ACTIVE_RESOLVER.write().unwrap();
        // Another thread may have won the race between the two locks.
        let resolver = slot.get_or_insert_with(|| {
            Arc::new(BankTable::with_default_configuration()) as Arc<dyn BankResolver>
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
