// Bancos Brasil - Brazilian financial institution codes as value objects
//
// Validates the identifier strings used in the Brazilian payment system
// (the legacy three digit Número-Código/Compe and the ISPB) and resolves
// them to institution records through a pluggable resolver.
//
// Two record shapes exist, each with its own resolver seam and process-wide
// default:
// - Bank: just code + name, resolved by a `BankResolver`
// - FinancialInstitution: the full STR participant row, resolved by an
//   `InstitutionResolver`
//
// Typical use:
//
// ```
// use bancos_brasil::Bank;
//
// let bb = Bank::from_string("001").unwrap();
// assert_eq!(bb.name(), "Banco do Brasil S.A.");
//
// assert_eq!(Bank::try_from_string("000").unwrap(), None);
// ```
//
// The built-in tables are small placeholder datasets; install your own
// resolver (database-backed, generated from the STR participant CSV, ...)
// with `set_resolver` before concurrent lookups begin.

pub mod bank;
pub mod codes;
pub mod error;
pub mod institution;

// Re-export commonly used types
pub use bank::{Bank, BankResolver, BankTable};
pub use codes::{Compe, CompeCode, Ispb};
pub use error::Error;
pub use institution::{
    FinancialInstitution, InstitutionEntry, InstitutionResolver, InstitutionTable,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
