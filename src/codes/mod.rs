// Code Value Objects
//
// Strict-format wrappers around the raw identifier strings used in the
// Brazilian payment system (SPB):
// - CompeCode: the legacy three digit Número-Código (old Compe code)
// - Compe: an institution's legacy-code slot, which may be "n/a"
// - Ispb: the participant identifier that superseded the Compe code
//
// All of them are immutable once constructed and compare structurally on
// their raw string.

pub mod compe;
pub mod ispb;

pub use compe::{Compe, CompeCode};
pub use ispb::Ispb;
