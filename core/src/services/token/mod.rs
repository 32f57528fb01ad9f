//! Signed bearer tokens
//!
//! One generic [`TokenScheme`] is instantiated twice: once for administrator
//! sessions and once for visitor sessions. The two use different secrets and
//! different claim sets, so a token from one scheme never verifies under the
//! other.

mod claims;
mod scheme;


pub use claims::SchemeClaims;
pub use scheme::{AdminTokenScheme, TokenScheme, VisitorTokenScheme};
