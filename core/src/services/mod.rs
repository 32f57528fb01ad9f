//! Business services containing domain logic and use cases.

pub mod auth;
pub mod clock;
pub mod token;
pub mod visitor;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig};
pub use clock::{Clock, FixedClock, SystemClock};
pub use token::{AdminTokenScheme, SchemeClaims, TokenScheme, VisitorTokenScheme};
pub use visitor::VisitorService;
