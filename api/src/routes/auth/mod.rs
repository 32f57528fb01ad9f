//! Token issuing endpoints

pub mod login;
pub mod verify;

pub use login::login;
pub use verify::verify;
