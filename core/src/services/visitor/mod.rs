//! Visitor verification and access-entry management

mod service;

#[cfg(test)]
mod tests;

pub use service::VisitorService;
