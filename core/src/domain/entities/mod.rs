//! Domain entities representing core business objects.

pub mod admin;
pub mod certificate;
pub mod experience;
pub mod profile;
pub mod project;
pub mod resource;
pub mod skill;
pub mod token;
pub mod visitor_access;

// Re-export commonly used types
pub use admin::{AdminAccount, ADMIN_ROLE};
pub use certificate::Certificate;
pub use experience::Experience;
pub use profile::{Profile, ProfileField};
pub use project::{Metric, Project};
pub use resource::Resource;
pub use skill::{Skill, SkillCategory};
pub use token::{AdminClaims, VisitorClaims, JWT_ISSUER, VISITOR_TOKEN_TYPE};
pub use visitor_access::{AccessType, NewVisitorAccess, VisitorAccessEntry};
