pub mod admin;
pub mod profile;
pub mod resource;
pub mod visitor_access;

pub use admin::{AdminRepository, MockAdminRepository};
pub use profile::{MockProfileRepository, ProfileRepository};
pub use resource::{
    InMemoryResourceRepository, MockSkillRepository, ResourceRepository, SkillCategoryRepository,
};
pub use visitor_access::{MockVisitorAccessRepository, VisitorAccessRepository};
