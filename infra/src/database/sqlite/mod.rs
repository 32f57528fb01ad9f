//! SQLite implementations of the repository traits

mod columns;

pub mod admin_repository_impl;
pub mod certificate_repository_impl;
pub mod experience_repository_impl;
pub mod profile_repository_impl;
pub mod project_repository_impl;
pub mod skill_repository_impl;
pub mod visitor_access_repository_impl;

pub use admin_repository_impl::SqliteAdminRepository;
pub use certificate_repository_impl::SqliteCertificateRepository;
pub use experience_repository_impl::SqliteExperienceRepository;
pub use profile_repository_impl::SqliteProfileRepository;
pub use project_repository_impl::SqliteProjectRepository;
pub use skill_repository_impl::SqliteSkillRepository;
pub use visitor_access_repository_impl::SqliteVisitorAccessRepository;
