//! Folio Content
//!
//! The portfolio's build-time content model: the fixed project record set
//! and its category filter, the page section identifiers, and the static
//! profile data (tech stack, experience timeline, links, hero headlines).
//!
//! Everything here is `'static` data — created at build time, never mutated
//! at runtime. The only behavior is [`filter_projects`], a pure function
//! over the record set.

pub mod profile;
pub mod projects;
pub mod sections;

pub use profile::{ExperienceEntry, ProfileLinks, EXPERIENCE, HERO_TEXTS, LINKS, TECH_STACK};
pub use projects::{
    filter_projects, Gradient, ProjectCategory, ProjectRecord, ProjectTab, PROJECTS,
};
pub use sections::{SectionId, NAV_SECTIONS, TRACKED_SECTIONS};
