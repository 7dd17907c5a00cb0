//! SkillMatch - skill compatibility service
//!
//! Compares the skill levels a job seeker declares against the requirements
//! of a job offer and reports a compatibility percentage together with the
//! matched and missing skills.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{compute_compatibility, level_ordinal, Matcher};
pub use models::{CompatibilityReport, MatchResult, MatchedSkill, MissingReason, MissingSkill, SkillRequirement};
pub use services::{InMemoryStore, LookupError, OfferRequirementLookup, UserSkillLookup};
