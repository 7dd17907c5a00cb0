use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{SkillId, SkillRequirement};

/// Errors surfaced while loading match inputs from a record store
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Record store error: {0}")]
    Store(String),
}

/// Loads the skills a user declares
#[async_trait]
pub trait UserSkillLookup: Send + Sync {
    /// Skill id to level label for `user_id`
    ///
    /// Returns [`LookupError::NotFound`] when the user does not exist. A user
    /// with no declared skills yields an empty map.
    async fn user_skill_levels(&self, user_id: i32) -> Result<HashMap<SkillId, String>, LookupError>;
}

/// Loads the skill requirements of a job offer
#[async_trait]
pub trait OfferRequirementLookup: Send + Sync {
    /// Requirements of `job_offer_id`, ordered by requirement id
    ///
    /// Returns [`LookupError::NotFound`] when the offer does not exist.
    async fn offer_requirements(&self, job_offer_id: i32) -> Result<Vec<SkillRequirement>, LookupError>;
}
