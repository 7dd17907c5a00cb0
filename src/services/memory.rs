use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::models::{SkillId, SkillRequirement};
use crate::services::lookup::{LookupError, OfferRequirementLookup, UserSkillLookup};

/// In-process record store
///
/// Holds user skills and offer requirements in memory so matches can be
/// computed without a database. Declaring a skill twice keeps the last level.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: RwLock<HashMap<i32, HashMap<SkillId, String>>>,
    offers: RwLock<HashMap<i32, Vec<SkillRequirement>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user with no skills, keeping existing skills if already known
    pub fn add_user(&self, user_id: i32) {
        let mut users = self.users.write().unwrap_or_else(|e| e.into_inner());
        users.entry(user_id).or_default();
    }

    /// Declare a skill for a user, creating the user if needed
    pub fn set_user_skill(&self, user_id: i32, skill_id: SkillId, level: impl Into<String>) {
        let mut users = self.users.write().unwrap_or_else(|e| e.into_inner());
        users.entry(user_id).or_default().insert(skill_id, level.into());
    }

    /// Register an offer with no requirements, keeping existing ones if already known
    pub fn add_offer(&self, job_offer_id: i32) {
        let mut offers = self.offers.write().unwrap_or_else(|e| e.into_inner());
        offers.entry(job_offer_id).or_default();
    }

    /// Append a requirement to an offer, creating the offer if needed
    pub fn add_requirement(&self, job_offer_id: i32, skill_id: SkillId, level_required: impl Into<String>) {
        let mut offers = self.offers.write().unwrap_or_else(|e| e.into_inner());
        offers
            .entry(job_offer_id)
            .or_default()
            .push(SkillRequirement::new(skill_id, level_required));
    }
}

#[async_trait]
impl UserSkillLookup for InMemoryStore {
    async fn user_skill_levels(&self, user_id: i32) -> Result<HashMap<SkillId, String>, LookupError> {
        let users = self.users.read().unwrap_or_else(|e| e.into_inner());
        users
            .get(&user_id)
            .cloned()
            .ok_or_else(|| LookupError::NotFound("user".to_string()))
    }
}

#[async_trait]
impl OfferRequirementLookup for InMemoryStore {
    async fn offer_requirements(&self, job_offer_id: i32) -> Result<Vec<SkillRequirement>, LookupError> {
        let offers = self.offers.read().unwrap_or_else(|e| e.into_inner());
        offers
            .get(&job_offer_id)
            .cloned()
            .ok_or_else(|| LookupError::NotFound("job offer".to_string()))
    }
}
