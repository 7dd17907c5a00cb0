use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a skill in the global skill catalog
pub type SkillId = i32;

/// A job seeker
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// An entry in the skill catalog
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
}

/// A skill declared by a user at a given level
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserSkill {
    pub id: i32,
    pub user_id: i32,
    pub skill_id: SkillId,
    pub level: String,
}

/// A job offer
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobOffer {
    pub id: i32,
    pub title: String,
    pub company: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub seniority: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub is_active: bool,
}

/// A skill a job offer asks for, with the minimum accepted level
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobSkillRequirement {
    pub id: i32,
    pub job_offer_id: i32,
    pub skill_id: SkillId,
    pub level_required: String,
    pub importance: i32,
}

/// Requirement as consumed by the compatibility engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRequirement {
    pub skill_id: SkillId,
    pub level_required: String,
}

impl SkillRequirement {
    pub fn new(skill_id: SkillId, level_required: impl Into<String>) -> Self {
        Self {
            skill_id,
            level_required: level_required.into(),
        }
    }
}

/// Why a requirement was not met
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingReason {
    /// The user does not declare the skill at all
    UserMissingSkill,
    /// The user declares the skill below the required level
    LevelTooLow,
}

/// A requirement the user satisfies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedSkill {
    pub skill_id: SkillId,
    pub user_level: String,
    pub required_level: String,
}

/// A requirement the user does not satisfy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingSkill {
    pub skill_id: SkillId,
    pub required_level: String,
    pub user_level: Option<String>,
    pub reason: MissingReason,
}

/// Outcome of comparing one user against one job offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Percentage of requirements met, truncated toward zero
    pub compatibility: u8,
    pub matched_skills: Vec<MatchedSkill>,
    pub missing_skills: Vec<MissingSkill>,
    pub total_requirements: usize,
    pub matched_requirements: usize,
    /// Only set when the offer has no requirements
    pub reason: Option<String>,
}

/// A match result tagged with the pair it was computed for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityReport {
    pub user_id: i32,
    pub job_offer_id: i32,
    pub result: MatchResult,
}
