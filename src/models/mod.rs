// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CompatibilityReport, JobOffer, JobSkillRequirement, MatchResult, MatchedSkill, MissingReason,
    MissingSkill, Skill, SkillId, SkillRequirement, User, UserSkill,
};
pub use requests::{
    CreateJobOfferRequest, CreateRequirementRequest, CreateUserRequest, CreateUserSkillRequest,
    CreateSkillRequest, UpdateJobOfferRequest, UpdateRequirementRequest, UpdateSkillRequest,
    UpdateUserRequest, UpdateUserSkillRequest,
};
pub use responses::{CompatibilityResponse, DeletedResponse, ErrorResponse, HealthResponse};
