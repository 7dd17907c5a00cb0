use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email, length(max = 120))]
    pub email: String,
}

/// Partial update of a user; absent fields keep their current value
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(email, length(max = 120))]
    pub email: Option<String>,
}

/// Request to create a skill
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSkillRequest {
    #[validate(length(min = 1, max = 80))]
    pub name: String,
}

/// Partial update of a skill
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateSkillRequest {
    #[validate(length(min = 1, max = 80))]
    pub name: Option<String>,
}

/// Request to create a job offer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobOfferRequest {
    #[validate(length(min = 1, max = 150))]
    pub title: String,
    #[validate(length(min = 1, max = 150))]
    pub company: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub location: Option<String>,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub seniority: Option<String>,
}

/// Partial update of a job offer
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateJobOfferRequest {
    #[validate(length(min = 1, max = 150))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 150))]
    pub company: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 100))]
    pub location: Option<String>,
    #[validate(length(max = 50))]
    pub seniority: Option<String>,
    pub is_active: Option<bool>,
}

/// Request to declare a skill for a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserSkillRequest {
    #[validate(range(min = 1))]
    pub user_id: i32,
    #[validate(range(min = 1))]
    pub skill_id: i32,
    #[validate(length(min = 1, max = 20))]
    pub level: String,
}

/// Request to change the level of a user skill
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserSkillRequest {
    #[validate(length(min = 1, max = 20))]
    pub level: Option<String>,
}

/// Request to attach a skill requirement to a job offer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRequirementRequest {
    #[validate(range(min = 1))]
    pub job_offer_id: i32,
    #[validate(range(min = 1))]
    pub skill_id: i32,
    #[validate(length(min = 1, max = 20))]
    pub level_required: String,
    #[serde(default = "default_importance")]
    #[validate(range(min = 1, max = 5))]
    pub importance: i32,
}

fn default_importance() -> i32 {
    3
}

/// Partial update of a skill requirement
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateRequirementRequest {
    #[validate(length(min = 1, max = 20))]
    pub level_required: Option<String>,
    #[validate(range(min = 1, max = 5))]
    pub importance: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_validation() {
        let valid = CreateUserRequest {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
        };
        assert!(valid.validate().is_ok());

        let invalid = CreateUserRequest {
            name: "".to_string(),
            email: "not-an-email".to_string(),
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_requirement_default_importance() {
        let req: CreateRequirementRequest = serde_json::from_str(
            r#"{"job_offer_id": 1, "skill_id": 2, "level_required": "mid"}"#,
        )
        .unwrap();

        assert_eq!(req.importance, 3);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_requirement_importance_range() {
        let req = UpdateRequirementRequest {
            level_required: None,
            importance: Some(9),
        };
        assert!(req.validate().is_err());
    }
}
