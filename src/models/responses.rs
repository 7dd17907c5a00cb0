use serde::{Deserialize, Serialize};

use crate::models::domain::{CompatibilityReport, MatchedSkill, MissingSkill};

/// Response for the compatibility endpoint
///
/// Offers with requirements carry the two counters and no reason. Offers
/// without requirements carry a reason and no counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityResponse {
    pub user_id: i32,
    pub job_offer_id: i32,
    pub compatibility: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub matched_skills: Vec<MatchedSkill>,
    pub missing_skills: Vec<MissingSkill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_requirements: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_requirements: Option<usize>,
}

impl From<CompatibilityReport> for CompatibilityResponse {
    fn from(report: CompatibilityReport) -> Self {
        let result = report.result;
        let counted = result.reason.is_none();

        Self {
            user_id: report.user_id,
            job_offer_id: report.job_offer_id,
            compatibility: result.compatibility,
            reason: result.reason,
            matched_skills: result.matched_skills,
            missing_skills: result.missing_skills,
            total_requirements: counted.then_some(result.total_requirements),
            matched_requirements: counted.then_some(result.matched_requirements),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn new(status_code: u16, error: &str, message: String) -> Self {
        Self {
            error: error.to_string(),
            message,
            status_code,
        }
    }
}

/// Response for delete endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub status: String,
    pub id: i32,
}

impl DeletedResponse {
    pub fn new(id: i32) -> Self {
        Self {
            status: "deleted".to_string(),
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::MatchResult;

    #[test]
    fn test_empty_offer_shape() {
        let report = CompatibilityReport {
            user_id: 1,
            job_offer_id: 2,
            result: MatchResult {
                compatibility: 0,
                matched_skills: vec![],
                missing_skills: vec![],
                total_requirements: 0,
                matched_requirements: 0,
                reason: Some("offer defines no skill requirements".to_string()),
            },
        };

        let json = serde_json::to_value(CompatibilityResponse::from(report)).unwrap();

        assert_eq!(json["reason"], "offer defines no skill requirements");
        assert!(json.get("total_requirements").is_none());
        assert!(json.get("matched_requirements").is_none());
        assert_eq!(json["matched_skills"], serde_json::json!([]));
    }

    #[test]
    fn test_counted_shape() {
        let report = CompatibilityReport {
            user_id: 1,
            job_offer_id: 2,
            result: MatchResult {
                compatibility: 100,
                matched_skills: vec![],
                missing_skills: vec![],
                total_requirements: 0,
                matched_requirements: 0,
                reason: None,
            },
        };

        let json = serde_json::to_value(CompatibilityResponse::from(report)).unwrap();

        assert!(json.get("reason").is_none());
        assert_eq!(json["total_requirements"], 0);
    }
}
