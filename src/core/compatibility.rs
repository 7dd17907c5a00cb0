use std::collections::HashMap;

use crate::core::levels::meets_requirement;
use crate::models::{MatchResult, MatchedSkill, MissingReason, MissingSkill, SkillId, SkillRequirement};

/// Reason attached to the result when an offer has nothing to compare against
pub const NO_REQUIREMENTS_REASON: &str = "offer defines no skill requirements";

/// Compare one user's skills against one offer's requirements
///
/// `user_skills` maps skill id to the user's declared level label.
/// `requirements` is walked in order and that order is kept in both output
/// lists.
///
/// An offer with no requirements is a terminal case scored 0 with
/// [`NO_REQUIREMENTS_REASON`], never 100. Otherwise the compatibility is
/// `matched * 100 / total` truncated toward zero, so 1 of 3 gives 33.
///
/// This never fails: unrecognized user levels resolve to ordinal 0 and show
/// up as unmet requirements.
pub fn compute_compatibility(
    user_skills: &HashMap<SkillId, String>,
    requirements: &[SkillRequirement],
) -> MatchResult {
    if requirements.is_empty() {
        return MatchResult {
            compatibility: 0,
            matched_skills: Vec::new(),
            missing_skills: Vec::new(),
            total_requirements: 0,
            matched_requirements: 0,
            reason: Some(NO_REQUIREMENTS_REASON.to_string()),
        };
    }

    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();

    for requirement in requirements {
        let Some(user_level) = user_skills.get(&requirement.skill_id) else {
            missing_skills.push(MissingSkill {
                skill_id: requirement.skill_id,
                required_level: requirement.level_required.clone(),
                user_level: None,
                reason: MissingReason::UserMissingSkill,
            });
            continue;
        };

        if meets_requirement(user_level, &requirement.level_required) {
            matched_skills.push(MatchedSkill {
                skill_id: requirement.skill_id,
                user_level: user_level.clone(),
                required_level: requirement.level_required.clone(),
            });
        } else {
            missing_skills.push(MissingSkill {
                skill_id: requirement.skill_id,
                required_level: requirement.level_required.clone(),
                user_level: Some(user_level.clone()),
                reason: MissingReason::LevelTooLow,
            });
        }
    }

    let total_requirements = requirements.len();
    let matched_requirements = matched_skills.len();

    MatchResult {
        compatibility: truncated_percentage(matched_requirements, total_requirements),
        matched_skills,
        missing_skills,
        total_requirements,
        matched_requirements,
        reason: None,
    }
}

/// Integer percentage of `part` over `total`, truncated toward zero
#[inline]
fn truncated_percentage(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    // part <= total, so the quotient is within 0..=100
    (part * 100 / total) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(entries: &[(SkillId, &str)]) -> HashMap<SkillId, String> {
        entries
            .iter()
            .map(|(id, level)| (*id, level.to_string()))
            .collect()
    }

    #[test]
    fn test_mixed_offer() {
        let requirements = vec![
            SkillRequirement::new(1, "intermediate"),
            SkillRequirement::new(2, "senior"),
        ];
        let user = skills(&[(1, "advanced"), (2, "junior")]);

        let result = compute_compatibility(&user, &requirements);

        assert_eq!(result.compatibility, 50);
        assert_eq!(result.total_requirements, 2);
        assert_eq!(result.matched_requirements, 1);
        assert_eq!(result.reason, None);
        assert_eq!(
            result.matched_skills,
            vec![MatchedSkill {
                skill_id: 1,
                user_level: "advanced".to_string(),
                required_level: "intermediate".to_string(),
            }]
        );
        assert_eq!(
            result.missing_skills,
            vec![MissingSkill {
                skill_id: 2,
                required_level: "senior".to_string(),
                user_level: Some("junior".to_string()),
                reason: MissingReason::LevelTooLow,
            }]
        );
    }

    #[test]
    fn test_no_requirements() {
        let user = skills(&[(1, "senior")]);
        let result = compute_compatibility(&user, &[]);

        assert_eq!(result.compatibility, 0);
        assert_eq!(result.reason.as_deref(), Some(NO_REQUIREMENTS_REASON));
        assert!(result.matched_skills.is_empty());
        assert!(result.missing_skills.is_empty());
        assert_eq!(result.total_requirements, 0);
    }

    #[test]
    fn test_missing_skill_has_no_user_level() {
        let requirements = vec![SkillRequirement::new(7, "beginner")];
        let result = compute_compatibility(&HashMap::new(), &requirements);

        assert_eq!(result.compatibility, 0);
        assert_eq!(result.missing_skills.len(), 1);
        assert_eq!(result.missing_skills[0].reason, MissingReason::UserMissingSkill);
        assert_eq!(result.missing_skills[0].user_level, None);
    }

    #[test]
    fn test_equal_level_matches() {
        let requirements = vec![SkillRequirement::new(1, "Mid")];
        let user = skills(&[(1, "intermediate")]);

        let result = compute_compatibility(&user, &requirements);

        assert_eq!(result.compatibility, 100);
        assert_eq!(result.matched_requirements, 1);
    }

    #[test]
    fn test_truncation() {
        let requirements = vec![
            SkillRequirement::new(1, "beginner"),
            SkillRequirement::new(2, "beginner"),
            SkillRequirement::new(3, "beginner"),
        ];

        let one = compute_compatibility(&skills(&[(1, "junior")]), &requirements);
        assert_eq!(one.compatibility, 33);

        let two = compute_compatibility(&skills(&[(1, "junior"), (2, "senior")]), &requirements);
        assert_eq!(two.compatibility, 66);
    }

    #[test]
    fn test_output_follows_requirement_order() {
        let requirements = vec![
            SkillRequirement::new(9, "senior"),
            SkillRequirement::new(3, "senior"),
            SkillRequirement::new(5, "senior"),
        ];
        let result = compute_compatibility(&HashMap::new(), &requirements);

        let ids: Vec<_> = result.missing_skills.iter().map(|m| m.skill_id).collect();
        assert_eq!(ids, vec![9, 3, 5]);
    }

    #[test]
    fn test_truncated_percentage() {
        assert_eq!(truncated_percentage(0, 0), 0);
        assert_eq!(truncated_percentage(0, 4), 0);
        assert_eq!(truncated_percentage(4, 4), 100);
        assert_eq!(truncated_percentage(2, 7), 28);
    }
}
