// Unit tests for the SkillMatch compatibility engine

use skillmatch::core::{
    compatibility::{compute_compatibility, NO_REQUIREMENTS_REASON},
    levels::{level_ordinal, UNRECOGNIZED_ORDINAL},
};
use skillmatch::models::{MissingReason, SkillId, SkillRequirement};
use std::collections::HashMap;

fn user_skills(entries: &[(SkillId, &str)]) -> HashMap<SkillId, String> {
    entries
        .iter()
        .map(|(id, level)| (*id, level.to_string()))
        .collect()
}

fn requirements(entries: &[(SkillId, &str)]) -> Vec<SkillRequirement> {
    entries
        .iter()
        .map(|(id, level)| SkillRequirement::new(*id, *level))
        .collect()
}

#[test]
fn test_level_scale() {
    assert!(level_ordinal("beginner") < level_ordinal("intermediate"));
    assert!(level_ordinal("intermediate") < level_ordinal("advanced"));
    assert_eq!(level_ordinal("junior"), level_ordinal("beginner"));
    assert_eq!(level_ordinal("mid"), level_ordinal("intermediate"));
    assert_eq!(level_ordinal("senior"), level_ordinal("advanced"));
}

#[test]
fn test_level_lookup_ignores_case() {
    assert_eq!(level_ordinal("Senior"), level_ordinal("senior"));
    assert_eq!(level_ordinal("JUNIOR"), level_ordinal("junior"));
}

#[test]
fn test_offer_with_mixed_levels() {
    let reqs = requirements(&[(1, "intermediate"), (2, "senior")]);
    let user = user_skills(&[(1, "advanced"), (2, "junior")]);

    let result = compute_compatibility(&user, &reqs);

    assert_eq!(result.compatibility, 50);
    assert_eq!(result.matched_requirements, 1);
    assert_eq!(result.total_requirements, 2);
    assert_eq!(result.matched_skills[0].skill_id, 1);
    assert_eq!(result.missing_skills[0].skill_id, 2);
    assert_eq!(result.missing_skills[0].reason, MissingReason::LevelTooLow);
    assert_eq!(result.missing_skills[0].user_level.as_deref(), Some("junior"));
}

#[test]
fn test_offer_without_requirements_ignores_user_skills() {
    for user in [user_skills(&[]), user_skills(&[(1, "senior"), (2, "mid")])] {
        let result = compute_compatibility(&user, &[]);

        assert_eq!(result.compatibility, 0);
        assert_eq!(result.reason.as_deref(), Some(NO_REQUIREMENTS_REASON));
        assert!(result.matched_skills.is_empty());
        assert!(result.missing_skills.is_empty());
    }
}

#[test]
fn test_counts_add_up() {
    let reqs = requirements(&[
        (1, "beginner"),
        (2, "advanced"),
        (3, "mid"),
        (4, "senior"),
        (5, "junior"),
    ]);
    let user = user_skills(&[(1, "beginner"), (2, "intermediate"), (4, "senior"), (6, "senior")]);

    let result = compute_compatibility(&user, &reqs);

    assert_eq!(result.total_requirements, reqs.len());
    assert_eq!(
        result.matched_requirements + result.missing_skills.len(),
        result.total_requirements
    );
    assert_eq!(result.matched_requirements, result.matched_skills.len());
    assert_eq!(result.compatibility, 40);
    assert!(result.reason.is_none());
}

#[test]
fn test_percentage_is_truncated() {
    let reqs = requirements(&[(1, "junior"), (2, "junior"), (3, "junior")]);

    let one = compute_compatibility(&user_skills(&[(1, "mid")]), &reqs);
    assert_eq!(one.compatibility, 33);

    let two = compute_compatibility(&user_skills(&[(1, "mid"), (2, "mid")]), &reqs);
    assert_eq!(two.compatibility, 66);

    let all = compute_compatibility(&user_skills(&[(1, "mid"), (2, "mid"), (3, "mid")]), &reqs);
    assert_eq!(all.compatibility, 100);
}

#[test]
fn test_absent_skill_is_missing_without_level() {
    let reqs = requirements(&[(8, "beginner")]);
    let result = compute_compatibility(&user_skills(&[(9, "senior")]), &reqs);

    assert_eq!(result.missing_skills.len(), 1);
    assert_eq!(result.missing_skills[0].reason, MissingReason::UserMissingSkill);
    assert_eq!(result.missing_skills[0].user_level, None);
    assert_eq!(result.missing_skills[0].required_level, "beginner");
}

#[test]
fn test_unrecognized_user_level_never_satisfies() {
    assert_eq!(level_ordinal("expert"), UNRECOGNIZED_ORDINAL);

    for required in ["beginner", "junior", "intermediate", "mid", "advanced", "senior"] {
        let result = compute_compatibility(&user_skills(&[(1, "expert")]), &requirements(&[(1, required)]));

        assert_eq!(result.compatibility, 0, "expert should not satisfy {}", required);
        assert_eq!(result.missing_skills[0].reason, MissingReason::LevelTooLow);
    }
}

#[test]
fn test_missing_reason_serialization() {
    let reqs = requirements(&[(1, "senior"), (2, "senior")]);
    let result = compute_compatibility(&user_skills(&[(1, "junior")]), &reqs);

    let json = serde_json::to_value(&result.missing_skills).unwrap();
    assert_eq!(json[0]["reason"], "level_too_low");
    assert_eq!(json[1]["reason"], "user_missing_skill");
    assert!(json[1]["user_level"].is_null());
}

#[test]
fn test_unrecognized_required_level_needs_only_the_skill() {
    let reqs = requirements(&[(1, "expert"), (2, "expert")]);
    let result = compute_compatibility(&user_skills(&[(1, "beginner")]), &reqs);

    assert_eq!(result.matched_requirements, 1);
    assert_eq!(result.missing_skills[0].skill_id, 2);
    assert_eq!(result.missing_skills[0].reason, MissingReason::UserMissingSkill);
}
