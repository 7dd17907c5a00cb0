use std::sync::Arc;

use crate::core::compatibility::compute_compatibility;
use crate::models::CompatibilityReport;
use crate::services::lookup::{LookupError, OfferRequirementLookup, UserSkillLookup};

/// Main matching orchestrator
///
/// Loads one user's skills and one offer's requirements through the lookup
/// capabilities, then hands both to the compatibility engine. The user is
/// resolved first, so an unknown user is reported even when the offer is
/// unknown too.
#[derive(Clone)]
pub struct Matcher {
    users: Arc<dyn UserSkillLookup>,
    offers: Arc<dyn OfferRequirementLookup>,
}

impl Matcher {
    pub fn new(users: Arc<dyn UserSkillLookup>, offers: Arc<dyn OfferRequirementLookup>) -> Self {
        Self { users, offers }
    }

    /// Build a matcher whose store serves both lookups
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: UserSkillLookup + OfferRequirementLookup + 'static,
    {
        Self {
            users: store.clone(),
            offers: store,
        }
    }

    /// Compute the compatibility of `user_id` with `job_offer_id`
    pub async fn match_user_to_offer(
        &self,
        user_id: i32,
        job_offer_id: i32,
    ) -> Result<CompatibilityReport, LookupError> {
        let user_skills = self.users.user_skill_levels(user_id).await?;
        let requirements = self.offers.offer_requirements(job_offer_id).await?;

        tracing::debug!(
            "Matching user {} ({} skills) against offer {} ({} requirements)",
            user_id,
            user_skills.len(),
            job_offer_id,
            requirements.len()
        );

        let result = compute_compatibility(&user_skills, &requirements);

        tracing::info!(
            user_id,
            job_offer_id,
            compatibility = result.compatibility,
            matched = result.matched_requirements,
            total = result.total_requirements,
            "Computed compatibility"
        );

        Ok(CompatibilityReport {
            user_id,
            job_offer_id,
            result,
        })
    }
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::memory::InMemoryStore;

    fn create_store() -> Arc<InMemoryStore> {
        let store = Arc::new(InMemoryStore::new());
        store.set_user_skill(1, 1, "advanced");
        store.set_user_skill(1, 2, "junior");
        store.add_requirement(10, 1, "intermediate");
        store.add_requirement(10, 2, "senior");
        store.add_offer(11);
        store
    }

    #[test]
    fn test_match_user_to_offer() {
        let matcher = Matcher::from_store(create_store());

        let report = tokio_test::block_on(matcher.match_user_to_offer(1, 10)).unwrap();

        assert_eq!(report.user_id, 1);
        assert_eq!(report.job_offer_id, 10);
        assert_eq!(report.result.compatibility, 50);
        assert_eq!(report.result.matched_requirements, 1);
    }

    #[test]
    fn test_offer_without_requirements() {
        let matcher = Matcher::from_store(create_store());

        let report = tokio_test::block_on(matcher.match_user_to_offer(1, 11)).unwrap();

        assert_eq!(report.result.compatibility, 0);
        assert!(report.result.reason.is_some());
    }

    #[test]
    fn test_user_checked_before_offer() {
        let matcher = Matcher::from_store(create_store());

        let err = tokio_test::block_on(matcher.match_user_to_offer(99, 99)).unwrap_err();
        assert_eq!(err, LookupError::NotFound("user".to_string()));

        let err = tokio_test::block_on(matcher.match_user_to_offer(1, 99)).unwrap_err();
        assert_eq!(err, LookupError::NotFound("job offer".to_string()));
    }
}
