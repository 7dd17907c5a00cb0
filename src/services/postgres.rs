use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use thiserror::Error;

use crate::config::DatabaseSettings;
use crate::models::{
    CreateJobOfferRequest, CreateRequirementRequest, CreateSkillRequest, CreateUserRequest,
    CreateUserSkillRequest, JobOffer, JobSkillRequirement, Skill, SkillId, SkillRequirement,
    UpdateJobOfferRequest, UpdateRequirementRequest, UpdateSkillRequest, UpdateUserRequest,
    UpdateUserSkillRequest, User, UserSkill,
};
use crate::services::lookup::{LookupError, OfferRequirementLookup, UserSkillLookup};

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<sqlx::Error> for PostgresError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let message = db_err.message().to_string();
            if db_err.is_unique_violation() {
                return PostgresError::Conflict(message);
            }
            if db_err.is_foreign_key_violation() {
                return PostgresError::InvalidReference(message);
            }
            if db_err.is_check_violation() {
                return PostgresError::InvalidInput(message);
            }
        }
        PostgresError::SqlxError(err)
    }
}

/// PostgreSQL record store
///
/// Owns the users, skill catalog, job offers and the two relations the
/// matcher reads. Also serves both lookup capabilities.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings, running migrations if enabled
    pub async fn from_settings(settings: &DatabaseSettings) -> Result<Self, PostgresError> {
        tracing::info!(
            "Connecting to PostgreSQL (max: {}, min: {} connections)",
            settings.max_connections(),
            settings.min_connections()
        );

        let client = Self::new(
            &settings.url,
            settings.max_connections(),
            settings.min_connections(),
            Duration::from_secs(settings.acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(settings.idle_timeout_secs.unwrap_or(600)),
        )
        .await?;

        if settings.run_migrations {
            client.run_migrations().await?;
        }

        Ok(client)
    }

    /// Create a client whose pool connects on first use
    pub fn connect_lazy(database_url: &str) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .acquire_timeout(Duration::from_secs(1))
            .connect_lazy(database_url)?;

        Ok(Self { pool })
    }

    /// Apply the embedded schema migrations
    pub async fn run_migrations(&self) -> Result<(), PostgresError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Database migrations applied");
        Ok(())
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }

    // =========================
    // Users
    // =========================

    pub async fn list_users(&self) -> Result<Vec<User>, PostgresError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, email, created_at FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    pub async fn get_user(&self, user_id: i32) -> Result<User, PostgresError> {
        sqlx::query_as::<_, User>("SELECT id, name, email, created_at FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| PostgresError::NotFound("user".to_string()))
    }

    pub async fn create_user(&self, req: &CreateUserRequest) -> Result<User, PostgresError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, created_at)
            VALUES ($1, $2, NOW())
            RETURNING id, name, email, created_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.email)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Created user {}", user.id);
        Ok(user)
    }

    pub async fn update_user(
        &self,
        user_id: i32,
        req: &UpdateUserRequest,
    ) -> Result<User, PostgresError> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = COALESCE($2, name),
                email = COALESCE($3, email)
            WHERE id = $1
            RETURNING id, name, email, created_at
            "#,
        )
        .bind(user_id)
        .bind(req.name.as_deref())
        .bind(req.email.as_deref())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| PostgresError::NotFound("user".to_string()))
    }

    pub async fn delete_user(&self, user_id: i32) -> Result<(), PostgresError> {
        self.delete_by_id("DELETE FROM users WHERE id = $1", user_id, "user")
            .await
    }

    // =========================
    // Skills
    // =========================

    pub async fn list_skills(&self) -> Result<Vec<Skill>, PostgresError> {
        let skills = sqlx::query_as::<_, Skill>("SELECT id, name FROM skills ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(skills)
    }

    pub async fn get_skill(&self, skill_id: SkillId) -> Result<Skill, PostgresError> {
        sqlx::query_as::<_, Skill>("SELECT id, name FROM skills WHERE id = $1")
            .bind(skill_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| PostgresError::NotFound("skill".to_string()))
    }

    pub async fn create_skill(&self, req: &CreateSkillRequest) -> Result<Skill, PostgresError> {
        let skill = sqlx::query_as::<_, Skill>(
            "INSERT INTO skills (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&req.name)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Created skill {} ({})", skill.id, skill.name);
        Ok(skill)
    }

    pub async fn update_skill(
        &self,
        skill_id: SkillId,
        req: &UpdateSkillRequest,
    ) -> Result<Skill, PostgresError> {
        sqlx::query_as::<_, Skill>(
            "UPDATE skills SET name = COALESCE($2, name) WHERE id = $1 RETURNING id, name",
        )
        .bind(skill_id)
        .bind(req.name.as_deref())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| PostgresError::NotFound("skill".to_string()))
    }

    pub async fn delete_skill(&self, skill_id: SkillId) -> Result<(), PostgresError> {
        self.delete_by_id("DELETE FROM skills WHERE id = $1", skill_id, "skill")
            .await
    }

    // =========================
    // Job offers
    // =========================

    pub async fn list_job_offers(&self) -> Result<Vec<JobOffer>, PostgresError> {
        let offers = sqlx::query_as::<_, JobOffer>(
            r#"
            SELECT id, title, company, description, location, seniority, created_at, is_active
            FROM job_offers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(offers)
    }

    pub async fn get_job_offer(&self, job_offer_id: i32) -> Result<JobOffer, PostgresError> {
        sqlx::query_as::<_, JobOffer>(
            r#"
            SELECT id, title, company, description, location, seniority, created_at, is_active
            FROM job_offers
            WHERE id = $1
            "#,
        )
        .bind(job_offer_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| PostgresError::NotFound("job offer".to_string()))
    }

    pub async fn create_job_offer(
        &self,
        req: &CreateJobOfferRequest,
    ) -> Result<JobOffer, PostgresError> {
        let offer = sqlx::query_as::<_, JobOffer>(
            r#"
            INSERT INTO job_offers (title, company, description, location, seniority, created_at, is_active)
            VALUES ($1, $2, $3, $4, $5, NOW(), TRUE)
            RETURNING id, title, company, description, location, seniority, created_at, is_active
            "#,
        )
        .bind(&req.title)
        .bind(&req.company)
        .bind(req.description.as_deref())
        .bind(req.location.as_deref())
        .bind(req.seniority.as_deref())
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Created job offer {} ({} @ {})", offer.id, offer.title, offer.company);
        Ok(offer)
    }

    pub async fn update_job_offer(
        &self,
        job_offer_id: i32,
        req: &UpdateJobOfferRequest,
    ) -> Result<JobOffer, PostgresError> {
        sqlx::query_as::<_, JobOffer>(
            r#"
            UPDATE job_offers
            SET title = COALESCE($2, title),
                company = COALESCE($3, company),
                description = COALESCE($4, description),
                location = COALESCE($5, location),
                seniority = COALESCE($6, seniority),
                is_active = COALESCE($7, is_active)
            WHERE id = $1
            RETURNING id, title, company, description, location, seniority, created_at, is_active
            "#,
        )
        .bind(job_offer_id)
        .bind(req.title.as_deref())
        .bind(req.company.as_deref())
        .bind(req.description.as_deref())
        .bind(req.location.as_deref())
        .bind(req.seniority.as_deref())
        .bind(req.is_active)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| PostgresError::NotFound("job offer".to_string()))
    }

    pub async fn delete_job_offer(&self, job_offer_id: i32) -> Result<(), PostgresError> {
        self.delete_by_id("DELETE FROM job_offers WHERE id = $1", job_offer_id, "job offer")
            .await
    }

    // =========================
    // User skills
    // =========================

    pub async fn list_user_skills(&self) -> Result<Vec<UserSkill>, PostgresError> {
        let items = sqlx::query_as::<_, UserSkill>(
            "SELECT id, user_id, skill_id, level FROM user_skills ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn get_user_skill(&self, user_skill_id: i32) -> Result<UserSkill, PostgresError> {
        sqlx::query_as::<_, UserSkill>(
            "SELECT id, user_id, skill_id, level FROM user_skills WHERE id = $1",
        )
        .bind(user_skill_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| PostgresError::NotFound("user_skill".to_string()))
    }

    /// Declare a skill for a user
    ///
    /// A user holds at most one record per skill. Declaring the same skill
    /// again overwrites the stored level.
    pub async fn create_user_skill(
        &self,
        req: &CreateUserSkillRequest,
    ) -> Result<UserSkill, PostgresError> {
        let item = sqlx::query_as::<_, UserSkill>(
            r#"
            INSERT INTO user_skills (user_id, skill_id, level)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, skill_id)
            DO UPDATE SET level = EXCLUDED.level
            RETURNING id, user_id, skill_id, level
            "#,
        )
        .bind(req.user_id)
        .bind(req.skill_id)
        .bind(&req.level)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(
            "Recorded user skill: user {} -> skill {} ({})",
            item.user_id,
            item.skill_id,
            item.level
        );
        Ok(item)
    }

    pub async fn update_user_skill(
        &self,
        user_skill_id: i32,
        req: &UpdateUserSkillRequest,
    ) -> Result<UserSkill, PostgresError> {
        sqlx::query_as::<_, UserSkill>(
            r#"
            UPDATE user_skills
            SET level = COALESCE($2, level)
            WHERE id = $1
            RETURNING id, user_id, skill_id, level
            "#,
        )
        .bind(user_skill_id)
        .bind(req.level.as_deref())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| PostgresError::NotFound("user_skill".to_string()))
    }

    pub async fn delete_user_skill(&self, user_skill_id: i32) -> Result<(), PostgresError> {
        self.delete_by_id("DELETE FROM user_skills WHERE id = $1", user_skill_id, "user_skill")
            .await
    }

    // =========================
    // Job skill requirements
    // =========================

    pub async fn list_requirements(&self) -> Result<Vec<JobSkillRequirement>, PostgresError> {
        let items = sqlx::query_as::<_, JobSkillRequirement>(
            r#"
            SELECT id, job_offer_id, skill_id, level_required, importance
            FROM job_skill_requirements
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Requirements of one offer in requirement id order
    pub async fn list_requirements_for_offer(
        &self,
        job_offer_id: i32,
    ) -> Result<Vec<JobSkillRequirement>, PostgresError> {
        // Existence check first so an unknown offer is not mistaken for an empty one
        self.get_job_offer(job_offer_id).await?;

        let items = sqlx::query_as::<_, JobSkillRequirement>(
            r#"
            SELECT id, job_offer_id, skill_id, level_required, importance
            FROM job_skill_requirements
            WHERE job_offer_id = $1
            ORDER BY id
            "#,
        )
        .bind(job_offer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn get_requirement(
        &self,
        requirement_id: i32,
    ) -> Result<JobSkillRequirement, PostgresError> {
        sqlx::query_as::<_, JobSkillRequirement>(
            r#"
            SELECT id, job_offer_id, skill_id, level_required, importance
            FROM job_skill_requirements
            WHERE id = $1
            "#,
        )
        .bind(requirement_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| PostgresError::NotFound("job_skill_requirement".to_string()))
    }

    pub async fn create_requirement(
        &self,
        req: &CreateRequirementRequest,
    ) -> Result<JobSkillRequirement, PostgresError> {
        let item = sqlx::query_as::<_, JobSkillRequirement>(
            r#"
            INSERT INTO job_skill_requirements (job_offer_id, skill_id, level_required, importance)
            VALUES ($1, $2, $3, $4)
            RETURNING id, job_offer_id, skill_id, level_required, importance
            "#,
        )
        .bind(req.job_offer_id)
        .bind(req.skill_id)
        .bind(&req.level_required)
        .bind(req.importance)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(
            "Recorded requirement: offer {} -> skill {} ({})",
            item.job_offer_id,
            item.skill_id,
            item.level_required
        );
        Ok(item)
    }

    pub async fn update_requirement(
        &self,
        requirement_id: i32,
        req: &UpdateRequirementRequest,
    ) -> Result<JobSkillRequirement, PostgresError> {
        sqlx::query_as::<_, JobSkillRequirement>(
            r#"
            UPDATE job_skill_requirements
            SET level_required = COALESCE($2, level_required),
                importance = COALESCE($3, importance)
            WHERE id = $1
            RETURNING id, job_offer_id, skill_id, level_required, importance
            "#,
        )
        .bind(requirement_id)
        .bind(req.level_required.as_deref())
        .bind(req.importance)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| PostgresError::NotFound("job_skill_requirement".to_string()))
    }

    pub async fn delete_requirement(&self, requirement_id: i32) -> Result<(), PostgresError> {
        self.delete_by_id(
            "DELETE FROM job_skill_requirements WHERE id = $1",
            requirement_id,
            "job_skill_requirement",
        )
        .await
    }

    async fn delete_by_id(&self, query: &str, id: i32, entity: &str) -> Result<(), PostgresError> {
        let result = sqlx::query(query).bind(id).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(PostgresError::NotFound(entity.to_string()));
        }

        tracing::debug!("Deleted {} {}", entity, id);
        Ok(())
    }
}

impl From<PostgresError> for LookupError {
    fn from(err: PostgresError) -> Self {
        match err {
            PostgresError::NotFound(entity) => LookupError::NotFound(entity),
            other => LookupError::Store(other.to_string()),
        }
    }
}

// Each lookup is one statement joined from the owning row, so the existence
// check and the records come from the same snapshot.
#[async_trait]
impl UserSkillLookup for PostgresClient {
    async fn user_skill_levels(&self, user_id: i32) -> Result<HashMap<SkillId, String>, LookupError> {
        let query = r#"
            SELECT u.id, us.skill_id, us.level
            FROM users u
            LEFT JOIN user_skills us ON us.user_id = u.id
            WHERE u.id = $1
            ORDER BY us.id
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(PostgresError::from)?;

        if rows.is_empty() {
            return Err(LookupError::NotFound("user".to_string()));
        }

        let mut levels = HashMap::with_capacity(rows.len());
        for row in &rows {
            let skill_id: Option<SkillId> = row.try_get("skill_id").map_err(PostgresError::from)?;
            let level: Option<String> = row.try_get("level").map_err(PostgresError::from)?;
            if let (Some(skill_id), Some(level)) = (skill_id, level) {
                levels.insert(skill_id, level);
            }
        }

        tracing::debug!("User {} declares {} skills", user_id, levels.len());
        Ok(levels)
    }
}

#[async_trait]
impl OfferRequirementLookup for PostgresClient {
    async fn offer_requirements(&self, job_offer_id: i32) -> Result<Vec<SkillRequirement>, LookupError> {
        let query = r#"
            SELECT o.id, r.skill_id, r.level_required
            FROM job_offers o
            LEFT JOIN job_skill_requirements r ON r.job_offer_id = o.id
            WHERE o.id = $1
            ORDER BY r.id
        "#;

        let rows = sqlx::query(query)
            .bind(job_offer_id)
            .fetch_all(&self.pool)
            .await
            .map_err(PostgresError::from)?;

        if rows.is_empty() {
            return Err(LookupError::NotFound("job offer".to_string()));
        }

        let mut requirements = Vec::with_capacity(rows.len());
        for row in &rows {
            let skill_id: Option<SkillId> = row.try_get("skill_id").map_err(PostgresError::from)?;
            let level_required: Option<String> =
                row.try_get("level_required").map_err(PostgresError::from)?;
            if let (Some(skill_id), Some(level_required)) = (skill_id, level_required) {
                requirements.push(SkillRequirement {
                    skill_id,
                    level_required,
                });
            }
        }

        tracing::debug!("Job offer {} has {} requirements", job_offer_id, requirements.len());
        Ok(requirements)
    }
}
