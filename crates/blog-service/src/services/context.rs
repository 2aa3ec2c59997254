//! Service context - dependency container for services
//!
//! Holds all repositories and other dependencies needed by services.

use std::sync::Arc;

use blog_common::auth::JwtService;
use blog_core::traits::{CommentRepository, ReactionRepository, ReactionTarget, UserRepository};
use blog_core::{Snowflake, SnowflakeGenerator};
use blog_db::PgPool;

use super::error::{ServiceError, ServiceResult};
use super::target::CommentTarget;

/// Service context containing all dependencies
///
/// Built once at startup and shared behind an `Arc`. It provides access to:
/// - Database repositories
/// - The comment reaction target
/// - JWT service for authentication
/// - Snowflake generator for ID generation
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,

    // Reaction targets
    comment_target: Arc<dyn ReactionTarget>,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        let comment_target = Arc::new(CommentTarget::new(Arc::clone(&comment_repo)));

        Self {
            pool,
            user_repo,
            comment_repo,
            reaction_repo,
            comment_target,
            jwt_service,
            snowflake_generator,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    // === Reaction Targets ===

    /// Comments, as seen by the reaction ledger
    pub fn comment_target(&self) -> &dyn ReactionTarget {
        self.comment_target.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("worker_id", &self.snowflake_generator.worker_id())
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing.
    /// The snowflake generator defaults to worker 0.
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool.ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo.ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.comment_repo.ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            self.reaction_repo.ok_or_else(|| ServiceError::validation("reaction_repo is required"))?,
            self.jwt_service.ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.snowflake_generator.unwrap_or_default(),
        ))
    }
}
