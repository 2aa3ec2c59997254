//! # blog-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blog_db::{create_pool, run_migrations, DatabaseConfig, PgReactionRepository};
//!
//! async fn example(url: &str) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::with_url(url, 10, 1)).await?;
//!     run_migrations(&pool).await?;
//!     let reaction_repo = PgReactionRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgCommentRepository, PgReactionRepository, PgUserRepository};
