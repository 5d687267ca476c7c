//! PostgreSQL repository implementations.

use async_trait::async_trait;

use quill_core::ports::PostRepository;

use super::entity::post::Entity as PostEntity;
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {}
