#[cfg(test)]
mod tests {
    use crate::database::entity::post;
    use crate::database::postgres_repo::PostgresPostRepository;
    use quill_core::domain::Post;
    use quill_core::ports::BaseRepository;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(id: i32, title: &str) -> post::Model {
        post::Model {
            id,
            user_id: 1,
            title: title.to_owned(),
            body: "Content".to_owned(),
            version: None,
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        // Mock the query expectation
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(1, "Test Post")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(1).await.unwrap();

        assert!(result.is_some());
        let found = result.unwrap();
        assert_eq!(found.title, "Test Post");
        assert_eq!(found.id, 1);
    }

    #[tokio::test]
    async fn test_find_all_preserves_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(1, "First"), model(2, "Second")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Vec<Post> = repo.find_all().await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].title, "First");
        assert_eq!(result[1].title, "Second");
    }

    #[tokio::test]
    async fn test_delete_absent_row_is_ok() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Result<(), _> = BaseRepository::<Post, i32>::delete_by_id(&repo, 999).await;
        assert!(result.is_ok());
    }
}
