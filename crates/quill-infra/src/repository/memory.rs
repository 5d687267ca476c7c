//! In-memory post repository - the default storage when no database is
//! configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::Post;
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository};

/// In-memory repository using a BTreeMap with an async RwLock.
///
/// Iteration order is ascending id, which is the persistence order the
/// list operation exposes. Note: data is lost on process restart.
pub struct InMemoryPostRepository {
    inner: RwLock<Store>,
}

struct Store {
    posts: BTreeMap<i32, Post>,
    next_id: i32,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Store {
                posts: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Build a repository pre-populated with the given posts.
    ///
    /// Posts keep their ids; the id counter starts past the highest one.
    pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        let posts: BTreeMap<i32, Post> = posts.into_iter().map(|p| (p.id, p)).collect();
        let next_id = posts.keys().max().copied().unwrap_or(0) + 1;

        Self {
            inner: RwLock::new(Store { posts, next_id }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, i32> for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.inner.read().await;
        Ok(store.posts.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let store = self.inner.read().await;
        Ok(store.posts.get(&id).cloned())
    }

    async fn save(&self, entity: Post) -> Result<Post, RepoError> {
        let mut store = self.inner.write().await;

        let mut post = entity;
        if post.id == 0 {
            post.id = store.next_id;
        }
        // Keep the counter ahead of explicitly supplied ids.
        store.next_id = store.next_id.max(post.id + 1);
        store.posts.insert(post.id, post.clone());

        Ok(post)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), RepoError> {
        let mut store = self.inner.write().await;
        store.posts.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: i32, title: &str) -> Post {
        Post {
            id,
            user_id: 1,
            title: title.to_string(),
            body: format!("{title} body"),
            version: None,
        }
    }

    #[tokio::test]
    async fn save_assigns_sequential_ids() {
        let repo = InMemoryPostRepository::new();

        let first = repo.save(post(0, "first")).await.unwrap();
        let second = repo.save(post(0, "second")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn save_upserts_at_explicit_id() {
        let repo = InMemoryPostRepository::new();

        repo.save(post(5, "original")).await.unwrap();
        repo.save(post(5, "replaced")).await.unwrap();

        let stored = repo.find_by_id(5).await.unwrap().unwrap();
        assert_eq!(stored.title, "replaced");

        // The counter moved past the explicit id.
        let next = repo.save(post(0, "fresh")).await.unwrap();
        assert_eq!(next.id, 6);
    }

    #[tokio::test]
    async fn find_all_yields_ascending_id_order() {
        let repo = InMemoryPostRepository::with_posts([post(2, "two"), post(1, "one")]);

        let all = repo.find_all().await.unwrap();
        let ids: Vec<i32> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let repo = InMemoryPostRepository::with_posts([post(1, "one")]);

        repo.delete_by_id(1).await.unwrap();
        repo.delete_by_id(1).await.unwrap();
        repo.delete_by_id(999).await.unwrap();

        assert!(repo.find_by_id(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn with_posts_seeds_counter_past_highest_id() {
        let repo = InMemoryPostRepository::with_posts([post(1, "one"), post(2, "two")]);

        let created = repo.save(post(0, "three")).await.unwrap();
        assert_eq!(created.id, 3);
    }
}
