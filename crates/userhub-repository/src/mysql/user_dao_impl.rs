//! MySQL user DAO implementation.

use crate::{dao::UserDao, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;
use userhub_core::{HubError, HubResult, Post, PostId, User, UserId};
use uuid::Uuid;

/// MySQL user DAO.
#[derive(Component)]
#[shaku(interface = UserDao)]
pub struct MySqlUserDao {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlUserDao {
    /// Creates a new MySQL user DAO.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: String, // UUID stored as CHAR(36)
    first_name: String,
    last_name: String,
    username: String,
    profile_image_location: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = HubError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| HubError::Internal(format!("Invalid UUID in database: {}", e)))?;

        Ok(User {
            id: UserId::from_uuid(id),
            first_name: row.first_name,
            last_name: row.last_name,
            username: row.username,
            profile_image_location: row.profile_image_location,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Database row representation of a post.
#[derive(Debug, FromRow)]
struct PostRow {
    id: String,
    user_id: String,
    title: String,
    body: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = HubError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| HubError::Internal(format!("Invalid UUID in database: {}", e)))?;
        let user_id = Uuid::parse_str(&row.user_id)
            .map_err(|e| HubError::Internal(format!("Invalid UUID in database: {}", e)))?;

        Ok(Post {
            id: PostId::from_uuid(id),
            user_id: UserId::from_uuid(user_id),
            title: row.title,
            body: row.body,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl UserDao for MySqlUserDao {
    async fn find_all(&self) -> HubResult<Vec<User>> {
        debug!("Fetching all users");

        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, first_name, last_name, username, profile_image_location,
                   created_at, updated_at
            FROM users
            ORDER BY created_at
            "#,
        )
        .fetch_all(self.pool.inner()?)
        .await?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn find_by_id(&self, id: UserId) -> HubResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, first_name, last_name, username, profile_image_location,
                   created_at, updated_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(self.pool.inner()?)
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn exists_by_id(&self, id: UserId) -> HubResult<bool> {
        let result: Option<i64> = sqlx::query_scalar("SELECT 1 FROM users WHERE id = ? LIMIT 1")
            .bind(id.to_string())
            .fetch_optional(self.pool.inner()?)
            .await?;

        Ok(result.is_some())
    }

    async fn count(&self) -> HubResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool.inner()?)
            .await?;

        Ok(count as u64)
    }

    async fn insert(&self, user: &User) -> HubResult<User> {
        debug!("Inserting user: {}", user.id);

        sqlx::query(
            r#"
            INSERT INTO users (id, first_name, last_name, username,
                               profile_image_location, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.username)
        .bind(&user.profile_image_location)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(self.pool.inner()?)
        .await?;

        // MySQL has no RETURNING; insert then select
        self.find_by_id(user.id)
            .await?
            .ok_or_else(|| HubError::Internal("Failed to fetch inserted user".to_string()))
    }

    async fn update(&self, user: &User) -> HubResult<User> {
        debug!("Updating user: {}", user.id);

        sqlx::query(
            r#"
            UPDATE users
            SET first_name = ?, last_name = ?, username = ?,
                profile_image_location = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.username)
        .bind(&user.profile_image_location)
        .bind(user.updated_at)
        .bind(user.id.to_string())
        .execute(self.pool.inner()?)
        .await?;

        self.find_by_id(user.id)
            .await?
            .ok_or_else(|| HubError::Internal("Failed to fetch updated user".to_string()))
    }

    async fn delete_by_id(&self, id: UserId) -> HubResult<bool> {
        debug!("Deleting user: {}", id);

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(self.pool.inner()?)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn all_ids(&self) -> HubResult<Vec<UserId>> {
        debug!("Fetching all user ids");

        let ids: Vec<String> = sqlx::query_scalar("SELECT id FROM users ORDER BY created_at")
            .fetch_all(self.pool.inner()?)
            .await?;

        ids.into_iter()
            .map(|raw| {
                Uuid::parse_str(&raw)
                    .map(UserId::from_uuid)
                    .map_err(|e| HubError::Internal(format!("Invalid UUID in database: {}", e)))
            })
            .collect()
    }

    async fn update_image_location(&self, location: &str, id: UserId) -> HubResult<u64> {
        debug!("Updating image location for user {}: {}", id, location);

        let result = sqlx::query("UPDATE users SET profile_image_location = ? WHERE id = ?")
            .bind(location)
            .bind(id.to_string())
            .execute(self.pool.inner()?)
            .await?;

        Ok(result.rows_affected())
    }

    async fn find_posts_by_user(&self, id: UserId) -> HubResult<Vec<Post>> {
        debug!("Fetching posts for user: {}", id);

        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, user_id, title, body, created_at
            FROM posts
            WHERE user_id = ?
            ORDER BY created_at
            "#,
        )
        .bind(id.to_string())
        .fetch_all(self.pool.inner()?)
        .await?;

        rows.into_iter().map(Post::try_from).collect()
    }
}

impl std::fmt::Debug for MySqlUserDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlUserDao").finish_non_exhaustive()
    }
}
