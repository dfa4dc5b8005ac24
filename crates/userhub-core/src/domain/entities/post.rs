//! Post entity — an opaque attached collection on a user.
//!
//! Posts are read-only from this service; they are loaded for the
//! "user with posts" view and never mutated here.

use crate::{Entity, PostId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post authored by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier for the post.
    pub id: PostId,

    /// Identifier of the authoring user.
    pub user_id: UserId,

    /// Post title.
    pub title: String,

    /// Post body.
    pub body: String,

    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Entity<PostId> for Post {
    fn id(&self) -> &PostId {
        &self.id
    }
}
