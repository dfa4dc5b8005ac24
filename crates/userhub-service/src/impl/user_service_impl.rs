//! User service implementation.

use crate::blob::BlobStoreInterface;
use crate::dto::{CreateUserRequest, UpdateUserRequest, UserDto};
use crate::names;
use crate::user_service::{derive_username, ProfileImage, UserService};
use async_trait::async_trait;
use rand::Rng;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, error, info};
use userhub_core::{HubError, HubResult, User, UserId, ValidateExt};
use userhub_repository::{cache_keys, SharedListInterface, UserRepository};

/// User service component.
#[derive(Component)]
#[shaku(interface = UserService)]
pub struct UserServiceComponent {
    #[shaku(inject)]
    user_repository: Arc<dyn UserRepository>,
    #[shaku(inject)]
    cache: Arc<dyn SharedListInterface>,
    #[shaku(inject)]
    blob_store: Arc<dyn BlobStoreInterface>,
}

impl UserServiceComponent {
    /// Creates a new user service.
    #[must_use]
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        cache: Arc<dyn SharedListInterface>,
        blob_store: Arc<dyn BlobStoreInterface>,
    ) -> Self {
        Self {
            user_repository,
            cache,
            blob_store,
        }
    }

    /// Draws a random `(first, last)` pair from the cached corpus, falling
    /// back to the embedded corpus when the cache is disabled or empty.
    async fn random_name(&self) -> HubResult<(String, String)> {
        let corpus_key = cache_keys::name_corpus();

        if self.cache.is_enabled() {
            let len = self.cache.len(&corpus_key).await?;
            if len > 0 {
                let index = rand::thread_rng().gen_range(0..len);
                if let Some(line) = self.cache.get(&corpus_key, index).await? {
                    if let Some(name) = names::parse_line(&line) {
                        return Ok(name);
                    }
                    debug!("Skipping malformed corpus line '{}'", line);
                }
            }
        }

        let corpus = names::corpus();
        if corpus.is_empty() {
            return Err(HubError::internal("Name corpus is empty"));
        }
        let index = rand::thread_rng().gen_range(0..corpus.len());
        let (first, last) = &corpus[index];
        Ok((first.clone(), last.clone()))
    }
}

#[async_trait]
impl UserService for UserServiceComponent {
    async fn get_all_users(&self) -> HubResult<Vec<UserDto>> {
        info!("Get all users");
        let users = self.user_repository.find_all().await?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }

    async fn get_user(&self, id: UserId) -> HubResult<UserDto> {
        info!("Get user: {}", id);
        match self.user_repository.find_by_id(id).await? {
            Some(user) => Ok(UserDto::from(user)),
            None => {
                info!("No user exists for id {}", id);
                Ok(UserDto::not_found(id))
            }
        }
    }

    async fn get_user_with_posts(&self, id: UserId) -> HubResult<UserDto> {
        info!("Get posts for user id: {}", id);
        let Some(user) = self.user_repository.find_by_id(id).await? else {
            info!("No user exists for id {}", id);
            return Ok(UserDto::not_found(id));
        };

        let posts = self.user_repository.find_posts(id).await?;
        Ok(UserDto::from(user).with_posts(posts.into_iter().map(Into::into).collect()))
    }

    async fn add_user(&self, request: CreateUserRequest) -> HubResult<UserDto> {
        request.validate_request()?;

        let user = User::new(request.first_name, request.last_name, request.username);
        let saved = self.user_repository.save(&user).await?;

        info!("Added new user with id: {}", saved.id);
        Ok(UserDto::from(saved))
    }

    async fn add_user_with_image(
        &self,
        request: CreateUserRequest,
        filename: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> HubResult<UserDto> {
        request.validate_request()?;

        // Store the user first: the ID names the object folder
        let user = User::new(request.first_name, request.last_name, request.username);
        let saved = self.user_repository.save(&user).await?;

        let location = format!("{}/{}", saved.id, filename);
        if let Err(e) = self.blob_store.put(&location, content_type, data).await {
            error!("Profile image upload failed for {}: {}", saved.id, e);
            return Ok(UserDto::failure("User creation failed", e.to_string()));
        }

        let affected = self
            .user_repository
            .update_image_location(&location, saved.id)
            .await?;
        debug!(
            "Image location updated for {} ({} row(s) affected)",
            saved.id, affected
        );

        let mut dto = UserDto::from(saved);
        dto.profile_image_location = Some(location);
        Ok(dto)
    }

    async fn get_profile_image(&self, id: UserId) -> HubResult<ProfileImage> {
        info!("Getting profile image for id: {}", id);

        let user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| HubError::not_found("User", id))?;

        let location = user
            .profile_image_location
            .ok_or_else(|| HubError::not_found("ProfileImage", id))?;

        let filename = location
            .rsplit('/')
            .next()
            .unwrap_or(location.as_str())
            .to_string();

        let stat = self.blob_store.stat(&location).await?;
        let data = self.blob_store.get(&location).await?;

        Ok(ProfileImage {
            filename,
            content_type: stat.content_type,
            size: stat.size,
            data,
        })
    }

    async fn update_user(&self, request: UpdateUserRequest) -> HubResult<Option<UserDto>> {
        request.validate_request()?;

        let Some(mut user) = self.user_repository.find_by_id(request.id).await? else {
            info!("No user available for the id {}", request.id);
            return Ok(None);
        };

        user.apply_update(request.first_name, request.last_name);
        let updated = self.user_repository.update(&user).await?;

        info!("User updated: {}", updated.id);
        Ok(Some(UserDto::from(updated)))
    }

    async fn delete_user(&self, id: UserId) -> HubResult<UserDto> {
        info!("Deleting user with id: {}", id);

        if self.user_repository.exists(id).await? {
            self.user_repository.delete(id).await?;
            Ok(UserDto::with_message(format!("User deleted with id {}", id)))
        } else {
            Ok(UserDto::with_message(format!(
                "User not exists with id {}",
                id
            )))
        }
    }

    async fn get_random_user(&self) -> HubResult<Option<UserDto>> {
        info!("Get random user");
        Ok(self.user_repository.pick_random().await?.map(UserDto::from))
    }

    async fn add_random_user(&self) -> HubResult<UserDto> {
        let (first_name, last_name) = self.random_name().await?;
        let username = derive_username(&first_name, &last_name);

        let user = User::new(first_name, last_name, username);
        let saved = self.user_repository.save(&user).await?;

        info!("Added random user with id: {}", saved.id);
        Ok(UserDto::from(saved))
    }

    async fn warm_start(&self) -> HubResult<()> {
        if !self.cache.is_enabled() {
            debug!("Cache disabled, skipping name corpus warm start");
            return Ok(());
        }

        let lines = names::raw_lines();
        let populated = self
            .cache
            .fill_if_absent(&cache_keys::name_corpus(), &lines)
            .await?;
        info!(
            "Name corpus warm start: populated={}, names={}",
            populated,
            lines.len()
        );
        Ok(())
    }
}

impl std::fmt::Debug for UserServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceComponent").finish_non_exhaustive()
    }
}
