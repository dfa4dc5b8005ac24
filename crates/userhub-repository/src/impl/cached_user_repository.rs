//! `CachedUserRepository` — write-through facade over the store and the
//! Redis ID roster.
//!
//! Ordering is the sole consistency mechanism: within one `save` or
//! `delete`, the store write completes (or fails) before the roster is
//! touched. There is no distributed transaction across the two. A roster
//! mutation that fails after a durable store write leaves the roster stale
//! until the next operation touches that ID; that window is accepted and
//! logged, never surfaced to the caller.

use crate::{
    cache::{cache_keys, SharedListInterface},
    dao::UserDao,
    traits::UserRepository,
};
use async_trait::async_trait;
use rand::Rng;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info, warn};
use userhub_core::{HubResult, Post, User, UserId};

/// Upper bound on stale-entry retries within a single random pick.
const MAX_PICK_ATTEMPTS: usize = 3;

/// Repository facade combining the store DAO with the shared ID roster.
#[derive(Component)]
#[shaku(interface = UserRepository)]
pub struct CachedUserRepository {
    /// Durable store access.
    #[shaku(inject)]
    user_dao: Arc<dyn UserDao>,
    /// Cluster-shared list handle.
    #[shaku(inject)]
    cache: Arc<dyn SharedListInterface>,
}

impl CachedUserRepository {
    /// Creates a new facade over the given DAO and cache handle.
    #[must_use]
    pub fn new(user_dao: Arc<dyn UserDao>, cache: Arc<dyn SharedListInterface>) -> Self {
        Self { user_dao, cache }
    }

    /// Store-only random pick, used when the cache is disabled.
    ///
    /// Pays an ID projection scan instead of the O(1) roster read.
    async fn pick_random_store_only(&self) -> HubResult<Option<User>> {
        let ids = self.user_dao.all_ids().await?;
        if ids.is_empty() {
            return Ok(None);
        }
        let index = rand::thread_rng().gen_range(0..ids.len());
        self.user_dao.find_by_id(ids[index]).await
    }
}

#[async_trait]
impl UserRepository for CachedUserRepository {
    async fn find_all(&self) -> HubResult<Vec<User>> {
        debug!("Repository: find_all");
        self.user_dao.find_all().await
    }

    async fn find_by_id(&self, id: UserId) -> HubResult<Option<User>> {
        debug!("Repository: find_by_id {}", id);
        self.user_dao.find_by_id(id).await
    }

    async fn exists(&self, id: UserId) -> HubResult<bool> {
        self.user_dao.exists_by_id(id).await
    }

    async fn count(&self) -> HubResult<u64> {
        self.user_dao.count().await
    }

    async fn save(&self, user: &User) -> HubResult<User> {
        let saved = self.user_dao.insert(user).await?;
        debug!("Repository: saved user {}", saved.id);

        if let Err(e) = self
            .cache
            .push(&cache_keys::user_id_roster(), &saved.id.to_string())
            .await
        {
            warn!(
                "Roster append failed after durable save of {}: {}",
                saved.id, e
            );
        }

        Ok(saved)
    }

    async fn update(&self, user: &User) -> HubResult<User> {
        debug!("Repository: update user {}", user.id);
        // The ID is already on the roster; appending again would skew
        // random selection toward updated users.
        self.user_dao.update(user).await
    }

    async fn delete(&self, id: UserId) -> HubResult<bool> {
        let deleted = self.user_dao.delete_by_id(id).await?;
        debug!("Repository: delete user {} -> {}", id, deleted);

        if deleted {
            if let Err(e) = self
                .cache
                .remove(&cache_keys::user_id_roster(), &id.to_string())
                .await
            {
                warn!("Roster removal failed after durable delete of {}: {}", id, e);
            }
        }

        Ok(deleted)
    }

    async fn pick_random(&self) -> HubResult<Option<User>> {
        if !self.cache.is_enabled() {
            debug!("Cache disabled, picking random user from store");
            return self.pick_random_store_only().await;
        }

        let roster = cache_keys::user_id_roster();

        for _ in 0..MAX_PICK_ATTEMPTS {
            // The index bound comes from the roster itself, never from the
            // store count: the two can disagree and indexing past the
            // sequence must be impossible.
            let len = self.cache.len(&roster).await?;
            if len == 0 {
                return Ok(None);
            }

            let index = rand::thread_rng().gen_range(0..len);
            let Some(raw) = self.cache.get(&roster, index).await? else {
                // Concurrent removal shrank the list between LLEN and LINDEX
                continue;
            };

            let id = match UserId::parse(&raw) {
                Ok(id) => id,
                Err(_) => {
                    warn!("Removing malformed roster entry '{}'", raw);
                    if let Err(e) = self.cache.remove(&roster, &raw).await {
                        warn!("Failed to remove malformed roster entry: {}", e);
                    }
                    continue;
                }
            };

            match self.user_dao.find_by_id(id).await? {
                Some(user) => return Ok(Some(user)),
                None => {
                    // Stale entry: the user is gone from the store. Heal the
                    // roster and retry.
                    warn!("Removing stale roster entry {}", id);
                    if let Err(e) = self.cache.remove(&roster, &raw).await {
                        warn!("Failed to remove stale roster entry {}: {}", id, e);
                    }
                }
            }
        }

        Ok(None)
    }

    async fn update_image_location(&self, location: &str, id: UserId) -> HubResult<u64> {
        debug!("Repository: update_image_location {} -> {}", id, location);
        self.user_dao.update_image_location(location, id).await
    }

    async fn find_posts(&self, id: UserId) -> HubResult<Vec<Post>> {
        debug!("Repository: find_posts for {}", id);
        self.user_dao.find_posts_by_user(id).await
    }

    async fn warm_start(&self) -> HubResult<()> {
        if !self.cache.is_enabled() {
            debug!("Cache disabled, skipping roster warm start");
            return Ok(());
        }

        let roster = cache_keys::user_id_roster();
        if !self.cache.is_empty(&roster).await? {
            let len = self.cache.len(&roster).await?;
            info!("User ID roster already populated ({} ids)", len);
            return Ok(());
        }

        let ids: Vec<String> = self
            .user_dao
            .all_ids()
            .await?
            .iter()
            .map(ToString::to_string)
            .collect();

        let populated = self.cache.fill_if_absent(&roster, &ids).await?;
        info!(
            "User ID roster warm start: populated={}, ids={}",
            populated,
            ids.len()
        );
        Ok(())
    }
}

impl std::fmt::Debug for CachedUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedUserRepository").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use userhub_core::{HubError, PostId};

    // =========================================================================
    // Mock DAO implementation
    // =========================================================================

    struct InMemoryUserDao {
        users: Mutex<Vec<User>>,
        posts: Mutex<Vec<Post>>,
    }

    impl InMemoryUserDao {
        fn new() -> Self {
            Self {
                users: Mutex::new(Vec::new()),
                posts: Mutex::new(Vec::new()),
            }
        }

        fn with_users(users: Vec<User>) -> Self {
            let dao = Self::new();
            *dao.users.lock().unwrap() = users;
            dao
        }

        fn add_post(&self, post: Post) {
            self.posts.lock().unwrap().push(post);
        }
    }

    #[async_trait]
    impl UserDao for InMemoryUserDao {
        async fn find_all(&self) -> HubResult<Vec<User>> {
            Ok(self.users.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: UserId) -> HubResult<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.id == id)
                .cloned())
        }

        async fn exists_by_id(&self, id: UserId) -> HubResult<bool> {
            Ok(self.users.lock().unwrap().iter().any(|u| u.id == id))
        }

        async fn count(&self) -> HubResult<u64> {
            Ok(self.users.lock().unwrap().len() as u64)
        }

        async fn insert(&self, user: &User) -> HubResult<User> {
            let mut users = self.users.lock().unwrap();
            if users.iter().any(|u| u.id == user.id) {
                return Err(HubError::conflict(format!("duplicate id {}", user.id)));
            }
            users.push(user.clone());
            Ok(user.clone())
        }

        async fn update(&self, user: &User) -> HubResult<User> {
            let mut users = self.users.lock().unwrap();
            match users.iter_mut().find(|u| u.id == user.id) {
                Some(existing) => {
                    *existing = user.clone();
                    Ok(user.clone())
                }
                None => Err(HubError::internal(format!("no such user {}", user.id))),
            }
        }

        async fn delete_by_id(&self, id: UserId) -> HubResult<bool> {
            let mut users = self.users.lock().unwrap();
            let before = users.len();
            users.retain(|u| u.id != id);
            Ok(users.len() < before)
        }

        async fn all_ids(&self) -> HubResult<Vec<UserId>> {
            Ok(self.users.lock().unwrap().iter().map(|u| u.id).collect())
        }

        async fn update_image_location(&self, location: &str, id: UserId) -> HubResult<u64> {
            let mut users = self.users.lock().unwrap();
            match users.iter_mut().find(|u| u.id == id) {
                Some(user) => {
                    user.profile_image_location = Some(location.to_string());
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        async fn find_posts_by_user(&self, id: UserId) -> HubResult<Vec<Post>> {
            Ok(self
                .posts
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.user_id == id)
                .cloned()
                .collect())
        }
    }

    // =========================================================================
    // Mock shared-list implementations
    // =========================================================================

    struct InMemorySharedList {
        lists: Mutex<HashMap<String, Vec<String>>>,
        enabled: bool,
    }

    impl InMemorySharedList {
        fn new() -> Self {
            Self {
                lists: Mutex::new(HashMap::new()),
                enabled: true,
            }
        }

        fn disabled() -> Self {
            Self {
                lists: Mutex::new(HashMap::new()),
                enabled: false,
            }
        }

        fn seed(&self, list: &str, values: Vec<String>) {
            self.lists.lock().unwrap().insert(list.to_string(), values);
        }

        fn snapshot(&self, list: &str) -> Vec<String> {
            self.lists
                .lock()
                .unwrap()
                .get(list)
                .cloned()
                .unwrap_or_default()
        }
    }

    #[async_trait]
    impl SharedListInterface for InMemorySharedList {
        fn is_enabled(&self) -> bool {
            self.enabled
        }

        async fn push(&self, list: &str, value: &str) -> HubResult<()> {
            if !self.enabled {
                return Ok(());
            }
            self.lists
                .lock()
                .unwrap()
                .entry(list.to_string())
                .or_default()
                .push(value.to_string());
            Ok(())
        }

        async fn remove(&self, list: &str, value: &str) -> HubResult<bool> {
            if !self.enabled {
                return Ok(false);
            }
            let mut lists = self.lists.lock().unwrap();
            if let Some(values) = lists.get_mut(list) {
                if let Some(pos) = values.iter().position(|v| v == value) {
                    values.remove(pos);
                    return Ok(true);
                }
            }
            Ok(false)
        }

        async fn get(&self, list: &str, index: u64) -> HubResult<Option<String>> {
            if !self.enabled {
                return Ok(None);
            }
            Ok(self
                .lists
                .lock()
                .unwrap()
                .get(list)
                .and_then(|values| values.get(index as usize).cloned()))
        }

        async fn len(&self, list: &str) -> HubResult<u64> {
            if !self.enabled {
                return Ok(0);
            }
            Ok(self
                .lists
                .lock()
                .unwrap()
                .get(list)
                .map_or(0, |values| values.len() as u64))
        }

        async fn fill_if_absent(&self, list: &str, values: &[String]) -> HubResult<bool> {
            if !self.enabled {
                return Ok(false);
            }
            let mut lists = self.lists.lock().unwrap();
            // A fully drained list no longer exists, mirroring Redis
            let absent = lists.get(list).map_or(true, Vec::is_empty);
            if absent {
                lists.insert(list.to_string(), values.to_vec());
            }
            Ok(absent)
        }
    }

    /// Shared list whose mutators always fail, for partial-failure tests.
    struct FailingSharedList;

    #[async_trait]
    impl SharedListInterface for FailingSharedList {
        fn is_enabled(&self) -> bool {
            true
        }

        async fn push(&self, _list: &str, _value: &str) -> HubResult<()> {
            Err(HubError::Cache("connection refused".to_string()))
        }

        async fn remove(&self, _list: &str, _value: &str) -> HubResult<bool> {
            Err(HubError::Cache("connection refused".to_string()))
        }

        async fn get(&self, _list: &str, _index: u64) -> HubResult<Option<String>> {
            Err(HubError::Cache("connection refused".to_string()))
        }

        async fn len(&self, _list: &str) -> HubResult<u64> {
            Err(HubError::Cache("connection refused".to_string()))
        }

        async fn fill_if_absent(&self, _list: &str, _values: &[String]) -> HubResult<bool> {
            Err(HubError::Cache("connection refused".to_string()))
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn create_user(first: &str, last: &str) -> User {
        let username = format!(
            "{}{}",
            &first.to_lowercase()[..1],
            last.to_lowercase()
        );
        User::new(first.to_string(), last.to_string(), username)
    }

    fn create_repo(
        dao: InMemoryUserDao,
        cache: InMemorySharedList,
    ) -> (CachedUserRepository, Arc<InMemorySharedList>) {
        let cache = Arc::new(cache);
        let repo = CachedUserRepository::new(Arc::new(dao), cache.clone());
        (repo, cache)
    }

    // =========================================================================
    // Read path
    // =========================================================================

    #[tokio::test]
    async fn test_find_by_id_absent_and_exists_false() {
        let (repo, _) = create_repo(InMemoryUserDao::new(), InMemorySharedList::new());
        let id = UserId::new();

        assert!(repo.find_by_id(id).await.unwrap().is_none());
        assert!(!repo.exists(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_save_then_find_returns_equal_record() {
        let (repo, cache) = create_repo(InMemoryUserDao::new(), InMemorySharedList::new());
        let user = create_user("Ann", "Lee");

        let saved = repo.save(&user).await.unwrap();
        assert_eq!(saved, user);

        let found = repo.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(found.first_name, "Ann");
        assert_eq!(found.last_name, "Lee");
        assert_eq!(found, user);

        // The roster tracks the new ID
        let roster = cache.snapshot(&cache_keys::user_id_roster());
        assert_eq!(roster, vec![user.id.to_string()]);
    }

    #[tokio::test]
    async fn test_find_posts_delegates_to_store() {
        let dao = InMemoryUserDao::new();
        let user = create_user("Ann", "Lee");
        dao.users.lock().unwrap().push(user.clone());
        dao.add_post(Post {
            id: PostId::new(),
            user_id: user.id,
            title: "hello".to_string(),
            body: "first post".to_string(),
            created_at: chrono::Utc::now(),
        });

        let (repo, _) = create_repo(dao, InMemorySharedList::new());
        let posts = repo.find_posts(user.id).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "hello");

        let none = repo.find_posts(UserId::new()).await.unwrap();
        assert!(none.is_empty());
    }

    // =========================================================================
    // Write path and roster maintenance
    // =========================================================================

    #[tokio::test]
    async fn test_update_does_not_duplicate_roster_entry() {
        let (repo, cache) = create_repo(InMemoryUserDao::new(), InMemorySharedList::new());
        let mut user = create_user("Ann", "Lee");

        repo.save(&user).await.unwrap();
        user.apply_update("Anna".to_string(), "Lee".to_string());
        repo.update(&user).await.unwrap();

        let roster = cache.snapshot(&cache_keys::user_id_roster());
        assert_eq!(roster.len(), 1);

        let found = repo.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(found.first_name, "Anna");
    }

    #[tokio::test]
    async fn test_delete_removes_store_record_and_roster_entry() {
        let (repo, cache) = create_repo(InMemoryUserDao::new(), InMemorySharedList::new());
        let user = create_user("Ann", "Lee");
        repo.save(&user).await.unwrap();

        let deleted = repo.delete(user.id).await.unwrap();
        assert!(deleted);
        assert!(!repo.exists(user.id).await.unwrap());
        assert!(cache.snapshot(&cache_keys::user_id_roster()).is_empty());
    }

    #[tokio::test]
    async fn test_delete_nonexistent_leaves_roster_untouched() {
        let (repo, cache) = create_repo(InMemoryUserDao::new(), InMemorySharedList::new());
        let user = create_user("Ann", "Lee");
        repo.save(&user).await.unwrap();

        let deleted = repo.delete(UserId::new()).await.unwrap();
        assert!(!deleted);
        assert_eq!(cache.snapshot(&cache_keys::user_id_roster()).len(), 1);
    }

    #[tokio::test]
    async fn test_save_succeeds_when_roster_append_fails() {
        let dao = InMemoryUserDao::new();
        let repo = CachedUserRepository::new(Arc::new(dao), Arc::new(FailingSharedList));
        let user = create_user("Ann", "Lee");

        // Durability was achieved; the cache failure is absorbed
        let saved = repo.save(&user).await.unwrap();
        assert_eq!(saved.id, user.id);
        assert!(repo.exists(user.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_succeeds_when_roster_removal_fails() {
        let dao = InMemoryUserDao::new();
        let user = create_user("Ann", "Lee");
        dao.users.lock().unwrap().push(user.clone());
        let repo = CachedUserRepository::new(Arc::new(dao), Arc::new(FailingSharedList));

        assert!(repo.delete(user.id).await.unwrap());
        assert!(!repo.exists(user.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_three_user_scenario() {
        let (repo, _) = create_repo(InMemoryUserDao::new(), InMemorySharedList::new());
        let a = create_user("Ann", "Archer");
        let b = create_user("Bob", "Berg");
        let c = create_user("Cay", "Cole");

        repo.save(&a).await.unwrap();
        repo.save(&b).await.unwrap();
        repo.save(&c).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![a.clone(), b.clone(), c.clone()]);

        assert!(repo.delete(b.id).await.unwrap());

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![a.clone(), c.clone()]);
        assert!(!repo.exists(b.id).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    // =========================================================================
    // Targeted image-location update
    // =========================================================================

    #[tokio::test]
    async fn test_update_image_location_visible_on_store_read() {
        let (repo, _) = create_repo(InMemoryUserDao::new(), InMemorySharedList::new());
        let user = create_user("Ann", "Lee");
        repo.save(&user).await.unwrap();

        let location = format!("{}/photo.png", user.id);
        let affected = repo.update_image_location(&location, user.id).await.unwrap();
        assert_eq!(affected, 1);

        let found = repo.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(found.profile_image_location, Some(location));
    }

    #[tokio::test]
    async fn test_update_image_location_unknown_user_affects_nothing() {
        let (repo, _) = create_repo(InMemoryUserDao::new(), InMemorySharedList::new());
        let affected = repo
            .update_image_location("x/photo.png", UserId::new())
            .await
            .unwrap();
        assert_eq!(affected, 0);
    }

    // =========================================================================
    // Random pick
    // =========================================================================

    #[tokio::test]
    async fn test_pick_random_empty_store_returns_none() {
        let (repo, _) = create_repo(InMemoryUserDao::new(), InMemorySharedList::new());
        assert!(repo.pick_random().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_pick_random_single_user() {
        let (repo, _) = create_repo(InMemoryUserDao::new(), InMemorySharedList::new());
        let user = create_user("Ann", "Lee");
        repo.save(&user).await.unwrap();

        let picked = repo.pick_random().await.unwrap().unwrap();
        assert_eq!(picked.id, user.id);
    }

    #[tokio::test]
    async fn test_pick_random_never_returns_deleted_user() {
        let (repo, _) = create_repo(InMemoryUserDao::new(), InMemorySharedList::new());
        let keep = create_user("Ann", "Lee");
        let gone = create_user("Bob", "Berg");
        repo.save(&keep).await.unwrap();
        repo.save(&gone).await.unwrap();
        repo.delete(gone.id).await.unwrap();

        for _ in 0..200 {
            let picked = repo.pick_random().await.unwrap().unwrap();
            assert_eq!(picked.id, keep.id);
        }
    }

    #[tokio::test]
    async fn test_pick_random_uniformity() {
        // With K users and N draws, each user should be picked roughly N/K
        // times. Bounds are ~5 sigma wide so the test is effectively
        // deterministic.
        let (repo, _) = create_repo(InMemoryUserDao::new(), InMemorySharedList::new());
        let users = vec![
            create_user("Ann", "Archer"),
            create_user("Bob", "Berg"),
            create_user("Cay", "Cole"),
            create_user("Dee", "Dunn"),
        ];
        for user in &users {
            repo.save(user).await.unwrap();
        }

        let draws = 4000;
        let mut counts: HashMap<UserId, u32> = HashMap::new();
        for _ in 0..draws {
            let picked = repo.pick_random().await.unwrap().unwrap();
            *counts.entry(picked.id).or_default() += 1;
        }

        assert_eq!(counts.len(), users.len());
        for user in &users {
            let count = counts[&user.id];
            assert!(
                (850..=1150).contains(&count),
                "user {} picked {} times out of {}",
                user.username,
                count,
                draws
            );
        }
    }

    #[tokio::test]
    async fn test_pick_random_heals_stale_roster_entry() {
        let dao = InMemoryUserDao::new();
        let present = create_user("Ann", "Lee");
        dao.users.lock().unwrap().push(present.clone());

        let cache = InMemorySharedList::new();
        let stale_id = UserId::new();
        cache.seed(
            &cache_keys::user_id_roster(),
            vec![stale_id.to_string(), present.id.to_string()],
        );

        let (repo, cache) = create_repo(dao, cache);

        // Keep drawing until the stale entry has been hit and removed
        for _ in 0..50 {
            let picked = repo.pick_random().await.unwrap().unwrap();
            assert_eq!(picked.id, present.id);
            if cache.snapshot(&cache_keys::user_id_roster()).len() == 1 {
                break;
            }
        }
        // The stale entry is gone with overwhelming probability after 50
        // draws; the present user is always the one returned either way
        assert!(cache
            .snapshot(&cache_keys::user_id_roster())
            .contains(&present.id.to_string()));
    }

    #[tokio::test]
    async fn test_pick_random_removes_malformed_roster_entry() {
        let cache = InMemorySharedList::new();
        cache.seed(&cache_keys::user_id_roster(), vec!["garbage".to_string()]);
        let (repo, cache) = create_repo(InMemoryUserDao::new(), cache);

        let picked = repo.pick_random().await.unwrap();
        assert!(picked.is_none());
        assert!(cache.snapshot(&cache_keys::user_id_roster()).is_empty());
    }

    #[tokio::test]
    async fn test_pick_random_with_disabled_cache_falls_back_to_store() {
        let dao = InMemoryUserDao::with_users(vec![
            create_user("Ann", "Archer"),
            create_user("Bob", "Berg"),
            create_user("Cay", "Cole"),
        ]);
        let repo = CachedUserRepository::new(Arc::new(dao), Arc::new(InMemorySharedList::disabled()));

        let mut seen: HashMap<UserId, u32> = HashMap::new();
        for _ in 0..200 {
            let picked = repo.pick_random().await.unwrap().unwrap();
            *seen.entry(picked.id).or_default() += 1;
        }
        assert_eq!(seen.len(), 3);
    }

    // =========================================================================
    // Warm start
    // =========================================================================

    #[tokio::test]
    async fn test_warm_start_populates_empty_roster() {
        let users = vec![create_user("Ann", "Archer"), create_user("Bob", "Berg")];
        let expected: Vec<String> = users.iter().map(|u| u.id.to_string()).collect();
        let dao = InMemoryUserDao::with_users(users);

        let (repo, cache) = create_repo(dao, InMemorySharedList::new());
        repo.warm_start().await.unwrap();

        assert_eq!(cache.snapshot(&cache_keys::user_id_roster()), expected);
    }

    #[tokio::test]
    async fn test_warm_start_is_idempotent() {
        let users = vec![create_user("Ann", "Archer"), create_user("Bob", "Berg")];
        let dao = InMemoryUserDao::with_users(users);
        let (repo, cache) = create_repo(dao, InMemorySharedList::new());

        repo.warm_start().await.unwrap();
        let first = cache.snapshot(&cache_keys::user_id_roster());

        repo.warm_start().await.unwrap();
        let second = cache.snapshot(&cache_keys::user_id_roster());

        assert_eq!(first, second);
        assert_eq!(second.len(), 2);
    }

    #[tokio::test]
    async fn test_warm_start_does_not_overwrite_populated_roster() {
        let dao = InMemoryUserDao::with_users(vec![create_user("Ann", "Archer")]);
        let cache = InMemorySharedList::new();
        cache.seed(&cache_keys::user_id_roster(), vec!["existing".to_string()]);

        let (repo, cache) = create_repo(dao, cache);
        repo.warm_start().await.unwrap();

        assert_eq!(
            cache.snapshot(&cache_keys::user_id_roster()),
            vec!["existing".to_string()]
        );
    }

    #[tokio::test]
    async fn test_warm_start_with_disabled_cache_is_noop() {
        let dao = InMemoryUserDao::with_users(vec![create_user("Ann", "Archer")]);
        let repo = CachedUserRepository::new(Arc::new(dao), Arc::new(InMemorySharedList::disabled()));
        assert!(repo.warm_start().await.is_ok());
    }
}
