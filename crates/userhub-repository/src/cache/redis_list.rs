//! Redis-backed shared-list implementation.

use super::SharedListInterface;
use async_trait::async_trait;
use deadpool_redis::Pool;
use redis::{AsyncCommands, RedisError, Script};
use shaku::Component;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use userhub_core::{HubError, HubResult};

/// Default per-command timeout.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(5);

/// Atomically creates and fills a list only when it does not exist yet.
const FILL_IF_ABSENT_SCRIPT: &str = r#"
if redis.call('EXISTS', KEYS[1]) == 0 then
  if #ARGV > 0 then
    redis.call('RPUSH', KEYS[1], unpack(ARGV))
  end
  return 1
else
  return 0
end
"#;

/// Redis-backed shared list service.
#[derive(Component)]
#[shaku(interface = SharedListInterface)]
pub struct RedisListService {
    /// Redis connection pool.
    pool: Option<Arc<Pool>>,
    /// Per-command timeout.
    #[shaku(default = DEFAULT_COMMAND_TIMEOUT)]
    command_timeout: Duration,
}

impl RedisListService {
    /// Create a new Redis list service.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self {
            pool: Some(pool),
            command_timeout: DEFAULT_COMMAND_TIMEOUT,
        }
    }

    /// Create a list service with a custom command timeout.
    #[must_use]
    pub fn with_timeout(pool: Arc<Pool>, command_timeout: Duration) -> Self {
        Self {
            pool: Some(pool),
            command_timeout,
        }
    }

    /// Create a no-op list service (for when Redis is disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            pool: None,
            command_timeout: DEFAULT_COMMAND_TIMEOUT,
        }
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> HubResult<deadpool_redis::Connection> {
        let pool = match &self.pool {
            Some(pool) => pool,
            None => return Err(HubError::Cache("Cache is disabled".to_string())),
        };

        match tokio::time::timeout(self.command_timeout, pool.get()).await {
            Ok(Ok(conn)) => Ok(conn),
            Ok(Err(e)) => Err(HubError::Cache(format!(
                "Failed to get Redis connection: {}",
                e
            ))),
            Err(_) => Err(HubError::Timeout(
                "Timed out acquiring Redis connection".to_string(),
            )),
        }
    }

    /// Runs a Redis command under the configured timeout.
    async fn run<T>(
        &self,
        op: &str,
        fut: impl Future<Output = Result<T, RedisError>>,
    ) -> HubResult<T> {
        match tokio::time::timeout(self.command_timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(HubError::Cache(format!("{} failed: {}", op, e))),
            Err(_) => Err(HubError::Timeout(format!("cache {} timed out", op))),
        }
    }
}

#[async_trait]
impl SharedListInterface for RedisListService {
    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    async fn push(&self, list: &str, value: &str) -> HubResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let mut conn = self.get_conn().await?;
        let _: i64 = self.run("RPUSH", conn.rpush(list, value)).await?;

        debug!("Appended to list '{}'", list);
        Ok(())
    }

    async fn remove(&self, list: &str, value: &str) -> HubResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let mut conn = self.get_conn().await?;
        let removed: i64 = self.run("LREM", conn.lrem(list, 1, value)).await?;

        debug!("Removed {} element(s) from list '{}'", removed, list);
        Ok(removed > 0)
    }

    async fn get(&self, list: &str, index: u64) -> HubResult<Option<String>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let mut conn = self.get_conn().await?;
        let value: Option<String> = self.run("LINDEX", conn.lindex(list, index as isize)).await?;

        Ok(value)
    }

    async fn len(&self, list: &str) -> HubResult<u64> {
        if !self.is_enabled() {
            return Ok(0);
        }

        let mut conn = self.get_conn().await?;
        let len: u64 = self.run("LLEN", conn.llen(list)).await?;

        Ok(len)
    }

    async fn fill_if_absent(&self, list: &str, values: &[String]) -> HubResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let mut conn = self.get_conn().await?;
        let script = Script::new(FILL_IF_ABSENT_SCRIPT);
        let created: i64 = self
            .run(
                "fill_if_absent",
                script.key(list).arg(values).invoke_async(&mut conn),
            )
            .await?;

        debug!(
            "fill_if_absent on '{}': created={}, candidate values={}",
            list,
            created == 1,
            values.len()
        );
        Ok(created == 1)
    }
}

impl std::fmt::Debug for RedisListService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisListService")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
