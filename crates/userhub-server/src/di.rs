//! Dependency injection module using Shaku.
//!
//! One module wires the whole stack: database pool, MySQL DAO, Redis list
//! handle, S3 blob store, the cached repository facade, and the user
//! service.

use std::sync::Arc;
use userhub_config::AppConfig;
use userhub_core::{module, HasComponent, HubError, HubResult};
use userhub_repository::{
    CachedUserRepository, DatabasePool, DatabasePoolInterface, DatabasePoolParameters,
    MySqlUserDao, RedisListService, RedisListServiceParameters, SharedListInterface,
    UserRepository,
};
use userhub_service::{S3BlobStore, S3BlobStoreParameters, UserService, UserServiceComponent};

module! {
    pub AppModule {
        components = [
            DatabasePool,
            MySqlUserDao,
            RedisListService,
            S3BlobStore,
            CachedUserRepository,
            UserServiceComponent,
        ],
        providers = [],
    }
}

/// Builds the application module with all dependencies.
pub async fn build_app_module(config: &AppConfig) -> HubResult<Arc<AppModule>> {
    // Connect the database pool (async operation)
    let database = DatabasePool::connect(&config.database).await?;
    let pool = database.inner()?.clone();

    // Create the Redis pool (if enabled)
    let cache_pool = if config.redis.enabled {
        let redis_cfg = deadpool_redis::Config::from_url(&config.redis.url);
        let pool = redis_cfg
            .create_pool(Some(deadpool_redis::Runtime::Tokio1))
            .map_err(|e| HubError::Cache(format!("Failed to create Redis pool: {}", e)))?;
        Some(Arc::new(pool))
    } else {
        None
    };

    let module = AppModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters { pool: Some(pool) })
        .with_component_parameters::<RedisListService>(RedisListServiceParameters {
            pool: cache_pool,
            command_timeout: config.redis.command_timeout(),
        })
        .with_component_parameters::<S3BlobStore>(S3BlobStoreParameters {
            client: S3BlobStore::build_client(&config.blob_store),
            bucket: config.blob_store.bucket.clone(),
        })
        .build();

    Ok(Arc::new(module))
}

/// Trait for resolving the user service from the module.
pub trait ServiceResolver {
    /// Resolves the user service.
    fn user_service(&self) -> Arc<dyn UserService>;
}

impl ServiceResolver for AppModule {
    fn user_service(&self) -> Arc<dyn UserService> {
        self.resolve()
    }
}

/// Trait for resolving data-layer components from the module.
pub trait RepositoryResolver {
    /// Resolves the user repository facade.
    fn user_repository(&self) -> Arc<dyn UserRepository>;

    /// Resolves the database pool.
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;

    /// Resolves the shared-list cache handle.
    fn cache(&self) -> Arc<dyn SharedListInterface>;
}

impl RepositoryResolver for AppModule {
    fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.resolve()
    }

    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }

    fn cache(&self) -> Arc<dyn SharedListInterface> {
        self.resolve()
    }
}
