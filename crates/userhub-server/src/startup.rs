//! Startup sequence: migrations and cache warm start.

use crate::di::{AppModule, RepositoryResolver, ServiceResolver};
use tracing::{info, warn};
use userhub_core::HubResult;

/// Prepares the application before accepting traffic.
///
/// Migrations are fatal on failure; warm-start failures only degrade the
/// cache paths (the repository falls back to the store), so they are
/// logged and swallowed.
pub async fn prepare(module: &AppModule) -> HubResult<()> {
    module.database_pool().run_migrations().await?;

    if let Err(e) = module.user_repository().warm_start().await {
        warn!("User ID roster warm start failed: {}", e);
    }

    if let Err(e) = module.user_service().warm_start().await {
        warn!("Name corpus warm start failed: {}", e);
    }

    info!("Startup sequence complete");
    Ok(())
}
