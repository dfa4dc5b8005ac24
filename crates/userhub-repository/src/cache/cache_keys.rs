//! Cache key generators for consistent key naming.

/// Prefix for all cache keys to namespace them.
const CACHE_PREFIX: &str = "userhub:cache";

/// List of all known user IDs, in insertion order.
#[must_use]
pub fn user_id_roster() -> String {
    format!("{}:user:ids", CACHE_PREFIX)
}

/// Name corpus for synthetic user generation, one `first,last` line each.
#[must_use]
pub fn name_corpus() -> String {
    format!("{}:user:names", CACHE_PREFIX)
}
