//! # UserHub Repository
//!
//! Data access layer with a cache-aside repository facade:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>   (domain interface)
//! CachedUserRepository            (facade — write-through store + ID roster)
//!   ↓  Arc<dyn UserDao>           ↓  Arc<dyn SharedListInterface>
//! MySqlUserDao                   RedisListService
//!   ↓                             ↓
//! MySQL                          Redis
//! ```
//!
//! The store is authoritative; the Redis ID roster is a derived, best-effort
//! mirror used for O(1) uniform random selection without a table scan.

pub mod cache;
pub mod dao;
pub mod r#impl;
pub mod mysql;
pub mod pool;
pub mod traits;

pub use cache::*;
pub use dao::UserDao;
pub use mysql::MySqlUserDao;
pub use pool::*;
pub use r#impl::CachedUserRepository;
pub use traits::*;
