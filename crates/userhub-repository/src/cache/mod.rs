//! Distributed cache handles.

pub mod cache_keys;
pub mod redis_list;
pub mod shared_list;

pub use redis_list::RedisListService;
pub use redis_list::RedisListServiceParameters;
pub use shared_list::SharedListInterface;
