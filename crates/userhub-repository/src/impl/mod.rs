//! Repository implementations.

pub mod cached_user_repository;

pub use cached_user_repository::CachedUserRepository;
