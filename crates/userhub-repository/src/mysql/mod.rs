//! MySQL implementations of the DAO interfaces.

pub mod user_dao_impl;

pub use user_dao_impl::MySqlUserDao;
