//! DAO (Data Access Object) interfaces.

pub mod user_dao;

pub use user_dao::UserDao;
