//! Business services sitting between transport and storage

pub mod users;

pub use users::UserService;
