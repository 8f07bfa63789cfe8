mod database;
mod error;
mod tickets_repository;

pub use database::*;
pub use error::*;
pub use tickets_repository::*;
