mod checkpoints_repository;
mod error;
mod notifications_repository;

pub use checkpoints_repository::*;
pub use error::*;
pub use notifications_repository::*;
