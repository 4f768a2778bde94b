mod checkpoints_repository;
mod checkpoints_repository_impl;
mod dto;
mod entity;

pub use checkpoints_repository::*;
pub use checkpoints_repository_impl::*;
pub use dto::*;
