mod checkpoint_find_entity;

pub use checkpoint_find_entity::*;
