mod handler_outcome;

pub use handler_outcome::*;
