mod answer;
mod document_created;

pub use answer::*;
pub use document_created::*;
