mod notification_insert;
mod notification_type;

pub use notification_insert::*;
pub use notification_type::*;
