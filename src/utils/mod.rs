pub mod format;
pub use format::*;

pub mod email;
pub use email::*;
