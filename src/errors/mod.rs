pub mod api;
pub use api::*;

pub mod mapping;
pub use mapping::*;

pub mod waitlist;
pub use waitlist::*;

pub mod config_error;
pub use config_error::*;
