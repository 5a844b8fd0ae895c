pub mod backend;
pub use backend::*;

pub mod mapping;
pub use mapping::*;

pub mod services;
pub use services::*;
