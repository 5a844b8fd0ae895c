pub mod auth_mapping;
pub use auth_mapping::*;

pub mod profiles_mapping;
pub use profiles_mapping::*;

pub mod transactions_mapping;
pub use transactions_mapping::*;
