pub mod waitlist_service;
pub use waitlist_service::*;

pub mod profiles_service;
pub use profiles_service::*;

pub mod transactions_service;
pub use transactions_service::*;
