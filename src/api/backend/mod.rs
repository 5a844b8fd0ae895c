pub mod query;
pub use query::*;

pub mod client;
pub use client::*;

pub mod auth;
pub use auth::*;
