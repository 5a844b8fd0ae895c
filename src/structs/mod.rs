pub mod holding;
pub use holding::*;

pub mod allocation;
pub use allocation::*;

pub mod selection;
pub use selection::*;

pub mod profile;
pub use profile::*;

pub mod transaction;
pub use transaction::*;

pub mod session;
pub use session::*;

pub mod route;
pub use route::*;
