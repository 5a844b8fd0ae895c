pub mod waitlist;
pub use waitlist::*;

pub mod login;
pub use login::*;

pub mod onboarding;
pub use onboarding::*;

pub mod explore;
pub use explore::*;

pub mod portfolio;
pub use portfolio::*;

pub mod header;
pub use header::*;
