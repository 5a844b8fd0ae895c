pub mod allocation;
pub use allocation::*;

pub mod chart;
pub use chart::*;

pub mod performance;
pub use performance::*;

pub mod positions;
pub use positions::*;
