pub mod context;
pub mod reducer;

pub use context::*;
pub use reducer::*;
