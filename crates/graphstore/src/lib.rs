pub mod dataset;
pub mod store;

pub use dataset::*;
pub use store::*;
