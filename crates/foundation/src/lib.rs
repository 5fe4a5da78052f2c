pub mod geo;
pub mod mercator;
pub mod viewport;

// Foundation crate: small, well-tested primitives only.
pub use geo::*;
pub use mercator::*;
pub use viewport::*;
