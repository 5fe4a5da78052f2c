pub mod layout;
pub mod sync;
pub mod transform;
pub mod view;

pub use layout::*;
pub use sync::*;
pub use transform::*;
pub use view::*;
