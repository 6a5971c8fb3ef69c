pub mod touch;
pub mod transform;

pub use touch::InputState;
pub use transform::{ScrollUpdate, ZoomTransform};
