//! Pure domain types with minimal dependencies
//!
//! Nothing here knows about rendering or input devices.

pub mod error;
pub mod geometry;
pub mod point;
pub mod point_set;

pub use error::CanvasError;
pub use geometry::*;
pub use point::*;
pub use point_set::*;
