pub mod error;
pub mod format;
pub mod geometry;
pub mod math;
pub mod wire;

pub use error::{PlanarError, Result};
pub use format::{FormatOptions, JsonCodec, Style};
pub use geometry::{Aabb, Circle, Path, Point, Polygon, Segment, Shape, Vector};
pub use math::intercept_2d::time_intercept;
pub use wire::{DriverValue, Geometry, WireValue};
