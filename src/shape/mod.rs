//! Shapes supported by capsule2d.

pub use self::segment_shape::{SegmentShape, SegmentShapeError};
#[doc(inline)]
pub use self::shape::{Shape, ShapeType};
pub use self::world_segment::WorldSegment;

mod segment_shape;
mod shape;
mod world_segment;
