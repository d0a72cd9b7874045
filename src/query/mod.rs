//! Non-persistent geometric queries.
//!
//! The queries answered by a segment shape are implemented on its world-space cache,
//! [`WorldSegment`](crate::shape::WorldSegment), obtained from
//! [`SegmentShape::cache_data`](crate::shape::SegmentShape::cache_data):
//!
//! * [`point`] for point inclusion and vertex picking.
//! * [`sat`] for the plane distance used by separating-axis tests.

pub mod point;
pub mod sat;
