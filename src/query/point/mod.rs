//! Point inclusion and vertex picking.
//!
//! Both are inherent methods of [`WorldSegment`](crate::shape::WorldSegment):
//! `point_query` and `find_vertex_by_point`.

mod point_world_segment;
