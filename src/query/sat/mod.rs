//! Support functions for the Separating Axis Theorem (SAT).
//!
//! Two convex shapes do not intersect if and only if there exists an axis onto which their
//! projections do not overlap. Polygon-based collision routines test the face normals of
//! the polygon as candidate axes: for each face plane `{ x | dot(n, x) = d }`, they ask the
//! other shape how far it extends past that plane, using
//! [`WorldSegment::distance_on_plane`](crate::shape::WorldSegment::distance_on_plane).
//! A positive value on any face means the shapes are separated.

mod sat_world_segment;
