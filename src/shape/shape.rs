use crate::bounding_volume::Aabb;
use crate::mass_properties::MassProperties;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::SegmentShape;
use downcast_rs::{impl_downcast, DowncastSync};
use num_derive::FromPrimitive;

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// Enum representing the type of a shape.
///
/// Each variant has a fixed discriminant, and a raw integer can be converted back with
/// [`num_traits::FromPrimitive`].
pub enum ShapeType {
    /// A circle shape.
    Circle = 0,
    /// A convex polygon shape.
    Polygon = 1,
    /// A segment shape thickened by a radius.
    Segment = 2,
}

/// Trait implemented by shapes attached to rigid-bodies.
///
/// Every step, the owning body calls [`Shape::cache_data`] with its current position. All the
/// other queries taking world-space inputs are then answered against that cached data until
/// the next refresh.
pub trait Shape: DowncastSync {
    /// Gets the type tag of this shape.
    fn shape_type(&self) -> ShapeType;

    /// The world-space AABB computed by the last call to [`Shape::cache_data`].
    ///
    /// Before the first refresh this is [`Aabb::new_invalid`].
    fn bounds(&self) -> &Aabb;

    /// Refreshes the world-space cache of this shape for the body position `pos`.
    ///
    /// Returns the freshly computed world-space AABB.
    fn cache_data(&mut self, pos: &Isometry<Real>) -> &Aabb;

    /// Tests if the world-space point `pt` is inside of this shape.
    fn point_query(&self, pt: &Point<Real>) -> bool;

    /// The index of the world-space vertex closer than `min_dist` to `pt`, if any.
    fn find_vertex_by_point(&self, pt: &Point<Real>, min_dist: Real) -> Option<u32>;

    /// The signed distance between this shape and the plane `{ x | dot(n, x) = d }`.
    ///
    /// Negative values indicate the shape crosses the plane.
    fn distance_on_plane(&self, n: &Vector<Real>, d: Real) -> Real;

    /// The local-space area of this shape.
    fn area(&self) -> Real;

    /// The local-space centroid of this shape.
    fn centroid(&self) -> Point<Real>;

    /// The angular inertia of this shape with the given `mass`, taken about the local-space origin.
    fn inertia(&self, mass: Real) -> Real;

    /// Translates the local-space geometry of this shape by `-center`.
    fn recenter(&mut self, center: &Point<Real>);

    /// Applies `pos` to the local-space geometry of this shape.
    fn transform(&mut self, pos: &Isometry<Real>);

    /// Applies the inverse of `pos` to the local-space geometry of this shape.
    fn untransform(&mut self, pos: &Isometry<Real>);

    /// Builds an independent copy of this shape with a reset world-space cache.
    fn clone_shape(&self) -> Box<dyn Shape>;

    /// Compute the mass-properties of this shape given its uniform density.
    fn mass_properties(&self, density: Real) -> MassProperties {
        let mass = self.area() * density;
        let com = self.centroid();
        // `inertia` is taken about the local origin, move it back to the center of mass.
        let inertia = self.inertia(mass) - mass * com.coords.norm_squared();
        MassProperties::new(com, mass, inertia.max(0.0))
    }
}

impl_downcast!(sync Shape);

impl dyn Shape {
    /// Converts this abstract shape to the given shape, if it is one.
    pub fn as_shape<T: Shape>(&self) -> Option<&T> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to the given mutable shape, if it is one.
    pub fn as_shape_mut<T: Shape>(&mut self) -> Option<&mut T> {
        self.downcast_mut()
    }

    /// Converts this abstract shape to a segment shape, if it is one.
    pub fn as_segment_shape(&self) -> Option<&SegmentShape> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a mutable segment shape, if it is one.
    pub fn as_segment_shape_mut(&mut self) -> Option<&mut SegmentShape> {
        self.downcast_mut()
    }
}

impl Shape for SegmentShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Segment
    }

    fn bounds(&self) -> &Aabb {
        SegmentShape::bounds(self)
    }

    fn cache_data(&mut self, pos: &Isometry<Real>) -> &Aabb {
        &SegmentShape::cache_data(self, pos).bounds
    }

    fn point_query(&self, pt: &Point<Real>) -> bool {
        SegmentShape::point_query(self, pt)
    }

    fn find_vertex_by_point(&self, pt: &Point<Real>, min_dist: Real) -> Option<u32> {
        SegmentShape::find_vertex_by_point(self, pt, min_dist)
    }

    fn distance_on_plane(&self, n: &Vector<Real>, d: Real) -> Real {
        SegmentShape::distance_on_plane(self, n, d)
    }

    fn area(&self) -> Real {
        SegmentShape::area(self)
    }

    fn centroid(&self) -> Point<Real> {
        SegmentShape::centroid(self)
    }

    fn inertia(&self, mass: Real) -> Real {
        SegmentShape::inertia(self, mass)
    }

    fn recenter(&mut self, center: &Point<Real>) {
        SegmentShape::recenter(self, center)
    }

    fn transform(&mut self, pos: &Isometry<Real>) {
        SegmentShape::transform(self, pos)
    }

    fn untransform(&mut self, pos: &Isometry<Real>) {
        SegmentShape::untransform(self, pos)
    }

    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(self.duplicate())
    }
}
