//! Definition of the segment shape.

use crate::bounding_volume::Aabb;
use crate::mass_properties;
use crate::math::{Isometry, Point, Real, UnitVector, Vector};
use crate::shape::WorldSegment;
use crate::utils;
use na::ComplexField;

/// Error returned by [`SegmentShape::try_new`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SegmentShapeError {
    /// One coordinate of the endpoint `0` (`a`) or `1` (`b`) is NaN or infinite.
    #[error("the endpoint {0} of the segment shape is not finite.")]
    NonFiniteEndpoint(u32),
    /// The radius is NaN or infinite.
    #[error("the radius of the segment shape is not finite.")]
    NonFiniteRadius,
}

/// A segment thickened by a radius, i.e., a 2D capsule.
///
/// The endpoints `a`, `b` and the `radius` are expressed in the local-space of the body
/// this shape is attached to. After modifying any of them directly, call
/// [`SegmentShape::finish_verts`] to re-derive the normal and normalize the radius.
///
/// World-space queries require the cache computed by [`SegmentShape::cache_data`]:
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use capsule2d::math::{Isometry, Point};
/// use capsule2d::shape::SegmentShape;
///
/// let mut shape = SegmentShape::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 1.0);
/// let world = *shape.cache_data(&Isometry::translation(0.0, 2.0));
/// assert_eq!(world.find_vertex_by_point(&Point::new(0.1, 2.0), 0.5), Some(0));
///
/// assert!(shape.point_query(&Point::new(5.0, 2.5)));
/// assert!(!shape.point_query(&Point::new(5.0, 3.5)));
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct SegmentShape {
    /// The first endpoint, in local-space.
    pub a: Point<Real>,
    /// The second endpoint, in local-space.
    pub b: Point<Real>,
    /// The radius of the rounded part of the shape.
    pub radius: Real,
    normal: UnitVector<Real>,
    world: WorldSegment,
    is_cached: bool,
}

impl SegmentShape {
    /// Creates a new segment shape between `a` and `b`, thickened by `radius`.
    ///
    /// A negative `radius` is stored as its absolute value. If `a` and `b` coincide, the
    /// normal is set to the `+Y` axis.
    pub fn new(a: Point<Real>, b: Point<Real>, radius: Real) -> Self {
        let mut shape = SegmentShape {
            a,
            b,
            radius,
            normal: Vector::y_axis(),
            world: WorldSegment::default(),
            is_cached: false,
        };
        shape.finish_verts();
        shape
    }

    /// Creates a new segment shape, failing if any input is NaN or infinite.
    pub fn try_new(a: Point<Real>, b: Point<Real>, radius: Real) -> Result<Self, SegmentShapeError> {
        if !a.coords.iter().all(|e| e.is_finite()) {
            return Err(SegmentShapeError::NonFiniteEndpoint(0));
        }
        if !b.coords.iter().all(|e| e.is_finite()) {
            return Err(SegmentShapeError::NonFiniteEndpoint(1));
        }
        if !radius.is_finite() {
            return Err(SegmentShapeError::NonFiniteRadius);
        }

        Ok(Self::new(a, b, radius))
    }

    /// Re-derives the normal from the current endpoints and replaces the radius by its
    /// absolute value.
    pub fn finish_verts(&mut self) {
        self.normal = match utils::ccw_face_normal([&self.a, &self.b]) {
            Some(normal) => normal,
            None => {
                log::debug!(
                    "Degenerate segment shape at {:?}: falling back to the +Y normal.",
                    self.a
                );
                Vector::y_axis()
            }
        };
        self.radius = ComplexField::abs(self.radius);
    }

    /// A new segment shape built from the current endpoints and radius of `self`.
    ///
    /// The world-space cache is not copied.
    pub fn duplicate(&self) -> Self {
        Self::new(self.a, self.b, self.radius)
    }

    /// The local-space unit normal, `a -> b` rotated counter-clockwise.
    ///
    /// Only up to date after construction or [`SegmentShape::finish_verts`].
    #[inline]
    pub fn normal(&self) -> UnitVector<Real> {
        self.normal
    }

    /// The length of the segment `[a, b]`.
    #[inline]
    pub fn length(&self) -> Real {
        na::distance(&self.a, &self.b)
    }

    /// Does `a` coincide with `b`?
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        utils::ccw_face_normal([&self.a, &self.b]).is_none()
    }

    /// Translates both endpoints by `-center`.
    ///
    /// Neither the normal nor the world-space cache are updated.
    pub fn recenter(&mut self, center: &Point<Real>) {
        self.a -= center.coords;
        self.b -= center.coords;
    }

    /// Applies `pos` to both local-space endpoints.
    pub fn transform(&mut self, pos: &Isometry<Real>) {
        self.a = pos * self.a;
        self.b = pos * self.b;
    }

    /// Applies the inverse of `pos` to both local-space endpoints.
    pub fn untransform(&mut self, pos: &Isometry<Real>) {
        self.a = pos.inverse_transform_point(&self.a);
        self.b = pos.inverse_transform_point(&self.b);
    }

    /// The local-space area of this shape.
    pub fn area(&self) -> Real {
        mass_properties::area_for_segment(&self.a, &self.b, self.radius)
    }

    /// The local-space centroid of this shape.
    pub fn centroid(&self) -> Point<Real> {
        mass_properties::centroid_for_segment(&self.a, &self.b)
    }

    /// The angular inertia of this shape with the given `mass`, about the local-space origin.
    pub fn inertia(&self, mass: Real) -> Real {
        mass_properties::inertia_for_segment(mass, &self.a, &self.b)
    }

    /// Recomputes the world-space endpoints, normal, and AABB of this shape for the body
    /// position `pos`, and returns them.
    ///
    /// This must be called every step before any world-space query.
    pub fn cache_data(&mut self, pos: &Isometry<Real>) -> &WorldSegment {
        self.world = WorldSegment::new(self, pos);
        self.is_cached = true;
        &self.world
    }

    /// The world-space data computed by the last call to [`SegmentShape::cache_data`],
    /// or `None` if it was never called.
    #[inline]
    pub fn cached(&self) -> Option<&WorldSegment> {
        if self.is_cached {
            Some(&self.world)
        } else {
            None
        }
    }

    /// The world-space AABB computed by the last call to [`SegmentShape::cache_data`].
    ///
    /// Before the first refresh this is [`Aabb::new_invalid`].
    #[inline]
    pub fn bounds(&self) -> &Aabb {
        &self.world.bounds
    }

    #[inline]
    fn world(&self) -> &WorldSegment {
        debug_assert!(
            self.is_cached,
            "SegmentShape::cache_data must be called before any world-space query."
        );
        &self.world
    }

    /// Tests if the world-space point `pt` is inside of this shape.
    ///
    /// The current `radius` is used, even if it changed since the last refresh. See
    /// [`WorldSegment::point_query`].
    pub fn point_query(&self, pt: &Point<Real>) -> bool {
        self.world().point_query(pt, self.radius)
    }

    /// The index of the world-space endpoint closer than `min_dist` to `pt`, if any.
    ///
    /// See [`WorldSegment::find_vertex_by_point`].
    pub fn find_vertex_by_point(&self, pt: &Point<Real>, min_dist: Real) -> Option<u32> {
        self.world().find_vertex_by_point(pt, min_dist)
    }

    /// The signed distance between this shape and the plane `{ x | dot(n, x) = d }`.
    ///
    /// The current `radius` is used, even if it changed since the last refresh. See
    /// [`WorldSegment::distance_on_plane`].
    pub fn distance_on_plane(&self, n: &Vector<Real>, d: Real) -> Real {
        self.world().distance_on_plane(n, d, self.radius)
    }
}
