use crate::bounding_volume::{details::rounded_segment_aabb, Aabb};
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::SegmentShape;
use crate::utils;

/// The world-space data of a [`SegmentShape`], refreshed once per simulation step.
///
/// This is the view returned by [`SegmentShape::cache_data`]. The point, vertex and
/// separating-axis queries are all answered from it, with the radius supplied by the
/// caller so that radius edits apply without a refresh. A default-constructed value holds
/// zeros and an invalid AABB: it is a placeholder, not a valid cache.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct WorldSegment {
    /// The world-space position of the first endpoint.
    pub ta: Point<Real>,
    /// The world-space position of the second endpoint.
    pub tb: Point<Real>,
    /// The world-space unit normal of the segment, `ta -> tb` rotated counter-clockwise.
    pub tn: Vector<Real>,
    /// The world-space AABB of the thickened segment.
    pub bounds: Aabb,
}

impl Default for WorldSegment {
    fn default() -> Self {
        Self {
            ta: Point::origin(),
            tb: Point::origin(),
            tn: Vector::zeros(),
            bounds: Aabb::new_invalid(),
        }
    }
}

impl WorldSegment {
    /// Computes the world-space data of `shape` placed at `pos`.
    pub fn new(shape: &SegmentShape, pos: &Isometry<Real>) -> Self {
        let ta = pos * shape.a;
        let tb = pos * shape.b;
        let tn = utils::ccw_face_normal_or_y([&ta, &tb]).into_inner();
        let bounds = rounded_segment_aabb(&ta, &tb, shape.radius);

        Self {
            ta,
            tb,
            tn,
            bounds,
        }
    }

    /// The two world-space endpoints, in vertex index order.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 2] {
        [self.ta, self.tb]
    }
}
