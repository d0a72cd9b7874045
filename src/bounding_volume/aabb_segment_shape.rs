use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::SegmentShape;

/// The AABB of the segment `[a, b]` thickened by `radius`.
///
/// The box spans the endpoints on each axis and is grown by `radius` on all four sides.
#[inline]
pub fn rounded_segment_aabb(a: &Point<Real>, b: &Point<Real>, radius: Real) -> Aabb {
    let mins = a.coords.inf(&b.coords) - Vector::repeat(radius);
    let maxs = a.coords.sup(&b.coords) + Vector::repeat(radius);
    Aabb::new(mins.into(), maxs.into())
}

impl SegmentShape {
    /// The axis-aligned bounding box of this segment shape transformed by `pos`.
    ///
    /// Unlike [`SegmentShape::cache_data`], this doesn't touch the world-space cache.
    #[inline]
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        rounded_segment_aabb(&(pos * self.a), &(pos * self.b), self.radius)
    }

    /// The axis-aligned bounding box of this segment shape in its local-space.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        rounded_segment_aabb(&self.a, &self.b, self.radius)
    }
}
