use crate::math::{Point, Real};
use crate::shape::WorldSegment;
use na::ComplexField;

impl WorldSegment {
    /// Tests if the world-space point `pt` lies strictly within `radius` of the segment
    /// `[ta, tb]`.
    ///
    /// The AABB rejection uses the cached `bounds`, so growing the radius past the value
    /// used by the last refresh is only seen in full after the next one.
    ///
    /// The point is classified along the segment tangent: before `ta` (inclusive) and past
    /// `tb` it is tested against the round caps, in between it only has to be close enough
    /// to the segment's line.
    pub fn point_query(&self, pt: &Point<Real>, radius: Real) -> bool {
        if !self.bounds.contains_local_point(pt) {
            return false;
        }

        let dn = self.tn.dot(&pt.coords) - self.ta.coords.dot(&self.tn);
        if ComplexField::abs(dn) > radius {
            return false;
        }

        // Projections on the tangent axis, which is `tn` rotated clockwise.
        let dt = pt.coords.perp(&self.tn);
        let dta = self.ta.coords.perp(&self.tn);
        let dtb = self.tb.coords.perp(&self.tn);
        let radius_sq = radius * radius;

        if dt <= dta {
            if dt < dta - radius {
                return false;
            }

            na::distance_squared(&self.ta, pt) < radius_sq
        } else if dt > dtb {
            if dt > dtb + radius {
                return false;
            }

            na::distance_squared(&self.tb, pt) < radius_sq
        } else {
            true
        }
    }

    /// The index of the world-space endpoint closer than `min_dist` to `pt`: `0` for `ta`,
    /// `1` for `tb`.
    ///
    /// `ta` is checked first, so it wins if both endpoints are close enough.
    pub fn find_vertex_by_point(&self, pt: &Point<Real>, min_dist: Real) -> Option<u32> {
        let min_dist_sq = min_dist * min_dist;

        if na::distance_squared(&self.ta, pt) < min_dist_sq {
            return Some(0);
        }

        if na::distance_squared(&self.tb, pt) < min_dist_sq {
            return Some(1);
        }

        None
    }
}
