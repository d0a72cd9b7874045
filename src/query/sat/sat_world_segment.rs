use crate::math::{Real, Vector};
use crate::shape::WorldSegment;

impl WorldSegment {
    /// The signed distance between the segment `[ta, tb]` thickened by `radius` and the plane
    /// `{ x | dot(n, x) = d }`.
    ///
    /// This is `min(dot(n, ta), dot(n, tb)) - radius - d`: positive when the whole shape lies
    /// on the side `n` points to, and more negative the deeper it crosses the plane.
    #[inline]
    pub fn distance_on_plane(&self, n: &Vector<Real>, d: Real, radius: Real) -> Real {
        let da = n.dot(&self.ta.coords) - radius;
        let db = n.dot(&self.tb.coords) - radius;

        da.min(db) - d
    }
}
