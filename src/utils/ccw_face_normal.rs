use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};

/// Computes the direction obtained by rotating the oriented segment `pts[0] -> pts[1]`
/// by a quarter turn counter-clockwise, i.e., `normalize((-ab.y, ab.x))`.
///
/// Returns `None` if the segment is degenerate.
#[inline]
pub fn ccw_face_normal(pts: [&Point<Real>; 2]) -> Option<UnitVector<Real>> {
    let ab = *pts[1] - *pts[0];
    let res = Vector::new(-ab.y, ab.x);

    UnitVector::try_new(res, DEFAULT_EPSILON)
}

/// Same as [`ccw_face_normal`] but falls back to the `+Y` axis if the segment is degenerate.
#[inline]
pub fn ccw_face_normal_or_y(pts: [&Point<Real>; 2]) -> UnitVector<Real> {
    ccw_face_normal(pts).unwrap_or_else(Vector::y_axis)
}
