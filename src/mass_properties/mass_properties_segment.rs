use crate::mass_properties::MassProperties;
use crate::math::{Point, Real};

/// The area of the segment `[a, b]` thickened by `radius`.
///
/// This is the area of a rectangle of length `|b - a|` and width `2 * radius`, plus the
/// disk formed by the two half-disk caps.
#[inline]
pub fn area_for_segment(a: &Point<Real>, b: &Point<Real>, radius: Real) -> Real {
    let pi = na::convert::<f64, Real>(core::f64::consts::PI);
    radius * (pi * radius + 2.0 * na::distance(a, b))
}

/// The centroid of the segment `[a, b]`, i.e., its midpoint.
#[inline]
pub fn centroid_for_segment(a: &Point<Real>, b: &Point<Real>) -> Point<Real> {
    na::center(a, b)
}

/// The angular inertia of a thin rod `[a, b]` of the given `mass`, taken about the
/// origin of the frame `a` and `b` are expressed in.
///
/// The rounded caps are ignored: `mass * (|b - a|² / 12 + |(a + b) / 2|²)`.
#[inline]
pub fn inertia_for_segment(mass: Real, a: &Point<Real>, b: &Point<Real>) -> Real {
    let length_sq = na::distance_squared(a, b);
    let offset = centroid_for_segment(a, b).coords;
    mass * (length_sq / 12.0 + offset.norm_squared())
}

impl MassProperties {
    /// Computes the mass properties of the segment `[a, b]` thickened by `radius`.
    ///
    /// The mass is `density * area`, the center of mass is the segment midpoint, and the
    /// angular inertia is the one of a thin rod taken about that midpoint.
    pub fn from_segment(density: Real, a: Point<Real>, b: Point<Real>, radius: Real) -> Self {
        let mass = area_for_segment(&a, &b, radius) * density;
        let com = centroid_for_segment(&a, &b);
        let inertia = inertia_for_segment(mass, &(a - com.coords), &(b - com.coords));

        Self::new(com, mass, inertia)
    }
}
