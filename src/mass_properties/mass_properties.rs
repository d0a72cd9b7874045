use crate::math::{AngularInertia, Isometry, Point, Real, Vector};
use approx::{AbsDiffEq, RelativeEq};
use core::ops::{Add, AddAssign};
use na::ComplexField;
use num::Zero;

#[inline]
fn inv(val: Real) -> Real {
    if val == 0.0 {
        0.0
    } else {
        1.0 / val
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// The local mass properties of a rigid-body.
pub struct MassProperties {
    /// The center of mass of a rigid-body expressed in its local-space.
    pub local_com: Point<Real>,
    /// The inverse of the mass of a rigid-body.
    ///
    /// If this is zero, the rigid-body is assumed to have infinite mass.
    pub inv_mass: Real,
    /// The inverse of the square root of the angular inertia of the rigid-body, taken about
    /// its center of mass.
    ///
    /// Zero means the angular inertia is infinite.
    pub inv_principal_inertia_sqrt: AngularInertia<Real>,
}

impl MassProperties {
    /// Initializes the mass properties with the given center-of-mass, mass, and angular inertia.
    ///
    /// The center-of-mass is specified in the local-space of the rigid-body and the
    /// angular inertia is taken about that center-of-mass.
    pub fn new(local_com: Point<Real>, mass: Real, principal_inertia: Real) -> Self {
        let inv_mass = inv(mass);
        let inv_principal_inertia_sqrt = inv(ComplexField::sqrt(principal_inertia));
        Self {
            local_com,
            inv_mass,
            inv_principal_inertia_sqrt,
        }
    }

    /// The mass of the rigid-body.
    pub fn mass(&self) -> Real {
        inv(self.inv_mass)
    }

    /// The angular inertia of the rigid-body about its center of mass.
    pub fn principal_inertia(&self) -> AngularInertia<Real> {
        inv(self.inv_principal_inertia_sqrt * self.inv_principal_inertia_sqrt)
    }

    /// The world-space center of mass of the rigid-body.
    pub fn world_com(&self, pos: &Isometry<Real>) -> Point<Real> {
        pos * self.local_com
    }

    /// The angular inertia about a point shifted by `shift` from the center of mass
    /// (parallel axis theorem).
    pub(crate) fn shifted_inertia(&self, shift: Vector<Real>) -> Real {
        let i = self.principal_inertia();

        if self.inv_mass != 0.0 {
            i + shift.norm_squared() * self.mass()
        } else {
            i
        }
    }

    /// Transform the center of mass of these mass-properties.
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        Self {
            local_com: m * self.local_com,
            inv_mass: self.inv_mass,
            inv_principal_inertia_sqrt: self.inv_principal_inertia_sqrt,
        }
    }
}

impl Zero for MassProperties {
    fn zero() -> Self {
        Self {
            inv_mass: 0.0,
            inv_principal_inertia_sqrt: 0.0,
            local_com: Point::origin(),
        }
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl Add<MassProperties> for MassProperties {
    type Output = Self;

    fn add(self, other: MassProperties) -> Self {
        if self.is_zero() {
            return other;
        } else if other.is_zero() {
            return self;
        }

        let m1 = self.mass();
        let m2 = other.mass();
        let inv_mass = inv(m1 + m2);
        let local_com = (self.local_com * m1 + other.local_com.coords * m2) * inv_mass;
        let i1 = self.shifted_inertia(local_com - self.local_com);
        let i2 = other.shifted_inertia(local_com - other.local_com);
        let inv_principal_inertia_sqrt = inv(ComplexField::sqrt(i1 + i2));

        Self {
            local_com,
            inv_mass,
            inv_principal_inertia_sqrt,
        }
    }
}

impl AddAssign<MassProperties> for MassProperties {
    fn add_assign(&mut self, rhs: MassProperties) {
        *self = *self + rhs
    }
}

impl AbsDiffEq for MassProperties {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.local_com.abs_diff_eq(&other.local_com, epsilon)
            && self.inv_mass.abs_diff_eq(&other.inv_mass, epsilon)
            && self
                .inv_principal_inertia_sqrt
                .abs_diff_eq(&other.inv_principal_inertia_sqrt, epsilon)
    }
}

impl RelativeEq for MassProperties {
    fn default_max_relative() -> Self::Epsilon {
        1.0e-6
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.local_com
            .relative_eq(&other.local_com, epsilon, max_relative)
            && self
                .inv_mass
                .relative_eq(&other.inv_mass, epsilon, max_relative)
            && self.inv_principal_inertia_sqrt.relative_eq(
                &other.inv_principal_inertia_sqrt,
                epsilon,
                max_relative,
            )
    }
}
