//! Mass properties (mass, inertia, center-of-mass) of shapes.

pub use self::mass_properties::MassProperties;
pub use self::mass_properties_segment::{
    area_for_segment, centroid_for_segment, inertia_for_segment,
};

mod mass_properties;
mod mass_properties_segment;
