//! Various unsorted geometrical and logical operators.

pub use self::ccw_face_normal::{ccw_face_normal, ccw_face_normal_or_y};

mod ccw_face_normal;
