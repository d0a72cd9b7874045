use capsule2d::math::{Isometry, Point};
use capsule2d::shape::SegmentShape;

#[test]
fn nearest_vertex_lookup() {
    let mut shape = SegmentShape::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 1.0);
    let _ = shape.cache_data(&Isometry::identity());

    assert_eq!(shape.find_vertex_by_point(&Point::new(0.1, 0.0), 0.5), Some(0));
    assert_eq!(shape.find_vertex_by_point(&Point::new(9.9, 0.0), 0.5), Some(1));
    assert_eq!(shape.find_vertex_by_point(&Point::new(5.0, 3.0), 0.5), None);
}

#[test]
fn first_vertex_wins_ties() {
    let mut shape = SegmentShape::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0), 0.1);
    let _ = shape.cache_data(&Isometry::identity());

    // Both endpoints are 0.5 away, well within 0.6.
    assert_eq!(shape.find_vertex_by_point(&Point::new(0.5, 0.0), 0.6), Some(0));
    assert_eq!(shape.find_vertex_by_point(&Point::new(0.5, 0.0), 0.5), None);
}

#[test]
fn lookup_uses_world_space_vertices() {
    let mut shape = SegmentShape::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0), 0.1);
    let world = *shape.cache_data(&Isometry::translation(5.0, 5.0));

    assert_eq!(world.vertices(), [Point::new(5.0, 5.0), Point::new(6.0, 5.0)]);
    assert_eq!(shape.find_vertex_by_point(&Point::new(0.0, 0.0), 0.5), None);
    assert_eq!(shape.find_vertex_by_point(&Point::new(6.0, 5.1), 0.5), Some(1));
}
