use capsule2d::bounding_volume::{Aabb, BoundingVolume};
use capsule2d::math::{Isometry, Point, Real, Vector};
use capsule2d::shape::{SegmentShape, Shape};

#[test]
fn bounds_are_expanded_by_radius() {
    let mut shape = SegmentShape::new(Point::new(3.0, -1.0), Point::new(-2.0, 4.0), 0.5);
    let world = shape.cache_data(&Isometry::identity());

    assert_eq!(world.ta, Point::new(3.0, -1.0));
    assert_eq!(world.tb, Point::new(-2.0, 4.0));
    assert_eq!(
        world.bounds,
        Aabb::new(Point::new(-2.5, -1.5), Point::new(3.5, 4.5))
    );
}

#[test]
fn bounds_are_invalid_before_first_refresh() {
    let shape = SegmentShape::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0), 0.5);

    assert!(shape.cached().is_none());
    assert!(!shape.bounds().is_valid());
}

#[test]
fn refresh_overwrites_previous_cache() {
    let mut shape = SegmentShape::new(Point::new(0.0, 0.0), Point::new(2.0, 0.0), 0.5);
    let first = *shape.cache_data(&Isometry::translation(10.0, 0.0));
    let second = *shape.cache_data(&Isometry::translation(-10.0, 3.0));

    assert_ne!(first, second);
    assert_eq!(shape.cached(), Some(&second));
    assert_eq!(second.ta, Point::new(-10.0, 3.0));
    assert_eq!(second.tb, Point::new(-8.0, 3.0));
    assert!(!second.bounds.intersects(&first.bounds));
}

#[test]
fn local_geometry_is_untouched_by_refresh() {
    let mut shape = SegmentShape::new(Point::new(0.0, 0.0), Point::new(2.0, 0.0), 0.5);
    let normal = shape.normal();
    let _ = shape.cache_data(&Isometry::new(Vector::new(1.0, 2.0), 2.0));

    assert_eq!(shape.a, Point::new(0.0, 0.0));
    assert_eq!(shape.b, Point::new(2.0, 0.0));
    assert_eq!(shape.normal(), normal);
}

#[test]
fn cached_normal_is_unit_and_rotates_with_body() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..1000 {
        let a = Point::new(rng.rand_float() * 20.0 - 10.0, rng.rand_float() * 20.0 - 10.0);
        let b = Point::new(rng.rand_float() * 20.0 - 10.0, rng.rand_float() * 20.0 - 10.0);
        let radius = rng.rand_float() * 3.0;
        let pos = Isometry::new(
            Vector::new(rng.rand_float() * 100.0 - 50.0, rng.rand_float() * 100.0 - 50.0),
            rng.rand_float() * 6.28,
        );

        let mut shape = SegmentShape::new(a, b, radius);
        if shape.length() < 0.1 {
            continue;
        }

        let world = *shape.cache_data(&pos);
        let rotated_normal = pos.rotation * shape.normal().into_inner();

        assert!((world.tn.norm() - 1.0).abs() < 1.0e-4);
        assert!((world.tn - rotated_normal).norm() < 1.0e-3);
        assert!(world.bounds.is_valid());
        assert!(world.bounds.contains_local_point(&world.ta));
        assert!(world.bounds.contains_local_point(&world.tb));

        let extents = world.bounds.extents();
        let span = world.tb - world.ta;
        let tolerance: Real = 1.0e-3;
        assert!((extents.x - span.x.abs() - 2.0 * radius).abs() < tolerance);
        assert!((extents.y - span.y.abs() - 2.0 * radius).abs() < tolerance);
    }
}

#[test]
fn dyn_cache_data_returns_bounds() {
    let mut shape: Box<dyn Shape> = Box::new(SegmentShape::new(
        Point::new(0.0, 0.0),
        Point::new(0.0, 4.0),
        1.0,
    ));

    let bounds = *shape.cache_data(&Isometry::translation(1.0, 1.0));
    assert_eq!(bounds, Aabb::new(Point::new(0.0, 0.0), Point::new(2.0, 6.0)));
    assert_eq!(*shape.bounds(), bounds);
}
