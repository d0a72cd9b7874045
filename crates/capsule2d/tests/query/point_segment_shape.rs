use capsule2d::math::{Isometry, Point, Real, Vector};
use capsule2d::shape::{SegmentShape, Shape};

fn horizontal_segment() -> SegmentShape {
    let mut shape = SegmentShape::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 1.0);
    let _ = shape.cache_data(&Isometry::identity());
    shape
}

#[test]
fn cap_vs_flank_classification() {
    let shape = horizontal_segment();

    assert!(shape.point_query(&Point::new(5.0, 0.5)));
    assert!(!shape.point_query(&Point::new(5.0, 1.5)));
    assert!(shape.point_query(&Point::new(-0.5, 0.0)));
    assert!(!shape.point_query(&Point::new(-1.5, 0.0)));
}

#[test]
fn reversed_endpoints_give_the_same_answers() {
    let mut shape = SegmentShape::new(Point::new(10.0, 0.0), Point::new(0.0, 0.0), 1.0);
    let world = *shape.cache_data(&Isometry::identity());
    let reference = horizontal_segment();

    for i in -30..=30 {
        for j in -15..=15 {
            let pt = Point::new(i as Real * 0.4 + 5.0, j as Real * 0.1);
            assert_eq!(
                world.point_query(&pt, 1.0),
                reference.point_query(&pt),
                "Mismatch at {pt:?}"
            );
        }
    }
}

#[test]
fn contained_points_lie_within_bounds() {
    let mut rng = oorandom::Rand32::new(1234);

    for _ in 0..200 {
        let a = Point::new(rng.rand_float() * 10.0 - 5.0, rng.rand_float() * 10.0 - 5.0);
        let b = Point::new(rng.rand_float() * 10.0 - 5.0, rng.rand_float() * 10.0 - 5.0);
        let radius = rng.rand_float() * 2.0;
        let pos = Isometry::new(
            Vector::new(rng.rand_float() * 20.0 - 10.0, rng.rand_float() * 20.0 - 10.0),
            rng.rand_float() * 6.28,
        );

        let mut shape = SegmentShape::new(a, b, radius);
        let world = *shape.cache_data(&pos);

        for _ in 0..50 {
            let pt = world.bounds.center()
                + Vector::new(rng.rand_float() - 0.5, rng.rand_float() - 0.5)
                    .component_mul(&world.bounds.extents())
                    * 1.5;

            if world.point_query(&pt, radius) {
                assert!(
                    world.bounds.contains_local_point(&pt),
                    "Point {pt:?} accepted outside of {:?}",
                    world.bounds
                );
            }
        }
    }
}

#[test]
fn point_query_matches_distance_to_segment() {
    let mut rng = oorandom::Rand32::new(99);

    for _ in 0..200 {
        let a = Point::new(rng.rand_float() * 10.0 - 5.0, rng.rand_float() * 10.0 - 5.0);
        let b = Point::new(rng.rand_float() * 10.0 - 5.0, rng.rand_float() * 10.0 - 5.0);
        let radius = rng.rand_float() * 2.0 + 0.1;
        let pos = Isometry::new(
            Vector::new(rng.rand_float() * 20.0 - 10.0, rng.rand_float() * 20.0 - 10.0),
            rng.rand_float() * 6.28,
        );

        let mut shape = SegmentShape::new(a, b, radius);
        if shape.length() < 0.1 {
            continue;
        }
        let world = *shape.cache_data(&pos);

        for _ in 0..50 {
            let pt = world.bounds.center()
                + Vector::new(rng.rand_float() - 0.5, rng.rand_float() - 0.5)
                    .component_mul(&world.bounds.extents())
                    * 1.2;

            // Reference: distance to the closest point of [ta, tb].
            let ab = world.tb - world.ta;
            let t = ((pt - world.ta).dot(&ab) / ab.norm_squared()).clamp(0.0, 1.0);
            let dist = (pt - (world.ta + ab * t)).norm();

            // Skip points too close to the boundary for the comparison to be meaningful.
            if (dist - radius).abs() < 1.0e-3 {
                continue;
            }

            assert_eq!(
                world.point_query(&pt, radius),
                dist < radius,
                "Point {pt:?} at distance {dist} from a segment of radius {radius}"
            );
        }
    }
}

#[test]
fn radius_edit_applies_without_refresh() {
    let mut shape: Box<dyn Shape> = Box::new(SegmentShape::new(
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        2.0,
    ));
    let _ = shape.cache_data(&Isometry::identity());
    assert!(shape.point_query(&Point::new(5.0, 1.5)));

    let segment = shape.as_segment_shape_mut().unwrap();
    segment.radius = 1.0;
    segment.finish_verts();

    assert!(!shape.point_query(&Point::new(5.0, 1.5)));
    assert_eq!(shape.distance_on_plane(&Vector::y(), 0.0), -1.0);
}
