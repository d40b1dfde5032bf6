//! Property-based invariant tests for boundary clipping.
//!
//! For any shape and any direction away from its center:
//!
//! 1. Boundary membership: the clipped point lies on the outline (gauge 1)
//! 2. Direction preservation: center -> clipped points the same way as center -> target
//! 3. Positive distance: the clipped point is a finite, non-zero distance from the center
//! 4. Idempotence: clipping toward the clipped point returns the same point
//! 5. Diamond edge coverage: the quadrant-selected edge always yields a hit
//! 6. Polyline shape: only the first and last points change
//! 7. Degenerate direction: the center maps to itself

use edgeclip::{Point, Shape, ShapeKind, diamond_exit, trim_endpoint, trim_polyline};
use proptest::prelude::*;

const RELATIVE_TOLERANCE: f64 = 1e-6;

// ── Strategies ──────────────────────────────────────────────────────────

fn shape_kind() -> impl Strategy<Value = ShapeKind> {
    prop_oneof![
        Just(ShapeKind::Rectangle),
        Just(ShapeKind::Ellipse),
        Just(ShapeKind::Diamond),
    ]
}

/// Powers of ten from sub-picometre nodes up to giga-unit ones.
fn size_scale() -> impl Strategy<Value = f64> {
    (-12i32..=9).prop_map(|exp| 10f64.powi(exp))
}

fn scaled_shape(kind: impl Strategy<Value = ShapeKind>) -> impl Strategy<Value = Shape> {
    (
        kind,
        size_scale(),
        -1000.0f64..1000.0,
        -1000.0f64..1000.0,
        0.5f64..500.0,
        0.5f64..500.0,
    )
        .prop_map(|(kind, scale, cx, cy, width, height)| {
            Shape::new(
                kind,
                Point::new(cx * scale, cy * scale),
                width * scale,
                height * scale,
            )
        })
}

fn any_shape() -> impl Strategy<Value = Shape> {
    scaled_shape(shape_kind())
}

/// Target point given as an angle and a distance from the shape's center.
/// The distance is in hundredths of the shape's larger side.
fn polar() -> impl Strategy<Value = (f64, f64)> {
    (0.0f64..std::f64::consts::TAU, 0.01f64..5000.0)
}

fn toward(shape: &Shape, (angle, dist): (f64, f64)) -> Point {
    let reach = dist * shape.width.max(shape.height) / 100.0;
    Point::new(
        shape.center.x + angle.cos() * reach,
        shape.center.y + angle.sin() * reach,
    )
}

fn unit(from: Point, to: Point) -> (f64, f64) {
    let len = from.distance(to);
    ((to.x - from.x) / len, (to.y - from.y) / len)
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2048))]

    #[test]
    fn clipped_point_lies_on_outline(shape in any_shape(), p in polar()) {
        let hit = trim_endpoint(&shape, toward(&shape, p));
        let gauge = shape.gauge(hit);
        prop_assert!(
            (gauge - 1.0).abs() <= RELATIVE_TOLERANCE,
            "gauge {} for {:?} at {:?}", gauge, shape, hit
        );
    }

    #[test]
    fn clipped_point_keeps_direction(shape in any_shape(), p in polar()) {
        let target = toward(&shape, p);
        let hit = trim_endpoint(&shape, target);
        let dist = shape.center.distance(hit);
        prop_assert!(dist.is_finite() && dist > 0.0);
        let (ax, ay) = unit(shape.center, target);
        let (bx, by) = unit(shape.center, hit);
        prop_assert!((ax - bx).abs() <= RELATIVE_TOLERANCE);
        prop_assert!((ay - by).abs() <= RELATIVE_TOLERANCE);
    }

    #[test]
    fn clipping_is_idempotent(shape in any_shape(), p in polar()) {
        let first = trim_endpoint(&shape, toward(&shape, p));
        let second = trim_endpoint(&shape, first);
        let scale = shape.width.max(shape.height);
        prop_assert!(first.distance(second) <= RELATIVE_TOLERANCE * scale);
    }

    #[test]
    fn diamond_quadrant_edge_always_hits(
        shape in scaled_shape(Just(ShapeKind::Diamond)),
        p in polar(),
    ) {
        let target = toward(&shape, p);
        let hit = diamond_exit(&shape, target);
        prop_assert!(hit.is_some(), "edge missed for {:?} toward {:?}", shape, target);
        prop_assert_eq!(hit, Some(trim_endpoint(&shape, target)));
    }

    #[test]
    fn diamond_axis_directions_hit_vertices(
        scale in size_scale(),
        width in 0.5f64..500.0,
        height in 0.5f64..500.0,
        dist in 1.0f64..5000.0,
    ) {
        let (width, height, dist) = (width * scale, height * scale, dist * scale);
        let shape = Shape::diamond(Point::new(0.0, 0.0), width, height);
        for (dx, dy) in [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)] {
            let hit = diamond_exit(&shape, Point::new(dx * dist, dy * dist));
            prop_assert!(hit.is_some());
            let hit = hit.unwrap_or_default();
            let expected = Point::new(dx * width / 2.0, dy * height / 2.0);
            prop_assert!(hit.distance(expected) <= RELATIVE_TOLERANCE * width.max(height));
        }
    }

    #[test]
    fn polyline_interior_is_untouched(
        source in any_shape(),
        target in any_shape(),
        interior in prop::collection::vec((-2000.0f64..2000.0, -2000.0f64..2000.0), 0..6),
    ) {
        let mut points = vec![source.center];
        points.extend(interior.iter().map(|&(x, y)| Point::new(x, y)));
        points.push(target.center);
        let clipped = trim_polyline(&points, &source, &target);
        prop_assert_eq!(clipped.len(), points.len());
        let n = points.len();
        prop_assert_eq!(&clipped[1..n - 1], &points[1..n - 1]);
        prop_assert_eq!(clipped[0], trim_endpoint(&source, points[1]));
        prop_assert_eq!(clipped[n - 1], trim_endpoint(&target, points[n - 2]));
    }

    #[test]
    fn center_maps_to_itself(shape in any_shape()) {
        prop_assert_eq!(trim_endpoint(&shape, shape.center), shape.center);
    }
}
