use crate::geometry::{Point, Shape, ShapeKind};

// ── Diamond edge intersection ───────────────────────────────────────
/// Slack on the edge parameter so rays through a vertex still count as hits.
const EDGE_PARAM_TOLERANCE: f64 = 1e-9;
/// Below this the ray is treated as parallel to the edge. Compared against a
/// denominator taken in unit-diamond space, where it is never smaller than 1.
const PARALLEL_DENOM_EPSILON: f64 = 1e-12;

/// Unit direction from the shape's center toward `toward`, or `None` when the
/// two points coincide.
fn unit_direction(shape: &Shape, toward: Point) -> Option<(f64, f64)> {
    let dx = toward.x - shape.center.x;
    let dy = toward.y - shape.center.y;
    // NaN and infinite offsets are degenerate too.
    if !(dx.is_finite() && dy.is_finite()) {
        return None;
    }
    // Divide by the larger component first so `hypot` never sees an
    // overflowing or vanishing pair.
    let m = dx.abs().max(dy.abs());
    if m == 0.0 {
        return None;
    }
    let (sx, sy) = (dx / m, dy / m);
    let len = sx.hypot(sy);
    Some((sx / len, sy / len))
}

/// Half-extents divided by the larger one, plus that divisor. Keeps the
/// per-shape formulas in `(0, 1]` whatever the node size.
fn normalized_half_extents(shape: &Shape) -> (f64, f64, f64) {
    let (rx, ry) = shape.half_extents();
    let s = rx.max(ry);
    (rx / s, ry / s, s)
}

/// Point where the ray from `shape.center` through `toward` crosses the
/// shape's outline.
///
/// When `toward` coincides with the center the direction is undefined and
/// `toward` is returned unchanged.
pub fn trim_endpoint(shape: &Shape, toward: Point) -> Point {
    let Some((ux, uy)) = unit_direction(shape, toward) else {
        return toward;
    };
    match shape.kind {
        ShapeKind::Rectangle => rectangle_exit(shape, ux, uy),
        ShapeKind::Ellipse => ellipse_exit(shape, ux, uy),
        ShapeKind::Diamond => match diamond_edge_exit(shape, ux, uy) {
            Some(point) => point,
            None => {
                tracing::debug!(
                    ux,
                    uy,
                    width = shape.width,
                    height = shape.height,
                    "diamond edge missed, using rectangle exit"
                );
                rectangle_exit(shape, ux, uy)
            }
        },
    }
}

/// Boundary point of a diamond taken only from the quadrant-selected edge,
/// with no rectangle fallback. `None` for a degenerate direction or when the
/// edge is missed.
pub fn diamond_exit(shape: &Shape, toward: Point) -> Option<Point> {
    let (ux, uy) = unit_direction(shape, toward)?;
    diamond_edge_exit(shape, ux, uy)
}

/// Replace the first and last points of `points` with their boundary
/// intersections on `source` and `target`. Each endpoint is aimed at its
/// original neighbour; interior points are copied through. Polylines with
/// fewer than two points are returned as-is.
pub fn trim_polyline(points: &[Point], source: &Shape, target: &Shape) -> Vec<Point> {
    let mut out = points.to_vec();
    let n = points.len();
    if n < 2 {
        return out;
    }
    out[0] = trim_endpoint(source, points[1]);
    out[n - 1] = trim_endpoint(target, points[n - 2]);
    out
}

fn rectangle_exit(shape: &Shape, ux: f64, uy: f64) -> Point {
    let (rx, ry) = shape.half_extents();
    let (nrx, nry, _) = normalized_half_extents(shape);
    let (sx, sy) = if ux.abs() * nry > uy.abs() * nrx {
        // Leaves through the left or right side.
        let sx = rx.copysign(ux);
        (sx, sx * uy / ux)
    } else {
        let sy = ry.copysign(uy);
        (sy * ux / uy, sy)
    };
    Point::new(shape.center.x + sx, shape.center.y + sy)
}

fn ellipse_exit(shape: &Shape, ux: f64, uy: f64) -> Point {
    let (nrx, nry, s) = normalized_half_extents(shape);
    let scale = s / (ux / nrx).hypot(uy / nry);
    Point::new(shape.center.x + ux * scale, shape.center.y + uy * scale)
}

fn diamond_edge_exit(shape: &Shape, ux: f64, uy: f64) -> Option<Point> {
    // Work on the unit diamond |x| + |y| = 1 so the parallel guard does not
    // depend on the node size.
    let (nrx, nry, s) = normalized_half_extents(shape);
    let (vx, vy) = (ux / nrx, uy / nry);
    let vlen = vx.hypot(vy);
    if !(vlen > 0.0 && vlen.is_finite()) {
        return None;
    }
    let (wx, wy) = (vx / vlen, vy / vlen);

    let top = Point::new(0.0, -1.0);
    let right = Point::new(1.0, 0.0);
    let bottom = Point::new(0.0, 1.0);
    let left = Point::new(-1.0, 0.0);
    // y grows downward: a non-negative uy points at the bottom half.
    let (p1, p2) = match (ux >= 0.0, uy >= 0.0) {
        (true, true) => (right, bottom),
        (false, true) => (bottom, left),
        (false, false) => (left, top),
        (true, false) => (top, right),
    };
    let (ex, ey) = (p2.x - p1.x, p2.y - p1.y);

    let denom = wy * ex - wx * ey;
    if denom.abs() < PARALLEL_DENOM_EPSILON {
        return None;
    }
    // ua runs along the edge, ub along the (unit) ray; the ray starts at the origin.
    let ua = (wx * p1.y - wy * p1.x) / denom;
    let ub = (ex * p1.y - ey * p1.x) / denom;
    if !(-EDGE_PARAM_TOLERANCE..=1.0 + EDGE_PARAM_TOLERANCE).contains(&ua) || !(ub > 0.0) {
        return None;
    }
    // Back in layout space the hit is `t` along the original ray, which keeps
    // the direction exact.
    let t = ub * s / vlen;
    Some(Point::new(shape.center.x + ux * t, shape.center.y + uy * t))
}
