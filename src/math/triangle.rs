use super::{Point3, Vector3};

/// Unnormalized normal `(b - a) x (c - a)` of a triangle.
#[must_use]
pub fn triangle_cross(a: &Point3, b: &Point3, c: &Point3) -> Vector3 {
    (b - a).cross(&(c - a))
}

/// Area of a triangle.
#[must_use]
pub fn triangle_area(a: &Point3, b: &Point3, c: &Point3) -> f64 {
    triangle_cross(a, b, c).norm() * 0.5
}

/// Unit normal and signed distance from the origin of the plane through a triangle.
///
/// Degenerate triangles yield a zero normal and zero distance.
#[must_use]
pub fn triangle_plane(a: &Point3, b: &Point3, c: &Point3) -> (Vector3, f64) {
    let normal = triangle_cross(a, b, c)
        .try_normalize(0.0)
        .unwrap_or_else(Vector3::zeros);
    (normal, normal.dot(&a.coords))
}

/// Checks whether `b` and `c` lie on one line through `a`.
#[must_use]
pub fn is_collinear(a: &Point3, b: &Point3, c: &Point3, tolerance: f64) -> bool {
    triangle_cross(a, b, c).norm() < tolerance
}
