pub mod triangle;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Per-coordinate tolerance under which two positions are the same vertex.
pub const VERTEX_EQUALITY_TOLERANCE: f64 = 1e-5;

/// Tolerance for plane normal components and plane offsets.
pub const PLANE_TOLERANCE: f64 = 1e-5;

/// Cross-product magnitude under which three points are collinear.
pub const COLLINEAR_TOLERANCE: f64 = 1e-5;

/// Triangles with an area at or below this are dropped from merge output.
pub const AREA_EPSILON: f64 = 1e-5;

/// Margin of the bounding-box reject test used while welding.
pub const CLEAR_EPSILON: f64 = f64::EPSILON;

/// Squared distance under which two corners are welded.
pub const WELD_TOLERANCE_SQ: f64 = 1e-10;

/// Returns `true` if every coordinate of `a` and `b` differs by less than `tolerance`.
#[must_use]
pub fn same_point(a: &Point3, b: &Point3, tolerance: f64) -> bool {
    (a.x - b.x).abs() < tolerance && (a.y - b.y).abs() < tolerance && (a.z - b.z).abs() < tolerance
}

/// Component-wise vector comparison, see [`same_point`].
#[must_use]
pub fn same_vector(a: &Vector3, b: &Vector3, tolerance: f64) -> bool {
    (a - b).iter().all(|c| c.abs() < tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_is_per_coordinate() {
        let a = Point3::new(1.0, 2.0, 3.0);
        assert!(same_point(&a, &Point3::new(1.0 + 5e-6, 2.0 - 5e-6, 3.0), 1e-5));
        assert!(!same_point(&a, &Point3::new(1.0, 2.0, 3.0 + 2e-5), 1e-5));
    }

    #[test]
    fn same_vector_rejects_flipped_normal() {
        let n = Vector3::z();
        assert!(same_vector(&n, &Vector3::new(0.0, 0.0, 1.0 - 1e-7), 1e-5));
        assert!(!same_vector(&n, &-n, 1e-5));
    }
}
