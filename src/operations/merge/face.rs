use crate::math::triangle::{is_collinear, triangle_area, triangle_plane};
use crate::math::{same_point, same_vector, Point3, Vector3};

/// One triangle in the merge forest.
///
/// The plane is computed once from the original corners. `corners` is only
/// authoritative while the face is a root; after it has been absorbed, reads
/// must go through the root.
#[derive(Debug, Clone)]
pub struct MergeFace {
    pub(super) corners: [Point3; 3],
    normal: Vector3,
    plane_distance: f64,
    pub(super) parent: Option<usize>,
}

impl MergeFace {
    /// Creates a root face from three corners in winding order.
    #[must_use]
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        let (normal, plane_distance) = triangle_plane(&a, &b, &c);
        Self {
            corners: [a, b, c],
            normal,
            plane_distance,
            parent: None,
        }
    }

    /// Unit normal of the face's plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Signed distance from the origin to the face's plane along the normal.
    #[must_use]
    pub fn plane_distance(&self) -> f64 {
        self.plane_distance
    }

    /// Whether the face has not been absorbed into another.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Whether both faces lie on the same oriented plane.
    #[must_use]
    pub fn same_plane(&self, other: &MergeFace, tolerance: f64) -> bool {
        same_vector(&self.normal, &other.normal, tolerance)
            && (self.plane_distance - other.plane_distance).abs() < tolerance
    }
}

/// Whether every corner of `a` matches some corner of `b` and vice versa.
#[must_use]
pub fn same_face(a: &[Point3; 3], b: &[Point3; 3], tolerance: f64) -> bool {
    let covered = |x: &[Point3; 3], y: &[Point3; 3]| {
        x.iter()
            .all(|p| y.iter().any(|q| same_point(p, q, tolerance)))
    };
    covered(a, b) && covered(b, a)
}

/// Finds how `b` can extend `a` across a shared edge.
///
/// Returns `(i, j)` such that `a[i] = b[j]`, `a[i+2] = b[j+1]` (the shared
/// edge, traversed in opposite directions) and `a[i+1]`, `a[i]`, `b[j+2]`
/// are collinear, so replacing `a[i]` with `b[j+2]` yields a triangle
/// covering both.
#[must_use]
pub fn try_confirm_neighbor(
    a: &[Point3; 3],
    b: &[Point3; 3],
    position_tolerance: f64,
    collinear_tolerance: f64,
) -> Option<(usize, usize)> {
    for i in 0..3 {
        for j in 0..3 {
            if same_point(&a[i], &b[j], position_tolerance)
                && same_point(&a[(i + 2) % 3], &b[(j + 1) % 3], position_tolerance)
                && is_collinear(&a[(i + 1) % 3], &a[i], &b[(j + 2) % 3], collinear_tolerance)
            {
                return Some((i, j));
            }
        }
    }
    None
}

/// Cheap bounding-box reject: `true` when the boxes of `a` and `b` are
/// separated by more than `epsilon` on at least one axis.
#[must_use]
pub fn face_clear_of(a: &[Point3; 3], b: &[Point3; 3], epsilon: f64) -> bool {
    let (a_min, a_max) = bounds(a);
    let (b_min, b_max) = bounds(b);
    (0..3).any(|k| a_min[k] > b_max[k] + epsilon || a_max[k] < b_min[k] - epsilon)
}

/// Area of a corner triple.
#[must_use]
pub fn corners_area(corners: &[Point3; 3]) -> f64 {
    triangle_area(&corners[0], &corners[1], &corners[2])
}

fn bounds(corners: &[Point3; 3]) -> (Point3, Point3) {
    let min = corners[0].inf(&corners[1]).inf(&corners[2]);
    let max = corners[0].sup(&corners[1]).sup(&corners[2]);
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    const TOL: f64 = 1e-5;

    #[test]
    fn same_face_is_reflexive_and_symmetric() {
        let a = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)];
        let rotated = [a[1], a[2], a[0]];
        assert!(same_face(&a, &a, TOL));
        assert!(same_face(&a, &rotated, TOL));
        assert!(same_face(&rotated, &a, TOL));
    }

    #[test]
    fn sharing_an_edge_is_not_same_face() {
        let a = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)];
        let b = [p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 1.0, 0.0)];
        assert!(!same_face(&a, &b, TOL));
        assert!(!same_face(&b, &a, TOL));
    }

    #[test]
    fn same_plane_requires_matching_orientation() {
        let up = MergeFace::new(p(0.0, 0.0, 1.0), p(1.0, 0.0, 1.0), p(0.0, 1.0, 1.0));
        let also_up = MergeFace::new(p(5.0, 5.0, 1.0), p(6.0, 5.0, 1.0), p(5.0, 6.0, 1.0));
        let down = MergeFace::new(p(0.0, 0.0, 1.0), p(0.0, 1.0, 1.0), p(1.0, 0.0, 1.0));
        let lifted = MergeFace::new(p(0.0, 0.0, 2.0), p(1.0, 0.0, 2.0), p(0.0, 1.0, 2.0));
        assert!(up.same_plane(&also_up, TOL));
        assert!(!up.same_plane(&down, TOL));
        assert!(!up.same_plane(&lifted, TOL));
    }

    #[test]
    fn neighbor_along_collinear_split() {
        // Triangle (0,0) (2,0) (0,2) split at (1,0).
        let left = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 2.0, 0.0)];
        let right = [p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(0.0, 2.0, 0.0)];
        assert_eq!(try_confirm_neighbor(&right, &left, TOL, TOL), Some((0, 1)));
        assert_eq!(try_confirm_neighbor(&left, &right, TOL, TOL), None);
    }

    #[test]
    fn square_halves_are_not_neighbors() {
        let lower = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)];
        let upper = [p(0.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 1.0, 0.0)];
        assert_eq!(try_confirm_neighbor(&lower, &upper, TOL, TOL), None);
        assert_eq!(try_confirm_neighbor(&upper, &lower, TOL, TOL), None);
    }

    #[test]
    fn clear_when_separated_on_one_axis() {
        let a = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)];
        let b = [p(3.0, 0.0, 0.0), p(4.0, 0.0, 0.0), p(3.0, 1.0, 0.0)];
        assert!(face_clear_of(&a, &b, f64::EPSILON));
        assert!(face_clear_of(&b, &a, f64::EPSILON));
    }

    #[test]
    fn touching_boxes_are_not_clear() {
        let a = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)];
        let b = [p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(1.0, 1.0, 0.0)];
        assert!(!face_clear_of(&a, &b, f64::EPSILON));
    }

    #[test]
    fn clear_epsilon_widens_the_box() {
        let a = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0)];
        let b = [p(1.1, 0.0, 0.0), p(2.0, 0.0, 0.0), p(1.1, 1.0, 0.0)];
        assert!(face_clear_of(&a, &b, 0.05));
        assert!(!face_clear_of(&a, &b, 0.2));
    }
}
