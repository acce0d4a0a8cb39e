use crate::math::Point3;

use super::face::face_clear_of;
use super::forest::MergeForest;

impl MergeForest {
    /// Snaps nearly coincident corners of root faces onto each other.
    ///
    /// Every pair of roots whose bounding boxes overlap is scanned corner by
    /// corner; the first corner within the weld tolerance of a corner `c` is
    /// overwritten with `c` across all roots. The pass mutates the geometry it
    /// is scanning, so clusters of three or more corners are not guaranteed to
    /// collapse onto one value. Returns the number of corners rewritten.
    pub fn weld_vertices(&mut self) -> usize {
        let n = self.faces.len();
        let weld_sq = self.tolerances.weld_sq;
        let clear_epsilon = self.tolerances.clear_epsilon;
        let mut rewritten = 0;

        for i in 0..n {
            if !self.is_root(i) {
                continue;
            }
            for j in 0..n {
                if !self.is_root(j) || face_clear_of(self.corners(i), self.corners(j), clear_epsilon)
                {
                    continue;
                }
                for ci in 0..3 {
                    for cj in 0..3 {
                        if i == j && ci == cj {
                            continue;
                        }
                        let old = self.corners(i)[ci];
                        let new = self.corners(j)[cj];
                        if old != new && (old - new).norm_squared() < weld_sq {
                            rewritten += self.update_vertex(&old, &new);
                            break;
                        }
                    }
                }
            }
        }

        tracing::debug!(rewritten, "welded vertices");
        rewritten
    }

    /// Replaces every corner equal to `old` in every root face with `new`.
    fn update_vertex(&mut self, old: &Point3, new: &Point3) -> usize {
        let mut updated = 0;
        for face in self.faces.iter_mut().filter(|f| f.is_root()) {
            for corner in face.corners.iter_mut().filter(|c| *c == old) {
                *corner = *new;
                updated += 1;
            }
        }
        updated
    }
}
