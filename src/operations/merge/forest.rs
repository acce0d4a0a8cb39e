use tracing::instrument;

use crate::error::{OperationError, Result};
use crate::math::Point3;
use crate::topology::Solid;

use super::face::{corners_area, same_face, try_confirm_neighbor, MergeFace};
use super::MergeTolerances;

/// Union-find over the triangles of a mesh.
///
/// Faces are stored in an arena and addressed by index. A root holds the
/// current corners of the polygon fragment it represents; absorbed faces
/// point at their parent and their own corners are stale.
#[derive(Debug, Clone)]
pub struct MergeForest {
    pub(super) faces: Vec<MergeFace>,
    pub(super) tolerances: MergeTolerances,
}

impl MergeForest {
    /// Builds one root face per triangle of `solid`.
    #[must_use]
    pub fn from_solid(solid: &Solid, tolerances: MergeTolerances) -> Self {
        Self::from_triangles(solid.triangles(), tolerances)
    }

    /// Builds one root face per corner triple.
    pub fn from_triangles<I>(triangles: I, tolerances: MergeTolerances) -> Self
    where
        I: IntoIterator<Item = [Point3; 3]>,
    {
        let faces = triangles
            .into_iter()
            .map(|[a, b, c]| MergeFace::new(a, b, c))
            .collect();
        Self { faces, tolerances }
    }

    /// Number of faces, absorbed ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Returns `true` if the forest holds no faces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Tolerances the forest compares with.
    #[must_use]
    pub fn tolerances(&self) -> &MergeTolerances {
        &self.tolerances
    }

    /// Follows parent links from `index` to its root.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub(crate) fn root(&self, index: usize) -> usize {
        let mut current = index;
        while let Some(parent) = self.faces[current].parent {
            current = parent;
        }
        current
    }

    /// Whether the face at `index` is still a root.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub(crate) fn is_root(&self, index: usize) -> bool {
        self.faces[index].is_root()
    }

    /// Number of faces that are still roots.
    #[must_use]
    pub fn root_count(&self) -> usize {
        self.faces.iter().filter(|f| f.is_root()).count()
    }

    /// Current corners of the fragment containing `index`, read through its root.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub(crate) fn corners(&self, index: usize) -> &[Point3; 3] {
        &self.faces[self.root(index)].corners
    }

    /// Corners of the fragment containing `index`, or `None` for an index
    /// outside the forest.
    #[must_use]
    pub fn fragment(&self, index: usize) -> Option<&[Point3; 3]> {
        (index < self.faces.len()).then(|| self.corners(index))
    }

    pub(super) fn corners_mut(&mut self, index: usize) -> &mut [Point3; 3] {
        let root = self.root(index);
        &mut self.faces[root].corners
    }

    /// Attaches the tree of `child` under the root of `parent`.
    ///
    /// Does nothing if both already share a root.
    pub(crate) fn union(&mut self, child: usize, parent: usize) {
        let child_root = self.root(child);
        let parent_root = self.root(parent);
        if child_root != parent_root {
            self.faces[child_root].parent = Some(parent_root);
        }
    }

    /// Whether the fragments of `a` and `b` cover the same three corners.
    #[must_use]
    pub(crate) fn same_face(&self, a: usize, b: usize) -> bool {
        same_face(self.corners(a), self.corners(b), self.tolerances.position)
    }

    /// Whether the fragments of `a` and `b` lie on the same oriented plane.
    #[must_use]
    pub(crate) fn same_plane(&self, a: usize, b: usize) -> bool {
        self.faces[self.root(a)].same_plane(&self.faces[self.root(b)], self.tolerances.plane)
    }

    /// Neighbor test on the current root corners, see [`try_confirm_neighbor`].
    #[must_use]
    pub(crate) fn try_confirm_neighbor(&self, a: usize, b: usize) -> Option<(usize, usize)> {
        try_confirm_neighbor(
            self.corners(a),
            self.corners(b),
            self.tolerances.position,
            self.tolerances.collinear,
        )
    }

    /// Runs one merge round over every ordered pair of distinct roots.
    ///
    /// When `b` extends `a` across a shared edge, `a`'s matching corner is
    /// moved to `b`'s far corner and `b` is absorbed into `a`. Duplicate and
    /// non-coplanar pairs are skipped. Returns the number of merges.
    #[instrument(skip(self), fields(faces = self.faces.len()))]
    pub fn merge_neighbors(&mut self) -> usize {
        let n = self.faces.len();
        let mut merged = 0;
        for i in 0..n {
            for j in 0..n {
                if i == j || !self.is_root(i) || !self.is_root(j) {
                    continue;
                }
                if self.same_face(i, j) || !self.same_plane(i, j) {
                    continue;
                }
                if let Some((a_corner, b_corner)) = self.try_confirm_neighbor(i, j) {
                    let far = self.corners(j)[(b_corner + 2) % 3];
                    self.corners_mut(i)[a_corner] = far;
                    self.union(j, i);
                    merged += 1;
                    tracing::trace!(absorbed = j, into = i, "merged coplanar neighbor");
                }
            }
        }
        tracing::debug!(merged, roots = self.root_count(), "merge round finished");
        merged
    }

    /// Repeats [`merge_neighbors`](Self::merge_neighbors) until a round merges
    /// nothing or `max_rounds` rounds have run. Returns the total merges.
    pub fn merge_until_stable(&mut self, max_rounds: usize) -> usize {
        let mut total = 0;
        for _ in 0..max_rounds {
            let merged = self.merge_neighbors();
            total += merged;
            if merged == 0 {
                break;
            }
        }
        total
    }

    /// Emits every root whose area exceeds the area tolerance as a triangle
    /// with three fresh vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if the output does not fit `u32` indices.
    pub fn to_solid(&self) -> Result<Solid> {
        let mut vertices = Vec::new();
        for face in self.faces.iter().filter(|f| f.is_root()) {
            if corners_area(&face.corners) <= self.tolerances.area {
                continue;
            }
            vertices.extend_from_slice(&face.corners);
        }
        let count = u32::try_from(vertices.len()).map_err(|_| {
            OperationError::InvalidInput("merged solid exceeds u32 vertex indices".into())
        })?;
        Ok(Solid::from_valid_parts(vertices, (0..count).collect()))
    }
}
