use crate::error::InputError;
use crate::math::triangle::triangle_area;
use crate::math::{Point3, Vector3};

/// A triangle mesh as exchanged between the composer, the merge engine and the host.
///
/// Positions are unique per entry; `indices` holds three entries per triangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solid {
    vertices: Vec<Point3>,
    indices: Vec<u32>,
}

impl Solid {
    /// Creates a solid, validating the index buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the index count is not a multiple of three or an
    /// index does not address a vertex.
    pub fn new(vertices: Vec<Point3>, indices: Vec<u32>) -> Result<Self, InputError> {
        if indices.len() % 3 != 0 {
            return Err(InputError::IndexCountNotMultipleOfThree {
                count: indices.len(),
            });
        }
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
            return Err(InputError::IndexOutOfRange {
                index,
                vertex_count: vertices.len(),
            });
        }
        Ok(Self { vertices, indices })
    }

    /// Builds a solid whose indices are known to be valid.
    pub(crate) fn from_valid_parts(vertices: Vec<Point3>, indices: Vec<u32>) -> Self {
        debug_assert!(indices.len() % 3 == 0);
        debug_assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
        Self { vertices, indices }
    }

    /// Vertex positions.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Flat triangle index list.
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Consumes the solid, returning its buffers.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Point3>, Vec<u32>) {
        (self.vertices, self.indices)
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns `true` if the solid has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterates over triangles as corner positions.
    pub fn triangles(&self) -> impl Iterator<Item = [Point3; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            [
                self.vertices[tri[0] as usize],
                self.vertices[tri[1] as usize],
                self.vertices[tri[2] as usize],
            ]
        })
    }

    /// Total area of all triangles.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.triangles()
            .map(|[a, b, c]| triangle_area(&a, &b, &c))
            .sum()
    }

    /// Moves every vertex by `offset`.
    ///
    /// Hosts use this to shift between world and local coordinates around a
    /// boolean operation.
    pub fn translate(&mut self, offset: &Vector3) {
        for v in &mut self.vertices {
            *v += *offset;
        }
    }
}
