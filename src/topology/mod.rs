pub mod face;
pub mod solid;
pub mod status;
pub mod vertex;

pub use face::FaceData;
pub use solid::Solid;
pub use status::Status;
pub use vertex::{VertexData, VertexId};

use crate::error::TopologyError;
use slotmap::SlotMap;

/// One operand of a boolean operation: vertices with adjacency and status,
/// plus classified triangles referring to them.
///
/// Vertices live in an arena and are addressed by [`VertexId`]; two faces
/// sharing a corner share the same id, which is what the composer
/// deduplicates on.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedObject {
    vertices: SlotMap<VertexId, VertexData>,
    faces: Vec<FaceData>,
}

impl ClassifiedObject {
    /// Creates a new, empty object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an unclassified object from a solid.
    ///
    /// Every position becomes one vertex, every triangle one face, and every
    /// triangle edge an adjacency link in both directions. All statuses start
    /// as [`Status::Unknown`].
    #[must_use]
    pub fn from_solid(solid: &Solid) -> Self {
        let mut object = Self::new();
        let ids: Vec<VertexId> = solid
            .vertices()
            .iter()
            .map(|&p| object.add_vertex(VertexData::new(p)))
            .collect();

        for tri in solid.indices().chunks_exact(3) {
            let corners = [ids[tri[0] as usize], ids[tri[1] as usize], ids[tri[2] as usize]];
            for k in 0..3 {
                let a = corners[k];
                let b = corners[(k + 1) % 3];
                object.link(a, b);
            }
            object.add_face(FaceData::new(corners));
        }
        object
    }

    // --- Vertex operations ---

    /// Inserts a vertex and returns its ID.
    pub fn add_vertex(&mut self, data: VertexData) -> VertexId {
        self.vertices.insert(data)
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is not in this object.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Returns a mutable reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is not in this object.
    pub fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexData, TopologyError> {
        self.vertices
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Iterates over all vertices.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &VertexData)> {
        self.vertices.iter()
    }

    /// Records `a` as adjacent to `b` and `b` as adjacent to `a`.
    ///
    /// Links to ids that are not in this object are silently dropped.
    pub fn link(&mut self, a: VertexId, b: VertexId) {
        if a == b {
            return;
        }
        if let Some(v) = self.vertices.get_mut(a) {
            v.add_adjacent(b);
        }
        if let Some(v) = self.vertices.get_mut(b) {
            v.add_adjacent(a);
        }
    }

    // --- Face operations ---

    /// Appends a face and returns its index.
    pub fn add_face(&mut self, data: FaceData) -> usize {
        self.faces.push(data);
        self.faces.len() - 1
    }

    /// All faces in insertion order.
    #[must_use]
    pub fn faces(&self) -> &[FaceData] {
        &self.faces
    }

    /// Returns a reference to the face, or an error if out of range.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` does not name a face.
    pub fn face(&self, index: usize) -> Result<&FaceData, TopologyError> {
        self.faces
            .get(index)
            .ok_or_else(|| TopologyError::EntityNotFound(format!("face {index}")))
    }

    /// Sets the status of a face.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` does not name a face.
    pub fn set_face_status(&mut self, index: usize, status: Status) -> Result<(), TopologyError> {
        let face = self
            .faces
            .get_mut(index)
            .ok_or_else(|| TopologyError::EntityNotFound(format!("face {index}")))?;
        face.status = status;
        Ok(())
    }

    /// Snapshot of every face status, in face order.
    #[must_use]
    pub fn face_statuses(&self) -> Vec<Status> {
        self.faces.iter().map(|f| f.status).collect()
    }

    /// Writes back a snapshot taken with [`face_statuses`](Self::face_statuses).
    pub(crate) fn restore_face_statuses(&mut self, snapshot: &[Status]) {
        debug_assert_eq!(snapshot.len(), self.faces.len());
        for (face, &status) in self.faces.iter_mut().zip(snapshot) {
            face.status = status;
        }
    }

    /// Swaps `Inside` and `Outside` on every face.
    pub fn invert_inside_faces(&mut self) {
        for face in &mut self.faces {
            face.status = face.status.inverted();
        }
    }
}
