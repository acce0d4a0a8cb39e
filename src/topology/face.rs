use super::status::Status;
use super::vertex::VertexId;

/// A classified triangle.
///
/// Corners are listed in winding order; the status is assigned by the
/// classifier and read by the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceData {
    /// The three corner vertices.
    pub vertices: [VertexId; 3],
    /// Classification of the face against the other solid.
    pub status: Status,
}

impl FaceData {
    /// Creates a new face with unknown status.
    #[must_use]
    pub fn new(vertices: [VertexId; 3]) -> Self {
        Self {
            vertices,
            status: Status::Unknown,
        }
    }

    /// Sets the status, builder style.
    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }
}
