use crate::math::{same_point, Point3, VERTEX_EQUALITY_TOLERANCE};

use super::status::Status;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in a classified object.
    pub struct VertexId;
}

/// Data associated with a classified vertex.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// The 3D position of the vertex.
    pub point: Point3,
    status: Status,
    adjacent: Vec<VertexId>,
}

impl VertexData {
    /// Creates a new vertex with unknown status.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self::with_status(point, Status::Unknown)
    }

    /// Creates a new vertex with the given status.
    #[must_use]
    pub fn with_status(point: Point3, status: Status) -> Self {
        Self {
            point,
            status,
            adjacent: Vec::new(),
        }
    }

    /// Current classification of the vertex.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Overwrites the classification of the vertex.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Assigns a status from its raw ordinal.
    ///
    /// Values outside `Unknown..=Boundary` leave the current status untouched.
    /// Returns whether the assignment took place.
    pub fn set_raw_status(&mut self, raw: i32) -> bool {
        match Status::from_raw(raw) {
            Some(status) => {
                self.status = status;
                true
            }
            None => {
                tracing::trace!(raw, "ignoring out-of-range vertex status");
                false
            }
        }
    }

    /// Vertices sharing an edge with this one.
    #[must_use]
    pub fn adjacent(&self) -> &[VertexId] {
        &self.adjacent
    }

    /// Records `other` as adjacent. Duplicate links are ignored.
    pub fn add_adjacent(&mut self, other: VertexId) {
        if !self.adjacent.contains(&other) {
            self.adjacent.push(other);
        }
    }

    /// Positional equality within [`VERTEX_EQUALITY_TOLERANCE`].
    #[must_use]
    pub fn same_position(&self, other: &VertexData) -> bool {
        same_point(&self.point, &other.point, VERTEX_EQUALITY_TOLERANCE)
    }
}
