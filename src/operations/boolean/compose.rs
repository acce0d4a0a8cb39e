use std::collections::HashMap;

use crate::error::{OperationError, Result, StatusError};
use crate::math::Point3;
use crate::topology::{ClassifiedObject, Solid, VertexId};

use super::select::{Operand, SelectionPattern};

/// Output buffers shared by both operands while composing.
///
/// Vertices are deduplicated by identity: a corner is appended once per
/// `(operand, id)` and reused afterwards. Distinct vertices at the same
/// position stay distinct.
#[derive(Default)]
struct ComposeBuffers {
    vertices: Vec<Point3>,
    indices: Vec<u32>,
    seen: HashMap<(Operand, VertexId), u32>,
}

impl ComposeBuffers {
    fn index_of(&mut self, operand: Operand, id: VertexId, point: Point3) -> Result<u32> {
        if let Some(&index) = self.seen.get(&(operand, id)) {
            return Ok(index);
        }
        let index = u32::try_from(self.vertices.len()).map_err(|_| {
            OperationError::InvalidInput("composed solid exceeds u32 vertex indices".into())
        })?;
        self.vertices.push(point);
        self.seen.insert((operand, id), index);
        Ok(index)
    }
}

/// Builds the result solid from the faces of `a` and `b` selected by `pattern`.
///
/// Statuses are read as they are; inverting B for a difference is the
/// caller's job.
pub(crate) fn compose_solid(
    a: &ClassifiedObject,
    b: &ClassifiedObject,
    pattern: &SelectionPattern,
) -> Result<Solid> {
    check_face_statuses(a, Operand::A)?;
    check_face_statuses(b, Operand::B)?;

    let mut buffers = ComposeBuffers::default();
    let kept_a = group_object_components(a, Operand::A, pattern, &mut buffers)?;
    let kept_b = group_object_components(b, Operand::B, pattern, &mut buffers)?;

    tracing::debug!(
        kept_a,
        kept_b,
        vertices = buffers.vertices.len(),
        "composed solid"
    );
    Ok(Solid::from_valid_parts(buffers.vertices, buffers.indices))
}

/// Rejects faces the classifier left without an inside/outside/coincident status.
fn check_face_statuses(object: &ClassifiedObject, operand: Operand) -> Result<()> {
    if let Some((face, f)) = object
        .faces()
        .iter()
        .enumerate()
        .find(|(_, f)| !f.status.is_face_classification())
    {
        return Err(StatusError::UnclassifiedFace {
            operand: operand.label(),
            face,
            status: f.status,
        }
        .into());
    }
    Ok(())
}

/// Appends every face of `object` kept by `pattern`, returning how many were kept.
fn group_object_components(
    object: &ClassifiedObject,
    operand: Operand,
    pattern: &SelectionPattern,
    buffers: &mut ComposeBuffers,
) -> Result<usize> {
    let mut kept = 0;
    for face in object.faces() {
        if !pattern.keeps(operand, face.status) {
            continue;
        }
        for id in face.vertices {
            let point = object.vertex(id)?.point;
            let index = buffers.index_of(operand, id, point)?;
            buffers.indices.push(index);
        }
        kept += 1;
    }
    Ok(kept)
}
