use std::collections::VecDeque;

use crate::error::Result;
use crate::topology::{ClassifiedObject, Status, VertexId};

/// Assigns a status to a vertex and floods it through adjacent unknown vertices.
///
/// Propagation only enters vertices whose status is still [`Status::Unknown`];
/// any vertex that already carries a status is left as is and stops the flood
/// along that path.
pub struct Mark {
    vertex: VertexId,
    status: Status,
}

impl Mark {
    /// Creates a new `Mark` operation.
    #[must_use]
    pub fn new(vertex: VertexId, status: Status) -> Self {
        Self { vertex, status }
    }

    /// Executes the propagation, returning how many vertices were assigned.
    ///
    /// The seed vertex always counts. Adjacency links to vertices missing from
    /// the object are skipped. Marking with [`Status::Unknown`] only resets the
    /// seed, since there is nothing to propagate.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed vertex is not in the object.
    pub fn execute(&self, object: &mut ClassifiedObject) -> Result<usize> {
        object.vertex_mut(self.vertex)?.set_status(self.status);
        if self.status == Status::Unknown {
            return Ok(1);
        }

        let mut assigned = 1;
        let mut queue = VecDeque::from([self.vertex]);

        while let Some(current) = queue.pop_front() {
            let neighbors = object.vertex(current)?.adjacent().to_vec();
            for neighbor in neighbors {
                let Ok(v) = object.vertex_mut(neighbor) else {
                    continue;
                };
                if v.status() == Status::Unknown {
                    v.set_status(self.status);
                    assigned += 1;
                    queue.push_back(neighbor);
                }
            }
        }

        tracing::trace!(status = ?self.status, assigned, "marked vertices");
        Ok(assigned)
    }
}

/// Re-marks every seed with its current status, filling in the unknown
/// frontier around each one.
///
/// Seeds that are themselves unknown are skipped. Returns the number of
/// previously unknown vertices that received a status.
///
/// # Errors
///
/// Returns an error if a seed is not in the object.
pub fn resolve_unknown_from(object: &mut ClassifiedObject, seeds: &[VertexId]) -> Result<usize> {
    let mut resolved = 0;
    for &seed in seeds {
        let status = object.vertex(seed)?.status();
        if status == Status::Unknown {
            continue;
        }
        resolved += Mark::new(seed, status).execute(object)? - 1;
    }
    Ok(resolved)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::topology::VertexData;

    /// Builds V1 - V2 - V3 - V4 with the given starting statuses.
    fn chain(statuses: [Status; 4]) -> (ClassifiedObject, [VertexId; 4]) {
        let mut object = ClassifiedObject::new();
        let ids = statuses.map(|s| {
            object.add_vertex(VertexData::with_status(Point3::origin(), s))
        });
        for w in ids.windows(2) {
            object.link(w[0], w[1]);
        }
        (object, ids)
    }

    fn statuses(object: &ClassifiedObject, ids: &[VertexId]) -> Vec<Status> {
        ids.iter()
            .map(|&id| object.vertex(id).unwrap().status())
            .collect()
    }

    #[test]
    fn propagates_along_unknown_chain() {
        let (mut object, ids) = chain([
            Status::Inside,
            Status::Unknown,
            Status::Unknown,
            Status::Unknown,
        ]);
        let assigned = Mark::new(ids[0], Status::Inside)
            .execute(&mut object)
            .unwrap();
        assert_eq!(assigned, 4);
        assert_eq!(statuses(&object, &ids), vec![Status::Inside; 4]);
    }

    #[test]
    fn stops_at_known_vertex() {
        let (mut object, ids) = chain([
            Status::Inside,
            Status::Unknown,
            Status::Outside,
            Status::Unknown,
        ]);
        Mark::new(ids[0], Status::Inside)
            .execute(&mut object)
            .unwrap();
        assert_eq!(
            statuses(&object, &ids),
            vec![Status::Inside, Status::Inside, Status::Outside, Status::Unknown]
        );
    }

    #[test]
    fn terminates_on_cycles() {
        let mut object = ClassifiedObject::new();
        let ids: Vec<VertexId> = (0..5)
            .map(|_| object.add_vertex(VertexData::new(Point3::origin())))
            .collect();
        for i in 0..ids.len() {
            object.link(ids[i], ids[(i + 1) % ids.len()]);
        }
        let assigned = Mark::new(ids[2], Status::Outside)
            .execute(&mut object)
            .unwrap();
        assert_eq!(assigned, 5);
        assert_eq!(statuses(&object, &ids), vec![Status::Outside; 5]);
    }

    #[test]
    fn asymmetric_links_propagate_one_way() {
        let mut object = ClassifiedObject::new();
        let a = object.add_vertex(VertexData::new(Point3::origin()));
        let b = object.add_vertex(VertexData::new(Point3::origin()));
        object.vertex_mut(a).unwrap().add_adjacent(b);

        Mark::new(b, Status::Same).execute(&mut object).unwrap();
        assert_eq!(object.vertex(a).unwrap().status(), Status::Unknown);

        Mark::new(a, Status::Opposite).execute(&mut object).unwrap();
        assert_eq!(object.vertex(b).unwrap().status(), Status::Same);
    }

    #[test]
    fn marking_unknown_does_not_spread() {
        let (mut object, ids) = chain([
            Status::Inside,
            Status::Unknown,
            Status::Unknown,
            Status::Unknown,
        ]);
        let assigned = Mark::new(ids[1], Status::Unknown)
            .execute(&mut object)
            .unwrap();
        assert_eq!(assigned, 1);
        assert_eq!(
            statuses(&object, &ids),
            vec![Status::Inside, Status::Unknown, Status::Unknown, Status::Unknown]
        );

        Mark::new(ids[0], Status::Unknown)
            .execute(&mut object)
            .unwrap();
        assert_eq!(statuses(&object, &ids), vec![Status::Unknown; 4]);
    }

    #[test]
    fn long_chain_does_not_recurse() {
        let mut object = ClassifiedObject::new();
        let ids: Vec<VertexId> = (0..200_000)
            .map(|_| object.add_vertex(VertexData::new(Point3::origin())))
            .collect();
        for w in ids.windows(2) {
            object.link(w[0], w[1]);
        }
        let assigned = Mark::new(ids[0], Status::Boundary)
            .execute(&mut object)
            .unwrap();
        assert_eq!(assigned, ids.len());
    }

    #[test]
    fn resolve_from_seeds_fills_frontier() {
        let (mut object, ids) = chain([
            Status::Unknown,
            Status::Outside,
            Status::Unknown,
            Status::Unknown,
        ]);
        let resolved = resolve_unknown_from(&mut object, &ids).unwrap();
        assert_eq!(resolved, 3);
        assert_eq!(statuses(&object, &ids), vec![Status::Outside; 4]);
    }
}
