#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use meshbool::math::{Point3, Vector3};
use meshbool::operations::boolean::{BooleanModeller, BooleanOp};
use meshbool::operations::{BooleanPipeline, Mark};
use meshbool::topology::{ClassifiedObject, Solid, Status};

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}

fn p(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

/// Flat triangle (0,0) (4,0) (0,4) at height `z`, cut into four slices
/// sharing the apex.
fn sliced_sheet(z: f64) -> Solid {
    Solid::new(
        vec![
            p(0.0, 0.0, z),
            p(1.0, 0.0, z),
            p(2.0, 0.0, z),
            p(3.0, 0.0, z),
            p(4.0, 0.0, z),
            p(0.0, 4.0, z),
        ],
        vec![3, 4, 5, 2, 3, 5, 1, 2, 5, 0, 1, 5],
    )
    .unwrap()
}

/// Classifies every face from the status of its first corner.
fn classify_faces_from_vertices(object: &mut ClassifiedObject) {
    let statuses: Vec<Status> = object
        .faces()
        .iter()
        .map(|f| object.vertex(f.vertices[0]).unwrap().status())
        .collect();
    for (i, status) in statuses.into_iter().enumerate() {
        object.set_face_status(i, status).unwrap();
    }
}

fn classified(z: f64, seed_status: Status) -> ClassifiedObject {
    let mut object = ClassifiedObject::from_solid(&sliced_sheet(z));
    let seed = object.vertices().next().unwrap().0;
    Mark::new(seed, seed_status).execute(&mut object).unwrap();
    classify_faces_from_vertices(&mut object);
    object
}

#[test]
fn resolve_compose_and_merge() {
    init_tracing();
    let a = classified(0.0, Status::Outside);
    let b = classified(1.0, Status::Outside);
    assert!(a.vertices().all(|(_, v)| v.status() == Status::Outside));

    let mut modeller = BooleanModeller::new(a, b);
    let composed = modeller.union().unwrap();
    assert_eq!(composed.triangle_count(), 8);
    assert_eq!(composed.vertices().len(), 12);

    let merged = BooleanPipeline::new(&mut modeller, BooleanOp::Union)
        .with_max_rounds(4)
        .execute()
        .unwrap();
    assert_eq!(merged.triangle_count(), 2);
    assert_relative_eq!(merged.surface_area(), composed.surface_area(), epsilon = 1e-9);
}

#[test]
fn difference_pipeline_is_repeatable() {
    init_tracing();
    let a = classified(0.0, Status::Outside);
    let b = classified(1.0, Status::Outside);
    let mut modeller = BooleanModeller::new(a, b);
    let before = modeller.object_b().face_statuses();

    let first = BooleanPipeline::new(&mut modeller, BooleanOp::Difference)
        .execute()
        .unwrap();
    let second = BooleanPipeline::new(&mut modeller, BooleanOp::Difference)
        .execute()
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(modeller.object_b().face_statuses(), before);
}

#[test]
fn host_offset_is_applied_before_merging() {
    init_tracing();
    let a = classified(0.0, Status::Inside);
    let b = classified(1.0, Status::Outside);
    let mut modeller = BooleanModeller::new(a, b);

    let merged = BooleanPipeline::new(&mut modeller, BooleanOp::Intersection)
        .with_offset(Vector3::new(0.0, 0.0, -5.0))
        .with_weld(true)
        .execute()
        .unwrap();

    assert_eq!(merged.triangle_count(), 1);
    assert!(merged.vertices().iter().all(|v| (v.z + 5.0).abs() < 1e-12));
}

#[test]
fn unclassified_faces_fail_the_pipeline() {
    init_tracing();
    let a = ClassifiedObject::from_solid(&sliced_sheet(0.0));
    let b = classified(1.0, Status::Inside);
    let mut modeller = BooleanModeller::new(a, b);
    assert!(BooleanPipeline::new(&mut modeller, BooleanOp::Union)
        .execute()
        .is_err());
}
