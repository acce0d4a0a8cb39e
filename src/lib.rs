//! Boolean operations on split and classified triangle meshes, followed by
//! coplanar simplification of the result.
//!
//! The pipeline is: resolve unknown vertex statuses with [`operations::Mark`],
//! compose the result with [`operations::boolean::BooleanModeller`], then fuse
//! coplanar neighbors with [`operations::merge::MergeCoplanar`].

pub mod error;
pub mod math;
pub mod operations;
pub mod topology;

pub use error::{MeshBoolError, Result};
