pub mod boolean;
pub mod merge;
pub mod pipeline;
pub mod resolve;

pub use pipeline::BooleanPipeline;
pub use resolve::{resolve_unknown_from, Mark};
