mod compose;
mod difference;
mod intersect_op;
mod modeller;
mod select;
mod union;

pub use difference::Difference;
pub use intersect_op::Intersect;
pub use modeller::BooleanModeller;
pub use select::{BooleanOp, Operand, SelectionPattern};
pub use union::Union;
