pub mod row;

pub use row::{Placement, RowLayout, RowPlan};
