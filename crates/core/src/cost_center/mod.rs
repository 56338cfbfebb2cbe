//! Cost-center configuration and the indirect allocation primitive.

pub mod book;
pub mod types;


pub use book::CostCenterBook;
pub use types::{
    AllocatedCost, CostAllocation, CostCenter, CostCenterType, CostCenterValue, LineAllocation,
};
