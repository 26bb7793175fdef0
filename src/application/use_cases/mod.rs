pub mod deal_operations;

pub use deal_operations::*;
