pub mod pagination;

pub use pagination::{BreakAnalysis, check_block_fit, passes_threshold};
