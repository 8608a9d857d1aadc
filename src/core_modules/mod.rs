pub mod filter_error;
pub mod median_smoother;
pub mod padding;
pub mod param_list;
pub mod point;
pub mod utils;
