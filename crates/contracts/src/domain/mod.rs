pub mod common;
pub mod refund;
