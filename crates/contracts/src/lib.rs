pub mod domain;
pub mod error;
pub mod format;
pub mod listing;
pub mod mock;

pub use error::RefundError;
