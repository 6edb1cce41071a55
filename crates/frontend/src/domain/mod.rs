pub mod refunds;
