pub mod date_utils;
pub mod errors;
pub mod export;
pub mod filter;
pub mod number_format;
pub mod pricing;
pub mod store;
