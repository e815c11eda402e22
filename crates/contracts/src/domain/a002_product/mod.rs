pub mod aggregate;
pub mod fields;

pub use aggregate::{Product, ProductDto, SupplierPrice};
