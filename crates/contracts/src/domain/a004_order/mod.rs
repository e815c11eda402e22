pub mod aggregate;
pub mod fields;

pub use aggregate::{Order, OrderDto, OrderStatus};
