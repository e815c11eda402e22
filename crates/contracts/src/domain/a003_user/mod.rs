pub mod aggregate;
pub mod fields;

pub use aggregate::{User, UserDto};
