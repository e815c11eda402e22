pub mod a001_supplier;
pub mod a002_product;
pub mod a003_user;
pub mod a004_order;
