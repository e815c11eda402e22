//! Order Details UI Module
//!
//! MVVM:
//! - view_model.rs: форма заказа, подстановка поставщика и цены, сохранение
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::OrderDetails;
pub use view_model::OrderDetailsViewModel;
