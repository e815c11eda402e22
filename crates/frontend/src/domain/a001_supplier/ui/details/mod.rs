//! Supplier Details UI Module
//!
//! MVVM:
//! - view_model.rs: форма, валидация и команда сохранения в AppState
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::SupplierDetails;
pub use view_model::SupplierDetailsViewModel;
