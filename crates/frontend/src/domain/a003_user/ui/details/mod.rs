//! User Details UI Module
//!
//! MVVM:
//! - view_model.rs: форма сотрудника и сохранение в AppState
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::UserDetails;
pub use view_model::UserDetailsViewModel;
