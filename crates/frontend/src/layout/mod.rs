pub mod center;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Каркас приложения.
///
/// ```text
/// +------------------------------------------+
/// |  Header: Products | Users | Orders | ... |
/// +------------------------------------------+
/// |              Center (экран)               |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <div class="app-main">
                <center::Center />
            </div>
        </div>
    }
}
