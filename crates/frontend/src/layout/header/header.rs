use crate::layout::global_context::{AppGlobalContext, Screen};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <header data-zone="header" class="header">
            <nav class="header__content header__nav">
                {Screen::ALL.into_iter().map(|screen| {
                    view! {
                        <button
                            class="header__tab"
                            class:header__tab--active=move || ctx.active.get() == screen
                            on:click=move |_| ctx.activate(screen)
                        >
                            {icon(screen.icon())}
                            <span>{screen.title()}</span>
                        </button>
                    }
                }).collect_view()}
            </nav>
        </header>
    }
}
