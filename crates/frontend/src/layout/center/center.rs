use crate::domain::a001_supplier::ui::list::SupplierList;
use crate::domain::a002_product::ui::list::ProductList;
use crate::domain::a003_user::ui::list::UserList;
use crate::domain::a004_order::ui::list::OrderList;
use crate::layout::global_context::{AppGlobalContext, Screen};
use leptos::prelude::*;

/// Область содержимого: показывает экран активной вкладки
#[component]
pub fn Center() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            {move || match ctx.active.get() {
                Screen::Products => view! { <ProductList /> }.into_any(),
                Screen::Users => view! { <UserList /> }.into_any(),
                Screen::Orders => view! { <OrderList /> }.into_any(),
                Screen::Suppliers => view! { <SupplierList /> }.into_any(),
            }}
        </div>
    }
}
