use super::view_model::OrderDetailsViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::domain::a004_order::{OrderDto, OrderStatus};
use contracts::domain::common::{AggregateRoot, EntityId};
use leptos::prelude::*;

/// Варианты выпадающего списка: (id, имя)
fn options<A: AggregateRoot>(items: &[A]) -> Vec<(EntityId, String)> {
    items
        .iter()
        .map(|i| (i.id(), i.display_name().to_string()))
        .collect()
}

fn option_views(items: Vec<(EntityId, String)>, placeholder: &'static str) -> impl IntoView {
    view! {
        <option value="">{placeholder}</option>
        {items.into_iter().map(|(id, name)| {
            view! { <option value=id.to_string()>{name}</option> }
        }).collect_view()}
    }
}

#[component]
pub fn OrderDetails(
    initial: Option<OrderDto>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let vm = OrderDetailsViewModel::new(initial);

    view! {
        <div class="details-container order-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Edit Order" } else { "New Order" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="order-user">{"User"}</label>
                    <select
                        id="order-user"
                        required
                        prop:value=move || vm.form.get().user_id
                        on:change=move |ev| vm.form.update(|f| f.user_id = event_target_value(&ev))
                    >
                        {move || option_views(ctx.state.with(|s| options(&s.users)), "Select User")}
                    </select>
                </div>

                <div class="form-group">
                    <label for="order-product">{"Product"}</label>
                    <select
                        id="order-product"
                        required
                        prop:value=move || vm.form.get().product_id
                        on:change=move |ev| vm.select_product(ctx, event_target_value(&ev))
                    >
                        {move || option_views(ctx.state.with(|s| options(&s.products)), "Select Product")}
                    </select>
                </div>

                <div class="form-group">
                    <label for="order-quantity">{"Quantity"}</label>
                    <input
                        type="number"
                        id="order-quantity"
                        min="1"
                        required
                        prop:value=move || vm.form.get().quantity
                        on:input=move |ev| vm.form.update(|f| f.quantity = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="order-status">{"Status"}</label>
                    <select
                        id="order-status"
                        prop:value=move || vm.form.get().status.as_str()
                        on:change=move |ev| vm.select_status(event_target_value(&ev))
                    >
                        {OrderStatus::ALL.into_iter().map(|status| {
                            view! { <option value=status.as_str()>{status.label()}</option> }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="order-date">{"Order Date"}</label>
                    <input
                        type="date"
                        id="order-date"
                        required
                        prop:value=move || vm.form.get().order_date
                        on:input=move |ev| vm.form.update(|f| f.order_date = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="order-delivery-date">{"Delivery Date (Optional)"}</label>
                    <input
                        type="date"
                        id="order-delivery-date"
                        prop:value=move || vm.form.get().delivery_date
                        on:input=move |ev| vm.form.update(|f| f.delivery_date = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="order-supplier">{"Supplier"}</label>
                    <select
                        id="order-supplier"
                        required
                        prop:value=move || vm.form.get().supplier_id
                        on:change=move |ev| vm.select_supplier(ctx, event_target_value(&ev))
                    >
                        {move || option_views(ctx.state.with(|s| options(&s.suppliers)), "Select Supplier")}
                    </select>
                </div>

                <div class="form-group">
                    <label for="order-price">{"Price (CZK)"}</label>
                    <input
                        type="number"
                        id="order-price"
                        min="0"
                        step="0.01"
                        required
                        prop:value=move || vm.form.get().supplier_price
                        on:input=move |ev| vm.form.update(|f| f.supplier_price = event_target_value(&ev))
                    />
                </div>

                <div class="form-group form-group--summary">
                    <label>{"Total Cost"}</label>
                    <span>{move || vm.total_label()}</span>
                </div>
            </div>

            <div class="details-actions">
                <button class="btn btn-primary" on:click=move |_| vm.save_command(ctx, on_saved)>
                    {icon("save")}
                    {move || if vm.is_edit_mode() { "Update Order" } else { "Create Order" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
