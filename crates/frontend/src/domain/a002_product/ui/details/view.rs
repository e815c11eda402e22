use super::view_model::ProductDetailsViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::domain::a002_product::ProductDto;
use contracts::domain::common::EntityId;
use leptos::prelude::*;

/// Текстовое поле формы товара
fn text_field(
    vm: ProductDetailsViewModel,
    id: &'static str,
    label: &'static str,
    get: fn(&ProductDto) -> String,
    set: fn(&mut ProductDto, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type="text"
                id=id
                prop:value=move || vm.form.with(get)
                on:input=move |ev| vm.form.update(|f| set(f, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn ProductDetails(
    initial: Option<ProductDto>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let vm = ProductDetailsViewModel::new(initial);

    view! {
        <div class="details-container product-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Edit Product" } else { "New Product" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                {text_field(vm, "product-name", "Product Name", |f| f.name.clone(), |f, v| f.name = v)}
                {text_field(vm, "product-category", "Category", |f| f.category.clone(), |f, v| f.category = v)}
                {text_field(vm, "product-manufacturer", "Manufacturer", |f| f.manufacturer.clone(), |f, v| f.manufacturer = v)}
                {text_field(vm, "product-reference", "Reference Number", |f| f.reference_number.clone(), |f, v| f.reference_number = v)}
                {text_field(vm, "product-unit", "Unit", |f| f.unit.clone(), |f, v| f.unit = v)}

                <div class="form-group">
                    <label>{"Supplier Prices (CZK)"}</label>
                    {move || ctx.state.with(|s| s.suppliers.clone()).into_iter().map(|supplier| {
                        let supplier_id: EntityId = supplier.id;
                        view! {
                            <div class="details-form__price-row">
                                <span>{supplier.name}</span>
                                <input
                                    type="number"
                                    min="0"
                                    step="0.01"
                                    placeholder="Not offered"
                                    prop:value=move || vm.form.with(|f| f.price_input(supplier_id))
                                    on:change=move |ev| vm.set_price(supplier_id, event_target_value(&ev))
                                />
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |_| vm.save_command(ctx, on_saved)
                    disabled=move || !vm.is_form_valid()
                >
                    {icon("save")}
                    {move || if vm.is_edit_mode() { "Update Product" } else { "Add Product" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
