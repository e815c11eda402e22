use super::view_model::SupplierDetailsViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::domain::a001_supplier::SupplierDto;
use leptos::prelude::*;

#[component]
pub fn SupplierDetails(
    initial: Option<SupplierDto>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let vm = SupplierDetailsViewModel::new(initial);

    view! {
        <div class="details-container supplier-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Edit Supplier" } else { "New Supplier" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="supplier-name">{"Supplier Name"}</label>
                    <input
                        type="text"
                        id="supplier-name"
                        required
                        prop:value=move || vm.form.get().name
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |_| vm.save_command(ctx, on_saved)
                    disabled=move || !vm.is_form_valid()
                >
                    {icon("save")}
                    {move || if vm.is_edit_mode() { "Update Supplier" } else { "Add Supplier" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
