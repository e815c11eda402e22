use super::view_model::UserDetailsViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::domain::a003_user::UserDto;
use leptos::prelude::*;

#[component]
pub fn UserDetails(
    initial: Option<UserDto>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let vm = UserDetailsViewModel::new(initial);

    view! {
        <div class="details-container user-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Edit User" } else { "New User" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="user-name">{"Name"}</label>
                    <input
                        type="text"
                        id="user-name"
                        required
                        prop:value=move || vm.form.get().name
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="user-email">{"Email"}</label>
                    <input
                        type="email"
                        id="user-email"
                        prop:value=move || vm.form.get().email
                        on:input=move |ev| vm.form.update(|f| f.email = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="user-department">{"Department"}</label>
                    <input
                        type="text"
                        id="user-department"
                        prop:value=move || vm.form.get().department
                        on:input=move |ev| vm.form.update(|f| f.department = event_target_value(&ev))
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
                    {move || if vm.is_edit_mode() { "Update User" } else { "Add User" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
