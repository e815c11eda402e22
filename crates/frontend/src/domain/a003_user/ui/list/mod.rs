use crate::domain::a003_user::ui::details::UserDetails;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::export::export_rows;
use crate::shared::icons::icon;
use crate::shared::list_utils::{confirm_delete, ListControls, SearchBar};
use contracts::domain::a003_user::fields::{export_row, search_fields};
use contracts::domain::a003_user::{User, UserDto};
use contracts::domain::common::{AggregateRoot, EntityId};
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn UserList() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let controls = ListControls::new();
    let (error, set_error) = signal::<Option<String>>(None);
    let editing = RwSignal::new(None::<Option<UserDto>>);

    let fields = Signal::derive(search_fields);

    let items = Memo::new(move |_| {
        let fields = fields.get();
        let filters = controls.filters.get();
        let sort = controls.sort.get();
        ctx.state.with(|s| s.user_view(&fields, &filters, sort.as_ref()))
    });

    let handle_delete = move |id: EntityId| {
        if !confirm_delete(&User::element_name().to_lowercase()) {
            return;
        }
        log::debug!("delete user {}", id);
        ctx.apply(ctx.state.with_untracked(|s| s.delete_user(id)));
    };

    let handle_export = move |_| {
        let rows: Vec<_> = items.with_untracked(|list| list.iter().map(export_row).collect());
        match export_rows(&rows, User::collection_name()) {
            Ok(()) => set_error.set(None),
            Err(e) => {
                log::error!("user export failed: {}", e);
                set_error.set(Some(e));
            }
        }
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{User::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=handle_export>
                        {icon("download")}
                        {"Export"}
                    </button>
                    <button class="button button--primary" on:click=move |_| editing.set(Some(None))>
                        {icon("plus")}
                        {"New User"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <SearchBar fields=fields controls=controls />

            {move || editing.get().map(|initial| view! {
                <UserDetails
                    initial=initial
                    on_saved=Callback::new(move |_| editing.set(None))
                    on_cancel=Callback::new(move |_| editing.set(None))
                />
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Name"}</th>
                            <th class="table__header-cell">{"Email"}</th>
                            <th class="table__header-cell">{"Department"}</th>
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row: User| {
                            let id = row.id;
                            let dto = row.to_dto();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.email}</td>
                                    <td class="table__cell">{row.department}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button class="button button--ghost" on:click=move |_| editing.set(Some(Some(dto.clone())))>
                                            {icon("edit")}
                                        </button>
                                        <button class="button button--ghost" on:click=move |_| handle_delete(id)>
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
