use crate::domain::a004_order::ui::details::OrderDetails;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::export::export_rows;
use crate::shared::icons::icon;
use crate::shared::list_utils::{confirm_delete, ListControls, SearchBar};
use contracts::domain::a004_order::fields::{export_row, search_fields};
use contracts::domain::a004_order::{Order, OrderDto, OrderStatus};
use contracts::domain::common::{AggregateRoot, EntityId};
use contracts::shared::date_utils::format_date;
use contracts::shared::number_format::format_money;
use contracts::shared::store::AppState;
use leptos::prelude::*;

/// Строка таблицы заказов со всеми ссылками, разрешёнными в имена
#[derive(Clone, Debug)]
pub struct OrderRow {
    pub id: EntityId,
    pub user: String,
    pub product: String,
    pub quantity: i64,
    pub supplier: String,
    pub unit_price: String,
    pub total_cost: String,
    pub order_date: String,
    pub delivery_date: String,
    pub status: OrderStatus,
    pub dto: OrderDto,
}

impl OrderRow {
    fn new(o: &Order, state: &AppState) -> Self {
        Self {
            id: o.id,
            user: state.user_name(o.user_id),
            product: state.product_name(o.product_id),
            quantity: o.quantity,
            supplier: state.supplier_name(o.supplier_id),
            unit_price: format_money(o.supplier_price),
            total_cost: format_money(o.total_cost),
            order_date: format_date(Some(&o.order_date)),
            delivery_date: format_date(o.delivery_date.as_deref()),
            status: o.status,
            dto: o.to_dto(),
        }
    }
}

fn status_badge_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "badge badge--warning",
        OrderStatus::Delivered => "badge badge--success",
        OrderStatus::Cancelled => "badge badge--error",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let controls = ListControls::new();
    let (error, set_error) = signal::<Option<String>>(None);
    let editing = RwSignal::new(None::<Option<OrderDto>>);

    // Варианты выбора (имена пользователей, товаров, поставщиков) зависят от данных
    let fields = Signal::derive(move || ctx.state.with(search_fields));

    let items = Memo::new(move |_| {
        let fields = fields.get();
        let filters = controls.filters.get();
        let sort = controls.sort.get();
        ctx.state.with(|s| s.order_view(&fields, &filters, sort.as_ref()))
    });

    let handle_delete = move |id: EntityId| {
        if !confirm_delete(&Order::element_name().to_lowercase()) {
            return;
        }
        log::debug!("delete order {}", id);
        ctx.apply(ctx.state.with_untracked(|s| s.delete_order(id)));
    };

    let handle_export = move |_| {
        let rows: Vec<_> = ctx.state.with_untracked(|state| {
            items.with_untracked(|list| list.iter().map(|o| export_row(o, state)).collect())
        });
        match export_rows(&rows, Order::collection_name()) {
            Ok(()) => set_error.set(None),
            Err(e) => {
                log::error!("order export failed: {}", e);
                set_error.set(Some(e));
            }
        }
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{Order::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=handle_export>
                        {icon("download")}
                        {"Export"}
                    </button>
                    <button class="button button--primary" on:click=move |_| editing.set(Some(None))>
                        {icon("plus")}
                        {"New Order"}
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
                <OrderDetails
                    initial=initial
                    on_saved=Callback::new(move |_| editing.set(None))
                    on_cancel=Callback::new(move |_| editing.set(None))
                />
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Order ID"}</th>
                            <th class="table__header-cell">{"User"}</th>
                            <th class="table__header-cell">{"Product"}</th>
                            <th class="table__header-cell">{"Quantity"}</th>
                            <th class="table__header-cell">{"Supplier"}</th>
                            <th class="table__header-cell">{"Unit Price (CZK)"}</th>
                            <th class="table__header-cell">{"Total Cost (CZK)"}</th>
                            <th class="table__header-cell">{"Order Date"}</th>
                            <th class="table__header-cell">{"Delivery Date"}</th>
                            <th class="table__header-cell">{"Status"}</th>
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows: Vec<OrderRow> = ctx.state.with(|state| {
                                items.with(|list| list.iter().map(|o| OrderRow::new(o, state)).collect())
                            });
                            rows.into_iter().map(|row| {
                                let id = row.id;
                                let dto = row.dto.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{format!("#{}", row.id)}</td>
                                        <td class="table__cell">{row.user}</td>
                                        <td class="table__cell">{row.product}</td>
                                        <td class="table__cell">{row.quantity}</td>
                                        <td class="table__cell">{row.supplier}</td>
                                        <td class="table__cell">{row.unit_price}</td>
                                        <td class="table__cell">{row.total_cost}</td>
                                        <td class="table__cell">{row.order_date}</td>
                                        <td class="table__cell">{row.delivery_date}</td>
                                        <td class="table__cell">
                                            <span class=status_badge_class(row.status)>{row.status.label()}</span>
                                        </td>
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
                            }).collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
