use crate::domain::a002_product::ui::details::ProductDetails;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::export::export_rows;
use crate::shared::icons::icon;
use crate::shared::list_utils::{confirm_delete, ListControls, SearchBar};
use contracts::domain::a002_product::fields::{export_row, search_fields};
use contracts::domain::a002_product::{Product, ProductDto};
use contracts::domain::common::{AggregateRoot, EntityId};
use contracts::shared::number_format::format_money;
use contracts::shared::store::AppState;
use leptos::prelude::*;

/// Строка таблицы товаров: лучшая цена и имя поставщика уже разрешены
#[derive(Clone, Debug)]
pub struct ProductRow {
    pub id: EntityId,
    pub name: String,
    pub category: String,
    pub manufacturer: String,
    pub reference_number: String,
    pub unit: String,
    pub best_price: Option<String>,
    pub best_supplier: String,
    pub dto: ProductDto,
}

impl ProductRow {
    fn new(p: Product, state: &AppState) -> Self {
        let best = p.cheapest_supplier().copied();
        Self {
            id: p.id,
            best_price: best.map(|b| format_money(b.price)),
            best_supplier: best
                .map(|b| state.supplier_name(b.supplier_id))
                .unwrap_or_default(),
            dto: p.to_dto(),
            name: p.name,
            category: p.category,
            manufacturer: p.manufacturer,
            reference_number: p.reference_number,
            unit: p.unit,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let controls = ListControls::new();
    let (error, set_error) = signal::<Option<String>>(None);
    let editing = RwSignal::new(None::<Option<ProductDto>>);

    let fields = Signal::derive(search_fields);

    let items = Memo::new(move |_| {
        let fields = fields.get();
        let filters = controls.filters.get();
        let sort = controls.sort.get();
        ctx.state.with(|s| s.product_view(&fields, &filters, sort.as_ref()))
    });

    let handle_delete = move |id: EntityId| {
        if !confirm_delete(&Product::element_name().to_lowercase()) {
            return;
        }
        log::debug!("delete product {}", id);
        ctx.apply(ctx.state.with_untracked(|s| s.delete_product(id)));
    };

    let handle_export = move |_| {
        let rows: Vec<_> = ctx.state.with_untracked(|state| {
            items.with_untracked(|list| list.iter().map(|p| export_row(p, state)).collect())
        });
        match export_rows(&rows, Product::collection_name()) {
            Ok(()) => set_error.set(None),
            Err(e) => {
                log::error!("product export failed: {}", e);
                set_error.set(Some(e));
            }
        }
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{Product::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=handle_export>
                        {icon("download")}
                        {"Export"}
                    </button>
                    <button class="button button--primary" on:click=move |_| editing.set(Some(None))>
                        {icon("plus")}
                        {"New Product"}
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
                <ProductDetails
                    initial=initial
                    on_saved=Callback::new(move |_| editing.set(None))
                    on_cancel=Callback::new(move |_| editing.set(None))
                />
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Product"}</th>
                            <th class="table__header-cell">{"Category"}</th>
                            <th class="table__header-cell">{"Manufacturer"}</th>
                            <th class="table__header-cell">{"Reference"}</th>
                            <th class="table__header-cell">{"Unit"}</th>
                            <th class="table__header-cell">{"Best Price"}</th>
                            <th class="table__header-cell">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows: Vec<ProductRow> = ctx.state.with(|state| {
                                items.get().into_iter().map(|p| ProductRow::new(p, state)).collect()
                            });
                            rows.into_iter().map(|row| {
                                let id = row.id;
                                let dto = row.dto.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{row.name}</td>
                                        <td class="table__cell">{row.category}</td>
                                        <td class="table__cell">{row.manufacturer}</td>
                                        <td class="table__cell">{row.reference_number}</td>
                                        <td class="table__cell">{row.unit}</td>
                                        <td class="table__cell">
                                            {match row.best_price {
                                                Some(price) => view! {
                                                    <div>{price}</div>
                                                    <div class="table__cell-hint">{format!("from {}", row.best_supplier)}</div>
                                                }.into_any(),
                                                None => view! {
                                                    <span class="table__cell-hint">{"No suppliers"}</span>
                                                }.into_any(),
                                            }}
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
