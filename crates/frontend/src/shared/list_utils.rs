/// Универсальные утилиты для списков: состояние фильтров/сортировки и панель поиска
use crate::shared::components::filter_panel::FilterPanel;
use contracts::shared::filter::sort::sort_indicator;
use contracts::shared::filter::{toggle_sort, FieldKind, FieldSpec, FilterValues, SortConfig};
use leptos::prelude::*;

/// Состояние панели поиска одного экрана
#[derive(Clone, Copy)]
pub struct ListControls {
    pub filters: RwSignal<FilterValues>,
    pub sort: RwSignal<Option<SortConfig>>,
    pub expanded: RwSignal<bool>,
}

impl ListControls {
    pub fn new() -> Self {
        Self {
            filters: RwSignal::new(FilterValues::new()),
            sort: RwSignal::new(None),
            expanded: RwSignal::new(true),
        }
    }

    pub fn set_filter(&self, key: &str, value: String) {
        self.filters.update(|f| f.set(key, &value));
    }

    pub fn clear_filters(&self) {
        self.filters.update(|f| f.clear());
    }

    /// Клик по полю сортировки: none -> asc -> desc -> none
    pub fn toggle_sort(&self, key: &str) {
        let next = self.sort.with(|current| toggle_sort(current.as_ref(), key));
        self.sort.set(next);
    }
}

impl Default for ListControls {
    fn default() -> Self {
        Self::new()
    }
}

/// Панель поиска: поля фильтров по описаниям `fields` и кнопки сортировки
#[component]
pub fn SearchBar(
    /// Описания полей (варианты выбора могут зависеть от данных)
    #[prop(into)]
    fields: Signal<Vec<FieldSpec>>,
    controls: ListControls,
) -> impl IntoView {
    let active_count =
        Signal::derive(move || controls.filters.with(|f| f.active_count(&fields.get())));

    view! {
        <FilterPanel
            is_expanded=controls.expanded
            active_filters_count=active_count
            on_clear=Callback::new(move |_| controls.clear_filters())
        >
            <div class="filter-panel__grid">
                {move || fields.get().into_iter().map(|field| {
                    view! {
                        <div class="form-group">
                            <label>{field.label.clone()}</label>
                            {filter_input(field, controls)}
                        </div>
                    }
                }).collect_view()}
            </div>
            <div class="filter-panel__sort">
                {move || fields.get().into_iter().map(|field| {
                    let key = field.name.clone();
                    let key_for_class = key.clone();
                    let key_for_label = key.clone();
                    let label = field.label.clone();
                    view! {
                        <button
                            class="sort-chip"
                            class:sort-chip--active=move || {
                                controls.sort.with(|s| s.as_ref().map(|s| s.key == key_for_class).unwrap_or(false))
                            }
                            on:click=move |_| controls.toggle_sort(&key)
                        >
                            {move || format!(
                                "{}{}",
                                label,
                                controls.sort.with(|s| sort_indicator(s.as_ref(), &key_for_label)),
                            )}
                        </button>
                    }
                }).collect_view()}
            </div>
        </FilterPanel>
    }
}

fn filter_input(field: FieldSpec, controls: ListControls) -> AnyView {
    match field.kind {
        FieldKind::Text => {
            let key = field.name.clone();
            let key_for_value = key.clone();
            let placeholder = format!("Search by {}", field.label.to_lowercase());
            view! {
                <input
                    type="text"
                    class="input-field"
                    placeholder=placeholder
                    prop:value=move || controls.filters.with(|f| f.raw(&key_for_value))
                    on:input=move |ev| controls.set_filter(&key, event_target_value(&ev))
                />
            }
            .into_any()
        }
        FieldKind::DateRange => {
            let start = field.start_key();
            let start_value = start.clone();
            let end = field.end_key();
            let end_value = end.clone();
            view! {
                <div class="filter-panel__range">
                    <input
                        type="date"
                        class="input-field"
                        placeholder="From"
                        prop:value=move || controls.filters.with(|f| f.raw(&start_value))
                        on:input=move |ev| controls.set_filter(&start, event_target_value(&ev))
                    />
                    <input
                        type="date"
                        class="input-field"
                        placeholder="To"
                        prop:value=move || controls.filters.with(|f| f.raw(&end_value))
                        on:input=move |ev| controls.set_filter(&end, event_target_value(&ev))
                    />
                </div>
            }
            .into_any()
        }
        FieldKind::Select { options } => {
            let key = field.name.clone();
            let key_for_value = key.clone();
            view! {
                <select
                    class="input-field"
                    prop:value=move || controls.filters.with(|f| f.raw(&key_for_value))
                    on:change=move |ev| controls.set_filter(&key, event_target_value(&ev))
                >
                    <option value="">"All"</option>
                    {options.into_iter().map(|option| {
                        view! { <option value=option.clone()>{option.clone()}</option> }
                    }).collect_view()}
                </select>
            }
            .into_any()
        }
    }
}

/// Подтверждение удаления через диалог браузера
pub fn confirm_delete(what: &str) -> bool {
    web_sys::window()
        .and_then(|win| {
            win.confirm_with_message(&format!("Are you sure you want to delete this {}?", what))
                .ok()
        })
        .unwrap_or(false)
}
