use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a004_order::{OrderDto, OrderStatus};
use contracts::shared::number_format::format_money;
use leptos::prelude::*;

/// ViewModel for Order details form
#[derive(Clone, Copy)]
pub struct OrderDetailsViewModel {
    pub form: RwSignal<OrderDto>,
    pub error: RwSignal<Option<String>>,
}

impl OrderDetailsViewModel {
    pub fn new(initial: Option<OrderDto>) -> Self {
        Self {
            form: RwSignal::new(initial.unwrap_or_else(OrderDto::new_for_today)),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    /// Выбор товара подставляет самого дешёвого поставщика и его цену
    pub fn select_product(&self, ctx: AppGlobalContext, product_id: String) {
        ctx.state.with_untracked(|s| {
            self.form.update(|f| f.select_product(&product_id, &s.products));
        });
    }

    /// Выбор поставщика подставляет его цену на выбранный товар
    pub fn select_supplier(&self, ctx: AppGlobalContext, supplier_id: String) {
        ctx.state.with_untracked(|s| {
            self.form.update(|f| f.select_supplier(&supplier_id, &s.products));
        });
    }

    pub fn select_status(&self, raw: String) {
        if let Some(status) = OrderStatus::from_str_opt(&raw) {
            self.form.update(|f| f.status = status);
        }
    }

    /// Стоимость для подсказки в форме
    pub fn total_label(&self) -> String {
        self.form
            .with(|f| f.preview_total())
            .map(format_money)
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn save_command(&self, ctx: AppGlobalContext, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        match ctx.state.with_untracked(|s| s.save_order(&current)) {
            Ok(next) => {
                log::debug!(
                    "order saved: {:?}, product {}, supplier {}",
                    current.id,
                    current.product_id,
                    current.supplier_id
                );
                ctx.apply(next);
                on_saved.run(());
            }
            Err(e) => self.error.set(Some(e.to_string())),
        }
    }
}
