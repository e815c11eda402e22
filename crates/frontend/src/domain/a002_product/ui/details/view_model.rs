use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a002_product::ProductDto;
use contracts::domain::common::EntityId;
use leptos::prelude::*;

/// ViewModel for Product details form
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductDto>,
    pub error: RwSignal<Option<String>>,
}

impl ProductDetailsViewModel {
    pub fn new(initial: Option<ProductDto>) -> Self {
        Self {
            form: RwSignal::new(initial.unwrap_or_default()),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| f.validate().is_ok())
    }

    /// Цена поставщика из поля ввода; пустое значение убирает поставщика
    pub fn set_price(&self, supplier_id: EntityId, raw: String) {
        let mut next = self.form.get_untracked();
        match next.set_supplier_price(supplier_id, &raw) {
            Ok(()) => {
                self.form.set(next);
                self.error.set(None);
            }
            Err(e) => self.error.set(Some(e.to_string())),
        }
    }

    pub fn save_command(&self, ctx: AppGlobalContext, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        match ctx.state.with_untracked(|s| s.save_product(&current)) {
            Ok(next) => {
                log::debug!(
                    "product saved: {:?}, {} supplier prices",
                    current.id,
                    current.suppliers.len()
                );
                ctx.apply(next);
                on_saved.run(());
            }
            Err(e) => self.error.set(Some(e.to_string())),
        }
    }
}
