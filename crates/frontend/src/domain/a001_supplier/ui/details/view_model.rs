use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a001_supplier::SupplierDto;
use leptos::prelude::*;

/// ViewModel for Supplier details form
#[derive(Clone, Copy)]
pub struct SupplierDetailsViewModel {
    pub form: RwSignal<SupplierDto>,
    pub error: RwSignal<Option<String>>,
}

impl SupplierDetailsViewModel {
    pub fn new(initial: Option<SupplierDto>) -> Self {
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

    /// Сохранить форму: новое состояние заменяет список поставщиков целиком
    pub fn save_command(&self, ctx: AppGlobalContext, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        match ctx.state.with_untracked(|s| s.save_supplier(&current)) {
            Ok(next) => {
                log::debug!("supplier saved: {:?}", current.id);
                ctx.apply(next);
                on_saved.run(());
            }
            Err(e) => self.error.set(Some(e.to_string())),
        }
    }
}
