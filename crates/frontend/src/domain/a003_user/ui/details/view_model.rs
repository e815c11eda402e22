use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a003_user::UserDto;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct UserDetailsViewModel {
    pub form: RwSignal<UserDto>,
    pub error: RwSignal<Option<String>>,
}

impl UserDetailsViewModel {
    pub fn new(initial: Option<UserDto>) -> Self {
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

    pub fn save_command(&self, ctx: AppGlobalContext, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        match ctx.state.with_untracked(|s| s.save_user(&current)) {
            Ok(next) => {
                log::debug!("user saved: {:?}", current.id);
                ctx.apply(next);
                on_saved.run(());
            }
            Err(e) => self.error.set(Some(e.to_string())),
        }
    }
}
