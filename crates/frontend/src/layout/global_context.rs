use contracts::shared::store::AppState;
use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use web_sys::window;

/// Экран (вкладка) приложения
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Products,
    Users,
    Orders,
    Suppliers,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::Products,
        Screen::Users,
        Screen::Orders,
        Screen::Suppliers,
    ];

    /// Значение параметра `active` в URL
    pub fn key(&self) -> &'static str {
        match self {
            Screen::Products => "products",
            Screen::Users => "users",
            Screen::Orders => "orders",
            Screen::Suppliers => "suppliers",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Products => "Products",
            Screen::Users => "Users",
            Screen::Orders => "Orders",
            Screen::Suppliers => "Suppliers",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Screen::Products => "products",
            Screen::Users => "users",
            Screen::Orders => "orders",
            Screen::Suppliers => "suppliers",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// Активный экран из строки запроса (`?active=orders`)
pub fn screen_from_query(search: &str) -> Option<Screen> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").and_then(|key| Screen::from_key(key))
}

/// Строка запроса для активного экрана
pub fn query_for_screen(screen: Screen) -> String {
    let query_string = serde_qs::to_string(&HashMap::from([(
        "active".to_string(),
        screen.key().to_string(),
    )]))
    .unwrap_or_default();
    format!("?{}", query_string)
}

/// Глобальное состояние UI: активная вкладка и все данные приложения.
///
/// Данные живут только в памяти вкладки браузера; сессия начинается с пустых
/// списков.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Screen>,
    pub state: RwSignal<AppState>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Screen::default()),
            state: RwSignal::new(AppState::new()),
        }
    }

    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(screen) = screen_from_query(&search) {
            self.activate(screen);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = query_for_screen(this.active.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn activate(&self, screen: Screen) {
        log::debug!("activate screen: {}", screen.key());
        self.active.set(screen);
    }

    /// Применить изменение: новое состояние целиком заменяет старое
    pub fn apply(&self, next: AppState) {
        self.state.set(next);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_round_trip() {
        for screen in Screen::ALL {
            assert_eq!(screen_from_query(&query_for_screen(screen)), Some(screen));
        }
    }

    #[test]
    fn test_unknown_or_missing_screen() {
        assert_eq!(screen_from_query(""), None);
        assert_eq!(screen_from_query("?active=dashboard"), None);
        assert_eq!(screen_from_query("?other=1"), None);
    }

    #[test]
    fn test_query_shape() {
        assert_eq!(query_for_screen(Screen::Orders), "?active=orders");
    }

    #[test]
    fn test_session_starts_empty() {
        let ctx = AppGlobalContext::new();
        assert_eq!(ctx.active.get_untracked(), Screen::Products);
        assert_eq!(ctx.state.get_untracked(), AppState::new());
    }
}
