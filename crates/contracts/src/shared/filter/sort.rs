use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Активная сортировка: одно поле и направление
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: String,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn asc(key: &str) -> Self {
        Self {
            key: key.to_string(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(key: &str) -> Self {
        Self {
            key: key.to_string(),
            direction: SortDirection::Desc,
        }
    }

    pub fn is_ascending(&self) -> bool {
        self.direction == SortDirection::Asc
    }
}

/// Переключение сортировки по клику на поле.
///
/// Повторный клик по тому же полю: нет -> по возрастанию -> по убыванию -> нет.
/// Клик по другому полю всегда начинает с возрастания.
pub fn toggle_sort(current: Option<&SortConfig>, key: &str) -> Option<SortConfig> {
    match current {
        Some(cfg) if cfg.key == key => match cfg.direction {
            SortDirection::Asc => Some(SortConfig::desc(key)),
            SortDirection::Desc => None,
        },
        _ => Some(SortConfig::asc(key)),
    }
}

/// Индикатор сортировки для кнопки поля
pub fn sort_indicator(current: Option<&SortConfig>, key: &str) -> &'static str {
    match current {
        Some(cfg) if cfg.key == key => {
            if cfg.is_ascending() {
                " ↑"
            } else {
                " ↓"
            }
        }
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_cycle_on_same_key() {
        let first = toggle_sort(None, "name");
        assert_eq!(first, Some(SortConfig::asc("name")));
        let second = toggle_sort(first.as_ref(), "name");
        assert_eq!(second, Some(SortConfig::desc("name")));
        let third = toggle_sort(second.as_ref(), "name");
        assert_eq!(third, None);
    }

    #[test]
    fn test_toggle_other_key_resets_to_ascending() {
        let current = SortConfig::desc("name");
        assert_eq!(
            toggle_sort(Some(&current), "category"),
            Some(SortConfig::asc("category"))
        );
    }

    #[test]
    fn test_sort_indicator() {
        let asc = SortConfig::asc("name");
        assert_eq!(sort_indicator(Some(&asc), "name"), " ↑");
        assert_eq!(sort_indicator(Some(&asc), "unit"), "");
        assert_eq!(sort_indicator(Some(&SortConfig::desc("name")), "name"), " ↓");
        assert_eq!(sort_indicator(None, "name"), "");
    }
}
