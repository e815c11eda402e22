use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::shared::date_utils::parse_iso_date;

/// Тип поля фильтра
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    /// Поиск подстроки без учёта регистра
    Text,
    /// Интервал дат: ключи `<name>Start` и `<name>End`
    DateRange,
    /// Выбор из списка значений
    Select { options: Vec<String> },
}

/// Описание поля для панели поиска
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Text,
        }
    }

    pub fn date_range(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::DateRange,
        }
    }

    pub fn select(name: &str, label: &str, options: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Select { options },
        }
    }

    /// Ключ нижней границы интервала дат
    pub fn start_key(&self) -> String {
        format!("{}Start", self.name)
    }

    /// Ключ верхней границы интервала дат
    pub fn end_key(&self) -> String {
        format!("{}End", self.name)
    }

    /// Заполнен ли фильтр по этому полю
    pub fn is_active(&self, filters: &FilterValues) -> bool {
        match self.kind {
            FieldKind::DateRange => {
                filters.get(&self.start_key()).is_some() && filters.get(&self.end_key()).is_some()
            }
            _ => filters.get(&self.name).is_some(),
        }
    }
}

/// Разрешённое значение поля записи
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    /// Дата в исходном виде; разбирается при сравнении
    Date(Option<String>),
}

impl FieldValue {
    /// Строковое представление для поиска подстроки
    pub fn as_search_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Date(raw) => raw.clone().unwrap_or_default(),
        }
    }

    /// Сравнение для сортировки. Значения разных типов считаются равными.
    /// Пустые и неразобранные даты идут раньше корректных.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Number(a), FieldValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (FieldValue::Date(a), FieldValue::Date(b)) => {
                let a = a.as_deref().and_then(parse_iso_date);
                let b = b.as_deref().and_then(parse_iso_date);
                a.cmp(&b)
            }
            _ => Ordering::Equal,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Поле сущности `T`, значение которого извлекается с учётом контекста `C`
/// (например, состояния приложения для разрешения ссылок)
pub struct FieldAccessor<T, C> {
    pub name: &'static str,
    pub extract: fn(&T, &C) -> FieldValue,
}

impl<T, C> FieldAccessor<T, C> {
    pub fn value(&self, item: &T, ctx: &C) -> FieldValue {
        (self.extract)(item, ctx)
    }
}

pub fn find_accessor<'a, T, C>(
    accessors: &'a [FieldAccessor<T, C>],
    name: &str,
) -> Option<&'a FieldAccessor<T, C>> {
    accessors.iter().find(|a| a.name == name)
}

/// Текущие значения фильтров: имя поля -> введённое значение.
/// Пустое значение означает неактивный фильтр.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterValues(BTreeMap<String, String>);

impl FilterValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }

    /// Значение фильтра, если он активен (непустой)
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Значение для привязки к полю ввода (пустая строка, если не задано)
    pub fn raw(&self, key: &str) -> String {
        self.0.get(key).cloned().unwrap_or_default()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Нет ни одного активного значения
    pub fn is_empty(&self) -> bool {
        self.0.values().all(|value| value.is_empty())
    }

    /// Количество полей с активным фильтром (для бейджа на панели)
    pub fn active_count(&self, fields: &[FieldSpec]) -> usize {
        fields.iter().filter(|f| f.is_active(self)).count()
    }
}
