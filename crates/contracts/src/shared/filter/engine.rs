use super::field::{find_accessor, FieldAccessor, FieldKind, FieldSpec, FieldValue, FilterValues};
use super::sort::{SortConfig, SortDirection};
use crate::shared::date_utils::is_date_in_range;

/// Отфильтровать и отсортировать список.
///
/// Все активные фильтры объединяются по И. Фильтры по полям без описания в
/// `fields` или без аксессора игнорируются. Сортировка стабильная: записи с
/// равными значениями сохраняют исходный порядок в обоих направлениях.
pub fn filter_and_sort<T: Clone, C>(
    items: &[T],
    fields: &[FieldSpec],
    accessors: &[FieldAccessor<T, C>],
    ctx: &C,
    filters: &FilterValues,
    sort: Option<&SortConfig>,
) -> Vec<T> {
    let filtered: Vec<&T> = items
        .iter()
        .filter(|item| matches_filters(*item, fields, accessors, ctx, filters))
        .collect();

    let Some(accessor) = sort.and_then(|cfg| find_accessor(accessors, &cfg.key)) else {
        return filtered.into_iter().cloned().collect();
    };
    let descending = sort.map(|cfg| cfg.direction) == Some(SortDirection::Desc);

    // Ключ считается один раз на запись: разрешение ссылок идёт линейным поиском
    let mut keyed: Vec<(FieldValue, &T)> = filtered
        .into_iter()
        .map(|item| (accessor.value(item, ctx), item))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| {
        let cmp = a.compare(b);
        if descending {
            cmp.reverse()
        } else {
            cmp
        }
    });

    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}

/// Проходит ли запись все активные фильтры
pub fn matches_filters<T, C>(
    item: &T,
    fields: &[FieldSpec],
    accessors: &[FieldAccessor<T, C>],
    ctx: &C,
    filters: &FilterValues,
) -> bool {
    fields.iter().all(|field| {
        let Some(accessor) = find_accessor(accessors, &field.name) else {
            return true;
        };
        match &field.kind {
            FieldKind::Text => match filters.get(&field.name) {
                Some(needle) => contains_ignore_case(&accessor.value(item, ctx).as_search_text(), needle),
                None => true,
            },
            FieldKind::Select { .. } => match filters.get(&field.name) {
                Some(needle) => {
                    matches_on_word_boundaries(&accessor.value(item, ctx).as_search_text(), needle)
                }
                None => true,
            },
            FieldKind::DateRange => {
                let (Some(start), Some(end)) =
                    (filters.get(&field.start_key()), filters.get(&field.end_key()))
                else {
                    return true;
                };
                match accessor.value(item, ctx) {
                    FieldValue::Date(raw) => is_date_in_range(raw.as_deref(), start, end),
                    other => is_date_in_range(Some(&other.as_search_text()), start, end),
                }
            }
        }
    })
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Совпадение без учёта регистра, при котором найденный фрагмент не
/// разрезает слово: "John" находится в "Dr. John Smith", но не в "Johnson".
/// Полное значение варианта из списка всегда совпадает само с собой.
fn matches_on_word_boundaries(haystack: &str, needle: &str) -> bool {
    let haystack = haystack.to_lowercase();
    let needle = needle.to_lowercase();
    let (Some(first), Some(last)) = (needle.chars().next(), needle.chars().last()) else {
        return true;
    };

    let mut from = 0;
    while let Some(offset) = haystack[from..].find(&needle) {
        let pos = from + offset;
        let end = pos + needle.len();

        let before_ok = !first.is_alphanumeric()
            || haystack[..pos]
                .chars()
                .next_back()
                .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = !last.is_alphanumeric()
            || haystack[end..]
                .chars()
                .next()
                .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }

        from = pos + first.len_utf8();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter::toggle_sort;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        qty: f64,
        date: Option<&'static str>,
    }

    fn name(r: &Row, _: &()) -> FieldValue {
        FieldValue::from(r.name)
    }

    fn qty(r: &Row, _: &()) -> FieldValue {
        FieldValue::Number(r.qty)
    }

    fn date(r: &Row, _: &()) -> FieldValue {
        FieldValue::Date(r.date.map(str::to_string))
    }

    const ACCESSORS: &[FieldAccessor<Row, ()>] = &[
        FieldAccessor { name: "name", extract: name },
        FieldAccessor { name: "qty", extract: qty },
        FieldAccessor { name: "date", extract: date },
    ];

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("name", "Name"),
            FieldSpec::text("qty", "Quantity"),
            FieldSpec::date_range("date", "Date"),
        ]
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Composite Resin", qty: 2.0, date: Some("2024-03-01") },
            Row { name: "Dental Cement", qty: 1.0, date: Some("2024-03-10") },
            Row { name: "Bonding Agent", qty: 2.0, date: None },
        ]
    }

    fn run(filters: &FilterValues, sort: Option<&SortConfig>) -> Vec<Row> {
        filter_and_sort(&rows(), &fields(), ACCESSORS, &(), filters, sort)
    }

    #[test]
    fn test_no_filters_returns_everything_in_order() {
        assert_eq!(run(&FilterValues::new(), None), rows());
    }

    #[test]
    fn test_empty_text_filter_is_noop() {
        let filters = FilterValues::new().with("name", "");
        assert_eq!(run(&filters, None), rows());
    }

    #[test]
    fn test_text_filter_is_case_insensitive_substring() {
        let filters = FilterValues::new().with("name", "CEM");
        let result = run(&filters, None);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Dental Cement");
    }

    #[test]
    fn test_text_filter_on_number_uses_display_form() {
        let filters = FilterValues::new().with("qty", "2");
        let names: Vec<_> = run(&filters, None).iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Composite Resin", "Bonding Agent"]);
    }

    #[test]
    fn test_filters_are_combined_with_and() {
        let filters = FilterValues::new().with("name", "e").with("qty", "1");
        let result = run(&filters, None);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Dental Cement");
    }

    #[test]
    fn test_date_range_inclusive() {
        let filters = FilterValues::new()
            .with("dateStart", "2024-03-01")
            .with("dateEnd", "2024-03-05");
        let result = run(&filters, None);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Composite Resin");
    }

    #[test]
    fn test_date_range_with_one_bound_is_not_applied() {
        let filters = FilterValues::new().with("dateStart", "2024-03-05");
        assert_eq!(run(&filters, None).len(), 3);
    }

    #[test]
    fn test_missing_item_date_never_matches_active_range() {
        let filters = FilterValues::new()
            .with("dateStart", "2000-01-01")
            .with("dateEnd", "2100-01-01");
        let names: Vec<_> = run(&filters, None).iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Composite Resin", "Dental Cement"]);
    }

    #[test]
    fn test_unknown_filter_key_is_ignored() {
        let filters = FilterValues::new().with("color", "red");
        assert_eq!(run(&filters, None), rows());
    }

    #[test]
    fn test_sort_cycle_returns_to_original_order() {
        let original: Vec<_> = rows().iter().map(|r| r.name).collect();

        let first = toggle_sort(None, "name");
        let asc: Vec<_> = run(&FilterValues::new(), first.as_ref())
            .iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(asc, vec!["Bonding Agent", "Composite Resin", "Dental Cement"]);

        let second = toggle_sort(first.as_ref(), "name");
        let desc: Vec<_> = run(&FilterValues::new(), second.as_ref())
            .iter()
            .map(|r| r.name)
            .collect();
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);

        let third = toggle_sort(second.as_ref(), "name");
        assert!(third.is_none());
        let back: Vec<_> = run(&FilterValues::new(), third.as_ref())
            .iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(back, original);
    }

    #[test]
    fn test_sort_is_stable_for_equal_values() {
        let asc: Vec<_> = run(&FilterValues::new(), Some(&SortConfig::asc("qty")))
            .iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(asc, vec!["Dental Cement", "Composite Resin", "Bonding Agent"]);

        let desc: Vec<_> = run(&FilterValues::new(), Some(&SortConfig::desc("qty")))
            .iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(desc, vec!["Composite Resin", "Bonding Agent", "Dental Cement"]);
    }

    #[test]
    fn test_sort_by_date_puts_missing_first() {
        let asc: Vec<_> = run(&FilterValues::new(), Some(&SortConfig::asc("date")))
            .iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(asc, vec!["Bonding Agent", "Composite Resin", "Dental Cement"]);
    }

    #[test]
    fn test_unknown_sort_key_keeps_order() {
        assert_eq!(
            run(&FilterValues::new(), Some(&SortConfig::asc("color"))),
            rows()
        );
    }

    #[test]
    fn test_word_boundary_match() {
        assert!(matches_on_word_boundaries("Dr. John Smith", "John"));
        assert!(matches_on_word_boundaries("Dr. John Smith", "dr. john smith"));
        assert!(!matches_on_word_boundaries("Dr. Sarah Johnson", "John"));
        assert!(matches_on_word_boundaries("Dr. Sarah Johnson", "Johnson"));
        assert!(matches_on_word_boundaries("pending", "pending"));
        assert!(!matches_on_word_boundaries("pending", "end"));
        // Второе вхождение подходит, первое нет
        assert!(matches_on_word_boundaries("Johnson & John", "john"));
    }
}
