//! Utilities for date parsing and formatting
//!
//! Даты хранятся строками "YYYY-MM-DD" (как их отдаёт `<input type="date">`),
//! а разбираются только там, где нужно сравнение или отображение.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Разобрать ISO-дату. Допускается и полная дата-время: "2024-03-15T14:02:26Z".
/// Пустая или некорректная строка -> None.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = raw.parse::<NaiveDateTime>() {
        return Some(dt.date());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Входит ли дата в интервал [start, end] включительно.
/// Любая неразобранная дата (включая отсутствующую) -> false.
pub fn is_date_in_range(date: Option<&str>, start: &str, end: &str) -> bool {
    let Some(date) = date.and_then(parse_iso_date) else {
        return false;
    };
    match (parse_iso_date(start), parse_iso_date(end)) {
        (Some(start), Some(end)) => start <= date && date <= end,
        _ => false,
    }
}

/// Format ISO date for tables: "2024-03-01" -> "Mar 01, 2024".
/// Absent or invalid dates are shown as "-".
pub fn format_date(raw: Option<&str>) -> String {
    raw.and_then(parse_iso_date)
        .map(|d| d.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Сегодняшняя дата в формате "YYYY-MM-DD"
pub fn today_iso() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
