//! Экспорт таблиц в CSV для Excel.
//!
//! Строки приходят уже отформатированными для отображения; экспорт ничего не
//! пересчитывает. Формат: UTF-8 с BOM, разделитель `;`, чтобы Excel открывал
//! файл как лист без мастера импорта.

use csv::{Terminator, WriterBuilder};

use super::errors::ExportError;

const UTF8_BOM: &str = "\u{FEFF}";

/// Одна запись экспорта: упорядоченные пары "колонка -> значение"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportRow {
    cells: Vec<(String, String)>,
}

impl ExportRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(mut self, key: &str, value: impl Into<String>) -> Self {
        self.cells.push((key.to_string(), value.into()));
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(k, _)| k.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Собрать CSV. Заголовок берётся из ключей первой записи в порядке объявления;
/// значения остальных записей берутся по этим ключам (нет ключа, значит пустая ячейка).
pub fn rows_to_csv(rows: &[ExportRow]) -> Result<String, ExportError> {
    let first = rows.first().ok_or(ExportError::Empty)?;
    let headers: Vec<&str> = first.keys().collect();

    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .terminator(Terminator::CRLF)
        .from_writer(UTF8_BOM.as_bytes().to_vec());

    writer.write_record(&headers)?;
    for row in rows {
        writer.write_record(headers.iter().map(|key| row.get(key).unwrap_or("")))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Buffer(e.to_string()))
}

/// Имя файла экспорта: "<entity>-<YYYY-MM-DD>.csv"
pub fn export_filename(prefix: &str, iso_date: &str) -> String {
    format!("{}-{}.csv", prefix, iso_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_export_is_error() {
        assert!(matches!(rows_to_csv(&[]), Err(ExportError::Empty)));
    }

    #[test]
    fn test_header_from_first_row_and_values_verbatim() {
        let rows = vec![
            ExportRow::new()
                .cell("Order ID", "1")
                .cell("User", "Dr. John Smith")
                .cell("Total Cost (CZK)", "2\u{a0}125"),
            ExportRow::new()
                .cell("Order ID", "2")
                .cell("User", "Dr. Sarah Johnson")
                .cell("Total Cost (CZK)", "2\u{a0}125"),
        ];
        let csv = rows_to_csv(&rows).unwrap();
        assert!(csv.starts_with(UTF8_BOM));
        let body = csv.trim_start_matches(UTF8_BOM);
        let lines: Vec<&str> = body.split("\r\n").collect();
        assert_eq!(lines[0], "Order ID;User;Total Cost (CZK)");
        assert_eq!(lines[1], "1;Dr. John Smith;2\u{a0}125");
        assert_eq!(lines[2], "2;Dr. Sarah Johnson;2\u{a0}125");
        assert_eq!(lines[3], "");
    }

    #[test]
    fn test_cells_with_delimiter_are_quoted() {
        let rows = vec![ExportRow::new().cell("Name", "A; \"B\"")];
        let csv = rows_to_csv(&rows).unwrap();
        assert!(csv.contains("\"A; \"\"B\"\"\""));
    }

    #[test]
    fn test_missing_key_in_later_row_is_blank() {
        let rows = vec![
            ExportRow::new().cell("A", "1").cell("B", "2"),
            ExportRow::new().cell("B", "3"),
        ];
        let csv = rows_to_csv(&rows).unwrap();
        assert!(csv.ends_with("1;2\r\n;3\r\n"));
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("orders", "2024-03-01"), "orders-2024-03-01.csv");
    }
}
