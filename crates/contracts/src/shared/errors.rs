use thiserror::Error;

/// Ошибка заполнения формы создания/редактирования
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{field} must be at least {min}")]
    BelowMinimum { field: &'static str, min: &'static str },

    #[error("{0} is not a valid number")]
    InvalidNumber(&'static str),

    #[error("{0} is not a valid date")]
    InvalidDate(&'static str),

    #[error("No free record ID left")]
    IdsExhausted,
}

/// Ошибка экспорта таблицы
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Nothing to export")]
    Empty,

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer error: {0}")]
    Buffer(String),
}

/// Проверка обязательного текстового поля
pub fn require(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(())
    }
}
