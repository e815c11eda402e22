//! Универсальная фильтрация и сортировка списков в памяти.
//!
//! Каждая сущность описывает свои поля таблицей [`FieldAccessor`]: имя поля ->
//! функция извлечения типизированного значения. Ссылочные поля (userId,
//! productId, supplierId) разрешаются в отображаемое имя прямо в аксессоре,
//! поэтому фильтр и сортировка работают по имени, а не по ID.

pub mod engine;
pub mod field;
pub mod sort;

pub use engine::{filter_and_sort, matches_filters};
pub use field::{find_accessor, FieldAccessor, FieldKind, FieldSpec, FieldValue, FilterValues};
pub use sort::{toggle_sort, SortConfig, SortDirection};
