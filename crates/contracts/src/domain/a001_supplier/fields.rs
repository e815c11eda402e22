use super::aggregate::Supplier;
use crate::shared::export::ExportRow;
use crate::shared::filter::{FieldAccessor, FieldSpec, FieldValue};
use crate::shared::store::AppState;

fn id(s: &Supplier, _: &AppState) -> FieldValue {
    FieldValue::Number(s.id as f64)
}

fn name(s: &Supplier, _: &AppState) -> FieldValue {
    FieldValue::from(s.name.as_str())
}

pub const SUPPLIER_FIELDS: &[FieldAccessor<Supplier, AppState>] = &[
    FieldAccessor { name: "id", extract: id },
    FieldAccessor { name: "name", extract: name },
];

pub fn search_fields() -> Vec<FieldSpec> {
    vec![FieldSpec::text("name", "Supplier Name")]
}

pub fn export_row(supplier: &Supplier) -> ExportRow {
    ExportRow::new()
        .cell("Supplier ID", supplier.id.to_string())
        .cell("Name", supplier.name.as_str())
}
