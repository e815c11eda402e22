use super::aggregate::Product;
use crate::shared::export::ExportRow;
use crate::shared::filter::{FieldAccessor, FieldSpec, FieldValue};
use crate::shared::number_format::format_amount;
use crate::shared::store::AppState;

fn name(p: &Product, _: &AppState) -> FieldValue {
    FieldValue::from(p.name.as_str())
}

fn category(p: &Product, _: &AppState) -> FieldValue {
    FieldValue::from(p.category.as_str())
}

fn manufacturer(p: &Product, _: &AppState) -> FieldValue {
    FieldValue::from(p.manufacturer.as_str())
}

fn reference_number(p: &Product, _: &AppState) -> FieldValue {
    FieldValue::from(p.reference_number.as_str())
}

fn unit(p: &Product, _: &AppState) -> FieldValue {
    FieldValue::from(p.unit.as_str())
}

pub const PRODUCT_FIELDS: &[FieldAccessor<Product, AppState>] = &[
    FieldAccessor { name: "name", extract: name },
    FieldAccessor { name: "category", extract: category },
    FieldAccessor { name: "manufacturer", extract: manufacturer },
    FieldAccessor { name: "referenceNumber", extract: reference_number },
    FieldAccessor { name: "unit", extract: unit },
];

pub fn search_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::text("name", "Product Name"),
        FieldSpec::text("category", "Category"),
        FieldSpec::text("manufacturer", "Manufacturer"),
        FieldSpec::text("referenceNumber", "Reference"),
    ]
}

pub fn export_row(product: &Product, state: &AppState) -> ExportRow {
    let (best_price, best_supplier) = match product.cheapest_supplier() {
        Some(best) => (
            format_amount(best.price),
            state.supplier_name(best.supplier_id),
        ),
        None => ("No suppliers".to_string(), String::new()),
    };

    ExportRow::new()
        .cell("Product", product.name.as_str())
        .cell("Category", product.category.as_str())
        .cell("Manufacturer", product.manufacturer.as_str())
        .cell("Reference", product.reference_number.as_str())
        .cell("Unit", product.unit.as_str())
        .cell("Best Price (CZK)", best_price)
        .cell("Best Supplier", best_supplier)
}
