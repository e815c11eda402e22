use super::aggregate::{Order, OrderStatus};
use crate::domain::common::AggregateRoot;
use crate::shared::date_utils::format_date;
use crate::shared::export::ExportRow;
use crate::shared::filter::{FieldAccessor, FieldSpec, FieldValue};
use crate::shared::number_format::format_amount;
use crate::shared::store::AppState;

fn id(o: &Order, _: &AppState) -> FieldValue {
    FieldValue::Number(o.id as f64)
}

fn user(o: &Order, state: &AppState) -> FieldValue {
    FieldValue::Text(state.user_name(o.user_id))
}

fn product(o: &Order, state: &AppState) -> FieldValue {
    FieldValue::Text(state.product_name(o.product_id))
}

fn supplier(o: &Order, state: &AppState) -> FieldValue {
    FieldValue::Text(state.supplier_name(o.supplier_id))
}

fn quantity(o: &Order, _: &AppState) -> FieldValue {
    FieldValue::Number(o.quantity as f64)
}

fn status(o: &Order, _: &AppState) -> FieldValue {
    FieldValue::from(o.status.as_str())
}

fn order_date(o: &Order, _: &AppState) -> FieldValue {
    FieldValue::Date(Some(o.order_date.clone()))
}

fn delivery_date(o: &Order, _: &AppState) -> FieldValue {
    FieldValue::Date(o.delivery_date.clone())
}

fn supplier_price(o: &Order, _: &AppState) -> FieldValue {
    FieldValue::Number(o.supplier_price)
}

fn total_cost(o: &Order, _: &AppState) -> FieldValue {
    FieldValue::Number(o.total_cost)
}

/// Ссылочные поля (userId, productId, supplierId) разрешаются в имена
pub const ORDER_FIELDS: &[FieldAccessor<Order, AppState>] = &[
    FieldAccessor { name: "id", extract: id },
    FieldAccessor { name: "userId", extract: user },
    FieldAccessor { name: "productId", extract: product },
    FieldAccessor { name: "supplierId", extract: supplier },
    FieldAccessor { name: "quantity", extract: quantity },
    FieldAccessor { name: "status", extract: status },
    FieldAccessor { name: "orderDate", extract: order_date },
    FieldAccessor { name: "deliveryDate", extract: delivery_date },
    FieldAccessor { name: "supplierPrice", extract: supplier_price },
    FieldAccessor { name: "totalCost", extract: total_cost },
];

/// Поля панели поиска; варианты выбора строятся из текущего состояния
pub fn search_fields(state: &AppState) -> Vec<FieldSpec> {
    vec![
        FieldSpec::select("userId", "User", names(&state.users)),
        FieldSpec::select("productId", "Product", names(&state.products)),
        FieldSpec::select(
            "status",
            "Status",
            OrderStatus::ALL.iter().map(|s| s.as_str().to_string()).collect(),
        ),
        FieldSpec::date_range("orderDate", "Order Date"),
        FieldSpec::date_range("deliveryDate", "Delivery Date"),
        FieldSpec::select("supplierId", "Supplier", names(&state.suppliers)),
    ]
}

fn names<A: AggregateRoot>(items: &[A]) -> Vec<String> {
    items.iter().map(|i| i.display_name().to_string()).collect()
}

pub fn export_row(order: &Order, state: &AppState) -> ExportRow {
    ExportRow::new()
        .cell("Order ID", order.id.to_string())
        .cell("User", state.user_name(order.user_id))
        .cell("Product", state.product_name(order.product_id))
        .cell("Quantity", order.quantity.to_string())
        .cell("Supplier", state.supplier_name(order.supplier_id))
        .cell("Unit Price (CZK)", format_amount(order.supplier_price))
        .cell("Total Cost (CZK)", format_amount(order.total_cost))
        .cell("Status", order.status.as_str())
        .cell("Order Date", format_date(Some(&order.order_date)))
        .cell("Delivery Date", format_date(order.delivery_date.as_deref()))
}
