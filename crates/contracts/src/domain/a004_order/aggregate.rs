use serde::{Deserialize, Serialize};

use crate::domain::a002_product::Product;
use crate::domain::common::{find_by_id, AggregateRoot, EntityId};
use crate::shared::date_utils::{parse_iso_date, today_iso};
use crate::shared::errors::FormError;
use crate::shared::pricing;

/// Статус заказа
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Значение для хранения и фильтра
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Подпись в выпадающем списке формы
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Заказ товара у поставщика.
///
/// `total_cost` вычисляется один раз при сохранении формы и хранится;
/// при чтении не пересчитывается.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: EntityId,
    pub user_id: EntityId,
    pub product_id: EntityId,
    pub supplier_id: EntityId,
    pub quantity: i64,
    pub order_date: String,
    pub delivery_date: Option<String>,
    pub status: OrderStatus,
    pub supplier_price: f64,
    pub total_cost: f64,
}

impl Order {
    pub fn to_dto(&self) -> OrderDto {
        OrderDto {
            id: Some(self.id),
            user_id: self.user_id.to_string(),
            product_id: self.product_id.to_string(),
            quantity: self.quantity.to_string(),
            order_date: self.order_date.clone(),
            delivery_date: self.delivery_date.clone().unwrap_or_default(),
            status: self.status,
            supplier_id: self.supplier_id.to_string(),
            supplier_price: self.supplier_price.to_string(),
        }
    }
}

impl AggregateRoot for Order {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.order_date
    }

    fn collection_name() -> &'static str {
        "orders"
    }

    fn element_name() -> &'static str {
        "Order"
    }

    fn list_name() -> &'static str {
        "Orders"
    }
}

// ============================================================================
// DTO (форма): значения хранятся так, как их вводит пользователь
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: Option<EntityId>,
    pub user_id: String,
    pub product_id: String,
    pub quantity: String,
    pub order_date: String,
    pub delivery_date: String,
    pub status: OrderStatus,
    pub supplier_id: String,
    pub supplier_price: String,
}

impl OrderDto {
    /// Пустая форма нового заказа с сегодняшней датой
    pub fn new_for_today() -> Self {
        Self {
            order_date: today_iso(),
            ..Self::default()
        }
    }

    /// Выбор товара: поставщик и цена подставляются от самого дешёвого
    /// предложения; если предложений нет, оба поля очищаются.
    pub fn select_product(&mut self, product_id: &str, products: &[Product]) {
        self.product_id = product_id.to_string();
        let cheapest = product_id
            .parse::<EntityId>()
            .ok()
            .and_then(|id| find_by_id(products, id))
            .and_then(|p| p.cheapest_supplier().copied());

        match cheapest {
            Some(best) => {
                self.supplier_id = best.supplier_id.to_string();
                self.supplier_price = best.price.to_string();
            }
            None => {
                self.supplier_id.clear();
                self.supplier_price.clear();
            }
        }
    }

    /// Ручной выбор поставщика: цена берётся из списка цен выбранного товара
    /// (пусто, если этот поставщик товар не предлагает).
    pub fn select_supplier(&mut self, supplier_id: &str, products: &[Product]) {
        self.supplier_id = supplier_id.to_string();
        let price = match (
            self.product_id.parse::<EntityId>().ok(),
            supplier_id.parse::<EntityId>().ok(),
        ) {
            (Some(product_id), Some(supplier_id)) => {
                find_by_id(products, product_id).and_then(|p| p.price_from(supplier_id))
            }
            _ => None,
        };
        self.supplier_price = price.map(|p| p.to_string()).unwrap_or_default();
    }

    /// Предварительная стоимость для формы (None, пока поля не заполнены)
    pub fn preview_total(&self) -> Option<f64> {
        let quantity = self.quantity.trim().parse::<i64>().ok()?;
        let price = self.supplier_price.trim().parse::<f64>().ok()?;
        Some(pricing::total_cost(quantity, price))
    }

    /// Собрать заказ из формы; стоимость фиксируется здесь
    pub fn to_order(&self, id: EntityId) -> Result<Order, FormError> {
        let user_id = parse_reference("User", &self.user_id)?;
        let product_id = parse_reference("Product", &self.product_id)?;

        let quantity_raw = self.quantity.trim();
        if quantity_raw.is_empty() {
            return Err(FormError::Required("Quantity"));
        }
        let quantity: i64 = quantity_raw
            .parse()
            .map_err(|_| FormError::InvalidNumber("Quantity"))?;
        if quantity < 1 {
            return Err(FormError::BelowMinimum {
                field: "Quantity",
                min: "1",
            });
        }

        let order_date = self.order_date.trim();
        if order_date.is_empty() {
            return Err(FormError::Required("Order date"));
        }
        if parse_iso_date(order_date).is_none() {
            return Err(FormError::InvalidDate("Order date"));
        }

        let delivery_date = self.delivery_date.trim();
        let delivery_date = if delivery_date.is_empty() {
            None
        } else if parse_iso_date(delivery_date).is_none() {
            return Err(FormError::InvalidDate("Delivery date"));
        } else {
            Some(delivery_date.to_string())
        };

        let supplier_id = parse_reference("Supplier", &self.supplier_id)?;

        let price_raw = self.supplier_price.trim();
        if price_raw.is_empty() {
            return Err(FormError::Required("Price"));
        }
        let supplier_price: f64 = price_raw
            .parse()
            .map_err(|_| FormError::InvalidNumber("Price"))?;
        if !supplier_price.is_finite() {
            return Err(FormError::InvalidNumber("Price"));
        }
        if supplier_price < 0.0 {
            return Err(FormError::BelowMinimum {
                field: "Price",
                min: "0",
            });
        }

        Ok(Order {
            id,
            user_id,
            product_id,
            supplier_id,
            quantity,
            order_date: order_date.to_string(),
            delivery_date,
            status: self.status,
            supplier_price,
            total_cost: pricing::total_cost(quantity, supplier_price),
        })
    }
}

fn parse_reference(field: &'static str, raw: &str) -> Result<EntityId, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FormError::Required(field));
    }
    raw.parse().map_err(|_| FormError::InvalidNumber(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_product::SupplierPrice;

    fn products() -> Vec<Product> {
        vec![
            Product {
                id: 1,
                name: "Composite Resin".into(),
                category: "Restorative".into(),
                manufacturer: "3M".into(),
                reference_number: "CR-001".into(),
                unit: "syringe".into(),
                suppliers: vec![
                    SupplierPrice { supplier_id: 1, price: 1149.75 },
                    SupplierPrice { supplier_id: 2, price: 1062.50 },
                ],
            },
            Product {
                id: 3,
                name: "Gloves".into(),
                category: "Disposables".into(),
                manufacturer: "Ansell".into(),
                reference_number: "GL-100".into(),
                unit: "box".into(),
                suppliers: vec![],
            },
        ]
    }

    fn filled_form() -> OrderDto {
        OrderDto {
            id: None,
            user_id: "1".into(),
            product_id: "1".into(),
            quantity: "2".into(),
            order_date: "2024-03-01".into(),
            delivery_date: "2024-03-05".into(),
            status: OrderStatus::Pending,
            supplier_id: "2".into(),
            supplier_price: "1062.5".into(),
        }
    }

    #[test]
    fn test_select_product_picks_cheapest_supplier() {
        let mut dto = OrderDto::default();
        dto.select_product("1", &products());
        assert_eq!(dto.supplier_id, "2");
        assert_eq!(dto.supplier_price, "1062.5");
    }

    #[test]
    fn test_select_product_without_suppliers_clears_fields() {
        let mut dto = filled_form();
        dto.select_product("3", &products());
        assert_eq!(dto.product_id, "3");
        assert!(dto.supplier_id.is_empty());
        assert!(dto.supplier_price.is_empty());
    }

    #[test]
    fn test_select_supplier_overrides_price() {
        let mut dto = OrderDto::default();
        dto.select_product("1", &products());
        dto.select_supplier("1", &products());
        assert_eq!(dto.supplier_id, "1");
        assert_eq!(dto.supplier_price, "1149.75");

        // Поставщик, который не предлагает товар
        dto.select_supplier("9", &products());
        assert_eq!(dto.supplier_price, "");
    }

    #[test]
    fn test_to_order_computes_total_once() {
        let order = filled_form().to_order(42).unwrap();
        assert_eq!(order.id, 42);
        assert_eq!(order.quantity, 2);
        assert_eq!(order.supplier_price, 1062.50);
        assert_eq!(order.total_cost, 2125.00);
        assert_eq!(order.delivery_date.as_deref(), Some("2024-03-05"));
    }

    #[test]
    fn test_to_order_optional_delivery_date() {
        let mut dto = filled_form();
        dto.delivery_date = String::new();
        assert_eq!(dto.to_order(1).unwrap().delivery_date, None);
    }

    #[test]
    fn test_to_order_validation() {
        let mut dto = filled_form();
        dto.quantity = "0".into();
        assert_eq!(
            dto.to_order(1),
            Err(FormError::BelowMinimum { field: "Quantity", min: "1" })
        );

        let mut dto = filled_form();
        dto.user_id.clear();
        assert_eq!(dto.to_order(1), Err(FormError::Required("User")));

        let mut dto = filled_form();
        dto.order_date = "03/01/2024".into();
        assert_eq!(dto.to_order(1), Err(FormError::InvalidDate("Order date")));

        let mut dto = filled_form();
        dto.supplier_price = "cheap".into();
        assert_eq!(dto.to_order(1), Err(FormError::InvalidNumber("Price")));
    }

    #[test]
    fn test_preview_total() {
        assert_eq!(filled_form().preview_total(), Some(2125.0));
        assert_eq!(OrderDto::default().preview_total(), None);
    }

    #[test]
    fn test_dto_round_trip() {
        let order = filled_form().to_order(5).unwrap();
        let dto = order.to_dto();
        assert_eq!(dto.id, Some(5));
        assert_eq!(dto.to_order(5).unwrap(), order);
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(serde_json::to_string(&OrderStatus::Delivered).unwrap(), "\"delivered\"");
        assert_eq!(OrderStatus::from_str_opt("cancelled"), Some(OrderStatus::Cancelled));
        assert_eq!(OrderStatus::from_str_opt("lost"), None);
    }
}
