//! Производные цены: самый дешёвый поставщик и стоимость заказа

use crate::domain::a002_product::aggregate::SupplierPrice;
use crate::domain::common::EntityId;

/// Самое дешёвое предложение. При равных ценах побеждает первое в списке.
/// `None` означает, что у товара нет поставщиков ("No suppliers").
pub fn cheapest_supplier(prices: &[SupplierPrice]) -> Option<&SupplierPrice> {
    prices.iter().fold(None, |best: Option<&SupplierPrice>, current| match best {
        Some(b) if b.price <= current.price => Some(b),
        _ => Some(current),
    })
}

/// Цена конкретного поставщика в списке товара
pub fn supplier_price(prices: &[SupplierPrice], supplier_id: EntityId) -> Option<f64> {
    prices
        .iter()
        .find(|p| p.supplier_id == supplier_id)
        .map(|p| p.price)
}

/// Стоимость заказа: количество × цена за единицу
pub fn total_cost(quantity: i64, unit_price: f64) -> f64 {
    quantity as f64 * unit_price
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sp(supplier_id: EntityId, price: f64) -> SupplierPrice {
        SupplierPrice { supplier_id, price }
    }

    #[test]
    fn test_cheapest_supplier() {
        let prices = vec![sp(1, 1149.75), sp(2, 1062.50)];
        let best = cheapest_supplier(&prices);
        assert_eq!(best, Some(&sp(2, 1062.50)));
    }

    #[test]
    fn test_cheapest_supplier_empty() {
        assert_eq!(cheapest_supplier(&[]), None);
    }

    #[test]
    fn test_cheapest_supplier_tie_takes_first() {
        let prices = vec![sp(3, 10.0), sp(1, 5.0), sp(2, 5.0)];
        assert_eq!(cheapest_supplier(&prices).map(|p| p.supplier_id), Some(1));
    }

    #[test]
    fn test_supplier_price_lookup() {
        let prices = vec![sp(1, 2249.75), sp(3, 2125.00)];
        assert_eq!(supplier_price(&prices, 3), Some(2125.00));
        assert_eq!(supplier_price(&prices, 2), None);
    }

    #[test]
    fn test_total_cost() {
        assert_eq!(total_cost(2, 1062.50), 2125.00);
        assert_eq!(total_cost(1, 2125.00), 2125.00);
        assert_eq!(total_cost(0, 99.0), 0.0);
    }
}
