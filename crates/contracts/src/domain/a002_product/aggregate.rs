use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, EntityId};
use crate::shared::errors::{require, FormError};
use crate::shared::pricing;

/// Цена товара у конкретного поставщика.
///
/// В JSON-колонке демо-схемы ссылка хранится под ключом `id`, поэтому он
/// принимается как псевдоним.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupplierPrice {
    #[serde(rename = "supplierId", alias = "id")]
    pub supplier_id: EntityId,
    pub price: f64,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар (расходный материал) с ценами поставщиков
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    pub category: String,
    pub manufacturer: String,
    #[serde(rename = "referenceNumber")]
    pub reference_number: String,
    pub unit: String,
    /// Ссылки на поставщиков не проверяются: поставщик может быть удалён
    #[serde(default)]
    pub suppliers: Vec<SupplierPrice>,
}

impl Product {
    pub fn from_dto(id: EntityId, dto: &ProductDto) -> Self {
        Self {
            id,
            name: dto.name.trim().to_string(),
            category: dto.category.trim().to_string(),
            manufacturer: dto.manufacturer.trim().to_string(),
            reference_number: dto.reference_number.trim().to_string(),
            unit: dto.unit.trim().to_string(),
            suppliers: dto.suppliers.clone(),
        }
    }

    pub fn to_dto(&self) -> ProductDto {
        ProductDto {
            id: Some(self.id),
            name: self.name.clone(),
            category: self.category.clone(),
            manufacturer: self.manufacturer.clone(),
            reference_number: self.reference_number.clone(),
            unit: self.unit.clone(),
            suppliers: self.suppliers.clone(),
        }
    }

    /// Самое дешёвое предложение (None означает "No suppliers")
    pub fn cheapest_supplier(&self) -> Option<&SupplierPrice> {
        pricing::cheapest_supplier(&self.suppliers)
    }

    /// Цена у указанного поставщика, если он предлагает этот товар
    pub fn price_from(&self, supplier_id: EntityId) -> Option<f64> {
        pricing::supplier_price(&self.suppliers, supplier_id)
    }
}

impl AggregateRoot for Product {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "products"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}

// ============================================================================
// DTO (форма)
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: Option<EntityId>,
    pub name: String,
    pub category: String,
    pub manufacturer: String,
    #[serde(rename = "referenceNumber")]
    pub reference_number: String,
    pub unit: String,
    pub suppliers: Vec<SupplierPrice>,
}

impl ProductDto {
    pub fn validate(&self) -> Result<(), FormError> {
        require("Product name", &self.name)?;
        require("Unit", &self.unit)?;
        Ok(())
    }

    /// Значение поля цены поставщика для формы (пусто, если цены нет)
    pub fn price_input(&self, supplier_id: EntityId) -> String {
        pricing::supplier_price(&self.suppliers, supplier_id)
            .map(|p| p.to_string())
            .unwrap_or_default()
    }

    /// Изменить цену поставщика из поля ввода.
    ///
    /// Пустое поле убирает поставщика из списка. Существующая запись
    /// обновляется на месте, новая добавляется в конец.
    pub fn set_supplier_price(&mut self, supplier_id: EntityId, raw: &str) -> Result<(), FormError> {
        let raw = raw.trim();
        if raw.is_empty() {
            self.suppliers.retain(|p| p.supplier_id != supplier_id);
            return Ok(());
        }

        let price: f64 = raw
            .parse()
            .map_err(|_| FormError::InvalidNumber("Price"))?;
        if !price.is_finite() {
            return Err(FormError::InvalidNumber("Price"));
        }
        if price < 0.0 {
            return Err(FormError::BelowMinimum {
                field: "Price",
                min: "0",
            });
        }

        match self.suppliers.iter_mut().find(|p| p.supplier_id == supplier_id) {
            Some(existing) => existing.price = price,
            None => self.suppliers.push(SupplierPrice { supplier_id, price }),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composite_resin() -> Product {
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
        }
    }

    #[test]
    fn test_cheapest_and_price_from() {
        let product = composite_resin();
        assert_eq!(product.cheapest_supplier().map(|p| p.supplier_id), Some(2));
        assert_eq!(product.price_from(1), Some(1149.75));
        assert_eq!(product.price_from(3), None);
    }

    #[test]
    fn test_validate_required_fields() {
        let mut dto = composite_resin().to_dto();
        assert!(dto.validate().is_ok());
        dto.unit.clear();
        assert_eq!(dto.validate(), Err(FormError::Required("Unit")));
        dto.name.clear();
        assert_eq!(dto.validate(), Err(FormError::Required("Product name")));
    }

    #[test]
    fn test_set_supplier_price() {
        let mut dto = ProductDto::default();
        dto.set_supplier_price(2, "1062.5").unwrap();
        dto.set_supplier_price(1, "1149.75").unwrap();
        dto.set_supplier_price(2, "1000").unwrap();
        assert_eq!(
            dto.suppliers,
            vec![
                SupplierPrice { supplier_id: 2, price: 1000.0 },
                SupplierPrice { supplier_id: 1, price: 1149.75 },
            ]
        );
        assert_eq!(dto.price_input(1), "1149.75");

        dto.set_supplier_price(2, "").unwrap();
        assert_eq!(dto.suppliers.len(), 1);
        assert_eq!(dto.price_input(2), "");

        assert_eq!(
            dto.set_supplier_price(1, "abc"),
            Err(FormError::InvalidNumber("Price"))
        );
        assert!(dto.set_supplier_price(1, "-5").is_err());
        assert_eq!(dto.price_input(1), "1149.75");
    }

    #[test]
    fn test_supplier_price_accepts_legacy_id_key() {
        let parsed: Vec<SupplierPrice> =
            serde_json::from_str(r#"[{"id":1,"price":1149.75},{"supplierId":2,"price":1062.5}]"#)
                .unwrap();
        assert_eq!(parsed[0].supplier_id, 1);
        assert_eq!(parsed[1].supplier_id, 2);
    }
}
