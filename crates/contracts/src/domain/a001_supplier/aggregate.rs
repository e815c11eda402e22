use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, EntityId};
use crate::shared::errors::{require, FormError};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Поставщик. На него ссылаются товары (цены) и заказы, но не владеют им.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: EntityId,
    pub name: String,
}

impl Supplier {
    /// Создать запись из формы с уже выданным ID
    pub fn from_dto(id: EntityId, dto: &SupplierDto) -> Self {
        Self {
            id,
            name: dto.name.trim().to_string(),
        }
    }

    pub fn to_dto(&self) -> SupplierDto {
        SupplierDto {
            id: Some(self.id),
            name: self.name.clone(),
        }
    }
}

impl AggregateRoot for Supplier {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "suppliers"
    }

    fn element_name() -> &'static str {
        "Supplier"
    }

    fn list_name() -> &'static str {
        "Suppliers"
    }
}

// ============================================================================
// DTO (форма)
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierDto {
    pub id: Option<EntityId>,
    pub name: String,
}

impl SupplierDto {
    pub fn validate(&self) -> Result<(), FormError> {
        require("Supplier name", &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_name() {
        let dto = SupplierDto {
            id: None,
            name: "  ".into(),
        };
        assert_eq!(dto.validate(), Err(FormError::Required("Supplier name")));
    }

    #[test]
    fn test_dto_round_trip_trims_name() {
        let dto = SupplierDto {
            id: None,
            name: " Supplier A ".into(),
        };
        let supplier = Supplier::from_dto(7, &dto);
        assert_eq!(supplier.name, "Supplier A");
        assert_eq!(supplier.to_dto().id, Some(7));
    }
}
