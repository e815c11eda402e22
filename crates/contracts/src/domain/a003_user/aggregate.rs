use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, EntityId};
use crate::shared::errors::{require, FormError};

/// Сотрудник, от имени которого оформляется заказ.
///
/// Уникальность email не проверяется (в демо-схеме она объявлена).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub department: String,
}

impl User {
    pub fn from_dto(id: EntityId, dto: &UserDto) -> Self {
        Self {
            id,
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_string(),
            department: dto.department.trim().to_string(),
        }
    }

    pub fn to_dto(&self) -> UserDto {
        UserDto {
            id: Some(self.id),
            name: self.name.clone(),
            email: self.email.clone(),
            department: self.department.clone(),
        }
    }
}

impl AggregateRoot for User {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn collection_name() -> &'static str {
        "users"
    }

    fn element_name() -> &'static str {
        "User"
    }

    fn list_name() -> &'static str {
        "Users"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: Option<EntityId>,
    pub name: String,
    pub email: String,
    pub department: String,
}

impl UserDto {
    pub fn validate(&self) -> Result<(), FormError> {
        require("Name", &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let mut dto = UserDto {
            id: None,
            name: "Dr. John Smith".into(),
            email: "john.smith@dental.com".into(),
            department: String::new(),
        };
        assert!(dto.validate().is_ok());
        dto.email = " ".into();
        assert!(dto.validate().is_ok());
        dto.name = String::new();
        assert_eq!(dto.validate(), Err(FormError::Required("Name")));
    }
}
