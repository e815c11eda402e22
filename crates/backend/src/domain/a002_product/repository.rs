use contracts::domain::a002_product::{Product, SupplierPrice};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, QueryOrder, Set};

/// Цены поставщиков хранятся JSON-строкой в колонке `suppliers`
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub category: String,
    pub manufacturer: Option<String>,
    #[sea_orm(column_name = "referenceNumber")]
    pub reference_number: Option<String>,
    pub unit: Option<String>,
    pub suppliers: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Product {
    type Error = serde_json::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let suppliers: Vec<SupplierPrice> = match m.suppliers.as_deref() {
            Some(raw) if !raw.trim().is_empty() => serde_json::from_str(raw)?,
            _ => Vec::new(),
        };
        Ok(Product {
            id: m.id,
            name: m.name,
            category: m.category,
            manufacturer: m.manufacturer.unwrap_or_default(),
            reference_number: m.reference_number.unwrap_or_default(),
            unit: m.unit.unwrap_or_default(),
            suppliers,
        })
    }
}

pub async fn list_all(conn: &DatabaseConnection) -> anyhow::Result<Vec<Product>> {
    let models = Entity::find().order_by_asc(Column::Id).all(conn).await?;
    let mut items = Vec::with_capacity(models.len());
    for m in models {
        let id = m.id;
        let product = Product::try_from(m)
            .map_err(|e| anyhow::anyhow!("product {id}: bad suppliers column: {e}"))?;
        items.push(product);
    }
    Ok(items)
}

pub async fn insert(conn: &DatabaseConnection, product: &Product) -> anyhow::Result<i64> {
    let active = ActiveModel {
        id: Set(product.id),
        name: Set(product.name.clone()),
        category: Set(product.category.clone()),
        manufacturer: Set(Some(product.manufacturer.clone())),
        reference_number: Set(Some(product.reference_number.clone())),
        unit: Set(Some(product.unit.clone())),
        suppliers: Set(Some(serde_json::to_string(&product.suppliers)?)),
    };
    let model = active.insert(conn).await?;
    Ok(model.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(suppliers: Option<&str>) -> Model {
        Model {
            id: 1,
            name: "Composite Resin".into(),
            category: "Restorative".into(),
            manufacturer: Some("3M".into()),
            reference_number: None,
            unit: Some("syringe".into()),
            suppliers: suppliers.map(str::to_string),
        }
    }

    #[test]
    fn test_legacy_supplier_json_uses_id_key() {
        let product =
            Product::try_from(model(Some(r#"[{"id":1,"price":1149.75},{"id":2,"price":1062.50}]"#)))
                .unwrap();
        assert_eq!(product.suppliers.len(), 2);
        assert_eq!(product.suppliers[1].supplier_id, 2);
        assert_eq!(product.suppliers[1].price, 1062.50);
        assert_eq!(product.reference_number, "");
    }

    #[test]
    fn test_empty_supplier_column() {
        assert!(Product::try_from(model(None)).unwrap().suppliers.is_empty());
        assert!(Product::try_from(model(Some(""))).unwrap().suppliers.is_empty());
    }

    #[test]
    fn test_broken_supplier_json_is_error() {
        assert!(Product::try_from(model(Some("not json"))).is_err());
    }
}
