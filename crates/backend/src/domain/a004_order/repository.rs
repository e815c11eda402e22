use contracts::domain::a004_order::{Order, OrderStatus};
use contracts::shared::pricing::total_cost;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, QueryOrder, Set};

/// Заказ в демо-схеме. Стоимость не хранится: при чтении она равна
/// `quantity * supplierPrice`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "userId")]
    pub user_id: i64,
    #[sea_orm(column_name = "productId")]
    pub product_id: i64,
    pub quantity: i64,
    #[sea_orm(column_name = "orderDate")]
    pub order_date: String,
    #[sea_orm(column_name = "deliveryDate")]
    pub delivery_date: String,
    #[sea_orm(column_name = "supplierId")]
    pub supplier_id: i64,
    #[sea_orm(column_name = "supplierPrice")]
    pub supplier_price: f64,
    #[sea_orm(column_name = "referenceNumber")]
    pub reference_number: Option<String>,
    pub unit: Option<String>,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Order {
    fn from(m: Model) -> Self {
        let delivery_date = Some(m.delivery_date).filter(|d| !d.trim().is_empty());
        Order {
            id: m.id,
            user_id: m.user_id,
            product_id: m.product_id,
            supplier_id: m.supplier_id,
            quantity: m.quantity,
            order_date: m.order_date,
            delivery_date,
            status: OrderStatus::from_str_opt(&m.status).unwrap_or_default(),
            supplier_price: m.supplier_price,
            total_cost: total_cost(m.quantity, m.supplier_price),
        }
    }
}

pub async fn list_all(conn: &DatabaseConnection) -> anyhow::Result<Vec<Order>> {
    let items = Entity::find()
        .order_by_asc(Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Вставка заказа; артикул и единица копируются из товара, как в демо-данных
pub async fn insert(
    conn: &DatabaseConnection,
    order: &Order,
    reference_number: Option<String>,
    unit: Option<String>,
) -> anyhow::Result<i64> {
    let active = ActiveModel {
        id: Set(order.id),
        user_id: Set(order.user_id),
        product_id: Set(order.product_id),
        quantity: Set(order.quantity),
        order_date: Set(order.order_date.clone()),
        delivery_date: Set(order.delivery_date.clone().unwrap_or_default()),
        supplier_id: Set(order.supplier_id),
        supplier_price: Set(order.supplier_price),
        reference_number: Set(reference_number),
        unit: Set(unit),
        status: Set(order.status.as_str().to_string()),
    };
    let model = active.insert(conn).await?;
    Ok(model.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_to_order() {
        let order: Order = Model {
            id: 1,
            user_id: 1,
            product_id: 1,
            quantity: 2,
            order_date: "2024-03-01".into(),
            delivery_date: "".into(),
            supplier_id: 2,
            supplier_price: 1062.50,
            reference_number: Some("CR-001".into()),
            unit: Some("syringe".into()),
            status: "delivered".into(),
        }
        .into();
        assert_eq!(order.total_cost, 2125.0);
        assert_eq!(order.delivery_date, None);
        assert_eq!(order.status, OrderStatus::Delivered);
    }

    #[test]
    fn test_unknown_status_falls_back_to_pending() {
        let order: Order = Model {
            id: 2,
            user_id: 2,
            product_id: 2,
            quantity: 1,
            order_date: "2024-03-02".into(),
            delivery_date: "2024-03-07".into(),
            supplier_id: 3,
            supplier_price: 2125.0,
            reference_number: None,
            unit: None,
            status: "lost".into(),
        }
        .into();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.delivery_date.as_deref(), Some("2024-03-07"));
    }
}
