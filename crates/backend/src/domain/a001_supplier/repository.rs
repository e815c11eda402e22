use contracts::domain::a001_supplier::Supplier;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, PaginatorTrait, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "suppliers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Supplier {
    fn from(m: Model) -> Self {
        Supplier {
            id: m.id,
            name: m.name,
        }
    }
}

pub async fn list_all(conn: &DatabaseConnection) -> anyhow::Result<Vec<Supplier>> {
    let items = Entity::find()
        .order_by_asc(Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn count(conn: &DatabaseConnection) -> anyhow::Result<u64> {
    Ok(Entity::find().count(conn).await?)
}

pub async fn insert(conn: &DatabaseConnection, supplier: &Supplier) -> anyhow::Result<i64> {
    let active = ActiveModel {
        id: Set(supplier.id),
        name: Set(supplier.name.clone()),
    };
    let model = active.insert(conn).await?;
    Ok(model.id)
}
