use contracts::domain::a003_user::User;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub department: Option<String>,
    #[sea_orm(unique)]
    pub email: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(m: Model) -> Self {
        User {
            id: m.id,
            name: m.name,
            email: m.email.unwrap_or_default(),
            department: m.department.unwrap_or_default(),
        }
    }
}

pub async fn list_all(conn: &DatabaseConnection) -> anyhow::Result<Vec<User>> {
    let items = Entity::find()
        .order_by_asc(Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn insert(conn: &DatabaseConnection, user: &User) -> anyhow::Result<i64> {
    let active = ActiveModel {
        id: Set(user.id),
        name: Set(user.name.clone()),
        department: Set(Some(user.department.clone())),
        email: Set(Some(user.email.clone())),
    };
    let model = active.insert(conn).await?;
    Ok(model.id)
}
