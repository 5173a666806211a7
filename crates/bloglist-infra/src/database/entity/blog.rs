//! Blog entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blogs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub author: String,
    #[sea_orm(column_type = "Text")]
    pub url: String,
    pub likes: i64,
    pub user_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for bloglist_core::domain::Blog {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            author: model.author,
            url: model.url,
            likes: model.likes,
            owner_id: model.user_id,
            created_at: model.created_at.into(),
        }
    }
}

impl From<bloglist_core::domain::Blog> for ActiveModel {
    fn from(blog: bloglist_core::domain::Blog) -> Self {
        Self {
            id: Set(blog.id),
            title: Set(blog.title),
            author: Set(blog.author),
            url: Set(blog.url),
            likes: Set(blog.likes),
            user_id: Set(blog.owner_id),
            created_at: Set(blog.created_at.into()),
        }
    }
}
