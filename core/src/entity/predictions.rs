use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "predictions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub food_name: String,
    #[sea_orm(column_type = "Text")]
    pub quantity: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub food_data: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub prediction_results: Json,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
