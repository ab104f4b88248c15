use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "restaurant_menu")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub menu_id: i32,
    /// English weekday name, e.g. "Monday".
    pub day: String,
    pub meal: String,
    pub item_name: String,
    pub restaurant_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
