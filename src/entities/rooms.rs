use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    /// Kept as text so "0101" and "B-12" survive untouched.
    #[sea_orm(primary_key, auto_increment = false)]
    pub room_number: String,
    pub building_id: Option<i32>,
    pub floor: Option<i32>,
    pub room_type: Option<String>,
    pub tv_brand: Option<String>,
    pub fan_type: Option<String>,
    pub thermostat_model: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::buildings::Entity",
        from = "Column::BuildingId",
        to = "super::buildings::Column::BuildingId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Buildings,
    #[sea_orm(has_many = "super::residents::Entity")]
    Residents,
    #[sea_orm(has_many = "super::housekeeping_log::Entity")]
    HousekeepingLog,
}

impl Related<super::buildings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Buildings.def()
    }
}

impl Related<super::residents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Residents.def()
    }
}

impl Related<super::housekeeping_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HousekeepingLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
