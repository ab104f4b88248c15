use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "residents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub resident_id: i32,

    pub name: String,

    pub room_number: String,

    /// Bearer credential handed to the guest device at check-in.
    #[sea_orm(unique)]
    pub device_token: String,

    pub checkin_time: Option<String>,

    pub checkout_time: Option<String>,

    /// Set at check-out. A voided token never authenticates again.
    pub token_voided: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rooms::Entity",
        from = "Column::RoomNumber",
        to = "super::rooms::Column::RoomNumber",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Rooms,
}

impl Related<super::rooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rooms.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
