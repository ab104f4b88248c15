//! Composite unique keys backing insert-or-ignore fixture seeding.

use crate::entities::{amenities, housekeeping_log, prelude::*, restaurant_menu};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_amenities_building_name")
                    .table(Amenities)
                    .col(amenities::Column::BuildingId)
                    .col(amenities::Column::Name)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_restaurant_menu_entry")
                    .table(RestaurantMenu)
                    .col(restaurant_menu::Column::Day)
                    .col(restaurant_menu::Column::Meal)
                    .col(restaurant_menu::Column::ItemName)
                    .col(restaurant_menu::Column::RestaurantName)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_housekeeping_room_time")
                    .table(HousekeepingLog)
                    .col(housekeeping_log::Column::RoomNumber)
                    .col(housekeeping_log::Column::CleanedTime)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Active-resident lookups filter on (room_number, token_voided).
        manager
            .create_index(
                Index::create()
                    .name("idx_residents_room_active")
                    .table(Residents)
                    .col(crate::entities::residents::Column::RoomNumber)
                    .col(crate::entities::residents::Column::TokenVoided)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        for name in [
            "idx_residents_room_active",
            "idx_housekeeping_room_time",
            "idx_restaurant_menu_entry",
            "idx_amenities_building_name",
        ] {
            conn.execute_unprepared(&format!("DROP INDEX IF EXISTS {name}"))
                .await?;
        }

        Ok(())
    }
}
