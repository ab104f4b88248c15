use anyhow::{Context, Result};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::RoomNumber;
use crate::entities::{buildings, housekeeping_log, prelude::*, residents, rooms};

/// Input for creating a room.
#[derive(Debug, Clone)]
pub struct NewRoom {
    pub room_number: RoomNumber,
    pub building_id: i32,
    pub floor: Option<i32>,
    pub room_type: Option<String>,
    pub tv_brand: Option<String>,
    pub fan_type: Option<String>,
    pub thermostat_model: Option<String>,
}

impl NewRoom {
    fn into_active_model(self) -> rooms::ActiveModel {
        rooms::ActiveModel {
            room_number: Set(self.room_number.as_str().to_string()),
            building_id: Set(Some(self.building_id)),
            floor: Set(self.floor),
            room_type: Set(self.room_type),
            tv_brand: Set(self.tv_brand),
            fan_type: Set(self.fan_type),
            thermostat_model: Set(self.thermostat_model),
        }
    }
}

pub struct RoomRepository {
    conn: DatabaseConnection,
}

impl RoomRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn insert(&self, room: NewRoom) -> Result<()> {
        let room_number = room.room_number.clone();
        Rooms::insert(room.into_active_model())
            .exec_without_returning(&self.conn)
            .await
            .with_context(|| format!("Failed to insert room {room_number}"))?;
        Ok(())
    }

    /// Inserts rooms, skipping any whose number already exists.
    /// Returns the number of rows written.
    pub async fn insert_many_or_ignore(&self, rooms_in: Vec<NewRoom>) -> Result<u64> {
        if rooms_in.is_empty() {
            return Ok(0);
        }

        let models: Vec<rooms::ActiveModel> =
            rooms_in.into_iter().map(NewRoom::into_active_model).collect();

        let inserted = Rooms::insert_many(models)
            .on_conflict(
                sea_orm::sea_query::OnConflict::column(rooms::Column::RoomNumber)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.conn)
            .await
            .context("Failed to insert rooms")?;

        Ok(inserted)
    }

    pub async fn get(&self, room: &RoomNumber) -> Result<Option<rooms::Model>> {
        Ok(Rooms::find_by_id(room.as_str().to_string())
            .one(&self.conn)
            .await?)
    }

    pub async fn exists(&self, room: &RoomNumber) -> Result<bool> {
        Ok(self.get(room).await?.is_some())
    }

    /// Room joined with its building. The building half is `None` when the
    /// room's building reference is missing or dangling.
    pub async fn get_with_building(
        &self,
        room: &RoomNumber,
    ) -> Result<Option<(rooms::Model, Option<buildings::Model>)>> {
        let row = Rooms::find_by_id(room.as_str().to_string())
            .find_also_related(Buildings)
            .one(&self.conn)
            .await
            .context("Failed to query room with building")?;
        Ok(row)
    }

    pub async fn list(&self) -> Result<Vec<rooms::Model>> {
        Ok(Rooms::find()
            .order_by_asc(rooms::Column::RoomNumber)
            .all(&self.conn)
            .await?)
    }

    pub async fn list_for_building(&self, building_id: i32) -> Result<Vec<rooms::Model>> {
        Ok(Rooms::find()
            .filter(rooms::Column::BuildingId.eq(building_id))
            .order_by_asc(rooms::Column::RoomNumber)
            .all(&self.conn)
            .await?)
    }

    /// Deletes a room no resident or housekeeping entry refers to.
    pub async fn delete(&self, room: &RoomNumber) -> Result<bool> {
        let resident_count = Residents::find()
            .filter(residents::Column::RoomNumber.eq(room.as_str()))
            .count(&self.conn)
            .await?;
        let log_count = HousekeepingLog::find()
            .filter(housekeeping_log::Column::RoomNumber.eq(room.as_str()))
            .count(&self.conn)
            .await?;

        if resident_count > 0 || log_count > 0 {
            anyhow::bail!(
                "Room {room} is referenced by {resident_count} resident(s) and {log_count} housekeeping entry(ies)"
            );
        }

        let result = Rooms::delete_by_id(room.as_str().to_string())
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
