use anyhow::{Context, Result};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::domain::RoomNumber;
use crate::entities::{housekeeping_log, prelude::*};

pub struct HousekeepingRepository {
    conn: DatabaseConnection,
}

impl HousekeepingRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Records a cleaning. A second entry for the same room and time is
    /// ignored; returns whether a row was written.
    pub async fn record(
        &self,
        room: &RoomNumber,
        cleaned_time: &str,
        cleaner_name: &str,
    ) -> Result<bool> {
        let active_model = housekeeping_log::ActiveModel {
            room_number: Set(room.as_str().to_string()),
            cleaned_time: Set(cleaned_time.to_string()),
            cleaner_name: Set(cleaner_name.to_string()),
            ..Default::default()
        };

        let inserted = HousekeepingLog::insert(active_model)
            .on_conflict(
                sea_orm::sea_query::OnConflict::columns([
                    housekeeping_log::Column::RoomNumber,
                    housekeeping_log::Column::CleanedTime,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.conn)
            .await
            .with_context(|| format!("Failed to record cleaning for room {room}"))?;

        Ok(inserted > 0)
    }

    pub async fn latest_for_room(
        &self,
        room: &RoomNumber,
    ) -> Result<Option<housekeeping_log::Model>> {
        Ok(HousekeepingLog::find()
            .filter(housekeeping_log::Column::RoomNumber.eq(room.as_str()))
            .order_by_desc(housekeeping_log::Column::CleanedTime)
            .one(&self.conn)
            .await?)
    }

    pub async fn list_for_room(&self, room: &RoomNumber) -> Result<Vec<housekeeping_log::Model>> {
        Ok(HousekeepingLog::find()
            .filter(housekeeping_log::Column::RoomNumber.eq(room.as_str()))
            .order_by_desc(housekeeping_log::Column::CleanedTime)
            .all(&self.conn)
            .await?)
    }
}
