use anyhow::{Context, Result};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::{amenities, buildings, prelude::*, rooms};

/// Input for creating a building.
#[derive(Debug, Clone, Default)]
pub struct NewBuilding {
    pub name: String,
    pub wifi_ssid: Option<String>,
    pub wifi_password: Option<String>,
    pub restaurant_name: Option<String>,
}

pub struct BuildingRepository {
    conn: DatabaseConnection,
}

impl BuildingRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Inserts the building unless one with the same name exists.
    /// Returns the building id and whether a row was written.
    pub async fn insert_or_ignore(&self, building: &NewBuilding) -> Result<(i32, bool)> {
        let active_model = buildings::ActiveModel {
            name: Set(building.name.clone()),
            wifi_ssid: Set(building.wifi_ssid.clone()),
            wifi_password: Set(building.wifi_password.clone()),
            restaurant_name: Set(building.restaurant_name.clone()),
            ..Default::default()
        };

        let inserted = Buildings::insert(active_model)
            .on_conflict(
                sea_orm::sea_query::OnConflict::column(buildings::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.conn)
            .await
            .context("Failed to insert building")?;

        let model = self
            .get_by_name(&building.name)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Building '{}' missing after insert", building.name))?;

        Ok((model.building_id, inserted > 0))
    }

    pub async fn get(&self, building_id: i32) -> Result<Option<buildings::Model>> {
        Ok(Buildings::find_by_id(building_id).one(&self.conn).await?)
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<buildings::Model>> {
        let model = Buildings::find()
            .filter(buildings::Column::Name.eq(name))
            .one(&self.conn)
            .await?;
        Ok(model)
    }

    pub async fn list(&self) -> Result<Vec<buildings::Model>> {
        Ok(Buildings::find()
            .order_by_asc(buildings::Column::BuildingId)
            .all(&self.conn)
            .await?)
    }

    /// Deletes a building that no room or amenity references any more.
    ///
    /// Returns `Ok(false)` when the building does not exist.
    pub async fn delete(&self, building_id: i32) -> Result<bool> {
        let room_count = Rooms::find()
            .filter(rooms::Column::BuildingId.eq(building_id))
            .count(&self.conn)
            .await?;
        let amenity_count = Amenities::find()
            .filter(amenities::Column::BuildingId.eq(building_id))
            .count(&self.conn)
            .await?;

        if room_count > 0 || amenity_count > 0 {
            anyhow::bail!(
                "Building {building_id} still has {room_count} room(s) and {amenity_count} amenity(ies); delete those first"
            );
        }

        let result = Buildings::delete_by_id(building_id)
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
