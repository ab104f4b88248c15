use anyhow::{Context, Result};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::entities::{amenities, prelude::*};

#[derive(Debug, Clone)]
pub struct NewAmenity {
    pub building_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub floor: Option<i32>,
}

impl NewAmenity {
    fn into_active_model(self) -> amenities::ActiveModel {
        amenities::ActiveModel {
            building_id: Set(self.building_id),
            name: Set(self.name),
            description: Set(self.description),
            floor: Set(self.floor),
            ..Default::default()
        }
    }
}

pub struct AmenityRepository {
    conn: DatabaseConnection,
}

impl AmenityRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn insert(&self, amenity: NewAmenity) -> Result<i32> {
        let name = amenity.name.clone();
        let result = Amenities::insert(amenity.into_active_model())
            .exec(&self.conn)
            .await
            .with_context(|| format!("Failed to insert amenity '{name}'"))?;
        Ok(result.last_insert_id)
    }

    /// Inserts amenities, skipping (building, name) pairs that already exist.
    pub async fn insert_many_or_ignore(&self, items: Vec<NewAmenity>) -> Result<u64> {
        if items.is_empty() {
            return Ok(0);
        }

        let models: Vec<amenities::ActiveModel> = items
            .into_iter()
            .map(NewAmenity::into_active_model)
            .collect();

        let inserted = Amenities::insert_many(models)
            .on_conflict(
                sea_orm::sea_query::OnConflict::columns([
                    amenities::Column::BuildingId,
                    amenities::Column::Name,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.conn)
            .await
            .context("Failed to insert amenities")?;

        Ok(inserted)
    }

    pub async fn list(&self) -> Result<Vec<amenities::Model>> {
        Ok(Amenities::find()
            .order_by_asc(amenities::Column::AmenityId)
            .all(&self.conn)
            .await?)
    }

    pub async fn list_for_building(&self, building_id: i32) -> Result<Vec<amenities::Model>> {
        Ok(Amenities::find()
            .filter(amenities::Column::BuildingId.eq(building_id))
            .order_by_asc(amenities::Column::AmenityId)
            .all(&self.conn)
            .await?)
    }

    pub async fn delete(&self, amenity_id: i32) -> Result<bool> {
        let result = Amenities::delete_by_id(amenity_id)
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
