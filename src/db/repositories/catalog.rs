//! Hotel-wide catalogs: pools and water sports. Neither is scoped to a
//! building.

use anyhow::{Context, Result};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::entities::{pools, prelude::*, water_sports};

pub struct CatalogRepository {
    conn: DatabaseConnection,
}

impl CatalogRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list_pools(&self) -> Result<Vec<pools::Model>> {
        Ok(Pools::find()
            .order_by_asc(pools::Column::PoolId)
            .all(&self.conn)
            .await?)
    }

    pub async fn list_water_sports(&self) -> Result<Vec<water_sports::Model>> {
        Ok(WaterSports::find()
            .order_by_asc(water_sports::Column::ActivityId)
            .all(&self.conn)
            .await?)
    }

    pub async fn insert_pools_or_ignore(&self, items: &[(&str, &str)]) -> Result<u64> {
        if items.is_empty() {
            return Ok(0);
        }

        let models: Vec<pools::ActiveModel> = items
            .iter()
            .map(|(name, features)| pools::ActiveModel {
                name: Set((*name).to_string()),
                features: Set(Some((*features).to_string())),
                ..Default::default()
            })
            .collect();

        let inserted = Pools::insert_many(models)
            .on_conflict(
                sea_orm::sea_query::OnConflict::column(pools::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.conn)
            .await
            .context("Failed to insert pools")?;

        Ok(inserted)
    }

    pub async fn insert_water_sports_or_ignore(&self, items: &[(&str, &str)]) -> Result<u64> {
        if items.is_empty() {
            return Ok(0);
        }

        let models: Vec<water_sports::ActiveModel> = items
            .iter()
            .map(|(name, description)| water_sports::ActiveModel {
                name: Set((*name).to_string()),
                description: Set(Some((*description).to_string())),
                ..Default::default()
            })
            .collect();

        let inserted = WaterSports::insert_many(models)
            .on_conflict(
                sea_orm::sea_query::OnConflict::column(water_sports::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.conn)
            .await
            .context("Failed to insert water sports")?;

        Ok(inserted)
    }
}
