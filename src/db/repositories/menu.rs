use anyhow::{Context, Result};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::entities::{prelude::*, restaurant_menu};

#[derive(Debug, Clone)]
pub struct NewMenuItem {
    pub day: String,
    pub meal: String,
    pub item_name: String,
    pub restaurant_name: Option<String>,
}

pub struct MenuRepository {
    conn: DatabaseConnection,
}

impl MenuRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Entries served by `restaurant` on `day`, ordered by meal then item.
    pub async fn for_restaurant_on(
        &self,
        restaurant: &str,
        day: &str,
    ) -> Result<Vec<restaurant_menu::Model>> {
        let rows = RestaurantMenu::find()
            .filter(restaurant_menu::Column::RestaurantName.eq(restaurant))
            .filter(restaurant_menu::Column::Day.eq(day))
            .order_by_asc(restaurant_menu::Column::Meal)
            .order_by_asc(restaurant_menu::Column::ItemName)
            .all(&self.conn)
            .await
            .context("Failed to query restaurant menu")?;
        Ok(rows)
    }

    pub async fn insert_many_or_ignore(&self, items: Vec<NewMenuItem>) -> Result<u64> {
        if items.is_empty() {
            return Ok(0);
        }

        let models: Vec<restaurant_menu::ActiveModel> = items
            .into_iter()
            .map(|item| restaurant_menu::ActiveModel {
                day: Set(item.day),
                meal: Set(item.meal),
                item_name: Set(item.item_name),
                restaurant_name: Set(item.restaurant_name),
                ..Default::default()
            })
            .collect();

        let inserted = RestaurantMenu::insert_many(models)
            .on_conflict(
                sea_orm::sea_query::OnConflict::columns([
                    restaurant_menu::Column::Day,
                    restaurant_menu::Column::Meal,
                    restaurant_menu::Column::ItemName,
                    restaurant_menu::Column::RestaurantName,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.conn)
            .await
            .context("Failed to insert menu entries")?;

        Ok(inserted)
    }
}
