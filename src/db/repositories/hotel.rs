use anyhow::Result;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::entities::{hotel, prelude::*};

pub struct HotelRepository {
    conn: DatabaseConnection,
}

impl HotelRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// The hotel profile. Only the first row is used when several exist.
    pub async fn profile(&self) -> Result<Option<hotel::Model>> {
        Ok(Hotel::find()
            .order_by_asc(hotel::Column::HotelId)
            .one(&self.conn)
            .await?)
    }

    pub async fn insert_or_ignore(
        &self,
        name: &str,
        location: &str,
        nearby_restaurants: &str,
        fun_destinations: &str,
    ) -> Result<u64> {
        let active_model = hotel::ActiveModel {
            name: Set(name.to_string()),
            location: Set(Some(location.to_string())),
            nearby_restaurants: Set(Some(nearby_restaurants.to_string())),
            fun_destinations: Set(Some(fun_destinations.to_string())),
            ..Default::default()
        };

        let inserted = Hotel::insert(active_model)
            .on_conflict(
                sea_orm::sea_query::OnConflict::column(hotel::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.conn)
            .await?;

        Ok(inserted)
    }
}
