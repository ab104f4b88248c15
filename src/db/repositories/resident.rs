use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    sea_query::Expr,
};

use crate::domain::{DeviceToken, RoomNumber};
use crate::entities::{prelude::*, residents};
use crate::models::resident::Resident;

pub struct ResidentRepository {
    conn: DatabaseConnection,
}

impl ResidentRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Resident holding `token`, but only while the token is not voided.
    pub async fn find_active_by_token(&self, token: &DeviceToken) -> Result<Option<Resident>> {
        let resident = Residents::find()
            .filter(residents::Column::DeviceToken.eq(token.as_str()))
            .filter(residents::Column::TokenVoided.eq(false))
            .one(&self.conn)
            .await
            .context("Failed to query resident by device token")?;

        Ok(resident.map(Resident::from))
    }

    /// Resident holding `token`, voided or not.
    pub async fn find_by_token(&self, token: &DeviceToken) -> Result<Option<Resident>> {
        let resident = Residents::find()
            .filter(residents::Column::DeviceToken.eq(token.as_str()))
            .one(&self.conn)
            .await
            .context("Failed to query resident by device token")?;

        Ok(resident.map(Resident::from))
    }

    /// Most recently checked-in active resident of a room.
    pub async fn find_active_by_room(&self, room: &RoomNumber) -> Result<Option<Resident>> {
        let resident = Residents::find()
            .filter(residents::Column::RoomNumber.eq(room.as_str()))
            .filter(residents::Column::TokenVoided.eq(false))
            .order_by_desc(residents::Column::ResidentId)
            .one(&self.conn)
            .await
            .context("Failed to query active resident for room")?;

        Ok(resident.map(Resident::from))
    }

    pub async fn insert(
        &self,
        name: &str,
        room: &RoomNumber,
        token: &DeviceToken,
        checkin_time: &str,
    ) -> Result<Resident> {
        let active_model = residents::ActiveModel {
            name: Set(name.to_string()),
            room_number: Set(room.as_str().to_string()),
            device_token: Set(token.as_str().to_string()),
            checkin_time: Set(Some(checkin_time.to_string())),
            checkout_time: Set(None),
            token_voided: Set(false),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.conn)
            .await
            .context("Failed to insert resident")?;

        Ok(Resident::from(model))
    }

    /// Voids an active token in a single statement. Returns the number of rows
    /// changed: 0 when the token is unknown or already voided.
    pub async fn void_token(&self, token: &DeviceToken, checkout_time: &str) -> Result<u64> {
        let result = Residents::update_many()
            .col_expr(
                residents::Column::CheckoutTime,
                Expr::value(checkout_time.to_string()),
            )
            .col_expr(residents::Column::TokenVoided, Expr::value(true))
            .filter(residents::Column::DeviceToken.eq(token.as_str()))
            .filter(residents::Column::TokenVoided.eq(false))
            .exec(&self.conn)
            .await
            .context("Failed to void device token")?;

        Ok(result.rows_affected)
    }

    pub async fn list(&self) -> Result<Vec<Resident>> {
        let rows = Residents::find()
            .order_by_asc(residents::Column::ResidentId)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Resident::from).collect())
    }

    pub async fn list_active(&self) -> Result<Vec<Resident>> {
        let rows = Residents::find()
            .filter(residents::Column::TokenVoided.eq(false))
            .order_by_asc(residents::Column::ResidentId)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Resident::from).collect())
    }

    pub async fn delete(&self, resident_id: i32) -> Result<bool> {
        let result = Residents::delete_by_id(resident_id)
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
