//! `SeaORM` implementation of the `ResidentService` trait.

use crate::db::Store;
use crate::domain::{DeviceToken, RoomNumber};
use crate::models::resident::Resident;
use crate::services::resident_service::{CheckIn, ResidentError, ResidentService};
use async_trait::async_trait;
use tracing::{debug, info};

pub struct SeaOrmResidentService {
    store: Store,
}

impl SeaOrmResidentService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ResidentService for SeaOrmResidentService {
    async fn resolve_resident(
        &self,
        token: &DeviceToken,
    ) -> Result<Option<Resident>, ResidentError> {
        let resident = self.store.get_active_resident_by_token(token).await?;
        if resident.is_none() {
            debug!(token = ?token, "Token did not resolve to an active resident");
        }
        Ok(resident)
    }

    async fn check_in(&self, name: &str, room: &RoomNumber) -> Result<CheckIn, ResidentError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ResidentError::Validation(
                "Resident name cannot be empty".to_string(),
            ));
        }

        if !self.store.room_exists(room).await? {
            return Err(ResidentError::RoomNotFound(room.clone()));
        }

        let token = DeviceToken::generate();
        let now = chrono::Utc::now().to_rfc3339();
        let resident = self.store.add_resident(name, room, &token, &now).await?;

        info!(
            resident_id = resident.resident_id,
            room = %room,
            "Resident checked in"
        );

        Ok(CheckIn { resident, token })
    }

    async fn check_out(&self, token: &DeviceToken) -> Result<Resident, ResidentError> {
        let now = chrono::Utc::now().to_rfc3339();
        let voided = self.store.void_resident_token(token, &now).await?;

        let resident = self
            .store
            .get_resident_by_token(token)
            .await?
            .ok_or(ResidentError::UnknownToken)?;

        if voided == 0 {
            return Err(ResidentError::AlreadyCheckedOut(resident.name));
        }

        info!(
            resident_id = resident.resident_id,
            room = %resident.room_number,
            "Resident checked out, token voided"
        );

        Ok(resident)
    }

    async fn list_residents(&self, active_only: bool) -> Result<Vec<Resident>, ResidentError> {
        let residents = if active_only {
            self.store.list_active_residents().await?
        } else {
            self.store.list_residents().await?
        };
        Ok(residents)
    }

    async fn delete_resident(&self, resident_id: i32) -> Result<(), ResidentError> {
        if self.store.delete_resident(resident_id).await? {
            Ok(())
        } else {
            Err(ResidentError::NotFound(resident_id))
        }
    }
}
