//! Domain service for guest identity: token authentication and the
//! check-in / check-out lifecycle.

use crate::domain::{DeviceToken, RoomNumber};
use crate::models::resident::Resident;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResidentError {
    #[error("Room {0} not found")]
    RoomNotFound(RoomNumber),

    #[error("Device token is not registered")]
    UnknownToken,

    #[error("Resident {0} has already checked out")]
    AlreadyCheckedOut(String),

    #[error("Resident {0} not found")]
    NotFound(i32),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for ResidentError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for ResidentError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

/// Outcome of a successful check-in.
#[derive(Debug, Clone)]
pub struct CheckIn {
    pub resident: Resident,
    /// Freshly issued bearer token. Hand it to the guest device.
    pub token: DeviceToken,
}

#[async_trait::async_trait]
pub trait ResidentService: Send + Sync {
    /// Resolves a bearer token to its active resident.
    ///
    /// Unknown and voided tokens both yield `Ok(None)`; only storage failures
    /// are errors.
    async fn resolve_resident(
        &self,
        token: &DeviceToken,
    ) -> Result<Option<Resident>, ResidentError>;

    /// Checks a guest into an existing room and issues a new token.
    ///
    /// # Errors
    ///
    /// Returns [`ResidentError::RoomNotFound`] for an unknown room.
    async fn check_in(&self, name: &str, room: &RoomNumber) -> Result<CheckIn, ResidentError>;

    /// Voids the token and stamps the checkout time. One-way.
    ///
    /// # Errors
    ///
    /// Returns [`ResidentError::UnknownToken`] or
    /// [`ResidentError::AlreadyCheckedOut`].
    async fn check_out(&self, token: &DeviceToken) -> Result<Resident, ResidentError>;

    async fn list_residents(&self, active_only: bool) -> Result<Vec<Resident>, ResidentError>;

    async fn delete_resident(&self, resident_id: i32) -> Result<(), ResidentError>;
}
