//! Domain service that assembles the per-room grounding snapshot.

use crate::domain::RoomNumber;
use crate::models::context::RoomContext;
use chrono::Weekday;
use thiserror::Error;

/// Errors produced while building a [`RoomContext`].
///
/// A missing room is an expected outcome; a dangling building reference is a
/// data-integrity problem confined to that room. Storage failures are kept
/// apart from both.
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("Room {0} not found.")]
    RoomNotFound(RoomNumber),

    #[error("Room {room} references missing building {building_id:?}")]
    IntegrityViolation {
        room: RoomNumber,
        building_id: Option<i32>,
    },

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for ContextError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for ContextError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

impl ContextError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::RoomNotFound(_))
    }
}

#[async_trait::async_trait]
pub trait ContextService: Send + Sync {
    /// Builds the context for `room` with the menu filtered to `day`.
    ///
    /// Read-only; safe to call repeatedly and concurrently.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::RoomNotFound`] when the room does not exist and
    /// [`ContextError::IntegrityViolation`] when its building is missing.
    async fn build_context_for_day(
        &self,
        room: &RoomNumber,
        day: Weekday,
    ) -> Result<RoomContext, ContextError>;

    /// Builds the context for `room` using today's local weekday.
    async fn build_context(&self, room: &RoomNumber) -> Result<RoomContext, ContextError> {
        self.build_context_for_day(room, crate::domain::today())
            .await
    }
}
