use crate::domain::{DeviceToken, RoomNumber};
use crate::entities::residents;
use serde::Serialize;

/// A current or former guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resident {
    pub resident_id: i32,
    pub name: String,
    pub room_number: RoomNumber,
    #[serde(skip_serializing)]
    pub device_token: DeviceToken,
    pub checkin_time: Option<String>,
    pub checkout_time: Option<String>,
    pub token_voided: bool,
}

impl Resident {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.token_voided
    }

    /// First word of the guest's name, used for greetings.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

impl From<residents::Model> for Resident {
    fn from(model: residents::Model) -> Self {
        Self {
            resident_id: model.resident_id,
            name: model.name,
            room_number: RoomNumber::new(model.room_number),
            device_token: DeviceToken::new(model.device_token),
            checkin_time: model.checkin_time,
            checkout_time: model.checkout_time,
            token_voided: model.token_voided,
        }
    }
}
