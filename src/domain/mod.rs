//! Domain primitives for rooms and guest credentials.
//!
//! Room numbers and device tokens are both plain strings in storage. The
//! newtypes keep them from being swapped at call sites.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Room number cannot be empty")]
    EmptyRoomNumber,

    #[error("Device token cannot be empty")]
    EmptyToken,
}

/// Identifier of a room, e.g. `"111"` or `"0204"`.
///
/// Never parsed as a number: leading zeros and non-numeric formats such as
/// `"B-12"` are preserved exactly as given (minus surrounding whitespace).
///
/// # Examples
///
/// ```rust
/// use concierge::domain::RoomNumber;
///
/// let room: RoomNumber = " 0101 ".parse().unwrap();
/// assert_eq!(room.as_str(), "0101");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomNumber(String);

impl RoomNumber {
    /// Wraps a room number that is already known to be valid, such as a
    /// primary key read back from the database.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RoomNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyRoomNumber);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RoomNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Opaque bearer credential issued to a guest device at check-in.
///
/// `Debug` only shows a short prefix so tokens do not end up whole in logs.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceToken(String);

impl DeviceToken {
    /// Issues a fresh random token (UUID v4).
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn redacted(&self) -> String {
        let prefix: String = self.0.chars().take(8).collect();
        format!("{prefix}…")
    }
}

impl FromStr for DeviceToken {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyToken);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Debug for DeviceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DeviceToken").field(&self.redacted()).finish()
    }
}

impl fmt::Display for DeviceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// English weekday name as stored in `restaurant_menu.day`.
#[must_use]
pub const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Today's weekday in the local timezone.
#[must_use]
pub fn today() -> Weekday {
    use chrono::Datelike;
    chrono::Local::now().weekday()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_number_keeps_leading_zeros() {
        let room: RoomNumber = "0101".parse().unwrap();
        assert_eq!(room.as_str(), "0101");
        assert_eq!(room.to_string(), "0101");
    }

    #[test]
    fn room_number_accepts_non_numeric() {
        let room: RoomNumber = "  B-12 ".parse().unwrap();
        assert_eq!(room.as_str(), "B-12");
    }

    #[test]
    fn room_number_rejects_blank() {
        assert_eq!(
            "   ".parse::<RoomNumber>(),
            Err(DomainError::EmptyRoomNumber)
        );
    }

    #[test]
    fn generated_tokens_are_unique() {
        let a = DeviceToken::generate();
        let b = DeviceToken::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
    }

    #[test]
    fn token_debug_is_redacted() {
        let token = DeviceToken::new("0123456789abcdef");
        let debug = format!("{token:?}");
        assert!(debug.contains("01234567"));
        assert!(!debug.contains("89abcdef"));
    }

    #[test]
    fn weekday_names_match_menu_rows() {
        assert_eq!(weekday_name(Weekday::Mon), "Monday");
        assert_eq!(weekday_name(Weekday::Sun), "Sunday");
    }

    #[test]
    fn room_number_serializes_as_plain_string() {
        let room = RoomNumber::new("212");
        assert_eq!(serde_json::to_string(&room).unwrap(), "\"212\"");
    }
}
