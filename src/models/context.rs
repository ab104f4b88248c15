//! Read-only snapshot of everything a guest may ask about their stay.

use crate::domain::RoomNumber;
use crate::entities::{
    amenities, buildings, hotel, housekeeping_log, pools, restaurant_menu, rooms, water_sports,
};
use crate::models::resident::Resident;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RoomContext {
    /// Weekday the menu was filtered for, e.g. "Tuesday".
    pub day: String,
    pub resident: Option<Resident>,
    pub room: RoomInfo,
    pub building: BuildingInfo,
    pub amenities: Vec<AmenityInfo>,
    pub pools: Vec<PoolInfo>,
    pub water_sports: Vec<WaterSportInfo>,
    pub restaurant_menu: Vec<MenuItem>,
    pub hotel: Option<HotelInfo>,
    pub last_cleaned: Option<CleaningRecord>,
}

impl RoomContext {
    /// Serializes the context into the grounding text sent to the assistant.
    pub fn to_grounding_text(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomInfo {
    pub room_number: RoomNumber,
    pub floor: Option<i32>,
    pub room_type: Option<String>,
    pub tv_brand: Option<String>,
    pub fan_type: Option<String>,
    pub thermostat_model: Option<String>,
}

impl From<rooms::Model> for RoomInfo {
    fn from(model: rooms::Model) -> Self {
        Self {
            room_number: RoomNumber::new(model.room_number),
            floor: model.floor,
            room_type: model.room_type,
            tv_brand: model.tv_brand,
            fan_type: model.fan_type,
            thermostat_model: model.thermostat_model,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildingInfo {
    pub id: i32,
    pub name: String,
    pub wifi_ssid: Option<String>,
    pub wifi_password: Option<String>,
    pub restaurant_name: Option<String>,
}

impl From<buildings::Model> for BuildingInfo {
    fn from(model: buildings::Model) -> Self {
        Self {
            id: model.building_id,
            name: model.name,
            wifi_ssid: model.wifi_ssid,
            wifi_password: model.wifi_password,
            restaurant_name: model.restaurant_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AmenityInfo {
    pub name: String,
    pub description: Option<String>,
    pub floor: Option<i32>,
}

impl From<amenities::Model> for AmenityInfo {
    fn from(model: amenities::Model) -> Self {
        Self {
            name: model.name,
            description: model.description,
            floor: model.floor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolInfo {
    pub name: String,
    pub features: Option<String>,
}

impl From<pools::Model> for PoolInfo {
    fn from(model: pools::Model) -> Self {
        Self {
            name: model.name,
            features: model.features,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaterSportInfo {
    pub name: String,
    pub description: Option<String>,
}

impl From<water_sports::Model> for WaterSportInfo {
    fn from(model: water_sports::Model) -> Self {
        Self {
            name: model.name,
            description: model.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub day: String,
    pub meal: String,
    pub item_name: String,
}

impl From<restaurant_menu::Model> for MenuItem {
    fn from(model: restaurant_menu::Model) -> Self {
        Self {
            day: model.day,
            meal: model.meal,
            item_name: model.item_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HotelInfo {
    pub name: String,
    pub location: Option<String>,
    pub nearby_restaurants: Option<String>,
    pub fun_destinations: Option<String>,
}

impl From<hotel::Model> for HotelInfo {
    fn from(model: hotel::Model) -> Self {
        Self {
            name: model.name,
            location: model.location,
            nearby_restaurants: model.nearby_restaurants,
            fun_destinations: model.fun_destinations,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleaningRecord {
    pub cleaned_time: String,
    pub cleaner_name: String,
}

impl From<housekeeping_log::Model> for CleaningRecord {
    fn from(model: housekeeping_log::Model) -> Self {
        Self {
            cleaned_time: model.cleaned_time,
            cleaner_name: model.cleaner_name,
        }
    }
}
