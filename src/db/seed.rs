//! Demo fixture data. Every insert is insert-or-ignore, so seeding twice
//! leaves row counts unchanged.

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::{NewAmenity, NewBuilding, NewMenuItem, NewRoom, Store};
use crate::domain::{DeviceToken, RoomNumber};

const HOTEL: (&str, &str, &str, &str) = (
    "Canyon Cove",
    "Nasugbu, Batangas",
    "Mcdonald's",
    "Monte Maria",
);

struct BuildingFixture {
    name: &'static str,
    wifi_ssid: &'static str,
    wifi_password: &'static str,
    restaurant: &'static str,
    room_prefix: u32,
    tv_brand: &'static str,
    fan_type: &'static str,
    thermostat_model: &'static str,
}

const BUILDINGS: [BuildingFixture; 2] = [
    BuildingFixture {
        name: "Main Building",
        wifi_ssid: "CanyonWifi",
        wifi_password: "LobXeen",
        restaurant: "Island Cafe",
        room_prefix: 1,
        tv_brand: "Samsung",
        fan_type: "Ceiling Fan",
        thermostat_model: "Nest V3",
    },
    BuildingFixture {
        name: "Second Building",
        wifi_ssid: "CoveWifi",
        wifi_password: "PatRoox",
        restaurant: "Island Cafe",
        room_prefix: 2,
        tv_brand: "LG",
        fan_type: "Tower Fan",
        thermostat_model: "Honeywell T6",
    },
];

/// Room types by floor, one entry per room position on the floor.
const FLOOR_ROOM_TYPES: [[&str; 5]; 3] = [
    [
        "Superior King",
        "Superior Twin",
        "Superior King",
        "Superior Twin",
        "Superior King",
    ],
    [
        "Bedroom Deluxe",
        "Bedroom Family",
        "Bedroom Deluxe",
        "Bedroom Family",
        "Bedroom Deluxe",
    ],
    ["Bedroom Executive"; 5],
];

const AMENITIES: [(&str, &str, i32); 2] = [
    ("Housekeeping", "Daily room cleaning service", 1),
    ("Communal Restroom", "Restrooms for guests on each floor", 1),
];

const POOLS: [(&str, &str); 6] = [
    ("Main Pool", "Slides, Rides"),
    ("Wave Pool", "Wave feature"),
    ("Kids Pool", "Shallow, small slides"),
    ("Relax Pool", "Jacuzzi, loungers"),
    ("Sport Pool", "Lanes for swimming"),
    ("Adventure Pool", "Obstacle course, climbing features"),
];

const WATER_SPORTS: [(&str, &str); 5] = [
    ("Jet Skiing", "High-speed rides along the cove"),
    ("Banana Boat", "Fun group ride"),
    ("Kayaking", "Explore the shoreline"),
    ("Snorkeling", "Discover marine life"),
    ("Parasailing", "Fly over the ocean"),
];

const MENU: [(&str, &str, &str, &str); 9] = [
    ("Monday", "Breakfast", "Breakfast Buffet", "Island Cafe"),
    ("Thursday", "Breakfast", "Breakfast Buffet", "Island Cafe"),
    ("Sunday", "Breakfast", "Breakfast Buffet", "Island Cafe"),
    ("Tuesday", "Brunch", "Brunch Buffet", "Island Cafe"),
    ("Friday", "Brunch", "Brunch Buffet", "Island Cafe"),
    ("Monday", "Lunch", "Grilled Chicken Salad", "Island Cafe"),
    ("Monday", "Lunch", "Vegetable Stir Fry", "Island Cafe"),
    ("Tuesday", "Lunch", "Beef Burger", "Island Cafe"),
    ("Tuesday", "Lunch", "Quinoa Bowl", "Island Cafe"),
];

const HOUSEKEEPING: [(&str, &str, &str); 2] = [
    ("111", "2025-12-01 10:00:00", "Angelo Antenor"),
    ("212", "2025-12-01 11:30:00", "Franco Patrick"),
];

/// Guests checked in by the seeder when their room is vacant.
pub const RESIDENTS: [(&str, &str); 3] = [
    ("Joyce Ann Acob", "111"),
    ("Chelsy Agtay", "212"),
    ("Jelaine Soto", "213"),
];

/// A guest checked in during seeding, with the token issued to them.
#[derive(Debug, Clone)]
pub struct SeededResident {
    pub name: String,
    pub room_number: RoomNumber,
    pub token: DeviceToken,
}

/// Rows actually written by one seeding run.
#[derive(Debug, Clone, Default)]
pub struct SeedReport {
    pub hotel: u64,
    pub buildings: u64,
    pub rooms: u64,
    pub amenities: u64,
    pub pools: u64,
    pub water_sports: u64,
    pub menu_items: u64,
    pub housekeeping: u64,
    pub residents: Vec<SeededResident>,
}

impl SeedReport {
    #[must_use]
    pub fn total_rows(&self) -> u64 {
        self.hotel
            + self.buildings
            + self.rooms
            + self.amenities
            + self.pools
            + self.water_sports
            + self.menu_items
            + self.housekeeping
            + self.residents.len() as u64
    }
}

/// Room numbers for one building: `{prefix}{floor}{1..=5}` on floors 1 to 3.
fn building_rooms(fixture: &BuildingFixture, building_id: i32) -> Vec<NewRoom> {
    let mut rooms = Vec::with_capacity(15);

    for (floor_index, types) in FLOOR_ROOM_TYPES.iter().enumerate() {
        let floor = floor_index + 1;
        for (position, room_type) in types.iter().enumerate() {
            let number = format!("{}{}{}", fixture.room_prefix, floor, position + 1);
            rooms.push(NewRoom {
                room_number: RoomNumber::new(number),
                building_id,
                floor: i32::try_from(floor).ok(),
                room_type: Some((*room_type).to_string()),
                tv_brand: Some(fixture.tv_brand.to_string()),
                fan_type: Some(fixture.fan_type.to_string()),
                thermostat_model: Some(fixture.thermostat_model.to_string()),
            });
        }
    }

    rooms
}

/// Loads the demo hotel into `store`.
///
/// Fixture residents are only checked in when their room has no active
/// resident, so rerunning never issues extra tokens.
pub async fn seed_fixtures(store: &Store) -> Result<SeedReport> {
    let mut report = SeedReport {
        hotel: store
            .add_hotel_if_missing(HOTEL.0, HOTEL.1, HOTEL.2, HOTEL.3)
            .await?,
        ..SeedReport::default()
    };

    for fixture in &BUILDINGS {
        let (building_id, inserted) = store
            .add_building(&NewBuilding {
                name: fixture.name.to_string(),
                wifi_ssid: Some(fixture.wifi_ssid.to_string()),
                wifi_password: Some(fixture.wifi_password.to_string()),
                restaurant_name: Some(fixture.restaurant.to_string()),
            })
            .await
            .with_context(|| format!("Failed to seed building '{}'", fixture.name))?;
        report.buildings += u64::from(inserted);

        report.rooms += store
            .add_rooms_if_missing(building_rooms(fixture, building_id))
            .await?;

        let amenities = AMENITIES
            .iter()
            .map(|(name, description, floor)| NewAmenity {
                building_id,
                name: (*name).to_string(),
                description: Some((*description).to_string()),
                floor: Some(*floor),
            })
            .collect();
        report.amenities += store.add_amenities_if_missing(amenities).await?;
    }

    report.pools = store.add_pools_if_missing(&POOLS).await?;
    report.water_sports = store.add_water_sports_if_missing(&WATER_SPORTS).await?;

    let menu = MENU
        .iter()
        .map(|(day, meal, item, restaurant)| NewMenuItem {
            day: (*day).to_string(),
            meal: (*meal).to_string(),
            item_name: (*item).to_string(),
            restaurant_name: Some((*restaurant).to_string()),
        })
        .collect();
    report.menu_items = store.add_menu_items_if_missing(menu).await?;

    for (room, cleaned_time, cleaner) in HOUSEKEEPING {
        let written = store
            .record_cleaning(&RoomNumber::new(room), cleaned_time, cleaner)
            .await?;
        report.housekeeping += u64::from(written);
    }

    for (name, room) in RESIDENTS {
        let room = RoomNumber::new(room);
        if store.get_active_resident_for_room(&room).await?.is_some() {
            debug!(room = %room, "Room already occupied, skipping fixture resident");
            continue;
        }

        let token = DeviceToken::generate();
        let now = chrono::Utc::now().to_rfc3339();
        store.add_resident(name, &room, &token, &now).await?;
        report.residents.push(SeededResident {
            name: name.to_string(),
            room_number: room,
            token,
        });
    }

    info!(rows = report.total_rows(), "Fixture seeding finished");
    Ok(report)
}
