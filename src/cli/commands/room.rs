use crate::config::Config;
use crate::db::NewRoom;

use super::{open_store, or_dash, parse_room};

/// Optional room attributes for `room add`.
pub struct RoomDetails {
    pub floor: Option<i32>,
    pub room_type: Option<String>,
    pub tv_brand: Option<String>,
    pub fan_type: Option<String>,
    pub thermostat_model: Option<String>,
}

pub async fn cmd_room_add(
    config: &Config,
    room: &str,
    building_id: i32,
    details: RoomDetails,
) -> anyhow::Result<()> {
    let room_number = parse_room(room)?;
    let store = open_store(config).await?;

    if store.get_building(building_id).await?.is_none() {
        println!("Building {building_id} not found.");
        println!("Use 'concierge building list' to see buildings.");
        return Ok(());
    }

    if store.room_exists(&room_number).await? {
        println!("Room {room_number} already exists.");
        return Ok(());
    }

    store
        .add_room(NewRoom {
            room_number: room_number.clone(),
            building_id,
            floor: details.floor,
            room_type: details.room_type,
            tv_brand: details.tv_brand,
            fan_type: details.fan_type,
            thermostat_model: details.thermostat_model,
        })
        .await?;

    println!("✓ Added room {room_number} to building {building_id}");
    Ok(())
}

pub async fn cmd_room_list(config: &Config, building: Option<i32>) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let rooms = match building {
        Some(id) => store.list_rooms_in_building(id).await?,
        None => store.list_rooms().await?,
    };

    if rooms.is_empty() {
        println!("No rooms found.");
        return Ok(());
    }

    println!("Rooms ({} total)", rooms.len());
    println!("{:-<70}", "");
    for room in rooms {
        let floor = room
            .floor
            .map_or_else(|| "-".to_string(), |f| f.to_string());
        println!(
            "{:<6} building {:<3} floor {:<3} {}",
            room.room_number,
            room.building_id
                .map_or_else(|| "-".to_string(), |id| id.to_string()),
            floor,
            or_dash(room.room_type.as_deref())
        );
    }
    Ok(())
}

pub async fn cmd_room_delete(config: &Config, room: &str) -> anyhow::Result<()> {
    let room = parse_room(room)?;
    let store = open_store(config).await?;
    if store.delete_room(&room).await? {
        println!("✓ Deleted room {room}");
    } else {
        println!("Room {room} not found.");
    }
    Ok(())
}
