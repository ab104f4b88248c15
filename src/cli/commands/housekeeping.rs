use crate::config::Config;
use crate::constants::limits::HOUSEKEEPING_LIST_LIMIT;

use super::{open_store, parse_room};

pub async fn cmd_housekeeping_log(
    config: &Config,
    room: &str,
    cleaner: &str,
) -> anyhow::Result<()> {
    let room = parse_room(room)?;
    let store = open_store(config).await?;

    if !store.room_exists(&room).await? {
        println!("Room {room} not found.");
        return Ok(());
    }

    let cleaned_time = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    if store.record_cleaning(&room, &cleaned_time, cleaner).await? {
        println!("✓ Room {room} cleaned by {cleaner} at {cleaned_time}");
    } else {
        println!("A cleaning of room {room} at {cleaned_time} is already logged.");
    }
    Ok(())
}

pub async fn cmd_housekeeping_list(config: &Config, room: &str) -> anyhow::Result<()> {
    let room = parse_room(room)?;
    let store = open_store(config).await?;
    let entries = store.list_cleanings(&room).await?;

    if entries.is_empty() {
        println!("No cleaning recorded for room {room}.");
        return Ok(());
    }

    println!("Housekeeping for room {room}");
    println!("{:-<50}", "");
    for entry in entries.iter().take(HOUSEKEEPING_LIST_LIMIT) {
        println!("{}  {}", entry.cleaned_time, entry.cleaner_name);
    }
    if entries.len() > HOUSEKEEPING_LIST_LIMIT {
        println!("... and {} more", entries.len() - HOUSEKEEPING_LIST_LIMIT);
    }
    Ok(())
}
