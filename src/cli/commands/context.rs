use crate::config::Config;
use crate::domain::RoomNumber;
use crate::services::{
    ContextError, ContextService, ResidentService, SeaOrmContextService, SeaOrmResidentService,
};
use anyhow::Context;

use super::{credentials, open_store, parse_room};

/// Room from the argument, or the room of the guest holding the device token.
pub(super) async fn room_for_request(
    config: &Config,
    token_override: Option<&str>,
    residents: &SeaOrmResidentService,
    room: Option<&str>,
) -> anyhow::Result<Option<RoomNumber>> {
    if let Some(raw) = room {
        return parse_room(raw).map(Some);
    }

    let Some(token) = credentials(config, token_override)?
        .current_token()
        .await?
    else {
        println!("No device token found. Pass a room number or check in first.");
        return Ok(None);
    };

    match residents.resolve_resident(&token).await? {
        Some(resident) => Ok(Some(resident.room_number)),
        None => {
            println!("Device token is not valid (unknown or checked out).");
            Ok(None)
        }
    }
}

pub async fn cmd_context(
    config: &Config,
    token_override: Option<&str>,
    room: Option<&str>,
    day: Option<&str>,
) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let residents = SeaOrmResidentService::new(store.clone());

    let Some(room) = room_for_request(config, token_override, &residents, room).await? else {
        return Ok(());
    };

    let day = match day {
        Some(raw) => raw
            .parse::<chrono::Weekday>()
            .map_err(|_| anyhow::anyhow!("Unknown weekday: {raw}"))?,
        None => crate::domain::today(),
    };

    let service = SeaOrmContextService::new(store);
    match service.build_context_for_day(&room, day).await {
        Ok(context) => {
            let text = context
                .to_grounding_text()
                .context("Failed to render room context")?;
            println!("{text}");
        }
        Err(ContextError::RoomNotFound(room)) => println!("Room {room} not found."),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
