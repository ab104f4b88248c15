//! Guest identity commands: check-in, check-out and whoami.

use crate::config::Config;
use crate::services::{ResidentError, ResidentService, SeaOrmResidentService};

use super::{credentials, open_store, or_dash, parse_room};

pub async fn cmd_check_in(
    config: &Config,
    token_override: Option<&str>,
    room: &str,
    name: &str,
) -> anyhow::Result<()> {
    let room = parse_room(room)?;
    let service = SeaOrmResidentService::new(open_store(config).await?);

    let check_in = match service.check_in(name, &room).await {
        Ok(check_in) => check_in,
        Err(ResidentError::RoomNotFound(room)) => {
            println!("Room {room} does not exist.");
            println!("Use 'concierge room list' to see rooms.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    credentials(config, token_override)?
        .store_token(&check_in.token)
        .await?;

    println!(
        "✓ {} checked into room {}",
        check_in.resident.name, check_in.resident.room_number
    );
    println!("  Resident ID: {}", check_in.resident.resident_id);
    println!("  Token: {}", check_in.token);
    Ok(())
}

pub async fn cmd_check_out(config: &Config, token_override: Option<&str>) -> anyhow::Result<()> {
    let provider = credentials(config, token_override)?;
    let Some(token) = provider.current_token().await? else {
        println!("No device token found. Nothing to check out.");
        return Ok(());
    };

    let service = SeaOrmResidentService::new(open_store(config).await?);
    match service.check_out(&token).await {
        Ok(resident) => {
            provider.clear_token().await?;
            println!(
                "✓ {} checked out of room {} at {}",
                resident.name,
                resident.room_number,
                or_dash(resident.checkout_time.as_deref())
            );
        }
        Err(ResidentError::UnknownToken) => {
            println!("Device token is not registered.");
        }
        Err(ResidentError::AlreadyCheckedOut(name)) => {
            provider.clear_token().await?;
            println!("{name} has already checked out.");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

pub async fn cmd_whoami(config: &Config, token_override: Option<&str>) -> anyhow::Result<()> {
    let Some(token) = credentials(config, token_override)?
        .current_token()
        .await?
    else {
        println!("No device token found.");
        println!("Check in with: concierge check-in <room> <name>");
        return Ok(());
    };

    let service = SeaOrmResidentService::new(open_store(config).await?);
    match service.resolve_resident(&token).await? {
        Some(resident) => {
            println!("{} (ID: {})", resident.name, resident.resident_id);
            println!("  Room: {}", resident.room_number);
            println!(
                "  Checked in: {}",
                or_dash(resident.checkin_time.as_deref())
            );
        }
        None => println!("Device token is not valid (unknown or checked out)."),
    }

    Ok(())
}
