use crate::config::Config;
use crate::services::{ResidentError, ResidentService, SeaOrmResidentService};

use super::{open_store, or_dash};

pub async fn cmd_resident_list(config: &Config, active_only: bool) -> anyhow::Result<()> {
    let service = SeaOrmResidentService::new(open_store(config).await?);
    let residents = service.list_residents(active_only).await?;

    if residents.is_empty() {
        println!("No residents found.");
        return Ok(());
    }

    println!("Residents ({} total)", residents.len());
    println!("{:-<70}", "");
    for resident in residents {
        let status = if resident.is_active() { "●" } else { "○" };
        println!(
            "{status} [{}] {} - room {}",
            resident.resident_id, resident.name, resident.room_number
        );
        println!(
            "  In: {} | Out: {}",
            or_dash(resident.checkin_time.as_deref()),
            or_dash(resident.checkout_time.as_deref())
        );
    }

    println!();
    println!("Legend: ● Checked in | ○ Checked out");
    Ok(())
}

pub async fn cmd_resident_delete(config: &Config, resident_id: i32) -> anyhow::Result<()> {
    let service = SeaOrmResidentService::new(open_store(config).await?);
    match service.delete_resident(resident_id).await {
        Ok(()) => println!("✓ Deleted resident {resident_id}"),
        Err(ResidentError::NotFound(id)) => println!("Resident {id} not found."),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
