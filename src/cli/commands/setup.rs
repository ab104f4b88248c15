use crate::config::Config;
use crate::db::seed::seed_fixtures;

use super::open_store;

pub fn cmd_init() -> anyhow::Result<()> {
    if Config::create_default_if_missing()? {
        println!("✓ Config file created. Edit config.toml and run again.");
    } else {
        println!(
            "Config file already exists: {}",
            Config::default_config_path().display()
        );
    }
    Ok(())
}

pub async fn cmd_seed(config: &Config) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let report = seed_fixtures(&store).await?;

    if report.total_rows() == 0 {
        println!("Database already seeded, nothing to add.");
        return Ok(());
    }

    println!("Seeded {}", config.general.database_path);
    println!("{:-<50}", "");
    println!("  Hotel:         {}", report.hotel);
    println!("  Buildings:     {}", report.buildings);
    println!("  Rooms:         {}", report.rooms);
    println!("  Amenities:     {}", report.amenities);
    println!("  Pools:         {}", report.pools);
    println!("  Water sports:  {}", report.water_sports);
    println!("  Menu items:    {}", report.menu_items);
    println!("  Housekeeping:  {}", report.housekeeping);

    if !report.residents.is_empty() {
        println!();
        println!("Checked-in residents:");
        for resident in &report.residents {
            println!(
                "  {} (room {}) token: {}",
                resident.name, resident.room_number, resident.token
            );
        }
        println!();
        println!("Use one with: concierge --token <token> chat");
    }

    Ok(())
}
