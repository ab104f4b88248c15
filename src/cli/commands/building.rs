use crate::config::Config;
use crate::db::NewBuilding;

use super::{open_store, or_dash};

pub async fn cmd_building_add(
    config: &Config,
    name: &str,
    wifi_ssid: Option<String>,
    wifi_password: Option<String>,
    restaurant: Option<String>,
) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let (id, inserted) = store
        .add_building(&NewBuilding {
            name: name.to_string(),
            wifi_ssid,
            wifi_password,
            restaurant_name: restaurant,
        })
        .await?;

    if inserted {
        println!("✓ Added building '{name}' (ID: {id})");
    } else {
        println!("Building '{name}' already exists (ID: {id})");
    }
    Ok(())
}

pub async fn cmd_building_list(config: &Config) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let buildings = store.list_buildings().await?;

    if buildings.is_empty() {
        println!("No buildings yet.");
        println!();
        println!("Load the demo hotel with: concierge seed");
        return Ok(());
    }

    println!("Buildings ({} total)", buildings.len());
    println!("{:-<60}", "");
    for building in buildings {
        println!("{} [{}]", building.name, building.building_id);
        println!(
            "  WiFi: {} / {} | Restaurant: {}",
            or_dash(building.wifi_ssid.as_deref()),
            or_dash(building.wifi_password.as_deref()),
            or_dash(building.restaurant_name.as_deref())
        );
    }
    Ok(())
}

pub async fn cmd_building_delete(config: &Config, building_id: i32) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    if store.delete_building(building_id).await? {
        println!("✓ Deleted building {building_id}");
    } else {
        println!("Building {building_id} not found.");
    }
    Ok(())
}
