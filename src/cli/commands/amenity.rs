use crate::config::Config;
use crate::db::NewAmenity;

use super::{open_store, or_dash};

pub async fn cmd_amenity_add(
    config: &Config,
    building_id: i32,
    name: &str,
    description: Option<String>,
    floor: Option<i32>,
) -> anyhow::Result<()> {
    let store = open_store(config).await?;

    if store.get_building(building_id).await?.is_none() {
        println!("Building {building_id} not found.");
        return Ok(());
    }

    let id = store
        .add_amenity(NewAmenity {
            building_id,
            name: name.to_string(),
            description,
            floor,
        })
        .await?;

    println!("✓ Added amenity '{name}' (ID: {id}) to building {building_id}");
    Ok(())
}

pub async fn cmd_amenity_list(config: &Config, building: Option<i32>) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let amenities = match building {
        Some(id) => store.list_amenities_for_building(id).await?,
        None => store.list_amenities().await?,
    };

    if amenities.is_empty() {
        println!("No amenities found.");
        return Ok(());
    }

    println!("Amenities ({} total)", amenities.len());
    println!("{:-<60}", "");
    for amenity in amenities {
        println!(
            "[{}] {} (building {})",
            amenity.amenity_id, amenity.name, amenity.building_id
        );
        println!("  {}", or_dash(amenity.description.as_deref()));
    }
    Ok(())
}

pub async fn cmd_amenity_delete(config: &Config, amenity_id: i32) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    if store.delete_amenity(amenity_id).await? {
        println!("✓ Deleted amenity {amenity_id}");
    } else {
        println!("Amenity {amenity_id} not found.");
    }
    Ok(())
}
