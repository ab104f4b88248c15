mod amenity;
mod building;
mod chat;
mod context;
mod guest;
mod housekeeping;
mod resident;
mod room;
mod setup;

pub use amenity::{cmd_amenity_add, cmd_amenity_delete, cmd_amenity_list};
pub use building::{cmd_building_add, cmd_building_delete, cmd_building_list};
pub use chat::cmd_chat;
pub use context::cmd_context;
pub use guest::{cmd_check_in, cmd_check_out, cmd_whoami};
pub use housekeeping::{cmd_housekeeping_list, cmd_housekeeping_log};
pub use resident::{cmd_resident_delete, cmd_resident_list};
pub use room::{RoomDetails, cmd_room_add, cmd_room_delete, cmd_room_list};
pub use setup::{cmd_init, cmd_seed};

use crate::config::Config;
use crate::db::Store;
use crate::domain::{DeviceToken, RoomNumber};
use crate::services::{CredentialProvider, FileCredentialProvider, StaticCredentialProvider};

async fn open_store(config: &Config) -> anyhow::Result<Store> {
    Store::with_pool_options(
        &config.database_url(),
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await
}

/// `--token` wins over the token file.
fn credentials(
    config: &Config,
    token: Option<&str>,
) -> anyhow::Result<Box<dyn CredentialProvider>> {
    match token {
        Some(raw) => {
            let token: DeviceToken = raw.parse()?;
            Ok(Box::new(StaticCredentialProvider::new(Some(token))))
        }
        None => Ok(Box::new(FileCredentialProvider::new(
            &config.device.token_path,
        ))),
    }
}

fn parse_room(raw: &str) -> anyhow::Result<RoomNumber> {
    Ok(raw.parse::<RoomNumber>()?)
}

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}
