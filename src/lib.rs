pub mod cli;
pub mod clients;
pub mod config;
pub mod constants;
pub mod db;
pub mod domain;
pub mod entities;
pub mod models;
pub mod services;

use clap::Parser;
use cli::{
    AmenityCommands, BuildingCommands, Cli, Commands, HousekeepingCommands, ResidentCommands,
    RoomCommands, RoomDetails,
};
pub use config::Config;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    // A missing .env is normal; the API key may come from the shell.
    let dotenv = dotenvy::dotenv().ok();

    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.general.log_format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    if let Some(path) = dotenv {
        debug!("Loaded environment from {}", path.display());
    }

    let cli = Cli::parse();
    let token = cli.token.as_deref();

    let Some(command) = cli.command else {
        print_help();
        return Ok(());
    };

    match command {
        Commands::Init => cli::cmd_init(),
        Commands::Seed => cli::cmd_seed(&config).await,
        Commands::CheckIn { room, name } => {
            cli::cmd_check_in(&config, token, &room, &name.join(" ")).await
        }
        Commands::CheckOut => cli::cmd_check_out(&config, token).await,
        Commands::Whoami => cli::cmd_whoami(&config, token).await,
        Commands::Context { room, day } => {
            cli::cmd_context(&config, token, room.as_deref(), day.as_deref()).await
        }
        Commands::Chat => cli::cmd_chat(&config, token).await,

        Commands::Building { command } => match command {
            BuildingCommands::Add {
                name,
                wifi_ssid,
                wifi_password,
                restaurant,
            } => {
                cli::cmd_building_add(&config, &name, wifi_ssid, wifi_password, restaurant).await
            }
            BuildingCommands::List => cli::cmd_building_list(&config).await,
            BuildingCommands::Delete { building_id } => {
                cli::cmd_building_delete(&config, building_id).await
            }
        },

        Commands::Room { command } => match command {
            RoomCommands::Add {
                room,
                building_id,
                floor,
                room_type,
                tv_brand,
                fan_type,
                thermostat,
            } => {
                let details = RoomDetails {
                    floor,
                    room_type,
                    tv_brand,
                    fan_type,
                    thermostat_model: thermostat,
                };
                cli::cmd_room_add(&config, &room, building_id, details).await
            }
            RoomCommands::List { building } => cli::cmd_room_list(&config, building).await,
            RoomCommands::Delete { room } => cli::cmd_room_delete(&config, &room).await,
        },

        Commands::Amenity { command } => match command {
            AmenityCommands::Add {
                building_id,
                name,
                description,
                floor,
            } => cli::cmd_amenity_add(&config, building_id, &name, description, floor).await,
            AmenityCommands::List { building } => cli::cmd_amenity_list(&config, building).await,
            AmenityCommands::Delete { amenity_id } => {
                cli::cmd_amenity_delete(&config, amenity_id).await
            }
        },

        Commands::Resident { command } => match command {
            ResidentCommands::List { active } => cli::cmd_resident_list(&config, active).await,
            ResidentCommands::Delete { resident_id } => {
                cli::cmd_resident_delete(&config, resident_id).await
            }
        },

        Commands::Housekeeping { command } => match command {
            HousekeepingCommands::Log { room, cleaner } => {
                cli::cmd_housekeeping_log(&config, &room, &cleaner).await
            }
            HousekeepingCommands::List { room } => {
                cli::cmd_housekeeping_list(&config, &room).await
            }
        },
    }
}

fn print_help() {
    println!("Concierge - hotel guest assistant");
    println!();
    println!("USAGE:");
    println!("  concierge [--token <TOKEN>] <COMMAND>");
    println!();
    println!("GETTING STARTED:");
    println!("  concierge init                      # Create config.toml");
    println!("  concierge seed                      # Load the demo hotel");
    println!("  concierge check-in 111 Joyce Acob   # Check in and store the token");
    println!("  concierge chat                      # Talk to the assistant");
    println!("  concierge check-out                 # Void the token");
    println!();
    println!("Run 'concierge --help' for every command.");
    println!();
    println!("CONFIG:");
    println!("  Edit config.toml to set the database, token file and assistant model.");
    println!("  The API key is read from GROQ_API_KEY (or assistant.api_key_env).");
}
