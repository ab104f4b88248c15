//! CLI module - Command-line interface for the concierge
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// Concierge - hotel guest assistant
/// Room-aware answers for checked-in guests
#[derive(Parser)]
#[command(name = "concierge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use this device token instead of the stored one
    #[arg(long, global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// Create the schema and load the demo hotel
    Seed,

    /// Check a guest into a room and store the new device token
    CheckIn {
        /// Room number, e.g. 111
        room: String,
        /// Guest name
        #[arg(required = true)]
        name: Vec<String>,
    },

    /// Check out the guest holding the device token
    CheckOut,

    /// Show the guest the device token belongs to
    Whoami,

    /// Print the context the assistant sees for a room
    Context {
        /// Room number; defaults to the device guest's room
        room: Option<String>,
        /// Weekday for the menu, e.g. "Tuesday"; defaults to today
        #[arg(long)]
        day: Option<String>,
    },

    /// Talk to the assistant from the device guest's room
    Chat,

    /// Manage buildings
    Building {
        #[command(subcommand)]
        command: BuildingCommands,
    },

    /// Manage rooms
    Room {
        #[command(subcommand)]
        command: RoomCommands,
    },

    /// Manage amenities
    Amenity {
        #[command(subcommand)]
        command: AmenityCommands,
    },

    /// Manage residents
    Resident {
        #[command(subcommand)]
        command: ResidentCommands,
    },

    /// Record and review room cleaning
    Housekeeping {
        #[command(subcommand)]
        command: HousekeepingCommands,
    },
}

#[derive(Subcommand)]
pub enum BuildingCommands {
    /// Add a building
    Add {
        name: String,
        #[arg(long)]
        wifi_ssid: Option<String>,
        #[arg(long)]
        wifi_password: Option<String>,
        /// Restaurant serving this building
        #[arg(long)]
        restaurant: Option<String>,
    },
    /// List buildings
    #[command(alias = "ls")]
    List,
    /// Delete a building with no rooms or amenities
    #[command(alias = "rm")]
    Delete { building_id: i32 },
}

#[derive(Subcommand)]
pub enum RoomCommands {
    /// Add a room to a building
    Add {
        room: String,
        building_id: i32,
        #[arg(long)]
        floor: Option<i32>,
        #[arg(long = "type")]
        room_type: Option<String>,
        #[arg(long)]
        tv_brand: Option<String>,
        #[arg(long)]
        fan_type: Option<String>,
        #[arg(long)]
        thermostat: Option<String>,
    },
    /// List rooms
    #[command(alias = "ls")]
    List {
        /// Only rooms in this building
        #[arg(long)]
        building: Option<i32>,
    },
    /// Delete a room with no residents or housekeeping history
    #[command(alias = "rm")]
    Delete { room: String },
}

#[derive(Subcommand)]
pub enum AmenityCommands {
    /// Add an amenity to a building
    Add {
        building_id: i32,
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        floor: Option<i32>,
    },
    /// List amenities
    #[command(alias = "ls")]
    List {
        /// Only amenities in this building
        #[arg(long)]
        building: Option<i32>,
    },
    /// Delete an amenity
    #[command(alias = "rm")]
    Delete { amenity_id: i32 },
}

#[derive(Subcommand)]
pub enum ResidentCommands {
    /// List residents
    #[command(alias = "ls")]
    List {
        /// Only residents who have not checked out
        #[arg(long)]
        active: bool,
    },
    /// Delete a resident record
    #[command(alias = "rm")]
    Delete { resident_id: i32 },
}

#[derive(Subcommand)]
pub enum HousekeepingCommands {
    /// Record that a room was cleaned now
    Log { room: String, cleaner: String },
    /// Show cleaning history for a room
    #[command(alias = "ls")]
    List { room: String },
}

pub use commands::*;
