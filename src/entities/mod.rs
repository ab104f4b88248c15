pub mod prelude;

pub mod amenities;
pub mod buildings;
pub mod hotel;
pub mod housekeeping_log;
pub mod pools;
pub mod residents;
pub mod restaurant_menu;
pub mod rooms;
pub mod water_sports;
