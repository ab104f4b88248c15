pub mod amenity;
pub mod building;
pub mod catalog;
pub mod hotel;
pub mod housekeeping;
pub mod menu;
pub mod resident;
pub mod room;
