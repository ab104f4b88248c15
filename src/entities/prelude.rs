pub use super::amenities::Entity as Amenities;
pub use super::buildings::Entity as Buildings;
pub use super::hotel::Entity as Hotel;
pub use super::housekeeping_log::Entity as HousekeepingLog;
pub use super::pools::Entity as Pools;
pub use super::residents::Entity as Residents;
pub use super::restaurant_menu::Entity as RestaurantMenu;
pub use super::rooms::Entity as Rooms;
pub use super::water_sports::Entity as WaterSports;
