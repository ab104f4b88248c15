use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::domain::{DeviceToken, RoomNumber};
use crate::entities::{
    amenities, buildings, hotel, housekeeping_log, pools, restaurant_menu, rooms, water_sports,
};
use crate::models::resident::Resident;

pub mod migrator;
pub mod repositories;
pub mod seed;

pub use repositories::amenity::NewAmenity;
pub use repositories::building::NewBuilding;
pub use repositories::menu::NewMenuItem;
pub use repositories::room::NewRoom;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite://").trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn resident_repo(&self) -> repositories::resident::ResidentRepository {
        repositories::resident::ResidentRepository::new(self.conn.clone())
    }

    fn building_repo(&self) -> repositories::building::BuildingRepository {
        repositories::building::BuildingRepository::new(self.conn.clone())
    }

    fn room_repo(&self) -> repositories::room::RoomRepository {
        repositories::room::RoomRepository::new(self.conn.clone())
    }

    fn amenity_repo(&self) -> repositories::amenity::AmenityRepository {
        repositories::amenity::AmenityRepository::new(self.conn.clone())
    }

    fn catalog_repo(&self) -> repositories::catalog::CatalogRepository {
        repositories::catalog::CatalogRepository::new(self.conn.clone())
    }

    fn menu_repo(&self) -> repositories::menu::MenuRepository {
        repositories::menu::MenuRepository::new(self.conn.clone())
    }

    fn hotel_repo(&self) -> repositories::hotel::HotelRepository {
        repositories::hotel::HotelRepository::new(self.conn.clone())
    }

    fn housekeeping_repo(&self) -> repositories::housekeeping::HousekeepingRepository {
        repositories::housekeeping::HousekeepingRepository::new(self.conn.clone())
    }

    // ========== Residents ==========

    pub async fn get_active_resident_by_token(
        &self,
        token: &DeviceToken,
    ) -> Result<Option<Resident>> {
        self.resident_repo().find_active_by_token(token).await
    }

    pub async fn get_resident_by_token(&self, token: &DeviceToken) -> Result<Option<Resident>> {
        self.resident_repo().find_by_token(token).await
    }

    pub async fn get_active_resident_for_room(
        &self,
        room: &RoomNumber,
    ) -> Result<Option<Resident>> {
        self.resident_repo().find_active_by_room(room).await
    }

    pub async fn add_resident(
        &self,
        name: &str,
        room: &RoomNumber,
        token: &DeviceToken,
        checkin_time: &str,
    ) -> Result<Resident> {
        self.resident_repo()
            .insert(name, room, token, checkin_time)
            .await
    }

    pub async fn void_resident_token(
        &self,
        token: &DeviceToken,
        checkout_time: &str,
    ) -> Result<u64> {
        self.resident_repo().void_token(token, checkout_time).await
    }

    pub async fn list_residents(&self) -> Result<Vec<Resident>> {
        self.resident_repo().list().await
    }

    pub async fn list_active_residents(&self) -> Result<Vec<Resident>> {
        self.resident_repo().list_active().await
    }

    pub async fn delete_resident(&self, resident_id: i32) -> Result<bool> {
        self.resident_repo().delete(resident_id).await
    }

    // ========== Buildings ==========

    pub async fn add_building(&self, building: &NewBuilding) -> Result<(i32, bool)> {
        self.building_repo().insert_or_ignore(building).await
    }

    pub async fn get_building(&self, building_id: i32) -> Result<Option<buildings::Model>> {
        self.building_repo().get(building_id).await
    }

    pub async fn get_building_by_name(&self, name: &str) -> Result<Option<buildings::Model>> {
        self.building_repo().get_by_name(name).await
    }

    pub async fn list_buildings(&self) -> Result<Vec<buildings::Model>> {
        self.building_repo().list().await
    }

    pub async fn delete_building(&self, building_id: i32) -> Result<bool> {
        self.building_repo().delete(building_id).await
    }

    // ========== Rooms ==========

    pub async fn add_room(&self, room: NewRoom) -> Result<()> {
        self.room_repo().insert(room).await
    }

    pub async fn add_rooms_if_missing(&self, rooms_in: Vec<NewRoom>) -> Result<u64> {
        self.room_repo().insert_many_or_ignore(rooms_in).await
    }

    pub async fn get_room(&self, room: &RoomNumber) -> Result<Option<rooms::Model>> {
        self.room_repo().get(room).await
    }

    pub async fn room_exists(&self, room: &RoomNumber) -> Result<bool> {
        self.room_repo().exists(room).await
    }

    pub async fn get_room_with_building(
        &self,
        room: &RoomNumber,
    ) -> Result<Option<(rooms::Model, Option<buildings::Model>)>> {
        self.room_repo().get_with_building(room).await
    }

    pub async fn list_rooms(&self) -> Result<Vec<rooms::Model>> {
        self.room_repo().list().await
    }

    pub async fn list_rooms_in_building(&self, building_id: i32) -> Result<Vec<rooms::Model>> {
        self.room_repo().list_for_building(building_id).await
    }

    pub async fn delete_room(&self, room: &RoomNumber) -> Result<bool> {
        self.room_repo().delete(room).await
    }

    // ========== Amenities ==========

    pub async fn add_amenity(&self, amenity: NewAmenity) -> Result<i32> {
        self.amenity_repo().insert(amenity).await
    }

    pub async fn add_amenities_if_missing(&self, items: Vec<NewAmenity>) -> Result<u64> {
        self.amenity_repo().insert_many_or_ignore(items).await
    }

    pub async fn list_amenities(&self) -> Result<Vec<amenities::Model>> {
        self.amenity_repo().list().await
    }

    pub async fn list_amenities_for_building(
        &self,
        building_id: i32,
    ) -> Result<Vec<amenities::Model>> {
        self.amenity_repo().list_for_building(building_id).await
    }

    pub async fn delete_amenity(&self, amenity_id: i32) -> Result<bool> {
        self.amenity_repo().delete(amenity_id).await
    }

    // ========== Catalogs ==========

    pub async fn list_pools(&self) -> Result<Vec<pools::Model>> {
        self.catalog_repo().list_pools().await
    }

    pub async fn list_water_sports(&self) -> Result<Vec<water_sports::Model>> {
        self.catalog_repo().list_water_sports().await
    }

    pub async fn add_pools_if_missing(&self, items: &[(&str, &str)]) -> Result<u64> {
        self.catalog_repo().insert_pools_or_ignore(items).await
    }

    pub async fn add_water_sports_if_missing(&self, items: &[(&str, &str)]) -> Result<u64> {
        self.catalog_repo()
            .insert_water_sports_or_ignore(items)
            .await
    }

    // ========== Menu ==========

    pub async fn get_menu_for_day(
        &self,
        restaurant: &str,
        day: &str,
    ) -> Result<Vec<restaurant_menu::Model>> {
        self.menu_repo().for_restaurant_on(restaurant, day).await
    }

    pub async fn add_menu_items_if_missing(&self, items: Vec<NewMenuItem>) -> Result<u64> {
        self.menu_repo().insert_many_or_ignore(items).await
    }

    // ========== Hotel ==========

    pub async fn get_hotel_profile(&self) -> Result<Option<hotel::Model>> {
        self.hotel_repo().profile().await
    }

    pub async fn add_hotel_if_missing(
        &self,
        name: &str,
        location: &str,
        nearby_restaurants: &str,
        fun_destinations: &str,
    ) -> Result<u64> {
        self.hotel_repo()
            .insert_or_ignore(name, location, nearby_restaurants, fun_destinations)
            .await
    }

    // ========== Housekeeping ==========

    pub async fn record_cleaning(
        &self,
        room: &RoomNumber,
        cleaned_time: &str,
        cleaner_name: &str,
    ) -> Result<bool> {
        self.housekeeping_repo()
            .record(room, cleaned_time, cleaner_name)
            .await
    }

    pub async fn get_last_cleaning(
        &self,
        room: &RoomNumber,
    ) -> Result<Option<housekeeping_log::Model>> {
        self.housekeeping_repo().latest_for_room(room).await
    }

    pub async fn list_cleanings(&self, room: &RoomNumber) -> Result<Vec<housekeeping_log::Model>> {
        self.housekeeping_repo().list_for_room(room).await
    }
}
