//! `SeaORM` implementation of the `ContextService` trait.
//!
//! Once the room and its building are known, the remaining lookups are
//! independent and run concurrently.

use crate::db::Store;
use crate::domain::{RoomNumber, weekday_name};
use crate::models::context::{
    AmenityInfo, BuildingInfo, CleaningRecord, HotelInfo, MenuItem, PoolInfo, RoomContext,
    RoomInfo, WaterSportInfo,
};
use crate::services::context_service::{ContextError, ContextService};
use chrono::Weekday;
use tracing::{debug, error};

pub struct SeaOrmContextService {
    store: Store,
}

impl SeaOrmContextService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl ContextService for SeaOrmContextService {
    async fn build_context_for_day(
        &self,
        room: &RoomNumber,
        day: Weekday,
    ) -> Result<RoomContext, ContextError> {
        let (room_model, building) = self
            .store
            .get_room_with_building(room)
            .await?
            .ok_or_else(|| ContextError::RoomNotFound(room.clone()))?;

        let Some(building) = building else {
            error!(
                room = %room,
                building_id = ?room_model.building_id,
                "Room references a building that does not exist"
            );
            return Err(ContextError::IntegrityViolation {
                room: room.clone(),
                building_id: room_model.building_id,
            });
        };

        let day_name = weekday_name(day);
        let building_id = building.building_id;
        let restaurant = building.restaurant_name.clone();

        let (resident, amenities, pools, water_sports, menu, hotel, last_cleaned) = tokio::try_join!(
            self.store.get_active_resident_for_room(room),
            self.store.list_amenities_for_building(building_id),
            self.store.list_pools(),
            self.store.list_water_sports(),
            async {
                match restaurant.as_deref() {
                    Some(name) => self.store.get_menu_for_day(name, day_name).await,
                    None => Ok(Vec::new()),
                }
            },
            self.store.get_hotel_profile(),
            self.store.get_last_cleaning(room),
        )?;

        debug!(
            room = %room,
            amenities = amenities.len(),
            menu_items = menu.len(),
            occupied = resident.is_some(),
            "Built room context"
        );

        Ok(RoomContext {
            day: day_name.to_string(),
            resident,
            room: RoomInfo::from(room_model),
            building: BuildingInfo::from(building),
            amenities: amenities.into_iter().map(AmenityInfo::from).collect(),
            pools: pools.into_iter().map(PoolInfo::from).collect(),
            water_sports: water_sports.into_iter().map(WaterSportInfo::from).collect(),
            restaurant_menu: menu.into_iter().map(MenuItem::from).collect(),
            hotel: hotel.map(HotelInfo::from),
            last_cleaned: last_cleaned.map(CleaningRecord::from),
        })
    }
}
