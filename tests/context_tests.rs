//! Integration tests for room context aggregation.

use std::collections::HashSet;

use chrono::Weekday;
use concierge::db::seed::seed_fixtures;
use concierge::db::{NewAmenity, NewBuilding, NewMenuItem, NewRoom, Store};
use concierge::domain::{DeviceToken, RoomNumber, today, weekday_name};
use concierge::entities::{prelude::Rooms, rooms};
use concierge::models::context::AmenityInfo;
use concierge::services::{ContextError, ContextService, SeaOrmContextService};
use sea_orm::{EntityTrait, Set};

async fn test_store() -> Store {
    let db_path =
        std::env::temp_dir().join(format!("concierge-context-test-{}.db", uuid::Uuid::new_v4()));
    Store::new(&format!("sqlite:{}", db_path.display()))
        .await
        .expect("Failed to create store")
}

async fn seeded_store() -> Store {
    let store = test_store().await;
    seed_fixtures(&store).await.expect("Failed to seed");
    store
}

fn room(number: &str, building_id: i32) -> NewRoom {
    NewRoom {
        room_number: RoomNumber::new(number),
        building_id,
        floor: None,
        room_type: None,
        tv_brand: None,
        fan_type: None,
        thermostat_model: None,
    }
}

#[tokio::test]
async fn test_every_room_matches_its_building_and_amenities() {
    let store = seeded_store().await;
    let service = SeaOrmContextService::new(store.clone());

    for room_model in store.list_rooms().await.unwrap() {
        let number = RoomNumber::new(room_model.room_number.clone());
        let context = service
            .build_context_for_day(&number, Weekday::Mon)
            .await
            .unwrap();

        let building_id = room_model.building_id.unwrap();
        assert_eq!(context.building.id, building_id);
        assert_eq!(context.room.room_number, number);

        let expected: HashSet<AmenityInfo> = store
            .list_amenities_for_building(building_id)
            .await
            .unwrap()
            .into_iter()
            .map(AmenityInfo::from)
            .collect();
        let actual: HashSet<AmenityInfo> = context.amenities.into_iter().collect();
        assert_eq!(actual, expected);
    }
}

#[tokio::test]
async fn test_amenities_are_scoped_to_building() {
    let store = test_store().await;
    let (east, _) = store
        .add_building(&NewBuilding {
            name: "East".to_string(),
            ..NewBuilding::default()
        })
        .await
        .unwrap();
    let (west, _) = store
        .add_building(&NewBuilding {
            name: "West".to_string(),
            ..NewBuilding::default()
        })
        .await
        .unwrap();
    store.add_room(room("E1", east)).await.unwrap();
    store
        .add_amenity(NewAmenity {
            building_id: east,
            name: "Gym".to_string(),
            description: None,
            floor: Some(2),
        })
        .await
        .unwrap();
    store
        .add_amenity(NewAmenity {
            building_id: west,
            name: "Spa".to_string(),
            description: None,
            floor: None,
        })
        .await
        .unwrap();

    let context = SeaOrmContextService::new(store)
        .build_context(&RoomNumber::new("E1"))
        .await
        .unwrap();

    let names: Vec<&str> = context.amenities.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Gym"]);
    assert_eq!(context.building.name, "East");
}

#[tokio::test]
async fn test_unknown_room_is_not_found() {
    let store = seeded_store().await;
    let service = SeaOrmContextService::new(store);

    let err = service
        .build_context(&RoomNumber::new("999"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Room 999 not found.");
}

#[tokio::test]
async fn test_missing_building_is_integrity_violation() {
    let store = seeded_store().await;
    Rooms::insert(rooms::ActiveModel {
        room_number: Set("900".to_string()),
        building_id: Set(None),
        floor: Set(None),
        room_type: Set(None),
        tv_brand: Set(None),
        fan_type: Set(None),
        thermostat_model: Set(None),
    })
    .exec_without_returning(&store.conn)
    .await
    .unwrap();

    let err = SeaOrmContextService::new(store)
        .build_context(&RoomNumber::new("900"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ContextError::IntegrityViolation { ref room, building_id: None } if room.as_str() == "900"
    ));
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn test_menu_filtered_by_day_and_ordered() {
    let store = seeded_store().await;
    let service = SeaOrmContextService::new(store);
    let room = RoomNumber::new("111");

    let monday = service
        .build_context_for_day(&room, Weekday::Mon)
        .await
        .unwrap();
    assert_eq!(monday.day, "Monday");
    let items: Vec<(&str, &str)> = monday
        .restaurant_menu
        .iter()
        .map(|m| (m.meal.as_str(), m.item_name.as_str()))
        .collect();
    assert_eq!(
        items,
        vec![
            ("Breakfast", "Breakfast Buffet"),
            ("Lunch", "Grilled Chicken Salad"),
            ("Lunch", "Vegetable Stir Fry"),
        ]
    );
    assert!(monday.restaurant_menu.iter().all(|m| m.day == "Monday"));

    let wednesday = service
        .build_context_for_day(&room, Weekday::Wed)
        .await
        .unwrap();
    assert!(wednesday.restaurant_menu.is_empty());
}

#[tokio::test]
async fn test_menu_only_from_buildings_restaurant() {
    let store = test_store().await;
    let (with_cafe, _) = store
        .add_building(&NewBuilding {
            name: "Cafe Wing".to_string(),
            restaurant_name: Some("Island Cafe".to_string()),
            ..NewBuilding::default()
        })
        .await
        .unwrap();
    let (no_restaurant, _) = store
        .add_building(&NewBuilding {
            name: "Annex".to_string(),
            ..NewBuilding::default()
        })
        .await
        .unwrap();
    store.add_room(room("101", with_cafe)).await.unwrap();
    store.add_room(room("201", no_restaurant)).await.unwrap();
    store
        .add_menu_items_if_missing(vec![
            NewMenuItem {
                day: "Friday".to_string(),
                meal: "Dinner".to_string(),
                item_name: "Sinigang".to_string(),
                restaurant_name: Some("Island Cafe".to_string()),
            },
            NewMenuItem {
                day: "Friday".to_string(),
                meal: "Dinner".to_string(),
                item_name: "Steak".to_string(),
                restaurant_name: Some("Grill House".to_string()),
            },
        ])
        .await
        .unwrap();

    let service = SeaOrmContextService::new(store);
    let cafe = service
        .build_context_for_day(&RoomNumber::new("101"), Weekday::Fri)
        .await
        .unwrap();
    let names: Vec<&str> = cafe
        .restaurant_menu
        .iter()
        .map(|m| m.item_name.as_str())
        .collect();
    assert_eq!(names, vec!["Sinigang"]);

    let annex = service
        .build_context_for_day(&RoomNumber::new("201"), Weekday::Fri)
        .await
        .unwrap();
    assert!(annex.restaurant_menu.is_empty());
}

#[tokio::test]
async fn test_context_includes_resident_and_hotel_data() {
    let store = seeded_store().await;
    let service = SeaOrmContextService::new(store.clone());

    let occupied = service.build_context(&RoomNumber::new("111")).await.unwrap();
    assert_eq!(occupied.resident.unwrap().name, "Joyce Ann Acob");
    assert_eq!(occupied.building.wifi_ssid.as_deref(), Some("CanyonWifi"));
    assert_eq!(occupied.pools.len(), 6);
    assert_eq!(occupied.water_sports.len(), 5);
    assert_eq!(occupied.hotel.unwrap().name, "Canyon Cove");
    assert_eq!(occupied.last_cleaned.unwrap().cleaner_name, "Angelo Antenor");

    let vacant = service.build_context(&RoomNumber::new("135")).await.unwrap();
    assert!(vacant.resident.is_none());
    assert!(vacant.last_cleaned.is_none());
}

#[tokio::test]
async fn test_latest_checkin_wins_for_shared_room() {
    let store = test_store().await;
    let (building_id, _) = store
        .add_building(&NewBuilding {
            name: "Main".to_string(),
            ..NewBuilding::default()
        })
        .await
        .unwrap();
    store.add_room(room("0204", building_id)).await.unwrap();
    let number = RoomNumber::new("0204");
    store
        .add_resident("First", &number, &DeviceToken::generate(), "2025-12-01T08:00:00Z")
        .await
        .unwrap();
    store
        .add_resident("Second", &number, &DeviceToken::generate(), "2025-12-01T09:00:00Z")
        .await
        .unwrap();

    let context = SeaOrmContextService::new(store)
        .build_context(&number)
        .await
        .unwrap();
    assert_eq!(context.room.room_number.as_str(), "0204");
    assert_eq!(context.resident.unwrap().name, "Second");
}

#[tokio::test]
async fn test_grounding_text_hides_token() {
    let store = seeded_store().await;
    let context = SeaOrmContextService::new(store)
        .build_context(&RoomNumber::new("212"))
        .await
        .unwrap();

    let text = context.to_grounding_text().unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["room"]["room_number"], "212");
    assert_eq!(json["building"]["wifi_ssid"], "CoveWifi");
    assert!(json["resident"].get("device_token").is_none());
}

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[tokio::test]
async fn test_default_context_uses_todays_menu() {
    let store = test_store().await;
    let (building_id, _) = store
        .add_building(&NewBuilding {
            name: "Main".to_string(),
            restaurant_name: Some("Island Cafe".to_string()),
            ..NewBuilding::default()
        })
        .await
        .unwrap();
    store.add_room(room("111", building_id)).await.unwrap();

    let mut items = Vec::new();
    for day in WEEK {
        for meal in ["Lunch", "Breakfast"] {
            items.push(NewMenuItem {
                day: weekday_name(day).to_string(),
                meal: meal.to_string(),
                item_name: format!("{} {meal}", weekday_name(day)),
                restaurant_name: Some("Island Cafe".to_string()),
            });
        }
    }
    store.add_menu_items_if_missing(items).await.unwrap();

    let service = SeaOrmContextService::new(store);
    let number = RoomNumber::new("111");

    let before = today();
    let context = service.build_context(&number).await.unwrap();
    let after = today();

    // Tolerate the call straddling midnight.
    let day = if context.day == weekday_name(before) {
        before
    } else {
        after
    };
    assert_eq!(context.day, weekday_name(day));

    let day_name = weekday_name(day);
    assert_eq!(context.restaurant_menu.len(), 2);
    assert!(context.restaurant_menu.iter().all(|m| m.day == day_name));
    assert_eq!(context.restaurant_menu[0].meal, "Breakfast");
    assert_eq!(
        context.restaurant_menu[1].item_name,
        format!("{day_name} Lunch")
    );

    let explicit = service.build_context_for_day(&number, day).await.unwrap();
    assert_eq!(context.restaurant_menu, explicit.restaurant_menu);
}

#[tokio::test]
async fn test_concurrent_builds_agree() {
    let store = seeded_store().await;
    let service = SeaOrmContextService::new(store);
    let occupied = RoomNumber::new("111");
    let other = RoomNumber::new("212");

    let (a, b, c, d) = tokio::join!(
        service.build_context_for_day(&occupied, Weekday::Tue),
        service.build_context_for_day(&occupied, Weekday::Tue),
        service.build_context_for_day(&other, Weekday::Tue),
        service.build_context_for_day(&occupied, Weekday::Tue),
    );

    let a = a.unwrap().to_grounding_text().unwrap();
    let b = b.unwrap().to_grounding_text().unwrap();
    let d = d.unwrap().to_grounding_text().unwrap();
    assert_eq!(a, b);
    assert_eq!(a, d);

    let c = c.unwrap();
    assert_eq!(c.room.room_number, other);
    assert_eq!(c.building.wifi_ssid.as_deref(), Some("CoveWifi"));

    let sequential = service
        .build_context_for_day(&occupied, Weekday::Tue)
        .await
        .unwrap()
        .to_grounding_text()
        .unwrap();
    assert_eq!(a, sequential);
}
