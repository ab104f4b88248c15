//! Integration tests for token authentication and the check-in / check-out
//! lifecycle.

use concierge::db::{NewBuilding, NewRoom, Store};
use concierge::domain::{DeviceToken, RoomNumber};
use concierge::services::{ResidentError, ResidentService, SeaOrmResidentService};

async fn test_store() -> Store {
    let db_path =
        std::env::temp_dir().join(format!("concierge-resident-test-{}.db", uuid::Uuid::new_v4()));
    Store::new(&format!("sqlite:{}", db_path.display()))
        .await
        .expect("Failed to create store")
}

async fn add_room(store: &Store, room: &str) {
    let (building_id, _) = store
        .add_building(&NewBuilding {
            name: "Main Building".to_string(),
            ..NewBuilding::default()
        })
        .await
        .unwrap();
    store
        .add_room(NewRoom {
            room_number: RoomNumber::new(room),
            building_id,
            floor: Some(1),
            room_type: None,
            tv_brand: None,
            fan_type: None,
            thermostat_model: None,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_check_out_voids_token() {
    let store = test_store().await;
    add_room(&store, "111").await;
    let room = RoomNumber::new("111");
    let token = DeviceToken::new("T1");
    store
        .add_resident("Ann", &room, &token, "2025-12-01T09:00:00Z")
        .await
        .unwrap();

    let service = SeaOrmResidentService::new(store.clone());
    let resident = service.resolve_resident(&token).await.unwrap().unwrap();
    assert_eq!(resident.name, "Ann");
    assert_eq!(resident.room_number, room);

    let checked_out = service.check_out(&token).await.unwrap();
    assert!(checked_out.token_voided);
    assert!(checked_out.checkout_time.is_some());

    assert!(service.resolve_resident(&token).await.unwrap().is_none());

    // The record is kept; only the credential is dead.
    let stored = store.get_resident_by_token(&token).await.unwrap().unwrap();
    assert!(stored.token_voided);
    assert_eq!(stored.checkout_time, checked_out.checkout_time);
}

#[tokio::test]
async fn test_check_out_twice_is_rejected() {
    let store = test_store().await;
    add_room(&store, "111").await;
    let service = SeaOrmResidentService::new(store);

    let check_in = service
        .check_in("Ann", &RoomNumber::new("111"))
        .await
        .unwrap();
    let first = service.check_out(&check_in.token).await.unwrap();

    let err = service.check_out(&check_in.token).await.unwrap_err();
    assert!(matches!(err, ResidentError::AlreadyCheckedOut(ref name) if name == "Ann"));

    // A second attempt must not move the checkout time.
    let all = service.list_residents(false).await.unwrap();
    assert_eq!(all[0].checkout_time, first.checkout_time);
}

#[tokio::test]
async fn test_unknown_token_resolves_to_none() {
    let store = test_store().await;
    let service = SeaOrmResidentService::new(store);

    let token = DeviceToken::new("never-issued");
    assert!(service.resolve_resident(&token).await.unwrap().is_none());
    assert!(matches!(
        service.check_out(&token).await,
        Err(ResidentError::UnknownToken)
    ));
}

#[tokio::test]
async fn test_check_in_issues_unique_tokens() {
    let store = test_store().await;
    add_room(&store, "0101").await;
    let service = SeaOrmResidentService::new(store);
    let room = RoomNumber::new("0101");

    let first = service.check_in("Chelsy Agtay", &room).await.unwrap();
    let second = service.check_in("Jelaine Soto", &room).await.unwrap();
    assert_ne!(first.token, second.token);

    let resolved = service.resolve_resident(&first.token).await.unwrap().unwrap();
    assert_eq!(resolved.room_number.as_str(), "0101");
    assert!(resolved.checkin_time.is_some());
    assert!(resolved.checkout_time.is_none());

    assert_eq!(service.list_residents(true).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_check_in_unknown_room() {
    let store = test_store().await;
    let service = SeaOrmResidentService::new(store);

    let err = service
        .check_in("Ann", &RoomNumber::new("404"))
        .await
        .unwrap_err();
    assert!(matches!(err, ResidentError::RoomNotFound(room) if room.as_str() == "404"));
    assert!(service.list_residents(false).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_check_in_rejects_blank_name() {
    let store = test_store().await;
    add_room(&store, "111").await;
    let service = SeaOrmResidentService::new(store);

    let err = service
        .check_in("   ", &RoomNumber::new("111"))
        .await
        .unwrap_err();
    assert!(matches!(err, ResidentError::Validation(_)));
}

#[tokio::test]
async fn test_active_filter_and_delete() {
    let store = test_store().await;
    add_room(&store, "111").await;
    let service = SeaOrmResidentService::new(store);
    let room = RoomNumber::new("111");

    let leaving = service.check_in("Ann", &room).await.unwrap();
    let staying = service.check_in("Franco", &room).await.unwrap();
    service.check_out(&leaving.token).await.unwrap();

    let active = service.list_residents(true).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].name, "Franco");
    assert_eq!(service.list_residents(false).await.unwrap().len(), 2);

    service
        .delete_resident(staying.resident.resident_id)
        .await
        .unwrap();
    assert!(matches!(
        service.delete_resident(staying.resident.resident_id).await,
        Err(ResidentError::NotFound(_))
    ));
    assert!(service.resolve_resident(&staying.token).await.unwrap().is_none());
}
