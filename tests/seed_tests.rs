//! Integration tests for schema creation and fixture seeding.

use concierge::db::Store;
use concierge::db::seed::{RESIDENTS, seed_fixtures};
use concierge::domain::RoomNumber;
use concierge::services::{ResidentService, SeaOrmResidentService};
use sea_orm_migration::MigratorTrait;

fn temp_db_url() -> String {
    let db_path =
        std::env::temp_dir().join(format!("concierge-seed-test-{}.db", uuid::Uuid::new_v4()));
    format!("sqlite:{}", db_path.display())
}

async fn row_counts(store: &Store) -> [usize; 6] {
    [
        store.list_buildings().await.unwrap().len(),
        store.list_rooms().await.unwrap().len(),
        store.list_amenities().await.unwrap().len(),
        store.list_pools().await.unwrap().len(),
        store.list_water_sports().await.unwrap().len(),
        store.list_residents().await.unwrap().len(),
    ]
}

#[tokio::test]
async fn test_seeding_twice_leaves_counts_unchanged() {
    let store = Store::new(&temp_db_url()).await.unwrap();

    let first = seed_fixtures(&store).await.unwrap();
    assert_eq!(first.buildings, 2);
    assert_eq!(first.rooms, 30);
    assert_eq!(first.amenities, 4);
    assert_eq!(first.menu_items, 9);
    assert_eq!(first.residents.len(), RESIDENTS.len());
    let counts = row_counts(&store).await;
    let menu = store
        .get_menu_for_day("Island Cafe", "Monday")
        .await
        .unwrap()
        .len();

    let second = seed_fixtures(&store).await.unwrap();
    assert_eq!(second.total_rows(), 0);
    assert_eq!(row_counts(&store).await, counts);
    assert_eq!(
        store
            .get_menu_for_day("Island Cafe", "Monday")
            .await
            .unwrap()
            .len(),
        menu
    );
    assert_eq!(
        store
            .list_cleanings(&RoomNumber::new("111"))
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn test_seeded_tokens_resolve_to_their_residents() {
    let store = Store::new(&temp_db_url()).await.unwrap();
    let report = seed_fixtures(&store).await.unwrap();
    let service = SeaOrmResidentService::new(store);

    for seeded in &report.residents {
        let resident = service
            .resolve_resident(&seeded.token)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(resident.name, seeded.name);
        assert_eq!(resident.room_number, seeded.room_number);
    }
}

#[tokio::test]
async fn test_reseed_refills_vacated_room() {
    let store = Store::new(&temp_db_url()).await.unwrap();
    let report = seed_fixtures(&store).await.unwrap();
    let service = SeaOrmResidentService::new(store.clone());

    service.check_out(&report.residents[0].token).await.unwrap();

    let again = seed_fixtures(&store).await.unwrap();
    assert_eq!(again.residents.len(), 1);
    assert_eq!(again.residents[0].room_number, report.residents[0].room_number);
    assert_eq!(service.list_residents(true).await.unwrap().len(), RESIDENTS.len());
}

#[tokio::test]
async fn test_reopening_database_reruns_migrations() {
    let url = temp_db_url();
    let store = Store::new(&url).await.unwrap();
    seed_fixtures(&store).await.unwrap();
    let counts = row_counts(&store).await;

    concierge::db::migrator::Migrator::up(&store.conn, None)
        .await
        .unwrap();

    let reopened = Store::new(&url).await.unwrap();
    reopened.ping().await.unwrap();
    assert_eq!(row_counts(&reopened).await, counts);
}

#[tokio::test]
async fn test_building_with_rooms_cannot_be_deleted() {
    let store = Store::new(&temp_db_url()).await.unwrap();
    seed_fixtures(&store).await.unwrap();

    let main = store
        .get_building_by_name("Main Building")
        .await
        .unwrap()
        .unwrap();
    assert!(store.delete_building(main.building_id).await.is_err());
    assert!(store.get_building(main.building_id).await.unwrap().is_some());
}
