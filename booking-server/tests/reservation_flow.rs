//! Repository CRUD against an embedded database in a temp directory.

use booking_server::db::DbService;
use booking_server::db::repository::{ReservationRepository, SettingsRepository};
use chrono::NaiveDate;
use shared::models::{
    ReservationCreate, ReservationStatus, RestaurantSettings, TableAssignment,
};
use uuid::Uuid;

async fn open_db(dir: &tempfile::TempDir) -> DbService {
    DbService::new(&dir.path().to_string_lossy())
        .await
        .expect("failed to open database")
}

fn draft(email: &str, people: u32) -> ReservationCreate {
    ReservationCreate {
        name: "Mario".into(),
        surname: "Rossi".into(),
        email: email.into(),
        phone: "3331234567".into(),
        date: NaiveDate::from_ymd_opt(2025, 6, 7).unwrap(),
        time: "20:00".into(),
        people,
        notes: Some("window seat".into()),
        table_number: None,
    }
}

#[tokio::test]
async fn create_and_read_back() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;
    let repo = ReservationRepository::new(db.db.clone());

    let created = repo
        .create(draft("mario@example.com", 4), None, ReservationStatus::Pending)
        .await
        .unwrap();

    let id = created.id.clone().expect("created reservation carries an id");
    assert!(id.starts_with("reservation:"));
    assert_eq!(created.people, 4);
    assert_eq!(created.notes, "window seat");
    assert_eq!(created.status, ReservationStatus::Pending);

    let fetched = repo.find_by_id(&id).await.unwrap().expect("row exists");
    assert_eq!(fetched.email, "mario@example.com");
    assert_eq!(fetched.date, NaiveDate::from_ymd_opt(2025, 6, 7).unwrap());
    assert_eq!(fetched.time, "20:00");
}

#[tokio::test]
async fn find_all_returns_newest_first() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;
    let repo = ReservationRepository::new(db.db.clone());

    repo.create(draft("first@example.com", 2), None, ReservationStatus::Pending)
        .await
        .unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    repo.create(draft("second@example.com", 2), None, ReservationStatus::Pending)
        .await
        .unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].email, "second@example.com");
    assert_eq!(all[1].email, "first@example.com");
}

#[tokio::test]
async fn set_status_and_table() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;
    let repo = ReservationRepository::new(db.db.clone());

    let created = repo
        .create(draft("mario@example.com", 4), None, ReservationStatus::Pending)
        .await
        .unwrap();
    let id = created.id.unwrap();

    let confirmed = repo
        .set_status(&id, ReservationStatus::Confirmed)
        .await
        .unwrap();
    assert_eq!(confirmed.status, ReservationStatus::Confirmed);

    let assignment = TableAssignment {
        table_id: Uuid::new_v4(),
        table_number: 4,
    };
    let assigned = repo.set_table(&id, assignment).await.unwrap();
    assert_eq!(assigned.table_number, Some(4));
    assert_eq!(assigned.table_id, Some(assignment.table_id));
}

#[tokio::test]
async fn delete_reports_existence() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;
    let repo = ReservationRepository::new(db.db.clone());

    let created = repo
        .create(draft("mario@example.com", 2), None, ReservationStatus::Pending)
        .await
        .unwrap();
    let id = created.id.unwrap();

    assert!(repo.delete(&id).await.unwrap());
    assert!(!repo.delete(&id).await.unwrap());
    assert!(repo.find_by_id(&id).await.unwrap().is_none());
}

#[tokio::test]
async fn settings_singleton_seeds_and_updates() {
    let tmp = tempfile::tempdir().unwrap();
    let db = open_db(&tmp).await;
    let repo = SettingsRepository::new(db.db.clone());

    // First access seeds the defaults
    let seeded = repo.get_or_create().await.unwrap();
    assert_eq!(seeded, RestaurantSettings::default());

    let mut updated = seeded.clone();
    updated.available_seats = 80;
    updated.opening_days[6].enabled = false; // Sunday
    repo.update(updated.clone()).await.unwrap();

    let reloaded = repo.get_or_create().await.unwrap();
    assert_eq!(reloaded.available_seats, 80);
    assert!(!reloaded.schedule_for(0).unwrap().enabled);
    assert_eq!(reloaded.opening_days.len(), 7);
}
