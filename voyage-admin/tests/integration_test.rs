use std::sync::Arc;
use std::time::Duration;

use voyage_admin::SiteStore;
use voyage_catalog::{Flight, FlightPatch, PackageDraft, TourPatch};
use voyage_core::views::{active_only, count_active};
use voyage_core::Entity;
use voyage_order::{BookingStatus, BookingType, Enquiry};
use voyage_store::app_config::{Config, StorageBackend};
use voyage_store::{ChangeBus, CollectionWatcher, FileStorage, StorageArea};

fn site() -> SiteStore {
    SiteStore::new(StorageArea::in_memory(), "voyage")
}

fn enquiry() -> Enquiry {
    Enquiry {
        kind: BookingType::Package,
        package_name: "Magical Maldives".to_string(),
        destination: "Maldives".to_string(),
        name: "Priya".to_string(),
        email: "priya@example.com".to_string(),
        phone: "+971 55 123 4567".to_string(),
        message: "Honeymoon in May".to_string(),
    }
}

#[test]
fn test_deactivate_and_reset_flight_scenario() {
    let admin = site();
    let visitor = admin.open_context();

    assert_eq!(active_only(&visitor.flights().get_all()).len(), 4);
    let original = admin.flights().get("2").unwrap();

    admin
        .flights()
        .update("2", FlightPatch { is_active: Some(false), ..Default::default() })
        .unwrap();
    let active = visitor.flights().get_all();
    assert_eq!(count_active(&active), 3);
    assert!(active_only(&active).iter().all(|f| f.id != "2"));

    admin.flights().reset().unwrap();
    assert_eq!(count_active(&visitor.flights().get_all()), 4);
    assert_eq!(visitor.flights().get("2"), Some(original));
}

#[test]
fn test_last_writer_wins_across_contexts() {
    let tab_a = site();
    let tab_b = tab_a.open_context();
    let tab_c = tab_a.open_context();

    // Both tabs loaded the collection before either wrote.
    let mut snapshot_a = tab_a.tours().get_all();
    let mut snapshot_b = tab_b.tours().get_all();

    snapshot_a[0].popular = false;
    tab_a.tours().save_all(&snapshot_a).unwrap();

    snapshot_b[0].price = 55.0;
    tab_b.tours().save_all(&snapshot_b).unwrap();

    for tab in [&tab_a, &tab_b, &tab_c] {
        let tours = tab.tours().get_all();
        assert_eq!(tours, snapshot_b);
        assert!(tours[0].popular, "first write is lost");
        assert_eq!(tours[0].price, 55.0);
    }
}

#[test]
fn test_other_tabs_are_notified_of_changes() {
    let admin = site();
    let visitor = admin.open_context();
    let mut tours = CollectionWatcher::new(visitor.tours().clone());
    let mut flights = CollectionWatcher::new(visitor.flights().clone());

    admin
        .tours()
        .update("3", TourPatch { is_active: Some(false), ..Default::default() })
        .unwrap();

    assert!(tours.refresh());
    assert!(!flights.refresh());
    assert_eq!(count_active(tours.items()), 3);
    assert_eq!(count_active(flights.items()), 4);
}

#[tokio::test]
async fn test_watcher_wakes_on_admin_edit() {
    let admin = site();
    let mut watcher = CollectionWatcher::new(admin.open_context().flights().clone());

    let editor = admin.clone();
    let handle = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        editor
            .flights()
            .update("4", FlightPatch { price: Some(499.0), ..Default::default() })
            .unwrap();
    });

    let woke = tokio::time::timeout(Duration::from_secs(2), watcher.changed())
        .await
        .unwrap();
    assert!(woke);
    assert_eq!(watcher.items()[3].price, 499.0);
    handle.await.unwrap();
}

#[test]
fn test_package_lifecycle() {
    let site = site();
    let draft = PackageDraft {
        title: "Cappadocia Balloons".to_string(),
        slug: None,
        destination: "Cappadocia".to_string(),
        country: "Turkey".to_string(),
        duration_days: 3,
        price: 899.0,
        currency: "USD".to_string(),
        rating: 4.9,
        images: Vec::new(),
        amenities: vec!["Hot air balloon".to_string()],
        is_featured: true,
        description: None,
        inclusions: None,
        exclusions: None,
        itinerary: None,
    };

    let created = site.packages().add(draft).unwrap();
    assert_eq!(created.slug, "cappadocia-balloons-3-days");
    assert_eq!(site.summary().packages, 4);
    assert_eq!(site.summary().featured_packages, 3);

    assert!(site.packages().remove(&created.id).unwrap());
    assert!(!site.packages().remove(&created.id).unwrap());
    assert_eq!(site.summary().packages, 3);
}

#[test]
fn test_enquiry_flow_updates_dashboard() {
    let site = site();
    let visitor = site.open_context();

    let booking = visitor.bookings().submit(enquiry()).unwrap();
    assert_eq!(site.summary().new_bookings, 1);

    site.bookings().set_status(&booking.id, BookingStatus::InProgress).unwrap();
    let summary = site.summary();
    assert_eq!(summary.bookings, 1);
    assert_eq!(summary.new_bookings, 0);

    site.bookings().reopen(&booking.id).unwrap();
    assert_eq!(visitor.summary().new_bookings, 1);

    site.reset_all().unwrap();
    assert_eq!(site.summary().bookings, 0);
}

#[test]
fn test_file_backend_persists_and_self_heals() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.storage.backend = StorageBackend::File;
    config.storage.data_dir = dir.path().to_path_buf();

    {
        let site = SiteStore::from_config(&config).unwrap();
        site.flights().remove("1").unwrap();
        site.bookings().submit(enquiry()).unwrap();
    }

    // A later process sees the same data.
    let site = SiteStore::from_config(&config).unwrap();
    assert_eq!(site.flights().get_all().len(), 3);
    assert_eq!(site.bookings().all().len(), 1);

    let path = dir.path().join("voyage%3Aflights.json");
    std::fs::write(&path, "{ truncated").unwrap();
    assert_eq!(site.flights().get_all(), Flight::seed());
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        serde_json::to_string(&Flight::seed()).unwrap()
    );
}

#[test]
fn test_contexts_over_shared_file_storage() {
    let dir = tempfile::tempdir().unwrap();
    let backend = Arc::new(FileStorage::open(dir.path()).unwrap());
    let admin = SiteStore::new(StorageArea::new(backend, ChangeBus::default()), "voyage");
    let visitor = admin.open_context();

    admin.visas().remove("2").unwrap();
    assert_eq!(visitor.summary().visa_countries, 2);
    assert_eq!(visitor.summary().active_visa_countries, 2);
}
