mod common;

use common::{form, listing, service, FakeStorage, FakeStore};
use modia_listings::model::{InquiryFormData, LocationFormData, Media, MediaKind, PropertyTypeFormData, UploadFile};
use modia_listings::present::{fallback_properties, home_listing};
use modia_listings::AppError;
use std::sync::atomic::Ordering;

fn inquiry() -> InquiryFormData {
    InquiryFormData {
        first_name: "Ada".into(),
        email: "ada@example.com".into(),
        message: "Hello".into(),
        ..Default::default()
    }
}

fn png(name: &str) -> UploadFile {
    UploadFile {
        file_name: name.to_string(),
        content_type: "image/png".to_string(),
        bytes: vec![0x89, 0x50, 0x4e, 0x47],
    }
}

#[tokio::test]
async fn every_operation_reports_backend_failure() {
    let store = FakeStore::failing();
    let storage = FakeStorage::new();
    let svc = service(&store, &storage);

    assert!(svc.ping().await.is_err());
    assert!(svc.get_properties().await.is_err());
    assert!(svc.get_property("p1").await.is_err());
    assert!(svc.home_properties().await.is_err());
    assert!(svc.listing_properties().await.is_err());
    assert!(svc.similar_properties("loc-1", "p1").await.is_err());
    assert!(svc.create_property(&form("Plot")).await.is_err());
    assert!(svc.update_property("p1", &form("Plot")).await.is_err());
    assert!(svc.delete_property("p1").await.is_err());
    assert!(svc.get_locations().await.is_err());
    assert!(svc
        .create_location(&LocationFormData {
            name: "Kuje".into(),
            city: "Abuja".into(),
            state: "FCT".into(),
        })
        .await
        .is_err());
    assert!(svc.get_property_types().await.is_err());
    assert!(svc
        .create_property_type(&PropertyTypeFormData {
            name: "Bungalow".into(),
            description: String::new(),
        })
        .await
        .is_err());
    assert!(svc
        .upload_property_media("p1", png("a.png"), MediaKind::Image, true)
        .await
        .is_err());
    assert!(svc.delete_media("m1").await.is_err());
    assert!(svc.submit_inquiry(&inquiry()).await.is_err());
}

#[tokio::test]
async fn home_falls_back_when_backend_fails_or_is_empty() {
    let storage = FakeStorage::new();

    let failing = service(&FakeStore::failing(), &storage);
    assert_eq!(home_listing(failing.home_properties().await), fallback_properties());

    let empty = service(&FakeStore::new(), &storage);
    assert_eq!(home_listing(empty.home_properties().await), fallback_properties());

    let stocked = service(
        &FakeStore::with_properties(vec![listing("p1", "Plot 1", "loc-1", "Kuje Home City")]),
        &storage,
    );
    let shown = home_listing(stocked.home_properties().await);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].id, "p1");
}

#[tokio::test]
async fn home_query_is_capped() {
    let many = (0..12)
        .map(|i| listing(&format!("p{}", i), "Plot", "loc-1", "Kuje"))
        .collect();
    let svc = service(&FakeStore::with_properties(many), &FakeStorage::new());
    assert_eq!(svc.home_properties().await.unwrap().len(), 8);
}

#[tokio::test]
async fn missing_property_is_not_found() {
    let svc = service(&FakeStore::new(), &FakeStorage::new());
    let err = svc.get_property("nope").await.unwrap_err();
    assert!(err.is_not_found());

    let err = svc.update_property("nope", &form("Plot")).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn similar_excludes_self_and_caps_at_three() {
    let rows = vec![
        listing("p1", "A", "loc-1", "Kuje"),
        listing("p2", "B", "loc-1", "Kuje"),
        listing("p3", "C", "loc-2", "Modia"),
        listing("p4", "D", "loc-1", "Kuje"),
        listing("p5", "E", "loc-1", "Kuje"),
        listing("p6", "F", "loc-1", "Kuje"),
    ];
    let svc = service(&FakeStore::with_properties(rows), &FakeStorage::new());
    let similar = svc.similar_properties("loc-1", "p1").await.unwrap();
    let ids: Vec<&str> = similar.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p2", "p4", "p5"]);
}

#[tokio::test]
async fn upload_stores_object_then_row() {
    let store = FakeStore::new();
    let storage = FakeStorage::new();
    let svc = service(&store, &storage);

    let media = svc
        .upload_property_media("p1", png("front view.png"), MediaKind::Image, true)
        .await
        .unwrap();

    let keys = storage.uploaded_keys();
    assert_eq!(keys.len(), 1);
    assert!(keys[0].ends_with("-front view.png"));
    assert!(media.url.ends_with(&urlencoding::encode(&keys[0]).into_owned()));
    assert_eq!(media.property_id, "p1");
    assert!(media.is_featured);
    assert_eq!(media.kind, MediaKind::Image);
}

#[tokio::test]
async fn failed_row_insert_leaves_uploaded_object() {
    let store = FakeStore::new();
    store.fail_media_insert.store(true, Ordering::SeqCst);
    let storage = FakeStorage::new();
    let svc = service(&store, &storage);

    assert!(svc
        .upload_property_media("p1", png("a.png"), MediaKind::Image, false)
        .await
        .is_err());
    assert_eq!(storage.uploaded_keys().len(), 1);
    assert!(storage.removed.lock().unwrap().is_empty());
}

#[tokio::test]
async fn failed_object_upload_writes_no_row() {
    let store = FakeStore::new();
    let storage = FakeStorage::new();
    storage.reject.lock().unwrap().push("a.png".into());
    let svc = service(&store, &storage);

    assert!(svc
        .upload_property_media("p1", png("a.png"), MediaKind::Image, false)
        .await
        .is_err());
    assert_eq!(store.count("insert_media"), 0);
}

fn stored_media(store: &FakeStore, url: &str) {
    store.rows.lock().unwrap().media.push(Media {
        id: "m1".into(),
        property_id: "p1".into(),
        url: url.into(),
        kind: MediaKind::Image,
        is_featured: false,
    });
}

#[tokio::test]
async fn delete_media_removes_object_and_row() {
    let store = FakeStore::new();
    stored_media(&store, "https://cdn.test/storage/v1/object/public/property-media/1700-front%20view.png");
    let storage = FakeStorage::new();
    let svc = service(&store, &storage);

    svc.delete_media("m1").await.unwrap();
    assert_eq!(*storage.removed.lock().unwrap(), vec!["1700-front view.png".to_string()]);
    assert!(store.rows.lock().unwrap().media.is_empty());
}

#[tokio::test]
async fn delete_media_still_deletes_row_when_storage_fails() {
    let store = FakeStore::new();
    stored_media(&store, "https://cdn.test/storage/v1/object/public/property-media/1700-a.png");
    let storage = FakeStorage::new();
    storage.fail_remove.store(true, Ordering::SeqCst);
    let svc = service(&store, &storage);

    svc.delete_media("m1").await.unwrap();
    assert_eq!(store.count("delete_media"), 1);
    assert!(store.rows.lock().unwrap().media.is_empty());
}

#[tokio::test]
async fn delete_unknown_media_touches_nothing() {
    let store = FakeStore::new();
    let storage = FakeStorage::new();
    let svc = service(&store, &storage);

    assert!(svc.delete_media("m404").await.unwrap_err().is_not_found());
    assert_eq!(store.count("delete_media"), 0);
    assert!(storage.removed.lock().unwrap().is_empty());
}

#[tokio::test]
async fn inquiry_is_recorded() {
    let store = FakeStore::new();
    let svc = service(&store, &FakeStorage::new());
    svc.submit_inquiry(&inquiry()).await.unwrap();
    assert_eq!(store.rows.lock().unwrap().inquiries, vec![inquiry()]);
}

#[tokio::test]
async fn incomplete_inquiry_is_rejected_before_insert() {
    let store = FakeStore::new();
    let svc = service(&store, &FakeStorage::new());
    let missing_email = InquiryFormData {
        email: "not-an-email".into(),
        ..inquiry()
    };
    let err = svc.submit_inquiry(&missing_email).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(store.count("insert_inquiry"), 0);
    assert!(store.rows.lock().unwrap().inquiries.is_empty());
}

#[tokio::test]
async fn same_named_files_get_distinct_keys() {
    let store = FakeStore::new();
    let storage = FakeStorage::new();
    let svc = service(&store, &storage);

    let first = svc
        .upload_property_media("p1", png("plot.png"), MediaKind::Image, true)
        .await
        .unwrap();
    let second = svc
        .upload_property_media("p1", png("plot.png"), MediaKind::Image, false)
        .await
        .unwrap();

    let keys = storage.uploaded_keys();
    assert_eq!(keys.len(), 2);
    assert_ne!(keys[0], keys[1]);
    assert!(keys.iter().all(|k| k.ends_with("-plot.png")));
    assert_ne!(first.url, second.url);
}
