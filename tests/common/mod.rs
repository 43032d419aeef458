//! In-memory backends shared by the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use modia_listings::model::{
    InquiryFormData, Location, LocationFormData, Media, NewMedia, Property, PropertyFormData, PropertyType,
    PropertyTypeFormData,
};
use modia_listings::store::{Joins, ListingStore, MediaStorage, PropertyQuery};
use modia_listings::{AppError, AppState, ListingService, Settings};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

pub const ADMIN_TOKEN: &str = "test-admin-token";

fn backend_down() -> AppError {
    AppError::Db(sqlx::Error::Protocol("backend unavailable".into()))
}

#[derive(Default)]
pub struct Rows {
    pub properties: Vec<Property>,
    pub locations: Vec<Location>,
    pub property_types: Vec<PropertyType>,
    pub media: Vec<Media>,
    pub inquiries: Vec<InquiryFormData>,
}

/// `ListingStore` over vectors. `fail` makes every call return a backend error.
#[derive(Default)]
pub struct FakeStore {
    pub rows: Mutex<Rows>,
    pub fail: AtomicBool,
    pub fail_media_insert: AtomicBool,
    pub calls: Mutex<Vec<&'static str>>,
    next_id: AtomicU32,
}

impl FakeStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_properties(properties: Vec<Property>) -> Arc<Self> {
        let store = Self::default();
        store.rows.lock().unwrap().properties = properties;
        Arc::new(store)
    }

    pub fn failing() -> Arc<Self> {
        let store = Self::default();
        store.fail.store(true, Ordering::SeqCst);
        Arc::new(store)
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| **c == call).count()
    }

    fn enter(&self, call: &'static str) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(call);
        if self.fail.load(Ordering::SeqCst) {
            return Err(backend_down());
        }
        Ok(())
    }

    fn id(&self) -> String {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        format!("00000000-0000-4000-8000-{:012}", n)
    }
}

fn apply_form(p: &mut Property, form: &PropertyFormData) {
    p.title = form.title.clone();
    p.description = Some(form.description.clone());
    p.price = modia_listings::model::Price::Amount(form.price);
    p.size = form.size.clone();
    p.location_id = Some(form.location_id.clone());
    p.property_type_id = Some(form.property_type_id.clone());
    p.bedrooms = Some(form.bedrooms);
    p.bathrooms = Some(form.bathrooms);
    p.features = form.features.clone();
    p.is_featured = form.is_featured;
    p.status = Some(form.status);
}

#[async_trait]
impl ListingStore for FakeStore {
    async fn ping(&self) -> Result<(), AppError> {
        self.enter("ping")
    }

    async fn list_properties(&self, query: &PropertyQuery) -> Result<Vec<Property>, AppError> {
        self.enter("list_properties")?;
        let rows = self.rows.lock().unwrap();
        let mut out: Vec<Property> = rows
            .properties
            .iter()
            .filter(|p| match &query.location_id {
                Some(loc) => p.location_id.as_ref() == Some(loc),
                None => true,
            })
            .filter(|p| match &query.exclude_id {
                Some(id) => &p.id != id,
                None => true,
            })
            .cloned()
            .collect();
        if let Some(limit) = query.limit {
            out.truncate(limit as usize);
        }
        Ok(out)
    }

    async fn find_property(&self, id: &str, _joins: Joins) -> Result<Option<Property>, AppError> {
        self.enter("find_property")?;
        Ok(self.rows.lock().unwrap().properties.iter().find(|p| p.id == id).cloned())
    }

    async fn insert_property(&self, form: &PropertyFormData) -> Result<Property, AppError> {
        self.enter("insert_property")?;
        let mut p = Property {
            id: self.id(),
            ..Default::default()
        };
        apply_form(&mut p, form);
        self.rows.lock().unwrap().properties.push(p.clone());
        Ok(p)
    }

    async fn update_property(&self, id: &str, form: &PropertyFormData) -> Result<Option<Property>, AppError> {
        self.enter("update_property")?;
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.properties.iter_mut().find(|p| p.id == id).map(|p| {
            apply_form(p, form);
            p.clone()
        }))
    }

    async fn delete_property(&self, id: &str) -> Result<(), AppError> {
        self.enter("delete_property")?;
        self.rows.lock().unwrap().properties.retain(|p| p.id != id);
        Ok(())
    }

    async fn list_locations(&self) -> Result<Vec<Location>, AppError> {
        self.enter("list_locations")?;
        Ok(self.rows.lock().unwrap().locations.clone())
    }

    async fn insert_location(&self, form: &LocationFormData) -> Result<Location, AppError> {
        self.enter("insert_location")?;
        let loc = Location {
            id: self.id(),
            name: form.name.clone(),
            city: Some(form.city.clone()),
            state: Some(form.state.clone()),
        };
        self.rows.lock().unwrap().locations.push(loc.clone());
        Ok(loc)
    }

    async fn list_property_types(&self) -> Result<Vec<PropertyType>, AppError> {
        self.enter("list_property_types")?;
        Ok(self.rows.lock().unwrap().property_types.clone())
    }

    async fn insert_property_type(&self, form: &PropertyTypeFormData) -> Result<PropertyType, AppError> {
        self.enter("insert_property_type")?;
        let kind = PropertyType {
            id: self.id(),
            name: form.name.clone(),
            description: Some(form.description.clone()),
        };
        self.rows.lock().unwrap().property_types.push(kind.clone());
        Ok(kind)
    }

    async fn insert_media(&self, media: &NewMedia) -> Result<Media, AppError> {
        self.enter("insert_media")?;
        if self.fail_media_insert.load(Ordering::SeqCst) {
            return Err(backend_down());
        }
        let row = Media {
            id: self.id(),
            property_id: media.property_id.clone(),
            url: media.url.clone(),
            kind: media.kind,
            is_featured: media.is_featured,
        };
        self.rows.lock().unwrap().media.push(row.clone());
        Ok(row)
    }

    async fn find_media(&self, id: &str) -> Result<Option<Media>, AppError> {
        self.enter("find_media")?;
        Ok(self.rows.lock().unwrap().media.iter().find(|m| m.id == id).cloned())
    }

    async fn delete_media(&self, id: &str) -> Result<(), AppError> {
        self.enter("delete_media")?;
        self.rows.lock().unwrap().media.retain(|m| m.id != id);
        Ok(())
    }

    async fn insert_inquiry(&self, form: &InquiryFormData) -> Result<(), AppError> {
        self.enter("insert_inquiry")?;
        self.rows.lock().unwrap().inquiries.push(form.clone());
        Ok(())
    }
}

/// `MediaStorage` that records keys. Uploads of files named in `reject` fail.
#[derive(Default)]
pub struct FakeStorage {
    pub uploaded: Mutex<Vec<(String, String)>>,
    pub removed: Mutex<Vec<String>>,
    pub reject: Mutex<Vec<String>>,
    pub fail_remove: AtomicBool,
}

impl FakeStorage {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn uploaded_keys(&self) -> Vec<String> {
        self.uploaded.lock().unwrap().iter().map(|(k, _)| k.clone()).collect()
    }
}

#[async_trait]
impl MediaStorage for FakeStorage {
    async fn upload(&self, key: &str, _bytes: Vec<u8>, content_type: &str) -> Result<(), AppError> {
        if self.reject.lock().unwrap().iter().any(|name| key.ends_with(name.as_str())) {
            return Err(AppError::Storage(format!("upload of {} refused", key)));
        }
        self.uploaded
            .lock()
            .unwrap()
            .push((key.to_string(), content_type.to_string()));
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("https://cdn.test/storage/v1/object/public/property-media/{}", urlencoding::encode(key))
    }

    async fn remove(&self, keys: &[String]) -> Result<(), AppError> {
        if self.fail_remove.load(Ordering::SeqCst) {
            return Err(AppError::Storage("remove refused".into()));
        }
        self.removed.lock().unwrap().extend(keys.iter().cloned());
        Ok(())
    }
}

pub fn service(store: &Arc<FakeStore>, storage: &Arc<FakeStorage>) -> ListingService {
    ListingService::new(store.clone(), storage.clone())
}

pub fn settings() -> Settings {
    let vars: HashMap<&str, &str> = [
        ("DATABASE_URL", "postgres://localhost/modia_test"),
        ("STORAGE_ENDPOINT", "http://localhost:9000"),
        ("STORAGE_ACCESS_KEY_ID", "key"),
        ("STORAGE_SECRET_ACCESS_KEY", "secret"),
        ("STORAGE_PUBLIC_URL", "https://cdn.test/storage/v1/object/public"),
        ("ADMIN_TOKEN", ADMIN_TOKEN),
    ]
    .into_iter()
    .collect();
    Settings::from_lookup(|k| vars.get(k).map(|v| v.to_string())).expect("test settings")
}

pub fn state(store: &Arc<FakeStore>, storage: &Arc<FakeStorage>) -> AppState {
    AppState::new(service(store, storage), settings())
}

pub fn listing(id: &str, title: &str, location_id: &str, location_name: &str) -> Property {
    Property {
        id: id.to_string(),
        title: title.to_string(),
        size: "400Sqm".to_string(),
        location_id: Some(location_id.to_string()),
        location: Some(Location::named(location_name)),
        property_type: Some(PropertyType::named("Detached Duplex")),
        price: modia_listings::model::Price::Amount(2_000_000.0),
        ..Default::default()
    }
}

pub fn form(title: &str) -> PropertyFormData {
    PropertyFormData {
        title: title.to_string(),
        price: 1_500_000.0,
        size: "500Sqm".to_string(),
        location_id: "loc-1".to_string(),
        property_type_id: "type-1".to_string(),
        ..Default::default()
    }
}
