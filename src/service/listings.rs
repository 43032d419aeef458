//! One method per data-access action. Failures are logged here and returned
//! as `Err`; callers decide how to show them. Nothing is retried and
//! multi-step actions are not transactional.

use crate::error::AppError;
use crate::model::{
    InquiryFormData, Location, LocationFormData, Media, MediaKind, NewMedia, Property, PropertyFormData,
    PropertyType, PropertyTypeFormData, UploadFile,
};
use crate::store::{Joins, ListingStore, MediaStorage, PropertyQuery};
use std::sync::Arc;

/// Listings shown on the home page grid.
pub const HOME_LIMIT: u32 = 8;

/// Listings shown under "Similar Properties".
pub const SIMILAR_LIMIT: u32 = 3;

fn logged<T>(result: Result<T, AppError>, context: &'static str) -> Result<T, AppError> {
    if let Err(e) = &result {
        tracing::error!(error = %e, "{}", context);
    }
    result
}

/// Object key for an upload: millisecond timestamp, a short random tag and the
/// original name. The tag keeps same-named files picked together apart.
pub fn storage_key(file_name: &str, millis: i64, tag: &str) -> String {
    format!("{}-{}-{}", millis, tag, file_name)
}

fn upload_tag() -> String {
    let mut tag = uuid::Uuid::new_v4().simple().to_string();
    tag.truncate(8);
    tag
}

/// Last path segment of a public media URL, percent-decoded. `None` when the
/// URL does not parse or ends without a segment.
pub fn object_key_from_url(raw: &str) -> Option<String> {
    let url = url::Url::parse(raw).ok()?;
    let last = url.path_segments()?.last()?.to_string();
    if last.is_empty() {
        return None;
    }
    Some(
        urlencoding::decode(&last)
            .map(|s| s.into_owned())
            .unwrap_or(last),
    )
}

/// Data-access actions over an explicitly supplied store and object storage.
#[derive(Clone)]
pub struct ListingService {
    store: Arc<dyn ListingStore>,
    storage: Arc<dyn MediaStorage>,
}

impl ListingService {
    pub fn new(store: Arc<dyn ListingStore>, storage: Arc<dyn MediaStorage>) -> Self {
        ListingService { store, storage }
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.store.ping().await
    }

    /// All properties with full joins, newest first (admin).
    pub async fn get_properties(&self) -> Result<Vec<Property>, AppError> {
        let query = PropertyQuery {
            joins: Joins::Full,
            newest_first: true,
            ..Default::default()
        };
        logged(self.store.list_properties(&query).await, "error fetching properties")
    }

    pub async fn get_property(&self, id: &str) -> Result<Property, AppError> {
        let found = self
            .store
            .find_property(id, Joins::Full)
            .await
            .and_then(|p| p.ok_or_else(|| AppError::NotFound(format!("property {}", id))));
        logged(found, "error fetching property")
    }

    /// First page of the home grid, with location and type names.
    pub async fn home_properties(&self) -> Result<Vec<Property>, AppError> {
        let query = PropertyQuery {
            joins: Joins::Names,
            limit: Some(HOME_LIMIT),
            ..Default::default()
        };
        logged(self.store.list_properties(&query).await, "error fetching properties")
    }

    /// Every property, with location and type names, for the listings page.
    pub async fn listing_properties(&self) -> Result<Vec<Property>, AppError> {
        let query = PropertyQuery {
            joins: Joins::Names,
            ..Default::default()
        };
        logged(self.store.list_properties(&query).await, "error fetching properties")
    }

    /// Other properties at the same location.
    pub async fn similar_properties(&self, location_id: &str, exclude_id: &str) -> Result<Vec<Property>, AppError> {
        let query = PropertyQuery {
            joins: Joins::Names,
            location_id: Some(location_id.to_string()),
            exclude_id: Some(exclude_id.to_string()),
            limit: Some(SIMILAR_LIMIT),
            ..Default::default()
        };
        logged(self.store.list_properties(&query).await, "error fetching similar properties")
    }

    pub async fn create_property(&self, form: &PropertyFormData) -> Result<Property, AppError> {
        logged(self.store.insert_property(form).await, "error creating property")
    }

    pub async fn update_property(&self, id: &str, form: &PropertyFormData) -> Result<Property, AppError> {
        let updated = self
            .store
            .update_property(id, form)
            .await
            .and_then(|p| p.ok_or_else(|| AppError::NotFound(format!("property {}", id))));
        logged(updated, "error updating property")
    }

    pub async fn delete_property(&self, id: &str) -> Result<(), AppError> {
        logged(self.store.delete_property(id).await, "error deleting property")
    }

    pub async fn get_locations(&self) -> Result<Vec<Location>, AppError> {
        logged(self.store.list_locations().await, "error fetching locations")
    }

    pub async fn create_location(&self, form: &LocationFormData) -> Result<Location, AppError> {
        logged(self.store.insert_location(form).await, "error creating location")
    }

    pub async fn get_property_types(&self) -> Result<Vec<PropertyType>, AppError> {
        logged(self.store.list_property_types().await, "error fetching property types")
    }

    pub async fn create_property_type(&self, form: &PropertyTypeFormData) -> Result<PropertyType, AppError> {
        logged(self.store.insert_property_type(form).await, "error creating property type")
    }

    /// Upload the file, then record it. A failed insert leaves the object orphaned in storage.
    pub async fn upload_property_media(
        &self,
        property_id: &str,
        file: UploadFile,
        kind: MediaKind,
        is_featured: bool,
    ) -> Result<Media, AppError> {
        let key = storage_key(&file.file_name, chrono::Utc::now().timestamp_millis(), &upload_tag());
        logged(
            self.storage.upload(&key, file.bytes, &file.content_type).await,
            "error uploading file",
        )?;

        let media = NewMedia {
            property_id: property_id.to_string(),
            url: self.storage.public_url(&key),
            kind,
            is_featured,
        };
        let saved = self.store.insert_media(&media).await;
        if saved.is_err() {
            tracing::warn!(key = %key, "media record not saved; uploaded object is orphaned");
        }
        logged(saved, "error saving media record")
    }

    /// Remove the stored object, then the row. A failed object removal is
    /// logged and the row is deleted anyway.
    pub async fn delete_media(&self, id: &str) -> Result<(), AppError> {
        let found = self
            .store
            .find_media(id)
            .await
            .and_then(|m| m.ok_or_else(|| AppError::NotFound(format!("media {}", id))));
        let media = logged(found, "error fetching media")?;

        match object_key_from_url(&media.url) {
            Some(key) => {
                if let Err(e) = self.storage.remove(&[key.clone()]).await {
                    tracing::error!(error = %e, key = %key, "error deleting file from storage");
                }
            }
            None => tracing::warn!(url = %media.url, "no object key in media url; skipping storage removal"),
        }

        logged(self.store.delete_media(id).await, "error deleting media record")
    }

    /// Record a contact inquiry. Incomplete forms are rejected before the insert.
    pub async fn submit_inquiry(&self, form: &InquiryFormData) -> Result<(), AppError> {
        form.validate()?;
        logged(self.store.insert_inquiry(form).await, "error submitting inquiry")
    }
}
