//! Backend seams: the listings database and the media object store.
//! Each method is a single round trip; composition lives in `service`.

mod postgres;
mod s3;

pub use postgres::PgListingStore;
pub use s3::S3MediaStorage;

use crate::error::AppError;
use crate::model::{
    InquiryFormData, Location, LocationFormData, Media, NewMedia, Property, PropertyFormData, PropertyType,
    PropertyTypeFormData,
};
use async_trait::async_trait;

/// How much related data a property read pulls in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Joins {
    /// Full location and property type rows plus all media.
    #[default]
    Full,
    /// Location name and property type name only (public pages).
    Names,
}

/// Parameters for a property listing query.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyQuery {
    pub joins: Joins,
    pub location_id: Option<String>,
    pub exclude_id: Option<String>,
    pub newest_first: bool,
    pub limit: Option<u32>,
}

#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Cheap connectivity check for readiness probes.
    async fn ping(&self) -> Result<(), AppError>;

    async fn list_properties(&self, query: &PropertyQuery) -> Result<Vec<Property>, AppError>;
    async fn find_property(&self, id: &str, joins: Joins) -> Result<Option<Property>, AppError>;
    async fn insert_property(&self, form: &PropertyFormData) -> Result<Property, AppError>;
    async fn update_property(&self, id: &str, form: &PropertyFormData) -> Result<Option<Property>, AppError>;
    async fn delete_property(&self, id: &str) -> Result<(), AppError>;

    async fn list_locations(&self) -> Result<Vec<Location>, AppError>;
    async fn insert_location(&self, form: &LocationFormData) -> Result<Location, AppError>;

    async fn list_property_types(&self) -> Result<Vec<PropertyType>, AppError>;
    async fn insert_property_type(&self, form: &PropertyTypeFormData) -> Result<PropertyType, AppError>;

    async fn insert_media(&self, media: &NewMedia) -> Result<Media, AppError>;
    async fn find_media(&self, id: &str) -> Result<Option<Media>, AppError>;
    async fn delete_media(&self, id: &str) -> Result<(), AppError>;

    async fn insert_inquiry(&self, form: &InquiryFormData) -> Result<(), AppError>;
}

#[async_trait]
pub trait MediaStorage: Send + Sync {
    async fn upload(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), AppError>;
    /// Public URL for an uploaded object. Pure; no request is made.
    fn public_url(&self, key: &str) -> String;
    async fn remove(&self, keys: &[String]) -> Result<(), AppError>;
}
