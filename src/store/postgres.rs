//! `ListingStore` over PostgreSQL.

use super::{Joins, ListingStore, PropertyQuery};
use crate::error::AppError;
use crate::model::{
    InquiryFormData, Location, LocationFormData, Media, NewMedia, Property, PropertyFormData, PropertyType,
    PropertyTypeFormData,
};
use crate::sql::{
    bind_all, delete, insert, select, update, BindValue, Filter, Include, IncludeDirection, Order, QueryBuf,
    INQUIRIES, LOCATIONS, MEDIA, PROPERTIES, PROPERTY_TYPES,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use sqlx::{PgPool, Row};

const FULL_JOINS: &[Include] = &[
    Include {
        name: "location",
        direction: IncludeDirection::ToOne,
        related: &LOCATIONS,
        our_key: "location_id",
        their_key: "id",
        columns: &[],
    },
    Include {
        name: "property_type",
        direction: IncludeDirection::ToOne,
        related: &PROPERTY_TYPES,
        our_key: "property_type_id",
        their_key: "id",
        columns: &[],
    },
    Include {
        name: "media",
        direction: IncludeDirection::ToMany,
        related: &MEDIA,
        our_key: "id",
        their_key: "property_id",
        columns: &[],
    },
];

const NAME_JOINS: &[Include] = &[
    Include {
        name: "location",
        direction: IncludeDirection::ToOne,
        related: &LOCATIONS,
        our_key: "location_id",
        their_key: "id",
        columns: &["name"],
    },
    Include {
        name: "property_type",
        direction: IncludeDirection::ToOne,
        related: &PROPERTY_TYPES,
        our_key: "property_type_id",
        their_key: "id",
        columns: &["name"],
    },
];

/// Ids are uuid columns; anything else cannot match a row.
fn is_row_id(id: &str) -> bool {
    uuid::Uuid::parse_str(id).is_ok()
}

fn includes(joins: Joins) -> &'static [Include] {
    match joins {
        Joins::Full => FULL_JOINS,
        Joins::Names => NAME_JOINS,
    }
}

fn property_values(form: &PropertyFormData) -> Vec<(&'static str, BindValue)> {
    vec![
        ("title", form.title.as_str().into()),
        ("description", form.description.as_str().into()),
        ("price", form.price.into()),
        ("size", form.size.as_str().into()),
        ("location_id", BindValue::text_or_null(&form.location_id)),
        ("property_type_id", BindValue::text_or_null(&form.property_type_id)),
        ("bedrooms", form.bedrooms.into()),
        ("bathrooms", form.bathrooms.into()),
        ("features", form.features.clone().into()),
        ("is_featured", form.is_featured.into()),
        ("status", form.status.as_str().into()),
    ]
}

#[derive(Clone)]
pub struct PgListingStore {
    pool: PgPool,
}

impl PgListingStore {
    pub fn new(pool: PgPool) -> Self {
        PgListingStore { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn fetch_many<T: DeserializeOwned>(&self, q: &QueryBuf) -> Result<Vec<T>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let rows = bind_all(sqlx::query(&q.sql), &q.params).fetch_all(&self.pool).await?;
        rows.iter()
            .map(|r| -> Result<T, AppError> {
                let v: Value = r.try_get("row")?;
                Ok(serde_json::from_value(v)?)
            })
            .collect()
    }

    async fn fetch_optional<T: DeserializeOwned>(&self, q: &QueryBuf) -> Result<Option<T>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = bind_all(sqlx::query(&q.sql), &q.params).fetch_optional(&self.pool).await?;
        match row {
            Some(r) => {
                let v: Value = r.try_get("row")?;
                Ok(Some(serde_json::from_value(v)?))
            }
            None => Ok(None),
        }
    }

    async fn fetch_one<T: DeserializeOwned>(&self, q: &QueryBuf) -> Result<T, AppError> {
        self.fetch_optional(q)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }

    async fn execute(&self, q: &QueryBuf) -> Result<(), AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "execute");
        bind_all(sqlx::query(&q.sql), &q.params).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl ListingStore for PgListingStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    async fn list_properties(&self, query: &PropertyQuery) -> Result<Vec<Property>, AppError> {
        let mut filters = Vec::new();
        if let Some(loc) = &query.location_id {
            filters.push(Filter::Eq("location_id", BindValue::from(loc.as_str())));
        }
        if let Some(id) = &query.exclude_id {
            filters.push(Filter::NotEq("id", BindValue::from(id.as_str())));
        }
        let order = query.newest_first.then(|| Order::desc("created_at"));
        let q = select(&PROPERTIES, includes(query.joins), &filters, order, query.limit);
        self.fetch_many(&q).await
    }

    async fn find_property(&self, id: &str, joins: Joins) -> Result<Option<Property>, AppError> {
        if !is_row_id(id) {
            return Ok(None);
        }
        let q = select(
            &PROPERTIES,
            includes(joins),
            &[Filter::Eq("id", BindValue::from(id))],
            None,
            Some(1),
        );
        self.fetch_optional(&q).await
    }

    async fn insert_property(&self, form: &PropertyFormData) -> Result<Property, AppError> {
        let q = insert(&PROPERTIES, &property_values(form));
        self.fetch_one(&q).await
    }

    async fn update_property(&self, id: &str, form: &PropertyFormData) -> Result<Option<Property>, AppError> {
        if !is_row_id(id) {
            return Ok(None);
        }
        let q = update(&PROPERTIES, id, &property_values(form));
        self.fetch_optional(&q).await
    }

    async fn delete_property(&self, id: &str) -> Result<(), AppError> {
        self.execute(&delete(&PROPERTIES, id)).await
    }

    async fn list_locations(&self) -> Result<Vec<Location>, AppError> {
        let q = select(&LOCATIONS, &[], &[], Some(Order::asc("name")), None);
        self.fetch_many(&q).await
    }

    async fn insert_location(&self, form: &LocationFormData) -> Result<Location, AppError> {
        let q = insert(
            &LOCATIONS,
            &[
                ("name", form.name.as_str().into()),
                ("city", form.city.as_str().into()),
                ("state", form.state.as_str().into()),
            ],
        );
        self.fetch_one(&q).await
    }

    async fn list_property_types(&self) -> Result<Vec<PropertyType>, AppError> {
        let q = select(&PROPERTY_TYPES, &[], &[], Some(Order::asc("name")), None);
        self.fetch_many(&q).await
    }

    async fn insert_property_type(&self, form: &PropertyTypeFormData) -> Result<PropertyType, AppError> {
        let q = insert(
            &PROPERTY_TYPES,
            &[
                ("name", form.name.as_str().into()),
                ("description", form.description.as_str().into()),
            ],
        );
        self.fetch_one(&q).await
    }

    async fn insert_media(&self, media: &NewMedia) -> Result<Media, AppError> {
        let q = insert(
            &MEDIA,
            &[
                ("property_id", media.property_id.as_str().into()),
                ("url", media.url.as_str().into()),
                ("type", media.kind.as_str().into()),
                ("is_featured", media.is_featured.into()),
            ],
        );
        self.fetch_one(&q).await
    }

    async fn find_media(&self, id: &str) -> Result<Option<Media>, AppError> {
        if !is_row_id(id) {
            return Ok(None);
        }
        let q = select(&MEDIA, &[], &[Filter::Eq("id", BindValue::from(id))], None, Some(1));
        self.fetch_optional(&q).await
    }

    async fn delete_media(&self, id: &str) -> Result<(), AppError> {
        self.execute(&delete(&MEDIA, id)).await
    }

    async fn insert_inquiry(&self, form: &InquiryFormData) -> Result<(), AppError> {
        let q = insert(
            &INQUIRIES,
            &[
                ("first_name", form.first_name.as_str().into()),
                ("last_name", form.last_name.as_str().into()),
                ("email", form.email.as_str().into()),
                ("phone", form.phone.as_str().into()),
                ("message", form.message.as_str().into()),
            ],
        );
        self.execute(&q).await
    }
}
