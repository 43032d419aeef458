//! Listing entities as stored by the backend, plus the admin form payloads.

mod catalog;
mod forms;
mod inquiry;
mod media;
mod property;

pub use catalog::{Location, PropertyType};
pub use forms::{LocationFormData, PropertyFormData, PropertyTypeFormData};
pub use inquiry::InquiryFormData;
pub use media::{Media, MediaKind, NewMedia, UploadFile};
pub use property::{Price, Property, PropertyStatus};

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as `T::default()`; the backend returns null for unset arrays and flags.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
