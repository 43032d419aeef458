use super::PropertyStatus;
use serde::{Deserialize, Serialize};

/// Editable columns of a property, as submitted by the admin form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyFormData {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub size: String,
    pub location_id: String,
    pub property_type_id: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub features: Vec<String>,
    pub is_featured: bool,
    pub status: PropertyStatus,
}

impl Default for PropertyFormData {
    fn default() -> Self {
        PropertyFormData {
            title: String::new(),
            description: String::new(),
            price: 0.0,
            size: String::new(),
            location_id: String::new(),
            property_type_id: String::new(),
            bedrooms: 0,
            bathrooms: 0,
            features: Vec::new(),
            is_featured: false,
            status: PropertyStatus::Available,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationFormData {
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyTypeFormData {
    pub name: String,
    #[serde(default)]
    pub description: String,
}
