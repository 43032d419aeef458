use super::{null_as_default, Location, Media, PropertyType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    #[default]
    Available,
    Sold,
    Pending,
}

impl PropertyStatus {
    pub const ALL: [PropertyStatus; 3] = [PropertyStatus::Available, PropertyStatus::Sold, PropertyStatus::Pending];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Available => "available",
            PropertyStatus::Sold => "sold",
            PropertyStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(PropertyStatus::Available),
            "sold" => Ok(PropertyStatus::Sold),
            "pending" => Ok(PropertyStatus::Pending),
            other => Err(format!("unknown status '{}' (expected available, sold or pending)", other)),
        }
    }
}

/// Listing price: a numeric amount from the backend, or a preformatted label
/// such as `"2,000,000 Naira"` in the built-in sample listings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Label(String),
}

impl Default for Price {
    fn default() -> Self {
        Price::Amount(0.0)
    }
}

/// A property row. Joined reads also fill `location`, `property_type` and `media`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: Price,
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: String,
    #[serde(default)]
    pub bedrooms: Option<i32>,
    #[serde(default)]
    pub bathrooms: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_featured: bool,
    #[serde(default)]
    pub status: Option<PropertyStatus>,
    #[serde(default)]
    pub location_id: Option<String>,
    #[serde(default)]
    pub property_type_id: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub property_type: Option<PropertyType>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub media: Vec<Media>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Property {
    pub fn location_name(&self) -> Option<&str> {
        self.location.as_ref().map(|l| l.name.as_str()).filter(|n| !n.is_empty())
    }

    pub fn type_name(&self) -> Option<&str> {
        self.property_type.as_ref().map(|t| t.name.as_str()).filter(|n| !n.is_empty())
    }
}
