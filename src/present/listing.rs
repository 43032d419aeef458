//! Listing grid helpers: sample data, the location filter and card view models.

use super::image::property_image;
use super::price::price_label;
use crate::error::AppError;
use crate::model::{Location, Price, Property, PropertyType};

/// Shown wherever a location name is missing.
pub const DEFAULT_LOCATION_NAME: &str = "Abuja";

/// Sample listings for the home page when the backend errors or has no rows.
pub fn fallback_properties() -> Vec<Property> {
    let sample = |id: &str, title: &str, description: &str, price: &str, location: &str, size: &str, kind: &str| {
        Property {
            id: id.to_string(),
            title: title.to_string(),
            description: Some(description.to_string()),
            price: Price::Label(price.to_string()),
            size: size.to_string(),
            location: Some(Location::named(location)),
            property_type: Some(PropertyType::named(kind)),
            ..Default::default()
        }
    };
    vec![
        sample(
            "1",
            "5 Bedroom Detached Duplex with BQ",
            "Spacious 5 bedroom detached duplex with BQ in Kuje Home City",
            "2,000,000 Naira",
            "Kuje Home City, Abuja",
            "500Sqm",
            "Detached Duplex",
        ),
        sample(
            "2",
            "4 Bedroom Detached Duplex",
            "Beautiful 4 bedroom detached duplex in a serene environment",
            "1,500,000 Naira",
            "Kuje Home City, Abuja",
            "400Sqm",
            "Detached Duplex",
        ),
        sample(
            "3",
            "3 Bedroom Detached Bungalow",
            "Elegant 3 bedroom detached bungalow with modern finishes",
            "1,500,000 Naira",
            "Kuje Home City, Abuja",
            "400Sqm",
            "Detached Bungalow",
        ),
        sample(
            "4",
            "3 Bedroom Detached Bungalow",
            "Premium 3 bedroom detached bungalow in Modia Estate",
            "5,000,000 Naira",
            "Modia Estate Phase 4, Kurudu By Army Estate, Abuja",
            "400Sqm",
            "Detached Bungalow",
        ),
    ]
}

/// Home grid contents: backend rows, or the sample listings on error or empty.
pub fn home_listing(fetched: Result<Vec<Property>, AppError>) -> Vec<Property> {
    match fetched {
        Ok(rows) if !rows.is_empty() => rows,
        _ => fallback_properties(),
    }
}

/// Keep properties whose location name contains `filter`, ignoring case.
/// A blank filter keeps everything.
pub fn filter_by_location(properties: Vec<Property>, filter: Option<&str>) -> Vec<Property> {
    let needle = match filter.map(str::trim).filter(|f| !f.is_empty()) {
        Some(f) => f.to_lowercase(),
        None => return properties,
    };
    properties
        .into_iter()
        .filter(|p| {
            p.location_name()
                .map(|name| name.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
        .collect()
}

/// Heading above the listing grid.
pub fn listing_heading(filter: Option<&str>) -> String {
    match filter.map(str::trim).filter(|f| !f.is_empty()) {
        Some(f) => {
            let mut chars = f.chars();
            let capitalized = match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            };
            format!("Landed Properties in {}", capitalized)
        }
        None => "All Available Landed Properties".to_string(),
    }
}

pub fn type_label(property: &Property) -> String {
    format!("Landed Property for {}", property.type_name().unwrap_or("Property"))
}

pub fn location_label(property: &Property) -> String {
    property.location_name().unwrap_or(DEFAULT_LOCATION_NAME).to_string()
}

/// Card-ready strings for one listing.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyCard {
    pub id: String,
    pub href: String,
    pub title: String,
    pub image: &'static str,
    pub type_label: String,
    pub location: String,
    pub price: String,
    pub size: String,
    pub summary: String,
}

impl PropertyCard {
    pub fn from_property(property: &Property) -> Self {
        let location = location_label(property);
        let summary = match property.description.as_deref().filter(|d| !d.trim().is_empty()) {
            Some(d) => d.to_string(),
            None => format!(
                "Premium landed property for {} in {}. Perfect for building your dream home.",
                property.type_name().unwrap_or(""),
                location
            ),
        };
        PropertyCard {
            id: property.id.clone(),
            href: format!("/properties/{}", urlencoding::encode(&property.id)),
            title: property.title.clone(),
            image: property_image(property),
            type_label: type_label(property),
            location,
            price: price_label(&property.price),
            size: property.size.clone(),
            summary,
        }
    }
}

pub fn cards(properties: &[Property]) -> Vec<PropertyCard> {
    properties.iter().map(PropertyCard::from_property).collect()
}
