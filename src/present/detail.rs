//! View model for a single listing page.

use super::image::property_image;
use super::listing::{location_label, type_label, PropertyCard};
use super::price::price_label;
use crate::model::{MediaKind, Property};

/// Amenities every estate plot advertises.
pub const ESTATE_FEATURES: [&str; 6] = [
    "Ready for Development",
    "Secure Estate",
    "Good Road Network",
    "Perimeter Fencing",
    "Electricity Infrastructure",
    "Water Supply System",
];

#[derive(Clone, Debug, PartialEq)]
pub struct PropertyDetail {
    pub id: String,
    pub title: String,
    pub image: &'static str,
    pub type_label: String,
    pub location: String,
    pub price: String,
    pub size: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub description: String,
    /// Features stored on the listing, followed by the estate amenities.
    pub features: Vec<String>,
    pub gallery: Vec<String>,
    pub videos: Vec<String>,
    pub similar: Vec<PropertyCard>,
}

fn planned(count: Option<i32>) -> String {
    match count {
        Some(n) if n > 0 => n.to_string(),
        _ => "N/A".to_string(),
    }
}

/// Description text, or the generic plot blurb when the listing has none.
pub fn detail_description(property: &Property) -> String {
    if let Some(d) = property.description.as_deref().filter(|d| !d.trim().is_empty()) {
        return d.to_string();
    }
    format!(
        "This premium landed property is perfect for building your dream {kind} in {location}, Abuja. \
         With a spacious layout of {size}, this property offers an excellent opportunity to create your ideal home \
         in one of Abuja's most sought-after locations. The plot is ready for development with all necessary \
         approvals in place.",
        kind = property.type_name().unwrap_or("home"),
        location = location_label(property),
        size = property.size,
    )
}

impl PropertyDetail {
    pub fn new(property: &Property, similar: &[Property]) -> Self {
        let mut features: Vec<String> = property
            .features
            .iter()
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect();
        for extra in ESTATE_FEATURES {
            if !features.iter().any(|f| f.eq_ignore_ascii_case(extra)) {
                features.push(extra.to_string());
            }
        }
        let media_urls = |kind: MediaKind| {
            property
                .media
                .iter()
                .filter(|m| m.kind == kind)
                .map(|m| m.url.clone())
                .collect::<Vec<_>>()
        };
        PropertyDetail {
            id: property.id.clone(),
            title: property.title.clone(),
            image: property_image(property),
            type_label: type_label(property),
            location: location_label(property),
            price: price_label(&property.price),
            size: property.size.clone(),
            bedrooms: planned(property.bedrooms),
            bathrooms: planned(property.bathrooms),
            description: detail_description(property),
            features,
            gallery: media_urls(MediaKind::Image),
            videos: media_urls(MediaKind::Video),
            similar: similar.iter().map(PropertyCard::from_property).collect(),
        }
    }
}
