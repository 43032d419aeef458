//! Pure view logic shared by the page handlers and templates.

pub mod detail;
pub mod image;
pub mod listing;
pub mod price;
pub mod video;

pub use detail::{detail_description, PropertyDetail, ESTATE_FEATURES};
pub use image::property_image;
pub use listing::{
    cards, fallback_properties, filter_by_location, home_listing, listing_heading, location_label, type_label,
    PropertyCard,
};
pub use price::{admin_price_label, format_naira, price_label};
pub use video::{home_videos, youtube_embed_url, VideoEmbed};
