use crate::model::Property;

pub const BUNGALOW_IMAGE: &str = "/images/bungalow.png";
pub const SEMI_DETACHED_DUPLEX_IMAGE: &str = "/images/semi-detached-duplex.png";
pub const DUPLEX_IMAGE_EVEN: &str = "/images/duplex-1.png";
pub const DUPLEX_IMAGE_ODD: &str = "/images/duplex-2.png";
pub const DEFAULT_IMAGE: &str = "/images/duplex-1.png";

/// Stock image for a listing, chosen from its property type name.
/// Duplexes alternate on the parity of the id's first code point.
pub fn property_image(property: &Property) -> &'static str {
    let type_name = property.type_name().unwrap_or("").to_lowercase();
    if type_name.contains("bungalow") {
        BUNGALOW_IMAGE
    } else if type_name.contains("semi detached duplex") {
        SEMI_DETACHED_DUPLEX_IMAGE
    } else if type_name.contains("duplex") {
        duplex_image(&property.id)
    } else {
        DEFAULT_IMAGE
    }
}

fn duplex_image(id: &str) -> &'static str {
    match id.chars().next() {
        Some(c) if (c as u32) % 2 == 0 => DUPLEX_IMAGE_EVEN,
        _ => DUPLEX_IMAGE_ODD,
    }
}
