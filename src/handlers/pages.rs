//! Public pages: home, listings, listing detail, about, and the 404/error views.

use crate::contact::{property_interest_message, whatsapp_link, ABOUT_MESSAGE, GENERAL_MESSAGE};
use crate::error::AppError;
use crate::present::{
    cards, filter_by_location, home_listing, home_videos, listing_heading, PropertyCard, PropertyDetail, VideoEmbed,
};
use crate::response::{page, render};
use crate::state::AppState;
use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::Response,
};
use serde::Deserialize;

#[derive(Template)]
#[template(path = "home.html")]
struct HomePage {
    active: &'static str,
    contact_number: String,
    contact_link: String,
    cards: Vec<PropertyCard>,
    videos: Vec<VideoEmbed>,
}

pub struct LocationOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "properties.html")]
struct ListingsPage {
    active: &'static str,
    contact_number: String,
    contact_link: String,
    heading: String,
    cards: Vec<PropertyCard>,
    location_options: Vec<LocationOption>,
    type_names: Vec<String>,
}

#[derive(Template)]
#[template(path = "property_detail.html")]
struct DetailPage {
    active: &'static str,
    contact_number: String,
    contact_link: String,
    detail: PropertyDetail,
}

#[derive(Template)]
#[template(path = "about.html")]
struct AboutPage {
    active: &'static str,
    contact_number: String,
    contact_link: String,
    values: [(&'static str, &'static str); 4],
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPage {
    active: &'static str,
    contact_number: String,
    retry: String,
}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundPage {
    active: &'static str,
    contact_number: String,
}

const COMPANY_VALUES: [(&str, &str); 4] = [
    (
        "Client-Centered",
        "We put our clients' needs first, providing personalized service tailored to your unique requirements.",
    ),
    (
        "Excellence",
        "We strive for excellence in every aspect of our service, from property selection to client communication.",
    ),
    (
        "Efficiency",
        "We value your time and work efficiently to help you find the perfect property without unnecessary delays.",
    ),
    (
        "Integrity",
        "We operate with transparency and honesty, ensuring you have all the information needed to make informed decisions.",
    ),
];

#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    pub location: Option<String>,
}

pub async fn home(State(state): State<AppState>) -> Result<Response, AppError> {
    let properties = home_listing(state.listings.home_properties().await);
    page(&HomePage {
        active: "home",
        contact_number: state.contact_number().to_string(),
        contact_link: whatsapp_link(state.contact_number(), GENERAL_MESSAGE),
        cards: cards(&properties),
        videos: home_videos(),
    })
}

/// `GET /properties?location=`. A failed fetch shows the empty state, not sample data.
pub async fn listings(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Result<Response, AppError> {
    let (properties, locations, types) = tokio::join!(
        state.listings.listing_properties(),
        state.listings.get_locations(),
        state.listings.get_property_types(),
    );
    let filter = params.location.as_deref().map(str::trim).filter(|f| !f.is_empty());
    let shown = filter_by_location(properties.unwrap_or_default(), filter);
    let selected = filter.map(str::to_lowercase);

    let location_options = locations
        .unwrap_or_default()
        .into_iter()
        .map(|l| {
            let value = l.name.to_lowercase();
            LocationOption {
                selected: selected.as_deref() == Some(value.as_str()),
                value,
                label: l.name,
            }
        })
        .collect();

    page(&ListingsPage {
        active: "properties",
        contact_number: state.contact_number().to_string(),
        contact_link: whatsapp_link(state.contact_number(), GENERAL_MESSAGE),
        heading: listing_heading(filter),
        cards: cards(&shown),
        location_options,
        type_names: types.unwrap_or_default().into_iter().map(|t| t.name).collect(),
    })
}

pub async fn property_detail(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response, AppError> {
    let property = match state.listings.get_property(&id).await {
        Ok(p) => p,
        Err(e) if e.is_not_found() => return not_found_page(&state),
        Err(_) => return error_page(&state, &format!("/properties/{}", urlencoding::encode(&id))),
    };

    let similar = match property.location_id.as_deref().filter(|l| !l.is_empty()) {
        Some(location_id) => state
            .listings
            .similar_properties(location_id, &property.id)
            .await
            .unwrap_or_default(),
        None => Vec::new(),
    };

    page(&DetailPage {
        active: "properties",
        contact_number: state.contact_number().to_string(),
        contact_link: whatsapp_link(state.contact_number(), &property_interest_message(&property)),
        detail: PropertyDetail::new(&property, &similar),
    })
}

pub async fn about(State(state): State<AppState>) -> Result<Response, AppError> {
    page(&AboutPage {
        active: "about",
        contact_number: state.contact_number().to_string(),
        contact_link: whatsapp_link(state.contact_number(), ABOUT_MESSAGE),
        values: COMPANY_VALUES,
    })
}

/// Router fallback for unknown paths.
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Result<Response, AppError> {
    tracing::debug!(path = %uri.path(), "no route");
    not_found_page(&state)
}

pub fn not_found_page(state: &AppState) -> Result<Response, AppError> {
    render(
        StatusCode::NOT_FOUND,
        &NotFoundPage {
            active: "",
            contact_number: state.contact_number().to_string(),
        },
    )
}

/// Page-level error view with a "Try again" link back to `retry`.
pub fn error_page(state: &AppState, retry: &str) -> Result<Response, AppError> {
    render(
        StatusCode::BAD_GATEWAY,
        &ErrorPage {
            active: "",
            contact_number: state.contact_number().to_string(),
            retry: retry.to_string(),
        },
    )
}
