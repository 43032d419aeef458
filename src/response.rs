//! Response helpers: the JSON envelope for the admin API and HTML rendering for pages.

use crate::error::AppError;
use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct SuccessOne<T> {
    pub data: T,
}

#[derive(Serialize)]
pub struct SuccessMany<T> {
    pub data: Vec<T>,
    pub meta: MetaCount,
}

#[derive(Serialize)]
pub struct MetaCount {
    pub count: u64,
}

pub fn success_one<T: Serialize>(data: T) -> (StatusCode, Json<SuccessOne<T>>) {
    (StatusCode::OK, Json(SuccessOne { data }))
}

pub fn success_many<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<SuccessMany<T>>) {
    let count = data.len() as u64;
    (
        StatusCode::OK,
        Json(SuccessMany {
            data,
            meta: MetaCount { count },
        }),
    )
}

/// Render a template into an HTML response with the given status.
pub fn render<T: Template>(status: StatusCode, template: &T) -> Result<Response, AppError> {
    let body = template.render()?;
    Ok((status, Html(body)).into_response())
}

/// Render with 200 OK.
pub fn page<T: Template>(template: &T) -> Result<Response, AppError> {
    render(StatusCode::OK, template)
}
