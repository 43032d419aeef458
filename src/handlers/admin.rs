//! Admin dashboard handlers. Every route except the login pair requires an
//! [`AdminSession`]; form posts answer with a redirect carrying a notice.

use crate::admin::{DashboardData, Notice, PropertyEditor};
use crate::error::AppError;
use crate::extractors::session::{constant_time_eq, removal_cookie, session_cookie, AdminSession};
use crate::model::{
    Location, LocationFormData, Media, MediaKind, Property, PropertyFormData, PropertyStatus, PropertyType,
    PropertyTypeFormData, UploadFile,
};
use crate::present::admin_price_label;
use crate::response::{page, render, success_many, success_one};
use crate::state::{session_digest, AppState};
use askama::Template;
use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use std::collections::HashMap;
use tower_cookies::Cookies;

pub const TAB_PROPERTIES: &str = "properties";
pub const TAB_EDITOR: &str = "add-property";

#[derive(Template)]
#[template(path = "admin_login.html")]
struct LoginPage {
    failed: bool,
}

pub struct PropertyRow {
    pub title: String,
    pub location: String,
    pub price: String,
    pub size: String,
    pub media_count: usize,
    pub edit_href: String,
    pub delete_action: String,
}

impl PropertyRow {
    fn new(p: &Property) -> Self {
        let id = urlencoding::encode(&p.id);
        PropertyRow {
            title: p.title.clone(),
            location: p.location_name().unwrap_or("N/A").to_string(),
            price: admin_price_label(&p.price),
            size: p.size.clone(),
            media_count: p.media.len(),
            edit_href: format!("/admin/dashboard?tab={}&edit={}", TAB_EDITOR, id),
            delete_action: format!("/admin/properties/{}/delete", id),
        }
    }
}

pub struct MediaTile {
    pub url: String,
    pub is_image: bool,
    pub is_featured: bool,
    pub delete_action: String,
}

impl MediaTile {
    fn new(m: &Media) -> Self {
        MediaTile {
            url: m.url.clone(),
            is_image: m.kind == MediaKind::Image,
            is_featured: m.is_featured,
            delete_action: format!("/admin/media/{}/delete", urlencoding::encode(&m.id)),
        }
    }
}

#[derive(Template)]
#[template(path = "admin_dashboard.html")]
struct DashboardPage {
    notice: Option<Notice>,
    dismiss_href: String,
    tab: &'static str,
    editor_href: String,
    editor_title: &'static str,
    submit_label: &'static str,
    rows: Vec<PropertyRow>,
    form: PropertyFormData,
    editing_id: String,
    price_value: String,
    features_text: String,
    current_media: Vec<MediaTile>,
    locations: Vec<Location>,
    property_types: Vec<PropertyType>,
    statuses: [PropertyStatus; 3],
}

/// Dashboard URL for a tab, keeping the property being edited.
fn dashboard_href(tab: &str, edit: Option<&str>) -> String {
    match edit.filter(|e| !e.is_empty()) {
        Some(id) => format!("/admin/dashboard?tab={}&edit={}", tab, urlencoding::encode(id)),
        None => format!("/admin/dashboard?tab={}", tab),
    }
}

fn redirect_with(tab: &str, edit: Option<&str>, notice: Notice) -> Redirect {
    Redirect::to(&format!("{}&{}", dashboard_href(tab, edit), notice.to_query()))
}

/// Banner text for a failed action.
fn failure_notice(e: &AppError) -> Notice {
    match e {
        AppError::Validation(m) | AppError::BadRequest(m) | AppError::Storage(m) => Notice::error(m.clone()),
        other => Notice::error(other.to_string()),
    }
}

fn render_dashboard(
    status: StatusCode,
    data: &DashboardData,
    editor: &PropertyEditor,
    tab: &'static str,
    notice: Option<Notice>,
) -> Result<Response, AppError> {
    let editing_id = editor.editing.clone().unwrap_or_default();
    let current_media = editor
        .editing
        .as_deref()
        .and_then(|id| data.property(id))
        .map(|p| p.media.iter().map(MediaTile::new).collect())
        .unwrap_or_default();
    let price_value = if editor.form.price == 0.0 && !editor.is_editing() {
        String::new()
    } else {
        editor.form.price.to_string()
    };
    let view = DashboardPage {
        notice,
        dismiss_href: dashboard_href(tab, editor.editing.as_deref()),
        tab,
        editor_href: dashboard_href(TAB_EDITOR, editor.editing.as_deref()),
        editor_title: editor.tab_title(),
        submit_label: if editor.is_editing() { "Update Property" } else { "Add Property" },
        rows: data.properties.iter().map(PropertyRow::new).collect(),
        form: editor.form.clone(),
        editing_id,
        price_value,
        features_text: editor.form.features.join("\n"),
        current_media,
        locations: data.locations.clone(),
        property_types: data.property_types.clone(),
        statuses: PropertyStatus::ALL,
    };
    render(status, &view)
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginParams {
    pub failed: Option<String>,
}

pub async fn login_form(Query(params): Query<LoginParams>) -> Result<Response, AppError> {
    page(&LoginPage {
        failed: params.failed.is_some(),
    })
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub token: String,
}

pub async fn login(State(state): State<AppState>, cookies: Cookies, Form(form): Form<LoginForm>) -> Redirect {
    let digest = session_digest(form.token.trim());
    if !constant_time_eq(&digest, state.admin_digest()) {
        tracing::warn!("admin sign-in rejected");
        return Redirect::to("/admin?failed=1");
    }
    tracing::info!("admin signed in");
    cookies.add(session_cookie(&digest));
    Redirect::to("/admin/dashboard")
}

pub async fn logout(cookies: Cookies) -> Redirect {
    cookies.remove(removal_cookie());
    Redirect::to("/admin")
}

#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    pub tab: Option<String>,
    pub edit: Option<String>,
    pub notice: Option<String>,
    pub level: Option<String>,
}

pub async fn dashboard(
    _session: AdminSession,
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Result<Response, AppError> {
    let data = DashboardData::load(&state.listings).await;
    let mut notice = Notice::from_query(params.notice.as_deref(), params.level.as_deref());
    let mut editor = PropertyEditor::new();

    if let Some(id) = params.edit.as_deref().filter(|id| !id.is_empty()) {
        match data.property(id) {
            Some(p) => editor.load_for_edit(p),
            None => notice = Some(Notice::error("Property not found")),
        }
    }
    let tab = match params.tab.as_deref() {
        Some(TAB_EDITOR) => TAB_EDITOR,
        Some(_) => TAB_PROPERTIES,
        None if editor.is_editing() => TAB_EDITOR,
        None => TAB_PROPERTIES,
    };
    render_dashboard(StatusCode::OK, &data, &editor, tab, notice)
}

/// Split a multipart body into text fields and picked files. Empty file inputs are skipped.
async fn read_submission(mut multipart: Multipart) -> Result<(HashMap<String, String>, Vec<UploadFile>), AppError> {
    let mut fields = HashMap::new();
    let mut files = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match field.file_name().map(str::to_string) {
            Some(file_name) => {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field.bytes().await.map_err(|e| AppError::BadRequest(e.to_string()))?;
                if file_name.is_empty() || bytes.is_empty() {
                    continue;
                }
                files.push(UploadFile {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            None => {
                let value = field.text().await.map_err(|e| AppError::BadRequest(e.to_string()))?;
                fields.insert(name, value);
            }
        }
    }
    Ok((fields, files))
}

/// `POST /admin/properties`: create or update, then upload the picked files.
/// A failed save re-renders the editor with what was submitted.
pub async fn save_property(
    _session: AdminSession,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let (fields, files) = match read_submission(multipart).await {
        Ok(parts) => parts,
        Err(e) => return Ok(redirect_with(TAB_EDITOR, None, failure_notice(&e)).into_response()),
    };
    let editing = fields
        .get("editing_id")
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let form = match PropertyFormData::from_fields(&fields) {
        Ok(form) => form,
        Err(e) => return Ok(redirect_with(TAB_EDITOR, editing.as_deref(), failure_notice(&e)).into_response()),
    };

    let mut editor = PropertyEditor {
        form,
        editing,
        files: Vec::new(),
    };
    editor.select_files(files);

    match editor.submit(&state.listings).await {
        Ok(outcome) => {
            if outcome.failed_uploads > 0 {
                tracing::warn!(
                    property_id = %outcome.property.id,
                    failed = outcome.failed_uploads,
                    uploaded = outcome.uploaded,
                    "property saved with failed uploads"
                );
            }
            Ok(redirect_with(TAB_PROPERTIES, None, Notice::success(outcome.message())).into_response())
        }
        Err(e) => {
            editor.files.clear();
            let data = DashboardData::load(&state.listings).await;
            render_dashboard(e.status(), &data, &editor, TAB_EDITOR, Some(failure_notice(&e)))
        }
    }
}

pub async fn delete_property(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Redirect {
    let notice = match state.listings.delete_property(&id).await {
        Ok(()) => Notice::success("Property deleted successfully"),
        Err(e) => failure_notice(&e),
    };
    redirect_with(TAB_PROPERTIES, None, notice)
}

pub async fn create_location(
    _session: AdminSession,
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Redirect {
    let edit = fields.get("edit").cloned();
    let result = match LocationFormData::from_fields(&fields) {
        Ok(form) => state.listings.create_location(&form).await.map(|_| ()),
        Err(e) => Err(e),
    };
    let notice = match result {
        Ok(()) => Notice::success("Location created successfully"),
        Err(e) => failure_notice(&e),
    };
    redirect_with(TAB_EDITOR, edit.as_deref(), notice)
}

pub async fn create_property_type(
    _session: AdminSession,
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Redirect {
    let edit = fields.get("edit").cloned();
    let result = match PropertyTypeFormData::from_fields(&fields) {
        Ok(form) => state.listings.create_property_type(&form).await.map(|_| ()),
        Err(e) => Err(e),
    };
    let notice = match result {
        Ok(()) => Notice::success("Property type created successfully"),
        Err(e) => failure_notice(&e),
    };
    redirect_with(TAB_EDITOR, edit.as_deref(), notice)
}

pub async fn delete_media(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(fields): Form<HashMap<String, String>>,
) -> Redirect {
    let edit = fields.get("edit").cloned();
    let notice = match state.listings.delete_media(&id).await {
        Ok(()) => Notice::success("Media deleted successfully"),
        Err(e) => failure_notice(&e),
    };
    redirect_with(TAB_EDITOR, edit.as_deref(), notice)
}

pub async fn api_properties(_session: AdminSession, State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(success_many(state.listings.get_properties().await?))
}

pub async fn api_property(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(success_one(state.listings.get_property(&id).await?))
}

pub async fn api_locations(_session: AdminSession, State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(success_many(state.listings.get_locations().await?))
}

pub async fn api_property_types(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok(success_many(state.listings.get_property_types().await?))
}
