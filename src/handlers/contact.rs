//! Home page contact form: turns the submission into a messaging deep link.

use crate::contact::{inquiry_message, whatsapp_link};
use crate::model::InquiryFormData;
use crate::state::AppState;
use axum::{extract::State, response::Redirect, Form};

/// `POST /contact`. Nothing is stored; the browser is sent to the chat link.
pub async fn contact(State(state): State<AppState>, Form(form): Form<InquiryFormData>) -> Redirect {
    let link = whatsapp_link(state.contact_number(), &inquiry_message(&form));
    tracing::debug!("contact form redirected to messaging link");
    Redirect::to(&link)
}
