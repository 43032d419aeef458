//! Messaging deep links for the contact buttons and the contact form.

use crate::model::{InquiryFormData, Property};
use crate::present::{location_label, price_label};

pub const COMPANY_NAME: &str = "Modia Properties";

/// Prefilled text behind the generic "Contact Us" buttons.
pub const GENERAL_MESSAGE: &str =
    "Hello Modia Properties, I'm interested in learning more about your available landed properties. Can you help me?";

/// Prefilled text behind the about page call to action.
pub const ABOUT_MESSAGE: &str =
    "Hello Modia Properties, I'm interested in learning more about your properties. Can you help me?";

/// `https://wa.me/{number}?text={message}` with the message percent-encoded.
pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(message))
}

/// Message built from the home page contact form.
pub fn inquiry_message(form: &InquiryFormData) -> String {
    format!(
        "Hello {company},\n\
         \n\
         I'd like to inquire about your landed properties.\n\
         \n\
         Name: {first} {last}\n\
         Email: {email}\n\
         Phone: {phone}\n\
         \n\
         Message:\n\
         {message}\n\
         \n\
         Thank you!",
        company = COMPANY_NAME,
        first = form.first_name.trim(),
        last = form.last_name.trim(),
        email = form.email.trim(),
        phone = form.phone.trim(),
        message = form.message.trim(),
    )
}

/// Message behind "Contact Agent" on a property page.
pub fn property_interest_message(property: &Property) -> String {
    format!(
        "Hello {company},\n\
         \n\
         I'm interested in the landed property for {kind}: {title} ({price}) in {location}.\n\
         \n\
         Could you provide more information about this property?\n\
         \n\
         Thank you!",
        company = COMPANY_NAME,
        kind = property.type_name().unwrap_or("Property"),
        title = property.title,
        price = price_label(&property.price),
        location = location_label(property),
    )
}
