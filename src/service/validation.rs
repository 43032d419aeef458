//! Form field parsing. Mirrors what the HTML inputs enforce: required fields,
//! numeric fields, enumerated selects. Everything else is left to the backend.

use crate::error::AppError;
use crate::model::{InquiryFormData, LocationFormData, PropertyFormData, PropertyStatus, PropertyTypeFormData};
use std::collections::HashMap;

/// Submitted text fields of one form.
pub struct FormFields<'a> {
    fields: &'a HashMap<String, String>,
}

impl<'a> FormFields<'a> {
    pub fn new(fields: &'a HashMap<String, String>) -> Self {
        FormFields { fields }
    }

    /// Trimmed value; absent fields read as empty.
    pub fn text(&self, name: &str) -> String {
        self.fields.get(name).map(|v| v.trim().to_string()).unwrap_or_default()
    }

    pub fn required(&self, name: &str) -> Result<String, AppError> {
        let v = self.text(name);
        if v.is_empty() {
            return Err(AppError::Validation(format!("{} is required", name)));
        }
        Ok(v)
    }

    pub fn number(&self, name: &str) -> Result<f64, AppError> {
        let v = self.required(name)?;
        v.replace(',', "")
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| AppError::Validation(format!("{} must be a number", name)))
    }

    /// Optional whole number; blank reads as 0.
    pub fn count(&self, name: &str) -> Result<i32, AppError> {
        let v = self.text(name);
        if v.is_empty() {
            return Ok(0);
        }
        v.parse::<i32>()
            .ok()
            .filter(|n| *n >= 0)
            .ok_or_else(|| AppError::Validation(format!("{} must be a whole number", name)))
    }

    /// Checkbox semantics: present as `on`/`true`/`1` means checked.
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.text(name).to_lowercase().as_str(), "on" | "true" | "1" | "yes")
    }

    /// One entry per line or comma.
    pub fn list(&self, name: &str) -> Vec<String> {
        self.text(name)
            .split(|c: char| c == '\n' || c == ',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

impl PropertyFormData {
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self, AppError> {
        let f = FormFields::new(fields);
        let status_raw = f.text("status");
        let status = if status_raw.is_empty() {
            PropertyStatus::Available
        } else {
            status_raw.parse::<PropertyStatus>().map_err(AppError::Validation)?
        };
        Ok(PropertyFormData {
            title: f.required("title")?,
            description: f.text("description"),
            price: f.number("price")?,
            size: f.required("size")?,
            location_id: f.required("location_id")?,
            property_type_id: f.required("property_type_id")?,
            bedrooms: f.count("bedrooms")?,
            bathrooms: f.count("bathrooms")?,
            features: f.list("features"),
            is_featured: f.flag("is_featured"),
            status,
        })
    }
}

impl LocationFormData {
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self, AppError> {
        let f = FormFields::new(fields);
        Ok(LocationFormData {
            name: f.required("name")?,
            city: f.required("city")?,
            state: f.required("state")?,
        })
    }
}

impl PropertyTypeFormData {
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self, AppError> {
        let f = FormFields::new(fields);
        Ok(PropertyTypeFormData {
            name: f.required("name")?,
            description: f.text("description"),
        })
    }
}

impl InquiryFormData {
    /// Required name and email; the email must at least look like one.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.first_name.trim().is_empty() {
            return Err(AppError::Validation("first_name is required".into()));
        }
        let email = self.email.trim();
        if email.len() < 3 || !email.contains('@') {
            return Err(AppError::Validation("email must be a valid email".into()));
        }
        if self.message.trim().is_empty() {
            return Err(AppError::Validation("message is required".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn parses_property_form() {
        let form = PropertyFormData::from_fields(&fields(&[
            ("title", " 4 Bedroom Duplex "),
            ("price", "1,500,000"),
            ("size", "400Sqm"),
            ("location_id", "loc"),
            ("property_type_id", "type"),
            ("bedrooms", "4"),
            ("bathrooms", ""),
            ("features", "Fenced\nGood road, Water"),
            ("is_featured", "on"),
            ("status", "sold"),
        ]))
        .unwrap();
        assert_eq!(form.title, "4 Bedroom Duplex");
        assert_eq!(form.price, 1_500_000.0);
        assert_eq!(form.bedrooms, 4);
        assert_eq!(form.bathrooms, 0);
        assert_eq!(form.features, vec!["Fenced", "Good road", "Water"]);
        assert!(form.is_featured);
        assert_eq!(form.status, PropertyStatus::Sold);
    }

    #[test]
    fn rejects_missing_and_non_numeric() {
        let err = PropertyFormData::from_fields(&fields(&[("price", "10")])).unwrap_err();
        assert_eq!(err.to_string(), "validation: title is required");

        let err = PropertyFormData::from_fields(&fields(&[
            ("title", "t"),
            ("price", "cheap"),
            ("size", "s"),
            ("location_id", "l"),
            ("property_type_id", "p"),
        ]))
        .unwrap_err();
        assert_eq!(err.to_string(), "validation: price must be a number");
    }

    #[test]
    fn location_needs_city_and_state() {
        assert!(LocationFormData::from_fields(&fields(&[("name", "Kuje")])).is_err());
        let loc = LocationFormData::from_fields(&fields(&[("name", "Kuje"), ("city", "Abuja"), ("state", "FCT")]))
            .unwrap();
        assert_eq!(loc.state, "FCT");
    }

    #[test]
    fn inquiry_email_shape() {
        let mut inquiry = InquiryFormData {
            first_name: "Ada".into(),
            email: "ada".into(),
            message: "Hi".into(),
            ..Default::default()
        };
        assert!(inquiry.validate().is_err());
        inquiry.email = "ada@example.com".into();
        assert!(inquiry.validate().is_ok());
    }
}
