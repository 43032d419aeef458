use serde::{Deserialize, Serialize};

/// Contact form payload. Also the shape of an `inquiries` row, which is write-only here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InquiryFormData {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}
