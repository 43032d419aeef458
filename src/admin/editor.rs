//! Property editor state for the admin dashboard.

use crate::error::AppError;
use crate::model::{Price, Property, PropertyFormData, UploadFile};
use crate::service::ListingService;

/// Result of a successful submit.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitOutcome {
    pub property: Property,
    pub created: bool,
    pub uploaded: usize,
    pub failed_uploads: usize,
}

impl SubmitOutcome {
    pub fn message(&self) -> &'static str {
        if self.created {
            "Property created successfully"
        } else {
            "Property updated successfully"
        }
    }
}

/// Form fields, the property being edited (if any) and the picked files.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyEditor {
    pub form: PropertyFormData,
    /// Id of the property being edited; `None` means the form creates a new one.
    pub editing: Option<String>,
    pub files: Vec<UploadFile>,
}

impl PropertyEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy a stored property into the form and switch to edit mode.
    pub fn load_for_edit(&mut self, property: &Property) {
        let price = match &property.price {
            Price::Amount(n) => *n,
            Price::Label(s) => s.replace(',', "").trim().parse().unwrap_or(0.0),
        };
        self.form = PropertyFormData {
            title: property.title.clone(),
            description: property.description.clone().unwrap_or_default(),
            price,
            size: property.size.clone(),
            location_id: property.location_id.clone().unwrap_or_default(),
            property_type_id: property.property_type_id.clone().unwrap_or_default(),
            bedrooms: property.bedrooms.unwrap_or(0),
            bathrooms: property.bathrooms.unwrap_or(0),
            features: property.features.clone(),
            is_featured: property.is_featured,
            status: property.status.unwrap_or_default(),
        };
        self.files.clear();
        self.editing = Some(property.id.clone());
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn select_files(&mut self, files: Vec<UploadFile>) {
        self.files = files;
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Heading of the editor tab.
    pub fn tab_title(&self) -> &'static str {
        if self.is_editing() {
            "Edit Property"
        } else {
            "Add Property"
        }
    }

    /// Create or update the property, then upload the picked files one at a
    /// time; the first file becomes the featured media. Upload failures are
    /// logged and skipped. On success the editor is reset.
    pub async fn submit(&mut self, service: &ListingService) -> Result<SubmitOutcome, AppError> {
        let created = self.editing.is_none();
        let property = match &self.editing {
            Some(id) => service.update_property(id, &self.form).await?,
            None => service.create_property(&self.form).await?,
        };

        let mut uploaded = 0;
        let mut failed_uploads = 0;
        for (index, file) in std::mem::take(&mut self.files).into_iter().enumerate() {
            let kind = file.kind();
            let name = file.file_name.clone();
            match service.upload_property_media(&property.id, file, kind, index == 0).await {
                Ok(_) => uploaded += 1,
                Err(e) => {
                    failed_uploads += 1;
                    tracing::error!(error = %e, file = %name, property_id = %property.id, "media upload failed; continuing");
                }
            }
        }

        self.reset();
        Ok(SubmitOutcome {
            property,
            created,
            uploaded,
            failed_uploads,
        })
    }
}
