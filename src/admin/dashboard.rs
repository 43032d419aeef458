use crate::model::{Location, Property, PropertyType};
use crate::service::ListingService;

/// Everything the dashboard tables and selects need.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardData {
    pub properties: Vec<Property>,
    pub locations: Vec<Location>,
    pub property_types: Vec<PropertyType>,
}

impl DashboardData {
    /// Issue the three fetches concurrently and wait for all of them. A failed
    /// fetch leaves its list empty; the failure is already logged by the service.
    pub async fn load(service: &ListingService) -> Self {
        let (properties, locations, property_types) = tokio::join!(
            service.get_properties(),
            service.get_locations(),
            service.get_property_types(),
        );
        DashboardData {
            properties: properties.unwrap_or_default(),
            locations: locations.unwrap_or_default(),
            property_types: property_types.unwrap_or_default(),
        }
    }

    pub fn property(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }
}
