//! ListingService: the data-access actions used by pages and the admin dashboard.

mod listings;
mod validation;
pub use listings::{object_key_from_url, storage_key, ListingService, HOME_LIMIT, SIMILAR_LIMIT};
pub use validation::FormFields;
