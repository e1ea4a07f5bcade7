pub mod actions;
pub mod data;
pub mod listing;
pub mod models;

// Re-export data types (GraphQL / JSON types)
pub use data::{CarData, CarListingData, CarListingOptionsData, FuelTypeData, ListingViewData};

// Re-export listing query types
pub use listing::{build_filter_spec, FilterSpec, ListingParams, ListingView, SortDirection, SortKey};

// Re-export models (domain models)
pub use models::{Car, FuelType};
