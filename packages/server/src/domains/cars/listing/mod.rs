//! Car listing query translation.
//!
//! Query string parameters of the cars page (`query`, `sortKey`, `direction`,
//! `fuelType`) are parsed into [`ListingParams`], normalized into a
//! [`FilterSpec`] and executed by [`Car::find_filtered`](super::models::Car::find_filtered).
//! Invalid input never errors; it falls back to the default ordering.

pub mod params;
pub mod filter;
pub mod view;

pub use params::ListingParams;
pub use filter::{
    build_filter_spec, FilterSpec, FuelTypePredicate, Sort, SortDirection, SortKey, TextField,
    TextPredicate,
};
pub use view::{
    apply_column_sort, apply_fuel_selection, apply_sort_token, clear_filters, Heading, ListingView,
    SortOption, FUEL_TYPE_CHOICES, HEADINGS, SORT_OPTIONS,
};
