//! Cars domain actions - entry-point business logic
//!
//! Called from both the REST routes and the GraphQL resolvers.

pub mod listing;

pub use listing::{get_car, list_cars, list_fuel_types};
