pub mod car;
pub mod fuel_type;

pub use car::{listing_query, Car, NewCar};
pub use fuel_type::FuelType;
