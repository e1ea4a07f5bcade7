pub mod car;
pub mod listing;

pub use car::{CarData, FuelTypeData};
pub use listing::{
    CarListingData, CarListingOptionsData, HeadingData, ListingViewData, SortOptionData,
};
