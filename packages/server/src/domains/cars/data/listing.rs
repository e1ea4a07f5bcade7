use juniper::GraphQLObject;
use serde::Serialize;

use super::car::CarData;
use crate::domains::cars::listing::{Heading, ListingView, SortOption, FUEL_TYPE_CHOICES, HEADINGS, SORT_OPTIONS};

/// Listing page state echoed back to the client
#[derive(Debug, Clone, Serialize, GraphQLObject)]
#[serde(rename_all = "camelCase")]
#[graphql(description = "Resolved filter and sort state of the car listing")]
pub struct ListingViewData {
    pub query: String,
    pub sort_key: String,
    pub direction: String,
    /// Selected sort option, e.g. "year desc"
    pub sort_selected: String,
    pub sort_column_index: Option<i32>,
    /// "ascending" or "descending"
    pub sort_direction_label: String,
    pub applied_fuel_types: Vec<String>,
    pub applied_filter_label: Option<String>,
}

impl From<ListingView> for ListingViewData {
    fn from(view: ListingView) -> Self {
        Self {
            query: view.query,
            sort_key: view.sort_key.as_str().to_string(),
            direction: view.direction.as_str().to_string(),
            sort_selected: view.sort_selected,
            sort_column_index: view.sort_column_index.map(|index| index as i32),
            sort_direction_label: view.direction.table_label().to_string(),
            applied_fuel_types: view.applied_fuel_types,
            applied_filter_label: view.applied_filter_label,
        }
    }
}

/// Result of the cars listing query
#[derive(Debug, Clone, Serialize, GraphQLObject)]
#[serde(rename_all = "camelCase")]
pub struct CarListingData {
    pub cars: Vec<CarData>,
    pub view: ListingViewData,
}

#[derive(Debug, Clone, Serialize, GraphQLObject)]
#[serde(rename_all = "camelCase")]
pub struct HeadingData {
    pub id: String,
    pub title: String,
    pub sortable: bool,
}

impl From<&Heading> for HeadingData {
    fn from(heading: &Heading) -> Self {
        Self {
            id: heading.id.as_str().to_string(),
            title: heading.title.to_string(),
            sortable: heading.sortable,
        }
    }
}

#[derive(Debug, Clone, Serialize, GraphQLObject)]
#[serde(rename_all = "camelCase")]
pub struct SortOptionData {
    pub label: String,
    /// Token sent back as sort selection, e.g. "brand asc"
    pub value: String,
    pub direction_label: String,
}

impl From<&SortOption> for SortOptionData {
    fn from(option: &SortOption) -> Self {
        Self {
            label: option.label.to_string(),
            value: option.value(),
            direction_label: option.direction_label.to_string(),
        }
    }
}

/// Static options of the listing page (columns, sort picker, fuel filter)
#[derive(Debug, Clone, Serialize, GraphQLObject)]
#[serde(rename_all = "camelCase")]
pub struct CarListingOptionsData {
    pub headings: Vec<HeadingData>,
    pub sort_options: Vec<SortOptionData>,
    pub fuel_type_choices: Vec<String>,
}

impl CarListingOptionsData {
    pub fn current() -> Self {
        Self {
            headings: HEADINGS.iter().map(HeadingData::from).collect(),
            sort_options: SORT_OPTIONS.iter().map(SortOptionData::from).collect(),
            fuel_type_choices: FUEL_TYPE_CHOICES.iter().map(|name| name.to_string()).collect(),
        }
    }
}
