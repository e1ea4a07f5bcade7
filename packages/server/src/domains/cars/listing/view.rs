use serde::Serialize;

use super::params::ListingParams;
use super::filter::{fuel_type_names, FilterSpec, SortDirection, SortKey};

/// Column of the cars table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Heading {
    pub id: SortKey,
    pub title: &'static str,
    pub sortable: bool,
}

pub const HEADINGS: [Heading; 6] = [
    Heading { id: SortKey::Id, title: "ID", sortable: true },
    Heading { id: SortKey::Brand, title: "Brand", sortable: true },
    Heading { id: SortKey::LicensePlate, title: "License Plate", sortable: false },
    Heading { id: SortKey::Year, title: "Year", sortable: true },
    Heading { id: SortKey::DriverName, title: "Driver name", sortable: false },
    Heading { id: SortKey::FuelType, title: "Fuel type", sortable: false },
];

/// Entry of the sort picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortOption {
    pub key: SortKey,
    pub direction: SortDirection,
    pub label: &'static str,
    pub direction_label: &'static str,
}

impl SortOption {
    pub fn value(&self) -> String {
        format!("{} {}", self.key, self.direction)
    }
}

pub const SORT_OPTIONS: [SortOption; 6] = [
    SortOption { key: SortKey::Id, direction: SortDirection::Asc, label: "ID", direction_label: "Ascending" },
    SortOption { key: SortKey::Id, direction: SortDirection::Desc, label: "ID", direction_label: "Descending" },
    SortOption { key: SortKey::Brand, direction: SortDirection::Asc, label: "Brand", direction_label: "A-Z" },
    SortOption { key: SortKey::Brand, direction: SortDirection::Desc, label: "Brand", direction_label: "Z-A" },
    SortOption { key: SortKey::Year, direction: SortDirection::Asc, label: "Year", direction_label: "Oldest first" },
    SortOption { key: SortKey::Year, direction: SortDirection::Desc, label: "Year", direction_label: "Newest first" },
];

/// Fuel types offered by the filter.
pub const FUEL_TYPE_CHOICES: [&str; 3] = ["Diesel", "Petrol", "Electric"];

/// State of the listing page derived from the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingView {
    pub query: String,
    pub sort_key: SortKey,
    pub direction: SortDirection,
    /// Token of the selected sort option, e.g. `"year desc"`
    pub sort_selected: String,
    pub sort_column_index: Option<usize>,
    pub applied_fuel_types: Vec<String>,
    /// Chip label of the applied fuel filter, e.g. `"Fuel: Diesel, Electric"`
    pub applied_filter_label: Option<String>,
}

impl ListingView {
    pub fn new(params: &ListingParams, spec: &FilterSpec) -> Self {
        // Chips follow the URL order; the predicate itself is a set
        let applied_fuel_types = match (&spec.fuel_types, params.fuel_type.as_deref()) {
            (Some(_), Some(raw)) => fuel_type_names(raw),
            _ => Vec::new(),
        };

        let applied_filter_label = (!applied_fuel_types.is_empty())
            .then(|| format!("Fuel: {}", applied_fuel_types.join(", ")));

        Self {
            query: params.query.clone().unwrap_or_default(),
            sort_key: spec.sort.key,
            direction: spec.sort.direction,
            sort_selected: spec.sort.token(),
            sort_column_index: HEADINGS.iter().position(|h| h.id == spec.sort.key),
            applied_fuel_types,
            applied_filter_label,
        }
    }
}

/// Params after picking a sort option token such as `"brand desc"`.
///
/// Tokens without a space leave the params untouched.
pub fn apply_sort_token(params: &ListingParams, token: &str) -> ListingParams {
    match token.split_once(' ') {
        Some((key, direction)) => params.merge([("sortKey", key), ("direction", direction)]),
        None => params.clone(),
    }
}

/// Params after clicking a sortable column header.
pub fn apply_column_sort(params: &ListingParams, heading_index: usize, table_label: &str) -> ListingParams {
    match HEADINGS.get(heading_index) {
        Some(heading) => params.merge([
            ("sortKey", heading.id.as_str()),
            ("direction", SortDirection::from_table_label(table_label).as_str()),
        ]),
        None => params.clone(),
    }
}

/// Params after changing the fuel filter selection; an empty selection clears it.
pub fn apply_fuel_selection(params: &ListingParams, selected: &[String]) -> ListingParams {
    let joined = selected.join(",");
    params.merge([("fuelType", joined.as_str())])
}

/// Params after "clear all": query and fuel filter removed, sort kept.
pub fn clear_filters(params: &ListingParams) -> ListingParams {
    params.merge([("query", ""), ("fuelType", "")])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::cars::listing::build_filter_spec;

    fn view(raw: &str) -> ListingView {
        let params = ListingParams::from_query_string(raw);
        let spec = build_filter_spec(&params);
        ListingView::new(&params, &spec)
    }

    #[test]
    fn test_default_view() {
        let view = view("");

        assert_eq!(view.sort_selected, "id asc");
        assert_eq!(view.sort_column_index, Some(0));
        assert!(view.applied_fuel_types.is_empty());
        assert_eq!(view.applied_filter_label, None);
        assert_eq!(view.query, "");
    }

    #[test]
    fn test_view_reflects_filters() {
        let view = view("query=BMW&sortKey=year&direction=desc&fuelType=Electric,Diesel");

        assert_eq!(view.query, "BMW");
        assert_eq!(view.sort_selected, "year desc");
        assert_eq!(view.sort_column_index, Some(3));
        assert_eq!(view.applied_fuel_types, vec!["Electric", "Diesel"]);
        assert_eq!(view.applied_filter_label.as_deref(), Some("Fuel: Electric, Diesel"));
    }

    #[test]
    fn test_applied_fuel_types_drop_repeats() {
        let view = view("fuelType=Petrol,Diesel,Petrol,");

        assert_eq!(view.applied_fuel_types, vec!["Petrol", "Diesel"]);
        assert_eq!(view.applied_filter_label.as_deref(), Some("Fuel: Petrol, Diesel"));
    }

    #[test]
    fn test_sort_options_values() {
        let values: Vec<String> = SORT_OPTIONS.iter().map(SortOption::value).collect();
        assert_eq!(
            values,
            vec!["id asc", "id desc", "brand asc", "brand desc", "year asc", "year desc"]
        );
    }

    #[test]
    fn test_apply_sort_token() {
        let params = ListingParams::from_query_string("query=kia");
        let next = apply_sort_token(&params, "brand desc");

        assert_eq!(next.to_query_string(), "query=kia&sortKey=brand&direction=desc");
        assert_eq!(apply_sort_token(&params, "brand"), params);
    }

    #[test]
    fn test_apply_column_sort() {
        let next = apply_column_sort(&ListingParams::default(), 3, "descending");
        assert_eq!(next.sort_key.as_deref(), Some("year"));
        assert_eq!(next.direction.as_deref(), Some("desc"));

        assert_eq!(apply_column_sort(&ListingParams::default(), 9, "ascending"), ListingParams::default());
    }

    #[test]
    fn test_fuel_selection_and_clear() {
        let params = ListingParams::from_query_string("query=x&sortKey=brand");
        let selected = vec!["Diesel".to_string(), "Petrol".to_string()];

        let filtered = apply_fuel_selection(&params, &selected);
        assert_eq!(filtered.fuel_type.as_deref(), Some("Diesel,Petrol"));

        let cleared = clear_filters(&filtered);
        assert_eq!(cleared.query, None);
        assert_eq!(cleared.fuel_type, None);
        assert_eq!(cleared.sort_key.as_deref(), Some("brand"));
    }
}
