use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::params::ListingParams;

/// Column the listing can be sorted by (allow-list).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Id,
    Brand,
    LicensePlate,
    Year,
    DriverName,
    FuelType,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Id,
        SortKey::Brand,
        SortKey::LicensePlate,
        SortKey::Year,
        SortKey::DriverName,
        SortKey::FuelType,
    ];

    /// Parameter spelling used in the query string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Brand => "brand",
            SortKey::LicensePlate => "licensePlate",
            SortKey::Year => "year",
            SortKey::DriverName => "driverName",
            SortKey::FuelType => "fuelType",
        }
    }

    /// SQL expression the key orders by.
    pub fn column(&self) -> &'static str {
        match self {
            SortKey::Id => "c.id",
            SortKey::Brand => "c.brand",
            SortKey::LicensePlate => "c.license_plate",
            SortKey::Year => "c.year",
            SortKey::DriverName => "c.driver_name",
            SortKey::FuelType => "ft.name",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Invalid sort key: {}", s))
    }
}

/// Sort direction; anything other than `asc`/`desc` is rejected by `FromStr`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    /// Spelling used by the index table widget.
    pub fn table_label(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ascending",
            SortDirection::Desc => "descending",
        }
    }

    /// Read the table widget spelling; anything but `descending` is ascending.
    pub fn from_table_label(label: &str) -> Self {
        if label == "descending" {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(anyhow::anyhow!("Invalid sort direction: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sort {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Sort {
    /// Token used by the sort picker, e.g. `"brand desc"`.
    pub fn token(&self) -> String {
        format!("{} {}", self.key, self.direction)
    }
}

/// Text column searched by the free-text query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Brand,
    LicensePlate,
    DriverName,
}

impl TextField {
    pub const SEARCHABLE: [TextField; 3] =
        [TextField::Brand, TextField::LicensePlate, TextField::DriverName];

    pub fn column(&self) -> &'static str {
        match self {
            TextField::Brand => "c.brand",
            TextField::LicensePlate => "c.license_plate",
            TextField::DriverName => "c.driver_name",
        }
    }
}

/// True when any of `fields` contains `text` (case-sensitive substring).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPredicate {
    pub text: String,
    pub fields: Vec<TextField>,
}

/// True when the car's fuel type name is one of `names`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuelTypePredicate {
    pub names: BTreeSet<String>,
}

impl FuelTypePredicate {
    pub fn names(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }
}

/// Normalized filter and ordering for the car listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub text: Option<TextPredicate>,
    pub fuel_types: Option<FuelTypePredicate>,
    pub sort: Sort,
}

impl FilterSpec {
    pub fn is_unfiltered(&self) -> bool {
        self.text.is_none() && self.fuel_types.is_none()
    }
}

/// Build the listing filter from raw page parameters.
///
/// Never fails: an unknown `sortKey` sorts by `id`, an unknown `direction`
/// sorts ascending, and empty `fuelType` segments are dropped.
pub fn build_filter_spec(params: &ListingParams) -> FilterSpec {
    let text = params
        .query
        .as_deref()
        .filter(|query| !query.is_empty())
        .map(|query| TextPredicate {
            text: query.to_string(),
            fields: TextField::SEARCHABLE.to_vec(),
        });

    let fuel_types = params
        .fuel_type
        .as_deref()
        .map(split_fuel_types)
        .filter(|names| !names.is_empty())
        .map(|names| FuelTypePredicate { names });

    let sort = Sort {
        key: params
            .sort_key
            .as_deref()
            .and_then(|key| key.parse().ok())
            .unwrap_or_default(),
        direction: params
            .direction
            .as_deref()
            .and_then(|direction| direction.parse().ok())
            .unwrap_or_default(),
    };

    FilterSpec {
        text,
        fuel_types,
        sort,
    }
}

fn split_fuel_types(raw: &str) -> BTreeSet<String> {
    fuel_type_names(raw).into_iter().collect()
}

/// Fuel type names of a `fuelType` value in the order given, without empty
/// segments or repeats.
pub fn fuel_type_names(raw: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in raw.split(',').filter(|name| !name.is_empty()) {
        if !names.iter().any(|seen| seen == name) {
            names.push(name.to_string());
        }
    }
    names
}
