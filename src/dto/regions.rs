use serde::Deserialize;

use crate::domain::region::{City, Region};
use crate::domain::types::{CityId, RegionId, Slug, TypeConstraintError};

/// Region record as served by `GET /regions`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiRegion {
    pub id: String,
    pub slug: String,
    pub label: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// City record as served by `GET /cities?regionId=`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiCity {
    pub id: String,
    pub slug: String,
    pub label: String,
    pub region_id: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl TryFrom<ApiRegion> for Region {
    type Error = TypeConstraintError;

    fn try_from(value: ApiRegion) -> Result<Self, Self::Error> {
        Ok(Self {
            id: RegionId::new(value.id)?,
            slug: Slug::new(value.slug)?,
            label: value.label,
        })
    }
}

impl TryFrom<ApiCity> for City {
    type Error = TypeConstraintError;

    fn try_from(value: ApiCity) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CityId::new(value.id)?,
            slug: Slug::new(value.slug)?,
            label: value.label,
            region_id: RegionId::new(value.region_id)?,
        })
    }
}

/// Converts a region payload, skipping malformed records.
pub fn regions_from_api(payload: Vec<ApiRegion>) -> Vec<Region> {
    payload
        .into_iter()
        .filter_map(|api| match Region::try_from(api) {
            Ok(region) => Some(region),
            Err(e) => {
                log::warn!("Skipping malformed region record: {e}");
                None
            }
        })
        .collect()
}

/// Converts a city payload, skipping malformed records.
pub fn cities_from_api(payload: Vec<ApiCity>) -> Vec<City> {
    payload
        .into_iter()
        .filter_map(|api| match City::try_from(api) {
            Ok(city) => Some(city),
            Err(e) => {
                log::warn!("Skipping malformed city record: {e}");
                None
            }
        })
        .collect()
}
