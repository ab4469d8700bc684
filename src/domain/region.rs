use serde::{Deserialize, Serialize};

use crate::domain::types::{CityId, RegionId, Slug};

/// A wine region used for location filtering and `/location/[slug]` routes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Region {
    pub id: RegionId,
    pub slug: Slug,
    pub label: String,
}

/// A city within a region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct City {
    pub id: CityId,
    pub slug: Slug,
    pub label: String,
    pub region_id: RegionId,
}
