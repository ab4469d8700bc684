use serde::Deserialize;

use crate::domain::category::Category;
use crate::domain::types::{CategoryId, CategoryName, Slug, TypeConstraintError};

/// Category record as served by `GET /categories`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiCategory {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub level: Option<i32>,
    #[serde(default)]
    pub path: Option<Vec<String>>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl TryFrom<ApiCategory> for Category {
    type Error = TypeConstraintError;

    fn try_from(value: ApiCategory) -> Result<Self, Self::Error> {
        // An empty parent id means a root, not a malformed record.
        let parent_id = value
            .parent_id
            .and_then(|parent| CategoryId::new(parent).ok());
        Ok(Self {
            id: CategoryId::new(value.id)?,
            name: CategoryName::new(value.name)?,
            slug: Slug::new(value.slug)?,
            active: value.active,
            parent_id,
            level: value.level.unwrap_or(0),
            path: value.path.unwrap_or_default(),
        })
    }
}

/// Converts a category payload, skipping records that fail their structural
/// constraints instead of failing the whole page.
pub fn categories_from_api(payload: Vec<ApiCategory>) -> Vec<Category> {
    payload
        .into_iter()
        .filter_map(|api| match Category::try_from(api) {
            Ok(category) => Some(category),
            Err(e) => {
                log::warn!("Skipping malformed category record: {e}");
                None
            }
        })
        .collect()
}
