use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    Condition, FilterId, ListingId, ListingKind, ListingTitle, Price, PromotionType, RentPeriod,
    Slug,
};

/// Maximum excerpt length in characters before the text is cut.
pub const EXCERPT_MAX_CHARS: usize = 150;

/// Category reference carried on a listing for display and routing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryRef {
    pub name: String,
    pub slug: Option<Slug>,
}

/// Where the equipment is located.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    pub region: String,
    pub city: String,
}

impl Location {
    /// Rendered form used on cards and matched by the region filter.
    pub fn display(&self) -> String {
        format!("{}, {}", self.city, self.region)
    }
}

/// A value for one of the category's filterable attributes.
///
/// The value is an opaque payload; ranking and filtering never inspect it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttributeValue {
    pub filter_id: FilterId,
    pub value: serde_json::Value,
}

/// A marketplace listing in its display form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: ListingId,
    pub slug: Slug,
    pub kind: ListingKind,
    pub title: ListingTitle,
    pub description: String,
    /// Short excerpt for cards, cut at [`EXCERPT_MAX_CHARS`].
    pub excerpt: String,
    pub price: Price,
    pub currency: String,
    /// Billing period, present on rent listings only.
    pub price_unit: Option<RentPeriod>,
    pub image_url: String,
    pub category: CategoryRef,
    pub location: Option<Location>,
    /// `None` when the backend timestamp was absent or unparseable; such
    /// listings sort after everything else under the recency tiebreak.
    pub created_at: Option<DateTime<Utc>>,
    pub condition: Option<Condition>,
    pub promotion_type: PromotionType,
    pub promotion_expires_at: Option<DateTime<Utc>>,
    pub attributes: Vec<AttributeValue>,
}

/// Cuts `description` at `max_chars` characters, trimming trailing
/// whitespace and appending an ellipsis when anything was removed.
pub fn excerpt(description: &str, max_chars: usize) -> String {
    if description.chars().count() <= max_chars {
        return description.to_string();
    }
    let cut: String = description.chars().take(max_chars).collect();
    let mut cut = cut.trim_end().to_string();
    cut.push('…');
    cut
}
