//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs should carry these wrappers instead of raw primitives so
//! that identifiers, slugs and numeric constraints are enforced at the
//! boundary. Backend identifiers are opaque strings, never parsed further.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// A numeric value required to be non-negative was negative or invalid.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Macro to generate newtypes for opaque, non-empty string identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, rejecting empty or whitespace-only input.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned identifier.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

id_newtype!(CategoryId, "Unique identifier for a category.", "category id");
id_newtype!(ListingId, "Unique identifier for a listing.", "listing id");
id_newtype!(RegionId, "Unique identifier for a region.", "region id");
id_newtype!(CityId, "Unique identifier for a city.", "city id");
id_newtype!(
    FilterId,
    "Unique identifier for a category filter attribute.",
    "filter id"
);

non_empty_string_newtype!(
    CategoryName,
    "Category display name enforcing non-empty values.",
    "category name"
);
non_empty_string_newtype!(
    ListingTitle,
    "Listing title enforcing non-empty values.",
    "listing title"
);

/// URL-safe identifier used in routes and filters.
///
/// Slugs are trimmed and lowercased on construction, matching the backend's
/// normalization of slug lookups.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Constructs a trimmed, lowercased, non-empty slug.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = trim_and_require_non_empty(value, "slug")?;
        Ok(Self(trimmed.to_lowercase()))
    }

    /// Borrow the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned slug.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for Slug {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for Slug {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Slug {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl PartialEq<&str> for Slug {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<Slug> for &str {
    fn eq(&self, other: &Slug) -> bool {
        *self == other.as_str()
    }
}

/// Non-negative price value in standard currency units.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    /// Constructs a finite price that is zero or greater.
    pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NegativeNumber("price"))
        }
    }

    /// Returns the raw `f64` value.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Price {
    type Error = TypeConstraintError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl PartialEq<f64> for Price {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Price> for f64 {
    fn eq(&self, other: &Price) -> bool {
        *self == other.0
    }
}

/// Whether a listing is offered for sale or for rent.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Buy,
    Rent,
}

impl ListingKind {
    /// String representation used in routes and query strings.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Rent => "rent",
        }
    }
}

impl Display for ListingKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for ListingKind {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "buy" => Ok(Self::Buy),
            "rent" => Ok(Self::Rent),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "listing kind: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for ListingKind {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<ListingKind> for String {
    fn from(value: ListingKind) -> Self {
        value.as_str().to_string()
    }
}

/// Paid promotion level stored on a listing.
///
/// The stored value says nothing about whether the promotion is still
/// running; see [`crate::services::promotion::effective_tier`].
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum PromotionType {
    #[default]
    None,
    Highlighted,
    Featured,
    HomepageTop,
}

impl PromotionType {
    /// String representation used on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Highlighted => "highlighted",
            Self::Featured => "featured",
            Self::HomepageTop => "homepageTop",
        }
    }

    /// Display tier this promotion grants while active.
    pub const fn tier(self) -> PromotionTier {
        match self {
            Self::HomepageTop => PromotionTier::HomepageTop,
            Self::Featured => PromotionTier::Featured,
            Self::Highlighted => PromotionTier::Highlighted,
            Self::None => PromotionTier::None,
        }
    }
}

impl Display for PromotionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for PromotionType {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "none" => Ok(Self::None),
            "highlighted" => Ok(Self::Highlighted),
            "featured" => Ok(Self::Featured),
            "homepageTop" => Ok(Self::HomepageTop),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "promotion type: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for PromotionType {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<PromotionType> for String {
    fn from(value: PromotionType) -> Self {
        value.as_str().to_string()
    }
}

/// Display priority granted by a currently-active promotion.
///
/// Variant order doubles as sort order: a lower tier sorts first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PromotionTier {
    HomepageTop,
    Featured,
    Highlighted,
    None,
}

/// Billing period for rent listings.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RentPeriod {
    Day,
    Week,
    Month,
}

impl RentPeriod {
    /// String representation used on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl Display for RentPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for RentPeriod {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "rent period: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for RentPeriod {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<RentPeriod> for String {
    fn from(value: RentPeriod) -> Self {
        value.as_str().to_string()
    }
}

/// Sort mode selectable in the listing toolbar.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    Featured,
}

impl SortOption {
    /// String representation used in query strings.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::Featured => "featured",
        }
    }
}

impl Display for SortOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for SortOption {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "newest" => Ok(Self::Newest),
            "price_asc" => Ok(Self::PriceAsc),
            "price_desc" => Ok(Self::PriceDesc),
            "featured" => Ok(Self::Featured),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "sort option: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for SortOption {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<SortOption> for String {
    fn from(value: SortOption) -> Self {
        value.as_str().to_string()
    }
}

/// Physical condition of the offered equipment.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    New,
    LikeNew,
    Good,
    Fair,
}

impl Condition {
    /// String representation used on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::LikeNew => "like-new",
            Self::Good => "good",
            Self::Fair => "fair",
        }
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Condition {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "new" => Ok(Self::New),
            "like-new" => Ok(Self::LikeNew),
            "good" => Ok(Self::Good),
            "fair" => Ok(Self::Fair),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "condition: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for Condition {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<Condition> for String {
    fn from(value: Condition) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_identifiers() {
        let id = CategoryId::new("  cat-1  ").unwrap();
        assert_eq!(id.as_str(), "cat-1");
    }

    #[test]
    fn rejects_empty_identifiers() {
        let err = ListingId::new("   ").unwrap_err();
        assert_eq!(err, TypeConstraintError::EmptyString("listing id"));
    }

    #[test]
    fn slugs_are_lowercased() {
        let slug = Slug::new("  Wine-Barrels ").unwrap();
        assert_eq!(slug.as_str(), "wine-barrels");
    }

    #[test]
    fn price_allows_zero() {
        assert_eq!(Price::new(0.0).unwrap().get(), 0.0);
    }

    #[test]
    fn price_rejects_negative_and_non_finite() {
        assert_eq!(
            Price::new(-0.01).unwrap_err(),
            TypeConstraintError::NegativeNumber("price")
        );
        assert!(Price::new(f64::NAN).is_err());
    }

    #[test]
    fn promotion_type_round_trips_wire_values() {
        for raw in ["none", "highlighted", "featured", "homepageTop"] {
            let parsed = PromotionType::try_from(raw).unwrap();
            assert_eq!(parsed.as_str(), raw);
        }
        assert!(PromotionType::try_from("banner").is_err());
    }

    #[test]
    fn tier_order_matches_display_priority() {
        assert!(PromotionTier::HomepageTop < PromotionTier::Featured);
        assert!(PromotionTier::Featured < PromotionTier::Highlighted);
        assert!(PromotionTier::Highlighted < PromotionTier::None);
    }

    #[test]
    fn sort_option_parses_query_values() {
        assert_eq!(
            SortOption::try_from("price_asc").unwrap(),
            SortOption::PriceAsc
        );
        assert_eq!(SortOption::default(), SortOption::Newest);
        assert!(SortOption::try_from("cheapest").is_err());
    }
}
