//! Listing search parameters as they arrive from the URL.
//!
//! `ListingSearchForm` carries the raw strings from the route path and query
//! string; [`ListingSearchPayload`] is the typed form produced by `TryFrom`.

use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::{ListingKind, Price, Slug, SortOption, TypeConstraintError};
use crate::pagination::Pagination;
use crate::services::search::ListingQuery;

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Raw search parameters. `kind` and `category_slug` come from the route
/// path (`/buy/[categorySlug]`), the rest from the query string.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ListingSearchForm {
    #[validate(length(min = 1))]
    pub kind: String,
    #[serde(default)]
    pub category_slug: Option<String>,
    #[serde(default)]
    pub price_min: Option<String>,
    #[serde(default)]
    pub price_max: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
}

impl ListingSearchForm {
    /// Builds a form from already-decoded query pairs, the way the listing
    /// pages read their URL state. Unknown keys are ignored, the first value
    /// for a key wins.
    pub fn from_query_pairs<'a, I>(kind: &str, category_slug: Option<&str>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut form = Self {
            kind: kind.to_string(),
            category_slug: category_slug.map(str::to_string),
            ..Self::default()
        };
        for (key, value) in pairs {
            let slot = match key {
                "priceMin" => &mut form.price_min,
                "priceMax" => &mut form.price_max,
                "region" => &mut form.region,
                "sort" => &mut form.sort,
                "page" => &mut form.page,
                "q" => &mut form.q,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.to_string());
            }
        }
        form
    }
}

/// Typed search parameters ready to drive a [`ListingQuery`].
#[derive(Debug, Clone, PartialEq)]
pub struct ListingSearchPayload {
    pub kind: ListingKind,
    pub category_slug: Option<Slug>,
    pub price_min: Option<Price>,
    pub price_max: Option<Price>,
    pub region: Option<Slug>,
    pub sort: SortOption,
    /// 1-based page number, never below 1.
    pub page: usize,
    pub keyword: Option<String>,
}

impl ListingSearchPayload {
    /// Query over the materialized listing set, windowed at `per_page`.
    pub fn query(&self, per_page: usize) -> ListingQuery {
        ListingQuery {
            kind: Some(self.kind),
            category_slug: self.category_slug.clone(),
            region_slug: self.region.clone(),
            keyword: self.keyword.clone(),
            price_min: self.price_min,
            price_max: self.price_max,
            sort: self.sort,
            pagination: Some(Pagination {
                page: self.page,
                per_page,
            }),
        }
    }
}

#[derive(Debug, Error)]
pub enum SearchFormError {
    #[error("Listing search form validation failed: {0}")]
    Validation(String),
    #[error("Listing search form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for SearchFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for SearchFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

fn parse_price(
    field: &'static str,
    raw: Option<String>,
) -> Result<Option<Price>, SearchFormError> {
    let Some(raw) = non_empty(raw) else {
        return Ok(None);
    };
    let value: f64 = raw
        .parse()
        .map_err(|_| SearchFormError::Validation(format!("{field} is not a number: {raw}")))?;
    Ok(Some(Price::new(value)?))
}

impl TryFrom<ListingSearchForm> for ListingSearchPayload {
    type Error = SearchFormError;

    fn try_from(value: ListingSearchForm) -> Result<Self, Self::Error> {
        value.validate()?;
        let kind = ListingKind::try_from(value.kind.as_str())?;
        let category_slug = non_empty(value.category_slug)
            .map(Slug::new)
            .transpose()?;
        let region = non_empty(value.region).map(Slug::new).transpose()?;
        // Unknown sort values fall back to the default ordering rather than
        // failing the page.
        let sort = non_empty(value.sort)
            .and_then(|raw| SortOption::try_from(raw.as_str()).ok())
            .unwrap_or_default();
        // Garbage page numbers mean page one, matching the URL semantics of
        // the listing pages.
        let page = non_empty(value.page)
            .and_then(|raw| raw.parse::<usize>().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(1);

        Ok(Self {
            kind,
            category_slug,
            price_min: parse_price("priceMin", value.price_min)?,
            price_max: parse_price("priceMax", value.price_max)?,
            region,
            sort,
            page,
            keyword: non_empty(value.q),
        })
    }
}

/// URL path prefix for a listing collection: `/buy`, `/rent` or
/// `/buy/<category>`.
pub fn listing_base_path(kind: ListingKind, category_slug: Option<&Slug>) -> String {
    let base = format!("/{}", kind.as_str());
    match category_slug {
        Some(slug) => format!("{base}/{slug}"),
        None => base,
    }
}

/// Builds the query string for a search state, `?`-prefixed, or an empty
/// string when no parameter is set.
///
/// Key order is stable: `priceMin`, `priceMax`, `region`, `sort`, `page`,
/// `q`. The default sort and page one are omitted, keeping canonical URLs
/// short.
pub fn build_search_query_string(payload: &ListingSearchPayload) -> String {
    let mut pairs: Vec<(&str, String)> = Vec::new();
    if let Some(min) = payload.price_min {
        pairs.push(("priceMin", min.get().to_string()));
    }
    if let Some(max) = payload.price_max {
        pairs.push(("priceMax", max.get().to_string()));
    }
    if let Some(region) = &payload.region {
        pairs.push(("region", region.to_string()));
    }
    if payload.sort != SortOption::default() {
        pairs.push(("sort", payload.sort.to_string()));
    }
    if payload.page > 1 {
        pairs.push(("page", payload.page.to_string()));
    }
    if let Some(keyword) = &payload.keyword {
        pairs.push(("q", keyword.clone()));
    }
    if pairs.is_empty() {
        return String::new();
    }
    let encoded: Vec<String> = pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect();
    format!("?{}", encoded.join("&"))
}
