//! Listing search, filtering and windowing.
//!
//! The pipeline runs over listings already materialized by the caller:
//! filter by kind, category, region, keyword and price bounds, rank with the
//! promotion-aware comparator, then slice the requested page.

use chrono::{DateTime, Utc};

use crate::domain::listing::Listing;
use crate::domain::types::{ListingKind, Price, PromotionTier, Slug, SortOption};
use crate::pagination::Pagination;
use crate::services::promotion::{effective_tier, rank_listings};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters used when searching or listing marketplace listings.
#[derive(Debug, Clone, Default)]
pub struct ListingQuery {
    /// Restrict to buy or rent listings.
    pub kind: Option<ListingKind>,
    /// Restrict to a category (route path segment).
    pub category_slug: Option<Slug>,
    /// Region filter, matched against the rendered location.
    pub region_slug: Option<Slug>,
    /// Free-text search over title, excerpt and description.
    pub keyword: Option<String>,
    /// Inclusive price bounds.
    pub price_min: Option<Price>,
    pub price_max: Option<Price>,
    /// Ordering applied after filtering.
    pub sort: SortOption,
    /// Page window; `None` returns the full result set.
    pub pagination: Option<Pagination>,
}

impl ListingQuery {
    pub fn kind(mut self, kind: ListingKind) -> Self {
        self.kind = Some(kind);
        self
    }
    pub fn category(mut self, slug: Slug) -> Self {
        self.category_slug = Some(slug);
        self
    }
    pub fn region(mut self, slug: Slug) -> Self {
        self.region_slug = Some(slug);
        self
    }
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }
    pub fn price_min(mut self, price: Price) -> Self {
        self.price_min = Some(price);
        self
    }
    pub fn price_max(mut self, price: Price) -> Self {
        self.price_max = Some(price);
        self
    }
    pub fn sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// One page of ranked results plus the pre-pagination total.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    pub total: usize,
    pub items: Vec<Listing>,
}

impl SearchPage {
    fn empty() -> Self {
        Self {
            total: 0,
            items: vec![],
        }
    }
}

fn matches(listing: &Listing, query: &ListingQuery) -> bool {
    if let Some(kind) = query.kind
        && listing.kind != kind
    {
        return false;
    }
    if let Some(category_slug) = &query.category_slug
        && listing.category.slug.as_ref() != Some(category_slug)
    {
        return false;
    }
    if let Some(region_slug) = &query.region_slug {
        let Some(location) = &listing.location else {
            return false;
        };
        if !location
            .display()
            .to_lowercase()
            .contains(region_slug.as_str())
        {
            return false;
        }
    }
    if let Some(keyword) = &query.keyword {
        let needle = keyword.to_lowercase();
        let hit = listing.title.as_str().to_lowercase().contains(&needle)
            || listing.excerpt.to_lowercase().contains(&needle)
            || listing.description.to_lowercase().contains(&needle);
        if !hit {
            return false;
        }
    }
    if let Some(min) = query.price_min
        && listing.price.get() < min.get()
    {
        return false;
    }
    if let Some(max) = query.price_max
        && listing.price.get() > max.get()
    {
        return false;
    }
    true
}

/// Filters, ranks and windows listings according to the query.
///
/// `total` counts all matches before pagination; a page past the end yields
/// an empty item list with the total intact.
pub fn search_listings(
    listings: &[Listing],
    query: &ListingQuery,
    now: DateTime<Utc>,
) -> SearchPage {
    let matched: Vec<Listing> = listings
        .iter()
        .filter(|l| matches(l, query))
        .cloned()
        .collect();
    let total = matched.len();
    let ranked = rank_listings(matched, query.sort, now);
    let items = match query.pagination {
        Some(pagination) => ranked
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.per_page)
            .collect(),
        None => ranked,
    };
    SearchPage { total, items }
}

/// Most recent listings first, windowed by `limit`/`offset`.
pub fn latest_listings(listings: &[Listing], limit: usize, offset: usize) -> SearchPage {
    if limit == 0 {
        return SearchPage {
            total: listings.len(),
            items: vec![],
        };
    }
    let mut sorted: Vec<Listing> = listings.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    let total = sorted.len();
    let items = sorted.into_iter().skip(offset).take(limit).collect();
    SearchPage { total, items }
}

/// Listings with a currently-active promotion, best tier first, capped at
/// `limit`. Feeds the homepage featured rail.
pub fn featured_listings(listings: &[Listing], limit: usize, now: DateTime<Utc>) -> Vec<Listing> {
    let promoted: Vec<Listing> = listings
        .iter()
        .filter(|l| effective_tier(l, now) != PromotionTier::None)
        .cloned()
        .collect();
    let mut ranked = rank_listings(promoted, SortOption::Featured, now);
    ranked.truncate(limit);
    ranked
}

/// Finds a listing by kind and slug, for detail pages.
pub fn find_listing_by_slug<'a>(
    listings: &'a [Listing],
    kind: ListingKind,
    slug: &Slug,
) -> Option<&'a Listing> {
    listings
        .iter()
        .find(|l| l.kind == kind && l.slug == *slug)
}

/// Detail-page lookup surfacing a missing listing as
/// [`ServiceError::NotFound`], so the route stays a thin wrapper.
pub fn listing_by_slug(
    listings: &[Listing],
    kind: ListingKind,
    slug: &Slug,
) -> ServiceResult<Listing> {
    find_listing_by_slug(listings, kind, slug)
        .cloned()
        .ok_or(ServiceError::NotFound)
}
