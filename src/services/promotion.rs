//! Promotion-aware listing ranking.
//!
//! A listing's stored promotion type only counts while the promotion is
//! running, so every evaluation takes the caller's clock as an explicit
//! parameter and nothing here caches an "is active" flag.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::domain::listing::Listing;
use crate::domain::types::{PromotionTier, PromotionType, SortOption};

/// True when the listing's promotion is currently running: a non-`none`
/// type with an expiry strictly in the future.
pub fn is_promotion_active(listing: &Listing, now: DateTime<Utc>) -> bool {
    if listing.promotion_type == PromotionType::None {
        return false;
    }
    match listing.promotion_expires_at {
        Some(expires_at) => expires_at > now,
        None => false,
    }
}

/// The display tier the listing is granted right now. Expired or
/// expiry-less promotions are downgraded to [`PromotionTier::None`].
pub fn effective_tier(listing: &Listing, now: DateTime<Utc>) -> PromotionTier {
    if is_promotion_active(listing, now) {
        listing.promotion_type.tier()
    } else {
        PromotionTier::None
    }
}

/// Total order over listings: active promotion tier first, then the mode's
/// price comparison where requested, then recency (most recent first).
///
/// Listings without a creation timestamp sort after everything else.
pub fn compare_listings(
    a: &Listing,
    b: &Listing,
    sort: SortOption,
    now: DateTime<Utc>,
) -> Ordering {
    let by_tier = effective_tier(a, now).cmp(&effective_tier(b, now));
    if by_tier != Ordering::Equal {
        return by_tier;
    }

    let by_price = match sort {
        SortOption::PriceAsc => a.price.get().total_cmp(&b.price.get()),
        SortOption::PriceDesc => b.price.get().total_cmp(&a.price.get()),
        SortOption::Newest | SortOption::Featured => Ordering::Equal,
    };
    if by_price != Ordering::Equal {
        return by_price;
    }

    // Option ordering puts None first, so the reversed comparison sorts
    // missing timestamps last.
    b.created_at.cmp(&a.created_at)
}

/// Stable-sorts listings with [`compare_listings`].
pub fn rank_listings(
    mut listings: Vec<Listing>,
    sort: SortOption,
    now: DateTime<Utc>,
) -> Vec<Listing> {
    listings.sort_by(|a, b| compare_listings(a, b, sort, now));
    listings
}
