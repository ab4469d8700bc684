use serde::Deserialize;

use crate::domain::listing::{
    AttributeValue, CategoryRef, EXCERPT_MAX_CHARS, Listing, Location, excerpt,
};
use crate::domain::types::{
    Condition, FilterId, ListingId, ListingKind, ListingTitle, Price, PromotionType, RentPeriod,
    Slug, TypeConstraintError,
};

use super::parse_timestamp;

/// Image shown when a listing carries neither a thumbnail nor gallery images.
pub const FALLBACK_IMAGE: &str = "/placeholder.svg";

/// Category reference embedded in a product payload.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiProductCategory {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

/// Location embedded in a product payload.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiLocation {
    pub region: String,
    pub city: String,
}

/// Attribute value from the category's filter set.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiAttribute {
    pub filter_id: String,
    pub value: serde_json::Value,
}

/// Product record as served by `GET /products`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiProduct {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    /// `sell` or `rent` on the wire.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub category: Option<ApiProductCategory>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub attributes: Vec<ApiAttribute>,
    pub price: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub rent_period: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub location: Option<ApiLocation>,
    /// Loose key-value specifications; only `condition` is lifted out, the
    /// rest stays opaque.
    #[serde(default)]
    pub specifications: Option<serde_json::Value>,
    #[serde(default)]
    pub promotion_type: Option<String>,
    #[serde(default)]
    pub promotion_expires_at: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl TryFrom<ApiProduct> for Listing {
    type Error = TypeConstraintError;

    fn try_from(value: ApiProduct) -> Result<Self, Self::Error> {
        // Anything the backend does not call `sell` is offered for rent.
        let kind = if value.kind == "sell" {
            ListingKind::Buy
        } else {
            ListingKind::Rent
        };

        let price_unit = match (kind, non_empty(value.rent_period)) {
            (ListingKind::Rent, Some(period)) => {
                Some(RentPeriod::try_from(period.as_str()).unwrap_or(RentPeriod::Day))
            }
            _ => None,
        };

        let image_url = non_empty(value.thumbnail)
            .or_else(|| value.images.into_iter().find(|i| !i.trim().is_empty()))
            .unwrap_or_else(|| FALLBACK_IMAGE.to_string());

        let category = match value.category {
            Some(api) => CategoryRef {
                name: api.name,
                slug: api.slug.and_then(|s| Slug::new(s).ok()),
            },
            None => CategoryRef {
                name: String::new(),
                slug: None,
            },
        };

        let location = value.location.map(|l| Location {
            region: l.region,
            city: l.city,
        });

        let promotion_type = value
            .promotion_type
            .as_deref()
            .and_then(|raw| PromotionType::try_from(raw).ok())
            .unwrap_or_default();

        let condition = value
            .specifications
            .as_ref()
            .and_then(|specs| specs.get("condition"))
            .and_then(|raw| raw.as_str())
            .and_then(|raw| Condition::try_from(raw).ok());

        let attributes = value
            .attributes
            .into_iter()
            .filter_map(|attr| match FilterId::new(attr.filter_id) {
                Ok(filter_id) => Some(AttributeValue {
                    filter_id,
                    value: attr.value,
                }),
                Err(e) => {
                    log::warn!("Skipping attribute with malformed filter id: {e}");
                    None
                }
            })
            .collect();

        let excerpt = excerpt(&value.description, EXCERPT_MAX_CHARS);

        Ok(Self {
            id: ListingId::new(value.id)?,
            slug: Slug::new(value.slug)?,
            kind,
            title: ListingTitle::new(value.title)?,
            description: value.description,
            excerpt,
            price: Price::new(value.price)?,
            currency: non_empty(value.currency).unwrap_or_else(|| "GEL".to_string()),
            price_unit,
            image_url,
            category,
            location,
            created_at: parse_timestamp("created_at", value.created_at.as_deref()),
            condition,
            promotion_type,
            promotion_expires_at: parse_timestamp(
                "promotion_expires_at",
                value.promotion_expires_at.as_deref(),
            ),
            attributes,
        })
    }
}

/// Converts a product payload, skipping records that fail their structural
/// constraints instead of failing the whole page.
pub fn listings_from_api(payload: Vec<ApiProduct>) -> Vec<Listing> {
    payload
        .into_iter()
        .filter_map(|api| match Listing::try_from(api) {
            Ok(listing) => Some(listing),
            Err(e) => {
                log::warn!("Skipping malformed product record: {e}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_product(id: &str) -> ApiProduct {
        ApiProduct {
            id: id.to_string(),
            title: "Oak barrel 225l".to_string(),
            slug: format!("oak-barrel-{id}"),
            description: "Seasoned French oak barrel.".to_string(),
            kind: "sell".to_string(),
            category: Some(ApiProductCategory {
                name: "Barrels".to_string(),
                slug: Some("barrels".to_string()),
            }),
            category_id: None,
            attributes: vec![],
            price: 450.0,
            currency: None,
            rent_period: None,
            images: vec![],
            thumbnail: None,
            location: Some(ApiLocation {
                region: "Kakheti".to_string(),
                city: "Telavi".to_string(),
            }),
            specifications: None,
            promotion_type: None,
            promotion_expires_at: None,
            is_featured: false,
            created_at: Some("2024-03-01T12:00:00Z".to_string()),
        }
    }

    #[test]
    fn sell_maps_to_buy_with_currency_default() {
        let listing = Listing::try_from(api_product("p1")).unwrap();
        assert_eq!(listing.kind, ListingKind::Buy);
        assert_eq!(listing.currency, "GEL");
        assert_eq!(listing.image_url, FALLBACK_IMAGE);
        assert!(listing.price_unit.is_none());
        assert!(listing.created_at.is_some());
    }

    #[test]
    fn rent_period_degrades_to_day() {
        let mut api = api_product("p2");
        api.kind = "rent".to_string();
        api.rent_period = Some("hour".to_string());
        let listing = Listing::try_from(api).unwrap();
        assert_eq!(listing.kind, ListingKind::Rent);
        assert_eq!(listing.price_unit, Some(RentPeriod::Day));
    }

    #[test]
    fn rent_without_period_has_no_price_unit() {
        let mut api = api_product("p3");
        api.kind = "rent".to_string();
        let listing = Listing::try_from(api).unwrap();
        assert!(listing.price_unit.is_none());
    }

    #[test]
    fn thumbnail_falls_back_to_first_image() {
        let mut api = api_product("p4");
        api.thumbnail = Some("  ".to_string());
        api.images = vec![String::new(), "https://img.example/b.jpg".to_string()];
        let listing = Listing::try_from(api).unwrap();
        assert_eq!(listing.image_url, "https://img.example/b.jpg");
    }

    #[test]
    fn condition_is_lifted_from_specifications() {
        let mut api = api_product("p11");
        api.specifications = Some(serde_json::json!({
            "condition": "like-new",
            "brand": "Vaslin"
        }));
        let listing = Listing::try_from(api).unwrap();
        assert_eq!(listing.condition, Some(Condition::LikeNew));

        let mut unknown = api_product("p12");
        unknown.specifications = Some(serde_json::json!({ "condition": "used" }));
        let listing = Listing::try_from(unknown).unwrap();
        assert!(listing.condition.is_none());
    }

    #[test]
    fn unknown_promotion_type_decodes_as_none() {
        let mut api = api_product("p5");
        api.promotion_type = Some("banner".to_string());
        let listing = Listing::try_from(api).unwrap();
        assert_eq!(listing.promotion_type, PromotionType::None);
    }

    #[test]
    fn unparseable_created_at_becomes_none() {
        let mut api = api_product("p6");
        api.created_at = Some("yesterday".to_string());
        let listing = Listing::try_from(api).unwrap();
        assert!(listing.created_at.is_none());
    }

    #[test]
    fn long_description_is_excerpted() {
        let mut api = api_product("p7");
        api.description = "d".repeat(300);
        let listing = Listing::try_from(api).unwrap();
        assert_eq!(listing.excerpt.chars().count(), EXCERPT_MAX_CHARS + 1);
        assert!(listing.excerpt.ends_with('…'));
        assert_eq!(listing.description.len(), 300);
    }

    #[test]
    fn malformed_records_are_skipped() {
        let mut bad = api_product("p8");
        bad.price = f64::NAN;
        let listings = listings_from_api(vec![api_product("p9"), bad]);
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].id, "p9");
    }

    #[test]
    fn decodes_backend_payload() {
        let payload = r#"[{
            "id": "p10",
            "title": "Grape press",
            "slug": "grape-press",
            "description": "Manual basket press.",
            "type": "rent",
            "rentPeriod": "week",
            "price": 30,
            "currency": "GEL",
            "promotionType": "featured",
            "promotionExpiresAt": "2030-01-01T00:00:00Z",
            "attributes": [{"filterId": "f1", "value": ["manual"]}],
            "createdAt": "2024-05-01T00:00:00Z"
        }]"#;
        let decoded: Vec<ApiProduct> = serde_json::from_str(payload).unwrap();
        let listings = listings_from_api(decoded);
        assert_eq!(listings.len(), 1);
        let listing = &listings[0];
        assert_eq!(listing.kind, ListingKind::Rent);
        assert_eq!(listing.price_unit, Some(RentPeriod::Week));
        assert_eq!(listing.promotion_type, PromotionType::Featured);
        assert_eq!(listing.attributes.len(), 1);
        assert_eq!(listing.attributes[0].filter_id, "f1");
    }
}
