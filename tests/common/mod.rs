//! Helpers for integration tests.
//!
//! The fixtures mirror the JSON payloads served by the backend category and
//! product endpoints, decoded through the DTO layer the way callers do.

use chrono::{DateTime, TimeZone, Utc};
use marani_market::domain::category::Category;
use marani_market::domain::listing::Listing;
use marani_market::dto::categories::{ApiCategory, categories_from_api};
use marani_market::dto::products::{ApiProduct, listings_from_api};

/// Evaluation clock the fixtures are built around.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const CATEGORIES: &str = r#"[
  {"id": "c1", "name": "Barrels", "slug": "barrels", "active": true,
   "parentId": null, "level": 0, "path": []},
  {"id": "c2", "name": "Oak barrels", "slug": "oak-barrels", "active": true,
   "parentId": "c1", "level": 1, "path": ["barrels"]},
  {"id": "c3", "name": "Steel barrels", "slug": "steel-barrels", "active": true,
   "parentId": "c1", "level": 1, "path": ["barrels"]},
  {"id": "c4", "name": "Presses", "slug": "presses", "active": true,
   "parentId": null, "level": 0, "path": []},
  {"id": "c5", "name": "Manual presses", "slug": "manual-presses", "active": true,
   "parentId": "c4", "level": 1, "path": ["presses"]},
  {"id": "c6", "name": "Pumps", "slug": "pumps", "active": false,
   "parentId": null, "level": 0, "path": []},
  {"id": "c7", "name": "Rotary pumps", "slug": "rotary-pumps", "active": true,
   "parentId": "c6", "level": 1, "path": ["pumps"]},
  {"id": "c8", "name": "Ghost", "slug": "ghost", "active": true,
   "parentId": "c999", "level": 1, "path": []}
]"#;

const PRODUCTS: &str = r#"[
  {"id": "p1", "title": "Oak barrel 225l", "slug": "oak-barrel-225l",
   "description": "Seasoned French oak barrel, one wine fill.",
   "type": "sell", "category": {"name": "Oak barrels", "slug": "oak-barrels"},
   "price": 450, "currency": "GEL",
   "location": {"region": "Kakheti", "city": "Telavi"},
   "specifications": {"condition": "good"},
   "createdAt": "2024-05-20T09:00:00Z"},
  {"id": "p2", "title": "Basket press 40l", "slug": "basket-press-40l",
   "description": "Manual basket press for small harvests.",
   "type": "rent", "rentPeriod": "week",
   "category": {"name": "Manual presses", "slug": "manual-presses"},
   "price": 30,
   "location": {"region": "Imereti", "city": "Kutaisi"},
   "createdAt": "2024-05-25T10:00:00Z"},
  {"id": "p3", "title": "Stainless fermenter 1000l", "slug": "fermenter-1000l",
   "description": "Temperature-controlled stainless fermenter.",
   "type": "sell", "category": {"name": "Oak barrels", "slug": "oak-barrels"},
   "price": 3200, "currency": "GEL",
   "location": {"region": "Kakheti", "city": "Kvareli"},
   "promotionType": "homepageTop", "promotionExpiresAt": "2030-01-01T00:00:00Z",
   "createdAt": "2024-04-01T08:00:00Z"},
  {"id": "p4", "title": "Destemmer crusher", "slug": "destemmer-crusher",
   "description": "Motorized destemmer with rubber rollers.",
   "type": "sell", "category": {"name": "Manual presses", "slug": "manual-presses"},
   "price": 1400,
   "promotionType": "featured", "promotionExpiresAt": "2024-01-01T00:00:00Z",
   "createdAt": "2024-05-28T16:00:00Z"},
  {"id": "p5", "title": "Qvevri 500l", "slug": "qvevri-500l",
   "description": "Traditional clay qvevri, beeswax lined.",
   "type": "sell", "category": {"name": "Oak barrels", "slug": "oak-barrels"},
   "price": 2100,
   "location": {"region": "Kakheti", "city": "Telavi"},
   "createdAt": "2024-03-15T12:00:00Z"},
  {"id": "p6", "title": "Plate filter", "slug": "plate-filter",
   "description": "20x20 plate filter with pump.",
   "type": "rent", "rentPeriod": "hour",
   "category": {"name": "Manual presses", "slug": "manual-presses"},
   "price": 15,
   "createdAt": "2024-05-30T18:00:00Z"}
]"#;

/// Category list as served by `GET /categories`.
pub fn backend_categories() -> Vec<Category> {
    let decoded: Vec<ApiCategory> =
        serde_json::from_str(CATEGORIES).expect("category fixture decodes");
    categories_from_api(decoded)
}

/// Listing set as served by `GET /products`.
pub fn backend_listings() -> Vec<Listing> {
    let decoded: Vec<ApiProduct> =
        serde_json::from_str(PRODUCTS).expect("product fixture decodes");
    listings_from_api(decoded)
}
