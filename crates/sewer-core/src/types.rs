//! # Response Contracts
//!
//! Shapes of the JSON:API-style payloads returned by the directory backend.
//!
//! ## Envelope Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  {                                                                      │
//! │    "data": [ { "id": "12", "type": "state", "attributes": { ... } } ], │
//! │    "meta": {                                                            │
//! │      "pagination": { "current_page": 1, "prev_page": null, ... },      │
//! │      "cities": { "data": [ ... ] },          // companies endpoint     │
//! │      "query": "san", "count": 3, "limit": 10 // autocomplete endpoint  │
//! │    }                                                                    │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every `meta` field is optional; a response with no `meta` at all is valid.
//! Records are immutable once received and replaced wholesale on each fetch.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

// =============================================================================
// Envelopes
// =============================================================================

/// A typed, identified record matching a JSON:API resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResourceEnvelope<T> {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub attributes: T,
}

/// A list response. `data: null` and a missing `data` both read as empty.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ListResponse<T> {
    pub data: Vec<ResourceEnvelope<T>>,
    #[serde(default)]
    pub meta: Option<ResponseMeta>,
}

/// A single-record response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemResponse<T> {
    pub data: ResourceEnvelope<T>,
    #[serde(default)]
    pub meta: Option<ResponseMeta>,
}

impl<T> ListResponse<T> {
    /// Pagination block, if the backend sent one.
    pub fn pagination(&self) -> Option<PaginationMeta> {
        self.meta.as_ref().and_then(|m| m.pagination.clone())
    }

    /// Embedded cities from `meta.cities.data`, empty when absent.
    pub fn cities(&self) -> Vec<CityResource> {
        self.meta
            .as_ref()
            .and_then(|m| m.cities.as_ref())
            .map(|c| c.data.clone())
            .unwrap_or_default()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ListResponse<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(bound = "T: Deserialize<'de>")]
        struct Wire<T> {
            #[serde(default)]
            data: Option<Vec<ResourceEnvelope<T>>>,
            #[serde(default)]
            meta: Option<ResponseMeta>,
        }

        let wire = Wire::<T>::deserialize(deserializer)?;
        Ok(Self {
            data: wire.data.unwrap_or_default(),
            meta: wire.meta,
        })
    }
}

// =============================================================================
// Meta
// =============================================================================

/// Page-number bookkeeping accompanying a list response.
///
/// ## Invariant
/// `prev_page` is `None` iff `current_page == 1`; `next_page` is `None` iff
/// `current_page == total_pages` (or there are no results).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PaginationMeta {
    pub current_page: u32,
    pub prev_page: Option<u32>,
    pub next_page: Option<u32>,
    #[serde(default)]
    pub total_items: u32,
    pub total_pages: u32,
}

impl PaginationMeta {
    /// Returns true if a following page exists.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }

    /// Returns true if a preceding page exists.
    #[inline]
    pub fn has_prev(&self) -> bool {
        self.prev_page.is_some()
    }

    /// Checks the prev/next invariant against `current_page` and `total_pages`.
    pub fn is_consistent(&self) -> bool {
        let first = self.current_page <= 1;
        let last = self.current_page >= self.total_pages;
        self.prev_page.is_none() == first && self.next_page.is_none() == last
    }
}

/// The optional `meta` block of any response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseMeta {
    #[serde(default)]
    pub pagination: Option<PaginationMeta>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub cities: Option<CitiesBlock>,
}

/// Cities embedded in the companies listing. `data: null` reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct CitiesBlock {
    pub data: Vec<CityResource>,
}

impl<'de> Deserialize<'de> for CitiesBlock {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Wire {
            #[serde(default)]
            data: Option<Vec<CityResource>>,
        }

        let wire = Wire::deserialize(deserializer)?;
        Ok(Self {
            data: wire.data.unwrap_or_default(),
        })
    }
}

/// Echo of an autocomplete request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AutocompleteMeta {
    pub query: String,
    pub count: u32,
    pub limit: u32,
}

impl ResponseMeta {
    /// Extracts the autocomplete echo. Missing `count` falls back to
    /// `returned`, missing `limit` to `requested_limit`.
    pub fn autocomplete(&self, returned: usize, requested_limit: u32) -> Option<AutocompleteMeta> {
        let query = self.query.clone()?;
        Some(AutocompleteMeta {
            query,
            count: self.count.unwrap_or(returned as u32),
            limit: self.limit.unwrap_or(requested_limit),
        })
    }
}

// =============================================================================
// States & Cities
// =============================================================================

/// Country a state or city belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Country {
    pub id: u32,
    pub name: String,
    pub code: String,
    pub slug: String,
}

/// Compact reference to a state or country embedded in a city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegionRef {
    pub id: u32,
    pub name: String,
    pub code: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StateAttributes {
    pub name: String,
    pub code: String,
    pub slug: String,
    #[serde(default)]
    pub companies_count: u32,
    pub country: Country,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CityAttributes {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub companies_count: u32,
    pub country: RegionRef,
    pub state: RegionRef,
}

// =============================================================================
// Companies
// =============================================================================

/// Service tier a company is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ServiceLevel {
    Basic,
    Standard,
    Premium,
    Elite,
}

/// A company as it appears in listings.
///
/// Coordinates and `average_rating` arrive as decimal strings and are kept
/// that way; see [`CompanyAttributes::rating`] for a parsed view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompanyAttributes {
    pub name: String,
    pub slug: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub street_address: String,
    pub zip_code: String,
    pub latitude: String,
    pub longitude: String,
    pub description: String,
    pub average_rating: String,
    pub total_reviews: u32,
    pub verified_professional: bool,
    pub licensed: bool,
    pub insured: bool,
    pub background_checked: bool,
    pub certified_partner: bool,
    pub service_guarantee: bool,
    pub service_level: ServiceLevel,
    pub specialty: String,
    pub created_at: String,
    pub updated_at: String,
    pub url_path: String,
    pub full_address: String,
}

impl CompanyAttributes {
    /// Parsed average rating, `None` if the backend sent a non-number.
    pub fn rating(&self) -> Option<f32> {
        self.average_rating.trim().parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ServiceCategory {
    pub id: u32,
    pub name: String,
    pub slug: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompanyReview {
    pub id: String,
    pub rating: f32,
    pub comment: String,
    pub author: String,
    pub created_at: String,
}

/// Opening hours keyed by English weekday name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "PascalCase")]
pub struct WorkingHours {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

/// Full company record returned by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompanyDetailAttributes {
    #[serde(flatten)]
    pub company: CompanyAttributes,
    pub working_hours: WorkingHours,
    #[serde(default)]
    pub service_categories: Vec<ServiceCategory>,
    #[serde(default)]
    pub reviews: Vec<CompanyReview>,
}

// =============================================================================
// Locations
// =============================================================================

/// A location suggestion from the autocomplete endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LocationAttributes {
    pub country: String,
    pub state: String,
    pub city: String,
    pub address: String,
}

// =============================================================================
// Aliases
// =============================================================================

pub type StateResource = ResourceEnvelope<StateAttributes>;
pub type CityResource = ResourceEnvelope<CityAttributes>;
pub type CompanyResource = ResourceEnvelope<CompanyAttributes>;
pub type CompanyDetailResource = ResourceEnvelope<CompanyDetailAttributes>;
pub type LocationResource = ResourceEnvelope<LocationAttributes>;

pub type StatesApiResponse = ListResponse<StateAttributes>;
pub type CompaniesApiResponse = ListResponse<CompanyAttributes>;
pub type LocationAutocompleteResponse = ListResponse<LocationAttributes>;
pub type CompanyDetailResponse = ItemResponse<CompanyDetailAttributes>;

// =============================================================================
// Unit Tests
// =============================================================================
