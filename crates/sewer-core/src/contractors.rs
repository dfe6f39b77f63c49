//! # Contractors
//!
//! Record types for the static contractor dataset and the pure lookups the
//! directory pages run over it.
//!
//! All lookups are O(n) scans of [`CONTRACTORS`]; the list is small, fixed at
//! compile time and never mutated, so nothing is cached.

use chrono::NaiveDate;
use serde::Serialize;

use crate::dataset::CONTRACTORS;
use crate::error::{CoreError, CoreResult};
use crate::slug::{city_slug, provider_slug, state_slug};

// =============================================================================
// Record Types
// =============================================================================

/// Residential, commercial or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Specialty {
    Residential,
    Commercial,
    Both,
}

/// Price tier, rendered as one to three dollar signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum PriceTier {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Standard,
    #[serde(rename = "$$$")]
    Premium,
}

impl std::fmt::Display for PriceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceTier::Budget => write!(f, "$"),
            PriceTier::Standard => write!(f, "$$"),
            PriceTier::Premium => write!(f, "$$$"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Badge {
    Premium,
    Verified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceHours {
    pub day: &'static str,
    pub hours: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CustomerReview {
    pub author: &'static str,
    pub rating: u8,
    pub text: &'static str,
    /// ISO date, `YYYY-MM-DD`.
    pub date: &'static str,
}

impl CustomerReview {
    /// Parsed review date, `None` if the stored text is not `YYYY-MM-DD`.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
    }
}

/// A contractor listing in the static dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contractor {
    pub id: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub address: &'static str,
    pub rating: f32,
    pub reviews: u32,
    pub specialty: Specialty,
    pub price: PriceTier,
    pub phone: &'static str,
    pub badge: Badge,
    pub email: Option<&'static str>,
    pub website: Option<&'static str>,
    pub service_hours: &'static [ServiceHours],
    pub photos: &'static [&'static str],
    pub certifications: &'static [&'static str],
    pub customer_reviews: &'static [CustomerReview],
}

impl Contractor {
    pub fn state_slug(&self) -> String {
        state_slug(self.state)
    }

    pub fn city_slug(&self) -> String {
        city_slug(self.city)
    }

    pub fn provider_slug(&self) -> String {
        provider_slug(self.name)
    }

    /// Most recent customer review by date.
    pub fn latest_review(&self) -> Option<&'static CustomerReview> {
        self.customer_reviews
            .iter()
            .filter_map(|r| r.date().map(|d| (d, r)))
            .max_by_key(|(d, _)| *d)
            .map(|(_, r)| r)
    }
}

// =============================================================================
// Lookups
// =============================================================================

/// Every contractor located in `state` (exact name match), in dataset order.
pub fn contractors_by_state(state: &str) -> Vec<&'static Contractor> {
    CONTRACTORS.iter().filter(|c| c.state == state).collect()
}

/// Every contractor located in `city`, `state`, in dataset order.
pub fn contractors_by_city(state: &str, city: &str) -> Vec<&'static Contractor> {
    CONTRACTORS
        .iter()
        .filter(|c| c.state == state && c.city == city)
        .collect()
}

/// Distinct cities in `state`, in order of first appearance.
pub fn cities_by_state(state: &str) -> Vec<&'static str> {
    let mut cities: Vec<&'static str> = Vec::new();
    for contractor in CONTRACTORS.iter().filter(|c| c.state == state) {
        if !cities.contains(&contractor.city) {
            cities.push(contractor.city);
        }
    }
    cities
}

pub fn contractor_by_id(id: &str) -> Option<&'static Contractor> {
    CONTRACTORS.iter().find(|c| c.id == id)
}

/// Like [`contractor_by_id`] but reports a missing id as an error.
pub fn require_contractor(id: &str) -> CoreResult<&'static Contractor> {
    contractor_by_id(id).ok_or_else(|| CoreError::ContractorNotFound(id.to_string()))
}

/// Resolves a state slug (e.g. `"new-york"`) to the state name used in the
/// dataset.
pub fn state_from_slug(slug: &str) -> CoreResult<&'static str> {
    crate::dataset::STATES
        .iter()
        .copied()
        .find(|s| state_slug(s) == slug)
        .ok_or_else(|| CoreError::UnknownState(slug.to_string()))
}

/// Finds a contractor by the slug of its state, city and name, as used in
/// directory URLs.
pub fn contractor_by_slugs(state: &str, city: &str, provider: &str) -> Option<&'static Contractor> {
    CONTRACTORS.iter().find(|c| {
        c.state_slug() == state && c.city_slug() == city && c.provider_slug() == provider
    })
}
