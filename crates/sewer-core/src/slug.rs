//! # Slugs
//!
//! URL-segment normalization for states, cities and providers, and the
//! reverse formatting used for page titles.
//!
//! ```text
//!   "New York"                  ──slugify──────────►  "new-york"
//!   "J Sewer & Drain Plumbing"  ──provider_slug────►  "j-sewer-drain-plumbing"
//!   "new-york"                  ──format_slug_to_title─►  "New York"
//! ```

/// Lowercases and joins the whitespace-separated words with single hyphens.
/// Leading and trailing whitespace produce no hyphen.
pub fn slugify(value: &str) -> String {
    value
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Slug for a state name, e.g. `"New York"` → `"new-york"`.
pub fn state_slug(state: &str) -> String {
    slugify(state)
}

/// Slug for a city name, e.g. `"Los Angeles"` → `"los-angeles"`.
pub fn city_slug(city: &str) -> String {
    slugify(city)
}

/// Slug for a provider name.
///
/// Lowercases, hyphenates whitespace, drops every character outside
/// `[a-z0-9-]` and collapses the hyphen runs that dropping leaves behind.
pub fn provider_slug(name: &str) -> String {
    let filtered: String = slugify(name)
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect();

    filtered
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Slug for an optional label; `None` stays `None`.
pub fn optional_slug(value: Option<&str>) -> Option<String> {
    value.map(slugify)
}

/// Turns a slug back into a title: hyphens become spaces and the first
/// letter of every word is uppercased. `None` and `""` give `""`.
pub fn format_slug_to_title(slug: Option<&str>) -> String {
    let Some(slug) = slug.filter(|s| !s.is_empty()) else {
        return String::new();
    };

    let mut title = String::with_capacity(slug.len());
    let mut at_word_start = true;
    for c in slug.chars() {
        let c = if c == '-' { ' ' } else { c };
        if at_word_start && c.is_alphanumeric() {
            title.extend(c.to_uppercase());
        } else {
            title.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }
    title
}

/// Country display name from its slug, e.g. `"united-states"` → `"United States"`.
pub fn country_from_slug(country_slug: &str) -> String {
    format_slug_to_title(Some(country_slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("New York"), "new-york");
        assert_eq!(slugify("  San   Luis Obispo "), "san-luis-obispo");
        assert_eq!(state_slug("California"), "california");
        assert_eq!(city_slug("Los Angeles"), "los-angeles");
    }

    #[test]
    fn test_provider_slug() {
        assert_eq!(provider_slug("J Sewer & Drain Plumbing"), "j-sewer-drain-plumbing");
        assert_eq!(provider_slug("NYC Sewer Masters"), "nyc-sewer-masters");
        assert_eq!(provider_slug("A-1 Rooter, Inc."), "a-1-rooter-inc");
        assert_eq!(provider_slug("&"), "");
    }

    #[test]
    fn test_format_slug_to_title() {
        assert_eq!(format_slug_to_title(Some("new-york")), "New York");
        assert_eq!(format_slug_to_title(Some("new-york-city")), "New York City");
        assert_eq!(format_slug_to_title(Some("united-states")), "United States");
        assert_eq!(format_slug_to_title(None), "");
        assert_eq!(format_slug_to_title(Some("")), "");
    }

    #[test]
    fn test_country_and_optional_slug() {
        assert_eq!(country_from_slug("united-states"), "United States");
        assert_eq!(optional_slug(Some("San Diego")).as_deref(), Some("san-diego"));
        assert_eq!(optional_slug(None), None);
    }
}
