// Destination catalog and search filtering

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Error types for search input parsing
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    #[error("Invalid numeric input: {0}")]
    InvalidNumericInput(String),
}

// A single destination entry in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub destination: String,
    pub country: String,
    pub cost: u32,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Destination {
    pub fn new(destination: &str, country: &str, cost: u32, keywords: &[&str]) -> Self {
        Self {
            destination: destination.to_string(),
            country: country.to_string(),
            cost,
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) - ${}", self.destination, self.country, self.cost)?;
        if !self.keywords.is_empty() {
            write!(f, " | Keywords: {}", self.keywords.join(", "))?;
        }
        Ok(())
    }
}

// Criteria for one search; unset fields match everything
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    pub name: Option<String>,
    pub max_cost: Option<u32>,
    pub keyword: Option<String>,
}

impl SearchCriteria {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn by_max_cost(max_cost: u32) -> Self {
        Self {
            max_cost: Some(max_cost),
            ..Self::default()
        }
    }

    pub fn by_keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: Some(keyword.into()),
            ..Self::default()
        }
    }
}

// Parse a maximum budget field. Blank input means "no budget filter"; a
// budget is never negative, so anything that fails to parse as an unsigned
// number is invalid.
pub fn parse_max_cost(input: &str) -> Result<Option<u32>, SearchError> {
    let input = input.trim();

    if input.is_empty() {
        return Ok(None);
    }

    match input.parse::<u32>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => Err(SearchError::InvalidNumericInput(input.to_string())),
    }
}

// The read-only destination catalog, fixed for the process lifetime
#[derive(Debug, Clone)]
pub struct Catalog {
    destinations: Vec<Destination>,
}

impl Catalog {
    pub fn new(destinations: Vec<Destination>) -> Self {
        Self { destinations }
    }

    // The sample data the application ships with
    pub fn sample() -> Self {
        Self::new(vec![
            Destination::new("Amalfi Coast", "Italy", 1800, &["beach", "romantic", "scenic"]),
            Destination::new("Santorini", "Greece", 2000, &["island", "luxury", "sunset"]),
            Destination::new("Tokyo", "Japan", 2200, &["city", "tech", "culture"]),
            Destination::new("Paris", "France", 1600, &["romantic", "city", "art"]),
            Destination::new("New York City", "USA", 1500, &["city", "shopping", "broadway"]),
        ])
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    // Extract destinations that match the given criteria, in catalog order.
    // Name matching is a case-insensitive substring check; keyword matching
    // is a case-insensitive exact check against the keyword list.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<Destination> {
        let name_query = normalize(criteria.name.as_deref());
        let keyword_query = normalize(criteria.keyword.as_deref());

        let mut filtered = Vec::new();

        for dest in &self.destinations {
            let name_ok = name_query
                .as_deref()
                .map_or(true, |query| dest.destination.to_lowercase().contains(query));

            let cost_ok = criteria.max_cost.map_or(true, |max| dest.cost <= max);

            let keyword_ok = keyword_query
                .as_deref()
                .map_or(true, |query| dest.keywords.iter().any(|k| k.to_lowercase() == query));

            if name_ok && cost_ok && keyword_ok {
                filtered.push(dest.clone());
            }
        }

        tracing::debug!(
            matches = filtered.len(),
            total = self.destinations.len(),
            "catalog search"
        );

        filtered
    }
}

// Blank query text means "no filter", not "match the empty string"
fn normalize(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}
