use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::format::{format_date, format_location};
use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct City {
    pub slug: &'static str,
    pub label: &'static str,
}

/// Cities offered by the search form.
pub const CITIES: [City; 5] = [
    City { slug: "new-york", label: "New York" },
    City { slug: "boston", label: "Boston" },
    City { slug: "chicago", label: "Chicago" },
    City { slug: "washington", label: "Washington DC" },
    City { slug: "philadelphia", label: "Philadelphia" },
];

pub fn find_city(slug: &str) -> Option<&'static City> {
    CITIES.iter().find(|c| c.slug == slug)
}

/// Route and travel date as carried in the `from`, `to` and `date` query
/// parameters. Missing parameters decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteQuery {
    #[serde(rename = "from", default)]
    pub origin: String,
    #[serde(rename = "to", default)]
    pub destination: String,
    #[serde(default)]
    pub date: String,
}

impl RouteQuery {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            date: date.into(),
        }
    }

    /// `New York to Boston`
    pub fn heading(&self) -> String {
        format!("{} to {}", format_location(&self.origin), format_location(&self.destination))
    }

    pub fn date_label(&self) -> String {
        format_date(&self.date)
    }

    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// The home page search form as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub date: String,
}

impl SearchForm {
    /// Applies the form's field rules and yields the query for the results
    /// page. Only the form restricts past dates; the results page does not.
    pub fn validate(&self, today: NaiveDate) -> CoreResult<RouteQuery> {
        if self.from.is_empty() {
            return Err(CoreError::ValidationError("Please select a departure city".to_string()));
        }
        if self.to.is_empty() {
            return Err(CoreError::ValidationError("Please select a destination city".to_string()));
        }
        if self.date.is_empty() {
            return Err(CoreError::ValidationError("Please select a travel date".to_string()));
        }

        for slug in [&self.from, &self.to] {
            if find_city(slug).is_none() {
                return Err(CoreError::ValidationError(format!("Unknown city: {}", slug)));
            }
        }

        let route = RouteQuery::new(self.from.clone(), self.to.clone(), self.date.clone());
        let date = route
            .calendar_date()
            .ok_or_else(|| CoreError::ValidationError(format!("Invalid travel date: {}", self.date)))?;
        if date < today {
            return Err(CoreError::ValidationError("Travel date cannot be in the past".to_string()));
        }

        tracing::debug!("Search form accepted: {} -> {} on {}", self.from, self.to, date);
        Ok(route)
    }
}
