//! The booking draft: the only state that moves from one page to the next.
//!
//! Each page decodes the draft from its query string and encodes a grown
//! draft into the location of the next page. Empty fields are left out of the
//! encoded form and decode back as empty.

use serde::{Deserialize, Serialize};
use crate::page::{Navigation, Page};
use crate::search::RouteQuery;
use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reference: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bus_id: String,
    #[serde(rename = "from", default, skip_serializing_if = "String::is_empty")]
    pub origin: String,
    #[serde(rename = "to", default, skip_serializing_if = "String::is_empty")]
    pub destination: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date: String,
    #[serde(default, with = "seat_list", skip_serializing_if = "Vec::is_empty")]
    pub seats: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone: String,
}

impl BookingDraft {
    pub fn for_route(route: &RouteQuery) -> Self {
        Self {
            origin: route.origin.clone(),
            destination: route.destination.clone(),
            date: route.date.clone(),
            ..Self::default()
        }
    }

    pub fn for_reference(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            ..Self::default()
        }
    }

    pub fn route(&self) -> RouteQuery {
        RouteQuery::new(self.origin.clone(), self.destination.clone(), self.date.clone())
    }

    pub fn with_bus(mut self, bus_id: impl Into<String>) -> Self {
        self.bus_id = bus_id.into();
        self
    }

    pub fn with_selection(mut self, seats: Vec<String>, price: u32) -> Self {
        self.seats = seats;
        self.price = Some(price);
        self
    }

    pub fn with_passenger(
        mut self,
        reference: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        self.reference = reference.into();
        self.name = name.into();
        self.email = email.into();
        self.phone = phone.into();
        self
    }

    /// Absent price reads as zero, like every other absent field reads as empty.
    pub fn total_price(&self) -> u32 {
        self.price.unwrap_or(0)
    }

    /// `3A, 3B`
    pub fn seats_label(&self) -> String {
        self.seats.join(", ")
    }

    pub fn to_query(&self) -> CoreResult<String> {
        serde_urlencoded::to_string(self).map_err(|e| CoreError::InvalidQuery(e.to_string()))
    }

    pub fn from_query(query: &str) -> CoreResult<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        serde_urlencoded::from_str(query).map_err(|e| CoreError::InvalidQuery(e.to_string()))
    }

    pub fn navigate(&self, page: Page) -> CoreResult<Navigation> {
        Ok(Navigation::with_query(page, &self.to_query()?))
    }
}

/// Seats travel comma-joined in query strings. JSON bodies may send either
/// that string or an array of seat numbers.
mod seat_list {
    use std::fmt;
    use serde::de::{self, SeqAccess, Visitor};
    use serde::{Deserializer, Serializer};

    #[allow(clippy::ptr_arg)]
    pub fn serialize<S>(seats: &Vec<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&seats.join(","))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(SeatListVisitor)
    }

    fn clean<'a>(seats: impl Iterator<Item = &'a str>) -> Vec<String> {
        seats.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
    }

    struct SeatListVisitor;

    impl<'de> Visitor<'de> for SeatListVisitor {
        type Value = Vec<String>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("comma-separated seat numbers or a list of seat numbers")
        }

        fn visit_str<E: de::Error>(self, raw: &str) -> Result<Self::Value, E> {
            Ok(clean(raw.split(',')))
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut seats = Vec::new();
            while let Some(seat) = seq.next_element::<String>()? {
                seats.push(seat);
            }
            Ok(clean(seats.iter().map(String::as_str)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn full_draft() -> BookingDraft {
        BookingDraft::for_route(&RouteQuery::new("new-york", "boston", "2025-07-15"))
            .with_bus("bus1")
            .with_selection(vec!["3A".to_string(), "3B".to_string()], 70)
            .with_passenger("BT-123456", "Jane Q. Public", "jane+bus@example.com", "(123) 456-7890")
    }

    #[test]
    fn test_query_field_order() {
        let draft = BookingDraft::for_route(&RouteQuery::new("new-york", "boston", "2025-07-15"))
            .with_bus("bus1")
            .with_selection(vec!["3A".to_string(), "3B".to_string()], 70);
        assert_eq!(
            draft.to_query().unwrap(),
            "busId=bus1&from=new-york&to=boston&date=2025-07-15&seats=3A%2C3B&price=70"
        );
    }

    #[test]
    fn test_full_draft_round_trip() {
        let draft = full_draft();
        let query = draft.to_query().unwrap();
        assert!(query.starts_with("reference=BT-123456&busId=bus1"));
        assert_eq!(BookingDraft::from_query(&query).unwrap(), draft);
    }

    #[test]
    fn test_missing_fields_decode_empty() {
        let draft = BookingDraft::from_query("?reference=BT-982731").unwrap();
        assert_eq!(draft.reference, "BT-982731");
        assert_eq!(draft.origin, "");
        assert!(draft.seats.is_empty());
        assert_eq!(draft.total_price(), 0);
        assert_eq!(draft.seats_label(), "");
    }

    #[test]
    fn test_unencoded_seat_list_decodes() {
        let draft = BookingDraft::from_query("busId=bus2&seats=3A,3B&price=56").unwrap();
        assert_eq!(draft.seats, vec!["3A", "3B"]);
        assert_eq!(draft.seats_label(), "3A, 3B");
        assert_eq!(draft.price, Some(56));
    }

    #[test]
    fn test_json_seats_accept_list_or_joined() {
        let listed: BookingDraft = serde_json::from_str(r#"{"busId":"bus1","seats":["3A"," 3B"],"price":70}"#).unwrap();
        let joined: BookingDraft = serde_json::from_str(r#"{"busId":"bus1","seats":"3A,3B","price":70}"#).unwrap();
        assert_eq!(listed, joined);
        assert_eq!(listed.seats, vec!["3A", "3B"]);
    }

    #[test]
    fn test_non_numeric_price_rejected() {
        assert!(BookingDraft::from_query("price=seventy").is_err());
    }

    #[test]
    fn test_navigate_builds_location() {
        let nav = BookingDraft::for_reference("BT-654321").navigate(Page::BookingConfirmation).unwrap();
        assert_eq!(nav.location, "/booking-confirmation?reference=BT-654321");
    }

    proptest! {
        #[test]
        fn prop_draft_survives_query_string(
            origin in "[a-z]{1,8}(-[a-z]{1,8})?",
            name in "[ -~]{0,24}",
            email in "[a-z0-9.+]{1,10}@[a-z]{1,8}\\.com",
            seats in proptest::collection::vec("[1-9][0-9]?[ABCD]", 0..6),
            price in proptest::option::of(0u32..10_000),
        ) {
            let mut draft = BookingDraft::for_route(&RouteQuery::new(origin, "boston", "2025-07-15"))
                .with_bus("bus3")
                .with_passenger("BT-000042", name.trim(), email, "555 0100");
            draft.seats = seats;
            draft.price = price;

            let decoded = BookingDraft::from_query(&draft.to_query().unwrap()).unwrap();
            prop_assert_eq!(decoded, draft);
        }
    }
}
