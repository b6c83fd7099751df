use bustrack_core::format::to_slug;
use bustrack_core::{BookingDraft, CoreResult, Navigation, Page, RouteQuery};
use chrono::NaiveDate;
use serde::Serialize;

/// A featured route on the home page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PopularRoute {
    pub from: &'static str,
    pub to: &'static str,
    pub price: u32,
    pub duration: &'static str,
    pub departure_time: &'static str,
}

impl PopularRoute {
    pub fn featured() -> Vec<PopularRoute> {
        vec![
            PopularRoute {
                from: "New York",
                to: "Boston",
                price: 35,
                duration: "4h 30m",
                departure_time: "Daily 7:00 AM",
            },
            PopularRoute {
                from: "Chicago",
                to: "Detroit",
                price: 30,
                duration: "5h 15m",
                departure_time: "Daily 8:30 AM",
            },
            PopularRoute {
                from: "Washington",
                to: "Philadelphia",
                price: 25,
                duration: "3h 10m",
                departure_time: "Daily 9:15 AM",
            },
        ]
    }

    /// "Book Now" goes straight to today's results, bypassing the search form.
    pub fn book_now(&self, today: NaiveDate) -> CoreResult<Navigation> {
        let route = RouteQuery::new(to_slug(self.from), to_slug(self.to), today.format("%Y-%m-%d").to_string());
        BookingDraft::for_route(&route).navigate(Page::AvailableBuses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_now_location() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let routes = PopularRoute::featured();
        assert_eq!(routes.len(), 3);
        assert_eq!(
            routes[0].book_now(today).unwrap().location,
            "/available-buses?from=new-york&to=boston&date=2025-06-01"
        );
        assert_eq!(
            routes[1].book_now(today).unwrap().location,
            "/available-buses?from=chicago&to=detroit&date=2025-06-01"
        );
    }
}
