use serde::{Deserialize, Serialize};

/// Every navigable path of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    AvailableBuses,
    SeatSelection,
    Booking,
    BookingConfirmation,
    MyTickets,
    Login,
    Register,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::AvailableBuses => "/available-buses",
            Page::SeatSelection => "/seat-selection",
            Page::Booking => "/booking",
            Page::BookingConfirmation => "/booking-confirmation",
            Page::MyTickets => "/my-tickets",
            Page::Login => "/login",
            Page::Register => "/register",
        }
    }
}

/// Where the client goes next.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Navigation {
    pub location: String,
}

impl Navigation {
    pub fn to(page: Page) -> Self {
        Self { location: page.path().to_string() }
    }

    pub fn with_query(page: Page, query: &str) -> Self {
        if query.is_empty() {
            return Self::to(page);
        }
        Self { location: format!("{}?{}", page.path(), query) }
    }
}
