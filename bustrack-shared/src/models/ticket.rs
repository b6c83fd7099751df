use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl TicketStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Upcoming => "Upcoming",
            TicketStatus::Completed => "Completed",
            TicketStatus::Cancelled => "Cancelled",
        }
    }
}

/// A past or future booking shown in the ticket history.
///
/// History records are display names (`New York`), not slugs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub booking_reference: String,
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub departure_time: String,
    pub seats: Vec<String>,
    pub price: u32,
    pub status: TicketStatus,
}
