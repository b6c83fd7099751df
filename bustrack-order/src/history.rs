use bustrack_core::format::{format_date, format_price};
use bustrack_core::{BookingDraft, CoreResult, Navigation, Page};
use bustrack_shared::{Ticket, TicketStatus};
use serde::{Deserialize, Serialize};

/// Tabs of the ticket history page.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TicketFilter {
    #[default]
    All,
    Upcoming,
    Completed,
    Cancelled,
}

impl TicketFilter {
    pub const TABS: [TicketFilter; 4] = [
        TicketFilter::All,
        TicketFilter::Upcoming,
        TicketFilter::Completed,
        TicketFilter::Cancelled,
    ];

    pub fn matches(&self, ticket: &Ticket) -> bool {
        match self {
            TicketFilter::All => true,
            TicketFilter::Upcoming => ticket.status == TicketStatus::Upcoming,
            TicketFilter::Completed => ticket.status == TicketStatus::Completed,
            TicketFilter::Cancelled => ticket.status == TicketStatus::Cancelled,
        }
    }

    pub fn apply<'a>(&self, tickets: &'a [Ticket]) -> Vec<&'a Ticket> {
        tickets.iter().filter(|t| self.matches(t)).collect()
    }
}

/// One row of the history list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketCard {
    #[serde(flatten)]
    pub ticket: Ticket,
    pub status_label: &'static str,
    pub date_label: String,
    pub seats_label: String,
    pub price_label: String,
    pub view_ticket: Navigation,
}

impl TicketCard {
    pub fn new(ticket: &Ticket) -> CoreResult<Self> {
        Ok(Self {
            status_label: ticket.status.label(),
            date_label: format_date(&ticket.date),
            seats_label: ticket.seats.join(", "),
            price_label: format_price(ticket.price),
            view_ticket: view_ticket(ticket)?,
            ticket: ticket.clone(),
        })
    }
}

/// "View Ticket" carries only the reference. The confirmation page has no
/// lookup, so the other fields come up blank there.
pub fn view_ticket(ticket: &Ticket) -> CoreResult<Navigation> {
    BookingDraft::for_reference(ticket.booking_reference.clone()).navigate(Page::BookingConfirmation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(id: &str, status: TicketStatus) -> Ticket {
        Ticket {
            id: id.to_string(),
            booking_reference: format!("BT-00000{}", id),
            origin: "New York".to_string(),
            destination: "Boston".to_string(),
            date: "2025-07-15".to_string(),
            departure_time: "07:00 AM".to_string(),
            seats: vec!["3A".to_string(), "3B".to_string()],
            price: 70,
            status,
        }
    }

    #[test]
    fn test_filters_match_exact_status() {
        let tickets = vec![
            ticket("1", TicketStatus::Upcoming),
            ticket("2", TicketStatus::Completed),
            ticket("3", TicketStatus::Upcoming),
            ticket("4", TicketStatus::Cancelled),
        ];

        assert_eq!(TicketFilter::All.apply(&tickets).len(), 4);
        let upcoming: Vec<_> = TicketFilter::Upcoming.apply(&tickets).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(upcoming, vec!["1", "3"]);
        assert_eq!(TicketFilter::Completed.apply(&tickets).len(), 1);
        assert_eq!(TicketFilter::Cancelled.apply(&tickets)[0].id, "4");
    }

    #[test]
    fn test_card_labels_and_link() {
        let card = TicketCard::new(&ticket("1", TicketStatus::Cancelled)).unwrap();
        assert_eq!(card.status_label, "Cancelled");
        assert_eq!(card.seats_label, "3A, 3B");
        assert_eq!(card.price_label, "$70");
        assert_eq!(card.date_label, "Tue, Jul 15, 2025");
        assert_eq!(card.view_ticket.location, "/booking-confirmation?reference=BT-000001");
    }

    #[test]
    fn test_filter_parses_lowercase() {
        let filter: TicketFilter = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(filter, TicketFilter::Completed);
        assert_eq!(TicketFilter::default(), TicketFilter::All);
    }
}
