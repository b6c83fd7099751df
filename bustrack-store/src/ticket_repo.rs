use std::time::Duration;
use async_trait::async_trait;
use bustrack_shared::{Ticket, TicketStatus};

/// Source of the visitor's past and upcoming tickets.
#[async_trait]
pub trait TicketRepository: Send + Sync {
    async fn list_tickets(&self) -> Result<Vec<Ticket>, TicketRepoError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TicketRepoError {
    #[error("Ticket history unavailable: {0}")]
    Unavailable(String),
}

/// Five fixed tickets. They are unrelated to anything booked in the
/// storefront.
pub struct MockTicketRepository {
    delay: Duration,
}

impl MockTicketRepository {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockTicketRepository {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[async_trait]
impl TicketRepository for MockTicketRepository {
    async fn list_tickets(&self) -> Result<Vec<Ticket>, TicketRepoError> {
        tokio::time::sleep(self.delay).await;
        let tickets = mock_tickets();
        tracing::debug!("Loaded {} mock tickets", tickets.len());
        Ok(tickets)
    }
}

#[allow(clippy::too_many_arguments)]
fn ticket(
    id: &str,
    reference: &str,
    route: (&str, &str),
    date: &str,
    departure_time: &str,
    seats: &[&str],
    price: u32,
    status: TicketStatus,
) -> Ticket {
    Ticket {
        id: id.to_string(),
        booking_reference: reference.to_string(),
        origin: route.0.to_string(),
        destination: route.1.to_string(),
        date: date.to_string(),
        departure_time: departure_time.to_string(),
        seats: seats.iter().map(|s| s.to_string()).collect(),
        price,
        status,
    }
}

fn mock_tickets() -> Vec<Ticket> {
    vec![
        ticket(
            "1",
            "BT-982731",
            ("New York", "Boston"),
            "2025-07-15",
            "07:00 AM",
            &["3A", "3B"],
            70,
            TicketStatus::Upcoming,
        ),
        ticket(
            "2",
            "BT-876543",
            ("Chicago", "Detroit"),
            "2025-06-20",
            "09:15 AM",
            &["5C"],
            30,
            TicketStatus::Upcoming,
        ),
        ticket(
            "3",
            "BT-762135",
            ("Washington", "Philadelphia"),
            "2025-06-01",
            "11:30 AM",
            &["8D"],
            25,
            TicketStatus::Completed,
        ),
        ticket(
            "4",
            "BT-654321",
            ("Boston", "New York"),
            "2025-05-15",
            "02:00 PM",
            &["12A", "12B"],
            70,
            TicketStatus::Completed,
        ),
        ticket(
            "5",
            "BT-543210",
            ("Philadelphia", "Washington"),
            "2025-05-10",
            "10:30 AM",
            &["4C"],
            25,
            TicketStatus::Cancelled,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_history() {
        let tickets = MockTicketRepository::default().list_tickets().await.unwrap();
        assert_eq!(tickets.len(), 5);
        assert_eq!(tickets[0].booking_reference, "BT-982731");
        assert_eq!(tickets[3].seats, vec!["12A", "12B"]);

        let cancelled: Vec<_> = tickets.iter().filter(|t| t.status == TicketStatus::Cancelled).collect();
        assert_eq!(cancelled.len(), 1);
        assert_eq!(cancelled[0].origin, "Philadelphia");
    }
}
