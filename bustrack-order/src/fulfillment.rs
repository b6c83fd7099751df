use std::fmt;
use std::time::Duration;
use bustrack_core::format::{format_date, format_location, format_price};
use bustrack_core::BookingDraft;
use bustrack_shared::Notification;
use rand::Rng;
use serde::Serialize;

const BAR_COUNT: u32 = 30;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Bar {
    pub x: u32,
    pub width: u32,
}

/// Decorative barcode printed on the ticket. It encodes nothing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Barcode {
    pub bars: Vec<Bar>,
}

impl Barcode {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let bars = (0..BAR_COUNT)
            .map(|i| Bar {
                x: i * 3 + 5,
                width: if rng.gen_bool(0.7) { 2 } else { 1 },
            })
            .collect();
        Self { bars }
    }
}

/// The confirmation ticket, rebuilt entirely from the query string. Missing
/// fields render blank; nothing is looked up by reference.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TicketView {
    pub reference: String,
    pub origin: String,
    pub destination: String,
    pub date_label: String,
    pub seats: Vec<String>,
    pub seats_label: String,
    pub price_label: String,
    pub passenger_name: String,
    pub passenger_email: String,
    pub passenger_phone: String,
    pub barcode: Barcode,
}

impl TicketView {
    pub fn from_draft(draft: &BookingDraft, barcode: Barcode) -> Self {
        Self {
            reference: draft.reference.clone(),
            origin: format_location(&draft.origin),
            destination: format_location(&draft.destination),
            date_label: format_date(&draft.date),
            seats: draft.seats.clone(),
            seats_label: draft.seats_label(),
            price_label: format_price(draft.total_price()),
            passenger_name: draft.name.clone(),
            passenger_email: draft.email.clone(),
            passenger_phone: draft.phone.clone(),
            barcode,
        }
    }

    /// Plain-text rendition for printing.
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TicketView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BusTracker e-ticket")?;
        writeln!(f, "Booking reference: {}", self.reference)?;
        writeln!(f)?;
        writeln!(f, "From:       {}", self.origin)?;
        writeln!(f, "To:         {}", self.destination)?;
        writeln!(f, "Date:       {}", self.date_label)?;
        writeln!(f, "Seats:      {}", self.seats_label)?;
        writeln!(f, "Total paid: {}", self.price_label)?;
        writeln!(f)?;
        writeln!(f, "Passenger:  {}", self.passenger_name)?;
        writeln!(f, "Email:      {}", self.passenger_email)?;
        writeln!(f, "Phone:      {}", self.passenger_phone)?;
        writeln!(f)?;
        let bars: Vec<&str> = self
            .barcode
            .bars
            .iter()
            .map(|bar| if bar.width == 2 { "█" } else { "|" })
            .collect();
        writeln!(f, "{}", bars.join(" "))
    }
}

/// Produces tickets and fakes the ticket download.
pub struct FulfillmentService {
    download_delay: Duration,
}

impl FulfillmentService {
    pub fn new(download_delay: Duration) -> Self {
        Self { download_delay }
    }

    pub fn ticket(&self, draft: &BookingDraft) -> TicketView {
        TicketView::from_draft(draft, Barcode::random(&mut rand::thread_rng()))
    }

    /// Waits out the simulated download and reports success. No file is
    /// produced.
    pub async fn download(&self, reference: &str) -> Notification {
        tokio::time::sleep(self.download_delay).await;
        tracing::info!("Ticket {} downloaded", reference);
        Notification::success("Ticket downloaded successfully!")
    }
}

impl Default for FulfillmentService {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}
