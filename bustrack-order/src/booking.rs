use std::fmt;
use std::time::Duration;
use bustrack_core::format::{format_date, format_location, format_price};
use bustrack_core::BookingDraft;
use bustrack_shared::Masked;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use crate::{OrderError, OrderResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerDetails {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: Masked<String>,
    #[serde(default)]
    pub phone: Masked<String>,
    #[serde(default)]
    pub address: String,
}

impl PassengerDetails {
    fn first_missing(&self) -> Option<&'static str> {
        [
            ("full name", self.full_name.as_str()),
            ("email", self.email.expose().as_str()),
            ("phone", self.phone.expose().as_str()),
            ("address", self.address.as_str()),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

/// The passenger form as submitted, including the terms checkbox.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingForm {
    #[serde(default)]
    pub passenger: PassengerDetails,
    #[serde(default)]
    pub agreed_to_terms: bool,
}

impl BookingForm {
    /// Required fields first, then the terms checkbox. Contents are not
    /// format-checked.
    pub fn validate(&self) -> OrderResult<()> {
        if let Some(field) = self.passenger.first_missing() {
            return Err(OrderError::MissingField(field));
        }
        if !self.agreed_to_terms {
            return Err(OrderError::TermsNotAccepted);
        }
        Ok(())
    }
}

/// Human-facing confirmation code: `BT-` and the last six digits of the
/// epoch-millisecond clock. Collisions are unlikely, not impossible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BookingReference(String);

impl BookingReference {
    pub fn generate() -> Self {
        Self::from_timestamp_millis(Utc::now().timestamp_millis())
    }

    pub fn from_timestamp_millis(millis: i64) -> Self {
        Self(format!("BT-{:06}", millis.rem_euclid(1_000_000)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A submitted booking. Lives only long enough to be encoded into the
/// confirmation location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRecord {
    pub reference: BookingReference,
    pub bus_id: String,
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub seats: Vec<String>,
    pub total_price: u32,
    pub passenger: PassengerDetails,
}

impl BookingRecord {
    pub fn per_seat_price(&self) -> u32 {
        per_seat_price(self.total_price, self.seats.len())
    }

    /// Query-string draft for the confirmation page. The address stays behind.
    pub fn confirmation_draft(&self) -> BookingDraft {
        BookingDraft {
            bus_id: self.bus_id.clone(),
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            date: self.date.clone(),
            ..BookingDraft::default()
        }
        .with_selection(self.seats.clone(), self.total_price)
        .with_passenger(
            self.reference.as_str(),
            self.passenger.full_name.clone(),
            self.passenger.email.expose().clone(),
            self.passenger.phone.expose().clone(),
        )
    }
}

/// Display-only per-seat figure; integer division, zero without seats.
pub fn per_seat_price(total: u32, seat_count: usize) -> u32 {
    match seat_count {
        0 => 0,
        n => total / n as u32,
    }
}

/// What the passenger-details page shows next to the form.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub heading: String,
    pub journey: String,
    pub date_label: String,
    pub bus_id: String,
    pub seats: Vec<String>,
    pub seat_count: usize,
    pub per_seat_price: u32,
    pub total_price: u32,
    pub total_label: String,
    pub pay_label: String,
}

impl BookingSummary {
    pub fn from_draft(draft: &BookingDraft) -> Self {
        let total = draft.total_price();
        let journey = format!("{} to {}", format_location(&draft.origin), format_location(&draft.destination));
        Self {
            heading: format!("Complete your booking for {}", journey),
            journey,
            date_label: format_date(&draft.date),
            bus_id: draft.bus_id.clone(),
            seats: draft.seats.clone(),
            seat_count: draft.seats.len(),
            per_seat_price: per_seat_price(total, draft.seats.len()),
            total_price: total,
            total_label: format_price(total),
            pay_label: format!("Confirm Booking & Pay {}", format_price(total)),
        }
    }
}

/// Accepts passenger forms. The submit delay stands in for a payment call
/// that always succeeds.
pub struct BookingService {
    submit_delay: Duration,
}

impl BookingService {
    pub fn new(submit_delay: Duration) -> Self {
        Self { submit_delay }
    }

    pub async fn submit(&self, draft: &BookingDraft, form: &BookingForm) -> OrderResult<BookingRecord> {
        if let Err(e) = form.validate() {
            tracing::warn!("Booking for {} rejected: {}", draft.bus_id, e);
            return Err(e);
        }

        tokio::time::sleep(self.submit_delay).await;

        let record = BookingRecord {
            reference: BookingReference::generate(),
            bus_id: draft.bus_id.clone(),
            origin: draft.origin.clone(),
            destination: draft.destination.clone(),
            date: draft.date.clone(),
            seats: draft.seats.clone(),
            total_price: draft.total_price(),
            passenger: form.passenger.clone(),
        };

        tracing::info!(
            "Booking {} confirmed: {} seat(s) on {} for {:?}",
            record.reference,
            record.seats.len(),
            record.bus_id,
            record.passenger
        );
        Ok(record)
    }
}

impl Default for BookingService {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}
