pub mod account;
pub mod booking;
pub mod fulfillment;
pub mod history;
pub mod selection;

pub use account::{AccountService, Login, LoginForm, Registration, RegistrationForm};
pub use booking::{BookingForm, BookingRecord, BookingReference, BookingService, BookingSummary, PassengerDetails};
pub use fulfillment::{Barcode, FulfillmentService, TicketView};
pub use history::{TicketCard, TicketFilter};
pub use selection::{SeatSelection, SelectionSet, SelectionSummary, Toggle};

/// Rejections of user input. The messages are shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("Please agree to the terms and conditions")]
    TermsNotAccepted,
    #[error("Please fill in {0}")]
    MissingField(&'static str),
    #[error("Passwords don't match!")]
    PasswordMismatch,
    #[error("Select at least one seat")]
    EmptySelection,
    #[error("Seat map is still loading")]
    NotReady,
}

pub type OrderResult<T> = Result<T, OrderError>;
