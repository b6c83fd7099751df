pub mod models;
pub mod pii;

pub use models::notification::{Notification, NotificationLevel};
pub use models::ticket::{Ticket, TicketStatus};
pub use pii::Masked;
