pub mod app_config;
pub mod ticket_repo;

pub use app_config::Config;
pub use ticket_repo::{MockTicketRepository, TicketRepoError, TicketRepository};
