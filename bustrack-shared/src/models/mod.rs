pub mod notification;
pub mod ticket;
