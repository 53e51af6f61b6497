//! Notification rendering and dispatch ports

pub mod ports;
pub mod templates;

pub use ports::{EmailSender, SendReceipt};
pub use templates::EmailMessage;
