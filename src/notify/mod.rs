//! Notification fan-out to chat webhooks.

pub mod channel;
pub mod discord;
pub mod dispatcher;
pub mod error;
pub mod format;
pub mod lark;
pub mod pushover;
pub mod sign;
pub mod slack;
pub mod teams;
pub mod telegram;

pub use channel::{NotificationChannel, OutboundRequest};
pub use dispatcher::{Notifier, channels_for};
pub use error::NotifyError;
pub use sign::sign;
