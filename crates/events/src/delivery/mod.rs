//! External delivery channels for alert notifications.
//!
//! Push notifications are the only channel: [`push`] holds the payload,
//! transport seam and best-effort notifier, [`pushbullet`] the provider client.

pub mod push;
pub mod pushbullet;
