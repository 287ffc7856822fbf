//! Outbound notification delivery for the campus alert relay.
//!
//! - [`PushNotifier`] — best-effort sender used by the alert workflow.
//! - [`PushTransport`] — one HTTP hop to the provider, implemented by
//!   [`PushbulletClient`].
//! - [`PushConfig`] — provider token, endpoint and dispatch channel.

pub mod delivery;

pub use delivery::push::{Push, PushError, PushKind, PushNotifier, PushTarget, PushTransport};
pub use delivery::pushbullet::{PushConfig, PushbulletClient};
