//! Domain building blocks for the campus alert relay.
//!
//! - [`alert`] — activation input validation and the [`AlertRecord`] model.
//! - [`directory`] — static student name and guardian lookups.
//! - [`store`] — the [`AlertStore`] seam and its in-memory implementation.
//! - [`messages`] — notification titles, bodies and map links.

pub mod alert;
pub mod directory;
pub mod error;
pub mod messages;
pub mod store;

pub use alert::{Activation, ActivationRequest, AlertRecord};
pub use directory::StudentDirectory;
pub use error::CoreError;
pub use store::{AlertStore, InMemoryAlertStore};
