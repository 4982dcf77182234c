//! Domain layer types for Folkline.
//!
//! This module contains the event records served by search, along with the
//! identifier and country types used to address them.

mod country;
mod event;
mod types;

pub use country::country_code_for_name;
pub use event::Event;
pub use types::{CountryCode, EventId};
