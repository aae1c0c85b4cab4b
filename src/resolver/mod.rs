//! Address label resolution.
//!
//! Combines a reverse geocode with a proximity place search (with one
//! fallback level) and merges the names into a three-line label.

mod lookup;
mod merge;
mod service;

pub use lookup::{AddressResolver, PLACE_FALLBACK_CHAIN};
pub use merge::{merge_label, MAX_LABEL_NAMES};
pub use service::{Geocoder, PlaceSearch};
