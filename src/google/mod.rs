//! Google Maps Geocoding and Places Nearby Search clients.

mod client;
mod response;

pub use client::{GoogleMapsClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use response::{GeocodeResponse, PlacesResponse, ServiceStatus};
